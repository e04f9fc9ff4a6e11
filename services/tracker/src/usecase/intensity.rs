use tracing::info;

use crate::domain::repository::IntensityRepository;
use crate::domain::types::{Intensity, IntensityInput};
use crate::error::TrackerServiceError;

// ── ListIntensities ──────────────────────────────────────────────────────────

pub struct ListIntensitiesUseCase<R: IntensityRepository> {
    pub repo: R,
}

impl<R: IntensityRepository> ListIntensitiesUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Intensity>, TrackerServiceError> {
        self.repo.list().await
    }
}

// ── GetIntensity ─────────────────────────────────────────────────────────────

pub struct GetIntensityUseCase<R: IntensityRepository> {
    pub repo: R,
}

impl<R: IntensityRepository> GetIntensityUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<Intensity, TrackerServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(TrackerServiceError::IntensityNotFound)
    }
}

// ── CreateIntensity ──────────────────────────────────────────────────────────

pub struct CreateIntensityUseCase<R: IntensityRepository> {
    pub repo: R,
}

impl<R: IntensityRepository> CreateIntensityUseCase<R> {
    pub async fn execute(&self, input: IntensityInput) -> Result<Intensity, TrackerServiceError> {
        let fields = input.validate()?;
        if self.repo.find_by_kind(&fields.kind, None).await?.is_some() {
            return Err(TrackerServiceError::IntensityAlreadyExists);
        }
        let intensity = self.repo.create(&fields).await?;
        info!(intensity_id = intensity.id, kind = %intensity.kind, "intensity created");
        Ok(intensity)
    }
}

// ── UpdateIntensity ──────────────────────────────────────────────────────────

pub struct UpdateIntensityUseCase<R: IntensityRepository> {
    pub repo: R,
}

impl<R: IntensityRepository> UpdateIntensityUseCase<R> {
    pub async fn execute(
        &self,
        id: i32,
        input: IntensityInput,
    ) -> Result<Intensity, TrackerServiceError> {
        let fields = input.validate()?;
        if self.repo.find_by_id(id).await?.is_none() {
            return Err(TrackerServiceError::IntensityNotFound);
        }
        if self
            .repo
            .find_by_kind(&fields.kind, Some(id))
            .await?
            .is_some()
        {
            return Err(TrackerServiceError::IntensityAlreadyExists);
        }
        let updated = self
            .repo
            .update(id, &fields)
            .await?
            .ok_or(TrackerServiceError::IntensityNotFound)?;
        info!(intensity_id = id, "intensity updated");
        Ok(updated)
    }
}

// ── DeleteIntensity ──────────────────────────────────────────────────────────

pub struct DeleteIntensityUseCase<R: IntensityRepository> {
    pub repo: R,
}

impl<R: IntensityRepository> DeleteIntensityUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<(), TrackerServiceError> {
        if !self.repo.delete(id).await? {
            return Err(TrackerServiceError::IntensityNotFound);
        }
        info!(intensity_id = id, "intensity deleted");
        Ok(())
    }
}
