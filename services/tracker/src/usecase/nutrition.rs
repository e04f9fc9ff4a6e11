use tracing::info;

use crate::domain::repository::{IntensityRepository, NutritionRepository, UserRepository};
use crate::domain::types::{Nutrition, NutritionInput};
use crate::error::TrackerServiceError;

// ── ListNutrition ────────────────────────────────────────────────────────────

pub struct ListNutritionUseCase<N: NutritionRepository> {
    pub nutrition: N,
}

impl<N: NutritionRepository> ListNutritionUseCase<N> {
    pub async fn execute(&self) -> Result<Vec<Nutrition>, TrackerServiceError> {
        self.nutrition.list().await
    }
}

// ── GetNutrition ─────────────────────────────────────────────────────────────

pub struct GetNutritionUseCase<N: NutritionRepository> {
    pub nutrition: N,
}

impl<N: NutritionRepository> GetNutritionUseCase<N> {
    pub async fn execute(&self, id: i32) -> Result<Nutrition, TrackerServiceError> {
        self.nutrition
            .find_by_id(id)
            .await?
            .ok_or(TrackerServiceError::NutritionNotFound)
    }
}

// ── CreateNutrition ──────────────────────────────────────────────────────────

pub struct CreateNutritionUseCase<N, U, I>
where
    N: NutritionRepository,
    U: UserRepository,
    I: IntensityRepository,
{
    pub nutrition: N,
    pub users: U,
    pub intensities: I,
}

impl<N, U, I> CreateNutritionUseCase<N, U, I>
where
    N: NutritionRepository,
    U: UserRepository,
    I: IntensityRepository,
{
    /// Checks run in a fixed order: user, intensity, then date format.
    pub async fn execute(&self, input: NutritionInput) -> Result<Nutrition, TrackerServiceError> {
        let draft = input.validate()?;
        if self.users.find_by_id(draft.user_id).await?.is_none() {
            return Err(TrackerServiceError::InvalidUserId);
        }
        if self
            .intensities
            .find_by_id(draft.intensity_id)
            .await?
            .is_none()
        {
            return Err(TrackerServiceError::InvalidIntensityId);
        }
        let fields = draft.into_fields()?;
        let nutrition = self.nutrition.create(&fields).await?;
        info!(
            nutrition_id = nutrition.id,
            user_id = nutrition.user_id,
            "nutrition created"
        );
        Ok(nutrition)
    }
}

// ── UpdateNutrition ──────────────────────────────────────────────────────────

pub struct UpdateNutritionUseCase<N: NutritionRepository> {
    pub nutrition: N,
}

impl<N: NutritionRepository> UpdateNutritionUseCase<N> {
    pub async fn execute(
        &self,
        id: i32,
        input: NutritionInput,
    ) -> Result<Nutrition, TrackerServiceError> {
        let draft = input.validate()?;
        if self.nutrition.find_by_id(id).await?.is_none() {
            return Err(TrackerServiceError::NutritionNotFound);
        }
        let fields = draft.into_fields()?;
        let updated = self
            .nutrition
            .update(id, &fields)
            .await?
            .ok_or(TrackerServiceError::NutritionNotFound)?;
        info!(nutrition_id = id, "nutrition updated");
        Ok(updated)
    }
}

// ── DeleteNutrition ──────────────────────────────────────────────────────────

pub struct DeleteNutritionUseCase<N: NutritionRepository> {
    pub nutrition: N,
}

impl<N: NutritionRepository> DeleteNutritionUseCase<N> {
    pub async fn execute(&self, id: i32) -> Result<(), TrackerServiceError> {
        if !self.nutrition.delete(id).await? {
            return Err(TrackerServiceError::NutritionNotFound);
        }
        info!(nutrition_id = id, "nutrition deleted");
        Ok(())
    }
}
