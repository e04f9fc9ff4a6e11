use tracing::info;

use crate::domain::repository::{UserRepository, WeightRepository};
use crate::domain::types::{Weight, WeightInput};
use crate::error::TrackerServiceError;

// ── ListWeights ──────────────────────────────────────────────────────────────

pub struct ListWeightsUseCase<W: WeightRepository> {
    pub weights: W,
}

impl<W: WeightRepository> ListWeightsUseCase<W> {
    pub async fn execute(&self) -> Result<Vec<Weight>, TrackerServiceError> {
        self.weights.list().await
    }
}

// ── GetWeight ────────────────────────────────────────────────────────────────

pub struct GetWeightUseCase<W: WeightRepository> {
    pub weights: W,
}

impl<W: WeightRepository> GetWeightUseCase<W> {
    pub async fn execute(&self, id: i32) -> Result<Weight, TrackerServiceError> {
        self.weights
            .find_by_id(id)
            .await?
            .ok_or(TrackerServiceError::WeightNotFound)
    }
}

// ── CreateWeight ─────────────────────────────────────────────────────────────

pub struct CreateWeightUseCase<W: WeightRepository, U: UserRepository> {
    pub weights: W,
    pub users: U,
}

impl<W: WeightRepository, U: UserRepository> CreateWeightUseCase<W, U> {
    pub async fn execute(&self, input: WeightInput) -> Result<Weight, TrackerServiceError> {
        let fields = input.validate()?;
        if self.users.find_by_id(fields.user_id).await?.is_none() {
            return Err(TrackerServiceError::InvalidUserId);
        }
        let weight = self.weights.create(&fields).await?;
        info!(weight_id = weight.id, user_id = weight.user_id, "weight created");
        Ok(weight)
    }
}

// ── UpdateWeight ─────────────────────────────────────────────────────────────

pub struct UpdateWeightUseCase<W: WeightRepository> {
    pub weights: W,
}

impl<W: WeightRepository> UpdateWeightUseCase<W> {
    /// The user reference is not pre-checked here; the foreign key rejects an
    /// unknown user id at write time.
    pub async fn execute(
        &self,
        id: i32,
        input: WeightInput,
    ) -> Result<Weight, TrackerServiceError> {
        let fields = input.validate()?;
        if self.weights.find_by_id(id).await?.is_none() {
            return Err(TrackerServiceError::WeightNotFound);
        }
        let updated = self
            .weights
            .update(id, &fields)
            .await?
            .ok_or(TrackerServiceError::WeightNotFound)?;
        info!(weight_id = id, "weight updated");
        Ok(updated)
    }
}

// ── DeleteWeight ─────────────────────────────────────────────────────────────

pub struct DeleteWeightUseCase<W: WeightRepository> {
    pub weights: W,
}

impl<W: WeightRepository> DeleteWeightUseCase<W> {
    pub async fn execute(&self, id: i32) -> Result<(), TrackerServiceError> {
        if !self.weights.delete(id).await? {
            return Err(TrackerServiceError::WeightNotFound);
        }
        info!(weight_id = id, "weight deleted");
        Ok(())
    }
}
