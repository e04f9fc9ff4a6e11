use anyhow::Context as _;
use sea_orm::DatabaseConnection;

use crate::domain::repository::Store;
use crate::error::TrackerServiceError;
use crate::infra::db::{
    DbIntensityRepository, DbNutritionRepository, DbUserRepository, DbWeightRepository,
};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl Store for AppState {
    type Users = DbUserRepository;
    type Weights = DbWeightRepository;
    type Nutrition = DbNutritionRepository;
    type Intensities = DbIntensityRepository;

    fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    fn weight_repo(&self) -> DbWeightRepository {
        DbWeightRepository {
            db: self.db.clone(),
        }
    }

    fn nutrition_repo(&self) -> DbNutritionRepository {
        DbNutritionRepository {
            db: self.db.clone(),
        }
    }

    fn intensity_repo(&self) -> DbIntensityRepository {
        DbIntensityRepository {
            db: self.db.clone(),
        }
    }

    async fn ping(&self) -> Result<(), TrackerServiceError> {
        self.db.ping().await.context("ping database")?;
        Ok(())
    }
}
