use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::repository::Store;
use crate::domain::types::{Nutrition, NutritionInput, parse_id};
use crate::error::TrackerServiceError;
use crate::handlers::{MessageResponse, deleted};
use crate::usecase::nutrition::{
    CreateNutritionUseCase, DeleteNutritionUseCase, GetNutritionUseCase, ListNutritionUseCase,
    UpdateNutritionUseCase,
};

// ── Request / response types ─────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionRequest {
    pub date: Option<String>,
    pub user_id: Option<i32>,
    pub intensity_id: Option<i32>,
}

impl From<NutritionRequest> for NutritionInput {
    fn from(body: NutritionRequest) -> Self {
        Self {
            date: body.date,
            user_id: body.user_id,
            intensity_id: body.intensity_id,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionResponse {
    pub id: i32,
    #[serde(serialize_with = "fittrack_core::serde::to_rfc3339_ms")]
    pub date: DateTime<Utc>,
    pub user_id: i32,
    pub intensity_id: i32,
    #[serde(serialize_with = "fittrack_core::serde::to_rfc3339_ms")]
    pub creation_date: DateTime<Utc>,
    #[serde(serialize_with = "fittrack_core::serde::to_rfc3339_ms")]
    pub last_modified_date: DateTime<Utc>,
}

impl From<Nutrition> for NutritionResponse {
    fn from(nutrition: Nutrition) -> Self {
        Self {
            id: nutrition.id,
            date: nutrition.date,
            user_id: nutrition.user_id,
            intensity_id: nutrition.intensity_id,
            creation_date: nutrition.creation_date,
            last_modified_date: nutrition.last_modified_date,
        }
    }
}

// ── GET /api/nutrition ───────────────────────────────────────────────────────

pub async fn list_nutrition<S: Store>(
    State(state): State<S>,
) -> Result<Json<Vec<NutritionResponse>>, TrackerServiceError> {
    let usecase = ListNutritionUseCase {
        nutrition: state.nutrition_repo(),
    };
    let entries = usecase.execute().await?;
    Ok(Json(
        entries.into_iter().map(NutritionResponse::from).collect(),
    ))
}

// ── GET /api/nutrition/{id} ──────────────────────────────────────────────────

pub async fn get_nutrition<S: Store>(
    State(state): State<S>,
    Path(id): Path<String>,
) -> Result<Json<NutritionResponse>, TrackerServiceError> {
    let id = parse_id(&id).ok_or(TrackerServiceError::NutritionNotFound)?;
    let usecase = GetNutritionUseCase {
        nutrition: state.nutrition_repo(),
    };
    Ok(Json(usecase.execute(id).await?.into()))
}

// ── POST /api/nutrition/create-nutrition ─────────────────────────────────────

pub async fn create_nutrition<S: Store>(
    State(state): State<S>,
    body: Result<Json<NutritionRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<NutritionResponse>), TrackerServiceError> {
    let Json(body) = body?;
    let usecase = CreateNutritionUseCase {
        nutrition: state.nutrition_repo(),
        users: state.user_repo(),
        intensities: state.intensity_repo(),
    };
    let nutrition = usecase.execute(body.into()).await?;
    Ok((StatusCode::CREATED, Json(nutrition.into())))
}

// ── PUT /api/nutrition/update-nutrition/{id} ─────────────────────────────────

pub async fn update_nutrition<S: Store>(
    State(state): State<S>,
    Path(id): Path<String>,
    body: Result<Json<NutritionRequest>, JsonRejection>,
) -> Result<Json<NutritionResponse>, TrackerServiceError> {
    let Json(body) = body?;
    let id = parse_id(&id).ok_or(TrackerServiceError::NutritionNotFound)?;
    let usecase = UpdateNutritionUseCase {
        nutrition: state.nutrition_repo(),
    };
    Ok(Json(usecase.execute(id, body.into()).await?.into()))
}

// ── DELETE /api/nutrition/delete-nutrition/{id} ──────────────────────────────

pub async fn delete_nutrition<S: Store>(
    State(state): State<S>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, TrackerServiceError> {
    let id = parse_id(&id).ok_or(TrackerServiceError::NutritionNotFound)?;
    let usecase = DeleteNutritionUseCase {
        nutrition: state.nutrition_repo(),
    };
    usecase.execute(id).await?;
    Ok(deleted("Nutrition"))
}
