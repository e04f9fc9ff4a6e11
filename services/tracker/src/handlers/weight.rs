use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::repository::Store;
use crate::domain::types::{Weight, WeightInput, parse_id};
use crate::error::TrackerServiceError;
use crate::handlers::{MessageResponse, deleted};
use crate::usecase::weight::{
    CreateWeightUseCase, DeleteWeightUseCase, GetWeightUseCase, ListWeightsUseCase,
    UpdateWeightUseCase,
};

// ── Request / response types ─────────────────────────────────────────────────

/// `weight` accepts a JSON number or a numeric string.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightRequest {
    pub weight: Option<Decimal>,
    pub user_id: Option<i32>,
}

impl From<WeightRequest> for WeightInput {
    fn from(body: WeightRequest) -> Self {
        Self {
            weight: body.weight,
            user_id: body.user_id,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightResponse {
    pub id: i32,
    #[serde(serialize_with = "fittrack_core::serde::to_fixed_2dp")]
    pub weight: Decimal,
    pub user_id: i32,
    #[serde(serialize_with = "fittrack_core::serde::to_rfc3339_ms")]
    pub creation_date: DateTime<Utc>,
}

impl From<Weight> for WeightResponse {
    fn from(weight: Weight) -> Self {
        Self {
            id: weight.id,
            weight: weight.weight,
            user_id: weight.user_id,
            creation_date: weight.creation_date,
        }
    }
}

// ── GET /api/weight ──────────────────────────────────────────────────────────

pub async fn list_weights<S: Store>(
    State(state): State<S>,
) -> Result<Json<Vec<WeightResponse>>, TrackerServiceError> {
    let usecase = ListWeightsUseCase {
        weights: state.weight_repo(),
    };
    let weights = usecase.execute().await?;
    Ok(Json(weights.into_iter().map(WeightResponse::from).collect()))
}

// ── GET /api/weight/{id} ─────────────────────────────────────────────────────

pub async fn get_weight<S: Store>(
    State(state): State<S>,
    Path(id): Path<String>,
) -> Result<Json<WeightResponse>, TrackerServiceError> {
    let id = parse_id(&id).ok_or(TrackerServiceError::WeightNotFound)?;
    let usecase = GetWeightUseCase {
        weights: state.weight_repo(),
    };
    Ok(Json(usecase.execute(id).await?.into()))
}

// ── POST /api/weight/create-weight ───────────────────────────────────────────

pub async fn create_weight<S: Store>(
    State(state): State<S>,
    body: Result<Json<WeightRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<WeightResponse>), TrackerServiceError> {
    let Json(body) = body?;
    let usecase = CreateWeightUseCase {
        weights: state.weight_repo(),
        users: state.user_repo(),
    };
    let weight = usecase.execute(body.into()).await?;
    Ok((StatusCode::CREATED, Json(weight.into())))
}

// ── PUT /api/weight/update-weight/{id} ───────────────────────────────────────

pub async fn update_weight<S: Store>(
    State(state): State<S>,
    Path(id): Path<String>,
    body: Result<Json<WeightRequest>, JsonRejection>,
) -> Result<Json<WeightResponse>, TrackerServiceError> {
    let Json(body) = body?;
    let id = parse_id(&id).ok_or(TrackerServiceError::WeightNotFound)?;
    let usecase = UpdateWeightUseCase {
        weights: state.weight_repo(),
    };
    Ok(Json(usecase.execute(id, body.into()).await?.into()))
}

// ── DELETE /api/weight/delete-weight/{id} ────────────────────────────────────

pub async fn delete_weight<S: Store>(
    State(state): State<S>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, TrackerServiceError> {
    let id = parse_id(&id).ok_or(TrackerServiceError::WeightNotFound)?;
    let usecase = DeleteWeightUseCase {
        weights: state.weight_repo(),
    };
    usecase.execute(id).await?;
    Ok(deleted("Weight"))
}
