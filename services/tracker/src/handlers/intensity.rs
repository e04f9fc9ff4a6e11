use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use crate::domain::repository::Store;
use crate::domain::types::{Intensity, IntensityInput, parse_id};
use crate::error::TrackerServiceError;
use crate::handlers::{MessageResponse, deleted};
use crate::usecase::intensity::{
    CreateIntensityUseCase, DeleteIntensityUseCase, GetIntensityUseCase, ListIntensitiesUseCase,
    UpdateIntensityUseCase,
};

// ── Request / response types ─────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct IntensityRequest {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub value: Option<i32>,
}

impl From<IntensityRequest> for IntensityInput {
    fn from(body: IntensityRequest) -> Self {
        Self {
            kind: body.kind,
            value: body.value,
        }
    }
}

#[derive(Serialize)]
pub struct IntensityResponse {
    pub id: i32,
    #[serde(rename = "type")]
    pub kind: String,
    pub value: i32,
}

impl From<Intensity> for IntensityResponse {
    fn from(intensity: Intensity) -> Self {
        Self {
            id: intensity.id,
            kind: intensity.kind,
            value: intensity.value,
        }
    }
}

// ── GET /api/intensity ───────────────────────────────────────────────────────

pub async fn list_intensities<S: Store>(
    State(state): State<S>,
) -> Result<Json<Vec<IntensityResponse>>, TrackerServiceError> {
    let usecase = ListIntensitiesUseCase {
        repo: state.intensity_repo(),
    };
    let intensities = usecase.execute().await?;
    Ok(Json(
        intensities
            .into_iter()
            .map(IntensityResponse::from)
            .collect(),
    ))
}

// ── GET /api/intensity/{id} ──────────────────────────────────────────────────

pub async fn get_intensity<S: Store>(
    State(state): State<S>,
    Path(id): Path<String>,
) -> Result<Json<IntensityResponse>, TrackerServiceError> {
    let id = parse_id(&id).ok_or(TrackerServiceError::IntensityNotFound)?;
    let usecase = GetIntensityUseCase {
        repo: state.intensity_repo(),
    };
    Ok(Json(usecase.execute(id).await?.into()))
}

// ── POST /api/intensity/create-intensity ─────────────────────────────────────

pub async fn create_intensity<S: Store>(
    State(state): State<S>,
    body: Result<Json<IntensityRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<IntensityResponse>), TrackerServiceError> {
    let Json(body) = body?;
    let usecase = CreateIntensityUseCase {
        repo: state.intensity_repo(),
    };
    let intensity = usecase.execute(body.into()).await?;
    Ok((StatusCode::CREATED, Json(intensity.into())))
}

// ── PUT /api/intensity/update-intensity/{id} ─────────────────────────────────

pub async fn update_intensity<S: Store>(
    State(state): State<S>,
    Path(id): Path<String>,
    body: Result<Json<IntensityRequest>, JsonRejection>,
) -> Result<Json<IntensityResponse>, TrackerServiceError> {
    let Json(body) = body?;
    let id = parse_id(&id).ok_or(TrackerServiceError::IntensityNotFound)?;
    let usecase = UpdateIntensityUseCase {
        repo: state.intensity_repo(),
    };
    Ok(Json(usecase.execute(id, body.into()).await?.into()))
}

// ── DELETE /api/intensity/delete-intensity/{id} ──────────────────────────────

pub async fn delete_intensity<S: Store>(
    State(state): State<S>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, TrackerServiceError> {
    let id = parse_id(&id).ok_or(TrackerServiceError::IntensityNotFound)?;
    let usecase = DeleteIntensityUseCase {
        repo: state.intensity_repo(),
    };
    usecase.execute(id).await?;
    Ok(deleted("Intensity"))
}
