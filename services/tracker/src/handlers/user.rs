use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::repository::Store;
use crate::domain::types::{User, UserInput, parse_id};
use crate::error::TrackerServiceError;
use crate::handlers::{MessageResponse, deleted};
use crate::usecase::user::{
    CreateUserUseCase, DeleteUserUseCase, GetUserUseCase, ListUsersUseCase, UpdateUserUseCase,
};

// ── Request / response types ─────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl From<UserRequest> for UserInput {
    fn from(body: UserRequest) -> Self {
        Self {
            name: body.name,
            email: body.email,
            username: body.username,
            password: body.password,
        }
    }
}

/// User as returned over HTTP. The password is never echoed back.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub username: String,
    #[serde(serialize_with = "fittrack_core::serde::to_rfc3339_ms")]
    pub creation_date: DateTime<Utc>,
    #[serde(serialize_with = "fittrack_core::serde::to_rfc3339_ms")]
    pub last_modified_date: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            username: user.username,
            creation_date: user.creation_date,
            last_modified_date: user.last_modified_date,
        }
    }
}

// ── GET /api/users ───────────────────────────────────────────────────────────

pub async fn list_users<S: Store>(
    State(state): State<S>,
) -> Result<Json<Vec<UserResponse>>, TrackerServiceError> {
    let usecase = ListUsersUseCase {
        repo: state.user_repo(),
    };
    let users = usecase.execute().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

// ── GET /api/users/{id} ──────────────────────────────────────────────────────

pub async fn get_user<S: Store>(
    State(state): State<S>,
    Path(id): Path<String>,
) -> Result<Json<UserResponse>, TrackerServiceError> {
    let id = parse_id(&id).ok_or(TrackerServiceError::UserNotFound)?;
    let usecase = GetUserUseCase {
        repo: state.user_repo(),
    };
    Ok(Json(usecase.execute(id).await?.into()))
}

// ── POST /api/users/create-user ──────────────────────────────────────────────

pub async fn create_user<S: Store>(
    State(state): State<S>,
    body: Result<Json<UserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<UserResponse>), TrackerServiceError> {
    let Json(body) = body?;
    let usecase = CreateUserUseCase {
        repo: state.user_repo(),
    };
    let user = usecase.execute(body.into()).await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

// ── PUT /api/users/update-user/{id} ──────────────────────────────────────────

pub async fn update_user<S: Store>(
    State(state): State<S>,
    Path(id): Path<String>,
    body: Result<Json<UserRequest>, JsonRejection>,
) -> Result<Json<UserResponse>, TrackerServiceError> {
    let Json(body) = body?;
    let id = parse_id(&id).ok_or(TrackerServiceError::UserNotFound)?;
    let usecase = UpdateUserUseCase {
        repo: state.user_repo(),
    };
    Ok(Json(usecase.execute(id, body.into()).await?.into()))
}

// ── DELETE /api/users/delete-user/{id} ───────────────────────────────────────

pub async fn delete_user<S: Store>(
    State(state): State<S>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, TrackerServiceError> {
    let id = parse_id(&id).ok_or(TrackerServiceError::UserNotFound)?;
    let usecase = DeleteUserUseCase {
        repo: state.user_repo(),
    };
    usecase.execute(id).await?;
    Ok(deleted("User"))
}
