use tracing::info;

use crate::domain::repository::UserRepository;
use crate::domain::types::{User, UserInput};
use crate::error::TrackerServiceError;

// ── ListUsers ────────────────────────────────────────────────────────────────

pub struct ListUsersUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> ListUsersUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<User>, TrackerServiceError> {
        self.repo.list().await
    }
}

// ── GetUser ──────────────────────────────────────────────────────────────────

pub struct GetUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> GetUserUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<User, TrackerServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(TrackerServiceError::UserNotFound)
    }
}

// ── CreateUser ───────────────────────────────────────────────────────────────

pub struct CreateUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> CreateUserUseCase<R> {
    pub async fn execute(&self, input: UserInput) -> Result<User, TrackerServiceError> {
        let fields = input.validate()?;
        let existing = self
            .repo
            .find_conflicting(&fields.email, &fields.username, None)
            .await?;
        if existing.is_some() {
            return Err(TrackerServiceError::UserAlreadyExists);
        }
        let user = self.repo.create(&fields).await?;
        info!(user_id = user.id, "user created");
        Ok(user)
    }
}

// ── UpdateUser ───────────────────────────────────────────────────────────────

pub struct UpdateUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> UpdateUserUseCase<R> {
    pub async fn execute(&self, id: i32, input: UserInput) -> Result<User, TrackerServiceError> {
        let fields = input.validate()?;
        if self.repo.find_by_id(id).await?.is_none() {
            return Err(TrackerServiceError::UserNotFound);
        }
        let existing = self
            .repo
            .find_conflicting(&fields.email, &fields.username, Some(id))
            .await?;
        if existing.is_some() {
            return Err(TrackerServiceError::UserAlreadyExists);
        }
        let updated = self
            .repo
            .update(id, &fields)
            .await?
            .ok_or(TrackerServiceError::UserNotFound)?;
        info!(user_id = id, "user updated");
        Ok(updated)
    }
}

// ── DeleteUser ───────────────────────────────────────────────────────────────

pub struct DeleteUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> DeleteUserUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<(), TrackerServiceError> {
        if !self.repo.delete(id).await? {
            return Err(TrackerServiceError::UserNotFound);
        }
        info!(user_id = id, "user deleted");
        Ok(())
    }
}
