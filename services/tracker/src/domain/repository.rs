use std::future::Future;

use crate::domain::types::{
    Intensity, IntensityFields, Nutrition, NutritionFields, User, UserFields, Weight,
    WeightFields,
};
use crate::error::TrackerServiceError;

// Repository futures are spelled out as `impl Future + Send` so handlers that
// are generic over `Store` still produce `Send` futures for axum.

/// Repository for users.
pub trait UserRepository: Send + Sync {
    fn list(&self) -> impl Future<Output = Result<Vec<User>, TrackerServiceError>> + Send;

    fn find_by_id(
        &self,
        id: i32,
    ) -> impl Future<Output = Result<Option<User>, TrackerServiceError>> + Send;

    /// Find a user whose email or username matches, skipping `exclude_id`.
    fn find_conflicting(
        &self,
        email: &str,
        username: &str,
        exclude_id: Option<i32>,
    ) -> impl Future<Output = Result<Option<User>, TrackerServiceError>> + Send;

    fn create(
        &self,
        fields: &UserFields,
    ) -> impl Future<Output = Result<User, TrackerServiceError>> + Send;

    /// Overwrite a user and return the stored row, or `None` if no row had
    /// that id.
    fn update(
        &self,
        id: i32,
        fields: &UserFields,
    ) -> impl Future<Output = Result<Option<User>, TrackerServiceError>> + Send;

    /// Delete a user. Returns `true` if a row was deleted.
    fn delete(&self, id: i32) -> impl Future<Output = Result<bool, TrackerServiceError>> + Send;
}

/// Repository for weight entries.
pub trait WeightRepository: Send + Sync {
    fn list(&self) -> impl Future<Output = Result<Vec<Weight>, TrackerServiceError>> + Send;

    fn find_by_id(
        &self,
        id: i32,
    ) -> impl Future<Output = Result<Option<Weight>, TrackerServiceError>> + Send;

    fn create(
        &self,
        fields: &WeightFields,
    ) -> impl Future<Output = Result<Weight, TrackerServiceError>> + Send;

    /// Overwrite a weight entry and return the stored row, or `None` if no row had
    /// that id.
    fn update(
        &self,
        id: i32,
        fields: &WeightFields,
    ) -> impl Future<Output = Result<Option<Weight>, TrackerServiceError>> + Send;

    /// Delete a weight entry. Returns `true` if a row was deleted.
    fn delete(&self, id: i32) -> impl Future<Output = Result<bool, TrackerServiceError>> + Send;
}

/// Repository for nutrition entries.
pub trait NutritionRepository: Send + Sync {
    fn list(&self) -> impl Future<Output = Result<Vec<Nutrition>, TrackerServiceError>> + Send;

    fn find_by_id(
        &self,
        id: i32,
    ) -> impl Future<Output = Result<Option<Nutrition>, TrackerServiceError>> + Send;

    fn create(
        &self,
        fields: &NutritionFields,
    ) -> impl Future<Output = Result<Nutrition, TrackerServiceError>> + Send;

    /// Overwrite a nutrition entry and return the stored row, or `None` if no row had
    /// that id.
    fn update(
        &self,
        id: i32,
        fields: &NutritionFields,
    ) -> impl Future<Output = Result<Option<Nutrition>, TrackerServiceError>> + Send;

    /// Delete a nutrition entry. Returns `true` if a row was deleted.
    fn delete(&self, id: i32) -> impl Future<Output = Result<bool, TrackerServiceError>> + Send;
}

/// Repository for intensity levels.
pub trait IntensityRepository: Send + Sync {
    fn list(&self) -> impl Future<Output = Result<Vec<Intensity>, TrackerServiceError>> + Send;

    fn find_by_id(
        &self,
        id: i32,
    ) -> impl Future<Output = Result<Option<Intensity>, TrackerServiceError>> + Send;

    /// Find an intensity with the given type, skipping `exclude_id`.
    fn find_by_kind(
        &self,
        kind: &str,
        exclude_id: Option<i32>,
    ) -> impl Future<Output = Result<Option<Intensity>, TrackerServiceError>> + Send;

    fn create(
        &self,
        fields: &IntensityFields,
    ) -> impl Future<Output = Result<Intensity, TrackerServiceError>> + Send;

    /// Overwrite an intensity and return the stored row, or `None` if no row had
    /// that id.
    fn update(
        &self,
        id: i32,
        fields: &IntensityFields,
    ) -> impl Future<Output = Result<Option<Intensity>, TrackerServiceError>> + Send;

    /// Delete an intensity. Returns `true` if a row was deleted.
    fn delete(&self, id: i32) -> impl Future<Output = Result<bool, TrackerServiceError>> + Send;
}

/// Storage capability handed to every handler through axum `State`.
pub trait Store: Clone + Send + Sync + 'static {
    type Users: UserRepository;
    type Weights: WeightRepository;
    type Nutrition: NutritionRepository;
    type Intensities: IntensityRepository;

    fn user_repo(&self) -> Self::Users;
    fn weight_repo(&self) -> Self::Weights;
    fn nutrition_repo(&self) -> Self::Nutrition;
    fn intensity_repo(&self) -> Self::Intensities;

    /// Check that the backing storage answers.
    fn ping(&self) -> impl Future<Output = Result<(), TrackerServiceError>> + Send;
}
