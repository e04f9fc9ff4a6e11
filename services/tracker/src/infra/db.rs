use anyhow::Context as _;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use fittrack_core::sea_ext::ConstraintViolation;
use fittrack_tracker_schema::{intensity, nutrition, users, weight};

use crate::domain::repository::{
    IntensityRepository, NutritionRepository, UserRepository, WeightRepository,
};
use crate::domain::types::{
    Intensity, IntensityFields, Nutrition, NutritionFields, User, UserFields, Weight,
    WeightFields,
};
use crate::error::TrackerServiceError;

// Write paths map constraint violations to the same errors the use-case
// pre-checks produce.

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn list(&self) -> Result<Vec<User>, TrackerServiceError> {
        let models = users::Entity::find()
            .order_by_asc(users::Column::Id)
            .all(&self.db)
            .await
            .context("list users")?;
        Ok(models.into_iter().map(user_from_model).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, TrackerServiceError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        Ok(model.map(user_from_model))
    }

    async fn find_conflicting(
        &self,
        email: &str,
        username: &str,
        exclude_id: Option<i32>,
    ) -> Result<Option<User>, TrackerServiceError> {
        let mut query = users::Entity::find().filter(
            Condition::any()
                .add(users::Column::Email.eq(email))
                .add(users::Column::Username.eq(username)),
        );
        if let Some(id) = exclude_id {
            query = query.filter(users::Column::Id.ne(id));
        }
        let model = query
            .one(&self.db)
            .await
            .context("find user by email or username")?;
        Ok(model.map(user_from_model))
    }

    async fn create(&self, fields: &UserFields) -> Result<User, TrackerServiceError> {
        let now = Utc::now();
        let model = users::ActiveModel {
            name: Set(fields.name.clone()),
            email: Set(fields.email.clone()),
            username: Set(fields.username.clone()),
            password: Set(fields.password.clone()),
            creation_date: Set(now),
            last_modified_date: Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| user_write_error(e, "create user"))?;
        Ok(user_from_model(model))
    }

    async fn update(
        &self,
        id: i32,
        fields: &UserFields,
    ) -> Result<Option<User>, TrackerServiceError> {
        let changes = users::ActiveModel {
            name: Set(fields.name.clone()),
            email: Set(fields.email.clone()),
            username: Set(fields.username.clone()),
            password: Set(fields.password.clone()),
            last_modified_date: Set(Utc::now()),
            ..Default::default()
        };
        let models = users::Entity::update_many()
            .set(changes)
            .filter(users::Column::Id.eq(id))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| user_write_error(e, "update user"))?;
        Ok(models.into_iter().next().map(user_from_model))
    }

    async fn delete(&self, id: i32) -> Result<bool, TrackerServiceError> {
        let result = users::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete user")?;
        Ok(result.rows_affected > 0)
    }
}

fn user_write_error(err: DbErr, action: &'static str) -> TrackerServiceError {
    if err.unique_violation().is_some() {
        return TrackerServiceError::UserAlreadyExists;
    }
    TrackerServiceError::Internal(anyhow::Error::new(err).context(action))
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: model.id,
        name: model.name,
        email: model.email,
        username: model.username,
        password: model.password,
        creation_date: model.creation_date,
        last_modified_date: model.last_modified_date,
    }
}

// ── Weight repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbWeightRepository {
    pub db: DatabaseConnection,
}

impl WeightRepository for DbWeightRepository {
    async fn list(&self) -> Result<Vec<Weight>, TrackerServiceError> {
        let models = weight::Entity::find()
            .order_by_asc(weight::Column::Id)
            .all(&self.db)
            .await
            .context("list weights")?;
        Ok(models.into_iter().map(weight_from_model).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Weight>, TrackerServiceError> {
        let model = weight::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find weight by id")?;
        Ok(model.map(weight_from_model))
    }

    async fn create(&self, fields: &WeightFields) -> Result<Weight, TrackerServiceError> {
        let model = weight::ActiveModel {
            weight: Set(fields.weight),
            user_id: Set(fields.user_id),
            creation_date: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| weight_write_error(e, "create weight"))?;
        Ok(weight_from_model(model))
    }

    async fn update(
        &self,
        id: i32,
        fields: &WeightFields,
    ) -> Result<Option<Weight>, TrackerServiceError> {
        let changes = weight::ActiveModel {
            weight: Set(fields.weight),
            user_id: Set(fields.user_id),
            ..Default::default()
        };
        let models = weight::Entity::update_many()
            .set(changes)
            .filter(weight::Column::Id.eq(id))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| weight_write_error(e, "update weight"))?;
        Ok(models.into_iter().next().map(weight_from_model))
    }

    async fn delete(&self, id: i32) -> Result<bool, TrackerServiceError> {
        let result = weight::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete weight")?;
        Ok(result.rows_affected > 0)
    }
}

fn weight_write_error(err: DbErr, action: &'static str) -> TrackerServiceError {
    if err.foreign_key_violation().is_some() {
        return TrackerServiceError::InvalidUserId;
    }
    TrackerServiceError::Internal(anyhow::Error::new(err).context(action))
}

fn weight_from_model(model: weight::Model) -> Weight {
    Weight {
        id: model.id,
        weight: model.weight,
        user_id: model.user_id,
        creation_date: model.creation_date,
    }
}

// ── Nutrition repository ─────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbNutritionRepository {
    pub db: DatabaseConnection,
}

impl NutritionRepository for DbNutritionRepository {
    async fn list(&self) -> Result<Vec<Nutrition>, TrackerServiceError> {
        let models = nutrition::Entity::find()
            .order_by_asc(nutrition::Column::Id)
            .all(&self.db)
            .await
            .context("list nutrition")?;
        Ok(models.into_iter().map(nutrition_from_model).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Nutrition>, TrackerServiceError> {
        let model = nutrition::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find nutrition by id")?;
        Ok(model.map(nutrition_from_model))
    }

    async fn create(&self, fields: &NutritionFields) -> Result<Nutrition, TrackerServiceError> {
        let now = Utc::now();
        let model = nutrition::ActiveModel {
            date: Set(fields.date),
            user_id: Set(fields.user_id),
            intensity_id: Set(fields.intensity_id),
            creation_date: Set(now),
            last_modified_date: Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| nutrition_write_error(e, "create nutrition"))?;
        Ok(nutrition_from_model(model))
    }

    async fn update(
        &self,
        id: i32,
        fields: &NutritionFields,
    ) -> Result<Option<Nutrition>, TrackerServiceError> {
        let changes = nutrition::ActiveModel {
            date: Set(fields.date),
            user_id: Set(fields.user_id),
            intensity_id: Set(fields.intensity_id),
            last_modified_date: Set(Utc::now()),
            ..Default::default()
        };
        let models = nutrition::Entity::update_many()
            .set(changes)
            .filter(nutrition::Column::Id.eq(id))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| nutrition_write_error(e, "update nutrition"))?;
        Ok(models.into_iter().next().map(nutrition_from_model))
    }

    async fn delete(&self, id: i32) -> Result<bool, TrackerServiceError> {
        let result = nutrition::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete nutrition")?;
        Ok(result.rows_affected > 0)
    }
}

fn nutrition_write_error(err: DbErr, action: &'static str) -> TrackerServiceError {
    if let Some(message) = err.foreign_key_violation() {
        // Constraint names come from the create_nutrition migration.
        if message.contains("fk_nutrition_intensity") {
            return TrackerServiceError::InvalidIntensityId;
        }
        return TrackerServiceError::InvalidUserId;
    }
    TrackerServiceError::Internal(anyhow::Error::new(err).context(action))
}

fn nutrition_from_model(model: nutrition::Model) -> Nutrition {
    Nutrition {
        id: model.id,
        date: model.date,
        user_id: model.user_id,
        intensity_id: model.intensity_id,
        creation_date: model.creation_date,
        last_modified_date: model.last_modified_date,
    }
}

// ── Intensity repository ─────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbIntensityRepository {
    pub db: DatabaseConnection,
}

impl IntensityRepository for DbIntensityRepository {
    async fn list(&self) -> Result<Vec<Intensity>, TrackerServiceError> {
        let models = intensity::Entity::find()
            .order_by_asc(intensity::Column::Id)
            .all(&self.db)
            .await
            .context("list intensities")?;
        Ok(models.into_iter().map(intensity_from_model).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Intensity>, TrackerServiceError> {
        let model = intensity::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find intensity by id")?;
        Ok(model.map(intensity_from_model))
    }

    async fn find_by_kind(
        &self,
        kind: &str,
        exclude_id: Option<i32>,
    ) -> Result<Option<Intensity>, TrackerServiceError> {
        let mut query = intensity::Entity::find().filter(intensity::Column::Kind.eq(kind));
        if let Some(id) = exclude_id {
            query = query.filter(intensity::Column::Id.ne(id));
        }
        let model = query
            .one(&self.db)
            .await
            .context("find intensity by type")?;
        Ok(model.map(intensity_from_model))
    }

    async fn create(&self, fields: &IntensityFields) -> Result<Intensity, TrackerServiceError> {
        let model = intensity::ActiveModel {
            kind: Set(fields.kind.clone()),
            value: Set(fields.value),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| intensity_write_error(e, "create intensity"))?;
        Ok(intensity_from_model(model))
    }

    async fn update(
        &self,
        id: i32,
        fields: &IntensityFields,
    ) -> Result<Option<Intensity>, TrackerServiceError> {
        let changes = intensity::ActiveModel {
            kind: Set(fields.kind.clone()),
            value: Set(fields.value),
            ..Default::default()
        };
        let models = intensity::Entity::update_many()
            .set(changes)
            .filter(intensity::Column::Id.eq(id))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| intensity_write_error(e, "update intensity"))?;
        Ok(models.into_iter().next().map(intensity_from_model))
    }

    async fn delete(&self, id: i32) -> Result<bool, TrackerServiceError> {
        let result = intensity::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                if e.foreign_key_violation().is_some() {
                    return TrackerServiceError::IntensityInUse;
                }
                TrackerServiceError::Internal(anyhow::Error::new(e).context("delete intensity"))
            })?;
        Ok(result.rows_affected > 0)
    }
}

fn intensity_write_error(err: DbErr, action: &'static str) -> TrackerServiceError {
    if err.unique_violation().is_some() {
        return TrackerServiceError::IntensityAlreadyExists;
    }
    TrackerServiceError::Internal(anyhow::Error::new(err).context(action))
}

fn intensity_from_model(model: intensity::Model) -> Intensity {
    Intensity {
        id: model.id,
        kind: model.kind,
        value: model.value,
    }
}
