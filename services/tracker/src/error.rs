use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Tracker service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum TrackerServiceError {
    #[error("Missing required fields")]
    MissingFields,
    #[error("Invalid request body")]
    InvalidBody,
    #[error("Please provide a valid email address")]
    InvalidEmail,
    #[error("{field} must be at most {max} characters")]
    FieldTooLong { field: &'static str, max: usize },
    #[error("Invalid date format")]
    InvalidDate,
    #[error("weight must be at most 99999999.99")]
    WeightOutOfRange,
    #[error("Invalid User Id")]
    InvalidUserId,
    #[error("Invalid Intensity Id")]
    InvalidIntensityId,
    #[error("User not found")]
    UserNotFound,
    #[error("Weight not found")]
    WeightNotFound,
    #[error("Nutrition not found")]
    NutritionNotFound,
    #[error("Intensity not found")]
    IntensityNotFound,
    #[error("User already exists")]
    UserAlreadyExists,
    #[error("Intensity already exists")]
    IntensityAlreadyExists,
    #[error("Intensity is referenced by nutrition entries")]
    IntensityInUse,
    #[error("Internal Server Error")]
    Internal(#[from] anyhow::Error),
}

impl TrackerServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingFields => "MISSING_FIELDS",
            Self::InvalidBody => "INVALID_BODY",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::FieldTooLong { .. } => "FIELD_TOO_LONG",
            Self::InvalidDate => "INVALID_DATE",
            Self::WeightOutOfRange => "WEIGHT_OUT_OF_RANGE",
            Self::InvalidUserId => "INVALID_USER_ID",
            Self::InvalidIntensityId => "INVALID_INTENSITY_ID",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::WeightNotFound => "WEIGHT_NOT_FOUND",
            Self::NutritionNotFound => "NUTRITION_NOT_FOUND",
            Self::IntensityNotFound => "INTENSITY_NOT_FOUND",
            Self::UserAlreadyExists => "USER_ALREADY_EXISTS",
            Self::IntensityAlreadyExists => "INTENSITY_ALREADY_EXISTS",
            Self::IntensityInUse => "INTENSITY_IN_USE",
            Self::Internal(_) => "INTERNAL",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingFields
            | Self::InvalidBody
            | Self::InvalidEmail
            | Self::FieldTooLong { .. }
            | Self::InvalidDate
            | Self::WeightOutOfRange
            | Self::InvalidUserId
            | Self::InvalidIntensityId => StatusCode::BAD_REQUEST,
            Self::UserNotFound
            | Self::WeightNotFound
            | Self::NutritionNotFound
            | Self::IntensityNotFound => StatusCode::NOT_FOUND,
            Self::UserAlreadyExists | Self::IntensityAlreadyExists | Self::IntensityInUse => {
                StatusCode::CONFLICT
            }
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// A well-formed JSON body with a wrongly typed field counts as a missing
/// field; anything that is not a JSON body at all is rejected as such.
impl From<JsonRejection> for TrackerServiceError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(error = %rejection, "rejected request body");
        match rejection {
            JsonRejection::JsonDataError(_) => Self::MissingFields,
            _ => Self::InvalidBody,
        }
    }
}

impl IntoResponse for TrackerServiceError {
    fn into_response(self) -> Response {
        let status = self.status();
        // Log 500s only; TraceLayer already records method/uri/status for every
        // request. The anyhow chain carries the root cause.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %format!("{e:#}"), kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
