use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use validator::ValidateEmail;

use crate::error::TrackerServiceError;

pub const USER_NAME_MAX: usize = 30;
pub const USER_EMAIL_MAX: usize = 50;
pub const USER_USERNAME_MAX: usize = 30;
pub const USER_PASSWORD_MAX: usize = 30;
pub const INTENSITY_TYPE_MAX: usize = 10;
/// Largest magnitude a `DECIMAL(10,2)` weight column holds.
// Equals `Decimal::new(9_999_999_999, 2)`; `new` is not `const`, so use raw parts.
pub const WEIGHT_MAX: Decimal = Decimal::from_parts(0x540B_E3FF, 2, 0, false, 2);

/// Registered user.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub username: String,
    pub password: String,
    pub creation_date: DateTime<Utc>,
    pub last_modified_date: DateTime<Utc>,
}

/// A body-weight measurement.
#[derive(Debug, Clone)]
pub struct Weight {
    pub id: i32,
    pub weight: Decimal,
    pub user_id: i32,
    pub creation_date: DateTime<Utc>,
}

/// A nutrition entry linking a user to an intensity level at a point in time.
#[derive(Debug, Clone)]
pub struct Nutrition {
    pub id: i32,
    pub date: DateTime<Utc>,
    pub user_id: i32,
    pub intensity_id: i32,
    pub creation_date: DateTime<Utc>,
    pub last_modified_date: DateTime<Utc>,
}

/// Intensity level lookup entry.
#[derive(Debug, Clone)]
pub struct Intensity {
    pub id: i32,
    pub kind: String,
    pub value: i32,
}

// ── Validated field sets written by create/update ───────────────────────────

#[derive(Debug, Clone)]
pub struct UserFields {
    pub name: String,
    pub email: String,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct WeightFields {
    pub weight: Decimal,
    pub user_id: i32,
}

#[derive(Debug, Clone)]
pub struct NutritionFields {
    pub date: DateTime<Utc>,
    pub user_id: i32,
    pub intensity_id: i32,
}

#[derive(Debug, Clone)]
pub struct IntensityFields {
    pub kind: String,
    pub value: i32,
}

// ── Raw payloads ─────────────────────────────────────────────────────────────

/// User payload as received. `None` means the field was not provided.
#[derive(Debug, Clone, Default)]
pub struct UserInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl UserInput {
    pub fn validate(self) -> Result<UserFields, TrackerServiceError> {
        let (Some(name), Some(email), Some(username), Some(password)) = (
            present(self.name),
            present(self.email),
            present(self.username),
            present(self.password),
        ) else {
            return Err(TrackerServiceError::MissingFields);
        };
        check_len("name", &name, USER_NAME_MAX)?;
        check_len("email", &email, USER_EMAIL_MAX)?;
        check_len("username", &username, USER_USERNAME_MAX)?;
        check_len("password", &password, USER_PASSWORD_MAX)?;
        if !email.as_str().validate_email() || !has_dotted_domain(&email) {
            return Err(TrackerServiceError::InvalidEmail);
        }
        Ok(UserFields {
            name,
            email,
            username,
            password,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct WeightInput {
    pub weight: Option<Decimal>,
    pub user_id: Option<i32>,
}

impl WeightInput {
    /// Weight is stored with two fractional digits.
    pub fn validate(self) -> Result<WeightFields, TrackerServiceError> {
        let (Some(weight), Some(user_id)) = (self.weight, self.user_id) else {
            return Err(TrackerServiceError::MissingFields);
        };
        let weight = weight.round_dp(2);
        if weight.abs() > WEIGHT_MAX {
            return Err(TrackerServiceError::WeightOutOfRange);
        }
        Ok(WeightFields { weight, user_id })
    }
}

#[derive(Debug, Clone, Default)]
pub struct NutritionInput {
    pub date: Option<String>,
    pub user_id: Option<i32>,
    pub intensity_id: Option<i32>,
}

/// Nutrition payload with every field present but the date still unparsed,
/// so reference checks can run before the date is judged.
#[derive(Debug, Clone)]
pub struct NutritionDraft {
    pub date: String,
    pub user_id: i32,
    pub intensity_id: i32,
}

impl NutritionInput {
    pub fn validate(self) -> Result<NutritionDraft, TrackerServiceError> {
        let (Some(date), Some(user_id), Some(intensity_id)) =
            (present(self.date), self.user_id, self.intensity_id)
        else {
            return Err(TrackerServiceError::MissingFields);
        };
        Ok(NutritionDraft {
            date,
            user_id,
            intensity_id,
        })
    }
}

impl NutritionDraft {
    pub fn into_fields(self) -> Result<NutritionFields, TrackerServiceError> {
        let date = parse_timestamp(&self.date).ok_or(TrackerServiceError::InvalidDate)?;
        Ok(NutritionFields {
            date,
            user_id: self.user_id,
            intensity_id: self.intensity_id,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct IntensityInput {
    pub kind: Option<String>,
    pub value: Option<i32>,
}

impl IntensityInput {
    pub fn validate(self) -> Result<IntensityFields, TrackerServiceError> {
        let (Some(kind), Some(value)) = (present(self.kind), self.value) else {
            return Err(TrackerServiceError::MissingFields);
        };
        check_len("type", &kind, INTENSITY_TYPE_MAX)?;
        Ok(IntensityFields { kind, value })
    }
}

// ── Helpers ──────────────────────────────────────────────────────────────────

/// Blank strings count as not provided.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// The domain part must contain a dot with a label on each side.
fn has_dotted_domain(email: &str) -> bool {
    email.rsplit_once('@').is_some_and(|(_, domain)| {
        domain
            .split_once('.')
            .is_some_and(|(head, tail)| !head.is_empty() && !tail.is_empty())
            && !domain.ends_with('.')
    })
}

fn check_len(field: &'static str, value: &str, max: usize) -> Result<(), TrackerServiceError> {
    if value.chars().count() > max {
        return Err(TrackerServiceError::FieldTooLong { field, max });
    }
    Ok(())
}

/// Parse a record id taken from the request path. Anything that is not an
/// integer addresses no record.
pub fn parse_id(raw: &str) -> Option<i32> {
    raw.parse().ok()
}

/// Parse a calendar timestamp. Accepts RFC 3339, naive date-times (read as
/// UTC) and plain `YYYY-MM-DD` dates (midnight UTC).
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
