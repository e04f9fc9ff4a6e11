use sea_orm::{DbErr, SqlErr};

/// Classifies constraint violations reported by the database on a write.
///
/// The returned string is the driver's message, which names the violated
/// constraint (e.g. `fk_nutrition_intensity`).
pub trait ConstraintViolation {
    fn unique_violation(&self) -> Option<String>;
    fn foreign_key_violation(&self) -> Option<String>;
}

impl ConstraintViolation for DbErr {
    fn unique_violation(&self) -> Option<String> {
        match self.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(message)) => Some(message),
            _ => None,
        }
    }

    fn foreign_key_violation(&self) -> Option<String> {
        match self.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(message)) => Some(message),
            _ => None,
        }
    }
}
