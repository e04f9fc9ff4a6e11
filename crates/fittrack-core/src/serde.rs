// Module name shadows the `serde` crate; use `::serde` for the external crate.
use ::serde::Serializer;
use chrono::{DateTime, SecondsFormat, Utc};
use rust_decimal::Decimal;

/// Serialize `DateTime<Utc>` as RFC 3339 with 3-digit fractional seconds.
pub fn to_rfc3339_ms<S>(dt: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    s.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Serialize a `Decimal` as a string with exactly two fractional digits,
/// the way a `DECIMAL(_, 2)` column reads back (`72.5` -> `"72.50"`).
pub fn to_fixed_2dp<S>(value: &Decimal, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut value = value.round_dp(2);
    value.rescale(2);
    s.serialize_str(&value.to_string())
}
