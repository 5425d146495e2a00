//! Conversions between domain values and their SQLite TEXT encodings.

use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use rust_decimal::Decimal;

use crate::error::{Error, Result};

/// Fixed-width RFC 3339 so lexical order equals chronological order.
pub fn encode_time(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub fn decode_time(raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| Error::Parse(format!("timestamp '{raw}': {e}")))
}

pub fn decode_optional_time(raw: Option<String>) -> Result<Option<DateTime<Utc>>> {
    raw.as_deref().map(decode_time).transpose()
}

pub fn decode_decimal(raw: &str) -> Result<Decimal> {
    Decimal::from_str(raw).map_err(|e| Error::Parse(format!("decimal '{raw}': {e}")))
}

/// Parse a stored enum column through its `FromStr`.
pub fn decode_enum<T>(raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse::<T>().map_err(|e| Error::Parse(e.to_string()))
}

/// Map a Diesel failure, turning unique-key violations into conflicts.
pub fn database_error(err: DieselError) -> Error {
    match err {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            Error::Conflict(info.message().to_string())
        }
        other => Error::Database(other.to_string()),
    }
}

/// `u64` from a SQL `COUNT(*)`.
pub fn count(raw: i64) -> u64 {
    u64::try_from(raw).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    #[test]
    fn timestamps_are_fixed_width() {
        let whole = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        let fractional = whole + chrono::Duration::microseconds(5);
        assert_eq!(encode_time(whole), "2025-03-01T12:00:00.000000Z");
        assert_eq!(encode_time(whole).len(), encode_time(fractional).len());
        assert!(encode_time(whole) < encode_time(fractional));
        assert_eq!(decode_time(&encode_time(fractional)).unwrap(), fractional);
    }

    #[test]
    fn decimals_keep_their_scale() {
        assert_eq!(decode_decimal("12.50").unwrap(), dec!(12.50));
        assert_eq!(decode_decimal("12.50").unwrap().to_string(), "12.50");
        assert!(decode_decimal("twelve").is_err());
    }

    #[test]
    fn negative_counts_clamp_to_zero() {
        assert_eq!(count(-1), 0);
        assert_eq!(count(7), 7);
    }
}
