//! Shared helpers for path-date parsing and temperature rounding.

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::errors::AppError;

/// Calendar date format accepted in route path segments.
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` path segment, mapping failures to a 400.
pub(crate) fn parse_path_date(raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|e| {
        AppError::BadRequest(format!(
            "Invalid date '{}': {} (expected YYYY-MM-DD)",
            raw, e
        ))
    })
}

/// Round an f64 to 2 decimal places, ties to even.
///
/// Rounds the exact binary value, so 2.675 (stored as 2.67499..) gives 2.67
/// and an exact tie such as 70.125 gives 70.12. Non-finite inputs pass
/// through unchanged.
pub(crate) fn round_2dp(v: f64) -> f64 {
    Decimal::from_f64_retain(v)
        .map(|d| d.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven))
        .and_then(|d| d.to_f64())
        .unwrap_or(v)
}
