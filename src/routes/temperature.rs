//! Temperature summary endpoints.
//!
//! - GET /api/v1.0/:start
//! - GET /api/v1.0/:start/:end

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use sqlx::SqlitePool;
use utoipa::ToSchema;

use crate::db::models::TemperatureStats;
use crate::errors::{AppError, ErrorResponse};
use crate::helpers::{parse_path_date, round_2dp};
use crate::services::climate;

/// Minimum, average and maximum temperature over a date range.
///
/// All three are null when no measurement falls in the range.
#[derive(Debug, Serialize, ToSchema)]
pub struct TemperatureSummary {
    /// Lowest observed temperature (°F)
    #[serde(rename = "Min Temp")]
    pub min_temp: Option<f64>,
    /// Mean observed temperature (°F), rounded to 2 decimal places
    #[serde(rename = "Avg Temp")]
    pub avg_temp: Option<f64>,
    /// Highest observed temperature (°F)
    #[serde(rename = "Max Temp")]
    pub max_temp: Option<f64>,
}

impl From<TemperatureStats> for TemperatureSummary {
    fn from(s: TemperatureStats) -> Self {
        Self {
            min_temp: s.min_tobs,
            avg_temp: s.avg_tobs.map(round_2dp),
            max_temp: s.max_tobs,
        }
    }
}

/// Temperature summary for all dates on or after `start`.
#[utoipa::path(
    get,
    path = "/api/v1.0/{start}",
    tag = "Temperature",
    params(
        ("start" = String, Path, description = "First date, inclusive (YYYY-MM-DD)"),
    ),
    responses(
        (status = 200, description = "Min/Avg/Max temperature from start onward", body = TemperatureSummary),
        (status = 400, description = "Malformed date", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse),
    )
)]
pub async fn get_summary_from(
    State(pool): State<SqlitePool>,
    Path(start): Path<String>,
) -> Result<Json<TemperatureSummary>, AppError> {
    let start = parse_path_date(&start)?;

    let mut conn = pool.acquire().await?;
    let stats = climate::temperature_summary(&mut conn, start, None).await?;
    Ok(Json(TemperatureSummary::from(stats)))
}

/// Temperature summary for `start..=end`.
///
/// An end date before the start date is not an error; the summary is all null.
#[utoipa::path(
    get,
    path = "/api/v1.0/{start}/{end}",
    tag = "Temperature",
    params(
        ("start" = String, Path, description = "First date, inclusive (YYYY-MM-DD)"),
        ("end" = String, Path, description = "Last date, inclusive (YYYY-MM-DD)"),
    ),
    responses(
        (status = 200, description = "Min/Avg/Max temperature within the range", body = TemperatureSummary),
        (status = 400, description = "Malformed date", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse),
    )
)]
pub async fn get_summary_between(
    State(pool): State<SqlitePool>,
    Path((start, end)): Path<(String, String)>,
) -> Result<Json<TemperatureSummary>, AppError> {
    let start = parse_path_date(&start)?;
    let end = parse_path_date(&end)?;

    let mut conn = pool.acquire().await?;
    let stats = climate::temperature_summary(&mut conn, start, Some(end)).await?;
    Ok(Json(TemperatureSummary::from(stats)))
}
