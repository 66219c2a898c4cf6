//! Dataset listing endpoints.
//!
//! - GET /api/v1.0/precipitation
//! - GET /api/v1.0/stations
//! - GET /api/v1.0/tobs

use std::collections::BTreeMap;

use axum::extract::State;
use axum::Json;
use chrono::NaiveDate;
use serde::Serialize;
use sqlx::SqlitePool;
use utoipa::ToSchema;

use crate::db::models;
use crate::errors::{AppError, ErrorResponse};
use crate::helpers::DATE_FORMAT;
use crate::services::climate;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// One precipitation reading as a single-key object: `{"2017-08-23": 0.45}`.
/// The value is null when no reading was recorded.
#[derive(Debug, Serialize, ToSchema)]
pub struct PrecipitationEntry(pub BTreeMap<String, Option<f64>>);

impl From<models::PrecipitationReading> for PrecipitationEntry {
    fn from(r: models::PrecipitationReading) -> Self {
        Self(BTreeMap::from([(
            r.date.format(DATE_FORMAT).to_string(),
            r.prcp,
        )]))
    }
}

/// A weather station.
#[derive(Debug, Serialize, ToSchema)]
pub struct StationItem {
    /// Station identifier (e.g. "USC00519281")
    pub station: String,
    /// Display name (e.g. "WAIHEE 837.5, HI US"), null when unknown
    pub name: Option<String>,
}

impl From<models::Station> for StationItem {
    fn from(s: models::Station) -> Self {
        Self {
            station: s.station,
            name: s.name,
        }
    }
}

/// A single temperature observation.
#[derive(Debug, Serialize, ToSchema)]
pub struct TemperatureObservationItem {
    /// Observation date
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    /// Observed temperature (°F), null when not recorded
    #[serde(rename = "Temperature")]
    pub temperature: Option<f64>,
}

impl From<models::TemperatureObservation> for TemperatureObservationItem {
    fn from(o: models::TemperatureObservation) -> Self {
        Self {
            date: o.date,
            temperature: o.tobs,
        }
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// Precipitation for the last 12 months of data.
///
/// The window ends at the latest date in the dataset. Every measurement row is
/// returned, so one date can appear once per reporting station.
#[utoipa::path(
    get,
    path = "/api/v1.0/precipitation",
    tag = "Climate",
    responses(
        (status = 200, description = "Readings ascending by date", body = Vec<PrecipitationEntry>),
        (status = 500, description = "Database error", body = ErrorResponse),
    )
)]
pub async fn get_precipitation(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<PrecipitationEntry>>, AppError> {
    let mut conn = pool.acquire().await?;
    let readings = climate::last_year_precipitation(&mut conn).await?;
    Ok(Json(
        readings.into_iter().map(PrecipitationEntry::from).collect(),
    ))
}

/// List all weather stations.
#[utoipa::path(
    get,
    path = "/api/v1.0/stations",
    tag = "Climate",
    responses(
        (status = 200, description = "One entry per station, ascending by identifier", body = Vec<StationItem>),
        (status = 500, description = "Database error", body = ErrorResponse),
    )
)]
pub async fn list_stations(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<StationItem>>, AppError> {
    let mut conn = pool.acquire().await?;
    let stations = climate::stations(&mut conn).await?;
    Ok(Json(stations.into_iter().map(StationItem::from).collect()))
}

/// Temperature observations of the most active station for the last 12 months.
///
/// The most active station has the most measurement rows; ties go to the
/// lowest identifier. The window ends at the dataset's latest date.
#[utoipa::path(
    get,
    path = "/api/v1.0/tobs",
    tag = "Climate",
    responses(
        (status = 200, description = "Observations ascending by date", body = Vec<TemperatureObservationItem>),
        (status = 500, description = "Database error", body = ErrorResponse),
    )
)]
pub async fn get_tobs(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<TemperatureObservationItem>>, AppError> {
    let mut conn = pool.acquire().await?;
    let items = match climate::most_active_station_observations(&mut conn).await? {
        Some(result) => {
            tracing::debug!(
                "Serving {} observations for station {}",
                result.observations.len(),
                result.station
            );
            result
                .observations
                .into_iter()
                .map(TemperatureObservationItem::from)
                .collect()
        }
        None => Vec::new(),
    };
    Ok(Json(items))
}
