//! Query-and-shape logic behind the climate routes.
//!
//! Each function runs against one borrowed connection so a handler can issue
//! several queries on the same pooled connection and release it once.

use chrono::NaiveDate;
use sqlx::SqliteConnection;

use crate::db::models::{PrecipitationReading, Station, TemperatureObservation, TemperatureStats};
use crate::db::queries;
use crate::errors::AppError;
use crate::services::window::TrailingWindow;

/// Temperature observations of the most active station within the trailing window.
#[derive(Debug, Clone)]
pub struct StationObservations {
    pub station: String,
    pub observations: Vec<TemperatureObservation>,
}

/// Trailing window anchored at the dataset's latest date, or None when empty.
async fn dataset_window(conn: &mut SqliteConnection) -> Result<Option<TrailingWindow>, AppError> {
    let Some(latest) = queries::latest_measurement_date(conn).await? else {
        return Ok(None);
    };
    TrailingWindow::ending_at(latest).map(Some).ok_or_else(|| {
        AppError::InternalError(format!("Cannot compute 12-month window ending {}", latest))
    })
}

/// Every precipitation reading in the last 12 months of data, ascending by date.
pub async fn last_year_precipitation(
    conn: &mut SqliteConnection,
) -> Result<Vec<PrecipitationReading>, AppError> {
    let Some(window) = dataset_window(conn).await? else {
        return Ok(Vec::new());
    };

    let readings = queries::precipitation_since(conn, window.start).await?;
    debug_assert!(readings.iter().all(|r| window.contains(r.date)));

    tracing::debug!(
        "Precipitation window {}..={}: {} readings",
        window.start,
        window.end,
        readings.len()
    );
    Ok(readings)
}

/// All stations, one per identifier.
pub async fn stations(conn: &mut SqliteConnection) -> Result<Vec<Station>, AppError> {
    Ok(queries::list_stations(conn).await?)
}

/// Last 12 months of temperature observations for the station with the most rows.
///
/// The window is anchored at the global latest date, not the station's own.
pub async fn most_active_station_observations(
    conn: &mut SqliteConnection,
) -> Result<Option<StationObservations>, AppError> {
    let Some(active) = queries::most_active_station(conn).await? else {
        return Ok(None);
    };
    let Some(window) = dataset_window(conn).await? else {
        return Ok(None);
    };

    let observations =
        queries::temperature_observations_since(conn, &active.station, window.start).await?;

    tracing::debug!(
        "Most active station {} ({} rows total): {} observations since {}",
        active.station,
        active.observation_count,
        observations.len(),
        window.start
    );
    Ok(Some(StationObservations {
        station: active.station,
        observations,
    }))
}

/// MIN/AVG/MAX temperature from `start`, bounded by `end` when given.
///
/// An inverted range is not rejected; it simply matches nothing.
pub async fn temperature_summary(
    conn: &mut SqliteConnection,
    start: NaiveDate,
    end: Option<NaiveDate>,
) -> Result<TemperatureStats, AppError> {
    let stats = queries::temperature_stats(conn, start, end).await?;
    if stats.avg_tobs.is_none() {
        tracing::debug!("No measurements between {} and {:?}", start, end);
    }
    Ok(stats)
}
