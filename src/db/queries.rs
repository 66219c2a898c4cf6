use chrono::NaiveDate;
use sqlx::SqliteConnection;

use super::models::{
    DatasetSummary, PrecipitationReading, Station, StationActivity, TemperatureObservation,
    TemperatureStats,
};

/// Latest observation date across all measurements, or None for an empty dataset.
pub async fn latest_measurement_date(
    conn: &mut SqliteConnection,
) -> Result<Option<NaiveDate>, sqlx::Error> {
    sqlx::query_scalar::<_, Option<NaiveDate>>("SELECT MAX(date) FROM measurement")
        .fetch_one(conn)
        .await
}

/// All `(date, prcp)` pairs on or after `since`, ascending by date then station.
pub async fn precipitation_since(
    conn: &mut SqliteConnection,
    since: NaiveDate,
) -> Result<Vec<PrecipitationReading>, sqlx::Error> {
    sqlx::query_as::<_, PrecipitationReading>(
        "SELECT date, prcp
         FROM measurement
         WHERE date >= ?1
         ORDER BY date, station",
    )
    .bind(since)
    .fetch_all(conn)
    .await
}

/// One row per distinct station identifier, ascending by identifier.
pub async fn list_stations(conn: &mut SqliteConnection) -> Result<Vec<Station>, sqlx::Error> {
    sqlx::query_as::<_, Station>(
        "SELECT station,
                MIN(name) AS name,
                MIN(latitude) AS latitude,
                MIN(longitude) AS longitude,
                MIN(elevation) AS elevation
         FROM station
         GROUP BY station
         ORDER BY station",
    )
    .fetch_all(conn)
    .await
}

/// Station with the most measurement rows. Ties go to the lowest identifier.
pub async fn most_active_station(
    conn: &mut SqliteConnection,
) -> Result<Option<StationActivity>, sqlx::Error> {
    sqlx::query_as::<_, StationActivity>(
        "SELECT station, COUNT(*) AS observation_count
         FROM measurement
         GROUP BY station
         ORDER BY observation_count DESC, station ASC
         LIMIT 1",
    )
    .fetch_optional(conn)
    .await
}

/// `(date, tobs)` pairs for one station on or after `since`, ascending by date.
pub async fn temperature_observations_since(
    conn: &mut SqliteConnection,
    station: &str,
    since: NaiveDate,
) -> Result<Vec<TemperatureObservation>, sqlx::Error> {
    sqlx::query_as::<_, TemperatureObservation>(
        "SELECT date, tobs
         FROM measurement
         WHERE station = ?1 AND date >= ?2
         ORDER BY date",
    )
    .bind(station)
    .bind(since)
    .fetch_all(conn)
    .await
}

/// MIN/AVG/MAX of `tobs` for `date >= start`, and `date <= end` when given.
pub async fn temperature_stats(
    conn: &mut SqliteConnection,
    start: NaiveDate,
    end: Option<NaiveDate>,
) -> Result<TemperatureStats, sqlx::Error> {
    match end {
        Some(end) => {
            sqlx::query_as::<_, TemperatureStats>(
                "SELECT MIN(tobs) AS min_tobs, AVG(tobs) AS avg_tobs, MAX(tobs) AS max_tobs
                 FROM measurement
                 WHERE date >= ?1 AND date <= ?2",
            )
            .bind(start)
            .bind(end)
            .fetch_one(conn)
            .await
        }
        None => {
            sqlx::query_as::<_, TemperatureStats>(
                "SELECT MIN(tobs) AS min_tobs, AVG(tobs) AS avg_tobs, MAX(tobs) AS max_tobs
                 FROM measurement
                 WHERE date >= ?1",
            )
            .bind(start)
            .fetch_one(conn)
            .await
        }
    }
}

/// Counts and date bounds of the dataset, plus measurements with no matching station.
pub async fn dataset_summary(conn: &mut SqliteConnection) -> Result<DatasetSummary, sqlx::Error> {
    sqlx::query_as::<_, DatasetSummary>(
        "SELECT
            (SELECT COUNT(DISTINCT station) FROM station) AS station_count,
            (SELECT COUNT(*) FROM measurement) AS measurement_count,
            (SELECT MIN(date) FROM measurement) AS first_date,
            (SELECT MAX(date) FROM measurement) AS last_date,
            (SELECT COUNT(*) FROM measurement m
             WHERE NOT EXISTS (SELECT 1 FROM station s WHERE s.station = m.station))
                AS orphaned_measurements",
    )
    .fetch_one(conn)
    .await
}
