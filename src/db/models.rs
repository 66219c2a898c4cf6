use chrono::NaiveDate;
use sqlx::FromRow;

/// A weather station row from the `station` table.
#[derive(Debug, Clone, FromRow)]
#[allow(dead_code)] // Geo fields are part of the schema but not exposed by any route
pub struct Station {
    pub station: String,
    /// NULL when the dataset carries no display name.
    pub name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub elevation: Option<f64>,
}

/// A `(date, prcp)` pair from the `measurement` table.
#[derive(Debug, Clone, FromRow)]
pub struct PrecipitationReading {
    pub date: NaiveDate,
    /// NULL in the dataset when no gauge reading was recorded.
    pub prcp: Option<f64>,
}

/// A `(date, tobs)` pair from the `measurement` table.
#[derive(Debug, Clone, FromRow)]
pub struct TemperatureObservation {
    pub date: NaiveDate,
    /// NULL when no temperature was recorded; never coerced to zero.
    pub tobs: Option<f64>,
}

/// Row count per station, used to pick the most active station.
#[derive(Debug, Clone, FromRow)]
pub struct StationActivity {
    pub station: String,
    pub observation_count: i64,
}

/// MIN/AVG/MAX of `tobs` over a filtered set. All NULL when the set is empty.
#[derive(Debug, Clone, FromRow)]
pub struct TemperatureStats {
    pub min_tobs: Option<f64>,
    pub avg_tobs: Option<f64>,
    pub max_tobs: Option<f64>,
}

/// Shape of the loaded dataset, probed once at startup.
#[derive(Debug, Clone, FromRow)]
pub struct DatasetSummary {
    pub station_count: i64,
    pub measurement_count: i64,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
    /// Measurements whose station has no row in `station`.
    pub orphaned_measurements: i64,
}
