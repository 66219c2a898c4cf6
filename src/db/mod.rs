//! Read-only access to the station/measurement dataset.

pub mod models;
pub mod queries;

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

/// Open a bounded, read-only connection pool to the dataset.
///
/// Fails if the file is missing; the dataset is never created or written.
pub async fn connect_read_only(
    database_url: &str,
    max_connections: u32,
    min_connections: u32,
) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .read_only(true)
        .create_if_missing(false);

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .min_connections(min_connections)
        .connect_with(options)
        .await
}


#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::fixtures::{pool_with, sample_pool};
    use super::queries;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn test_latest_measurement_date() {
        let pool = sample_pool().await;
        let mut conn = pool.acquire().await.unwrap();
        let latest = queries::latest_measurement_date(&mut conn).await.unwrap();
        assert_eq!(latest, Some(date(2017, 8, 23)));
    }

    #[tokio::test]
    async fn test_latest_measurement_date_empty() {
        let pool = pool_with("").await;
        let mut conn = pool.acquire().await.unwrap();
        let latest = queries::latest_measurement_date(&mut conn).await.unwrap();
        assert_eq!(latest, None);
    }

    #[tokio::test]
    async fn test_precipitation_since_keeps_nulls_in_order() {
        let pool = sample_pool().await;
        let mut conn = pool.acquire().await.unwrap();
        let rows = queries::precipitation_since(&mut conn, date(2016, 8, 23))
            .await
            .unwrap();

        let dates: Vec<NaiveDate> = rows.iter().map(|r| r.date).collect();
        assert_eq!(
            dates,
            vec![
                date(2016, 8, 23),
                date(2017, 1, 1),
                date(2017, 8, 18),
                date(2017, 8, 22),
                date(2017, 8, 23),
            ]
        );
        assert_eq!(rows[1].prcp, None);
        assert_eq!(rows[4].prcp, Some(0.0));
    }

    #[tokio::test]
    async fn test_list_stations_sorted() {
        let pool = sample_pool().await;
        let mut conn = pool.acquire().await.unwrap();
        let stations = queries::list_stations(&mut conn).await.unwrap();
        let ids: Vec<&str> = stations.iter().map(|s| s.station.as_str()).collect();
        assert_eq!(ids, vec!["USC00513117", "USC00519281", "USC00519397"]);
        assert_eq!(stations[0].name.as_deref(), Some("KANEOHE 838.1, HI US"));
    }

    #[tokio::test]
    async fn test_most_active_station() {
        let pool = sample_pool().await;
        let mut conn = pool.acquire().await.unwrap();
        let active = queries::most_active_station(&mut conn)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(active.station, "USC00519281");
        assert_eq!(active.observation_count, 4);
    }

    #[tokio::test]
    async fn test_most_active_station_tie_goes_to_lowest_id() {
        let pool = pool_with(
            "INSERT INTO station (station, name) VALUES ('B', 'Bravo'), ('A', 'Alpha');
             INSERT INTO measurement (station, date, prcp, tobs) VALUES
                ('B', '2017-01-01', 0.1, 70.0),
                ('B', '2017-01-02', 0.1, 71.0),
                ('A', '2017-01-01', 0.2, 72.0),
                ('A', '2017-01-02', 0.2, 73.0);",
        )
        .await;
        let mut conn = pool.acquire().await.unwrap();
        let active = queries::most_active_station(&mut conn)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(active.station, "A");
    }

    #[tokio::test]
    async fn test_most_active_station_empty() {
        let pool = pool_with("").await;
        let mut conn = pool.acquire().await.unwrap();
        let active = queries::most_active_station(&mut conn).await.unwrap();
        assert!(active.is_none());
    }

    #[tokio::test]
    async fn test_temperature_observations_since() {
        let pool = sample_pool().await;
        let mut conn = pool.acquire().await.unwrap();
        let rows =
            queries::temperature_observations_since(&mut conn, "USC00519281", date(2016, 8, 23))
                .await
                .unwrap();
        let temps: Vec<Option<f64>> = rows.iter().map(|r| r.tobs).collect();
        assert_eq!(temps, vec![Some(77.0), Some(62.0), Some(79.0)]);
    }

    #[tokio::test]
    async fn test_temperature_stats_open_ended() {
        let pool = sample_pool().await;
        let mut conn = pool.acquire().await.unwrap();
        let stats = queries::temperature_stats(&mut conn, date(2017, 8, 22), None)
            .await
            .unwrap();
        assert_eq!(stats.min_tobs, Some(81.0));
        assert_eq!(stats.avg_tobs, Some(81.5));
        assert_eq!(stats.max_tobs, Some(82.0));
    }

    #[tokio::test]
    async fn test_temperature_stats_inclusive_range() {
        let pool = sample_pool().await;
        let mut conn = pool.acquire().await.unwrap();
        let stats =
            queries::temperature_stats(&mut conn, date(2016, 8, 22), Some(date(2016, 8, 23)))
                .await
                .unwrap();
        assert_eq!(stats.min_tobs, Some(70.0));
        assert_eq!(stats.max_tobs, Some(77.0));
    }

    #[tokio::test]
    async fn test_temperature_stats_empty_is_all_null() {
        let pool = sample_pool().await;
        let mut conn = pool.acquire().await.unwrap();
        let stats = queries::temperature_stats(&mut conn, date(2018, 1, 1), None)
            .await
            .unwrap();
        assert_eq!(stats.min_tobs, None);
        assert_eq!(stats.avg_tobs, None);
        assert_eq!(stats.max_tobs, None);
    }

    #[tokio::test]
    async fn test_dataset_summary() {
        let pool = pool_with(
            "INSERT INTO station (station, name) VALUES ('A', 'Alpha');
             INSERT INTO measurement (station, date, prcp, tobs) VALUES
                ('A', '2017-01-01', 0.1, 70.0),
                ('A', '2017-03-01', 0.1, 71.0),
                ('Z', '2017-02-01', 0.2, 72.0);",
        )
        .await;
        let mut conn = pool.acquire().await.unwrap();
        let summary = queries::dataset_summary(&mut conn).await.unwrap();
        assert_eq!(summary.station_count, 1);
        assert_eq!(summary.measurement_count, 3);
        assert_eq!(summary.first_date, Some(date(2017, 1, 1)));
        assert_eq!(summary.last_date, Some(date(2017, 3, 1)));
        assert_eq!(summary.orphaned_measurements, 1);
    }

    #[tokio::test]
    async fn test_connect_read_only_missing_file_fails() {
        let result =
            super::connect_read_only("sqlite:///nonexistent/dir/hawaii.sqlite", 1, 0).await;
        assert!(result.is_err());
    }
}
