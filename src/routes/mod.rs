pub mod climate;
pub mod health;
pub mod home;
pub mod temperature;

use axum::{routing::get, Router};
use sqlx::SqlitePool;

/// All dataset-backed routes, sharing one read-only pool.
///
/// Static segments take priority over the `:start` capture, so
/// `/api/v1.0/stations` never reaches the temperature handler.
pub(crate) fn api_router(pool: SqlitePool) -> Router {
    Router::new()
        .route("/", get(home::index))
        .route("/health", get(health::health_check))
        .route(
            "/api/v1.0/precipitation",
            get(climate::get_precipitation),
        )
        .route("/api/v1.0/stations", get(climate::list_stations))
        .route("/api/v1.0/tobs", get(climate::get_tobs))
        .route("/api/v1.0/:start", get(temperature::get_summary_from))
        .route(
            "/api/v1.0/:start/:end",
            get(temperature::get_summary_between),
        )
        .with_state(pool)
}
