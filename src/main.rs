// Surf's Up climate API v0.1
use std::net::SocketAddr;

use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod db;
mod errors;
mod helpers;
mod routes;
mod services;

use config::AppConfig;

/// Maximum number of connections in the database pool.
const DB_POOL_MAX_CONNECTIONS: u32 = 5;
/// Minimum number of connections kept alive in the database pool.
const DB_POOL_MIN_CONNECTIONS: u32 = 1;

/// Surf's Up API — OpenAPI specification.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Surf's Up API",
        version = "0.1.0",
        description = "Read-only climate API over the Hawaii weather station dataset. \
            Serves the last 12 months of precipitation, the station list, temperature \
            observations of the most active station, and min/avg/max temperature \
            summaries for arbitrary date ranges.",
        license(name = "MIT"),
    ),
    tags(
        (name = "Health", description = "Service health and route index"),
        (name = "Climate", description = "Precipitation, stations and temperature observations"),
        (name = "Temperature", description = "Temperature summaries over date ranges"),
    ),
    paths(
        routes::home::index,
        routes::health::health_check,
        routes::climate::get_precipitation,
        routes::climate::list_stations,
        routes::climate::get_tobs,
        routes::temperature::get_summary_from,
        routes::temperature::get_summary_between,
    ),
    components(
        schemas(
            routes::health::HealthResponse,
            routes::climate::PrecipitationEntry,
            routes::climate::StationItem,
            routes::climate::TemperatureObservationItem,
            routes::temperature::TemperatureSummary,
            errors::ErrorResponse,
        )
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "surfs_up_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env();

    // The dataset must be reachable before serving anything
    let pool = db::connect_read_only(
        &config.database_url,
        DB_POOL_MAX_CONNECTIONS,
        DB_POOL_MIN_CONNECTIONS,
    )
    .await
    .expect("Failed to open dataset");

    let summary = {
        let mut conn = pool
            .acquire()
            .await
            .expect("Failed to acquire dataset connection");
        db::queries::dataset_summary(&mut conn)
            .await
            .expect("Dataset is missing the station/measurement tables")
    };

    tracing::info!(
        "Loaded dataset {}: {} stations, {} measurements ({:?} to {:?})",
        config.database_url,
        summary.station_count,
        summary.measurement_count,
        summary.first_date,
        summary.last_date
    );
    if summary.orphaned_measurements > 0 {
        tracing::warn!(
            "{} measurements reference unknown stations",
            summary.orphaned_measurements
        );
    }
    if summary.measurement_count == 0 {
        tracing::warn!("Dataset has no measurements; window routes will return empty lists");
    }

    // CORS — read-only API, restrict methods to GET
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([axum::http::Method::GET])
        .allow_headers(Any);

    let app = routes::api_router(pool)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("API server listening on {}", addr);
    tracing::info!(
        "Swagger UI available at http://localhost:{}/swagger-ui/",
        config.port
    );

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind TCP listener");
    axum::serve(listener, app)
        .await
        .expect("Server terminated unexpectedly");
}
