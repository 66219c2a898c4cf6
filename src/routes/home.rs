use axum::response::Html;

const ROUTE_INDEX: &str = "Available routes:<br/>\
<b>/api/v1.0/precipitation</b> - Last 12 months of precipitation data<br/>\
<b>/api/v1.0/stations</b> - List of weather stations<br/>\
<b>/api/v1.0/tobs</b> - Temperature observations for the most active station (last 12 months)<br/>\
<b>/api/v1.0/&lt;start&gt;</b> - Min, Avg, Max temperature from start date onwards (YYYY-MM-DD)<br/>\
<b>/api/v1.0/&lt;start&gt;/&lt;end&gt;</b> - Min, Avg, Max temperature for a given date range (YYYY-MM-DD/YYYY-MM-DD)<br/>\
<b>/swagger-ui/</b> - Interactive API documentation<br/>";

/// List all available API routes.
#[utoipa::path(
    get,
    path = "/",
    tag = "Health",
    responses(
        (status = 200, description = "HTML listing of the API routes", content_type = "text/html", body = String),
    )
)]
pub async fn index() -> Html<&'static str> {
    Html(ROUTE_INDEX)
}
