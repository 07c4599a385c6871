use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};

use crate::{
    dto::{analytics::AnalyticsSummary, events::CreateEventRequest},
    error::{AppError, AppResult, ErrorBody},
    extract::{AppJson, AppQuery},
    response::OkResponse,
    routes::params::{AnalyticsQuery, LookbackWindow},
    services::analytics_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/event", post(record_event))
        .route("/analytics", get(analytics))
}

#[utoipa::path(
    post,
    path = "/api/event",
    request_body = CreateEventRequest,
    responses(
        (status = 200, description = "Event recorded", body = OkResponse),
        (status = 400, description = "shop_id or type missing, or unknown shop/product", body = ErrorBody)
    ),
    tag = "Analytics"
)]
pub async fn record_event(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateEventRequest>,
) -> AppResult<Json<OkResponse>> {
    let event = payload.validate()?;
    analytics_service::record_event(&state.pool, event).await?;
    Ok(Json(OkResponse::ok()))
}

#[utoipa::path(
    get,
    path = "/api/analytics",
    params(AnalyticsQuery),
    responses(
        (status = 200, description = "Event counts per bucket", body = AnalyticsSummary),
        (status = 400, description = "shop missing", body = ErrorBody)
    ),
    tag = "Analytics"
)]
pub async fn analytics(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<AnalyticsQuery>,
) -> AppResult<Json<AnalyticsSummary>> {
    let shop_id = query
        .shop
        .ok_or_else(|| AppError::bad_request("shop missing"))?;
    let window = LookbackWindow::from_query(query.range.as_deref());
    let summary = analytics_service::summarize(&state.pool, shop_id, window).await?;
    Ok(Json(summary))
}
