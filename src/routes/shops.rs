use axum::{
    Json, Router,
    extract::State,
    http::header,
    response::IntoResponse,
    routing::get,
};
use uuid::Uuid;

use crate::{
    error::{AppResult, ErrorBody},
    extract::AppPath,
    models::Shop,
    services::{purchase_service::qr_png, shop_service},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/shop/{id}", get(get_shop))
        .route("/shop/{id}/qr", get(shop_qr))
}

#[utoipa::path(
    get,
    path = "/api/shop/{id}",
    params(
        ("id" = Uuid, Path, description = "Shop ID")
    ),
    responses(
        (status = 200, description = "Shop details", body = Shop),
        (status = 404, description = "Shop not found", body = ErrorBody)
    ),
    tag = "Shops"
)]
pub async fn get_shop(State(state): State<AppState>, AppPath(id): AppPath<Uuid>) -> AppResult<Json<Shop>> {
    let shop = shop_service::get_shop(&state.orm, id).await?;
    Ok(Json(shop))
}

#[utoipa::path(
    get,
    path = "/api/shop/{id}/qr",
    params(
        ("id" = Uuid, Path, description = "Shop ID")
    ),
    responses(
        (status = 200, description = "PNG QR code of the shop's catalog URL"),
        (status = 404, description = "Shop not found", body = ErrorBody)
    ),
    tag = "Shops"
)]
pub async fn shop_qr(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> AppResult<impl IntoResponse> {
    let shop = shop_service::get_shop(&state.orm, id).await?;
    let url = shop_service::catalog_url(&state.config.public_base_url, shop.id);
    let png = qr_png(&url)?;
    Ok(([(header::CONTENT_TYPE, "image/png")], png))
}
