use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::get,
};
use uuid::Uuid;

use crate::{
    services::purchase_service::{find_purchase_target, whatsapp_link},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/buy/{product_id}", get(buy))
}

/// Failures answer in plain text; only a complete link redirects.
#[utoipa::path(
    get,
    path = "/api/buy/{product_id}",
    params(
        ("product_id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 303, description = "Redirect to a prefilled WhatsApp chat"),
        (status = 404, description = "Unknown product or shop without phone", body = String, content_type = "text/plain")
    ),
    tag = "Products"
)]
pub async fn buy(State(state): State<AppState>, Path(product_id): Path<String>) -> Response {
    let Ok(product_id) = Uuid::parse_str(product_id.trim()) else {
        return (StatusCode::NOT_FOUND, "Product not found").into_response();
    };

    let target = match find_purchase_target(&state.pool, product_id).await {
        Ok(Some(target)) => target,
        Ok(None) => return (StatusCode::NOT_FOUND, "Product not found").into_response(),
        Err(err) => {
            tracing::error!(error = %err, %product_id, "purchase lookup failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong").into_response();
        }
    };

    match whatsapp_link(
        &state.config.whatsapp_country_code,
        &state.config.public_base_url,
        &target,
    ) {
        Some(link) => Redirect::to(&link).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            "This shop has not set up WhatsApp ordering",
        )
            .into_response(),
    }
}
