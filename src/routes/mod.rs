use axum::{Json, Router, extract::OriginalUri, http::StatusCode};

use crate::{error::ErrorBody, state::AppState};

pub mod admin;
pub mod analytics;
pub mod ar;
pub mod auth;
pub mod buy;
pub mod doc;
pub mod health;
pub mod params;
pub mod products;
pub mod shops;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest(
            "/admin",
            Router::new().merge(auth::router()).merge(admin::router()),
        )
        .merge(shops::router())
        .merge(products::router())
        .merge(analytics::router())
        .merge(buy::router())
        .fallback(not_found)
}

async fn not_found(OriginalUri(uri): OriginalUri) -> (StatusCode, Json<ErrorBody>) {
    let body = ErrorBody {
        error: format!("Not Found: {}", uri.path()),
    };
    (StatusCode::NOT_FOUND, Json(body))
}
