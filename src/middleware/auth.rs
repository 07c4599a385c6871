use axum::{extract::FromRequestParts, http::header};
use uuid::Uuid;

use crate::{error::AppError, services::auth_service::verify_token, state::AppState};

/// An authenticated admin, scoped to one shop.
#[derive(Debug, Clone)]
pub struct AuthAdmin {
    pub shop_id: Uuid,
    pub role: String,
}

/// Accepts both `Bearer <token>` and a bare token.
pub fn token_from_header(value: &str) -> Option<&str> {
    let value = value.trim_start();
    let token = value
        .strip_prefix("Bearer ")
        .or_else(|| value.strip_prefix("bearer "))
        .unwrap_or(value)
        .trim();
    if token.is_empty() { None } else { Some(token) }
}

impl FromRequestParts<AppState> for AuthAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(token_from_header)
            .ok_or(AppError::Unauthorized)?;

        let claims = verify_token(&state.config.jwt_secret, token)?;

        Ok(AuthAdmin {
            shop_id: claims.shop_id,
            role: claims.role,
        })
    }
}
