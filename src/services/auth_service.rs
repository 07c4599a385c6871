//! Admin login and token handling.
//!
//! There is deliberately no registration or password-change flow: admin
//! accounts are provisioned out-of-band (see the `seed` binary).

use std::sync::LazyLock;

use argon2::{
    Argon2, PasswordHasher,
    password_hash::{PasswordHash, PasswordVerifier, SaltString},
};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use password_hash::rand_core::OsRng;
use uuid::Uuid;

use crate::{
    db::DbPool,
    dto::auth::{Claims, LoginRequest, LoginResponse},
    error::{AppError, AppResult},
    models::Admin,
};

/// Tokens are valid for a fixed seven days from issue.
pub const TOKEN_TTL_DAYS: i64 = 7;

/// Verified against when the email is unknown, so both failure paths do the
/// same amount of hashing work.
static DUMMY_HASH: LazyLock<Option<String>> =
    LazyLock::new(|| hash_password("not-a-real-password").ok());

pub fn hash_password(plain: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!(e.to_string()))?
        .to_string();
    Ok(hash)
}

/// Constant-time check of `plain` against a PHC-formatted hash. A malformed
/// stored hash counts as a mismatch.
pub fn verify_password(plain: &str, hash: &str) -> bool {
    let parsed = match PasswordHash::new(hash) {
        Ok(parsed) => parsed,
        Err(err) => {
            tracing::error!(error = %err, "stored password hash is malformed");
            return false;
        }
    };
    Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok()
}

pub fn issue_token(
    secret: &str,
    shop_id: Uuid,
    role: &str,
    issued_at: DateTime<Utc>,
) -> AppResult<String> {
    let expiration = issued_at
        .checked_add_signed(Duration::days(TOKEN_TTL_DAYS))
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("Failed to set expiration")))?;

    let claims = Claims {
        shop_id,
        role: role.to_string(),
        iat: issued_at.timestamp().max(0) as u64,
        exp: expiration.timestamp().max(0) as u64,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))
}

/// Any failure (bad signature, expired, malformed) collapses to
/// [`AppError::Unauthorized`].
pub fn verify_token(secret: &str, token: &str) -> AppResult<Claims> {
    let validation = Validation::new(Algorithm::HS256);
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|err| {
        tracing::debug!(error = %err, "token rejected");
        AppError::Unauthorized
    })
}

pub async fn login_admin(
    pool: &DbPool,
    secret: &str,
    payload: LoginRequest,
) -> AppResult<LoginResponse> {
    let LoginRequest { email, password } = payload;
    let admin: Option<Admin> = sqlx::query_as::<_, Admin>(
        "SELECT id, email, password_hash, shop_id, role, created_at FROM admins WHERE email = $1",
    )
    .bind(email.trim())
    .fetch_optional(pool)
    .await?;

    let admin = match admin {
        Some(a) => a,
        None => {
            if let Some(dummy) = DUMMY_HASH.as_deref() {
                verify_password(&password, dummy);
            }
            tracing::info!("login rejected");
            return Err(AppError::Unauthorized);
        }
    };

    if !verify_password(&password, &admin.password_hash) {
        tracing::info!("login rejected");
        return Err(AppError::Unauthorized);
    }

    let token = issue_token(secret, admin.shop_id, &admin.role, Utc::now())?;
    tracing::info!(admin_id = %admin.id, shop_id = %admin.shop_id, "admin logged in");

    Ok(LoginResponse {
        token,
        shop_id: admin.shop_id,
    })
}
