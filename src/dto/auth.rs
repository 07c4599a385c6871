use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Deserialize, Debug, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
    pub shop_id: Uuid,
}

/// Token payload: the tenant the admin belongs to and their role.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema, PartialEq, Eq)]
pub struct Claims {
    pub shop_id: Uuid,
    pub role: String,
    pub iat: u64,
    pub exp: u64,
}
