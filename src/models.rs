use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Admin account. Never serialized; the hash stays server-side.
#[derive(Debug, Clone, FromRow)]
pub struct Admin {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub shop_id: Uuid,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct Shop {
    pub id: Uuid,
    pub name: String,
    pub tagline: Option<String>,
    pub logo_url: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct Product {
    pub id: Uuid,
    pub shop_id: Uuid,
    pub category: String,
    pub description: String,
    pub image_urls: Vec<String>,
    pub ar_model: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Customer-facing listing row.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ProductSummary {
    pub id: Uuid,
    pub category: String,
    pub description: String,
    pub image_urls: Vec<String>,
    pub ar_model: Option<String>,
}

impl From<Product> for ProductSummary {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            category: p.category,
            description: p.description,
            image_urls: p.image_urls,
            ar_model: p.ar_model,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, FromRow)]
pub struct Event {
    pub id: Uuid,
    pub shop_id: Uuid,
    pub product_id: Option<Uuid>,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub event_type: String,
    pub created_at: DateTime<Utc>,
}
