use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::AppError;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateEventRequest {
    pub shop_id: Option<Uuid>,
    pub product_id: Option<Uuid>,
    #[serde(rename = "type")]
    pub event_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub shop_id: Uuid,
    pub product_id: Option<Uuid>,
    pub event_type: String,
}

impl CreateEventRequest {
    pub fn validate(self) -> Result<NewEvent, AppError> {
        let shop_id = self
            .shop_id
            .ok_or_else(|| AppError::bad_request("shop_id required"))?;
        let event_type = self
            .event_type
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::bad_request("type required"))?;
        Ok(NewEvent {
            shop_id,
            product_id: self.product_id,
            event_type,
        })
    }
}
