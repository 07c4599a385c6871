use serde::Serialize;
use utoipa::ToSchema;

/// Acknowledgement returned by admin product mutations.
#[derive(Debug, Serialize, ToSchema, Clone, PartialEq, Eq)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
        }
    }

    pub fn created() -> Self {
        Self::new("created")
    }

    pub fn updated() -> Self {
        Self::new("updated")
    }

    pub fn deleted() -> Self {
        Self::new("deleted")
    }
}

#[derive(Debug, Serialize, ToSchema, Clone, PartialEq, Eq)]
pub struct OkResponse {
    pub ok: bool,
}

impl OkResponse {
    pub fn ok() -> Self {
        Self { ok: true }
    }
}
