use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::error::AppError;

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ShopQuery {
    /// Shop id.
    pub shop: Option<Uuid>,
}

impl ShopQuery {
    pub fn require_shop(&self) -> Result<Uuid, AppError> {
        self.shop.ok_or_else(|| AppError::bad_request("shop missing"))
    }
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AnalyticsQuery {
    /// Shop id.
    pub shop: Option<Uuid>,
    /// Lookback in days: 7, 15, 30 or 365. Anything else means 7.
    pub range: Option<String>,
}

/// How far back the analytics aggregate looks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LookbackWindow {
    #[default]
    Week,
    HalfMonth,
    Month,
    Year,
}

impl LookbackWindow {
    pub fn from_query(range: Option<&str>) -> Self {
        match range.map(str::trim) {
            Some("15") => LookbackWindow::HalfMonth,
            Some("30") => LookbackWindow::Month,
            Some("365") => LookbackWindow::Year,
            _ => LookbackWindow::Week,
        }
    }

    pub fn days(self) -> i32 {
        match self {
            LookbackWindow::Week => 7,
            LookbackWindow::HalfMonth => 15,
            LookbackWindow::Month => 30,
            LookbackWindow::Year => 365,
        }
    }
}
