pub mod analytics_service;
pub mod auth_service;
pub mod product_service;
pub mod purchase_service;
pub mod shop_service;
pub mod storage;
