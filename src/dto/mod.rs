pub mod analytics;
pub mod auth;
pub mod events;
pub mod products;
