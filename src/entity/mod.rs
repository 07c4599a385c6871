pub mod products;
pub mod shops;

pub use products::Entity as Products;
pub use shops::Entity as Shops;
