pub mod layout;
pub mod products;
