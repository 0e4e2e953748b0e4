pub mod api;
pub mod store;
pub mod ui;

pub use store::{provide_cart_store, use_cart_store, CartStore};
