//! Types shared between the storefront client and the store API.
//!
//! Everything here is plain Rust: DTOs with their wire names, form schemas,
//! the cart model and the order status machine. No browser dependencies, so
//! the logic is tested natively.

pub mod domain;
pub mod shared;
pub mod shop;
pub mod system;
