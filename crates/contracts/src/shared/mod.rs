pub mod api;
pub mod serde_helpers;
pub mod validation;
