pub mod aggregate;
pub mod category;
pub mod form;

pub use aggregate::Product;
pub use form::ProductForm;
