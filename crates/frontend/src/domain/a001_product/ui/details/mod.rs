//! Product edit page
//!
//! - view_model.rs: form signals, loading and the save command
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::ProductEditPage;
