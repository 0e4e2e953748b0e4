pub mod field_error;
pub mod list_filters;
pub mod page_header;
pub mod pagination_controls;
pub mod table;
