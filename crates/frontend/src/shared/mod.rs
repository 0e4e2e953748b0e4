pub mod api_utils;
pub mod components;
pub mod http;
pub mod icons;
pub mod list_utils;
pub mod notify;
pub mod number_format;
pub mod page_frame;
pub mod query_params;
pub mod remote;
pub mod storage;
