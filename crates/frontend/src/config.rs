//! Client-wide settings.

/// Backend URL baked in at build time, e.g. `STORE_BACKEND_URL=https://api.tienda.pe`.
/// When unset the API is expected on port 3000 of the page's host.
pub const BACKEND_URL: Option<&str> = option_env!("STORE_BACKEND_URL");

/// Port of the store API when `STORE_BACKEND_URL` is not set
pub const BACKEND_PORT: u16 = 3000;

/// localStorage key of the persisted cart
pub const CART_STORAGE_KEY: &str = "cart-storage";

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 10;

/// Page sizes offered by the limit toggle
pub const LIMIT_OPTIONS: [u32; 4] = [10, 20, 50, 100];

/// Sentinel of the categorical filters meaning "no filter"
pub const FILTER_ALL: &str = "all";

pub const NOTICE_TIMEOUT_MS: u32 = 4_000;
pub const MAX_NOTICES: usize = 5;

pub const SEARCH_DEBOUNCE_MS: u32 = 300;
