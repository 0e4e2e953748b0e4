use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::window;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Read and decode a JSON value from localStorage.
/// Missing keys and undecodable blobs both read as `None`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    let raw = get_local_storage()?.get_item(key).ok()??;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("Discarding unreadable localStorage entry '{}': {}", key, e);
            None
        }
    }
}

/// Encode and save a JSON value to localStorage
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    let Some(storage) = get_local_storage() else {
        return;
    };
    match serde_json::to_string(value) {
        Ok(json) => {
            if storage.set_item(key, &json).is_err() {
                log::warn!("localStorage rejected write of '{}'", key);
            }
        }
        Err(e) => log::error!("Failed to encode '{}': {}", key, e),
    }
}
