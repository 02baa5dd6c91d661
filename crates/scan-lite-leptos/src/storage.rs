//! Scan history persistence in localStorage

use scan_lite_routes::Barcode;

/// Storage key of the recent scans list
pub const HISTORY_KEY: &str = "scan_lite_history";

/// Get localStorage
fn get_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Load recent scans, most recent first. Missing or corrupt data yields an
/// empty list.
pub fn load_history() -> Vec<Barcode> {
    let Some(json) = get_storage().and_then(|s| s.get_item(HISTORY_KEY).ok().flatten()) else {
        return Vec::new();
    };

    match serde_json::from_str(&json) {
        Ok(history) => history,
        Err(e) => {
            log::warn!("[Storage] Discarding unreadable scan history: {}", e);
            Vec::new()
        }
    }
}

/// Save recent scans. Failures (quota, private mode) are logged and dropped.
pub fn save_history(history: &[Barcode]) {
    let Some(storage) = get_storage() else {
        return;
    };

    match serde_json::to_string(history) {
        Ok(json) => {
            if let Err(e) = storage.set_item(HISTORY_KEY, &json) {
                log::warn!("[Storage] Failed to save scan history: {:?}", e);
            }
        }
        Err(e) => log::warn!("[Storage] Failed to encode scan history: {}", e),
    }
}

pub fn clear_history() {
    if let Some(storage) = get_storage() {
        let _ = storage.remove_item(HISTORY_KEY);
    }
}
