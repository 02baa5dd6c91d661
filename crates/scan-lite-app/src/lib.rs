//! Scan-Lite web app
//!
//! WASM entry point: reads config from the page URL, sets up logging and
//! mounts the Leptos app on `#app`.
//!
//! `assets/` is the web root: `index.html`, `app.css`, `themes/` and
//! `icons/` are served from there, and the WASM bundle goes into
//! `assets/pkg`:
//!
//! ```text
//! wasm-pack build crates/scan-lite-app --target web --out-dir assets/pkg
//! ```
//!
//! The server must answer unknown paths (`/product/...`) with
//! `index.html` so history routing survives a page reload.

use scan_lite_leptos::{logging, AppConfig};
use wasm_bindgen::prelude::*;

/// WASM entry point - starts the app
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_url();
    logging::init(config.debug);
    log::info!("[Scan-Lite] Starting");

    match scan_lite_leptos::start(config) {
        Ok(mounted) => {
            log::debug!(
                "[Scan-Lite] Plugins: {}",
                mounted.plugins.join(", ")
            );
            Ok(())
        }
        Err(e) => {
            log::error!("[Scan-Lite] Startup failed: {}", e);
            Err(e.into())
        }
    }
}
