//! Browser console logging through the `log` facade

use log::Level;

/// Route `log` records to the browser console.
///
/// Debug output only shows up with `?debug=1`. Safe to call more than once.
pub fn init(debug: bool) {
    let level = if debug { Level::Debug } else { Level::Info };
    if console_log::init_with_level(level).is_ok() {
        log::debug!("[Scan-Lite] Debug logging enabled");
    }
}
