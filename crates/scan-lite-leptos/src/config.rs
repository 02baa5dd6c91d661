//! Application configuration
//!
//! Static defaults plus a few flags read from the page URL
//! (`?debug=1`, `?theme=dark`).

use crate::theme::Theme;
use std::sync::atomic::{AtomicBool, Ordering};

/// Global debug mode flag (set from URL parameter ?debug=1)
static DEBUG_MODE: AtomicBool = AtomicBool::new(false);

/// Check if debug mode is enabled
pub fn is_debug() -> bool {
    DEBUG_MODE.load(Ordering::Relaxed)
}

/// Default mount point in index.html
pub const DEFAULT_MOUNT_SELECTOR: &str = "#app";

/// Startup configuration
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// CSS selector of the element the app mounts into
    pub mount_selector: String,
    pub theme: Theme,
    /// Directory holding `<theme>/theme.css`
    pub theme_base: String,
    pub icons_href: String,
    /// Number of recent scans kept in history
    pub history_capacity: usize,
    pub debug: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mount_selector: DEFAULT_MOUNT_SELECTOR.to_string(),
            theme: Theme::default(),
            theme_base: "/themes".to_string(),
            icons_href: "/icons/icons.css".to_string(),
            history_capacity: 10,
            debug: false,
        }
    }
}

impl AppConfig {
    /// Defaults overridden by the current page's query string.
    /// Call this once at startup.
    pub fn from_url() -> Self {
        let mut config = Self::default();
        if let Some(search) = web_sys::window().and_then(|w| w.location().search().ok()) {
            config.apply_query(&search);
        }
        DEBUG_MODE.store(config.debug, Ordering::Relaxed);
        config
    }

    /// Apply recognised `key=value` pairs; unknown keys are ignored
    pub fn apply_query(&mut self, search: &str) {
        let search = search.strip_prefix('?').unwrap_or(search);
        for pair in search.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            match key {
                "debug" => self.debug = matches!(value, "1" | "true"),
                "theme" => {
                    if let Some(theme) = Theme::from_query(value) {
                        self.theme = theme;
                    }
                }
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.mount_selector, "#app");
        assert_eq!(config.theme, Theme::LaraLightBlue);
        assert!(!config.debug);
    }

    #[test]
    fn test_apply_query() {
        let mut config = AppConfig::default();
        config.apply_query("?debug=1&theme=dark&other=x");
        assert!(config.debug);
        assert_eq!(config.theme, Theme::LaraDarkBlue);

        config.apply_query("debug=true&theme=light");
        assert!(config.debug);
        assert_eq!(config.theme, Theme::LaraLightBlue);

        config.apply_query("?debug=0&theme=neon");
        assert!(!config.debug);
        assert_eq!(config.theme, Theme::LaraLightBlue);
    }

    #[test]
    fn test_apply_empty_query() {
        let mut config = AppConfig::default();
        config.apply_query("");
        config.apply_query("?");
        assert_eq!(config, AppConfig::default());
    }
}
