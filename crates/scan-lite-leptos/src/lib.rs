//! Scan-Lite Leptos UI
//!
//! Client-side app with two views: a scanner at `/` and product details at
//! `/product/:barcode`. [`start`] wires the router and theme plugins and
//! mounts the root view.

pub mod bootstrap;
pub mod components;
pub mod config;
pub mod error;
pub mod logging;
pub mod router;
pub mod state;
pub mod storage;
pub mod theme;

// Re-exports
pub use bootstrap::{use_app_config, AppContext, Application, Mounted, Plugin};
pub use components::{App, NotFound, ProductDetailsView, Scanner};
pub use config::{is_debug, AppConfig};
pub use error::BootstrapError;
pub use router::{use_route_table, RouteView, RouterPlugin, ROUTES};
pub use state::{provide_scan_state, use_scan_state, ScanState};
pub use theme::{use_theme, Theme, ThemePlugin, ThemeState};

/// Start the app: router, then theme, then mount.
pub fn start(config: AppConfig) -> Result<Mounted, BootstrapError> {
    let router = RouterPlugin::new(ROUTES.clone());
    let theme = ThemePlugin::new(
        config.theme,
        config.theme_base.clone(),
        config.icons_href.clone(),
    );
    let selector = config.mount_selector.clone();

    Application::new(App, config)
        .plugin(router)
        .plugin(theme)
        .mount(&selector)
}
