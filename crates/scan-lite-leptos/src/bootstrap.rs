//! Application bootstrap
//!
//! Builds the application from a root view, installs plugins in
//! registration order and mounts the result onto a DOM element.
//!
//! ```ignore
//! Application::new(App, config)
//!     .plugin(RouterPlugin::new(ROUTES.clone()))
//!     .plugin(ThemePlugin::new(theme, "/themes", "/icons/icons.css"))
//!     .mount("#app")?;
//! ```

use crate::config::AppConfig;
use crate::error::BootstrapError;
use leptos::prelude::*;
use std::sync::Arc;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

/// Startup-time access to the host page, handed to [`Plugin::install`]
pub struct AppContext {
    document: Document,
    config: AppConfig,
}

impl AppContext {
    pub fn new(document: Document, config: AppConfig) -> Self {
        Self { document, config }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

/// Extension installed into an [`Application`]
pub trait Plugin: Send + Sync + 'static {
    fn name(&self) -> &'static str;

    /// One-off setup against the host document, run before mounting
    fn install(&self, ctx: &mut AppContext) -> Result<(), BootstrapError>;

    /// Wrap the view tree below this plugin. Runs inside the reactive owner
    /// of the mounted app, so this is where contexts get provided.
    fn wrap(&self, children: Children) -> AnyView {
        children()
    }
}

/// Application before mounting
pub struct Application {
    root: Arc<dyn Fn() -> AnyView + Send + Sync>,
    config: AppConfig,
    plugins: Vec<Arc<dyn Plugin>>,
}

/// Summary of a successful mount
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mounted {
    pub selector: String,
    pub plugins: Vec<&'static str>,
}

impl Application {
    /// Create an application from its root view
    pub fn new<F, N>(root: F, config: AppConfig) -> Self
    where
        F: Fn() -> N + Send + Sync + 'static,
        N: IntoView + 'static,
    {
        Self {
            root: Arc::new(move || root().into_any()),
            config,
            plugins: Vec::new(),
        }
    }

    /// Register a plugin. The first registered plugin is the outermost
    /// wrapper of the view tree.
    pub fn plugin(mut self, plugin: impl Plugin) -> Self {
        self.plugins.push(Arc::new(plugin));
        self
    }

    pub fn plugin_names(&self) -> Vec<&'static str> {
        self.plugins.iter().map(|p| p.name()).collect()
    }

    /// Install plugins and mount onto the element matching `selector`.
    ///
    /// Existing content of the target is replaced. Fails without touching
    /// the view tree if the target is missing or a plugin fails.
    pub fn mount(self, selector: &str) -> Result<Mounted, BootstrapError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(BootstrapError::NoDocument)?;

        let target = find_mount_target(&document, selector)?;

        let mut ctx = AppContext::new(document, self.config.clone());
        for plugin in &self.plugins {
            plugin
                .install(&mut ctx)
                .map_err(|e| BootstrapError::plugin(plugin.name(), e))?;
            log::debug!("[Bootstrap] Installed plugin '{}'", plugin.name());
        }

        let plugins = self.plugin_names();
        let config = self.config;

        // Innermost first so the first registered plugin ends up outermost
        let root = self.root;
        let mut render: Children = Box::new(move || {
            provide_context(config);
            root()
        });
        for plugin in self.plugins.into_iter().rev() {
            let inner = render;
            render = Box::new(move || plugin.wrap(inner));
        }

        target.set_inner_html("");
        leptos::mount::mount_to(target, move || render()).forget();

        log::info!("[Bootstrap] Mounted on '{}'", selector);
        Ok(Mounted {
            selector: selector.to_string(),
            plugins,
        })
    }
}

/// Look up the mount point
pub fn find_mount_target(document: &Document, selector: &str) -> Result<HtmlElement, BootstrapError> {
    let element = document
        .query_selector(selector)
        .map_err(|_| BootstrapError::InvalidSelector(selector.to_string()))?
        .ok_or_else(|| BootstrapError::MountTargetMissing(selector.to_string()))?;

    element
        .dyn_into::<HtmlElement>()
        .map_err(|_| BootstrapError::MountTargetNotHtml(selector.to_string()))
}

/// Hook to access the startup configuration from context
pub fn use_app_config() -> AppConfig {
    expect_context::<AppConfig>()
}
