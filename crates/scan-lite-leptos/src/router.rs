//! Router plugin - History API routing over the scan-lite route table

use crate::bootstrap::{AppContext, Plugin};
use crate::components::{NotFound, ProductDetailsView, Scanner};
use crate::config;
use crate::error::BootstrapError;
use leptos::prelude::*;
use leptos_router::components::Router;
use leptos_router::hooks::use_location;
use once_cell::sync::Lazy;
use scan_lite_routes::{ProductDetailsProps, RouteTable, ViewKind};

/// Route table used by the app: `/` and `/product/:barcode`
pub static ROUTES: Lazy<RouteTable> = Lazy::new(RouteTable::default_routes);

/// Wraps the app in a History API router (clean URLs, no `#/` prefix) and
/// provides the route table to [`RouteView`].
#[derive(Clone, Debug)]
pub struct RouterPlugin {
    routes: RouteTable,
}

impl RouterPlugin {
    pub fn new(routes: RouteTable) -> Self {
        Self { routes }
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }
}

impl Plugin for RouterPlugin {
    fn name(&self) -> &'static str {
        "router"
    }

    fn install(&self, _ctx: &mut AppContext) -> Result<(), BootstrapError> {
        if config::is_debug() {
            for route in self.routes.routes() {
                log::debug!(
                    "[Router] {} -> {} (props: {})",
                    route.pattern,
                    route.view.name(),
                    route.props
                );
            }
        }
        Ok(())
    }

    fn wrap(&self, children: Children) -> AnyView {
        provide_context(self.routes.clone());
        view! { <Router>{children()}</Router> }.into_any()
    }
}

/// Hook to access the route table from context
pub fn use_route_table() -> RouteTable {
    expect_context::<RouteTable>()
}

fn raw_pathname() -> Option<String> {
    web_sys::window()?.location().pathname().ok()
}

/// Renders the view matching the current location
#[component]
pub fn RouteView() -> impl IntoView {
    let table = use_route_table();
    let location = use_location();
    let resolved = Memo::new(move |_| {
        // Track the router's location, but match the browser's still-encoded
        // path so each segment is percent-decoded exactly once
        let tracked = location.pathname.get();
        let path = raw_pathname().unwrap_or(tracked);
        let route = table.resolve(&path);
        if route.is_none() {
            log::warn!("[Router] No route matches '{}'", path);
        }
        route
    });

    move || match resolved.get() {
        Some(route) => match route.view {
            ViewKind::Scanner => view! { <Scanner /> }.into_any(),
            ViewKind::ProductDetails => match ProductDetailsProps::from_match(&route) {
                Ok(input) => view! { <ProductDetailsView input=input /> }.into_any(),
                Err(e) => {
                    log::warn!("[Router] {}", e);
                    view! { <NotFound /> }.into_any()
                }
            },
        },
        None => view! { <NotFound /> }.into_any(),
    }
}
