//! Root view - top bar and the routed view

use crate::bootstrap::use_app_config;
use crate::router::RouteView;
use crate::state::provide_scan_state;
use crate::theme::{use_theme, Icon};
use leptos::prelude::*;
use leptos_router::components::A;

/// Root component - entry point for the app
#[component]
pub fn App() -> impl IntoView {
    let config = use_app_config();
    provide_scan_state(config.history_capacity);

    let theme = use_theme();

    view! {
        <div class="layout-wrapper">
            <header class="layout-topbar">
                <A href="/">
                    <span class="layout-topbar-logo">
                        <Icon name="barcode" />
                        <span class="app-title">"Scan-Lite"</span>
                    </span>
                </A>
                <button
                    type="button"
                    class="p-button p-button-text theme-toggle"
                    on:click=move |_| theme.toggle()
                    title="Toggle theme"
                >
                    {move || view! { <Icon name=theme.theme.get().toggle_icon() /> }}
                </button>
            </header>
            <main class="layout-main">
                <RouteView />
            </main>
        </div>
    }
}
