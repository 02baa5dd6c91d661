//! Fallback view for paths no route matches

use crate::theme::{Card, Message, Severity};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

#[component]
pub fn NotFound() -> impl IntoView {
    let location = use_location();

    view! {
        <Card title="Page not found">
            <Message severity=Severity::Warn>
                {move || format!("Nothing lives at {}", location.pathname.get())}
            </Message>
            <A href="/">"Back to scanner"</A>
        </Card>
    }
}
