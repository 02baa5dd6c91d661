//! Themed building blocks used by the views
//!
//! Class names follow the `p-*` convention of the bundled theme stylesheets.

use leptos::callback::{Callable, Callback};
use leptos::prelude::*;
use web_sys::MouseEvent;

/// Color role of a button or message
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Severity {
    #[default]
    Primary,
    Secondary,
    Success,
    Info,
    Warn,
    Error,
}

impl Severity {
    pub fn class_suffix(&self) -> &'static str {
        match self {
            Severity::Primary => "primary",
            Severity::Secondary => "secondary",
            Severity::Success => "success",
            Severity::Info => "info",
            Severity::Warn => "warn",
            Severity::Error => "error",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            Severity::Success => "check-circle",
            Severity::Warn => "exclamation-triangle",
            Severity::Error => "times-circle",
            _ => "info-circle",
        }
    }
}

/// Icon from the bundled icon font
#[component]
pub fn Icon(name: &'static str) -> impl IntoView {
    view! { <i class=format!("si si-{}", name) aria-hidden="true"></i> }
}

/// Button with optional leading icon
#[component]
pub fn Button(
    #[prop(into)] label: String,
    #[prop(optional)] icon: Option<&'static str>,
    #[prop(optional)] severity: Severity,
    /// Render as a form submit button
    #[prop(optional)]
    submit: bool,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    let class = format!("p-button p-button-{}", severity.class_suffix());
    let kind = if submit { "submit" } else { "button" };

    view! {
        <button
            type=kind
            class=class
            on:click=move |ev| {
                if let Some(cb) = on_click.as_ref() {
                    cb.run(ev);
                }
            }
        >
            {icon.map(|name| view! { <Icon name=name /> })}
            <span class="p-button-label">{label}</span>
        </button>
    }
}

/// Text input bound to a signal
#[component]
pub fn InputText(
    value: RwSignal<String>,
    #[prop(optional)] id: Option<&'static str>,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] invalid: Option<Signal<bool>>,
) -> impl IntoView {
    let class = move || {
        if invalid.map(|s| s.get()).unwrap_or(false) {
            "p-inputtext p-invalid"
        } else {
            "p-inputtext"
        }
    };

    view! {
        <input
            id=id
            type="text"
            class=class
            placeholder=placeholder
            autocomplete="off"
            prop:value=move || value.get()
            on:input=move |ev| value.set(event_target_value(&ev))
        />
    }
}

/// Panel with a title bar
#[component]
pub fn Card(#[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <section class="p-card">
            <div class="p-card-title">{title}</div>
            <div class="p-card-content">{children()}</div>
        </section>
    }
}

/// Inline status message
#[component]
pub fn Message(#[prop(optional)] severity: Severity, children: Children) -> impl IntoView {
    view! {
        <div class=format!("p-message p-message-{}", severity.class_suffix()) role="alert">
            <Icon name=severity.icon() />
            <span class="p-message-text">{children()}</span>
        </div>
    }
}
