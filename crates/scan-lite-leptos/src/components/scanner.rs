//! Scanner view - barcode entry and recent scans

use crate::state::use_scan_state;
use crate::theme::{Button, Card, Icon, InputText, Message, Severity};
use leptos::callback::Callback;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use scan_lite_routes::{product_path, Barcode};

#[component]
pub fn Scanner() -> impl IntoView {
    let scans = use_scan_state();
    let input = RwSignal::new(String::new());
    let navigate = use_navigate();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match Barcode::parse(&input.get_untracked()) {
            Ok(barcode) => {
                log::debug!("[Scanner] Looking up {}", barcode);
                scans.clear_error();
                scans.record(barcode.clone());
                input.set(String::new());
                navigate(&product_path(&barcode), Default::default());
            }
            Err(e) => {
                log::debug!("[Scanner] Rejected input: {}", e);
                scans.show_error(e.to_string());
            }
        }
    };

    let invalid = Signal::derive(move || scans.error.get().is_some());

    view! {
        <Card title="Scan a barcode">
            <form class="scanner-form" on:submit=on_submit>
                <label for="barcode-input">"Barcode"</label>
                <InputText
                    value=input
                    id="barcode-input"
                    placeholder="e.g. 4006381333931"
                    invalid=invalid
                />
                <Button label="Look up" icon="search" submit=true />
            </form>
            {move || {
                scans.error.get().map(|err| view! {
                    <Message severity=Severity::Error>{err}</Message>
                })
            }}
        </Card>

        <RecentScans />
    }
}

/// List of previously scanned barcodes
#[component]
fn RecentScans() -> impl IntoView {
    let scans = use_scan_state();

    move || {
        let history = scans.history.get();
        if history.is_empty() {
            return None;
        }

        Some(view! {
            <Card title="Recent scans">
                <ul class="recent-scans">
                    {history
                        .into_iter()
                        .map(|barcode| {
                            view! {
                                <li>
                                    <A href=product_path(&barcode)>
                                        <Icon name="history" />
                                        <span>{barcode.to_string()}</span>
                                    </A>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <Button
                    label="Clear"
                    icon="trash"
                    severity=Severity::Secondary
                    on_click=Callback::new(move |_| scans.clear_history())
                />
            </Card>
        })
    }
}
