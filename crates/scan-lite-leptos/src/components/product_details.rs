//! Product details view - shows the barcode the route was opened with

use crate::theme::{Card, Icon};
use leptos::prelude::*;
use leptos_router::components::A;
use scan_lite_routes::ProductDetailsProps;

#[component]
pub fn ProductDetailsView(input: ProductDetailsProps) -> impl IntoView {
    let barcode = input.barcode;
    let symbology = barcode.symbology();

    view! {
        <Card title="Product">
            <dl class="product-details">
                <dt>"Barcode"</dt>
                <dd class="product-barcode">{barcode.to_string()}</dd>
                <dt>"Format"</dt>
                <dd class="product-symbology">{symbology.label()}</dd>
            </dl>
            <A href="/">
                <span class="p-button p-button-secondary">
                    <Icon name="arrow-left" />
                    <span class="p-button-label">"Scan another"</span>
                </span>
            </A>
        </Card>
    }
}
