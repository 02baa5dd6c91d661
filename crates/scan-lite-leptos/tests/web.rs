//! Browser tests: run with `wasm-pack test --headless --firefox`

#![cfg(target_arch = "wasm32")]

use scan_lite_leptos::bootstrap::find_mount_target;
use scan_lite_leptos::storage::{clear_history, load_history, save_history, HISTORY_KEY};
use scan_lite_leptos::theme::{ensure_stylesheet, InputText, ICONS_LINK_ID, THEME_LINK_ID};
use scan_lite_leptos::{start, AppConfig, AppContext, BootstrapError, Plugin, Theme, ThemePlugin};
use scan_lite_routes::Barcode;
use leptos::prelude::*;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

fn add_mount_point(id: &str) -> web_sys::Element {
    let doc = document();
    let div = doc.create_element("div").unwrap();
    div.set_id(id);
    doc.body().unwrap().append_child(&div).unwrap();
    div
}

/// Mount the whole app while the browser sits at `path`, then put the
/// runner's URL back.
fn mount_app_at(path: &str, id: &str) -> web_sys::Element {
    let window = web_sys::window().unwrap();
    let history = window.history().unwrap();
    let original = window.location().href().unwrap();

    history
        .push_state_with_url(&JsValue::NULL, "", Some(path))
        .unwrap();
    let target = add_mount_point(id);
    let config = AppConfig {
        mount_selector: format!("#{}", id),
        ..AppConfig::default()
    };
    let mounted = start(config);
    history
        .replace_state_with_url(&JsValue::NULL, "", Some(&original))
        .unwrap();

    mounted.unwrap();
    target
}

fn text_of(target: &web_sys::Element, selector: &str) -> Option<String> {
    target
        .query_selector(selector)
        .unwrap()
        .and_then(|el| el.text_content())
}

#[wasm_bindgen_test]
fn test_root_shows_scanner() {
    let target = mount_app_at("/", "route-root");
    assert!(target.query_selector("#barcode-input").unwrap().is_some());
    assert!(target.query_selector(".product-barcode").unwrap().is_none());
}

#[wasm_bindgen_test]
fn test_product_route_shows_barcode() {
    let target = mount_app_at("/product/0001234567890", "route-product");
    assert_eq!(
        text_of(&target, ".product-barcode").as_deref(),
        Some("0001234567890")
    );
    assert_eq!(text_of(&target, ".product-symbology").as_deref(), Some("EAN-13"));
    assert!(target.query_selector("#barcode-input").unwrap().is_none());
}

#[wasm_bindgen_test]
fn test_product_route_decodes_barcode() {
    let target = mount_app_at("/product/ABC%20123+%2F9", "route-product-encoded");
    assert_eq!(
        text_of(&target, ".product-barcode").as_deref(),
        Some("ABC 123+/9")
    );
}

#[wasm_bindgen_test]
fn test_unknown_path_shows_not_found() {
    let target = mount_app_at("/no/such/page", "route-unknown");
    let message = text_of(&target, ".p-message-text").unwrap();
    assert_eq!(message, "Nothing lives at /no/such/page");
    assert!(target.query_selector("#barcode-input").unwrap().is_none());
    assert!(target.query_selector(".product-barcode").unwrap().is_none());
}

#[wasm_bindgen_test]
fn test_input_without_id_omits_attribute() {
    let target = add_mount_point("input-no-id");
    let parent: web_sys::HtmlElement = target.clone().dyn_into().unwrap();
    leptos::mount::mount_to(parent, || {
        view! { <InputText value=RwSignal::new(String::new()) placeholder="code" /> }
    })
    .forget();

    let input = target.query_selector("input").unwrap().unwrap();
    assert!(!input.has_attribute("id"));
    assert_eq!(input.get_attribute("placeholder").as_deref(), Some("code"));
}

#[wasm_bindgen_test]
fn test_start_fails_without_mount_target() {
    let config = AppConfig {
        mount_selector: "#no-such-mount-point".to_string(),
        ..AppConfig::default()
    };

    match start(config) {
        Err(BootstrapError::MountTargetMissing(selector)) => {
            assert_eq!(selector, "#no-such-mount-point")
        }
        other => panic!("expected MountTargetMissing, got {:?}", other),
    }
}

#[wasm_bindgen_test]
fn test_find_mount_target_rejects_svg() {
    let doc = document();
    let svg = doc
        .create_element_ns(Some("http://www.w3.org/2000/svg"), "svg")
        .unwrap();
    svg.set_id("svg-mount");
    doc.body().unwrap().append_child(&svg).unwrap();

    assert!(matches!(
        find_mount_target(&doc, "#svg-mount"),
        Err(BootstrapError::MountTargetNotHtml(_))
    ));
}

#[wasm_bindgen_test]
fn test_start_mounts_and_installs_stylesheets() {
    let target = add_mount_point("mount-ok");
    target.set_inner_html("<p id=\"placeholder\">loading</p>");

    let config = AppConfig {
        mount_selector: "#mount-ok".to_string(),
        ..AppConfig::default()
    };
    let mounted = start(config).unwrap();

    assert_eq!(mounted.selector, "#mount-ok");
    assert_eq!(mounted.plugins, vec!["router", "theme"]);
    assert!(document().get_element_by_id("placeholder").is_none());
    assert!(!target.inner_html().is_empty());

    let theme = document().get_element_by_id(THEME_LINK_ID).unwrap();
    assert_eq!(
        theme.get_attribute("href").as_deref(),
        Some("/themes/lara-light-blue/theme.css")
    );
    assert!(document().get_element_by_id(ICONS_LINK_ID).is_some());
}

#[wasm_bindgen_test]
fn test_theme_install_is_idempotent() {
    let plugin = ThemePlugin::new(Theme::LaraDarkBlue, "/themes", "/icons/icons.css");
    let mut ctx = AppContext::new(document(), AppConfig::default());

    plugin.install(&mut ctx).unwrap();
    plugin.install(&mut ctx).unwrap();

    let links = document()
        .query_selector_all(&format!("link#{}", THEME_LINK_ID))
        .unwrap();
    assert_eq!(links.length(), 1);
}

#[wasm_bindgen_test]
fn test_ensure_stylesheet_updates_href() {
    let doc = document();
    ensure_stylesheet(&doc, "test-sheet", "/a.css").unwrap();
    ensure_stylesheet(&doc, "test-sheet", "/b.css").unwrap();

    let link = doc.get_element_by_id("test-sheet").unwrap();
    assert_eq!(link.get_attribute("href").as_deref(), Some("/b.css"));
    assert_eq!(link.get_attribute("rel").as_deref(), Some("stylesheet"));
}

#[wasm_bindgen_test]
fn test_history_storage_round_trip() {
    let history = vec![
        Barcode::parse("0001234567890").unwrap(),
        Barcode::parse("4006381333931").unwrap(),
    ];
    save_history(&history);
    assert_eq!(load_history(), history);

    clear_history();
    assert!(load_history().is_empty());
}

#[wasm_bindgen_test]
fn test_corrupt_history_is_discarded() {
    let storage = web_sys::window().unwrap().local_storage().unwrap().unwrap();
    storage.set_item(HISTORY_KEY, "[\"ok\", \"not ok\"]").unwrap();
    assert!(load_history().is_empty());
    clear_history();
}
