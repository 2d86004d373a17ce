//! WebAssembly integration tests.
//!
//! These tests run in a headless browser using wasm-bindgen-test.
//!
//! Run with: wasm-pack test --headless --chrome crates/wasm

#![cfg(target_arch = "wasm32")]

use sectionnav_traits::{DocumentHost, IntersectionSource};
use sectionnav_wasm::{SectionNav, WebDocument, WebIntersectionSource};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn add_heading(id: &str, text: &str) {
    let document = web_sys::window().unwrap().document().unwrap();
    let heading = document.create_element("h2").unwrap();
    heading.set_id(id);
    heading.set_text_content(Some(text));
    document.body().unwrap().append_child(&heading).unwrap();
}

fn sections() -> JsValue {
    js_sys::JSON::parse(r#"[{"id":"web-intro","label":"Introduction"},{"label":"Web Setup"}]"#)
        .unwrap()
}

#[wasm_bindgen_test]
fn test_init() {
    let version = sectionnav_wasm::get_version();
    assert!(!version.is_empty());
}

#[wasm_bindgen_test]
fn test_web_document_finds_anchors() {
    add_heading("web-anchor", "Anchor");
    let host = WebDocument::new().expect("window should exist");

    assert!(host.has_anchor("web-anchor"));
    assert!(!host.has_anchor("web-missing"));
    assert!(host.viewport_width() > 0.0);
    assert_eq!(host.name(), "WebDocument");
}

#[wasm_bindgen_test]
fn test_intersection_observer_is_available() {
    let host = WebDocument::new().unwrap();
    let source = WebIntersectionSource::new(&host);
    assert!(source.is_supported());
    assert_eq!(source.name(), "IntersectionObserver");
}

#[wasm_bindgen_test]
fn test_rejects_invalid_options() {
    let options = js_sys::JSON::parse(r#"{"header":{"desktop":-5}}"#).unwrap();
    let result = SectionNav::new(sections(), options);
    let err = result.err().expect("negative header must be rejected");
    let code = js_sys::Reflect::get(&err, &"code".into()).unwrap();
    assert_eq!(code.as_string().as_deref(), Some("CONFIG_ERROR"));
}

#[wasm_bindgen_test]
fn test_toc_entries_before_mount() {
    let nav = SectionNav::new(sections(), JsValue::UNDEFINED).unwrap();
    let entries = nav.toc_entries().unwrap();
    let array = js_sys::Array::from(&entries);
    assert_eq!(array.length(), 2);

    let second = array.get(1);
    let target = js_sys::Reflect::get(&second, &"targetId".into()).unwrap();
    assert_eq!(target.as_string().as_deref(), Some("web-setup"));
}

#[wasm_bindgen_test]
fn test_mount_navigate_unmount() {
    add_heading("web-intro", "Introduction");
    add_heading("web-setup", "Web Setup");

    let mut nav = SectionNav::new(sections(), JsValue::UNDEFINED).unwrap();
    assert_eq!(nav.navigate_to("web-setup"), None);

    nav.mount().unwrap();
    assert!(nav.is_mounted());
    assert!(nav.navigate_to("web-setup").is_some());
    assert_eq!(nav.active_section().as_deref(), Some("web-setup"));
    assert_eq!(nav.navigate_to("web-nowhere"), None);

    nav.unmount();
    nav.unmount();
    assert!(!nav.is_mounted());
    assert_eq!(nav.active_section(), None);
}
