//! WebAssembly bindings for the section navigation engine.
//!
//! This crate backs the engine's [`DocumentHost`](sectionnav_traits::DocumentHost)
//! and [`IntersectionSource`](sectionnav_traits::IntersectionSource) seams with
//! the browser's DOM and `IntersectionObserver`, and exposes a `SectionNav`
//! class to JavaScript.
//!
//! ## Module Structure
//!
//! - [`nav`] - `SectionNav`, the JavaScript-facing mount/unmount API
//! - [`dom`] - `WebDocument`, the window and document as a document host
//! - [`observer`] - `IntersectionObserver` wrapper
//! - [`error`] - Error types with JavaScript interop
//! - [`types`] - Conversion of JavaScript sections and options
//!
//! # Example
//!
//! ```javascript
//! import init, { SectionNav } from '@sectionnav/wasm';
//!
//! await init();
//!
//! const nav = new SectionNav(
//!   [{ id: 'intro', label: 'Introduction' }, { label: 'Getting Started' }],
//!   { header: { desktop: 72 }, suppressDuringProgrammaticScroll: true },
//! );
//! nav.onActiveChange((id) => renderToc(nav.tocEntries()));
//! nav.mount();
//!
//! // TOC link click
//! nav.navigateTo('getting-started');
//!
//! // Route change
//! nav.unmount();
//! ```
//!
//! # Browser Support
//!
//! Live highlighting needs `IntersectionObserver`. Without it, navigation and
//! deep links keep working and no section is ever highlighted.

pub mod dom;
pub mod error;
pub mod nav;
pub mod observer;
pub mod types;

pub use dom::WebDocument;
pub use error::{ErrorCode, SectionNavError};
pub use nav::SectionNav;
pub use observer::WebIntersectionSource;

use wasm_bindgen::prelude::*;

/// Initialize the WASM module.
///
/// Sets up panic hooks for better error messages in the browser console.
/// It is called automatically when using wasm-pack's generated JavaScript.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    #[cfg(feature = "console-logging")]
    {
        console_log::init_with_level(log::Level::Debug).ok();
    }
}

/// Get the version of the sectionnav-wasm library.
#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
