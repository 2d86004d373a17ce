//! The browser window and document as a [`DocumentHost`].

use log::warn;
use sectionnav_traits::{DocumentHost, HostError, RenderCallback, ScrollBehavior};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, ScrollToOptions, Window};

/// Document host backed by `window` and `window.document`.
#[derive(Debug, Clone)]
pub struct WebDocument {
    window: Window,
    document: Document,
}

impl WebDocument {
    /// Binds to the global window. Fails outside a browser main thread.
    pub fn new() -> Result<Self, HostError> {
        let window = web_sys::window().ok_or(HostError::MissingGlobal("window"))?;
        let document = window
            .document()
            .ok_or(HostError::MissingGlobal("document"))?;
        Ok(Self { window, document })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    fn dimension(value: Result<JsValue, JsValue>) -> f64 {
        value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    }
}

impl DocumentHost for WebDocument {
    fn anchor_document_top(&self, id: &str) -> Option<f64> {
        let element = self.document.get_element_by_id(id)?;
        Some(element.get_bounding_client_rect().top() + self.scroll_top())
    }

    fn viewport_width(&self) -> f64 {
        Self::dimension(self.window.inner_width())
    }

    fn viewport_height(&self) -> f64 {
        Self::dimension(self.window.inner_height())
    }

    fn scroll_top(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn scroll_to(&self, top: f64, behavior: ScrollBehavior) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(match behavior {
            ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
            ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
        });
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    /// `location.hash`, URI-decoded, without the leading `#`.
    fn location_fragment(&self) -> Option<String> {
        let raw = self.window.location().hash().ok()?;
        let trimmed = raw.strip_prefix('#').unwrap_or(&raw);
        if trimmed.is_empty() {
            return None;
        }
        match js_sys::decode_uri_component(trimmed) {
            Ok(decoded) => Some(String::from(decoded)),
            Err(_) => Some(trimmed.to_string()),
        }
    }

    /// Runs `callback` on the next animation frame, after the pending layout.
    fn schedule_after_render(&self, callback: RenderCallback) {
        let frame = Closure::once_into_js(move || callback());
        if let Err(err) = self
            .window
            .request_animation_frame(frame.unchecked_ref())
        {
            warn!("requestAnimationFrame failed: {:?}", err);
        }
    }

    fn name(&self) -> &'static str {
        "WebDocument"
    }
}
