//! `SectionNav`, the JavaScript-facing page lifecycle.

use crate::dom::WebDocument;
use crate::error::SectionNavError;
use crate::observer::WebIntersectionSource;
use crate::types::{parse_options, parse_sections};
use log::{debug, warn};
use sectionnav_core::{
    DeepLinkOutcome, NavConfig, PageArrival, PageSession, SectionRegistry, WeakActiveSection,
};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Window;

/// Keeps a table of contents in sync with the page.
///
/// # Example
///
/// ```javascript
/// const nav = new SectionNav([{ id: 'intro', label: 'Introduction' }]);
/// nav.onActiveChange((id) => highlight(id));
/// nav.mount();
/// ```
#[wasm_bindgen]
pub struct SectionNav {
    registry: SectionRegistry,
    config: NavConfig,
    host: Option<Rc<WebDocument>>,
    session: Option<PageSession>,
    listeners: Vec<js_sys::Function>,
    scroll_end: Option<ScrollEndListener>,
    navigation_id: u64,
}

#[wasm_bindgen]
impl SectionNav {
    /// Create a navigator for `sections` (an array of `{ id?, label }`).
    ///
    /// `options` follows the engine configuration: `band`, `header` and
    /// `suppressDuringProgrammaticScroll`, all optional.
    #[wasm_bindgen(constructor)]
    pub fn new(sections: JsValue, options: JsValue) -> Result<SectionNav, JsValue> {
        let registry = parse_sections(sections)?;
        let config = parse_options(options)?;
        Ok(Self {
            registry,
            config,
            host: None,
            session: None,
            listeners: Vec::new(),
            scroll_end: None,
            navigation_id: 0,
        })
    }

    /// Mount hook: start observing and restore the URL fragment, if any.
    ///
    /// Call after the page's anchors are in the document. Mounting an already
    /// mounted navigator starts over as a fresh page.
    #[wasm_bindgen]
    pub fn mount(&mut self) -> Result<(), JsValue> {
        self.unmount();

        let host = Rc::new(WebDocument::new().map_err(SectionNavError::from)?);
        let source = WebIntersectionSource::new(&host);
        self.navigation_id += 1;
        let arrival = PageArrival::from_host(self.navigation_id, &*host);

        let session = PageSession::mount(
            self.registry.clone(),
            self.config,
            host.clone(),
            &source,
            &arrival,
        );
        for listener in &self.listeners {
            subscribe_js(&session, listener.clone());
        }

        if self.config.suppress_during_programmatic_scroll {
            self.scroll_end =
                ScrollEndListener::attach(host.window(), session.active_state().downgrade());
        }

        self.host = Some(host);
        self.session = Some(session);
        Ok(())
    }

    /// Unmount hook: disconnect observation and drop page state. Idempotent.
    #[wasm_bindgen]
    pub fn unmount(&mut self) {
        self.scroll_end = None;
        if let Some(mut session) = self.session.take() {
            session.unmount();
        }
        self.host = None;
    }

    #[wasm_bindgen(getter, js_name = isMounted)]
    pub fn is_mounted(&self) -> bool {
        self.session.is_some()
    }

    /// TOC click handler. Returns the requested scroll offset, or `undefined`
    /// when the anchor is missing or the navigator is not mounted.
    #[wasm_bindgen(js_name = navigateTo)]
    pub fn navigate_to(&self, id: &str) -> Option<f64> {
        self.session.as_ref().and_then(|s| s.navigate_to(id))
    }

    /// Currently highlighted section id, or `undefined`.
    #[wasm_bindgen(js_name = activeSection)]
    pub fn active_section(&self) -> Option<String> {
        self.session
            .as_ref()
            .and_then(|s| s.active())
            .map(|id| id.to_string())
    }

    /// `[{ targetId, label, active }]` in declaration order.
    #[wasm_bindgen(js_name = tocEntries)]
    pub fn toc_entries(&self) -> Result<JsValue, JsValue> {
        let entries = match &self.session {
            Some(session) => session.toc_entries(),
            None => self.registry.toc_entries(None),
        };
        Ok(serde_wasm_bindgen::to_value(&entries).map_err(SectionNavError::from)?)
    }

    /// Register `callback(id | null)`, called whenever the active section
    /// changes. Listeners survive remounts.
    #[wasm_bindgen(js_name = onActiveChange)]
    pub fn on_active_change(&mut self, callback: js_sys::Function) {
        if let Some(session) = &self.session {
            subscribe_js(session, callback.clone());
        }
        self.listeners.push(callback);
    }

    /// Tell the navigator a programmatic scroll has come to rest.
    #[wasm_bindgen(js_name = scrollSettled)]
    pub fn scroll_settled(&self) {
        if let Some(session) = &self.session {
            session.scroll_settled();
        }
    }

    /// Client-side navigation that keeps this page mounted. Re-reads the URL
    /// fragment and restores it once per `navigation_id`. Ids only need to be
    /// unique among route changes; the mount is tracked on its own. Returns
    /// `true` when a scroll was scheduled.
    #[wasm_bindgen(js_name = handleNavigation)]
    pub fn handle_navigation(&mut self, navigation_id: u32) -> bool {
        let (Some(session), Some(host)) = (self.session.as_mut(), self.host.as_ref()) else {
            return false;
        };
        let arrival = PageArrival::from_host(u64::from(navigation_id), &**host);
        let outcome = session.on_navigation(&arrival);
        debug!("Navigation {} resolved to {:?}", navigation_id, outcome);
        matches!(outcome, DeepLinkOutcome::Scheduled(_))
    }
}

fn subscribe_js(session: &PageSession, callback: js_sys::Function) {
    session.subscribe(move |id| {
        let arg = id
            .map(|id| JsValue::from_str(id.as_str()))
            .unwrap_or(JsValue::NULL);
        if let Err(err) = callback.call1(&JsValue::NULL, &arg) {
            warn!("onActiveChange listener threw: {:?}", err);
        }
    });
}

/// `scrollend` listener that releases highlight suppression.
struct ScrollEndListener {
    window: Window,
    closure: Closure<dyn FnMut()>,
}

impl ScrollEndListener {
    fn attach(window: &Window, state: WeakActiveSection) -> Option<Self> {
        let closure: Closure<dyn FnMut()> = Closure::new(move || {
            if let Some(state) = state.upgrade() {
                state.release_suppression();
            }
        });
        match window.add_event_listener_with_callback("scrollend", closure.as_ref().unchecked_ref())
        {
            Ok(()) => Some(Self {
                window: window.clone(),
                closure,
            }),
            Err(err) => {
                warn!("Could not listen for scrollend: {:?}", err);
                None
            }
        }
    }
}

impl Drop for ScrollEndListener {
    fn drop(&mut self) {
        self.window
            .remove_event_listener_with_callback("scrollend", self.closure.as_ref().unchecked_ref())
            .ok();
    }
}
