//! `IntersectionObserver` as an [`IntersectionSource`].

use crate::dom::WebDocument;
use log::debug;
use sectionnav_traits::{
    HostError, IntersectionCallback, IntersectionEntry, IntersectionSource, ObservationHandle,
};
use sectionnav_types::{SectionId, ViewportBand};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window,
};

type ObserverClosure = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Creates one `IntersectionObserver` per observation, with the band as its
/// `rootMargin`.
#[derive(Debug, Clone)]
pub struct WebIntersectionSource {
    window: Window,
    document: Document,
}

impl WebIntersectionSource {
    pub fn new(host: &WebDocument) -> Self {
        Self {
            window: host.window().clone(),
            document: host.document().clone(),
        }
    }

    pub fn is_supported(&self) -> bool {
        js_sys::Reflect::has(&self.window, &JsValue::from_str("IntersectionObserver"))
            .unwrap_or(false)
    }
}

impl IntersectionSource for WebIntersectionSource {
    fn observe(
        &self,
        targets: &[SectionId],
        band: &ViewportBand,
        callback: IntersectionCallback,
    ) -> Result<Box<dyn ObservationHandle>, HostError> {
        if !self.is_supported() {
            return Err(HostError::Unsupported(
                "window.IntersectionObserver is undefined".to_string(),
            ));
        }

        let mut callback = callback;
        let closure: ObserverClosure = Closure::new(
            move |records: js_sys::Array, _observer: IntersectionObserver| {
                let entries: Vec<IntersectionEntry> = records
                    .iter()
                    .filter_map(|record| record.dyn_into::<IntersectionObserverEntry>().ok())
                    .map(|record| {
                        let id = record.target().id();
                        if record.is_intersecting() {
                            IntersectionEntry::entered(id)
                        } else {
                            IntersectionEntry::left(id)
                        }
                    })
                    .collect();
                if !entries.is_empty() {
                    callback(entries.as_slice());
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_root_margin(&band.root_margin());
        init.set_threshold(&JsValue::from_f64(0.0));

        let observer = IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &init)
            .map_err(|err| HostError::Platform(format!("{:?}", err)))?;

        for target in targets {
            match self.document.get_element_by_id(target.as_str()) {
                Some(element) => observer.observe(&element),
                None => debug!("Anchor '{}' vanished before observation", target),
            }
        }

        Ok(Box::new(WebObservation {
            observer: Some(observer),
            _closure: closure,
        }))
    }

    fn name(&self) -> &'static str {
        "IntersectionObserver"
    }
}

/// Owns the observer and its JS closure. The closure lives exactly as long as
/// the observer can call it.
struct WebObservation {
    observer: Option<IntersectionObserver>,
    _closure: ObserverClosure,
}

impl ObservationHandle for WebObservation {
    fn disconnect(&mut self) {
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
    }

    fn is_connected(&self) -> bool {
        self.observer.is_some()
    }
}

impl Drop for WebObservation {
    fn drop(&mut self) {
        self.disconnect();
    }
}
