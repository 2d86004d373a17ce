//! DocumentHost trait for abstracting the page the engine runs against.
//!
//! The engine never touches a DOM directly. Everything it needs to know about
//! anchors, the viewport and the URL goes through this trait, which lets the
//! same code drive a real browser window or a simulated document in tests.

use std::fmt::Debug;

/// Motion used for a programmatic scroll.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScrollBehavior {
    /// Animated scroll, used for TOC clicks.
    #[default]
    Smooth,
    /// Immediate jump, used when restoring a deep link on page load.
    Instant,
}

impl ScrollBehavior {
    pub fn as_str(self) -> &'static str {
        match self {
            ScrollBehavior::Smooth => "smooth",
            ScrollBehavior::Instant => "instant",
        }
    }
}

/// Work deferred until the current rendering pass has completed.
pub type RenderCallback = Box<dyn FnOnce()>;

/// A page document as seen by the navigation engine.
///
/// All calls happen on the UI thread, so implementations are neither `Send`
/// nor `Sync`.
pub trait DocumentHost: Debug {
    /// Check whether an anchor element with this identifier exists.
    fn has_anchor(&self, id: &str) -> bool {
        self.anchor_document_top(id).is_some()
    }

    /// Top edge of the anchor, relative to the full document (not the viewport).
    ///
    /// Returns `None` if no such anchor exists.
    fn anchor_document_top(&self, id: &str) -> Option<f64>;

    /// Current viewport width in CSS pixels, read fresh on every call.
    fn viewport_width(&self) -> f64;

    /// Current viewport height in CSS pixels.
    fn viewport_height(&self) -> f64;

    /// Current vertical scroll offset of the document.
    fn scroll_top(&self) -> f64;

    /// Start a scroll to `top`. Fire-and-forget: a later call supersedes it.
    fn scroll_to(&self, top: f64, behavior: ScrollBehavior);

    /// Raw URL fragment including the leading `#`, if any.
    fn location_fragment(&self) -> Option<String>;

    /// Run `callback` once the current rendering pass has completed.
    fn schedule_after_render(&self, callback: RenderCallback);

    /// Returns a human-readable name for this host (for logging/debugging).
    fn name(&self) -> &'static str;
}
