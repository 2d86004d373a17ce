//! Header-aware scrolling to sections.

use crate::config::HeaderOffsets;
use log::debug;
use sectionnav_traits::{DocumentHost, ScrollBehavior};

/// Computes scroll offsets that place an anchor just below the fixed header
/// and issues the scroll.
///
/// The navigator never touches the active section; observer reports confirm
/// the new position once the scroll settles.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollNavigator {
    header: HeaderOffsets,
}

impl ScrollNavigator {
    pub fn new(header: HeaderOffsets) -> Self {
        Self { header }
    }

    pub fn header(&self) -> &HeaderOffsets {
        &self.header
    }

    /// Header offset for the viewport as it is right now.
    ///
    /// Read on every call since the reader may resize or rotate between
    /// navigations.
    pub fn header_offset(&self, host: &dyn DocumentHost) -> f64 {
        self.header.offset_for(host.viewport_width())
    }

    /// Document scroll position that puts `id`'s anchor just below the header.
    ///
    /// Returns `None` if the anchor does not exist.
    pub fn target_offset(&self, host: &dyn DocumentHost, id: &str) -> Option<f64> {
        let anchor_top = host.anchor_document_top(id)?;
        Some((anchor_top - self.header_offset(host)).max(0.0))
    }

    /// Scrolls to `id`. Missing anchors are a silent no-op.
    ///
    /// Fire-and-forget: the returned offset is what was requested, not a
    /// completion signal. A later call simply redirects the scroll.
    pub fn scroll_to_section(
        &self,
        host: &dyn DocumentHost,
        id: &str,
        behavior: ScrollBehavior,
    ) -> Option<f64> {
        let Some(top) = self.target_offset(host, id) else {
            debug!("No anchor '{}' on {}; skipping scroll", id, host.name());
            return None;
        };
        debug!("Scrolling to '{}' at {}px ({})", id, top, behavior.as_str());
        host.scroll_to(top, behavior);
        Some(top)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sectionnav_traits::InMemoryDocument;

    fn document(width: f64) -> InMemoryDocument {
        InMemoryDocument::new()
            .with_viewport(width, 900.0)
            .with_anchor("intro", 40.0)
            .with_anchor("setup", 1500.0)
    }

    #[test]
    fn subtracts_desktop_header_on_wide_viewports() {
        let doc = document(1280.0);
        let navigator = ScrollNavigator::default();
        assert_eq!(navigator.target_offset(&doc, "setup"), Some(1420.0));
    }

    #[test]
    fn uses_narrow_offset_below_breakpoint() {
        let doc = document(390.0);
        let navigator = ScrollNavigator::default();
        assert_eq!(navigator.target_offset(&doc, "setup"), Some(1500.0));
    }

    #[test]
    fn re_evaluates_width_on_every_call() {
        let doc = document(1280.0);
        let navigator = ScrollNavigator::default();
        assert_eq!(navigator.target_offset(&doc, "setup"), Some(1420.0));

        doc.resize(600.0, 900.0);
        assert_eq!(navigator.target_offset(&doc, "setup"), Some(1500.0));
    }

    #[test]
    fn clamps_offset_at_document_top() {
        let doc = document(1280.0);
        let navigator = ScrollNavigator::default();
        assert_eq!(navigator.target_offset(&doc, "intro"), Some(0.0));
    }

    #[test]
    fn missing_anchor_is_a_silent_no_op() {
        let doc = document(1280.0);
        let navigator = ScrollNavigator::default();
        assert_eq!(
            navigator.scroll_to_section(&doc, "nowhere", ScrollBehavior::Smooth),
            None
        );
        assert!(doc.scroll_log().is_empty());
    }

    #[test]
    fn issues_scroll_with_requested_behavior() {
        let doc = document(1280.0);
        let navigator = ScrollNavigator::new(HeaderOffsets {
            desktop: 64.0,
            ..HeaderOffsets::default()
        });

        navigator.scroll_to_section(&doc, "setup", ScrollBehavior::Instant);
        let request = doc.last_scroll().unwrap();
        assert_eq!(request.top, 1436.0);
        assert_eq!(request.behavior, ScrollBehavior::Instant);
        assert_eq!(doc.scroll_top(), 1436.0);
    }
}
