//! Deep-link restoration on page arrival.
//!
//! When a reader lands on a page through a URL like `guide.html#setup`, the
//! page should open with `setup` already in position under the header. The
//! resolver looks the fragment up once per navigation, then defers an instant
//! scroll until the current render pass has finished so the anchor's position
//! is measured after layout has settled.

use crate::active::WeakActiveSection;
use crate::navigator::ScrollNavigator;
use log::debug;
use sectionnav_traits::{DocumentHost, ScrollBehavior};
use sectionnav_types::SectionId;
use std::rc::Rc;

/// Strips one leading `#` and surrounding whitespace; empty means absent.
pub fn parse_fragment(raw: &str) -> Option<SectionId> {
    let trimmed = raw.trim();
    let id = trimmed.strip_prefix('#').unwrap_or(trimmed).trim();
    if id.is_empty() {
        None
    } else {
        Some(SectionId::from(id))
    }
}

/// One navigation event that brought the reader to a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageArrival {
    /// Identifies the navigation. Re-renders of the same page reuse it.
    pub navigation_id: u64,
    /// Raw URL fragment, with or without the leading `#`.
    pub fragment: Option<String>,
}

impl PageArrival {
    pub fn new(navigation_id: u64, fragment: Option<String>) -> Self {
        Self {
            navigation_id,
            fragment,
        }
    }

    /// Reads the fragment from the host's current location.
    pub fn from_host(navigation_id: u64, host: &dyn DocumentHost) -> Self {
        Self::new(navigation_id, host.location_fragment())
    }
}

/// What the resolver decided for an arrival.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeepLinkOutcome {
    /// An instant scroll to this section runs after the render pass.
    Scheduled(SectionId),
    /// The URL carried no fragment.
    NoFragment,
    /// The fragment names no anchor on this page.
    UnknownTarget(SectionId),
    /// This navigation was already handled.
    AlreadyResolved,
}

/// Resolves URL fragments at most once per navigation.
#[derive(Debug, Clone, Default)]
pub struct DeepLinkResolver {
    last_navigation: Option<u64>,
}

impl DeepLinkResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_navigation(&self) -> Option<u64> {
        self.last_navigation
    }

    /// Handles `arrival`, scheduling an instant scroll if its fragment names an
    /// anchor on the page.
    ///
    /// The deferred scroll is skipped if `page` has been torn down by the time
    /// the render pass completes.
    pub fn resolve(
        &mut self,
        arrival: &PageArrival,
        host: Rc<dyn DocumentHost>,
        navigator: ScrollNavigator,
        page: WeakActiveSection,
    ) -> DeepLinkOutcome {
        if self.last_navigation == Some(arrival.navigation_id) {
            return DeepLinkOutcome::AlreadyResolved;
        }
        self.last_navigation = Some(arrival.navigation_id);

        let Some(id) = arrival.fragment.as_deref().and_then(parse_fragment) else {
            return DeepLinkOutcome::NoFragment;
        };

        if !host.has_anchor(id.as_str()) {
            debug!("Deep link '#{}' matches no anchor on {}", id, host.name());
            return DeepLinkOutcome::UnknownTarget(id);
        }

        debug!("Deep link '#{}' scheduled after render", id);
        let target = id.clone();
        let deferred_host = Rc::clone(&host);
        host.schedule_after_render(Box::new(move || {
            if !page.is_live() {
                debug!("Page torn down before deep link '#{}' could be restored", target);
                return;
            }
            navigator.scroll_to_section(deferred_host.as_ref(), target.as_str(), ScrollBehavior::Instant);
        }));

        DeepLinkOutcome::Scheduled(id)
    }
}
