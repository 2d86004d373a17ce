//! Page-level lifecycle: the mount and unmount hooks.
//!
//! A [`PageSession`] is the engine's face toward the TOC renderer and the
//! page's navigation lifecycle. Mounting creates fresh per-page state, starts
//! observation and resolves any inbound deep link; unmounting (explicitly or by
//! drop) disconnects the observer and detaches the state so that no callback
//! can write into a page that is no longer displayed.

use crate::active::{ActiveSection, SubscriptionId};
use crate::config::NavConfig;
use crate::deep_link::{DeepLinkOutcome, DeepLinkResolver, PageArrival};
use crate::navigator::ScrollNavigator;
use crate::observer::{ObserverStatus, ViewportObserver};
use log::{debug, info, warn};
use sectionnav_traits::{DocumentHost, IntersectionSource, ScrollBehavior};
use sectionnav_types::{SectionId, SectionRegistry, TocEntry};
use std::rc::Rc;

/// The navigation engine bound to one displayed page.
#[derive(Debug)]
pub struct PageSession {
    registry: SectionRegistry,
    config: NavConfig,
    host: Rc<dyn DocumentHost>,
    state: ActiveSection,
    observer: ViewportObserver,
    navigator: ScrollNavigator,
    resolver: DeepLinkResolver,
    last_outcome: DeepLinkOutcome,
    mounted: bool,
}

impl PageSession {
    /// Mount hook. Call once the page's anchors exist in the document.
    pub fn mount(
        registry: SectionRegistry,
        config: NavConfig,
        host: Rc<dyn DocumentHost>,
        source: &dyn IntersectionSource,
        arrival: &PageArrival,
    ) -> Self {
        for duplicate in registry.duplicate_ids() {
            warn!("Section id '{}' is declared more than once", duplicate);
        }

        let state = ActiveSection::new();
        let observer =
            ViewportObserver::start(&registry, host.as_ref(), source, &config.band, &state);
        let navigator = ScrollNavigator::new(config.header);
        // The arrival that mounted the page is resolved here and nowhere else;
        // route changes get their own resolver and their own id space.
        let last_outcome = DeepLinkResolver::new().resolve(
            arrival,
            Rc::clone(&host),
            navigator,
            state.downgrade(),
        );
        let resolver = DeepLinkResolver::new();

        info!(
            "Mounted page with {} sections on {} ({:?}, deep link {:?})",
            registry.len(),
            host.name(),
            observer.status(),
            last_outcome
        );

        Self {
            registry,
            config,
            host,
            state,
            observer,
            navigator,
            resolver,
            last_outcome,
            mounted: true,
        }
    }

    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// The currently highlighted section.
    pub fn active(&self) -> Option<SectionId> {
        self.state.current()
    }

    /// Shared handle to the page's active-section state.
    pub fn active_state(&self) -> &ActiveSection {
        &self.state
    }

    pub fn toc_entries(&self) -> Vec<TocEntry> {
        self.registry.toc_entries(self.state.current().as_ref())
    }

    pub fn subscribe(&self, listener: impl Fn(Option<&SectionId>) + 'static) -> SubscriptionId {
        self.state.subscribe(listener)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.state.unsubscribe(id)
    }

    pub fn observer_status(&self) -> &ObserverStatus {
        self.observer.status()
    }

    pub fn last_deep_link(&self) -> &DeepLinkOutcome {
        &self.last_outcome
    }

    /// TOC click handler.
    ///
    /// Highlights `id` right away, then smooth-scrolls to it. Missing anchors
    /// and unmounted pages are a silent no-op.
    pub fn navigate_to(&self, id: &str) -> Option<f64> {
        if !self.mounted {
            return None;
        }
        if !self.host.has_anchor(id) {
            debug!("Ignoring navigation to '{}': no such anchor", id);
            return None;
        }

        let target = SectionId::from(id);
        self.state.set(target.clone());
        if self.config.suppress_during_programmatic_scroll && self.scroll_will_move(id) {
            self.state.suppress_until(target);
        }
        self.navigator
            .scroll_to_section(self.host.as_ref(), id, ScrollBehavior::Smooth)
    }

    /// False when the scroll to `id` is a no-op or its anchor already sits in
    /// the band. Neither case produces an entry or a `scrollend` that would
    /// release suppression.
    fn scroll_will_move(&self, id: &str) -> bool {
        let host = self.host.as_ref();
        let (Some(offset), Some(anchor_top)) = (
            self.navigator.target_offset(host, id),
            host.anchor_document_top(id),
        ) else {
            return false;
        };
        let scroll_top = host.scroll_top();
        if (offset - scroll_top).abs() < 0.5 {
            return false;
        }
        !self
            .config
            .band
            .contains(anchor_top - scroll_top, host.viewport_height())
    }

    /// Navigation that changes the page while this session stays mounted
    /// (for example a client-side route change). Resolves the deep link once
    /// per navigation id. Ids are counted apart from the mount arrival, so a
    /// first route change may reuse the mount's id.
    pub fn on_navigation(&mut self, arrival: &PageArrival) -> DeepLinkOutcome {
        if !self.mounted {
            return DeepLinkOutcome::AlreadyResolved;
        }
        let outcome = self.resolver.resolve(
            arrival,
            Rc::clone(&self.host),
            self.navigator,
            self.state.downgrade(),
        );
        if outcome != DeepLinkOutcome::AlreadyResolved {
            self.last_outcome = outcome.clone();
        }
        outcome
    }

    /// The host reports that a programmatic scroll has come to rest.
    pub fn scroll_settled(&self) {
        self.state.release_suppression();
    }

    /// Unmount hook. Idempotent; also runs on drop.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.observer.stop();
        self.state.detach();
        info!("Unmounted page with {} sections", self.registry.len());
    }
}

impl Drop for PageSession {
    fn drop(&mut self) {
        self.unmount();
    }
}
