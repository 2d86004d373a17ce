//! Viewport observation feeding the active section.

use crate::active::ActiveSection;
use log::{debug, trace, warn};
use sectionnav_traits::{DocumentHost, IntersectionCallback, IntersectionEntry, IntersectionSource, ObservationHandle};
use sectionnav_types::{SectionId, SectionRegistry, ViewportBand};

/// Observation state, exposed for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObserverStatus {
    /// Watching this many anchors.
    Observing { targets: usize },
    /// No registered section had an anchor in the document.
    Idle,
    /// The platform has no observation primitive; nothing is ever highlighted.
    Unsupported,
    /// The platform refused to observe for another reason.
    Failed(String),
    /// Observation was torn down.
    Stopped,
}

/// Watches the registry's anchors and writes band entries into the active
/// section.
///
/// The observation is acquired in [`start`](Self::start) and released by
/// [`stop`](Self::stop) or on drop, whichever comes first, so no exit path
/// leaves a callback connected.
pub struct ViewportObserver {
    handle: Option<Box<dyn ObservationHandle>>,
    status: ObserverStatus,
}

impl std::fmt::Debug for ViewportObserver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewportObserver")
            .field("status", &self.status)
            .field("connected", &self.handle.as_ref().is_some_and(|h| h.is_connected()))
            .finish()
    }
}

impl ViewportObserver {
    pub fn start(
        registry: &SectionRegistry,
        host: &dyn DocumentHost,
        source: &dyn IntersectionSource,
        band: &ViewportBand,
        state: &ActiveSection,
    ) -> Self {
        let targets: Vec<SectionId> = registry
            .ids()
            .filter(|id| {
                let present = host.has_anchor(id.as_str());
                if !present {
                    debug!("Skipping section '{}': no anchor in document", id);
                }
                present
            })
            .cloned()
            .collect();

        if targets.is_empty() {
            debug!("No anchors to observe on {}", host.name());
            return Self {
                handle: None,
                status: ObserverStatus::Idle,
            };
        }

        let weak = state.downgrade();
        let callback: IntersectionCallback = Box::new(move |entries: &[IntersectionEntry]| {
            match weak.upgrade() {
                Some(state) => {
                    state.apply_batch(entries);
                }
                None => trace!("observer batch arrived after page state was dropped"),
            }
        });

        match source.observe(&targets, band, callback) {
            Ok(handle) => {
                debug!(
                    "Observing {} of {} sections via {} (rootMargin {})",
                    targets.len(),
                    registry.len(),
                    source.name(),
                    band.root_margin()
                );
                Self {
                    handle: Some(handle),
                    status: ObserverStatus::Observing {
                        targets: targets.len(),
                    },
                }
            }
            Err(err) if err.is_unsupported() => {
                warn!("Live section highlighting disabled: {}", err);
                Self {
                    handle: None,
                    status: ObserverStatus::Unsupported,
                }
            }
            Err(err) => {
                warn!("Could not observe sections: {}", err);
                Self {
                    handle: None,
                    status: ObserverStatus::Failed(err.to_string()),
                }
            }
        }
    }

    pub fn status(&self) -> &ObserverStatus {
        &self.status
    }

    pub fn is_observing(&self) -> bool {
        matches!(self.status, ObserverStatus::Observing { .. })
    }

    /// Disconnects the observation. Idempotent.
    pub fn stop(&mut self) {
        if let Some(mut handle) = self.handle.take() {
            handle.disconnect();
            debug!("Viewport observer disconnected");
        }
        self.status = ObserverStatus::Stopped;
    }
}

impl Drop for ViewportObserver {
    fn drop(&mut self) {
        if self.handle.is_some() {
            self.stop();
        }
    }
}
