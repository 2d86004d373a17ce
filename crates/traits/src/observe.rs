//! IntersectionSource trait for event-driven viewport observation.

use crate::error::HostError;
use sectionnav_types::{SectionId, ViewportBand};

/// Direction of an intersection change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Entered,
    Left,
}

/// One intersection change for a single anchor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntersectionEntry {
    pub target: SectionId,
    pub kind: EntryKind,
}

impl IntersectionEntry {
    pub fn entered(target: impl Into<SectionId>) -> Self {
        Self {
            target: target.into(),
            kind: EntryKind::Entered,
        }
    }

    pub fn left(target: impl Into<SectionId>) -> Self {
        Self {
            target: target.into(),
            kind: EntryKind::Left,
        }
    }

    pub fn is_entered(&self) -> bool {
        self.kind == EntryKind::Entered
    }
}

/// Receives batches of entries, in event order.
pub type IntersectionCallback = Box<dyn FnMut(&[IntersectionEntry])>;

/// A live observation. Dropping or disconnecting it stops delivery.
pub trait ObservationHandle {
    fn disconnect(&mut self);

    fn is_connected(&self) -> bool;
}

/// A platform primitive that reports anchors entering and leaving a band.
///
/// Delivery only happens when an anchor's intersection status changes; there is
/// no per-frame polling.
pub trait IntersectionSource {
    /// Start observing `targets` relative to `band`.
    ///
    /// # Errors
    ///
    /// Returns `HostError::Unsupported` if the platform has no observation
    /// primitive. Callers degrade to "never highlighted" in that case.
    fn observe(
        &self,
        targets: &[SectionId],
        band: &ViewportBand,
        callback: IntersectionCallback,
    ) -> Result<Box<dyn ObservationHandle>, HostError>;

    fn name(&self) -> &'static str;
}
