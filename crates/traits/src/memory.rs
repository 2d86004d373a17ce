//! An in-memory document host.
//!
//! Simulates anchors, a scrollable viewport, the URL fragment, render passes and
//! intersection delivery. Works on any target and backs the engine's tests.
//!
//! Intersection batches are computed from the band after every scroll and
//! whenever [`InMemoryDocument::flush`] runs. Smooth scrolls stay pending until
//! [`InMemoryDocument::settle`] (or [`InMemoryDocument::advance_smooth`]) moves
//! the viewport, which mirrors how a browser animates them.

use crate::error::HostError;
use crate::host::{DocumentHost, RenderCallback, ScrollBehavior};
use crate::observe::{IntersectionCallback, IntersectionEntry, IntersectionSource, ObservationHandle};
use sectionnav_types::{SectionId, ViewportBand};
use std::cell::{Cell, RefCell};
use std::collections::{HashSet, VecDeque};
use std::fmt;
use std::rc::Rc;

const DEFAULT_ANCHOR_HEIGHT: f64 = 32.0;

type Batch = (Rc<RefCell<IntersectionCallback>>, Vec<IntersectionEntry>);

/// A scroll request as issued by the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRequest {
    pub top: f64,
    pub behavior: ScrollBehavior,
}

#[derive(Debug, Clone)]
struct Anchor {
    id: SectionId,
    top: f64,
    height: f64,
}

struct Registration {
    targets: Vec<SectionId>,
    band: ViewportBand,
    callback: Rc<RefCell<IntersectionCallback>>,
    intersecting: HashSet<SectionId>,
    connected: Rc<Cell<bool>>,
}

struct DocumentState {
    anchors: Vec<Anchor>,
    viewport_width: f64,
    viewport_height: f64,
    document_height: f64,
    scroll_top: f64,
    fragment: Option<String>,
    render_queue: Vec<RenderCallback>,
    scroll_log: Vec<ScrollRequest>,
    pending_smooth: Option<f64>,
    observation_supported: bool,
    registrations: Vec<Registration>,
    outbox: VecDeque<Batch>,
    delivering: bool,
    rescan: bool,
}

impl Default for DocumentState {
    fn default() -> Self {
        Self {
            anchors: Vec::new(),
            viewport_width: 1280.0,
            viewport_height: 800.0,
            document_height: 10_000.0,
            scroll_top: 0.0,
            fragment: None,
            render_queue: Vec::new(),
            scroll_log: Vec::new(),
            pending_smooth: None,
            observation_supported: true,
            registrations: Vec::new(),
            outbox: VecDeque::new(),
            delivering: false,
            rescan: false,
        }
    }
}

impl DocumentState {
    fn max_scroll(&self) -> f64 {
        (self.document_height - self.viewport_height).max(0.0)
    }

    fn clamp_scroll(&self, top: f64) -> f64 {
        top.clamp(0.0, self.max_scroll())
    }

    fn anchor(&self, id: &str) -> Option<&Anchor> {
        self.anchors.iter().find(|a| a.id == id)
    }

    /// Diffs every connected registration against the current scroll position.
    fn collect_changes(&mut self) -> Vec<Batch> {
        let scroll_top = self.scroll_top;
        let viewport_height = self.viewport_height;
        let anchors = &self.anchors;
        let mut batches = Vec::new();

        for registration in &mut self.registrations {
            if !registration.connected.get() {
                continue;
            }
            let mut entries = Vec::new();
            for target in &registration.targets {
                let Some(anchor) = anchors.iter().find(|a| &a.id == target) else {
                    continue;
                };
                let now = registration.band.intersects(
                    anchor.top - scroll_top,
                    anchor.height,
                    viewport_height,
                );
                let before = registration.intersecting.contains(target);
                if now && !before {
                    registration.intersecting.insert(target.clone());
                    entries.push(IntersectionEntry::entered(target.clone()));
                } else if !now && before {
                    registration.intersecting.remove(target);
                    entries.push(IntersectionEntry::left(target.clone()));
                }
            }
            if !entries.is_empty() {
                batches.push((Rc::clone(&registration.callback), entries));
            }
        }
        batches
    }
}

/// Simulated document; clones share the same underlying state.
#[derive(Clone, Default)]
pub struct InMemoryDocument {
    state: Rc<RefCell<DocumentState>>,
}

impl fmt::Debug for InMemoryDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("InMemoryDocument")
            .field("anchors", &state.anchors.len())
            .field("viewport_width", &state.viewport_width)
            .field("viewport_height", &state.viewport_height)
            .field("scroll_top", &state.scroll_top)
            .field("fragment", &state.fragment)
            .finish()
    }
}

impl InMemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an anchor with the default heading height.
    pub fn with_anchor(self, id: impl Into<SectionId>, document_top: f64) -> Self {
        self.add_anchor(id, document_top, DEFAULT_ANCHOR_HEIGHT);
        self
    }

    pub fn with_viewport(self, width: f64, height: f64) -> Self {
        {
            let mut state = self.state.borrow_mut();
            state.viewport_width = width;
            state.viewport_height = height;
        }
        self
    }

    pub fn with_document_height(self, height: f64) -> Self {
        self.state.borrow_mut().document_height = height;
        self
    }

    pub fn with_fragment(self, fragment: impl Into<String>) -> Self {
        self.set_fragment(Some(fragment.into()));
        self
    }

    /// Simulates a platform that lacks an intersection primitive.
    pub fn without_observation(self) -> Self {
        self.state.borrow_mut().observation_supported = false;
        self
    }

    pub fn add_anchor(&self, id: impl Into<SectionId>, document_top: f64, height: f64) {
        self.state.borrow_mut().anchors.push(Anchor {
            id: id.into(),
            top: document_top,
            height,
        });
    }

    pub fn remove_anchor(&self, id: &str) {
        self.state.borrow_mut().anchors.retain(|a| a.id != id);
    }

    pub fn set_fragment(&self, fragment: Option<String>) {
        self.state.borrow_mut().fragment = fragment;
    }

    /// Resizes the viewport, as on window resize or device rotation.
    pub fn resize(&self, width: f64, height: f64) {
        {
            let mut state = self.state.borrow_mut();
            state.viewport_width = width;
            state.viewport_height = height;
            state.scroll_top = state.clamp_scroll(state.scroll_top);
        }
        self.flush();
    }

    /// Scroll initiated by the reader. Interrupts any smooth scroll in flight.
    pub fn user_scroll_to(&self, top: f64) {
        {
            let mut state = self.state.borrow_mut();
            state.pending_smooth = None;
            state.scroll_top = state.clamp_scroll(top);
        }
        self.flush();
    }

    /// Completes any smooth scroll in flight.
    pub fn settle(&self) {
        let target = self.state.borrow_mut().pending_smooth.take();
        if let Some(target) = target {
            {
                let mut state = self.state.borrow_mut();
                state.scroll_top = state.clamp_scroll(target);
            }
            self.flush();
        }
    }

    /// Moves a smooth scroll `fraction` of the remaining distance toward its
    /// target. A fraction of 1.0 or more completes it.
    pub fn advance_smooth(&self, fraction: f64) {
        if fraction >= 1.0 {
            self.settle();
            return;
        }
        {
            let mut state = self.state.borrow_mut();
            let Some(target) = state.pending_smooth else {
                return;
            };
            let next = state.scroll_top + (target - state.scroll_top) * fraction.max(0.0);
            state.scroll_top = state.clamp_scroll(next);
        }
        self.flush();
    }

    pub fn is_scrolling(&self) -> bool {
        self.state.borrow().pending_smooth.is_some()
    }

    /// Runs every callback queued with `schedule_after_render`.
    ///
    /// Callbacks queued while the pass runs wait for the next pass.
    pub fn run_render_pass(&self) {
        let queued: Vec<RenderCallback> = std::mem::take(&mut self.state.borrow_mut().render_queue);
        for callback in queued {
            callback();
        }
        self.flush();
    }

    pub fn pending_render_callbacks(&self) -> usize {
        self.state.borrow().render_queue.len()
    }

    /// Delivers intersection changes for the current scroll position.
    pub fn flush(&self) {
        let batches = self.state.borrow_mut().collect_changes();
        self.deliver(batches, true);
    }

    /// Delivers a hand-made batch to every connected observation.
    pub fn fire(&self, entries: &[IntersectionEntry]) {
        self.fire_where(entries, |connected| connected);
    }

    /// Delivers a batch to every observation ever registered, including
    /// disconnected ones. Models a callback that was already queued when the
    /// page tore down.
    pub fn fire_late(&self, entries: &[IntersectionEntry]) {
        self.fire_where(entries, |_| true);
    }

    fn fire_where(&self, entries: &[IntersectionEntry], include: impl Fn(bool) -> bool) {
        let batches: Vec<Batch> = self
            .state
            .borrow()
            .registrations
            .iter()
            .filter(|r| include(r.connected.get()))
            .map(|r| (Rc::clone(&r.callback), entries.to_vec()))
            .collect();
        self.deliver(batches, false);
    }

    /// Runs batches one at a time with no borrow of the document held.
    ///
    /// A delivery started from inside a callback (a listener that scrolls) is
    /// queued and run by the outer loop once the current callback returns, the
    /// way a browser delivers it on a later task. With `rescan`, the band is
    /// diffed again once the queue drains.
    fn deliver(&self, batches: Vec<Batch>, rescan: bool) {
        {
            let mut state = self.state.borrow_mut();
            state.outbox.extend(batches);
            state.rescan |= rescan;
            if state.delivering {
                return;
            }
            state.delivering = true;
        }
        loop {
            let next = {
                let mut state = self.state.borrow_mut();
                if state.outbox.is_empty() && std::mem::take(&mut state.rescan) {
                    let changes = state.collect_changes();
                    state.outbox.extend(changes);
                }
                let next = state.outbox.pop_front();
                if next.is_none() {
                    state.delivering = false;
                }
                next
            };
            let Some((callback, entries)) = next else {
                break;
            };
            let mut callback = callback.borrow_mut();
            (*callback)(entries.as_slice());
        }
    }

    pub fn scroll_log(&self) -> Vec<ScrollRequest> {
        self.state.borrow().scroll_log.clone()
    }

    pub fn last_scroll(&self) -> Option<ScrollRequest> {
        self.state.borrow().scroll_log.last().copied()
    }

    pub fn active_observations(&self) -> usize {
        self.state
            .borrow()
            .registrations
            .iter()
            .filter(|r| r.connected.get())
            .count()
    }

    /// Targets of the most recent observation, in registration order.
    pub fn observed_targets(&self) -> Vec<SectionId> {
        self.state
            .borrow()
            .registrations
            .last()
            .map(|r| r.targets.clone())
            .unwrap_or_default()
    }
}

impl DocumentHost for InMemoryDocument {
    fn anchor_document_top(&self, id: &str) -> Option<f64> {
        self.state.borrow().anchor(id).map(|a| a.top)
    }

    fn viewport_width(&self) -> f64 {
        self.state.borrow().viewport_width
    }

    fn viewport_height(&self) -> f64 {
        self.state.borrow().viewport_height
    }

    fn scroll_top(&self) -> f64 {
        self.state.borrow().scroll_top
    }

    fn scroll_to(&self, top: f64, behavior: ScrollBehavior) {
        {
            let mut state = self.state.borrow_mut();
            state.scroll_log.push(ScrollRequest { top, behavior });
            match behavior {
                ScrollBehavior::Smooth => {
                    state.pending_smooth = Some(top);
                    return;
                }
                ScrollBehavior::Instant => {
                    state.pending_smooth = None;
                    state.scroll_top = state.clamp_scroll(top);
                }
            }
        }
        self.flush();
    }

    fn location_fragment(&self) -> Option<String> {
        self.state.borrow().fragment.clone()
    }

    fn schedule_after_render(&self, callback: RenderCallback) {
        self.state.borrow_mut().render_queue.push(callback);
    }

    fn name(&self) -> &'static str {
        "InMemoryDocument"
    }
}

struct InMemoryObservation {
    connected: Rc<Cell<bool>>,
}

impl ObservationHandle for InMemoryObservation {
    fn disconnect(&mut self) {
        self.connected.set(false);
    }

    fn is_connected(&self) -> bool {
        self.connected.get()
    }
}

impl Drop for InMemoryObservation {
    fn drop(&mut self) {
        self.connected.set(false);
    }
}

impl IntersectionSource for InMemoryDocument {
    fn observe(
        &self,
        targets: &[SectionId],
        band: &ViewportBand,
        callback: IntersectionCallback,
    ) -> Result<Box<dyn ObservationHandle>, HostError> {
        let mut state = self.state.borrow_mut();
        if !state.observation_supported {
            return Err(HostError::Unsupported(
                "InMemoryDocument configured without observation".to_string(),
            ));
        }
        let connected = Rc::new(Cell::new(true));
        state.registrations.push(Registration {
            targets: targets.to_vec(),
            band: *band,
            callback: Rc::new(RefCell::new(callback)),
            intersecting: HashSet::new(),
            connected: Rc::clone(&connected),
        });
        Ok(Box::new(InMemoryObservation { connected }))
    }

    fn name(&self) -> &'static str {
        "InMemoryDocument"
    }
}
