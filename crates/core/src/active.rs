//! Per-page active-section state.
//!
//! One [`ActiveSection`] exists per mounted page. It is created on mount,
//! written by observer batches and TOC clicks, and detached on unmount; after
//! that every write is dropped. Clones share the same value, so the TOC
//! renderer and the observer callback see one source of truth without any
//! process-wide singleton.

use log::trace;
use sectionnav_traits::IntersectionEntry;
use sectionnav_types::SectionId;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

type Listener = Rc<dyn Fn(Option<&SectionId>)>;

/// Handle returned by [`ActiveSection::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Default)]
struct ActiveInner {
    current: Option<SectionId>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
    /// Target of an in-flight programmatic scroll, while suppression is armed.
    suppressed_until: Option<SectionId>,
    detached: bool,
}

/// The currently highlighted section of one page instance.
#[derive(Clone, Default)]
pub struct ActiveSection {
    inner: Rc<RefCell<ActiveInner>>,
}

/// Non-owning reference held by observer callbacks and deferred work.
#[derive(Clone, Default)]
pub struct WeakActiveSection {
    inner: Weak<RefCell<ActiveInner>>,
}

impl WeakActiveSection {
    pub fn upgrade(&self) -> Option<ActiveSection> {
        self.inner.upgrade().map(|inner| ActiveSection { inner })
    }

    /// True while the page that owns the state is still mounted.
    pub fn is_live(&self) -> bool {
        self.upgrade().is_some_and(|state| !state.is_detached())
    }
}

impl fmt::Debug for ActiveSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("ActiveSection")
            .field("current", &inner.current)
            .field("listeners", &inner.listeners.len())
            .field("suppressed_until", &inner.suppressed_until)
            .field("detached", &inner.detached)
            .finish()
    }
}

impl ActiveSection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn downgrade(&self) -> WeakActiveSection {
        WeakActiveSection {
            inner: Rc::downgrade(&self.inner),
        }
    }

    pub fn current(&self) -> Option<SectionId> {
        self.inner.borrow().current.clone()
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.inner
            .borrow()
            .current
            .as_ref()
            .is_some_and(|current| current == id)
    }

    pub fn is_detached(&self) -> bool {
        self.inner.borrow().detached
    }

    /// Overwrites the active section (last write wins).
    ///
    /// Returns `true` if the value changed. Writes after [`detach`](Self::detach)
    /// are ignored.
    pub fn set(&self, id: SectionId) -> bool {
        self.write(Some(id))
    }

    /// Applies an observer batch in event order.
    ///
    /// Only `Entered` entries write; the last one in the batch wins. While
    /// suppression is armed, entries for sections other than the scroll target
    /// are skipped, and the target's own entry releases suppression.
    pub fn apply_batch(&self, entries: &[IntersectionEntry]) -> bool {
        let winner = {
            let mut inner = self.inner.borrow_mut();
            if inner.detached {
                trace!("dropping observer batch of {} after detach", entries.len());
                return false;
            }
            let mut winner = None;
            for entry in entries.iter().filter(|e| e.is_entered()) {
                if let Some(target) = inner.suppressed_until.clone() {
                    if target != entry.target {
                        trace!("suppressed entry for '{}' during scroll to '{}'", entry.target, target);
                        continue;
                    }
                    inner.suppressed_until = None;
                }
                winner = Some(entry.target.clone());
            }
            winner
        };
        match winner {
            Some(id) => self.write(Some(id)),
            None => false,
        }
    }

    /// Ignore observer entries for other sections until `target` enters the
    /// band or [`release_suppression`](Self::release_suppression) is called.
    pub fn suppress_until(&self, target: SectionId) {
        let mut inner = self.inner.borrow_mut();
        if !inner.detached {
            inner.suppressed_until = Some(target);
        }
    }

    pub fn release_suppression(&self) {
        self.inner.borrow_mut().suppressed_until = None;
    }

    pub fn is_suppressed(&self) -> bool {
        self.inner.borrow().suppressed_until.is_some()
    }

    /// Registers a change listener. It is called with the new value whenever
    /// the active section actually changes.
    pub fn subscribe(&self, listener: impl Fn(Option<&SectionId>) + 'static) -> SubscriptionId {
        let mut inner = self.inner.borrow_mut();
        let id = SubscriptionId(inner.next_subscription);
        inner.next_subscription += 1;
        if !inner.detached {
            inner.listeners.push((id, Rc::new(listener)));
        }
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.inner.borrow_mut();
        let before = inner.listeners.len();
        inner.listeners.retain(|(sub, _)| *sub != id);
        inner.listeners.len() != before
    }

    /// Ends the page lifecycle: clears the value, drops listeners and
    /// rejects every later write.
    pub fn detach(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.detached = true;
        inner.current = None;
        inner.suppressed_until = None;
        inner.listeners.clear();
    }

    fn write(&self, value: Option<SectionId>) -> bool {
        let listeners: Vec<Listener> = {
            let mut inner = self.inner.borrow_mut();
            if inner.detached {
                trace!("ignoring active-section write after detach: {:?}", value);
                return false;
            }
            if inner.current == value {
                return false;
            }
            inner.current = value.clone();
            inner.listeners.iter().map(|(_, l)| Rc::clone(l)).collect()
        };
        for listener in listeners {
            (*listener)(value.as_ref());
        }
        true
    }
}
