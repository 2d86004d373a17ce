//! Section navigation engine.
//!
//! Keeps an "on this page" table of contents in sync with the reader's scroll
//! position, scrolls to sections below a fixed header, and restores deep-linked
//! sections on arrival. The engine talks to the page only through the
//! [`DocumentHost`] and [`IntersectionSource`] traits, so it runs unchanged
//! against a browser window or an [`InMemoryDocument`].
//!
//! ## Module Structure
//!
//! - [`active`] - per-page active-section state
//! - [`observer`] - viewport observation feeding the active section
//! - [`navigator`] - header-aware scroll offsets
//! - [`deep_link`] - URL fragment restoration on page arrival
//! - [`session`] - mount/unmount lifecycle tying the pieces together
//! - [`config`] - engine configuration
//! - [`error`] - error types

pub mod active;
pub mod config;
pub mod deep_link;
pub mod error;
pub mod navigator;
pub mod observer;
pub mod session;

pub use active::{ActiveSection, SubscriptionId, WeakActiveSection};
pub use config::{HeaderOffsets, NavConfig};
pub use deep_link::{DeepLinkOutcome, DeepLinkResolver, PageArrival, parse_fragment};
pub use error::NavError;
pub use navigator::ScrollNavigator;
pub use observer::{ObserverStatus, ViewportObserver};
pub use session::PageSession;

pub use sectionnav_traits::{
    DocumentHost, EntryKind, HostError, InMemoryDocument, IntersectionEntry, IntersectionSource,
    ScrollBehavior,
};
pub use sectionnav_types::{Inset, Section, SectionId, SectionRegistry, TocEntry, ViewportBand};
