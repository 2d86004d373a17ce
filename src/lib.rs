//! # sectionnav
//!
//! Keeps an "on this page" table of contents in sync with the reader's scroll
//! position.
//!
//! - **Scroll-spy**: the section whose anchor sits in the upper viewport band is
//!   highlighted in the TOC.
//! - **Header-aware scrolling**: TOC clicks scroll the target just below a fixed
//!   header whose height depends on the viewport width.
//! - **Deep links**: arriving with `#section` in the URL restores that section
//!   once layout has settled.
//!
//! The engine is platform-agnostic. A page talks to it through
//! [`DocumentHost`] and [`IntersectionSource`]; the `sectionnav-wasm` crate
//! implements both for browsers and [`InMemoryDocument`] implements both for
//! native use and tests.
//!
//! # Example
//!
//! ```
//! use sectionnav::{InMemoryDocument, NavConfig, PageArrival, PageSession, SectionRegistry};
//! use std::rc::Rc;
//!
//! let doc = InMemoryDocument::new()
//!     .with_anchor("introduction", 100.0)
//!     .with_anchor("setup", 1200.0);
//! let registry = SectionRegistry::from_labels(["Introduction", "Setup"]);
//!
//! let session = PageSession::mount(
//!     registry,
//!     NavConfig::default(),
//!     Rc::new(doc.clone()),
//!     &doc,
//!     &PageArrival::new(1, None),
//! );
//!
//! session.navigate_to("setup");
//! assert!(session.active().is_some_and(|id| id == "setup"));
//! ```

pub use sectionnav_core::*;

pub mod traits {
    //! Host seams, for implementing a new platform backend.
    pub use sectionnav_traits::*;
}

pub mod types {
    //! Foundation value types.
    pub use sectionnav_types::*;
}
