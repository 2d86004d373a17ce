pub mod error;
pub mod host;
pub mod memory;
pub mod observe;

pub use error::HostError;
pub use host::{DocumentHost, RenderCallback, ScrollBehavior};
pub use memory::{InMemoryDocument, ScrollRequest};
pub use observe::{
    EntryKind, IntersectionCallback, IntersectionEntry, IntersectionSource, ObservationHandle,
};
