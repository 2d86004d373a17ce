pub mod band;
pub mod ids;
pub mod section;
pub mod toc;

pub use band::{Inset, ViewportBand};
pub use ids::SectionId;
pub use section::{Section, SectionRegistry};
pub use toc::TocEntry;
