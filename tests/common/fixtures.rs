//! Pages shared by the integration tests.
//!
//! The tutorial page has a 1000px tall viewport, so the default band covers
//! viewport rows 80..300. Anchors are 32px tall headings.

use sectionnav::{InMemoryDocument, Section, SectionRegistry};

pub const INTRO_TOP: f64 = 100.0;
pub const SETUP_TOP: f64 = 1200.0;
pub const DONE_TOP: f64 = 2400.0;
pub const DESKTOP_HEADER: f64 = 80.0;

pub fn tutorial_registry() -> SectionRegistry {
    SectionRegistry::new(vec![
        Section::new("intro", "Introduction"),
        Section::new("setup", "Setup"),
        Section::new("done", "Done"),
    ])
}

/// The tutorial registry plus a section the page never renders.
pub fn registry_with_optional_section() -> SectionRegistry {
    SectionRegistry::new(vec![
        Section::new("intro", "Introduction"),
        Section::new("setup", "Setup"),
        Section::new("troubleshooting", "Troubleshooting"),
        Section::new("done", "Done"),
    ])
}

pub fn tutorial_page() -> InMemoryDocument {
    InMemoryDocument::new()
        .with_viewport(1280.0, 1000.0)
        .with_document_height(4000.0)
        .with_anchor("intro", INTRO_TOP)
        .with_anchor("setup", SETUP_TOP)
        .with_anchor("done", DONE_TOP)
}

/// The tutorial page on a phone-sized viewport.
pub fn narrow_tutorial_page() -> InMemoryDocument {
    InMemoryDocument::new()
        .with_viewport(390.0, 800.0)
        .with_document_height(4000.0)
        .with_anchor("intro", INTRO_TOP)
        .with_anchor("setup", SETUP_TOP)
        .with_anchor("done", DONE_TOP)
}
