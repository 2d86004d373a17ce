#![allow(dead_code)]

pub mod fixtures;

use sectionnav::{InMemoryDocument, NavConfig, PageArrival, PageSession, SectionId, SectionRegistry};
use std::cell::RefCell;
use std::rc::Rc;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Mounts `registry` on `doc`, which serves as both host and intersection source.
pub fn mount_on(
    doc: &InMemoryDocument,
    registry: SectionRegistry,
    config: NavConfig,
    arrival: PageArrival,
) -> PageSession {
    PageSession::mount(registry, config, Rc::new(doc.clone()), doc, &arrival)
}

/// Mounts with default configuration and no fragment.
pub fn mount_default(doc: &InMemoryDocument, registry: SectionRegistry) -> PageSession {
    mount_on(doc, registry, NavConfig::default(), PageArrival::new(1, None))
}

/// Records every active-section change the session reports.
pub fn record_changes(session: &PageSession) -> Rc<RefCell<Vec<Option<String>>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    session.subscribe(move |id| sink.borrow_mut().push(id.map(|id| id.to_string())));
    seen
}

/// Number of TOC entries currently marked active.
pub fn active_entry_count(session: &PageSession) -> usize {
    session.toc_entries().iter().filter(|e| e.active).count()
}

pub fn id(value: &str) -> SectionId {
    SectionId::from(value)
}
