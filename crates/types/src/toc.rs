use crate::ids::SectionId;
use serde::Serialize;

/// An entry in the "on this page" table of contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TocEntry {
    /// The anchor ID this entry links to.
    pub target_id: SectionId,
    /// The text shown for the entry.
    pub label: String,
    /// Whether the entry carries the "active" style.
    pub active: bool,
}

impl TocEntry {
    /// The `href` value for the entry's link.
    pub fn href(&self) -> String {
        format!("#{}", self.target_id)
    }
}
