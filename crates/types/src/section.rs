//! Page-declared sections and the ordered registry that holds them.

use crate::ids::SectionId;
use crate::toc::TocEntry;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One navigable heading of a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Anchor identifier, unique within the page.
    pub id: SectionId,
    /// Display string for the TOC entry.
    pub label: String,
}

impl Section {
    pub fn new(id: impl Into<SectionId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }

    /// Builds a section whose id is the slug of its label.
    pub fn from_label(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            id: SectionId::from(slug::slugify(&label)),
            label,
        }
    }
}

/// The ordered, immutable list of sections a page declares.
///
/// Declaration order is the TOC's visual order, so it is preserved exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionRegistry {
    sections: Vec<Section>,
}

impl SectionRegistry {
    pub fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    /// Builds a registry from heading labels, slugifying each into an id.
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(labels.into_iter().map(Section::from_label).collect())
    }

    /// Parses a JSON array of `{"id": ..., "label": ...}` objects.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &SectionId> {
        self.sections.iter().map(|s| &s.id)
    }

    pub fn get(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn label(&self, id: &str) -> Option<&str> {
        self.get(id).map(|s| s.label.as_str())
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == id)
    }

    /// Ids declared more than once, each reported once in first-seen order.
    pub fn duplicate_ids(&self) -> Vec<SectionId> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        let mut duplicates = Vec::new();
        for section in &self.sections {
            if !seen.insert(section.id.clone()) && reported.insert(section.id.clone()) {
                duplicates.push(section.id.clone());
            }
        }
        duplicates
    }

    /// The TOC render model, with at most one entry marked active.
    pub fn toc_entries(&self, active: Option<&SectionId>) -> Vec<TocEntry> {
        let active_index = active.and_then(|id| self.position(id.as_str()));
        self.sections
            .iter()
            .enumerate()
            .map(|(index, section)| TocEntry {
                target_id: section.id.clone(),
                label: section.label.clone(),
                active: Some(index) == active_index,
            })
            .collect()
    }
}

impl FromIterator<Section> for SectionRegistry {
    fn from_iter<T: IntoIterator<Item = Section>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a SectionRegistry {
    type Item = &'a Section;
    type IntoIter = std::slice::Iter<'a, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.iter()
    }
}
