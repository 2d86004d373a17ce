//! Conversion of JavaScript sections and options.

use crate::error::SectionNavError;
use sectionnav_core::NavConfig;
use sectionnav_types::{Section, SectionRegistry};
use serde::Deserialize;
use wasm_bindgen::prelude::*;

/// A section as passed from JavaScript.
///
/// `id` is optional; when absent it is derived from the label the same way
/// the page slugs its headings.
#[derive(Debug, Clone, Deserialize)]
pub struct SectionInput {
    #[serde(default)]
    pub id: Option<String>,
    pub label: String,
}

impl From<SectionInput> for Section {
    fn from(input: SectionInput) -> Self {
        match input.id {
            Some(id) if !id.trim().is_empty() => Section::new(id, input.label),
            _ => Section::from_label(input.label),
        }
    }
}

/// Parses an array of `{ id?, label }` objects.
pub fn parse_sections(sections: JsValue) -> Result<SectionRegistry, SectionNavError> {
    let inputs: Vec<SectionInput> = serde_wasm_bindgen::from_value(sections)
        .map_err(|e| SectionNavError::config(format!("Invalid sections: {}", e)))?;
    Ok(inputs.into_iter().map(Section::from).collect())
}

/// Parses an options object. `undefined` and `null` mean defaults.
pub fn parse_options(options: JsValue) -> Result<NavConfig, SectionNavError> {
    if options.is_undefined() || options.is_null() {
        return Ok(NavConfig::default());
    }
    let config: NavConfig = serde_wasm_bindgen::from_value(options)
        .map_err(|e| SectionNavError::config(format!("Invalid options: {}", e)))?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_id_wins_over_label() {
        let section: Section = SectionInput {
            id: Some("intro".to_string()),
            label: "Introduction".to_string(),
        }
        .into();
        assert_eq!(section.id.as_str(), "intro");
    }

    #[test]
    fn blank_id_falls_back_to_slug() {
        let section: Section = SectionInput {
            id: Some("  ".to_string()),
            label: "Getting Started".to_string(),
        }
        .into();
        assert_eq!(section.id.as_str(), "getting-started");
        assert_eq!(section.label, "Getting Started");
    }
}
