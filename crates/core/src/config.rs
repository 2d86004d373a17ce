use crate::error::NavError;
use sectionnav_types::ViewportBand;
use serde::{Deserialize, Serialize};

/// Height of the fixed header that scroll targets must clear.
///
/// Wide viewports use the sticky header's real height. Below `breakpoint` the
/// header collapses into a non-obstructing control and `narrow` applies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeaderOffsets {
    /// Header height in CSS pixels on wide viewports. Defaults to `80`.
    pub desktop: f64,
    /// Header height in CSS pixels on narrow viewports. Defaults to `0`.
    pub narrow: f64,
    /// Minimum viewport width, in CSS pixels, that counts as wide. Defaults to `768`.
    pub breakpoint: f64,
}

impl Default for HeaderOffsets {
    fn default() -> Self {
        Self {
            desktop: 80.0,
            narrow: 0.0,
            breakpoint: 768.0,
        }
    }
}

impl HeaderOffsets {
    pub fn offset_for(&self, viewport_width: f64) -> f64 {
        if viewport_width >= self.breakpoint {
            self.desktop
        } else {
            self.narrow
        }
    }
}

/// Engine configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NavConfig {
    /// Region of the viewport that decides which section is current.
    pub band: ViewportBand,
    /// Header offsets applied to every scroll target.
    pub header: HeaderOffsets,
    /// Ignore observer reports for other sections while a TOC-initiated smooth
    /// scroll is in flight. Off by default.
    pub suppress_during_programmatic_scroll: bool,
}

impl NavConfig {
    /// Parses and validates a JSON configuration. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, NavError> {
        let config: NavConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_band(mut self, band: ViewportBand) -> Self {
        self.band = band;
        self
    }

    pub fn with_header(mut self, header: HeaderOffsets) -> Self {
        self.header = header;
        self
    }

    pub fn with_scroll_suppression(mut self, enabled: bool) -> Self {
        self.suppress_during_programmatic_scroll = enabled;
        self
    }

    pub fn validate(&self) -> Result<(), NavError> {
        let header = &self.header;
        for (name, value) in [
            ("header.desktop", header.desktop),
            ("header.narrow", header.narrow),
            ("header.breakpoint", header.breakpoint),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(NavError::Config(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }

        for (name, inset) in [("band.top", self.band.top), ("band.bottom", self.band.bottom)] {
            if !inset.is_valid() {
                return Err(NavError::Config(format!(
                    "{} must be a finite, non-negative inset, got {:?}",
                    name, inset
                )));
            }
        }

        if self.band.is_always_degenerate() {
            return Err(NavError::Config(format!(
                "viewport band is empty: {:?} + {:?} leaves no room",
                self.band.top, self.band.bottom
            )));
        }

        Ok(())
    }
}
