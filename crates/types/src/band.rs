//! The viewport band that decides which section counts as "currently read".

use serde::{Deserialize, Serialize};

/// One edge inset of the band, measured inward from the viewport edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Inset {
    /// Absolute CSS pixels.
    Px(f64),
    /// Percentage of the viewport height.
    Percent(f64),
}

impl Inset {
    pub fn resolve(self, viewport_height: f64) -> f64 {
        match self {
            Inset::Px(px) => px,
            Inset::Percent(pct) => viewport_height * pct / 100.0,
        }
    }

    /// Finite and not negative. NaN and infinities are rejected.
    pub fn is_valid(self) -> bool {
        match self {
            Inset::Px(v) | Inset::Percent(v) => v.is_finite() && v >= 0.0,
        }
    }

    fn is_percent(self) -> bool {
        matches!(self, Inset::Percent(_))
    }

    /// CSS length with the sign flipped, as `rootMargin` shrinks the root with
    /// negative values.
    fn as_shrinking_margin(self) -> String {
        match self {
            Inset::Px(v) if v == 0.0 => "0px".to_string(),
            Inset::Percent(v) if v == 0.0 => "0%".to_string(),
            Inset::Px(v) => format!("-{}px", v),
            Inset::Percent(v) => format!("-{}%", v),
        }
    }
}

/// Vertical region of the viewport, given as top and bottom insets.
///
/// The default is biased toward the top so a section becomes active as soon as
/// its heading scrolls up under the header, not when it reaches the center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportBand {
    pub top: Inset,
    pub bottom: Inset,
}

impl Default for ViewportBand {
    fn default() -> Self {
        Self {
            top: Inset::Px(80.0),
            bottom: Inset::Percent(70.0),
        }
    }
}

impl ViewportBand {
    pub fn new(top: Inset, bottom: Inset) -> Self {
        Self { top, bottom }
    }

    /// Renders the band as an IntersectionObserver `rootMargin` value.
    pub fn root_margin(&self) -> String {
        format!(
            "{} 0px {} 0px",
            self.top.as_shrinking_margin(),
            self.bottom.as_shrinking_margin()
        )
    }

    /// Band edges in viewport coordinates, `(start, end)` from the top.
    pub fn bounds(&self, viewport_height: f64) -> (f64, f64) {
        let start = self.top.resolve(viewport_height);
        let end = viewport_height - self.bottom.resolve(viewport_height);
        (start, end)
    }

    /// True when a point at `viewport_y` lies within the band.
    pub fn contains(&self, viewport_y: f64, viewport_height: f64) -> bool {
        let (start, end) = self.bounds(viewport_height);
        viewport_y >= start && viewport_y <= end
    }

    /// True when the span `[top, top + height]` overlaps the band.
    pub fn intersects(&self, top: f64, height: f64, viewport_height: f64) -> bool {
        let (start, end) = self.bounds(viewport_height);
        top <= end && top + height.max(0.0) >= start
    }

    /// A band with no height (or inverted edges) can never report an entry.
    pub fn is_degenerate(&self, viewport_height: f64) -> bool {
        let (start, end) = self.bounds(viewport_height);
        start >= end
    }

    /// True when the band is empty on every viewport. Only an all-percentage
    /// band can be decided without knowing the viewport height.
    pub fn is_always_degenerate(&self) -> bool {
        self.top.is_percent() && self.bottom.is_percent() && self.is_degenerate(100.0)
    }
}
