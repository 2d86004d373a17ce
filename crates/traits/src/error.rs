//! Errors reported by host platforms.

use thiserror::Error;

/// Error type for host operations that can fail.
///
/// None of these are fatal to a page. The engine maps each onto a degraded
/// mode (no live highlight, or a skipped scroll).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    #[error("Intersection observation is not supported: {0}")]
    Unsupported(String),

    #[error("Missing platform global: {0}")]
    MissingGlobal(&'static str),

    #[error("Platform call failed: {0}")]
    Platform(String),
}

impl HostError {
    pub fn is_unsupported(&self) -> bool {
        matches!(self, HostError::Unsupported(_))
    }
}
