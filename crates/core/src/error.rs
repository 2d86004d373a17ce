//! Defines the error types for engine operations.
//!
//! Runtime navigation never fails: missing anchors, stale links and missing
//! observation primitives all degrade silently. Errors only come out of
//! configuration parsing and host construction.

use sectionnav_traits::HostError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NavError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Host error: {0}")]
    Host(#[from] HostError),
}
