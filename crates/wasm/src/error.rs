//! Error handling for WASM bindings.
//!
//! Converts the engine's error types into JavaScript `Error` objects carrying a
//! `code` property.

use sectionnav_core::NavError;
use sectionnav_traits::HostError;
use wasm_bindgen::prelude::*;

/// Error codes for TypeScript consumption.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Invalid options or sections
    Config,
    /// JSON serialization/deserialization error
    Json,
    /// Required browser global is missing
    MissingGlobal,
    /// The browser rejected a DOM call
    Platform,
    /// Unknown error
    Unknown,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::Config => "CONFIG_ERROR",
            ErrorCode::Json => "JSON_ERROR",
            ErrorCode::MissingGlobal => "MISSING_GLOBAL",
            ErrorCode::Platform => "PLATFORM_ERROR",
            ErrorCode::Unknown => "UNKNOWN_ERROR",
        }
    }
}

/// A JavaScript-friendly error type.
///
/// Not a wasm_bindgen struct: it converts into a plain JavaScript `Error`.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct SectionNavError {
    code: ErrorCode,
    message: String,
}

impl SectionNavError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Config, message)
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<NavError> for SectionNavError {
    fn from(err: NavError) -> Self {
        match err {
            NavError::Config(msg) => Self::new(ErrorCode::Config, msg),
            NavError::Json(e) => Self::new(ErrorCode::Json, e.to_string()),
            NavError::Host(e) => e.into(),
        }
    }
}

impl From<HostError> for SectionNavError {
    fn from(err: HostError) -> Self {
        let code = match &err {
            HostError::MissingGlobal(_) => ErrorCode::MissingGlobal,
            HostError::Unsupported(_) | HostError::Platform(_) => ErrorCode::Platform,
        };
        Self::new(code, err.to_string())
    }
}

impl From<serde_wasm_bindgen::Error> for SectionNavError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        Self::new(ErrorCode::Config, err.to_string())
    }
}

impl From<SectionNavError> for JsValue {
    fn from(err: SectionNavError) -> Self {
        let js_error = js_sys::Error::new(&err.message);

        js_sys::Reflect::set(
            &js_error,
            &"code".into(),
            &JsValue::from_str(err.code.as_str()),
        )
        .ok();

        js_error.into()
    }
}
