//! Error handling for WASM bindings.
//!
//! Converts folio's error types into JavaScript-friendly errors.

use folio_core::{ConfigError, FolioError};
use thiserror::Error;
use wasm_bindgen::prelude::*;

/// Error codes for TypeScript consumption.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Invalid configuration values
    Config,
    /// Configuration could not be parsed
    Json,
    /// A required host object is missing or a DOM call failed
    Dom,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::Config => "CONFIG_ERROR",
            ErrorCode::Json => "JSON_ERROR",
            ErrorCode::Dom => "DOM_ERROR",
        }
    }
}

/// A JavaScript-friendly error type.
///
/// Crosses the boundary as a JavaScript `Error` with a `code` property.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct PageError {
    code: ErrorCode,
    message: String,
}

impl PageError {
    /// Create a new error with the given code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Create a DOM error.
    pub fn dom(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Dom, message)
    }

    /// Wrap an exception thrown by a host API.
    pub fn from_js(context: &str, value: &JsValue) -> Self {
        Self::dom(format!("{}: {:?}", context, value))
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<FolioError> for PageError {
    fn from(err: FolioError) -> Self {
        let code = match &err {
            FolioError::Config(_) => ErrorCode::Config,
            FolioError::Json(_) => ErrorCode::Json,
            FolioError::Markup(_) => ErrorCode::Dom,
        };
        Self::new(code, err.to_string())
    }
}

impl From<ConfigError> for PageError {
    fn from(err: ConfigError) -> Self {
        FolioError::from(err).into()
    }
}

impl From<serde_wasm_bindgen::Error> for PageError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        Self::new(ErrorCode::Json, format!("Invalid config object: {}", err))
    }
}

impl From<PageError> for JsValue {
    fn from(err: PageError) -> Self {
        let js_error = js_sys::Error::new(&err.message);

        // Add the error code as a property
        js_sys::Reflect::set(
            &js_error,
            &"code".into(),
            &JsValue::from_str(err.code.as_str()),
        )
        .ok();

        js_error.into()
    }
}
