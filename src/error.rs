//! Error types for the landing page

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures from the browser environment or startup configuration.
///
/// None of these are fatal to the page: callers log them and fall back
/// to a degraded but still rendered layout.
#[derive(Error, Debug)]
pub enum LandingError {
    #[error("no global `window` is available")]
    NoWindow,

    #[error("window has no `document`")]
    NoDocument,

    #[error("JavaScript error: {0}")]
    Js(String),

    #[error("invalid landing configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<JsValue> for LandingError {
    fn from(value: JsValue) -> Self {
        LandingError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

/// Result type for landing page operations
pub type LandingResult<T> = Result<T, LandingError>;
