//! Error types shared by the native API and the WASM facade.

use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::JsValue;

/// Everything that can go wrong in SemSphere.
///
/// Classification, placement and plotting are total; only input validation,
/// configuration and the serialization boundary produce errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SphereError {
    /// The sentence contains tokens that are neither semantic words nor connectors.
    #[error("sentence contains unmapped words: {}", .words.join(", "))]
    UnmappedWords { words: Vec<String> },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("lexicon build error: {0}")]
    Lexicon(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Shape of an error once it reaches JavaScript.
#[derive(Serialize)]
struct JsErrorPayload<'a> {
    error: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    words: Option<&'a [String]>,
}

impl SphereError {
    /// Stable machine-readable code for the UI.
    pub fn code(&self) -> &'static str {
        match self {
            SphereError::UnmappedWords { .. } => "unmapped_words",
            SphereError::InvalidConfig(_) => "invalid_config",
            SphereError::Lexicon(_) => "lexicon",
            SphereError::Serialization(_) => "serialization",
        }
    }

    /// Offending tokens, if this is a validation error.
    pub fn unmapped_words(&self) -> Option<&[String]> {
        match self {
            SphereError::UnmappedWords { words } => Some(words),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for SphereError {
    fn from(e: serde_json::Error) -> Self {
        SphereError::Serialization(e.to_string())
    }
}

impl From<serde_wasm_bindgen::Error> for SphereError {
    fn from(e: serde_wasm_bindgen::Error) -> Self {
        SphereError::Serialization(e.to_string())
    }
}

impl From<SphereError> for JsValue {
    fn from(e: SphereError) -> Self {
        let payload = JsErrorPayload {
            error: e.code(),
            message: e.to_string(),
            words: e.unmapped_words(),
        };
        serde_wasm_bindgen::to_value(&payload).unwrap_or_else(|_| JsValue::from_str(&e.to_string()))
    }
}
