//! Error types for multilingual text access.

use thiserror::Error;

use crate::lang::Lang;

/// Result type for text operations
pub type Result<T> = std::result::Result<T, TextError>;

/// Errors raised by the text model
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TextError {
    /// A language was read that was never populated
    #[error("Missing '{lang}' variant")]
    MissingVariant { lang: Lang },

    /// A language tag that is not part of the supported set
    #[error("Unknown language tag: {0}")]
    UnknownLanguage(String),

    /// A stored text sits in the slot of a different language
    #[error("Text in '{slot}' slot is tagged '{lang}'")]
    MismatchedVariant { slot: Lang, lang: Lang },
}

impl TextError {
    /// Create a missing variant error
    pub fn missing(lang: Lang) -> Self {
        Self::MissingVariant { lang }
    }

    /// Get the error code for diagnostics
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingVariant { .. } => "TEXT001",
            Self::UnknownLanguage(_) => "TEXT002",
            Self::MismatchedVariant { .. } => "TEXT003",
        }
    }
}
