//! dokmap-validate - Publication readiness checks
//!
//! The composition tree enforces its structural rules while it is built.
//! This crate adds the checks that only make sense on a finished document,
//! such as every text carrying every declared language.
//!
//! # Architecture
//!
//! Individual checks implement the `Validator` trait. The
//! `ValidationEngine` runs all registered validators and collects their
//! diagnostics.
//!
//! # Example
//!
//! ```
//! use dokmap_core::{Configuration, Document};
//! use dokmap_validate::ValidationEngine;
//!
//! let mut doc = Document::new(Configuration::default());
//! doc.chapter().unwrap().ja("概要");
//!
//! let engine = ValidationEngine::with_defaults();
//! assert!(engine.has_errors(&doc));
//! ```

pub mod identifiers;
pub mod language;
pub mod structure;

use dokmap_core::{Diagnostic, Document};

// Re-export validators
pub use identifiers::IdentifierValidator;
pub use language::LanguageCompletenessValidator;
pub use structure::EmptyContainerValidator;

/// Trait for document validators
///
/// Validators inspect a document and return a list of diagnostics
/// for any issues found. Each validator has a unique code prefix
/// for its diagnostics.
pub trait Validator: Send + Sync {
    /// Get the validator's unique code (e.g., "LANG1")
    fn code(&self) -> &'static str;

    /// Get a human-readable name for this validator
    fn name(&self) -> &'static str {
        "unnamed"
    }

    /// Validate the document and return any diagnostics
    fn validate(&self, doc: &Document) -> Vec<Diagnostic>;
}

/// Validation engine that orchestrates multiple validators
pub struct ValidationEngine {
    validators: Vec<Box<dyn Validator>>,
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationEngine {
    /// Create a new empty validation engine
    pub fn new() -> Self {
        Self {
            validators: Vec::new(),
        }
    }

    /// Create an engine with every built-in validator
    pub fn with_defaults() -> Self {
        let mut engine = Self::new();
        engine.add_validator(Box::new(LanguageCompletenessValidator));
        engine.add_validator(Box::new(IdentifierValidator));
        engine.add_validator(Box::new(EmptyContainerValidator));
        engine
    }

    pub fn add_validator(&mut self, validator: Box<dyn Validator>) {
        self.validators.push(validator);
    }

    pub fn validator_count(&self) -> usize {
        self.validators.len()
    }

    pub fn validator_names(&self) -> Vec<&'static str> {
        self.validators.iter().map(|v| v.name()).collect()
    }

    /// Validate a document using all registered validators
    ///
    /// Returns a vector of all diagnostics from all validators.
    pub fn validate(&self, doc: &Document) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for validator in &self.validators {
            let found = validator.validate(doc);
            log::debug!("{} reported {} diagnostic(s)", validator.name(), found.len());
            diagnostics.extend(found);
        }

        diagnostics
    }

    /// Check if a document has any errors
    pub fn has_errors(&self, doc: &Document) -> bool {
        self.validate(doc).iter().any(|d| d.is_error())
    }

    /// Check if a document has any warnings or errors
    pub fn has_issues(&self, doc: &Document) -> bool {
        !self.validate(doc).is_empty()
    }
}

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
