//! Language completeness validator
//!
//! Checks that every title and body text carries a variant for each
//! language the document declares.

use dokmap_ast::Lang;
use dokmap_core::{Diagnostic, Document};

use crate::Validator;

/// Validates that texts are complete in every declared language
///
/// The declared languages are read from the configuration in effect at
/// each node, so a subtree with its own configuration is checked against
/// its own language set. An untitled document root is not reported.
///
/// # Diagnostic Codes
///
/// - `LANG101`: A text is missing one or more declared languages
pub struct LanguageCompletenessValidator;

impl Validator for LanguageCompletenessValidator {
    fn code(&self) -> &'static str {
        "LANG1"
    }

    fn name(&self) -> &'static str {
        "language-completeness"
    }

    fn validate(&self, doc: &Document) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for id in doc.descendants(doc.root()) {
            let (Some(node), Ok(config)) = (doc.node(id), doc.resolve_config(id)) else {
                continue;
            };
            let kind = node.kind();

            for (index, text) in node.texts().into_iter().enumerate() {
                let is_title = kind.is_titled() && index == 0;
                if is_title && id == doc.root() && text.is_empty() {
                    continue;
                }

                let missing = text.missing(&config.languages);
                if missing.is_empty() {
                    continue;
                }

                let what = if is_title {
                    format!("{} title", kind)
                } else {
                    let position = if kind.is_titled() { index } else { index + 1 };
                    format!("{} text {}", kind, position)
                };
                let mut diagnostic = Diagnostic::error(format!(
                    "{} has no {} variant",
                    what,
                    quoted(&missing)
                ))
                .with_code("LANG101")
                .with_node(id)
                .with_help("Add the missing variants before publishing.");
                if let Some(author_id) = node.id() {
                    diagnostic = diagnostic.with_note(format!("Node id: {}", author_id));
                }
                diagnostics.push(diagnostic);
            }
        }

        diagnostics
    }
}

fn quoted(langs: &[Lang]) -> String {
    langs
        .iter()
        .map(|lang| format!("'{}'", lang))
        .collect::<Vec<_>>()
        .join(", ")
}
