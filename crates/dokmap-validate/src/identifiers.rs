//! Identifier uniqueness validator

use std::collections::HashMap;

use dokmap_core::{Diagnostic, Document, NodeId};

use crate::Validator;

/// Validates that author-assigned node ids are unique
///
/// # Diagnostic Codes
///
/// - `ID101`: Node id already used by an earlier node
pub struct IdentifierValidator;

impl Validator for IdentifierValidator {
    fn code(&self) -> &'static str {
        "ID1"
    }

    fn name(&self) -> &'static str {
        "unique-identifiers"
    }

    fn validate(&self, doc: &Document) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        let mut seen: HashMap<&str, NodeId> = HashMap::new();

        for id in doc.descendants(doc.root()) {
            let Some(author_id) = doc.node(id).and_then(|node| node.id()) else {
                continue;
            };
            match seen.get(author_id) {
                Some(first) => diagnostics.push(
                    Diagnostic::error(format!("Duplicate node id '{}'", author_id))
                        .with_code("ID101")
                        .with_node(id)
                        .with_help("Node ids are used as cross-reference targets and must be unique.")
                        .with_note(format!("First used at node {}", first)),
                ),
                None => {
                    seen.insert(author_id, id);
                }
            }
        }

        diagnostics
    }
}
