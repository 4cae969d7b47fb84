//! Empty container validator
//!
//! The schema says what may go inside a node, not that anything must.
//! Empty parts, chapters, appendices and topics usually mean unfinished
//! authoring.

use dokmap_core::{Diagnostic, Document, NodeKind};

use crate::Validator;

/// Warns about containers and paragraphs with nothing in them
///
/// # Diagnostic Codes
///
/// - `DOC201`: Submap, appendix group or topic without children
/// - `DOC202`: Paragraph without sentences
pub struct EmptyContainerValidator;

impl Validator for EmptyContainerValidator {
    fn code(&self) -> &'static str {
        "DOC2"
    }

    fn name(&self) -> &'static str {
        "empty-containers"
    }

    fn validate(&self, doc: &Document) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for id in doc.descendants(doc.root()) {
            let Some(node) = doc.node(id) else {
                continue;
            };
            let kind = node.kind();

            let container = kind.is_submap() || kind.is_topic() || kind == NodeKind::Appendices;
            if container && node.children().is_empty() {
                diagnostics.push(
                    Diagnostic::warning(format!("{} {} has no content", kind, id))
                        .with_code("DOC201")
                        .with_node(id),
                );
            }

            if node.paragraph().is_some_and(|p| p.is_empty()) {
                diagnostics.push(
                    Diagnostic::warning(format!("paragraph {} has no sentences", id))
                        .with_code("DOC202")
                        .with_node(id),
                );
            }
        }

        diagnostics
    }
}
