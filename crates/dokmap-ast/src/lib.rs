//! dokmap-ast - Multilingual text and body content types
//!
//! This crate provides the leaf types of the dokmap document model:
//! language tags, inline annotations, parallel multilingual text and the
//! body blocks a topic holds.
//!
//! # Example
//!
//! ```
//! use dokmap_ast::{Annotation, Lang, ParallelText, Text};
//!
//! let fluent = ParallelText::new()
//!     .ja_with("値", [Annotation::subscript("2").with_order(1)])
//!     .en("Value");
//!
//! let bulk = ParallelText::from_texts([
//!     Text::with_modifiers(Lang::Ja, "値", [Annotation::subscript("2").with_order(1)]),
//!     Text::en("Value"),
//! ]);
//!
//! assert_eq!(fluent, bulk);
//! ```

pub mod block;
pub mod error;
pub mod inline;
pub mod lang;
pub mod text;

pub use block::{Block, Figure, Note, NoteKind, Paragraph, Table, Tree, TreeItem};
pub use error::{Result, TextError};
pub use inline::{Annotation, AnnotationKind, Applicability, Modifier};
pub use lang::Lang;
pub use text::{ParallelText, Text};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(VERSION, "0.1.0");
    }
}
