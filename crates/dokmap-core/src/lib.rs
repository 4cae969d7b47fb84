//! dokmap-core - Schema-checked composition of multilingual documents
//!
//! Core library for dokmap, providing the composition tree of a
//! DITA-style document (front and back matter, parts, chapters,
//! appendices and typed topics), configuration inheritance and the
//! table of contents.
//!
//! # Example
//!
//! ```
//! use dokmap_ast::{Lang, ParallelText};
//! use dokmap_core::{Configuration, Document, ModelError, NodeBuilder};
//!
//! let mut doc = Document::new(Configuration::default())
//!     .with_title(ParallelText::new().ja("dokmap 入門").en("An Introduction to dokmap"));
//! doc.chapter().unwrap().ja("概要").en("Overview");
//!
//! let err = doc.add_child(NodeBuilder::part()).unwrap_err();
//! assert!(matches!(err, ModelError::StructuralViolation { .. }));
//!
//! let outline = doc.table_of_contents().render(Lang::En, "").unwrap();
//! assert_eq!(outline, "An Introduction to dokmap\n  Overview\n");
//! ```

pub mod builder;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod schema;
pub mod toc;
pub mod tree;

// Re-export main types
pub use builder::{GroupMut, NodeMut, ParagraphMut, SentenceMut};
pub use config::Configuration;
pub use diagnostics::{Diagnostic, Severity};
pub use error::{ModelError, Result};
pub use schema::NodeKind;
pub use toc::{TocNode, INDENT_UNIT};
pub use tree::{Document, DocumentMeta, Node, NodeBuilder, NodeId};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
