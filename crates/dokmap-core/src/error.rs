//! Error types for document composition.

use thiserror::Error;

use dokmap_ast::TextError;

use crate::schema::NodeKind;
use crate::tree::NodeId;

/// Result type for composition operations
pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors that can occur while composing a document
#[derive(Error, Debug)]
pub enum ModelError {
    /// Child kind is not in the parent's allow-list
    #[error("{child} is not allowed under {parent}")]
    StructuralViolation { parent: NodeKind, child: NodeKind },

    /// A language variant was read that was never populated
    #[error(transparent)]
    Text(#[from] TextError),

    /// Node id does not belong to this document
    #[error("Unknown node: {0}")]
    UnknownNode(NodeId),

    /// A title was given to a kind that does not carry one
    #[error("{0} does not carry a title")]
    Untitled(NodeKind),

    /// Leading topic must be a topic child of the submap
    #[error("{topic} cannot lead {submap}")]
    LeadingTopic { submap: NodeId, topic: NodeId },

    /// Configuration text could not be parsed
    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),
}

impl ModelError {
    /// Create a structural violation error
    pub fn structural(parent: NodeKind, child: NodeKind) -> Self {
        Self::StructuralViolation { parent, child }
    }

    /// Get the error code for diagnostics
    pub fn code(&self) -> &'static str {
        match self {
            Self::StructuralViolation { .. } => "DOK001",
            Self::Text(_) => "DOK002",
            Self::UnknownNode(_) => "DOK003",
            Self::Config(_) => "DOK004",
            Self::Untitled(_) => "DOK005",
            Self::LeadingTopic { .. } => "DOK006",
        }
    }
}
