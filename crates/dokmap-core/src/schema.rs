//! Node kinds and the composition schema
//!
//! Every node kind declares which kinds may be attached beneath it. The
//! table is static; only the document root consults the configuration,
//! to choose between part-based and chapter-based top level structure.

use std::fmt;

use crate::config::Configuration;

/// Kind of a composition tree node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Document,
    Frontmatter,
    Backmatter,
    Part,
    Chapter,
    Appendices,
    Appendix,
    Concept,
    Task,
    Reference,
    Paragraph,
    Table,
    Figure,
    Note,
    Tree,
}

const PART_BASED_TOP: &[NodeKind] = &[NodeKind::Part, NodeKind::Appendices];
const CHAPTER_BASED_TOP: &[NodeKind] = &[NodeKind::Chapter, NodeKind::Appendix];
const MATTER: &[NodeKind] = &[NodeKind::Concept, NodeKind::Reference];
const TOPICS: &[NodeKind] = &[NodeKind::Concept, NodeKind::Task, NodeKind::Reference];
const APPENDICES: &[NodeKind] = &[NodeKind::Appendix];
const BODY: &[NodeKind] = &[
    NodeKind::Paragraph,
    NodeKind::Table,
    NodeKind::Figure,
    NodeKind::Note,
    NodeKind::Tree,
];

impl NodeKind {
    /// Every node kind
    pub const ALL: [NodeKind; 15] = [
        NodeKind::Document,
        NodeKind::Frontmatter,
        NodeKind::Backmatter,
        NodeKind::Part,
        NodeKind::Chapter,
        NodeKind::Appendices,
        NodeKind::Appendix,
        NodeKind::Concept,
        NodeKind::Task,
        NodeKind::Reference,
        NodeKind::Paragraph,
        NodeKind::Table,
        NodeKind::Figure,
        NodeKind::Note,
        NodeKind::Tree,
    ];

    /// Kinds that may be attached beneath this one
    pub fn allowed_children(self, config: &Configuration) -> &'static [NodeKind] {
        match self {
            NodeKind::Document if config.part_based => PART_BASED_TOP,
            NodeKind::Document => CHAPTER_BASED_TOP,
            NodeKind::Frontmatter | NodeKind::Backmatter => MATTER,
            NodeKind::Part | NodeKind::Chapter | NodeKind::Appendix => TOPICS,
            NodeKind::Appendices => APPENDICES,
            NodeKind::Concept | NodeKind::Task | NodeKind::Reference => BODY,
            NodeKind::Paragraph
            | NodeKind::Table
            | NodeKind::Figure
            | NodeKind::Note
            | NodeKind::Tree => &[],
        }
    }

    /// Check whether `child` may be attached beneath this kind
    pub fn permits(self, child: NodeKind, config: &Configuration) -> bool {
        self.allowed_children(config).contains(&child)
    }

    /// Holds typed children without a title of its own
    pub fn is_grouping(self) -> bool {
        matches!(
            self,
            NodeKind::Frontmatter | NodeKind::Backmatter | NodeKind::Appendices
        )
    }

    /// Titled grouping of topics (part, chapter, appendix)
    pub fn is_submap(self) -> bool {
        matches!(self, NodeKind::Part | NodeKind::Chapter | NodeKind::Appendix)
    }

    pub fn is_topic(self) -> bool {
        matches!(self, NodeKind::Concept | NodeKind::Task | NodeKind::Reference)
    }

    /// Body content of a topic
    pub fn is_block(self) -> bool {
        matches!(
            self,
            NodeKind::Paragraph
                | NodeKind::Table
                | NodeKind::Figure
                | NodeKind::Note
                | NodeKind::Tree
        )
    }

    /// Carries a parallel-text title
    pub fn is_titled(self) -> bool {
        self == NodeKind::Document || self.is_submap() || self.is_topic()
    }

    pub fn name(self) -> &'static str {
        match self {
            NodeKind::Document => "document",
            NodeKind::Frontmatter => "frontmatter",
            NodeKind::Backmatter => "backmatter",
            NodeKind::Part => "part",
            NodeKind::Chapter => "chapter",
            NodeKind::Appendices => "appendices",
            NodeKind::Appendix => "appendix",
            NodeKind::Concept => "concept",
            NodeKind::Task => "task",
            NodeKind::Reference => "reference",
            NodeKind::Paragraph => "paragraph",
            NodeKind::Table => "table",
            NodeKind::Figure => "figure",
            NodeKind::Note => "note",
            NodeKind::Tree => "tree",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
