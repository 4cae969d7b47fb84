//! Table of contents
//!
//! A display-oriented outline kept apart from the composition tree. Entries
//! may point at composition nodes by id but never own them.

use dokmap_ast::{Lang, ParallelText, Result as TextResult};

use crate::tree::{Document, NodeId};

/// Indentation added per outline level
pub const INDENT_UNIT: &str = "  ";

/// One outline entry
#[derive(Debug, Clone, PartialEq)]
pub struct TocNode {
    title: ParallelText,
    content: Option<NodeId>,
    children: Vec<TocNode>,
}

impl TocNode {
    pub fn new(title: ParallelText) -> Self {
        Self {
            title,
            content: None,
            children: Vec::new(),
        }
    }

    /// Point the entry at a composition node
    pub fn with_content(mut self, content: NodeId) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_child(mut self, child: TocNode) -> Self {
        self.children.push(child);
        self
    }

    /// Append a child entry
    pub fn add(&mut self, child: TocNode) -> &mut Self {
        self.children.push(child);
        self
    }

    pub fn title(&self) -> &ParallelText {
        &self.title
    }

    pub fn content(&self) -> Option<NodeId> {
        self.content
    }

    pub fn children(&self) -> &[TocNode] {
        &self.children
    }

    /// Render the outline for one language
    ///
    /// Each entry is its indent, its title and a newline; children follow
    /// their parent with one more [`INDENT_UNIT`].
    ///
    /// ```
    /// use dokmap_ast::{Lang, ParallelText};
    /// use dokmap_core::TocNode;
    ///
    /// let toc = TocNode::new(ParallelText::new().en("Overview").ja("概要"))
    ///     .with_child(TocNode::new(ParallelText::new().en("Part A")))
    ///     .with_child(TocNode::new(ParallelText::new().en("Part B")));
    /// assert_eq!(toc.render(Lang::En, "").unwrap(), "Overview\n  Part A\n  Part B\n");
    /// ```
    pub fn render(&self, lang: Lang, indent: &str) -> TextResult<String> {
        log::debug!("Rendering table of contents in '{}'", lang);
        let mut out = String::new();
        self.render_into(lang, indent, &mut out)?;
        Ok(out)
    }

    fn render_into(&self, lang: Lang, indent: &str, out: &mut String) -> TextResult<()> {
        out.push_str(indent);
        out.push_str(&self.title.get(lang)?.body);
        out.push('\n');

        let child_indent = format!("{indent}{INDENT_UNIT}");
        for child in &self.children {
            child.render_into(lang, &child_indent, out)?;
        }
        Ok(())
    }
}

impl Document {
    /// Derive an outline from the composition tree
    ///
    /// The root entry carries the document title. Front matter topics come
    /// first and back matter topics last; appendix groups are flattened
    /// into their appendices. Body blocks are not listed.
    pub fn table_of_contents(&self) -> TocNode {
        let mut root = TocNode::new(self.title().clone()).with_content(self.root());
        self.outline(self.root(), &mut root.children);
        log::debug!("Built table of contents with {} top-level entries", root.children.len());
        root
    }

    fn outline(&self, id: NodeId, out: &mut Vec<TocNode>) {
        for child in self.reading_children(id) {
            let Some(node) = self.node(child) else {
                continue;
            };
            let kind = node.kind();
            if kind.is_grouping() {
                self.outline(child, out);
            } else if kind.is_submap() || kind.is_topic() {
                let mut entry = TocNode::new(node.title().clone()).with_content(child);
                self.outline(child, &mut entry.children);
                out.push(entry);
            }
        }
    }
}
