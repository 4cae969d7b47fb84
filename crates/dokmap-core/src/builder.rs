//! Chainable authoring handles
//!
//! Handles borrow the document mutably and point at one node. Every call
//! that creates a child runs the schema check before linking and returns a
//! handle to the new child, so an authoring mistake fails at the exact
//! call that introduced it.
//!
//! [`NodeMut`] points at a titled node (the root, a submap or a topic) and
//! carries the title setters. [`GroupMut`] points at front matter, back
//! matter or an appendix group, which have no title to set.
//!
//! ```
//! use dokmap_ast::Lang;
//! use dokmap_core::{Configuration, Document};
//!
//! # fn main() -> dokmap_core::Result<()> {
//! let mut doc = Document::new(Configuration::default());
//! let mut chapter = doc.chapter()?.ja("概要").en("Overview");
//! let mut concept = chapter.concept()?.ja("セットアップ方法").en("How to set up");
//! let mut para = concept.paragraph()?;
//! para.text().ja("概要").en("Overview");
//! let para_id = para.id();
//!
//! let sentence = &doc.get(para_id)?.paragraph().unwrap().sentences[0];
//! assert_eq!(sentence.get(Lang::Ja)?.body, "概要");
//! # Ok(())
//! # }
//! ```

use dokmap_ast::{
    Applicability, Block, Figure, Lang, Modifier, Note, Paragraph, ParallelText, Table, Text,
    Tree,
};

use crate::error::{ModelError, Result};
use crate::schema::NodeKind;
use crate::tree::{Document, Node, NodeBuilder, NodeId};

/// Mutable handle to a titled node of a [`Document`]
#[derive(Debug)]
pub struct NodeMut<'a> {
    doc: &'a mut Document,
    id: NodeId,
}

impl<'a> NodeMut<'a> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn kind(&self) -> NodeKind {
        self.node().kind()
    }

    pub fn node(&self) -> &Node {
        &self.doc.nodes_slice()[self.id.index()]
    }

    fn node_mut(&mut self) -> &mut Node {
        &mut self.doc.nodes_slice_mut()[self.id.index()]
    }

    /// Attach a prebuilt node of any kind and return its id
    pub fn add(&mut self, child: NodeBuilder) -> Result<NodeId> {
        self.doc.add(self.id, child)
    }

    fn titled(&mut self, child: NodeBuilder) -> Result<NodeMut<'_>> {
        let id = self.doc.add(self.id, child)?;
        Ok(NodeMut { doc: &mut *self.doc, id })
    }

    pub fn part(&mut self) -> Result<NodeMut<'_>> {
        self.titled(NodeBuilder::part())
    }

    pub fn chapter(&mut self) -> Result<NodeMut<'_>> {
        self.titled(NodeBuilder::chapter())
    }

    pub fn appendices(&mut self) -> Result<GroupMut<'_>> {
        let id = self.doc.add(self.id, NodeBuilder::appendices())?;
        Ok(GroupMut { doc: &mut *self.doc, id })
    }

    pub fn appendix(&mut self) -> Result<NodeMut<'_>> {
        self.titled(NodeBuilder::appendix())
    }

    pub fn concept(&mut self) -> Result<NodeMut<'_>> {
        self.titled(NodeBuilder::concept())
    }

    pub fn task(&mut self) -> Result<NodeMut<'_>> {
        self.titled(NodeBuilder::task())
    }

    pub fn reference(&mut self) -> Result<NodeMut<'_>> {
        self.titled(NodeBuilder::reference())
    }

    /// Attach a topic and make it this submap's leading topic
    pub fn leading(&mut self, topic: NodeBuilder) -> Result<NodeMut<'_>> {
        let kind = self.kind();
        if !kind.is_submap() || !topic.kind().is_topic() {
            return Err(ModelError::structural(kind, topic.kind()));
        }
        let id = self.doc.add(self.id, topic)?;
        self.doc.set_leading_topic(self.id, id)?;
        Ok(NodeMut { doc: &mut *self.doc, id })
    }

    /// Attach an empty paragraph and return a handle for adding sentences
    pub fn paragraph(&mut self) -> Result<ParagraphMut<'_>> {
        let id = self
            .doc
            .add(self.id, NodeBuilder::block(Block::Paragraph(Paragraph::new())))?;
        Ok(ParagraphMut { doc: &mut *self.doc, id })
    }

    pub fn table(&mut self, table: Table) -> Result<NodeId> {
        self.doc.add(self.id, NodeBuilder::block(Block::Table(table)))
    }

    pub fn figure(&mut self, figure: Figure) -> Result<NodeId> {
        self.doc.add(self.id, NodeBuilder::block(Block::Figure(figure)))
    }

    pub fn note(&mut self, note: Note) -> Result<NodeId> {
        self.doc.add(self.id, NodeBuilder::block(Block::Note(note)))
    }

    pub fn tree(&mut self, tree: Tree) -> Result<NodeId> {
        self.doc.add(self.id, NodeBuilder::block(Block::Tree(tree)))
    }

    /// Set the Japanese title
    pub fn ja(mut self, body: impl Into<String>) -> Self {
        self.node_mut().title_mut().insert(Text::ja(body));
        self
    }

    /// Set the English title
    pub fn en(mut self, body: impl Into<String>) -> Self {
        self.node_mut().title_mut().insert(Text::en(body));
        self
    }

    /// Set one title variant with modifiers
    pub fn set<I, M>(mut self, lang: Lang, body: impl Into<String>, modifiers: I) -> Self
    where
        I: IntoIterator<Item = M>,
        M: Into<Modifier>,
    {
        self.node_mut().title_mut().set(lang, body, modifiers);
        self
    }

    /// Replace the whole title
    pub fn title(mut self, title: ParallelText) -> Self {
        *self.node_mut().title_mut() = title;
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.node_mut().set_id(id.into());
        self
    }
}

/// Mutable handle to a grouping node: front matter, back matter or an
/// appendix group
#[derive(Debug)]
pub struct GroupMut<'a> {
    doc: &'a mut Document,
    id: NodeId,
}

impl<'a> GroupMut<'a> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn kind(&self) -> NodeKind {
        self.node().kind()
    }

    pub fn node(&self) -> &Node {
        &self.doc.nodes_slice()[self.id.index()]
    }

    /// Attach a prebuilt node and return its id
    pub fn add(&mut self, child: NodeBuilder) -> Result<NodeId> {
        self.doc.add(self.id, child)
    }

    fn titled(&mut self, child: NodeBuilder) -> Result<NodeMut<'_>> {
        let id = self.doc.add(self.id, child)?;
        Ok(NodeMut { doc: &mut *self.doc, id })
    }

    pub fn appendix(&mut self) -> Result<NodeMut<'_>> {
        self.titled(NodeBuilder::appendix())
    }

    pub fn concept(&mut self) -> Result<NodeMut<'_>> {
        self.titled(NodeBuilder::concept())
    }

    pub fn task(&mut self) -> Result<NodeMut<'_>> {
        self.titled(NodeBuilder::task())
    }

    pub fn reference(&mut self) -> Result<NodeMut<'_>> {
        self.titled(NodeBuilder::reference())
    }

    pub fn with_id(self, id: impl Into<String>) -> Self {
        self.doc.nodes_slice_mut()[self.id.index()].set_id(id.into());
        self
    }
}

/// Handle to a paragraph node
///
/// Only created for ids that hold a `Block::Paragraph`.
#[derive(Debug)]
pub struct ParagraphMut<'a> {
    doc: &'a mut Document,
    id: NodeId,
}

impl<'a> ParagraphMut<'a> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    fn paragraph(&mut self) -> &mut Paragraph {
        match self.doc.nodes_slice_mut()[self.id.index()].paragraph_mut() {
            Some(paragraph) => paragraph,
            None => unreachable!("paragraph handle on a non-paragraph node"),
        }
    }

    /// Append an empty sentence and return it for filling in
    pub fn text(&mut self) -> SentenceMut<'_> {
        SentenceMut(self.paragraph().text())
    }

    /// Append a prebuilt sentence
    pub fn push(&mut self, sentence: ParallelText) -> &mut Self {
        self.paragraph().sentences.push(sentence);
        self
    }

    /// Number of sentences
    pub fn len(&self) -> usize {
        self.doc
            .node(self.id)
            .and_then(Node::paragraph)
            .map_or(0, Paragraph::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Handle to one sentence of a paragraph
#[derive(Debug)]
pub struct SentenceMut<'a>(&'a mut ParallelText);

impl<'a> SentenceMut<'a> {
    pub fn ja(self, body: impl Into<String>) -> Self {
        self.0.insert(Text::ja(body));
        self
    }

    pub fn en(self, body: impl Into<String>) -> Self {
        self.0.insert(Text::en(body));
        self
    }

    pub fn ja_with<I, M>(self, body: impl Into<String>, modifiers: I) -> Self
    where
        I: IntoIterator<Item = M>,
        M: Into<Modifier>,
    {
        self.set(Lang::Ja, body, modifiers)
    }

    pub fn en_with<I, M>(self, body: impl Into<String>, modifiers: I) -> Self
    where
        I: IntoIterator<Item = M>,
        M: Into<Modifier>,
    {
        self.set(Lang::En, body, modifiers)
    }

    pub fn set<I, M>(self, lang: Lang, body: impl Into<String>, modifiers: I) -> Self
    where
        I: IntoIterator<Item = M>,
        M: Into<Modifier>,
    {
        self.0.set(lang, body, modifiers);
        self
    }

    /// Place prebuilt texts, each in the slot named by its language
    pub fn add(self, texts: impl IntoIterator<Item = Text>) -> Self {
        self.0.add(texts);
        self
    }

    pub fn applies_to(self, applicability: Applicability) -> Self {
        self.0.set_applicability(applicability);
        self
    }

    /// The sentence as built so far
    pub fn get(&self) -> &ParallelText {
        &*self.0
    }
}

impl Document {
    /// Handle to a titled node, `None` for other kinds
    pub fn node_mut(&mut self, id: NodeId) -> Option<NodeMut<'_>> {
        if !self.node(id)?.kind().is_titled() {
            return None;
        }
        Some(NodeMut { doc: self, id })
    }

    /// Handle to a grouping node, `None` for other kinds
    pub fn group_mut(&mut self, id: NodeId) -> Option<GroupMut<'_>> {
        if !self.node(id)?.kind().is_grouping() {
            return None;
        }
        Some(GroupMut { doc: self, id })
    }

    /// Handle to a paragraph node, `None` for other kinds
    pub fn paragraph_mut(&mut self, id: NodeId) -> Option<ParagraphMut<'_>> {
        self.node(id)?.paragraph()?;
        Some(ParagraphMut { doc: self, id })
    }

    pub fn root_mut(&mut self) -> NodeMut<'_> {
        let id = self.root();
        NodeMut { doc: self, id }
    }

    pub fn frontmatter_mut(&mut self) -> GroupMut<'_> {
        let id = self.frontmatter();
        GroupMut { doc: self, id }
    }

    pub fn backmatter_mut(&mut self) -> GroupMut<'_> {
        let id = self.backmatter();
        GroupMut { doc: self, id }
    }

    fn attach(&mut self, child: NodeBuilder) -> Result<NodeMut<'_>> {
        let id = self.add_child(child)?;
        Ok(NodeMut { doc: self, id })
    }

    /// Attach a part under the root (part-based documents only)
    pub fn part(&mut self) -> Result<NodeMut<'_>> {
        self.attach(NodeBuilder::part())
    }

    /// Attach a chapter under the root (chapter-based documents only)
    pub fn chapter(&mut self) -> Result<NodeMut<'_>> {
        self.attach(NodeBuilder::chapter())
    }

    pub fn appendices(&mut self) -> Result<GroupMut<'_>> {
        let id = self.add_child(NodeBuilder::appendices())?;
        Ok(GroupMut { doc: self, id })
    }

    pub fn appendix(&mut self) -> Result<NodeMut<'_>> {
        self.attach(NodeBuilder::appendix())
    }
}
