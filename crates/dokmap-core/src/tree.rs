//! The composition tree
//!
//! A [`Document`] owns every node in an arena. Ownership flows from parent
//! to child through the arena; the parent link of a node is just the
//! parent's [`NodeId`]. Nodes are only ever created attached, after the
//! parent's allow-list has accepted them, so the tree stays acyclic and
//! each node has exactly one parent.

use std::collections::BTreeMap;
use std::fmt;

use dokmap_ast::{Annotation, Block, Lang, Modifier, Paragraph, ParallelText, Text};
use serde::{Deserialize, Serialize};

use crate::config::Configuration;
use crate::error::{ModelError, Result};
use crate::schema::NodeKind;

/// Index of a node inside its [`Document`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A node attached to a document
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    config: Option<Configuration>,
    id: Option<String>,
    title: ParallelText,
    body: Option<Block>,
    leading_topic: Option<NodeId>,
}

impl Node {
    fn root(config: Option<Configuration>) -> Self {
        Self {
            kind: NodeKind::Document,
            parent: None,
            children: Vec::new(),
            config,
            id: None,
            title: ParallelText::new(),
            body: None,
            leading_topic: None,
        }
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Parent node, `None` for the document root
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Ordered children
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Configuration set explicitly on this node
    pub fn config(&self) -> Option<&Configuration> {
        self.config.as_ref()
    }

    /// Author-assigned identifier (e.g. `manual.overview`)
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn title(&self) -> &ParallelText {
        &self.title
    }

    /// Body content of block nodes
    pub fn body(&self) -> Option<&Block> {
        self.body.as_ref()
    }

    /// Topic that introduces a submap, set with [`Document::set_leading_topic`]
    pub fn leading_topic(&self) -> Option<NodeId> {
        self.leading_topic
    }

    pub fn paragraph(&self) -> Option<&Paragraph> {
        match &self.body {
            Some(Block::Paragraph(p)) => Some(p),
            _ => None,
        }
    }

    /// Title (for titled kinds) followed by block texts, in reading order
    pub fn texts(&self) -> Vec<&ParallelText> {
        let mut texts = Vec::new();
        if self.kind.is_titled() {
            texts.push(&self.title);
        }
        if let Some(body) = &self.body {
            texts.extend(body.texts());
        }
        texts
    }

    pub(crate) fn title_mut(&mut self) -> &mut ParallelText {
        &mut self.title
    }

    pub(crate) fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }

    pub(crate) fn paragraph_mut(&mut self) -> Option<&mut Paragraph> {
        match &mut self.body {
            Some(Block::Paragraph(p)) => Some(p),
            _ => None,
        }
    }
}

/// A detached node waiting to be attached with [`Document::add`]
///
/// ```
/// use dokmap_core::{Configuration, Document, NodeBuilder};
///
/// let mut doc = Document::new(Configuration::default());
/// let chapter = NodeBuilder::chapter()
///     .with_id("manual.overview")
///     .ja("概要")
///     .en("Overview");
/// assert!(doc.add(doc.root(), chapter).is_ok());
/// assert!(doc.add(doc.root(), NodeBuilder::part()).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct NodeBuilder {
    kind: NodeKind,
    id: Option<String>,
    config: Option<Configuration>,
    title: ParallelText,
    body: Option<Block>,
}

impl NodeBuilder {
    fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            id: None,
            config: None,
            title: ParallelText::new(),
            body: None,
        }
    }

    pub fn part() -> Self {
        Self::new(NodeKind::Part)
    }

    pub fn chapter() -> Self {
        Self::new(NodeKind::Chapter)
    }

    pub fn appendices() -> Self {
        Self::new(NodeKind::Appendices)
    }

    pub fn appendix() -> Self {
        Self::new(NodeKind::Appendix)
    }

    pub fn concept() -> Self {
        Self::new(NodeKind::Concept)
    }

    pub fn task() -> Self {
        Self::new(NodeKind::Task)
    }

    pub fn reference() -> Self {
        Self::new(NodeKind::Reference)
    }

    /// Body content node; its kind follows the block variant
    pub fn block(block: Block) -> Self {
        let kind = match &block {
            Block::Paragraph(_) => NodeKind::Paragraph,
            Block::Table(_) => NodeKind::Table,
            Block::Figure(_) => NodeKind::Figure,
            Block::Note(_) => NodeKind::Note,
            Block::Tree(_) => NodeKind::Tree,
        };
        Self {
            body: Some(block),
            ..Self::new(kind)
        }
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Override the configuration for this node and its subtree
    pub fn with_config(mut self, config: Configuration) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_title(mut self, title: ParallelText) -> Self {
        self.title = title;
        self
    }

    pub fn ja(mut self, body: impl Into<String>) -> Self {
        self.title.insert(Text::ja(body));
        self
    }

    pub fn en(mut self, body: impl Into<String>) -> Self {
        self.title.insert(Text::en(body));
        self
    }

    /// Set one title variant with modifiers
    pub fn set<I, M>(mut self, lang: Lang, body: impl Into<String>, modifiers: I) -> Self
    where
        I: IntoIterator<Item = M>,
        M: Into<Modifier>,
    {
        self.title.set(lang, body, modifiers);
        self
    }

    fn into_node(self, parent: NodeId) -> Node {
        Node {
            kind: self.kind,
            parent: Some(parent),
            children: Vec::new(),
            config: self.config,
            id: self.id,
            title: self.title,
            body: self.body,
            leading_topic: None,
        }
    }
}

/// Document-level metadata
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DocumentMeta {
    /// Document authors
    pub authors: Vec<ParallelText>,
    /// Free-form attributes for exporters (product line, revision, ...)
    pub attributes: BTreeMap<String, String>,
}

impl DocumentMeta {
    pub fn add_author(&mut self, author: ParallelText) {
        self.authors.push(author);
    }

    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(key.into(), value.into());
    }

    pub fn get_attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(|s| s.as_str())
    }
}

/// A complete document: the root, its front and back matter, and the
/// composition tree beneath them
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    nodes: Vec<Node>,
    root: NodeId,
    frontmatter: NodeId,
    backmatter: NodeId,
    defaults: Configuration,
    /// Authors and attributes
    pub metadata: DocumentMeta,
}

impl Default for Document {
    /// A document whose root has no explicit configuration; every lookup
    /// falls back to [`Configuration::default`]
    fn default() -> Self {
        Self::build(None)
    }
}

impl Document {
    /// Create a document with an explicit root configuration
    pub fn new(config: Configuration) -> Self {
        Self::build(Some(config))
    }

    fn build(config: Option<Configuration>) -> Self {
        let root = NodeId(0);
        let frontmatter = NodeId(1);
        let backmatter = NodeId(2);
        let matter = |kind| Node {
            kind,
            parent: Some(root),
            ..Node::root(None)
        };
        Self {
            nodes: vec![
                Node::root(config),
                matter(NodeKind::Frontmatter),
                matter(NodeKind::Backmatter),
            ],
            root,
            frontmatter,
            backmatter,
            defaults: Configuration::default(),
            metadata: DocumentMeta::default(),
        }
    }

    /// Set the document title
    pub fn with_title(mut self, title: ParallelText) -> Self {
        self.nodes[self.root.0].title = title;
        self
    }

    pub fn title(&self) -> &ParallelText {
        &self.nodes[self.root.0].title
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn frontmatter(&self) -> NodeId {
        self.frontmatter
    }

    pub fn backmatter(&self) -> NodeId {
        self.backmatter
    }

    /// Configuration used when no node on the ancestor chain sets one
    pub fn default_config(&self) -> &Configuration {
        &self.defaults
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Like [`node`](Self::node), failing with `UnknownNode`
    pub fn get(&self, id: NodeId) -> Result<&Node> {
        self.node(id).ok_or(ModelError::UnknownNode(id))
    }

    pub(crate) fn nodes_slice(&self) -> &[Node] {
        &self.nodes
    }

    pub(crate) fn nodes_slice_mut(&mut self) -> &mut [Node] {
        &mut self.nodes
    }

    /// Number of nodes, including the root and both matter nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a document holds at least its root
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Ordered children of a node (empty for unknown ids)
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map(Node::children).unwrap_or(&[])
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(Node::parent)
    }

    /// Children in document order; for the root this wraps the ordered
    /// children in front matter and back matter
    pub(crate) fn reading_children(&self, id: NodeId) -> Vec<NodeId> {
        let children = self.children(id);
        if id == self.root {
            let mut all = Vec::with_capacity(children.len() + 2);
            all.push(self.frontmatter);
            all.extend_from_slice(children);
            all.push(self.backmatter);
            all
        } else {
            children.to_vec()
        }
    }

    /// The node and every node beneath it, pre-order
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        if self.node(id).is_none() {
            return out;
        }
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            out.push(current);
            stack.extend(self.reading_children(current).into_iter().rev());
        }
        out
    }

    /// Find a node by its author-assigned identifier
    pub fn find_by_id(&self, id: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|node| node.id() == Some(id))
            .map(NodeId)
    }

    /// Number of ancestors of a node
    pub fn depth(&self, id: NodeId) -> usize {
        let mut depth = 0;
        let mut current = self.parent(id);
        while let Some(parent) = current {
            depth += 1;
            current = self.parent(parent);
        }
        depth
    }

    /// Resolve the configuration in effect at a node
    ///
    /// The node's own configuration if it has one, otherwise the nearest
    /// ancestor's, otherwise the document default.
    pub fn resolve_config(&self, id: NodeId) -> Result<&Configuration> {
        let mut current_id = id;
        let mut current = self.get(id)?;
        loop {
            if let Some(config) = &current.config {
                if current_id != id {
                    log::debug!("Configuration for {} found on ancestor {}", id, current_id);
                }
                return Ok(config);
            }
            match current.parent {
                Some(parent) => {
                    current_id = parent;
                    current = self.get(parent)?;
                }
                None => return Ok(&self.defaults),
            }
        }
    }

    /// Attach `child` under `parent`
    ///
    /// Fails with `StructuralViolation` when the child's kind is not in the
    /// parent's allow-list, and with `Untitled` when a title was set on a
    /// kind that has none. The tree is left unchanged in both cases.
    pub fn add(&mut self, parent: NodeId, child: NodeBuilder) -> Result<NodeId> {
        let parent_kind = self.get(parent)?.kind;
        let permitted = parent_kind.permits(child.kind, self.resolve_config(parent)?);
        if !permitted {
            log::warn!(
                "Rejected {} under {} {}: not in allow-list",
                child.kind,
                parent_kind,
                parent
            );
            return Err(ModelError::structural(parent_kind, child.kind));
        }
        if !child.kind.is_titled() && !child.title.is_empty() {
            log::warn!("Rejected {} under {}: kind has no title", child.kind, parent);
            return Err(ModelError::Untitled(child.kind));
        }

        let id = NodeId(self.nodes.len());
        let kind = child.kind;
        self.nodes.push(child.into_node(parent));
        self.nodes[parent.0].children.push(id);
        log::debug!("Attached {} {} under {} {}", kind, id, parent_kind, parent);
        Ok(id)
    }

    /// Attach under the document root
    pub fn add_child(&mut self, child: NodeBuilder) -> Result<NodeId> {
        self.add(self.root, child)
    }

    /// Mark `topic` as the leading topic of `submap`
    ///
    /// The topic must already be a child of the submap.
    pub fn set_leading_topic(&mut self, submap: NodeId, topic: NodeId) -> Result<()> {
        let node = self.get(submap)?;
        let topic_kind = self.get(topic)?.kind;
        if !node.kind.is_submap() || !topic_kind.is_topic() || !node.children.contains(&topic) {
            return Err(ModelError::LeadingTopic { submap, topic });
        }
        log::debug!("Leading topic of {} {} is {}", node.kind, submap, topic);
        self.nodes[submap.0].leading_topic = Some(topic);
        Ok(())
    }

    /// Footnotes for `lang` in the subtree of `id`, in document order
    pub fn footnotes(&self, id: NodeId, lang: Lang) -> Vec<&Annotation> {
        self.descendants(id)
            .into_iter()
            .filter_map(|nid| self.node(nid))
            .flat_map(Node::texts)
            .filter_map(|text| text.variant(lang))
            .flat_map(Text::footnotes)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dokmap_ast::{Figure, Note, NoteKind, Table, Tree};

    fn all_builders() -> Vec<NodeBuilder> {
        vec![
            NodeBuilder::part(),
            NodeBuilder::chapter(),
            NodeBuilder::appendices(),
            NodeBuilder::appendix(),
            NodeBuilder::concept(),
            NodeBuilder::task(),
            NodeBuilder::reference(),
            NodeBuilder::block(Block::Paragraph(Paragraph::new())),
            NodeBuilder::block(Block::Table(Table::new())),
            NodeBuilder::block(Block::Figure(Figure::new(ParallelText::new(), "a.png"))),
            NodeBuilder::block(Block::Note(Note::new(NoteKind::Tip))),
            NodeBuilder::block(Block::Tree(Tree::new())),
        ]
    }

    #[test]
    fn test_new_document_layout() {
        let doc = Document::new(Configuration::default());
        assert_eq!(doc.len(), 3);
        assert!(doc.children(doc.root()).is_empty());
        assert_eq!(doc.parent(doc.frontmatter()), Some(doc.root()));
        assert_eq!(doc.parent(doc.backmatter()), Some(doc.root()));
        assert_eq!(doc.get(doc.frontmatter()).unwrap().kind(), NodeKind::Frontmatter);
    }

    #[test]
    fn test_block_kind_follows_variant() {
        let kinds: Vec<NodeKind> = all_builders()
            .iter()
            .filter(|b| b.kind().is_block())
            .map(NodeBuilder::kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                NodeKind::Paragraph,
                NodeKind::Table,
                NodeKind::Figure,
                NodeKind::Note,
                NodeKind::Tree
            ]
        );
    }

    fn builder_for(kind: NodeKind) -> Option<NodeBuilder> {
        all_builders().into_iter().find(|b| b.kind() == kind)
    }

    /// A document holding a node of `kind`, when the configuration allows one
    fn holder(kind: NodeKind, config: &Configuration) -> Option<(Document, NodeId)> {
        let mut doc = Document::new(config.clone());
        let top = if config.part_based {
            NodeBuilder::part()
        } else {
            NodeBuilder::chapter()
        };
        let id = match kind {
            NodeKind::Document => doc.root(),
            NodeKind::Frontmatter => doc.frontmatter(),
            NodeKind::Backmatter => doc.backmatter(),
            k if k.is_submap() || k.is_grouping() => doc.add_child(builder_for(k)?).ok()?,
            k if k.is_topic() => {
                let submap = doc.add_child(top).ok()?;
                doc.add(submap, builder_for(k)?).ok()?
            }
            k => {
                let submap = doc.add_child(top).ok()?;
                let concept = doc.add(submap, NodeBuilder::concept()).ok()?;
                doc.add(concept, builder_for(k)?).ok()?
            }
        };
        Some((doc, id))
    }

    /// Allowed children per parent kind, written out independently of `schema`
    fn expected_children(parent: NodeKind, part_based: bool) -> Vec<NodeKind> {
        let topics = vec![NodeKind::Concept, NodeKind::Task, NodeKind::Reference];
        match parent {
            NodeKind::Document if part_based => vec![NodeKind::Part, NodeKind::Appendices],
            NodeKind::Document => vec![NodeKind::Chapter, NodeKind::Appendix],
            NodeKind::Frontmatter | NodeKind::Backmatter => {
                vec![NodeKind::Concept, NodeKind::Reference]
            }
            NodeKind::Part | NodeKind::Chapter | NodeKind::Appendix => topics,
            NodeKind::Appendices => vec![NodeKind::Appendix],
            NodeKind::Concept | NodeKind::Task | NodeKind::Reference => vec![
                NodeKind::Paragraph,
                NodeKind::Table,
                NodeKind::Figure,
                NodeKind::Note,
                NodeKind::Tree,
            ],
            NodeKind::Paragraph
            | NodeKind::Table
            | NodeKind::Figure
            | NodeKind::Note
            | NodeKind::Tree => Vec::new(),
        }
    }

    #[test]
    fn test_add_checks_every_pair() {
        let mut tested = Vec::new();
        for part_based in [false, true] {
            let config = Configuration::default().with_part_based(part_based);
            for parent_kind in NodeKind::ALL {
                let Some((doc, parent)) = holder(parent_kind, &config) else {
                    continue;
                };
                tested.push(parent_kind);
                for child in all_builders() {
                    let mut doc = doc.clone();
                    let child_kind = child.kind();
                    let result = doc.add(parent, child);
                    assert_eq!(
                        result.is_ok(),
                        expected_children(parent_kind, part_based).contains(&child_kind),
                        "{parent_kind} <- {child_kind} (part_based = {part_based})"
                    );
                    match result {
                        Ok(id) => assert_eq!(doc.parent(id), Some(parent)),
                        Err(err) => {
                            assert!(matches!(err, ModelError::StructuralViolation { .. }));
                            assert_eq!(doc, holder(parent_kind, &config).unwrap().0);
                        }
                    }
                }
            }
        }
        for kind in NodeKind::ALL {
            assert!(tested.contains(&kind), "{kind} never tested as parent");
        }
    }

    #[test]
    fn test_allow_list_matches_table() {
        for part_based in [false, true] {
            let config = Configuration::default().with_part_based(part_based);
            for kind in NodeKind::ALL {
                assert_eq!(
                    kind.allowed_children(&config).to_vec(),
                    expected_children(kind, part_based),
                    "{kind} (part_based = {part_based})"
                );
            }
        }
    }

    #[test]
    fn test_topics_do_not_nest() {
        let mut doc = Document::default();
        let chapter = doc.add_child(NodeBuilder::chapter()).unwrap();
        let concept = doc.add(chapter, NodeBuilder::concept()).unwrap();
        for topic in [NodeBuilder::concept(), NodeBuilder::task(), NodeBuilder::reference()] {
            assert!(doc.add(concept, topic).is_err());
        }
        let appendix = doc.add_child(NodeBuilder::appendix()).unwrap();
        assert!(doc.add(appendix, NodeBuilder::task()).is_ok());
        assert!(doc.add(appendix, NodeBuilder::appendix()).is_err());
    }

    #[test]
    fn test_title_on_untitled_kind_rejected() {
        let mut doc = Document::new(Configuration::default().with_part_based(true));
        let before = doc.clone();
        let err = doc
            .add_child(NodeBuilder::appendices().en("Appendices"))
            .unwrap_err();
        assert!(matches!(err, ModelError::Untitled(NodeKind::Appendices)));
        assert_eq!(doc, before);

        let part = doc.add_child(NodeBuilder::part().en("Basics")).unwrap();
        let task = doc.add(part, NodeBuilder::task()).unwrap();
        let block = NodeBuilder::block(Block::Note(Note::new(NoteKind::Tip))).ja("注");
        assert!(matches!(
            doc.add(task, block).unwrap_err(),
            ModelError::Untitled(NodeKind::Note)
        ));
        assert!(doc.children(task).is_empty());
    }

    #[test]
    fn test_leading_topic() {
        let mut doc = Document::default();
        let chapter = doc.add_child(NodeBuilder::chapter()).unwrap();
        let intro = doc.add(chapter, NodeBuilder::concept()).unwrap();
        let task = doc.add(chapter, NodeBuilder::task()).unwrap();
        doc.set_leading_topic(chapter, intro).unwrap();
        assert_eq!(doc.get(chapter).unwrap().leading_topic(), Some(intro));

        let other = doc.add_child(NodeBuilder::chapter()).unwrap();
        assert!(matches!(
            doc.set_leading_topic(other, task).unwrap_err(),
            ModelError::LeadingTopic { .. }
        ));
        assert!(doc.set_leading_topic(doc.frontmatter(), intro).is_err());
        assert!(doc.set_leading_topic(chapter, other).is_err());
        assert_eq!(doc.get(other).unwrap().leading_topic(), None);
    }

    #[test]
    fn test_unknown_node() {
        let mut doc = Document::default();
        let err = doc.add(NodeId(42), NodeBuilder::chapter()).unwrap_err();
        assert!(matches!(err, ModelError::UnknownNode(NodeId(42))));
        assert!(doc.resolve_config(NodeId(42)).is_err());
        assert!(doc.descendants(NodeId(42)).is_empty());
    }

    #[test]
    fn test_resolve_default_when_root_has_none() {
        let doc = Document::default();
        assert!(doc.get(doc.root()).unwrap().config().is_none());
        assert_eq!(doc.resolve_config(doc.root()).unwrap(), &Configuration::default());
        assert_eq!(doc.resolve_config(doc.backmatter()).unwrap(), &Configuration::default());
    }

    #[test]
    fn test_resolve_inherits_and_overrides() {
        let root_config = Configuration::default().with_languages([Lang::En]);
        let mut doc = Document::new(root_config.clone());
        let chapter = doc.add_child(NodeBuilder::chapter()).unwrap();
        let concept = doc.add(chapter, NodeBuilder::concept()).unwrap();
        assert_eq!(doc.resolve_config(concept).unwrap(), &root_config);

        let bilingual = Configuration::default();
        let appendix = doc
            .add_child(NodeBuilder::appendix().with_config(bilingual.clone()))
            .unwrap();
        let reference = doc.add(appendix, NodeBuilder::reference()).unwrap();
        assert_eq!(doc.resolve_config(reference).unwrap(), &bilingual);
        assert_eq!(doc.resolve_config(chapter).unwrap(), &root_config);
    }

    #[test]
    fn test_resolve_matches_parent_without_override() {
        let mut doc = Document::new(Configuration::default().with_part_based(true));
        let part = doc.add_child(NodeBuilder::part()).unwrap();
        let task = doc.add(part, NodeBuilder::task()).unwrap();
        let para = doc
            .add(task, NodeBuilder::block(Block::Paragraph(Paragraph::new())))
            .unwrap();
        for id in [part, task, para] {
            let parent = doc.parent(id).unwrap();
            assert_eq!(
                doc.resolve_config(id).unwrap(),
                doc.resolve_config(parent).unwrap()
            );
        }
        assert_eq!(doc.depth(para), 3);
    }

    #[test]
    fn test_descendants_document_order() {
        let mut doc = Document::default();
        let preface = doc.add(doc.frontmatter(), NodeBuilder::concept()).unwrap();
        let chapter = doc.add_child(NodeBuilder::chapter()).unwrap();
        let task = doc.add(chapter, NodeBuilder::task()).unwrap();
        let glossary = doc.add(doc.backmatter(), NodeBuilder::reference()).unwrap();
        assert_eq!(
            doc.descendants(doc.root()),
            vec![
                doc.root(),
                doc.frontmatter(),
                preface,
                chapter,
                task,
                doc.backmatter(),
                glossary
            ]
        );
        assert_eq!(doc.descendants(chapter), vec![chapter, task]);
    }

    #[test]
    fn test_find_by_id() {
        let mut doc = Document::default();
        let chapter = doc
            .add_child(NodeBuilder::chapter().with_id("manual.overview"))
            .unwrap();
        assert_eq!(doc.find_by_id("manual.overview"), Some(chapter));
        assert_eq!(doc.find_by_id("missing"), None);
    }

    #[test]
    fn test_footnotes_collected_in_order() {
        let mut doc = Document::default();
        let chapter = doc
            .add_child(
                NodeBuilder::chapter()
                    .set(Lang::En, "Setup", [Annotation::footnote("title note")]),
            )
            .unwrap();
        let concept = doc.add(chapter, NodeBuilder::concept()).unwrap();
        let mut para = Paragraph::new();
        para.text()
            .set(Lang::En, "Fill with N2.", [Annotation::subscript("2"), Annotation::footnote("first")])
            .set(Lang::Ja, "N2を充填します。", [Annotation::footnote("最初")]);
        para.text().set(Lang::En, "Done.", [Annotation::footnote("second")]);
        doc.add(concept, NodeBuilder::block(Block::Paragraph(para))).unwrap();

        let notes: Vec<&str> = doc
            .footnotes(chapter, Lang::En)
            .iter()
            .map(|a| a.content.as_str())
            .collect();
        assert_eq!(notes, vec!["title note", "first", "second"]);
        assert_eq!(doc.footnotes(doc.root(), Lang::Ja).len(), 1);
    }

    #[test]
    fn test_metadata() {
        let mut doc = Document::default().with_title(ParallelText::new().en("Guide"));
        doc.metadata.add_author(ParallelText::new().en("Docs team"));
        doc.metadata.set_attribute("product", "PW-003B");
        assert_eq!(doc.title().get(Lang::En).unwrap().body, "Guide");
        assert_eq!(doc.metadata.authors.len(), 1);
        assert_eq!(doc.metadata.get_attribute("product"), Some("PW-003B"));
    }
}
