//! Body content of topics
//!
//! This module defines the block-level elements a topic can hold:
//! paragraphs of parallel text, tables, figures, notes and trees.

use serde::{Deserialize, Serialize};

use crate::text::ParallelText;

/// Block-level body element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Block {
    /// A paragraph of sentences
    Paragraph(Paragraph),
    /// A table
    Table(Table),
    /// An image with a title
    Figure(Figure),
    /// A note, tip, warning, etc.
    Note(Note),
    /// A nested outline of labels
    Tree(Tree),
}

impl Block {
    /// Every piece of parallel text held by the block, in reading order
    pub fn texts(&self) -> Vec<&ParallelText> {
        match self {
            Block::Paragraph(p) => p.sentences.iter().collect(),
            Block::Table(t) => t
                .caption
                .iter()
                .chain(t.header.iter())
                .chain(t.rows.iter().flatten())
                .collect(),
            Block::Figure(f) => vec![&f.title],
            Block::Note(n) => n.content.iter().collect(),
            Block::Tree(t) => {
                let mut out = Vec::new();
                for item in &t.items {
                    item.collect_labels(&mut out);
                }
                out
            }
        }
    }
}

/// A paragraph made of parallel-text sentences
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Paragraph {
    /// Sentences in reading order
    pub sentences: Vec<ParallelText>,
}

impl Paragraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sentence and return it for further editing
    pub fn text(&mut self) -> &mut ParallelText {
        self.sentences.push(ParallelText::new());
        let last = self.sentences.len() - 1;
        &mut self.sentences[last]
    }

    /// Append prebuilt sentences
    pub fn extend(&mut self, sentences: impl IntoIterator<Item = ParallelText>) {
        self.sentences.extend(sentences);
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }
}

/// A simple table of parallel-text cells
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Table {
    /// Table caption
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<ParallelText>,
    /// Header cells
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub header: Vec<ParallelText>,
    /// Body rows
    pub rows: Vec<Vec<ParallelText>>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_caption(mut self, caption: ParallelText) -> Self {
        self.caption = Some(caption);
        self
    }

    pub fn with_header(mut self, header: Vec<ParallelText>) -> Self {
        self.header = header;
        self
    }

    pub fn with_row(mut self, row: Vec<ParallelText>) -> Self {
        self.rows.push(row);
        self
    }
}

/// A figure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    /// Figure title
    pub title: ParallelText,
    /// Image path or URL
    pub image: String,
}

impl Figure {
    pub fn new(title: ParallelText, image: impl Into<String>) -> Self {
        Self {
            title,
            image: image.into(),
        }
    }
}

/// Note type variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteKind {
    #[default]
    Note,
    Tip,
    Important,
    Caution,
    Warning,
}

/// A note block
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Note {
    /// Type of note
    pub kind: NoteKind,
    /// Note sentences
    pub content: Vec<ParallelText>,
}

impl Note {
    pub fn new(kind: NoteKind) -> Self {
        Self {
            kind,
            content: Vec::new(),
        }
    }

    pub fn with_text(mut self, text: ParallelText) -> Self {
        self.content.push(text);
        self
    }
}

/// A nested outline, e.g. a menu tree or a directory listing
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Tree {
    /// Top-level items
    pub items: Vec<TreeItem>,
}

impl Tree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(mut self, item: TreeItem) -> Self {
        self.items.push(item);
        self
    }
}

/// One labelled entry of a [`Tree`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeItem {
    /// Entry label
    pub label: ParallelText,
    /// Nested entries
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeItem>,
}

impl TreeItem {
    pub fn new(label: ParallelText) -> Self {
        Self {
            label,
            children: Vec::new(),
        }
    }

    pub fn with_child(mut self, child: TreeItem) -> Self {
        self.children.push(child);
        self
    }

    fn collect_labels<'a>(&'a self, out: &mut Vec<&'a ParallelText>) {
        out.push(&self.label);
        for child in &self.children {
            child.collect_labels(out);
        }
    }
}
