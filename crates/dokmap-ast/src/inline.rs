//! Inline annotations attached to a language-specific text run
//!
//! Annotations mark a fragment of the surrounding sentence as a footnote,
//! a UI reference, or a typographic variant. They are not embedded in the
//! body string; renderers interleave them using `order`.

use serde::{Deserialize, Serialize};

/// Kind of inline annotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnnotationKind {
    /// Footnote, collected into a footnote list rather than placed inline
    Footnote,
    /// Reference to a window title
    WindowTitle,
    /// Menu path (File > Open)
    MenuCascade,
    /// Reference to a button, field or other UI control
    UiControl,
    /// Superscript text
    Superscript,
    /// Subscript text
    Subscript,
}

/// An inline semantic marker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    /// What the annotation marks
    pub kind: AnnotationKind,
    /// Annotated content
    pub content: String,
    /// Interleaving position; filled in by [`Text`](crate::Text) when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
    /// Decoration rendered before the content
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub prefix: String,
    /// Decoration rendered after the content
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub postfix: String,
}

impl Annotation {
    /// Create an annotation of the given kind
    pub fn new(kind: AnnotationKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
            order: None,
            prefix: String::new(),
            postfix: String::new(),
        }
    }

    pub fn footnote(content: impl Into<String>) -> Self {
        Self::new(AnnotationKind::Footnote, content)
    }

    pub fn window_title(content: impl Into<String>) -> Self {
        Self::new(AnnotationKind::WindowTitle, content)
    }

    pub fn menu_cascade(content: impl Into<String>) -> Self {
        Self::new(AnnotationKind::MenuCascade, content)
    }

    pub fn ui_control(content: impl Into<String>) -> Self {
        Self::new(AnnotationKind::UiControl, content)
    }

    pub fn superscript(content: impl Into<String>) -> Self {
        Self::new(AnnotationKind::Superscript, content)
    }

    pub fn subscript(content: impl Into<String>) -> Self {
        Self::new(AnnotationKind::Subscript, content)
    }

    /// Set an explicit interleaving position
    pub fn with_order(mut self, order: u32) -> Self {
        self.order = Some(order);
        self
    }

    /// Set the prefix decoration
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Set the postfix decoration
    pub fn with_postfix(mut self, postfix: impl Into<String>) -> Self {
        self.postfix = postfix.into();
        self
    }

    /// Interleaving position, 0 when never assigned
    pub fn order(&self) -> u32 {
        self.order.unwrap_or(0)
    }

    /// Content wrapped in its prefix and postfix
    pub fn decorated(&self) -> String {
        format!("{}{}{}", self.prefix, self.content, self.postfix)
    }

    pub fn is_footnote(&self) -> bool {
        self.kind == AnnotationKind::Footnote
    }
}

/// Product applicability marker
///
/// Travels with a sentence so publishing can filter content per product.
/// It is not an inline annotation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Applicability {
    /// Product identifiers
    pub products: Vec<String>,
    /// When set, the content applies to every product except `products`
    #[serde(default)]
    pub exclude: bool,
}

impl Applicability {
    /// Content that applies only to the listed products
    pub fn only<I, S>(products: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            products: products.into_iter().map(Into::into).collect(),
            exclude: false,
        }
    }

    /// Content that applies to every product but the listed ones
    pub fn except<I, S>(products: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            exclude: true,
            ..Self::only(products)
        }
    }

    /// Check whether the content is published for `product`
    pub fn applies_to(&self, product: &str) -> bool {
        let listed = self.products.iter().any(|p| p == product);
        listed != self.exclude
    }
}

/// Argument accepted alongside a text body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modifier {
    /// Inline annotation, kept by the text
    Annotation(Annotation),
    /// Applicability metadata, ignored by the text
    Applicability(Applicability),
}

impl From<Annotation> for Modifier {
    fn from(annotation: Annotation) -> Self {
        Modifier::Annotation(annotation)
    }
}

impl From<Applicability> for Modifier {
    fn from(applicability: Applicability) -> Self {
        Modifier::Applicability(applicability)
    }
}
