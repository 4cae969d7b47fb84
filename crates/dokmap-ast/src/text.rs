//! Language-tagged text and parallel multilingual text
//!
//! A [`Text`] is one language's rendering of a sentence or title. A
//! [`ParallelText`] holds one `Text` per language for the same logical
//! content. It can be filled with the fluent setters (`ja`, `en`) or by
//! adding prebuilt `Text` values; both produce equal values.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TextError};
use crate::inline::{Annotation, Applicability, Modifier};
use crate::lang::Lang;

/// One language's text run with its inline annotations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Text {
    /// Language of the run; selects the slot in a [`ParallelText`]
    pub lang: Lang,
    /// The text itself
    pub body: String,
    /// Inline annotations in insertion order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
}

impl Text {
    /// Create a text run without annotations
    pub fn new(lang: Lang, body: impl Into<String>) -> Self {
        Self {
            lang,
            body: body.into(),
            annotations: Vec::new(),
        }
    }

    /// Create a text run from a body and any mix of modifiers
    ///
    /// Only annotations are kept. An annotation without an explicit order
    /// takes its zero-based position among the annotations passed here.
    ///
    /// ```
    /// use dokmap_ast::{Annotation, Applicability, Lang, Modifier, Text};
    ///
    /// let text = Text::with_modifiers(
    ///     Lang::En,
    ///     "Open the menu.",
    ///     [
    ///         Modifier::from(Applicability::only(["PW-003B"])),
    ///         Modifier::from(Annotation::ui_control("Menu")),
    ///     ],
    /// );
    /// assert_eq!(text.annotations.len(), 1);
    /// assert_eq!(text.annotations[0].order(), 0);
    /// ```
    pub fn with_modifiers<I, M>(lang: Lang, body: impl Into<String>, modifiers: I) -> Self
    where
        I: IntoIterator<Item = M>,
        M: Into<Modifier>,
    {
        let mut text = Self::new(lang, body);
        for modifier in modifiers {
            if let Modifier::Annotation(mut annotation) = modifier.into() {
                let position = text.annotations.len() as u32;
                annotation.order.get_or_insert(position);
                text.annotations.push(annotation);
            }
        }
        text
    }

    /// Japanese text run
    pub fn ja(body: impl Into<String>) -> Self {
        Self::new(Lang::Ja, body)
    }

    /// English text run
    pub fn en(body: impl Into<String>) -> Self {
        Self::new(Lang::En, body)
    }

    /// Annotations sorted by their interleaving order (stable on ties)
    pub fn annotations_in_order(&self) -> Vec<&Annotation> {
        let mut ordered: Vec<&Annotation> = self.annotations.iter().collect();
        ordered.sort_by_key(|a| a.order());
        ordered
    }

    /// Footnote annotations of this run
    pub fn footnotes(&self) -> impl Iterator<Item = &Annotation> {
        self.annotations.iter().filter(|a| a.is_footnote())
    }
}

/// One logical sentence or title, rendered once per language
///
/// Each text is stored in the slot named by its own `lang`. Deserializing
/// a map whose key disagrees with the text's tag fails.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "StoredParallelText")]
pub struct ParallelText {
    variants: BTreeMap<Lang, Text>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    applicability: Option<Applicability>,
}

/// Serialized shape of [`ParallelText`], checked on the way in
#[derive(Deserialize)]
struct StoredParallelText {
    variants: BTreeMap<Lang, Text>,
    #[serde(default)]
    applicability: Option<Applicability>,
}

impl TryFrom<StoredParallelText> for ParallelText {
    type Error = TextError;

    fn try_from(stored: StoredParallelText) -> Result<Self> {
        let mismatch = stored
            .variants
            .iter()
            .find(|(slot, text)| **slot != text.lang);
        if let Some((slot, text)) = mismatch {
            return Err(TextError::MismatchedVariant {
                slot: *slot,
                lang: text.lang,
            });
        }
        Ok(Self {
            variants: stored.variants,
            applicability: stored.applicability,
        })
    }
}

impl ParallelText {
    /// Create an empty parallel text
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from prebuilt texts, each placed by its own language
    pub fn from_texts(texts: impl IntoIterator<Item = Text>) -> Self {
        let mut parallel = Self::new();
        parallel.add(texts);
        parallel
    }

    /// Set the variant for `lang`, replacing any previous one
    pub fn set<I, M>(&mut self, lang: Lang, body: impl Into<String>, modifiers: I) -> &mut Self
    where
        I: IntoIterator<Item = M>,
        M: Into<Modifier>,
    {
        self.insert(Text::with_modifiers(lang, body, modifiers))
    }

    /// Place one prebuilt text in the slot named by its language
    pub fn insert(&mut self, text: Text) -> &mut Self {
        self.variants.insert(text.lang, text);
        self
    }

    /// Place several prebuilt texts, each in the slot named by its language
    pub fn add(&mut self, texts: impl IntoIterator<Item = Text>) -> &mut Self {
        for text in texts {
            self.insert(text);
        }
        self
    }

    /// Read the variant for `lang`
    pub fn get(&self, lang: Lang) -> Result<&Text> {
        self.variants
            .get(&lang)
            .ok_or(TextError::MissingVariant { lang })
    }

    /// Read the variant for `lang`, if present
    pub fn variant(&self, lang: Lang) -> Option<&Text> {
        self.variants.get(&lang)
    }

    /// Fluent setter for any language
    pub fn with<I, M>(mut self, lang: Lang, body: impl Into<String>, modifiers: I) -> Self
    where
        I: IntoIterator<Item = M>,
        M: Into<Modifier>,
    {
        self.set(lang, body, modifiers);
        self
    }

    /// Fluent Japanese setter
    pub fn ja(mut self, body: impl Into<String>) -> Self {
        self.insert(Text::ja(body));
        self
    }

    /// Fluent English setter
    pub fn en(mut self, body: impl Into<String>) -> Self {
        self.insert(Text::en(body));
        self
    }

    /// Fluent Japanese setter with modifiers
    pub fn ja_with<I, M>(self, body: impl Into<String>, modifiers: I) -> Self
    where
        I: IntoIterator<Item = M>,
        M: Into<Modifier>,
    {
        self.with(Lang::Ja, body, modifiers)
    }

    /// Fluent English setter with modifiers
    pub fn en_with<I, M>(self, body: impl Into<String>, modifiers: I) -> Self
    where
        I: IntoIterator<Item = M>,
        M: Into<Modifier>,
    {
        self.with(Lang::En, body, modifiers)
    }

    /// Attach product applicability to the whole sentence
    pub fn applies_to(mut self, applicability: Applicability) -> Self {
        self.set_applicability(applicability);
        self
    }

    pub fn set_applicability(&mut self, applicability: Applicability) -> &mut Self {
        self.applicability = Some(applicability);
        self
    }

    pub fn applicability(&self) -> Option<&Applicability> {
        self.applicability.as_ref()
    }

    /// Languages that have a variant, in tag order
    pub fn languages(&self) -> impl Iterator<Item = Lang> + '_ {
        self.variants.keys().copied()
    }

    /// Check whether `lang` has a variant
    pub fn contains(&self, lang: Lang) -> bool {
        self.variants.contains_key(&lang)
    }

    /// Languages from `required` that have no variant
    pub fn missing(&self, required: &[Lang]) -> Vec<Lang> {
        required
            .iter()
            .copied()
            .filter(|lang| !self.contains(*lang))
            .collect()
    }

    /// Iterate over the variants in tag order
    pub fn iter(&self) -> impl Iterator<Item = &Text> {
        self.variants.values()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }
}

impl From<Text> for ParallelText {
    fn from(text: Text) -> Self {
        Self::from_texts([text])
    }
}

impl FromIterator<Text> for ParallelText {
    fn from_iter<T: IntoIterator<Item = Text>>(iter: T) -> Self {
        Self::from_texts(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fluent_setters() {
        let text = ParallelText::new().ja("概要").en("Overview");
        let ja = text.get(Lang::Ja).unwrap();
        assert_eq!(ja.body, "概要");
        assert!(ja.annotations.is_empty());
        assert_eq!(text.get(Lang::En).unwrap().body, "Overview");
        assert_eq!(text.len(), 2);
    }

    #[test]
    fn test_missing_variant() {
        let text = ParallelText::new().ja("概要");
        let err = text.get(Lang::En).unwrap_err();
        assert_eq!(err, TextError::MissingVariant { lang: Lang::En });
        assert_eq!(text.missing(&[Lang::Ja, Lang::En]), vec![Lang::En]);
    }

    #[test]
    fn test_subscript_with_explicit_order() {
        let text = ParallelText::new().ja_with("値", [Annotation::subscript("2").with_order(1)]);
        let ja = text.get(Lang::Ja).unwrap();
        assert_eq!(ja.annotations.len(), 1);
        assert_eq!(ja.annotations[0].kind, crate::AnnotationKind::Subscript);
        assert_eq!(ja.annotations[0].content, "2");
        assert_eq!(ja.annotations[0].order(), 1);
    }

    #[test]
    fn test_default_order_is_insertion_position() {
        let text = Text::with_modifiers(
            Lang::En,
            "Press OK in the Settings window.",
            [Annotation::ui_control("OK"), Annotation::window_title("Settings")],
        );
        assert_eq!(text.annotations[0].order(), 0);
        assert_eq!(text.annotations[1].order(), 1);
    }

    #[test]
    fn test_non_annotation_modifiers_ignored() {
        let text = Text::with_modifiers(
            Lang::Ja,
            "右上のアイコンをクリックします。",
            [
                Modifier::from(Applicability::only(["PW-003B"])),
                Modifier::from(Annotation::footnote("注記")),
            ],
        );
        assert_eq!(text.annotations.len(), 1);
        assert_eq!(text.annotations[0].order(), 0);
        assert_eq!(text.footnotes().count(), 1);
    }

    #[test]
    fn test_annotations_in_order() {
        let text = Text::with_modifiers(
            Lang::En,
            "H2O at 10^3 Pa",
            [
                Annotation::superscript("3").with_order(5),
                Annotation::subscript("2").with_order(1),
                Annotation::ui_control("Start").with_order(5),
            ],
        );
        let contents: Vec<&str> = text
            .annotations_in_order()
            .iter()
            .map(|a| a.content.as_str())
            .collect();
        assert_eq!(contents, vec!["2", "3", "Start"]);
    }

    #[test]
    fn test_each_text_owns_its_annotations() {
        let mut first = Text::ja("一");
        let second = Text::ja("二");
        first.annotations.push(Annotation::footnote("only here"));
        assert!(second.annotations.is_empty());
    }

    #[test]
    fn test_set_replaces_variant() {
        let mut text = ParallelText::new();
        text.set(Lang::En, "Draft", [Annotation::footnote("old")])
            .set(Lang::En, "Final", Vec::<Annotation>::new());
        let en = text.get(Lang::En).unwrap();
        assert_eq!(en.body, "Final");
        assert!(en.annotations.is_empty());
    }

    #[test]
    fn test_collect_from_texts() {
        let text: ParallelText = vec![Text::en("Preface"), Text::ja("はじめに")]
            .into_iter()
            .collect();
        assert_eq!(text.languages().collect::<Vec<_>>(), vec![Lang::Ja, Lang::En]);
    }

    #[test]
    fn test_applicability_is_kept_on_sentence() {
        let text = ParallelText::new()
            .applies_to(Applicability::only(["PW-003B"]))
            .en("Open the menu.");
        assert!(text.applicability().unwrap().applies_to("PW-003B"));
        assert!(text.get(Lang::En).unwrap().annotations.is_empty());
    }

    #[test]
    fn test_deserialize_keeps_slots() {
        let text = ParallelText::new().ja("概要").en("Overview");
        let json = serde_json::to_string(&text).unwrap();
        let restored: ParallelText = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, text);
    }

    #[test]
    fn test_deserialize_rejects_mismatched_slot() {
        let json = r#"{"variants":{"en":{"lang":"ja","body":"x"}}}"#;
        let err = serde_json::from_str::<ParallelText>(json).unwrap_err();
        assert!(err.to_string().contains("Text in 'en' slot is tagged 'ja'"));
    }
}
