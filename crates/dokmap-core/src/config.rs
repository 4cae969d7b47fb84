//! Document configuration
//!
//! Policy switches read while composing a document. A configuration is
//! fixed when its node is attached; nodes without one inherit it from the
//! nearest ancestor (see [`Document::resolve_config`](crate::Document::resolve_config)).

use serde::{Deserialize, Serialize};

use dokmap_ast::Lang;

use crate::error::Result;

/// Document-wide or subtree policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// Top level is made of parts and appendix groups instead of chapters
    pub part_based: bool,
    /// Languages every text is expected to carry before publication
    pub languages: Vec<Lang>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            part_based: false,
            languages: vec![Lang::Ja, Lang::En],
        }
    }
}

impl Configuration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from a TOML string
    ///
    /// ```
    /// use dokmap_core::Configuration;
    /// use dokmap_ast::Lang;
    ///
    /// let config = Configuration::from_toml_str("part_based = true\nlanguages = [\"en\"]").unwrap();
    /// assert!(config.part_based);
    /// assert_eq!(config.languages, vec![Lang::En]);
    /// ```
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    pub fn with_part_based(mut self, part_based: bool) -> Self {
        self.part_based = part_based;
        self
    }

    pub fn with_languages(mut self, languages: impl IntoIterator<Item = Lang>) -> Self {
        self.languages = languages.into_iter().collect();
        self
    }
}
