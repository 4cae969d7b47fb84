//! Language tags
//!
//! The closed set of locales a document can be authored in. Adding a
//! locale means adding a variant here; every `match` over `Lang` then
//! points at the places that need to learn about it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TextError;

/// A supported locale
///
/// Serialized as its short code; deserialized through [`FromStr`], so
/// settings files accept the same tags as `str::parse`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Lang {
    /// No particular language (identifiers, product names, numbers)
    #[serde(rename = "none")]
    Unspecified,
    /// Japanese
    Ja,
    /// English
    En,
}

impl Lang {
    /// Every language tag, in declaration order
    pub const ALL: [Lang; 3] = [Lang::Unspecified, Lang::Ja, Lang::En];

    /// Short tag used in settings files and export attributes
    pub fn code(self) -> &'static str {
        match self {
            Lang::Unspecified => "none",
            Lang::Ja => "ja",
            Lang::En => "en",
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Lang {
    type Err = TextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "none" => Ok(Lang::Unspecified),
            "ja" | "ja-jp" | "jpn" => Ok(Lang::Ja),
            "en" | "en-us" | "eng" => Ok(Lang::En),
            _ => Err(TextError::UnknownLanguage(s.to_string())),
        }
    }
}

impl TryFrom<String> for Lang {
    type Error = TextError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip() {
        for lang in Lang::ALL {
            assert_eq!(lang.code().parse::<Lang>().unwrap(), lang);
        }
    }

    #[test]
    fn test_parse_regional_tags() {
        assert_eq!("ja-JP".parse::<Lang>().unwrap(), Lang::Ja);
        assert_eq!("EN".parse::<Lang>().unwrap(), Lang::En);
        assert_eq!("".parse::<Lang>().unwrap(), Lang::Unspecified);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "fr".parse::<Lang>().unwrap_err();
        assert!(err.to_string().contains("fr"));
    }

    #[test]
    fn test_serialize() {
        assert_eq!(serde_json::to_string(&Lang::Ja).unwrap(), "\"ja\"");
        assert_eq!(
            serde_json::from_str::<Lang>("\"none\"").unwrap(),
            Lang::Unspecified
        );
    }

    #[test]
    fn test_deserialize_accepts_parse_tags() {
        let langs: Vec<Lang> = serde_json::from_str(r#"["ja-JP", "eng", "EN", ""]"#).unwrap();
        assert_eq!(langs, vec![Lang::Ja, Lang::En, Lang::En, Lang::Unspecified]);

        let err = serde_json::from_str::<Lang>("\"fr\"").unwrap_err();
        assert!(err.to_string().contains("Unknown language tag: fr"));
    }
}
