//! Bilingual text
//!
//! Every piece of site content exists in Hindi and English. [`Language`]
//! selects which variant is shown.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display language of the site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    /// The site opens in Hindi unless a preference was saved.
    #[default]
    Hindi,
}

impl Language {
    /// Storage literal (`"english"` / `"hindi"`)
    pub const fn as_str(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Hindi => "hindi",
        }
    }

    /// The other language
    pub const fn toggle(self) -> Self {
        match self {
            Language::English => Language::Hindi,
            Language::Hindi => Language::English,
        }
    }

    /// Pick between an English and a Hindi string
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::text::Language;
    /// assert_eq!(Language::English.t("Home", "मुखपृष्ठ"), "Home");
    /// assert_eq!(Language::Hindi.t("Home", "मुखपृष्ठ"), "मुखपृष्ठ");
    /// ```
    pub fn t<'a>(&self, english: &'a str, hindi: &'a str) -> &'a str {
        match self {
            Language::English => english,
            Language::Hindi => hindi,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a known language literal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLanguage(pub String);

impl fmt::Display for UnknownLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown language '{}', expected 'english' or 'hindi'", self.0)
    }
}

impl std::error::Error for UnknownLanguage {}

impl FromStr for Language {
    type Err = UnknownLanguage;

    /// Exact match on the storage literals; no case folding.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "english" => Ok(Language::English),
            "hindi" => Ok(Language::Hindi),
            other => Err(UnknownLanguage(other.to_string())),
        }
    }
}

/// Text available in both site languages
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BilingualText {
    pub hindi: String,
    pub english: String,
}

impl BilingualText {
    pub fn new(english: impl Into<String>, hindi: impl Into<String>) -> Self {
        Self {
            hindi: hindi.into(),
            english: english.into(),
        }
    }

    /// The variant for `language`
    pub fn pick(&self, language: Language) -> &str {
        language.t(&self.english, &self.hindi)
    }

    /// True when both variants are blank
    pub fn is_blank(&self) -> bool {
        self.hindi.trim().is_empty() && self.english.trim().is_empty()
    }
}
