use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Language utilities for the translation allow-list
///
/// This module defines the built-in languages, the name -> code table injected
/// into the request handler, and ordered language pairs. Codes are ISO 639-1
/// and are checked against `isolang`.
/// Built-in languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    Hebrew,
    Russian,
}

impl Language {
    /// Every built-in language, in table order
    pub const ALL: [Language; 3] = [Language::English, Language::Hebrew, Language::Russian];

    // @returns: Display name, as accepted on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Hebrew => "Hebrew",
            Self::Russian => "Russian",
        }
    }

    // @returns: ISO 639-1 code used in model identifiers
    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Hebrew => "he",
            Self::Russian => "ru",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One row of the language table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageEntry {
    /// Display name, e.g. "Hebrew"
    pub name: String,
    /// ISO 639-1 code, e.g. "he"
    pub code: String,
}

impl LanguageEntry {
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
        }
    }
}

impl From<Language> for LanguageEntry {
    fn from(language: Language) -> Self {
        Self::new(language.name(), language.code())
    }
}

/// Name -> code lookup table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageTable {
    entries: Vec<LanguageEntry>,
}

impl LanguageTable {
    pub fn new(entries: Vec<LanguageEntry>) -> Self {
        Self { entries }
    }

    /// Look up the code for an exact language name
    pub fn code_for(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.code.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.code_for(name).is_some()
    }

    pub fn entries(&self) -> &[LanguageEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for LanguageTable {
    fn default() -> Self {
        Self::new(Language::ALL.iter().copied().map(LanguageEntry::from).collect())
    }
}

/// Ordered (source, destination) combination of language names
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LanguagePair {
    pub source: String,
    pub destination: String,
}

impl LanguagePair {
    pub fn new(source: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }

    /// Exact, direction-sensitive comparison against a pair of names
    pub fn matches(&self, source: &str, destination: &str) -> bool {
        self.source == source && self.destination == destination
    }
}

impl From<(Language, Language)> for LanguagePair {
    fn from((source, destination): (Language, Language)) -> Self {
        Self::new(source.name(), destination.name())
    }
}

impl fmt::Display for LanguagePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' & '{}'", self.source, self.destination)
    }
}

/// The pairs a stock installation translates
pub fn default_supported_pairs() -> Vec<LanguagePair> {
    vec![
        LanguagePair::from((Language::English, Language::Hebrew)),
        LanguagePair::from((Language::Hebrew, Language::Russian)),
    ]
}

/// Human readable list of pairs, e.g. "'English' & 'Hebrew' or 'Hebrew' & 'Russian'"
pub fn describe_pairs(pairs: &[LanguagePair]) -> String {
    pairs
        .iter()
        .map(|pair| pair.to_string())
        .collect::<Vec<_>>()
        .join(" or ")
}

/// Validate that a code is a known ISO 639-1 code
pub fn validate_language_code(code: &str) -> Result<()> {
    if code.len() == 2 && isolang::Language::from_639_1(code).is_some() {
        Ok(())
    } else {
        Err(anyhow!("Invalid ISO 639-1 language code: '{}'", code))
    }
}
