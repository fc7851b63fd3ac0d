//! Response types for dictionary lookups.
//!
//! Field names follow the service's JSON (`def`, `ts`, `tr`, `gen`, `fr`),
//! renamed to something readable on the Rust side. Unknown keys are
//! ignored so additions to the service format do not break deserialization.

use serde::Deserialize;

/// The result of a lookup: zero or more dictionary entries.
///
/// An empty `entries` list is a successful "no result", not an error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Lookup {
    /// Dictionary entries for the looked-up text.
    #[serde(rename = "def", default)]
    pub entries: Vec<Entry>,
}

/// A single dictionary entry: one headword with its translations.
#[derive(Debug, Clone, Deserialize)]
pub struct Entry {
    /// The headword.
    pub text: String,
    /// Part-of-speech tag, when the service provides one.
    #[serde(rename = "pos", default)]
    pub part_of_speech: Option<String>,
    /// Phonetic transcription of the headword.
    #[serde(rename = "ts", default)]
    pub transcription: Option<String>,
    /// Translations of the headword.
    #[serde(rename = "tr", default)]
    pub translations: Vec<Translation>,
}

/// A single translation of a headword.
#[derive(Debug, Clone, Deserialize)]
pub struct Translation {
    /// The translated text.
    pub text: String,
    /// Part-of-speech tag of the translation.
    #[serde(rename = "pos", default)]
    pub part_of_speech: Option<String>,
    /// Grammatical gender annotation, for languages that have one.
    #[serde(rename = "gen", default)]
    pub gender: Option<String>,
    /// Frequency rank annotation.
    #[serde(rename = "fr", default)]
    pub frequency: Option<i64>,
}
