//! Public types for AnkiConnect operations.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A new note to be added to Anki.
///
/// Field names are case-sensitive and must match the model's field names
/// exactly; values are HTML.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// The deck to add the note to.
    pub deck_name: String,
    /// The note type (model) name.
    pub model_name: String,
    /// Field values, keyed by field name.
    pub fields: HashMap<String, String>,
}

impl Note {
    /// Create a two-sided note with `Front`/`Back` fields, the layout of
    /// the stock "Basic" model.
    pub fn basic(
        deck: impl Into<String>,
        model: impl Into<String>,
        front: impl Into<String>,
        back: impl Into<String>,
    ) -> Self {
        let mut fields = HashMap::new();
        fields.insert("Front".to_string(), front.into());
        fields.insert("Back".to_string(), back.into());
        Self {
            deck_name: deck.into(),
            model_name: model.into(),
            fields,
        }
    }
}

/// The name lists the endpoint can enumerate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    /// Deck names (`deckNames`).
    Decks,
    /// Note type names (`modelNames`).
    Models,
}

impl NameKind {
    /// The protocol action for this list.
    pub(crate) fn action(self) -> &'static str {
        match self {
            NameKind::Decks => "deckNames",
            NameKind::Models => "modelNames",
        }
    }
}

/// Decoded result of the `requestPermission` action.
#[derive(Debug, Clone, Deserialize)]
pub struct Permission {
    /// The permission status string; `"granted"` on success.
    pub permission: String,
    /// Whether the endpoint is configured to require an API key.
    #[serde(rename = "requireApikey", default)]
    pub require_api_key: bool,
    /// The endpoint's API version.
    #[serde(default)]
    pub version: u8,
}
