//! User preferences.
//!
//! A small JSON file, by default `~/.config/dict2anki/settings.json`, read
//! once at startup and rewritten in full on every change. Unset fields
//! fall back to fixed defaults, so a missing file simply means "all
//! defaults".

use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const SETTINGS_PATH: &str = ".config/dict2anki/settings.json";

const DEFAULT_TRANSLATION_ORDER: &str = "en-ru";
const DEFAULT_DECK_NAME: &str = "Default";
const DEFAULT_MODEL_NAME: &str = "Basic";

/// The error type for settings persistence.
#[derive(Debug, Error)]
pub enum Error {
    /// The settings file could not be read or written.
    #[error("settings I/O error: {0}")]
    Io(#[from] io::Error),

    /// The settings file exists but is not valid JSON.
    #[error("settings file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct SettingsData {
    translation_order: Option<String>,
    deck_name: Option<String>,
    model_name: Option<String>,
}

/// File-backed user preferences with write-through persistence.
///
/// Every setter rewrites the file immediately; there is no separate save
/// step to forget.
#[derive(Debug)]
pub struct Settings {
    path: PathBuf,
    data: SettingsData,
}

impl Settings {
    /// The default settings file location under the user's home directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(SETTINGS_PATH))
    }

    /// Load settings from `path`.
    ///
    /// A missing file yields all defaults; a malformed file is an error.
    pub fn load(path: PathBuf) -> Result<Self, Error> {
        debug!(path = %path.display(), "loading settings");
        let data = match fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str(&text)?,
            Err(error) if error.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no settings file, using defaults");
                SettingsData::default()
            }
            Err(error) => return Err(error.into()),
        };
        Ok(Self { path, data })
    }

    /// The translation direction for lookups, e.g. `"en-ru"`.
    pub fn translation_order(&self) -> &str {
        self.data
            .translation_order
            .as_deref()
            .unwrap_or(DEFAULT_TRANSLATION_ORDER)
    }

    /// The deck new notes go into.
    pub fn deck_name(&self) -> &str {
        self.data.deck_name.as_deref().unwrap_or(DEFAULT_DECK_NAME)
    }

    /// The note type (model) new notes use.
    pub fn model_name(&self) -> &str {
        self.data
            .model_name
            .as_deref()
            .unwrap_or(DEFAULT_MODEL_NAME)
    }

    /// Set and persist the translation direction.
    pub fn set_translation_order(&mut self, value: impl Into<String>) -> Result<(), Error> {
        self.data.translation_order = Some(value.into());
        self.save()
    }

    /// Set and persist the deck name.
    pub fn set_deck_name(&mut self, value: impl Into<String>) -> Result<(), Error> {
        self.data.deck_name = Some(value.into());
        self.save()
    }

    /// Set and persist the model name.
    pub fn set_model_name(&mut self, value: impl Into<String>) -> Result<(), Error> {
        self.data.model_name = Some(value.into());
        self.save()
    }

    fn save(&self) -> Result<(), Error> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&self.data)?)?;
        Ok(())
    }
}
