//! API key storage.
//!
//! Keys live in a properties-style file (`key=value` lines, `#` comments),
//! by default at `~/.config/dict2anki/keys.properties`, and are loaded once
//! at startup. A missing or unreadable file is not fatal; the tool can
//! still talk to an unauthenticated AnkiConnect endpoint.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

/// Where to request a dictionary API key.
pub const DICTIONARY_API_URL: &str = "https://yandex.com/dev/dictionary/";

const KEYS_PATH: &str = ".config/dict2anki/keys.properties";
const DICTIONARY_KEY: &str = "dictionary";
const ANKI_KEY: &str = "anki";

/// API keys loaded at startup.
///
/// A key left blank in the file is treated as not configured.
#[derive(Debug, Default)]
pub struct Keys {
    /// Key for the dictionary service.
    pub dictionary: Option<String>,
    /// Key for the AnkiConnect endpoint, only needed when the endpoint is
    /// configured to require one.
    pub anki: Option<String>,
}

impl Keys {
    /// The default key file location under the user's home directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(KEYS_PATH))
    }

    /// Load keys from `path`.
    ///
    /// A file that cannot be read yields empty keys with a warning rather
    /// than an error.
    pub fn load(path: &Path) -> Self {
        debug!(path = %path.display(), "loading keys");
        match fs::read_to_string(path) {
            Ok(text) => Self::parse(&text),
            Err(error) => {
                warn!(path = %path.display(), %error, "could not read key file");
                Self::default()
            }
        }
    }

    fn parse(text: &str) -> Self {
        let mut keys = Self::default();
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((name, value)) = line.split_once('=') else {
                continue;
            };
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            match name.trim() {
                DICTIONARY_KEY => keys.dictionary = Some(value.to_string()),
                ANKI_KEY => keys.anki = Some(value.to_string()),
                _ => {}
            }
        }
        keys
    }

    /// Write a template key file for the user to fill in.
    ///
    /// Returns `false` without touching anything when the file already
    /// exists.
    pub fn write_template(path: &Path) -> io::Result<bool> {
        if path.exists() {
            return Ok(false);
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(
            path,
            format!("# Enter your keys here\n{DICTIONARY_KEY}=\n{ANKI_KEY}=\n"),
        )?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_keys() {
        let keys = Keys::parse("dictionary=dict.1.1.abc\nanki=secret\n");
        assert_eq!(keys.dictionary.as_deref(), Some("dict.1.1.abc"));
        assert_eq!(keys.anki.as_deref(), Some("secret"));
    }

    #[test]
    fn skips_comments_blanks_and_unknown_entries() {
        let keys = Keys::parse("# Enter your keys here\n\nother=x\ndictionary = dict.1.1.abc \n");
        assert_eq!(keys.dictionary.as_deref(), Some("dict.1.1.abc"));
        assert_eq!(keys.anki, None);
    }

    #[test]
    fn blank_values_mean_not_configured() {
        let keys = Keys::parse("dictionary=\nanki=\n");
        assert_eq!(keys.dictionary, None);
        assert_eq!(keys.anki, None);
    }

    #[test]
    fn missing_file_yields_empty_keys() {
        let dir = tempfile::tempdir().unwrap();
        let keys = Keys::load(&dir.path().join("nope.properties"));
        assert_eq!(keys.dictionary, None);
        assert_eq!(keys.anki, None);
    }

    #[test]
    fn template_round_trips_to_empty_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sub/keys.properties");

        assert!(Keys::write_template(&path).unwrap());
        // Second call leaves the existing file alone.
        assert!(!Keys::write_template(&path).unwrap());

        let keys = Keys::load(&path);
        assert_eq!(keys.dictionary, None);
        assert_eq!(keys.anki, None);
    }
}
