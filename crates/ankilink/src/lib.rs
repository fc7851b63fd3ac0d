//! A minimal async client for the AnkiConnect API.
//!
//! AnkiConnect is the local HTTP automation interface exposed by the Anki
//! add-on of the same name: a single POST endpoint on `127.0.0.1:8765`
//! taking `{action, version, params?}` bodies. This crate covers the three
//! actions a lookup-to-flashcard tool needs: checking that Anki is
//! reachable and authorized, enumerating deck/model names, and adding a
//! note.
//!
//! # Quick Start
//!
//! ```no_run
//! use ankilink::{AnkiClient, NameKind, Note};
//!
//! # async fn example() -> ankilink::Result<()> {
//! let client = AnkiClient::new();
//!
//! // Fails with a descriptive error when Anki is not running.
//! client.request_permission().await?;
//!
//! let decks = client.names(NameKind::Decks).await?;
//! println!("decks: {decks:?}");
//!
//! let note = Note::basic("Default", "Basic", "hello", "bonjour");
//! let id = client.add_note(note).await?;
//! println!("created note {id}");
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
mod protocol;
pub mod types;

pub use client::{AnkiClient, ClientBuilder};
pub use error::{Error, Result};
pub use types::{NameKind, Note, Permission};
