//! The session layer: clients plus per-operation request state.
//!
//! A [`Session`] owns both API clients and one [`RequestSlot`] per
//! user-facing operation. Every operation drives its slot through
//! `InProgress` into `Success`/`Failure` and returns the slot's state
//! afterwards, which belongs to the newest issued call, not necessarily
//! to this one, when calls overlap (see [`crate::state`]).

use std::sync::Arc;

use ankilink::{AnkiClient, NameKind, Note, Permission};
use tracing::debug;
use yadict::{DictionaryClient, Lookup};

use crate::state::{RequestSlot, RequestState};

/// State of a dictionary-backed operation.
pub type DictionaryState<T> = RequestState<T, Arc<yadict::Error>>;

/// State of an AnkiConnect-backed operation.
pub type AnkiState<T> = RequestState<T, Arc<ankilink::Error>>;

/// Both clients and the state box for every operation.
pub struct Session {
    dictionary: DictionaryClient,
    anki: AnkiClient,
    languages: RequestSlot<Vec<String>, Arc<yadict::Error>>,
    lookup: RequestSlot<Lookup, Arc<yadict::Error>>,
    connection: RequestSlot<Permission, Arc<ankilink::Error>>,
    names: RequestSlot<Vec<String>, Arc<ankilink::Error>>,
    note: RequestSlot<i64, Arc<ankilink::Error>>,
}

impl Session {
    /// Create a session over the two clients.
    pub fn new(dictionary: DictionaryClient, anki: AnkiClient) -> Self {
        Self {
            dictionary,
            anki,
            languages: RequestSlot::new(),
            lookup: RequestSlot::new(),
            connection: RequestSlot::new(),
            names: RequestSlot::new(),
            note: RequestSlot::new(),
        }
    }

    /// Fetch the supported translation directions.
    pub async fn refresh_languages(&self) -> DictionaryState<Vec<String>> {
        let ticket = self.languages.begin();
        let result = self.dictionary.languages().await.map_err(Arc::new);
        self.languages.complete(ticket, result);
        self.languages.state()
    }

    /// Look up `text` in the given translation direction.
    ///
    /// Blank input resets the slot to idle instead of issuing a request;
    /// callers render that as "no result".
    pub async fn lookup(&self, lang: &str, text: &str) -> DictionaryState<Lookup> {
        if text.trim().is_empty() {
            self.lookup.reset();
            return self.lookup.state();
        }
        debug!(lang, text, "looking up");
        let ticket = self.lookup.begin();
        let result = self.dictionary.lookup(lang, text).await.map_err(Arc::new);
        self.lookup.complete(ticket, result);
        self.lookup.state()
    }

    /// Check that the automation endpoint is reachable and authorized.
    pub async fn ping_anki(&self) -> AnkiState<Permission> {
        let ticket = self.connection.begin();
        let result = self.anki.request_permission().await.map_err(Arc::new);
        self.connection.complete(ticket, result);
        self.connection.state()
    }

    /// Fetch deck or model names.
    pub async fn refresh_names(&self, kind: NameKind) -> AnkiState<Vec<String>> {
        let ticket = self.names.begin();
        let result = self.anki.names(kind).await.map_err(Arc::new);
        self.names.complete(ticket, result);
        self.names.state()
    }

    /// Add a front/back note and report the created note id.
    pub async fn add_note(
        &self,
        deck: &str,
        model: &str,
        front: &str,
        back: &str,
    ) -> AnkiState<i64> {
        debug!(deck, model, front, "adding note");
        let ticket = self.note.begin();
        let note = Note::basic(deck, model, front, back);
        let result = self.anki.add_note(note).await.map_err(Arc::new);
        self.note.complete(ticket, result);
        self.note.state()
    }

    /// Current state of the language list.
    pub fn languages_state(&self) -> DictionaryState<Vec<String>> {
        self.languages.state()
    }

    /// Current state of the last lookup.
    pub fn lookup_state(&self) -> DictionaryState<Lookup> {
        self.lookup.state()
    }

    /// Current state of the connection check.
    pub fn connection_state(&self) -> AnkiState<Permission> {
        self.connection.state()
    }

    /// Current state of the last add-note call.
    pub fn note_state(&self) -> AnkiState<i64> {
        self.note.state()
    }
}
