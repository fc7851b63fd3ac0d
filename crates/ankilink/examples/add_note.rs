//! Add a single note to a running Anki instance.
//!
//! Requires Anki to be running with the AnkiConnect add-on installed.

use ankilink::{AnkiClient, NameKind, Note};

#[tokio::main]
async fn main() -> ankilink::Result<()> {
    let client = AnkiClient::new();

    client.request_permission().await?;
    println!("AnkiConnect is available");

    let decks = client.names(NameKind::Decks).await?;
    println!("decks: {decks:?}");

    let note = Note::basic("Default", "Basic", "hello", "bonjour");
    let id = client.add_note(note).await?;
    println!("created note {id}");

    Ok(())
}
