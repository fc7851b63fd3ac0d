//! Look up a word and print its translations.
//!
//! Usage: YADICT_KEY=dict.1.1.XXXX cargo run --example lookup -- time

use yadict::DictionaryClient;

#[tokio::main]
async fn main() -> yadict::Result<()> {
    let key = std::env::var("YADICT_KEY").expect("set YADICT_KEY to a dictionary API key");
    let text = std::env::args().nth(1).unwrap_or_else(|| "time".to_string());

    let client = DictionaryClient::new(key);
    let lookup = client.lookup("en-ru", &text).await?;

    if lookup.entries.is_empty() {
        println!("No result");
        return Ok(());
    }
    for entry in &lookup.entries {
        println!("{}", entry.text);
        for translation in &entry.translations {
            println!("  - {}", translation.text);
        }
    }
    Ok(())
}
