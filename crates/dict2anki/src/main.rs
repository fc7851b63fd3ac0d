//! Command-line front-end for dict2anki.
//!
//! Looks up words in the dictionary service and pushes selected
//! translations into Anki through AnkiConnect. Requires a dictionary API
//! key in the key file for the lookup commands, and a running Anki with
//! the AnkiConnect add-on for the note commands.

use std::path::{Path, PathBuf};

use ankilink::{AnkiClient, NameKind};
use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use dict2anki::keys::DICTIONARY_API_URL;
use dict2anki::{Keys, RequestState, Session, Settings};
use yadict::{DictionaryClient, Lookup};

/// Look up words and turn translations into Anki flashcards.
#[derive(Parser, Debug)]
#[command(name = "dict2anki")]
#[command(version, about, long_about = None)]
struct Args {
    /// Override the settings file path
    #[arg(long, value_name = "PATH")]
    settings: Option<PathBuf>,

    /// Override the key file path
    #[arg(long, value_name = "PATH")]
    keys: Option<PathBuf>,

    /// Enable verbose logging (use multiple times for more verbosity)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the supported translation directions
    Langs,
    /// Look up a word or phrase
    Lookup {
        /// The text to look up
        text: String,
        /// Translation direction, e.g. "en-ru" (defaults to the configured one)
        #[arg(long)]
        lang: Option<String>,
    },
    /// Check that Anki is reachable and authorized
    Ping,
    /// List deck names
    Decks,
    /// List note type (model) names
    Models,
    /// Add a front/back note
    Add {
        /// Front side of the note
        front: String,
        /// Back side of the note
        back: String,
        /// Deck to add to (defaults to the configured one)
        #[arg(long)]
        deck: Option<String>,
        /// Note type to use (defaults to the configured one)
        #[arg(long)]
        model: Option<String>,
    },
    /// Show or change persisted preferences
    Config {
        /// Default translation direction, e.g. "en-ru"
        #[arg(long, value_name = "LANG")]
        translation_order: Option<String>,
        /// Default deck for new notes
        #[arg(long, value_name = "NAME")]
        deck: Option<String>,
        /// Default note type for new notes
        #[arg(long, value_name = "NAME")]
        model: Option<String>,
    },
    /// Create a template key file to fill in
    InitKeys,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();

    let keys_path = args
        .keys
        .or_else(Keys::default_path)
        .context("cannot resolve the home directory")?;
    let settings_path = args
        .settings
        .or_else(Settings::default_path)
        .context("cannot resolve the home directory")?;

    if let Command::InitKeys = args.command {
        return init_keys(&keys_path);
    }

    let keys = Keys::load(&keys_path);
    let mut settings = Settings::load(settings_path)?;

    if let Command::Config {
        translation_order,
        deck,
        model,
    } = args.command
    {
        if let Some(value) = translation_order {
            settings.set_translation_order(value)?;
        }
        if let Some(value) = deck {
            settings.set_deck_name(value)?;
        }
        if let Some(value) = model {
            settings.set_model_name(value)?;
        }
        println!("translationOrder = {}", settings.translation_order());
        println!("deckName = {}", settings.deck_name());
        println!("modelName = {}", settings.model_name());
        return Ok(());
    }

    let session = Session::new(
        DictionaryClient::new(keys.dictionary.clone().unwrap_or_default()),
        anki_client(&keys),
    );

    match args.command {
        Command::Langs => {
            ensure_dictionary_key(&keys)?;
            match session.refresh_languages().await {
                RequestState::Success(languages) => {
                    for language in languages {
                        println!("{language}");
                    }
                }
                RequestState::Failure(error) => bail!("{error}"),
                RequestState::Idle | RequestState::InProgress => {}
            }
        }
        Command::Lookup { text, lang } => {
            ensure_dictionary_key(&keys)?;
            let lang = lang.unwrap_or_else(|| settings.translation_order().to_string());
            match session.lookup(&lang, &text).await {
                RequestState::Success(lookup) => print_lookup(&lookup),
                RequestState::Failure(error) => bail!("{error}"),
                // Blank input resets the slot instead of issuing a request.
                RequestState::Idle | RequestState::InProgress => println!("No result"),
            }
        }
        Command::Ping => match session.ping_anki().await {
            RequestState::Success(_) => println!("Anki is available"),
            RequestState::Failure(error) => println!("Anki is not available: {error}"),
            RequestState::Idle | RequestState::InProgress => {}
        },
        Command::Decks => print_names(&session, NameKind::Decks).await?,
        Command::Models => print_names(&session, NameKind::Models).await?,
        Command::Add {
            front,
            back,
            deck,
            model,
        } => {
            let deck = deck.as_deref().unwrap_or(settings.deck_name());
            let model = model.as_deref().unwrap_or(settings.model_name());
            match session.add_note(deck, model, &front, &back).await {
                RequestState::Success(id) => println!("Added new note with id {id}"),
                RequestState::Failure(error) => bail!("Anki: {error}"),
                RequestState::Idle | RequestState::InProgress => {}
            }
        }
        Command::Config { .. } | Command::InitKeys => unreachable!("handled above"),
    }

    Ok(())
}

fn anki_client(keys: &Keys) -> AnkiClient {
    let mut builder = AnkiClient::builder();
    if let Some(key) = &keys.anki {
        builder = builder.api_key(key);
    }
    builder.build()
}

fn ensure_dictionary_key(keys: &Keys) -> Result<()> {
    if keys.dictionary.is_none() {
        bail!(
            "no dictionary API key configured; run `dict2anki init-keys` \
             and paste a key from {DICTIONARY_API_URL}"
        );
    }
    Ok(())
}

async fn print_names(session: &Session, kind: NameKind) -> Result<()> {
    match session.refresh_names(kind).await {
        RequestState::Success(names) => {
            for name in names {
                println!("{name}");
            }
            Ok(())
        }
        RequestState::Failure(error) => bail!("{error}"),
        RequestState::Idle | RequestState::InProgress => Ok(()),
    }
}

fn print_lookup(lookup: &Lookup) {
    if lookup.entries.is_empty() {
        println!("No result");
        return;
    }
    for entry in &lookup.entries {
        let mut header = entry.text.clone();
        if let Some(transcription) = &entry.transcription {
            header.push_str(&format!(" [{transcription}]"));
        }
        if let Some(pos) = &entry.part_of_speech {
            header.push_str(&format!(" {pos}"));
        }
        println!("{header}");

        for translation in &entry.translations {
            let mut annotations = Vec::new();
            if let Some(pos) = &translation.part_of_speech {
                annotations.push(pos.clone());
            }
            if let Some(gender) = &translation.gender {
                annotations.push(gender.clone());
            }
            if annotations.is_empty() {
                println!("  - {}", translation.text);
            } else {
                println!("  - {} ({})", translation.text, annotations.join(", "));
            }
        }
    }
}

fn init_keys(path: &Path) -> Result<()> {
    if Keys::write_template(path)? {
        println!("Created {}", path.display());
    } else {
        println!("{} already exists", path.display());
    }
    println!("Get a dictionary API key from {DICTIONARY_API_URL}");
    Ok(())
}
