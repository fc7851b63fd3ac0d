//! An async client for the Yandex Dictionary API.
//!
//! The service exposes two operations: listing the supported translation
//! directions and looking up a word or phrase in one of them. Both are
//! plain HTTPS GET requests signed with an API key; errors are reported
//! through HTTP status codes, which this crate maps to [`ApiError`] values
//! with the service's documented messages.
//!
//! # Quick Start
//!
//! ```no_run
//! use yadict::DictionaryClient;
//!
//! # async fn example() -> yadict::Result<()> {
//! let client = DictionaryClient::new("dict.1.1.XXXX");
//!
//! let directions = client.languages().await?;
//! println!("{} translation directions", directions.len());
//!
//! let lookup = client.lookup("en-ru", "time").await?;
//! for entry in &lookup.entries {
//!     println!("{}: {} translations", entry.text, entry.translations.len());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Logging
//!
//! Outgoing request URLs are logged at debug level with the API key value
//! redacted. The key never appears in log output.

pub mod client;
pub mod error;
pub mod types;

pub use client::{ClientBuilder, DictionaryClient};
pub use error::{ApiError, Error, Result};
pub use types::{Entry, Lookup, Translation};
