//! Look up words in an online dictionary and turn translations into Anki
//! flashcards.
//!
//! The library side of the `dict2anki` binary:
//!
//! - [`state`]: the idle/in-progress/success/failure lifecycle wrapper
//!   around asynchronous calls, with generation-counted slots that make
//!   overlapping calls race-free.
//! - [`session`]: one [`Session`] owning both API clients and a state
//!   slot per user-facing operation.
//! - [`settings`] / [`keys`]: file-backed user preferences and API keys.

pub mod keys;
pub mod session;
pub mod settings;
pub mod state;

pub use keys::Keys;
pub use session::Session;
pub use settings::Settings;
pub use state::{RequestSlot, RequestState, Ticket};
