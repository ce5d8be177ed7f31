//! Deck of cards awaiting triage.
//!
//! [`Deck`] holds the data, [`DeckSession`] wires gesture trackers to it and
//! [`ViewHost`] decides whether the deck is mounted at all.

mod host;
mod session;
mod state;

pub use host::{EMPTY_MESSAGE, EMPTY_TITLE, HeaderText, ViewHost, ViewMode};
pub use session::{DeckSession, TickReport};
pub use state::Deck;
