//! # mailswipe-core
//!
//! Toolkit-independent core of the `MailSwipe` triage deck.
//!
//! This crate provides:
//! - Card records and the JSON card loader
//! - **Deck state** with two-phase dismissal (mark now, remove after a delay)
//! - **Gesture tracking** - drag, release decision, exit and spring-back
//! - Stack layout for the top few cards
//! - The deck/list view host
//!
//! Every time-dependent operation takes an explicit [`std::time::Instant`],
//! so the whole crate runs without a clock or a GUI.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod card;
pub mod config;
pub mod deck;
mod error;
pub mod gesture;
pub mod stack;

pub use card::{CardId, CardRecord, load_cards, parse_cards, sample_cards, validate_cards};
pub use config::{
    CommitDistance, ConfigError, DeckConfig, GestureConfig, StackConfig, TogglePolicy,
};
pub use deck::{
    Deck, DeckSession, EMPTY_MESSAGE, EMPTY_TITLE, HeaderText, TickReport, ViewHost, ViewMode,
};
pub use error::{Error, Result};
pub use gesture::{
    GestureOutcome, GesturePhase, GestureRegistry, GestureTracker, Point, SwipeDirection,
    decide_release,
};
pub use stack::{DepthStyle, Rotation, depth_style, layout};
