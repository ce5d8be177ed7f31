//! Swipe gesture recognition for the top card of the deck.
//!
//! A [`GestureTracker`] turns raw pointer events into a commit/cancel
//! decision and drives the exit or return animation. Trackers are owned by a
//! [`GestureRegistry`] keyed by card id.

mod motion;
mod registry;
mod tracker;

pub use motion::{Spring, Tween};
pub use registry::GestureRegistry;
pub use tracker::{
    GestureOutcome, GesturePhase, GestureTracker, Point, SwipeDirection, decide_release,
};
