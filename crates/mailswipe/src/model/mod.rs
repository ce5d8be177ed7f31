//! Application-level state that is not part of the deck core.

mod settings;

pub use settings::AppSettings;
