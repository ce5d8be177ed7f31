//! Card records - the passive data the deck and list views display.

mod model;
mod source;

pub use model::{CardId, CardRecord};
pub use source::{load_cards, parse_cards, sample_cards, validate_cards};
