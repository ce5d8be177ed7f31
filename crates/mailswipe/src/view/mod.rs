//! View components for the application.

mod card;
mod card_list;
mod deck;
mod header;

pub use card_list::view_card_list;
pub use deck::view_deck;
pub use header::view_header;
