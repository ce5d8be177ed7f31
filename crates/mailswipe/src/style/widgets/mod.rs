//! Widget styles: palette, shadows, containers and buttons.

mod buttons;
mod containers;
pub mod palette;
mod scrollables;
mod shadows;

pub use containers::{
    background_style, badge_style, counter_pill_style, empty_icon_style, header_style,
    indicator_dot_style, list_row_style, swipe_card_style, unread_dot_style,
};

pub use buttons::{fling_button_style, header_button_style};

pub use scrollables::list_scrollable_style;
