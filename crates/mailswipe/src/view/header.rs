//! Header with title, card count and the view/theme toggles.

use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Element, Length};
use mailswipe_core::{HeaderText, ViewMode};

use super::card::BOLD;
use crate::message::Message;
use crate::style::widgets::palette::{self, ThemeMode};
use crate::style::widgets::{header_button_style, header_style};

/// Renders the header bar.
pub fn view_header(
    header: &HeaderText,
    mode: ViewMode,
    theme_mode: ThemeMode,
) -> Element<'static, Message> {
    let title = text(header.title).size(22).font(BOLD).style(|_theme| {
        let p = palette::current();
        text::Style {
            color: Some(p.text_primary),
        }
    });

    let subtitle = text(header.subtitle.clone()).size(13).style(|_theme| {
        let p = palette::current();
        text::Style {
            color: Some(p.text_secondary),
        }
    });

    // Shows the mode you would switch to.
    let view_icon = match mode {
        ViewMode::Deck => "\u{2630}",
        ViewMode::List => "\u{25A3}",
    };
    let view_toggle = button(text(view_icon).size(18))
        .padding([8, 12])
        .style(header_button_style)
        .on_press(Message::ToggleView);

    let theme_icon = match theme_mode {
        ThemeMode::Light => "\u{263E}",
        ThemeMode::Dark => "\u{2600}",
    };
    let theme_toggle = button(text(theme_icon).size(18))
        .padding([8, 12])
        .style(header_button_style)
        .on_press(Message::ToggleTheme);

    let content = row![
        column![title, subtitle].spacing(2),
        Space::new().width(Length::Fill),
        theme_toggle,
        view_toggle,
    ]
    .spacing(8)
    .padding([12, 20])
    .align_y(Alignment::Center);

    container(content)
        .width(Length::Fill)
        .style(header_style)
        .into()
}
