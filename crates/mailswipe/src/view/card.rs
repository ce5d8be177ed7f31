//! Card body shared by the deck and the list.

use iced::widget::{Column, Row, column, container, row, text};
use iced::{Alignment, Element, Length};
use mailswipe_core::CardRecord;

use crate::message::Message;
use crate::style::widgets::{badge_style, indicator_dot_style, palette, unread_dot_style};

/// Bold variant of the default font.
pub const BOLD: iced::Font = iced::Font {
    weight: iced::font::Weight::Bold,
    ..iced::Font::DEFAULT
};

/// Semibold variant of the default font.
pub const SEMIBOLD: iced::Font = iced::Font {
    weight: iced::font::Weight::Semibold,
    ..iced::Font::DEFAULT
};

/// Swipe affordance under a deck card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Footer {
    /// No footer (list rows).
    None,
    /// Three dots hinting that the card can be swiped.
    Dots,
    /// Card is past the commit distance; `tint` is the signed direction.
    ReleaseHint {
        /// Negative for left, positive for right.
        tint: f32,
    },
}

/// Sender line, subject, preview and tags, faded by `alpha`.
pub fn view_card_content(card: &CardRecord, alpha: f32, footer: Footer) -> Column<'static, Message> {
    let sender = text(card.sender.clone())
        .size(15)
        .font(BOLD)
        .style(move |_theme| text::Style {
            color: Some(palette::faded(palette::current().text_primary, alpha)),
        });

    let time = text(card.time.clone())
        .size(12)
        .style(move |_theme| text::Style {
            color: Some(palette::faded(palette::current().text_muted, alpha)),
        });

    let mut top_row = row![sender, iced::widget::Space::new().width(Length::Fill), time]
        .spacing(8)
        .align_y(Alignment::Center);
    if !card.read {
        top_row = top_row.push(unread_dot(alpha));
    }

    let subject = text(card.subject.clone())
        .size(17)
        .font(SEMIBOLD)
        .style(move |_theme| text::Style {
            color: Some(palette::faded(palette::current().text_primary, alpha)),
        });

    let preview = text(card.preview.clone())
        .size(14)
        .style(move |_theme| text::Style {
            color: Some(palette::faded(palette::current().text_secondary, alpha)),
        });

    let mut content = column![top_row, subject, preview].spacing(8);

    if !card.tags.is_empty() {
        content = content.push(view_badges(&card.tags, alpha));
    }

    match footer {
        Footer::None => content,
        Footer::Dots => content.push(indicator_dots(alpha)),
        Footer::ReleaseHint { tint } => content.push(release_hint(tint, alpha)),
    }
}

/// Tag chips, wrapping onto extra lines when needed.
pub fn view_badges(tags: &[String], alpha: f32) -> Element<'static, Message> {
    let chips: Vec<Element<'static, Message>> = tags
        .iter()
        .map(|tag| {
            container(text(tag.clone()).size(11).font(SEMIBOLD))
                .padding([3, 10])
                .style(badge_style(alpha))
                .into()
        })
        .collect();

    Row::with_children(chips).spacing(6).wrap().into()
}

fn unread_dot(alpha: f32) -> Element<'static, Message> {
    container(iced::widget::Space::new())
        .width(Length::Fixed(8.0))
        .height(Length::Fixed(8.0))
        .style(unread_dot_style(alpha))
        .into()
}

fn indicator_dots(alpha: f32) -> Element<'static, Message> {
    let dot = || -> Element<'static, Message> {
        container(iced::widget::Space::new())
            .width(Length::Fixed(6.0))
            .height(Length::Fixed(6.0))
            .style(indicator_dot_style(alpha))
            .into()
    };

    container(row![dot(), dot(), dot()].spacing(4))
        .width(Length::Fill)
        .center_x(Length::Fill)
        .padding([4, 0])
        .into()
}

fn release_hint(tint: f32, alpha: f32) -> Element<'static, Message> {
    let label = if tint < 0.0 {
        "\u{2190} Release to dismiss"
    } else {
        "Release to dismiss \u{2192}"
    };

    container(text(label).size(12).font(SEMIBOLD).style(move |_theme| {
        let p = palette::current();
        let color = if tint < 0.0 { p.swipe_left } else { p.swipe_right };
        text::Style {
            color: Some(palette::faded(color, alpha)),
        }
    }))
    .width(Length::Fill)
    .center_x(Length::Fill)
    .into()
}
