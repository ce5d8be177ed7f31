//! Button style functions with theme support.

use iced::widget::button;
use iced::{Background, Border, Color};

use super::palette;
use super::shadows;
use super::shadows::radius;

/// Header icon button: transparent until hovered.
pub fn header_button_style(_theme: &iced::Theme, status: button::Status) -> button::Style {
    let p = palette::current();

    let base = button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: p.text_secondary,
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: radius::PILL.into(),
        },
        shadow: shadows::none(),
        snap: false,
    };

    match status {
        button::Status::Active | button::Status::Disabled => base,
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(p.hover)),
            border: Border {
                color: p.border_subtle,
                width: 1.0,
                radius: radius::PILL.into(),
            },
            text_color: p.text_primary,
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(p.primary_light)),
            text_color: p.text_on_primary,
            ..base
        },
    }
}

/// Swipe action button under the deck (keyboard-free fling).
pub fn fling_button_style(
    left: bool,
) -> impl Fn(&iced::Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let p = palette::current();
        let accent = if left { p.swipe_left } else { p.swipe_right };

        let base = button::Style {
            background: Some(Background::Color(p.surface)),
            text_color: accent,
            border: Border {
                color: palette::faded(accent, 0.4),
                width: 1.0,
                radius: radius::PILL.into(),
            },
            shadow: shadows::subtle(),
            snap: false,
        };

        match status {
            button::Status::Active => base,
            button::Status::Hovered => button::Style {
                border: Border {
                    color: accent,
                    width: 1.5,
                    radius: radius::PILL.into(),
                },
                ..base
            },
            button::Status::Pressed => button::Style {
                background: Some(Background::Color(accent)),
                text_color: p.text_on_primary,
                ..base
            },
            button::Status::Disabled => button::Style {
                text_color: p.text_muted,
                border: Border {
                    color: p.border_subtle,
                    width: 1.0,
                    radius: radius::PILL.into(),
                },
                shadow: shadows::none(),
                ..base
            },
        }
    }
}
