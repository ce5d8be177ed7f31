//! Container style functions with theme support.

use iced::widget::container;
use iced::{Background, Border, Color};

use super::palette;
use super::shadows;
use super::shadows::radius;

/// Window background behind the deck or list.
pub fn background_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.background)),
        text_color: Some(p.text_primary),
        ..Default::default()
    }
}

/// Header bar style with a bottom border.
pub fn header_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.surface)),
        border: Border {
            color: p.border_subtle,
            width: 1.0,
            radius: radius::NONE.into(),
        },
        shadow: shadows::none(),
        ..Default::default()
    }
}

/// Deck card surface.
///
/// `alpha` fades the whole card, `tint` (-1..=1) blends the border towards
/// the swipe direction color, `shadow_intensity` comes from the stack depth.
pub fn swipe_card_style(
    alpha: f32,
    tint: f32,
    shadow_intensity: f32,
) -> impl Fn(&iced::Theme) -> container::Style {
    move |_theme| {
        let p = palette::current();
        let toward = if tint < 0.0 { p.swipe_left } else { p.swipe_right };
        let border = palette::mix(p.border_subtle, toward, tint.abs());

        container::Style {
            background: Some(Background::Color(palette::faded(p.surface, alpha))),
            text_color: Some(palette::faded(p.text_primary, alpha)),
            border: Border {
                color: palette::faded(border, alpha),
                width: tint.abs().mul_add(2.0, 1.0),
                radius: radius::CARD.into(),
            },
            shadow: shadows::depth(shadow_intensity * alpha),
            ..Default::default()
        }
    }
}

/// Flat list row.
pub fn list_row_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.surface)),
        border: Border {
            color: p.border_subtle,
            width: 1.0,
            radius: radius::MEDIUM.into(),
        },
        shadow: shadows::subtle(),
        ..Default::default()
    }
}

/// Summary tag chip.
pub fn badge_style(alpha: f32) -> impl Fn(&iced::Theme) -> container::Style {
    move |_theme| {
        let p = palette::current();
        container::Style {
            background: Some(Background::Color(palette::faded(p.badge, alpha))),
            text_color: Some(palette::faded(p.badge_text, alpha)),
            border: Border {
                radius: radius::PILL.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Small filled circle marking an unread message.
pub fn unread_dot_style(alpha: f32) -> impl Fn(&iced::Theme) -> container::Style {
    move |_theme| {
        let p = palette::current();
        container::Style {
            background: Some(Background::Color(palette::faded(p.unread, alpha))),
            border: Border {
                radius: radius::PILL.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Swipe affordance dots at the bottom of a deck card.
pub fn indicator_dot_style(alpha: f32) -> impl Fn(&iced::Theme) -> container::Style {
    move |_theme| {
        let p = palette::current();
        container::Style {
            background: Some(Background::Color(palette::faded(p.border_medium, alpha))),
            border: Border {
                radius: radius::PILL.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Floating "{n} remaining" pill under the deck.
pub fn counter_pill_style(_theme: &iced::Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.25))),
        text_color: Some(Color::WHITE),
        border: Border {
            color: Color::from_rgba(1.0, 1.0, 1.0, 0.1),
            width: 1.0,
            radius: radius::PILL.into(),
        },
        shadow: shadows::depth(0.2),
        ..Default::default()
    }
}

/// Round badge behind the empty-state check mark.
pub fn empty_icon_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.surface_sunken)),
        text_color: Some(p.text_muted),
        border: Border {
            radius: radius::PILL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
