//! Swipeable card stack.
//!
//! iced widgets cannot be rotated or translated freely, so the tracker's
//! output is mapped onto what layout can express: the horizontal offset
//! becomes a leading spacer inside a clipped lane, tilt becomes a border tint
//! towards the swipe color, and fan rotation of deeper cards becomes a small
//! sideways nudge.

use iced::widget::{Space, Stack, button, column, container, mouse_area, row, text};
use iced::{Alignment, Element, Length};
use mailswipe_core::{
    CardRecord, DeckSession, DepthStyle, EMPTY_MESSAGE, EMPTY_TITLE, GestureTracker, Rotation,
    SwipeDirection, layout,
};

use super::card::{BOLD, Footer, view_card_content};
use crate::message::Message;
use crate::style::widgets::{
    counter_pill_style, empty_icon_style, fling_button_style, palette, swipe_card_style,
};

/// Room on each side of the card for it to slide into before clipping.
const LANE_MARGIN: f32 = 220.0;

/// Sideways shift per degree of fixed fan rotation.
const FAN_SHIFT_PER_DEG: f32 = 2.0;

/// Height reserved for the stack.
const DECK_HEIGHT: f32 = 420.0;

/// Renders the deck, or the empty state once every card is triaged.
pub fn view_deck(session: &DeckSession, remaining: String) -> Element<'static, Message> {
    let deck = session.deck();
    if deck.is_empty() {
        return view_empty_state();
    }

    let config = session.config();
    let card_width = session.card_width();
    let max_rotation = config.gesture.max_rotation_deg;

    // Stack draws later children on top, so deepest first.
    let layers: Vec<Element<'static, Message>> = layout(deck.visible_set(), &config.stack)
        .into_iter()
        .rev()
        .map(|(card, depth)| {
            let tracker = session.tracker(&card.id);
            view_layer(card, depth, tracker, card_width, max_rotation)
        })
        .collect();

    let stack = Stack::with_children(layers)
        .width(Length::Fixed(2.0f32.mul_add(LANE_MARGIN, card_width)))
        .height(Length::Fixed(DECK_HEIGHT));

    let counter = container(text(remaining).size(13))
        .padding([6, 16])
        .style(counter_pill_style);

    let controls = row![
        fling_button(SwipeDirection::Left),
        counter,
        fling_button(SwipeDirection::Right),
    ]
    .spacing(16)
    .align_y(Alignment::Center);

    container(
        column![stack, controls]
            .spacing(24)
            .align_x(Alignment::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .into()
}

/// One card positioned in its own clipped lane.
fn view_layer(
    card: &CardRecord,
    depth: DepthStyle,
    tracker: Option<&GestureTracker>,
    card_width: f32,
    max_rotation: f32,
) -> Element<'static, Message> {
    let (offset, fade, tilt, progress) = match (depth.rotation, tracker) {
        (Rotation::Gesture, Some(t)) => (
            t.offset(),
            t.opacity(),
            t.rotation_deg() / max_rotation,
            t.commit_progress(),
        ),
        (Rotation::Gesture, None) => (0.0, 1.0, 0.0, 0.0),
        (Rotation::Fixed(deg), _) => (deg * FAN_SHIFT_PER_DEG, 1.0, 0.0, 0.0),
    };
    let alpha = depth.opacity * fade;
    let width = card_width * depth.scale;

    let footer = if !depth.interactive {
        Footer::None
    } else if progress.abs() >= 1.0 {
        Footer::ReleaseHint { tint: progress }
    } else {
        Footer::Dots
    };

    let surface = container(view_card_content(card, alpha, footer))
        .width(Length::Fixed(width))
        .padding(20)
        .style(swipe_card_style(alpha, tilt, depth.shadow_intensity));

    let surface: Element<'static, Message> = if depth.interactive {
        mouse_area(surface)
            .on_press(Message::CardPressed)
            .interaction(iced::mouse::Interaction::Grab)
            .into()
    } else {
        surface.into()
    };

    let lane_width = 2.0f32.mul_add(LANE_MARGIN, card_width);
    let centered = (card_width - width) / 2.0 + LANE_MARGIN;
    let left = (centered + offset).clamp(0.0, lane_width - width);

    container(column![
        Space::new().height(Length::Fixed(depth.vertical_offset)),
        row![Space::new().width(Length::Fixed(left)), surface],
    ])
    .width(Length::Fixed(lane_width))
    .height(Length::Fixed(DECK_HEIGHT))
    .clip(true)
    .into()
}

fn fling_button(direction: SwipeDirection) -> Element<'static, Message> {
    let (label, left) = match direction {
        SwipeDirection::Left => ("\u{2190}", true),
        SwipeDirection::Right => ("\u{2192}", false),
    };

    button(text(label).size(18))
        .padding([8, 18])
        .style(fling_button_style(left))
        .on_press(Message::Fling(direction))
        .into()
}

fn view_empty_state() -> Element<'static, Message> {
    let icon = container(text("\u{2713}").size(40))
        .width(Length::Fixed(80.0))
        .height(Length::Fixed(80.0))
        .center_x(Length::Fixed(80.0))
        .center_y(Length::Fixed(80.0))
        .style(empty_icon_style);

    let title = text(EMPTY_TITLE).size(22).font(BOLD);
    let message = text(EMPTY_MESSAGE).size(15).style(|_theme| text::Style {
        color: Some(palette::current().text_secondary),
    });

    container(
        column![icon, title, message]
            .spacing(12)
            .align_x(Alignment::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .into()
}
