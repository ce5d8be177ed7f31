//! Translation of raw window events into deck pointer messages.
//!
//! The top card's `mouse_area` only says that it was hit; the position comes
//! from the global press event, and [`PressLatch`] pairs the two. Moves,
//! release and loss are listened for globally so a drag keeps working once
//! the cursor leaves the card.

use iced::{Event, event, mouse, touch, window};
use mailswipe_core::Point;

use crate::message::Message;

/// Maps a window event to a pointer message, if it is one.
#[allow(clippy::needless_pass_by_value)] // Signature required by `event::listen_with`
pub fn pointer_message(
    event: Event,
    _status: event::Status,
    _window: window::Id,
) -> Option<Message> {
    match event {
        Event::Mouse(mouse::Event::CursorMoved { position })
        | Event::Touch(touch::Event::FingerMoved { position, .. }) => {
            Some(Message::PointerMoved(to_point(position)))
        }
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
            Some(Message::PointerPressed(None))
        }
        Event::Touch(touch::Event::FingerPressed { position, .. }) => {
            Some(Message::PointerPressed(Some(to_point(position))))
        }
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
        | Event::Touch(touch::Event::FingerLifted { .. }) => Some(Message::PointerReleased),
        Event::Mouse(mouse::Event::CursorLeft)
        | Event::Touch(touch::Event::FingerLost { .. })
        | Event::Window(window::Event::Unfocused) => Some(Message::PointerLost),
        _ => None,
    }
}

const fn to_point(position: iced::Point) -> Point {
    Point::new(position.x, position.y)
}

/// Joins a card hit with the press position.
///
/// Widget messages and subscription events for the same press arrive in
/// either order, so the gesture starts once both are in.
#[derive(Debug, Clone, Copy, Default)]
pub struct PressLatch {
    hit: bool,
    origin: Option<Point>,
}

impl PressLatch {
    /// The top card was pressed. Returns the origin if it is already known.
    pub fn hit(&mut self) -> Option<Point> {
        self.hit = true;
        self.take()
    }

    /// A press happened at `origin`. Returns it if the card was hit.
    pub fn press(&mut self, origin: Point) -> Option<Point> {
        self.origin = Some(origin);
        self.take()
    }

    /// Forgets a half-finished press.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn take(&mut self) -> Option<Point> {
        if !self.hit {
            return None;
        }
        let origin = self.origin?;
        self.clear();
        Some(origin)
    }
}
