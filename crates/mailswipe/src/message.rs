//! Message types for application events.
//!
//! In the Elm architecture, Messages are events that trigger state changes.

use std::time::Instant;

use mailswipe_core::{Point, SwipeDirection};

use crate::model::AppSettings;

/// Application messages (events).
#[derive(Debug, Clone)]
pub enum Message {
    // Deck input
    /// Pointer went down on the top card.
    CardPressed,
    /// Left button or finger went down anywhere. `None` means at the cursor.
    PointerPressed(Option<Point>),
    /// Cursor or finger moved anywhere in the window.
    PointerMoved(Point),
    /// Left button or finger went up.
    PointerReleased,
    /// Pointer sequence interrupted (finger lost, cursor left, focus lost).
    PointerLost,
    /// Frame timer fired while an animation or removal is pending.
    Frame(Instant),
    /// Send the top card off-screen without dragging.
    Fling(SwipeDirection),

    // View
    /// Window width changed.
    WindowResized(f32),
    /// Switch between deck and list.
    ToggleView,
    /// Switch between light and dark theme.
    ToggleTheme,
    /// Keyboard shortcut pressed.
    KeyPressed(KeyboardAction),

    // Settings
    /// Settings loaded.
    SettingsLoaded(Result<AppSettings, String>),
    /// Settings saved.
    SettingsSaved(Result<(), String>),

    /// Event nobody handles.
    Ignored,
}

/// Keyboard shortcut actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardAction {
    /// Left arrow: fling the top card left.
    SwipeLeft,
    /// Right arrow: fling the top card right.
    SwipeRight,
    /// Tab or Ctrl+L: toggle deck/list.
    ToggleView,
    /// Ctrl+T: toggle theme.
    ToggleTheme,
}
