//! `MailSwipe` - swipe-to-triage email card deck
//!
//! Built with Rust and the iced GUI framework on top of `mailswipe-core`.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod input;
mod message;
mod model;
mod style;
mod view;

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Context;
use iced::keyboard::{self, Key, Modifiers};
use iced::widget::{column, container};
use iced::{Element, Length, Subscription, Task, window};
use mailswipe_core::{CardRecord, GesturePhase, Point, SwipeDirection, ViewHost, ViewMode};
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use input::PressLatch;
use message::{KeyboardAction, Message};
use model::AppSettings;
use style::widgets::background_style;
use style::widgets::palette::ThemeMode;

/// Frame interval while something animates (~60 Hz).
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

fn main() -> iced::Result {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mailswipe=debug,mailswipe_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting MailSwipe");

    iced::application(MailSwipe::new, MailSwipe::update, MailSwipe::view)
        .title("MailSwipe")
        .subscription(MailSwipe::subscription)
        .run()
}

/// Main application state.
struct MailSwipe {
    /// Deck/list host over the loaded cards.
    host: ViewHost,
    /// Last known cursor position, the origin of mouse presses.
    cursor: Point,
    /// Card hit waiting for its press position, or the reverse.
    press: PressLatch,
    /// Current theme mode (light/dark).
    theme_mode: ThemeMode,
    /// Settings as last loaded or saved.
    settings: AppSettings,
}

impl MailSwipe {
    /// Create new application instance.
    fn new() -> (Self, Task<Message>) {
        let settings = AppSettings::default();
        let cards = initial_cards();
        info!("Loaded {} cards", cards.len());

        let app = Self {
            host: ViewHost::new(cards, settings.deck),
            cursor: Point::default(),
            press: PressLatch::default(),
            theme_mode: settings.theme_mode,
            settings,
        };
        app.apply_theme();

        let settings_task = Task::perform(load_settings(), Message::SettingsLoaded);
        (app, settings_task)
    }

    /// Applies the current theme mode to the global palette.
    fn apply_theme(&self) {
        style::widgets::palette::set_theme(self.theme_mode);
    }

    /// Update state based on message.
    #[allow(clippy::needless_pass_by_value)]
    fn update(&mut self, message: Message) -> Task<Message> {
        let now = Instant::now();

        match message {
            Message::CardPressed => {
                if let Some(origin) = self.press.hit() {
                    self.begin_gesture(origin, now);
                }
            }
            Message::PointerPressed(position) => {
                if let Some(position) = position {
                    self.cursor = position;
                }
                if let Some(origin) = self.press.press(self.cursor) {
                    self.begin_gesture(origin, now);
                }
            }
            Message::PointerMoved(position) => {
                self.cursor = position;
                if let Some(session) = self.host.session_mut() {
                    session.pointer_move(position, now);
                }
            }
            Message::PointerReleased => {
                self.press.clear();
                let cursor = self.cursor;
                if let Some(phase) = self
                    .host
                    .session_mut()
                    .and_then(|session| session.pointer_up(cursor, now))
                {
                    log_release(phase);
                }
            }
            Message::PointerLost => {
                self.press.clear();
                let cursor = self.cursor;
                if let Some(phase) = self
                    .host
                    .session_mut()
                    .and_then(|session| session.pointer_cancel(cursor, now))
                {
                    debug!(?phase, "Gesture cancelled");
                }
            }
            Message::Frame(at) => {
                if let Some(session) = self.host.session_mut() {
                    let report = session.tick(at);
                    for (id, direction) in &report.dismissed {
                        info!("Card {} dismissed to the {:?}", id, direction);
                    }
                }
            }
            Message::Fling(direction) => self.fling(direction, now),
            Message::WindowResized(width) => self.host.set_viewport_width(width),
            Message::ToggleView => self.toggle_view(),
            Message::ToggleTheme => return self.toggle_theme(),
            Message::KeyPressed(action) => return self.handle_keyboard_action(action, now),
            Message::SettingsLoaded(result) => match result {
                Ok(settings) => self.apply_settings(settings),
                Err(e) => {
                    info!("Failed to load settings, using defaults: {}", e);
                }
            },
            Message::SettingsSaved(result) => {
                if let Err(e) = result {
                    warn!("Failed to save settings: {}", e);
                }
            }
            Message::Ignored => {}
        }
        Task::none()
    }

    /// Handle keyboard shortcut actions.
    fn handle_keyboard_action(&mut self, action: KeyboardAction, now: Instant) -> Task<Message> {
        match action {
            KeyboardAction::SwipeLeft => self.fling(SwipeDirection::Left, now),
            KeyboardAction::SwipeRight => self.fling(SwipeDirection::Right, now),
            KeyboardAction::ToggleView => self.toggle_view(),
            KeyboardAction::ToggleTheme => return self.toggle_theme(),
        }
        Task::none()
    }

    fn begin_gesture(&mut self, origin: Point, now: Instant) {
        if let Some(session) = self.host.session_mut()
            && session.pointer_down(origin, now)
        {
            debug!(x = origin.x, "Card pressed");
        }
    }

    fn fling(&mut self, direction: SwipeDirection, now: Instant) {
        if let Some(session) = self.host.session_mut()
            && session.fling(direction, now)
        {
            debug!(?direction, "Top card flung");
        }
    }

    fn toggle_view(&mut self) {
        let mode = self.host.toggle();
        info!("View changed to {:?}", mode);
    }

    fn toggle_theme(&mut self) -> Task<Message> {
        self.theme_mode = self.theme_mode.toggled();
        self.apply_theme();
        info!("Theme changed to {:?}", self.theme_mode);

        self.settings.theme_mode = self.theme_mode;
        Task::perform(save_settings(self.settings), Message::SettingsSaved)
    }

    /// Adopts loaded settings. An invalid deck section is replaced by defaults.
    fn apply_settings(&mut self, mut settings: AppSettings) {
        info!("Settings loaded: theme={:?}", settings.theme_mode);
        self.theme_mode = settings.theme_mode;
        self.apply_theme();

        match settings.deck.validated() {
            Ok(deck) => self.host.apply_config(deck),
            Err(e) => {
                warn!("{}; using default deck settings", e);
                settings.deck = mailswipe_core::DeckConfig::default();
                self.host.apply_config(settings.deck);
            }
        }
        self.settings = settings;
    }

    /// Render current state as UI.
    fn view(&self) -> Element<'_, Message> {
        let header = view::view_header(&self.host.header(), self.host.mode(), self.theme_mode);

        let body = match self.host.session() {
            Some(session) => view::view_deck(session, self.host.remaining_label()),
            None => view::view_card_list(self.host.cards()),
        };

        container(column![header, body])
            .width(Length::Fill)
            .height(Length::Fill)
            .style(background_style)
            .into()
    }

    /// Keyboard shortcuts and window size always; pointer tracking while the
    /// deck is shown; frame ticks only while something is moving or waiting
    /// to be removed.
    fn subscription(&self) -> Subscription<Message> {
        let mut subscriptions = vec![
            keyboard::listen().map(|event| {
                if let keyboard::Event::KeyPressed { key, modifiers, .. } = event {
                    handle_key_press(key, modifiers).unwrap_or(Message::Ignored)
                } else {
                    Message::Ignored
                }
            }),
            window::resize_events().map(|(_id, size)| Message::WindowResized(size.width)),
        ];

        if self.host.mode() == ViewMode::Deck {
            subscriptions.push(iced::event::listen_with(input::pointer_message));
        }

        if self.host.is_animating() {
            subscriptions.push(iced::time::every(FRAME_INTERVAL).map(Message::Frame));
        }

        Subscription::batch(subscriptions)
    }
}

fn log_release(phase: GesturePhase) {
    match phase {
        GesturePhase::Committing(direction) => debug!(?direction, "Swipe committed"),
        GesturePhase::Returning => debug!("Swipe below threshold, returning"),
        _ => {}
    }
}

/// Handle keyboard shortcuts and return appropriate message.
fn handle_key_press(key: Key, modifiers: Modifiers) -> Option<Message> {
    let ctrl = modifiers.command(); // Ctrl on Linux/Windows, Cmd on macOS

    match key {
        // Arrows: swipe the top card
        Key::Named(keyboard::key::Named::ArrowLeft) => {
            Some(Message::KeyPressed(KeyboardAction::SwipeLeft))
        }
        Key::Named(keyboard::key::Named::ArrowRight) => {
            Some(Message::KeyPressed(KeyboardAction::SwipeRight))
        }
        // Tab or Ctrl+L: deck/list
        Key::Named(keyboard::key::Named::Tab) => {
            Some(Message::KeyPressed(KeyboardAction::ToggleView))
        }
        Key::Character(c) if ctrl && c.as_str() == "l" => {
            Some(Message::KeyPressed(KeyboardAction::ToggleView))
        }
        // Ctrl+T: theme
        Key::Character(c) if ctrl && c.as_str() == "t" => {
            Some(Message::KeyPressed(KeyboardAction::ToggleTheme))
        }
        _ => None,
    }
}

/// Cards from the JSON file named on the command line, or the samples.
fn initial_cards() -> Vec<CardRecord> {
    let Some(path) = std::env::args_os().nth(1).map(PathBuf::from) else {
        return mailswipe_core::sample_cards();
    };

    match load_card_file(&path) {
        Ok(cards) => cards,
        Err(e) => {
            warn!("{:#}; falling back to sample cards", e);
            mailswipe_core::sample_cards()
        }
    }
}

fn load_card_file(path: &std::path::Path) -> anyhow::Result<Vec<CardRecord>> {
    mailswipe_core::load_cards(path)
        .with_context(|| format!("Failed to load cards from {}", path.display()))
}

fn settings_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("mailswipe")
}

/// Load application settings from file.
async fn load_settings() -> Result<AppSettings, String> {
    let settings_path = settings_dir().join("settings.json");

    if !settings_path.exists() {
        return Ok(AppSettings::default());
    }

    let contents = tokio::fs::read_to_string(&settings_path)
        .await
        .map_err(|e| e.to_string())?;

    serde_json::from_str(&contents).map_err(|e| e.to_string())
}

/// Save application settings to file.
async fn save_settings(settings: AppSettings) -> Result<(), String> {
    let config_dir = settings_dir();

    tokio::fs::create_dir_all(&config_dir)
        .await
        .map_err(|e| e.to_string())?;

    let settings_path = config_dir.join("settings.json");
    let contents = serde_json::to_string_pretty(&settings).map_err(|e| e.to_string())?;

    tokio::fs::write(&settings_path, contents)
        .await
        .map_err(|e| e.to_string())?;

    info!("Settings saved to {:?}", settings_path);
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use mailswipe_core::CardId;

    use super::*;

    fn app() -> MailSwipe {
        MailSwipe {
            host: ViewHost::new(mailswipe_core::sample_cards(), Default::default()),
            cursor: Point::default(),
            press: PressLatch::default(),
            theme_mode: ThemeMode::Light,
            settings: AppSettings::default(),
        }
    }

    fn top_tracker(app: &MailSwipe) -> (GesturePhase, f32) {
        let tracker = app
            .host
            .session()
            .unwrap()
            .tracker(&CardId::new("1"))
            .unwrap();
        (tracker.phase(), tracker.offset())
    }

    fn action(key: Key, modifiers: Modifiers) -> Option<KeyboardAction> {
        match handle_key_press(key, modifiers) {
            Some(Message::KeyPressed(action)) => Some(action),
            _ => None,
        }
    }

    #[test]
    fn test_arrows_swipe() {
        assert_eq!(
            action(
                Key::Named(keyboard::key::Named::ArrowLeft),
                Modifiers::empty()
            ),
            Some(KeyboardAction::SwipeLeft)
        );
        assert_eq!(
            action(
                Key::Named(keyboard::key::Named::ArrowRight),
                Modifiers::empty()
            ),
            Some(KeyboardAction::SwipeRight)
        );
    }

    #[test]
    fn test_view_toggle_shortcuts() {
        assert_eq!(
            action(Key::Named(keyboard::key::Named::Tab), Modifiers::empty()),
            Some(KeyboardAction::ToggleView)
        );
        assert_eq!(
            action(Key::Character("l".into()), Modifiers::COMMAND),
            Some(KeyboardAction::ToggleView)
        );
        assert_eq!(action(Key::Character("l".into()), Modifiers::empty()), None);
    }

    #[test]
    fn test_theme_shortcut() {
        assert_eq!(
            action(Key::Character("t".into()), Modifiers::COMMAND),
            Some(KeyboardAction::ToggleTheme)
        );
    }

    #[test]
    fn test_load_card_file_rejects_duplicates() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"id":"a","sender":"S","subject":"x","preview":"p","time":"now"}},
                {{"id":"a","sender":"T","subject":"y","preview":"q","time":"now"}}
            ]"#
        )
        .unwrap();

        let err = load_card_file(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("Duplicate card id: a"));
    }

    #[test]
    fn test_load_card_file_missing_path_has_context() {
        let err = load_card_file(std::path::Path::new("/nonexistent/cards.json")).unwrap_err();
        assert!(err.to_string().starts_with("Failed to load cards from"));
    }

    #[test]
    fn test_touch_press_starts_at_finger() {
        let mut app = app();
        let _ = app.update(Message::CardPressed);
        let _ = app.update(Message::PointerPressed(Some(Point::new(300.0, 120.0))));
        let _ = app.update(Message::PointerMoved(Point::new(305.0, 120.0)));

        assert_eq!(top_tracker(&app), (GesturePhase::Pressed, 0.0));

        let _ = app.update(Message::PointerReleased);
        assert!(!app.host.session().unwrap().is_animating());
        assert_eq!(app.host.session().unwrap().deck().remaining(), 8);
    }

    #[test]
    fn test_mouse_press_starts_at_cursor() {
        let mut app = app();
        let _ = app.update(Message::PointerMoved(Point::new(100.0, 50.0)));
        let _ = app.update(Message::PointerPressed(None));
        let _ = app.update(Message::CardPressed);
        let _ = app.update(Message::PointerMoved(Point::new(160.0, 50.0)));

        assert_eq!(top_tracker(&app), (GesturePhase::Dragging, 60.0));
    }

    #[test]
    fn test_press_off_card_is_forgotten() {
        let mut app = app();
        let _ = app.update(Message::PointerPressed(Some(Point::new(10.0, 10.0))));
        let _ = app.update(Message::PointerReleased);
        let _ = app.update(Message::CardPressed);

        assert!(!app.host.session().unwrap().is_gesture_active());
    }

    #[test]
    fn test_window_resize_narrows_cards() {
        let mut app = app();
        let _ = app.update(Message::WindowResized(300.0));
        assert_eq!(app.host.session().unwrap().card_width(), 252.0);
    }

    #[test]
    fn test_invalid_deck_settings_fall_back() {
        let mut app = app();
        let mut settings = AppSettings::default();
        settings.theme_mode = ThemeMode::Dark;
        settings.deck.settle_delay_ms = 0;
        settings.deck.stack.max_visible = 0;

        app.apply_settings(settings);

        assert_eq!(app.theme_mode, ThemeMode::Dark);
        assert_eq!(app.settings.deck, mailswipe_core::DeckConfig::default());
        assert_eq!(app.host.config().settle_delay_ms, 300);
    }
}
