//! Deck / list view switching over one card collection.

use std::sync::Arc;

use tracing::info;

use super::session::DeckSession;
use crate::card::CardRecord;
use crate::config::{DeckConfig, TogglePolicy};

/// Title shown when every card has been triaged.
pub const EMPTY_TITLE: &str = "All caught up!";

/// Body shown when every card has been triaged.
pub const EMPTY_MESSAGE: &str = "You've reviewed all your emails.";

/// Space kept free on each side of a card in a narrow window.
const CARD_GUTTER: f32 = 24.0;

/// Cards never shrink below this (or the configured width, if smaller).
const MIN_CARD_WIDTH: f32 = 200.0;

/// Which presentation is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Swipeable card stack.
    #[default]
    Deck,
    /// Flat list of every card.
    List,
}

impl ViewMode {
    /// The other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Deck => Self::List,
            Self::List => Self::Deck,
        }
    }
}

/// Header title and subtitle for the current mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderText {
    /// Main heading.
    pub title: &'static str,
    /// Count line under the heading.
    pub subtitle: String,
}

/// Owns the card collection and the deck session, and switches between the
/// two views.
#[derive(Debug, Clone)]
pub struct ViewHost {
    cards: Arc<[CardRecord]>,
    mode: ViewMode,
    config: DeckConfig,
    session: DeckSession,
    viewport_width: Option<f32>,
}

impl ViewHost {
    /// Starts in deck mode over `cards`.
    #[must_use]
    pub fn new(cards: impl Into<Arc<[CardRecord]>>, config: DeckConfig) -> Self {
        let cards = cards.into();
        let session = DeckSession::new(cards.iter().cloned(), config);
        Self {
            cards,
            mode: ViewMode::Deck,
            config,
            session,
            viewport_width: None,
        }
    }

    /// Current mode.
    #[must_use]
    pub const fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Switches to the other mode.
    pub fn toggle(&mut self) -> ViewMode {
        self.set_mode(self.mode.toggled());
        self.mode
    }

    /// Switches to `mode`. Leaving the deck unmounts its session; entering
    /// it applies the toggle policy.
    pub fn set_mode(&mut self, mode: ViewMode) {
        if mode == self.mode {
            return;
        }
        match mode {
            ViewMode::List => {
                let flushed = self.session.unmount();
                info!(flushed = flushed.len(), "Deck unmounted");
            }
            ViewMode::Deck => {
                if self.config.toggle_policy == TogglePolicy::Reset {
                    self.session = DeckSession::new(self.cards.iter().cloned(), self.config);
                    self.session.set_card_width(self.card_width());
                    info!("Deck reset to {} cards", self.cards.len());
                }
            }
        }
        self.mode = mode;
    }

    /// Replaces the deck configuration, keeping dismissal progress. Cards in
    /// motion finish under the old thresholds.
    pub fn apply_config(&mut self, config: DeckConfig) {
        self.config = config;
        self.session.reconfigure(config);
        self.session.set_card_width(self.card_width());
    }

    /// Reports the window width so cards fit narrow windows.
    pub fn set_viewport_width(&mut self, width: f32) {
        if !(width.is_finite() && width > 0.0) {
            return;
        }
        self.viewport_width = Some(width);
        self.session.set_card_width(self.card_width());
    }

    /// Card width for the current window: the configured width, narrowed to
    /// leave a gutter on both sides.
    #[must_use]
    pub fn card_width(&self) -> f32 {
        let preferred = self.config.gesture.default_card_width;
        let Some(viewport) = self.viewport_width else {
            return preferred;
        };
        let fitted = 2.0f32.mul_add(-CARD_GUTTER, viewport).min(preferred);
        fitted.max(preferred.min(MIN_CARD_WIDTH))
    }

    /// The deck session, only while the deck is mounted.
    pub fn session_mut(&mut self) -> Option<&mut DeckSession> {
        match self.mode {
            ViewMode::Deck => Some(&mut self.session),
            ViewMode::List => None,
        }
    }

    /// The deck session, only while the deck is mounted.
    #[must_use]
    pub const fn session(&self) -> Option<&DeckSession> {
        match self.mode {
            ViewMode::Deck => Some(&self.session),
            ViewMode::List => None,
        }
    }

    /// Every supplied card, for the list view.
    #[must_use]
    pub fn cards(&self) -> &[CardRecord] {
        &self.cards
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &DeckConfig {
        &self.config
    }

    /// Whether frame ticks are needed.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.session().is_some_and(DeckSession::is_animating)
    }

    /// Header text for the current mode.
    #[must_use]
    pub fn header(&self) -> HeaderText {
        let n = self.cards.len();
        match self.mode {
            ViewMode::Deck => HeaderText {
                title: "Email Cards",
                subtitle: format!("{n} cards to review"),
            },
            ViewMode::List => HeaderText {
                title: "Mailbox",
                subtitle: format!("{n} new messages"),
            },
        }
    }

    /// "{n} remaining" counter under the deck.
    #[must_use]
    pub fn remaining_label(&self) -> String {
        format!("{} remaining", self.session.deck().remaining())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use std::time::{Duration, Instant};

    use super::*;
    use crate::card::sample_cards;
    use crate::gesture::SwipeDirection;

    fn host(policy: TogglePolicy) -> ViewHost {
        let config = DeckConfig {
            toggle_policy: policy,
            ..DeckConfig::default()
        };
        ViewHost::new(sample_cards(), config)
    }

    fn swipe_top(host: &mut ViewHost, now: Instant) {
        let session = host.session_mut().unwrap();
        session.fling(SwipeDirection::Left, now);
        session.tick(now + Duration::from_millis(200));
    }

    #[test]
    fn test_header_text_per_mode() {
        let mut h = host(TogglePolicy::Preserve);
        assert_eq!(
            h.header(),
            HeaderText {
                title: "Email Cards",
                subtitle: "8 cards to review".into(),
            }
        );
        h.toggle();
        assert_eq!(h.header().title, "Mailbox");
        assert_eq!(h.header().subtitle, "8 new messages");
    }

    #[test]
    fn test_preserve_keeps_progress() {
        let now = Instant::now();
        let mut h = host(TogglePolicy::Preserve);
        swipe_top(&mut h, now);
        swipe_top(&mut h, now + Duration::from_millis(250));

        assert_eq!(h.toggle(), ViewMode::List);
        assert!(h.session_mut().is_none());
        assert_eq!(h.cards().len(), 8);

        assert_eq!(h.toggle(), ViewMode::Deck);
        let deck = h.session().unwrap().deck();
        assert_eq!(deck.remaining(), 6);
        assert!(!deck.has_pending());
        assert_eq!(h.remaining_label(), "6 remaining");
    }

    #[test]
    fn test_reset_restores_full_deck() {
        let now = Instant::now();
        let mut h = host(TogglePolicy::Reset);
        swipe_top(&mut h, now);
        assert_eq!(h.session().unwrap().deck().remaining(), 7);

        h.toggle();
        h.toggle();
        assert_eq!(h.session().unwrap().deck().remaining(), 8);
    }

    #[test]
    fn test_list_mode_never_animates() {
        let now = Instant::now();
        let mut h = host(TogglePolicy::Preserve);
        h.session_mut().unwrap().fling(SwipeDirection::Right, now);
        assert!(h.is_animating());

        h.set_mode(ViewMode::List);
        assert!(!h.is_animating());
        h.set_mode(ViewMode::List);
        assert_eq!(h.mode(), ViewMode::List);
    }

    #[test]
    fn test_narrow_window_shrinks_cards() {
        let mut h = host(TogglePolicy::Reset);
        assert_eq!(h.card_width(), 360.0);

        h.set_viewport_width(300.0);
        assert_eq!(h.card_width(), 252.0);
        assert_eq!(h.session().unwrap().card_width(), 252.0);

        h.set_viewport_width(50.0);
        assert_eq!(h.card_width(), 200.0);

        h.set_viewport_width(1600.0);
        assert_eq!(h.card_width(), 360.0);
    }

    #[test]
    fn test_card_width_survives_reset_and_reconfigure() {
        let mut h = host(TogglePolicy::Reset);
        h.set_viewport_width(300.0);

        h.toggle();
        h.toggle();
        assert_eq!(h.session().unwrap().card_width(), 252.0);

        let mut config = *h.config();
        config.gesture.default_card_width = 240.0;
        h.apply_config(config);
        assert_eq!(h.session().unwrap().card_width(), 240.0);
    }

    #[test]
    fn test_apply_config_keeps_swipe_in_flight() {
        let now = Instant::now();
        let mut h = host(TogglePolicy::Preserve);
        h.session_mut().unwrap().fling(SwipeDirection::Right, now);

        h.apply_config(*h.config());
        let session = h.session_mut().unwrap();
        assert!(session.is_animating());
        session.tick(now + Duration::from_millis(200));
        assert_eq!(session.deck().remaining(), 7);
    }
}
