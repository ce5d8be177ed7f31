//! A mounted deck: pointer routing, animation ticks and dismissal hand-off.

use std::time::Instant;

use tracing::debug;

use super::state::Deck;
use crate::card::{CardId, CardRecord};
use crate::config::DeckConfig;
use crate::gesture::{
    GestureOutcome, GesturePhase, GestureRegistry, GestureTracker, Point, SwipeDirection,
};

/// What happened during one [`DeckSession::tick`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Cards whose exit animation finished and were marked dismissed.
    pub dismissed: Vec<(CardId, SwipeDirection)>,
    /// Cards that sprang back to rest.
    pub returned: Vec<CardId>,
    /// Cards physically removed from the working set.
    pub removed: Vec<CardId>,
}

impl TickReport {
    /// Whether the tick changed anything the view cares about.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dismissed.is_empty() && self.returned.is_empty() && self.removed.is_empty()
    }
}

/// Deck state plus the gesture trackers of its cards.
#[derive(Debug, Clone)]
pub struct DeckSession {
    deck: Deck,
    registry: GestureRegistry,
    config: DeckConfig,
    /// Card the current pointer sequence started on.
    active: Option<CardId>,
}

impl DeckSession {
    /// Mounts a deck over `records`.
    #[must_use]
    pub fn new(records: impl IntoIterator<Item = CardRecord>, config: DeckConfig) -> Self {
        Self {
            deck: Deck::new(records, config.settle_delay()),
            registry: GestureRegistry::new(config.gesture),
            config,
            active: None,
        }
    }

    /// Pointer went down on the top card. Returns whether a gesture started.
    pub fn pointer_down(&mut self, position: Point, now: Instant) -> bool {
        let Some(id) = self.deck.top().map(|c| c.id.clone()) else {
            return false;
        };
        let accepted = self.registry.tracker(&id).press(position, now);
        if accepted {
            self.active = Some(id);
        }
        accepted
    }

    /// Pointer moved. Ignored unless a gesture is in progress.
    pub fn pointer_move(&mut self, position: Point, now: Instant) {
        if let Some(tracker) = self.active_tracker() {
            tracker.move_to(position, now);
        }
    }

    /// Pointer went up. Returns the phase of the released card, if any.
    pub fn pointer_up(&mut self, _position: Point, now: Instant) -> Option<GesturePhase> {
        let phase = self.active_tracker()?.release(now);
        self.active = None;
        Some(phase)
    }

    /// Pointer sequence was lost (touch cancelled, window lost focus).
    pub fn pointer_cancel(&mut self, _position: Point, now: Instant) -> Option<GesturePhase> {
        let phase = self.active_tracker()?.cancel(now);
        self.active = None;
        Some(phase)
    }

    /// Sends the top card off-screen without a drag.
    pub fn fling(&mut self, direction: SwipeDirection, now: Instant) -> bool {
        let Some(id) = self.deck.top().map(|c| c.id.clone()) else {
            return false;
        };
        self.active = None;
        self.registry.tracker(&id).fling(direction, now)
    }

    /// Advances animations, hands finished exits to the deck and settles
    /// due removals.
    pub fn tick(&mut self, now: Instant) -> TickReport {
        let mut report = TickReport::default();

        for (id, tracker) in self.registry.iter_mut() {
            match tracker.advance(now) {
                Some(GestureOutcome::Dismissed { direction }) => {
                    report.dismissed.push((id.clone(), direction));
                }
                Some(GestureOutcome::Returned) => report.returned.push(id.clone()),
                None => {}
            }
        }

        report
            .dismissed
            .retain(|(id, _)| self.deck.dismiss(id, now));
        if self
            .active
            .as_ref()
            .is_some_and(|id| self.deck.is_dismissed(id))
        {
            self.active = None;
        }

        report.removed = self.deck.settle(now);
        if !report.removed.is_empty() {
            debug!(count = report.removed.len(), "Settled dismissed cards");
        }

        self.registry.retain(self.deck.visible_set().map(|c| &c.id));
        report
    }

    /// Whether frame ticks are still needed.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.registry.is_animating() || self.deck.has_pending()
    }

    /// Reports the laid-out card width.
    pub fn set_card_width(&mut self, width: f32) {
        self.registry.set_card_width(width);
    }

    /// Width the cards are laid out and measured at.
    #[must_use]
    pub const fn card_width(&self) -> f32 {
        self.registry.card_width()
    }

    /// Stops every tracker and removes pending cards at once.
    pub fn unmount(&mut self) -> Vec<CardId> {
        self.active = None;
        self.registry.stop_all();
        self.deck.flush_pending()
    }

    /// Replaces the configuration. Dismissal progress is kept, and cards
    /// already in motion finish with the thresholds they started with.
    pub fn reconfigure(&mut self, config: DeckConfig) {
        self.registry.set_config(config.gesture);
        self.deck.set_settle_delay(config.settle_delay());
        self.config = config;
    }

    /// Tracker of `id`, if that card has one.
    #[must_use]
    pub fn tracker(&self, id: &CardId) -> Option<&GestureTracker> {
        self.registry.get(id)
    }

    /// Whether a pointer gesture is in progress.
    #[must_use]
    pub const fn is_gesture_active(&self) -> bool {
        self.active.is_some()
    }

    /// The underlying deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Configuration this session runs with.
    #[must_use]
    pub const fn config(&self) -> &DeckConfig {
        &self.config
    }

    fn active_tracker(&mut self) -> Option<&mut GestureTracker> {
        let id = self.active.as_ref()?;
        self.registry.get_mut(id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::card::sample_cards;
    use crate::config::CommitDistance;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn session() -> DeckSession {
        let mut config = DeckConfig::default();
        config.gesture.commit_distance = CommitDistance::Fixed(100.0);
        config.gesture.commit_velocity = None;
        DeckSession::new(sample_cards(), config)
    }

    fn top_id(s: &DeckSession) -> String {
        s.deck().top().unwrap().id.as_str().to_string()
    }

    /// Ticks at 16 ms until nothing animates, returning the final time.
    fn run_to_rest(s: &mut DeckSession, mut now: Instant) -> (Instant, Vec<TickReport>) {
        let mut reports = Vec::new();
        while s.is_animating() {
            now += ms(16);
            reports.push(s.tick(now));
        }
        (now, reports)
    }

    #[test]
    fn test_swipe_marks_then_removes_top_card() {
        let now = Instant::now();
        let mut s = session();

        assert!(s.pointer_down(Point::new(0.0, 0.0), now));
        s.pointer_move(Point::new(150.0, 0.0), now + ms(300));
        assert_eq!(
            s.pointer_up(Point::new(150.0, 0.0), now + ms(300)),
            Some(GesturePhase::Committing(SwipeDirection::Right))
        );

        // Exit animation runs, card still on top.
        s.tick(now + ms(400));
        assert_eq!(top_id(&s), "1");

        let report = s.tick(now + ms(500));
        assert_eq!(
            report.dismissed,
            vec![(CardId::new("1"), SwipeDirection::Right)]
        );
        assert!(report.removed.is_empty());
        assert_eq!(top_id(&s), "2");
        assert_eq!(s.deck().working_len(), 8);

        let report = s.tick(now + ms(800));
        assert_eq!(report.removed, vec![CardId::new("1")]);
        assert_eq!(s.deck().working_len(), 7);
        assert!(!s.is_animating());
    }

    #[test]
    fn test_next_card_draggable_while_removal_pending() {
        let now = Instant::now();
        let mut s = session();
        s.fling(SwipeDirection::Left, now);
        s.tick(now + ms(200));
        assert!(s.deck().has_pending());

        assert!(s.pointer_down(Point::new(0.0, 0.0), now + ms(210)));
        s.pointer_move(Point::new(-40.0, 0.0), now + ms(220));
        assert_eq!(s.tracker(&CardId::new("2")).unwrap().offset(), -40.0);
    }

    #[test]
    fn test_release_below_threshold_keeps_card() {
        let now = Instant::now();
        let mut s = session();
        s.pointer_down(Point::new(0.0, 0.0), now);
        s.pointer_move(Point::new(60.0, 0.0), now + ms(300));
        assert_eq!(
            s.pointer_up(Point::new(60.0, 0.0), now + ms(300)),
            Some(GesturePhase::Returning)
        );

        let (_, reports) = run_to_rest(&mut s, now + ms(300));
        assert!(reports.iter().any(|r| r.returned == vec![CardId::new("1")]));
        assert_eq!(s.deck().remaining(), 8);
        assert_eq!(top_id(&s), "1");
    }

    #[test]
    fn test_moves_without_press_are_ignored() {
        let now = Instant::now();
        let mut s = session();
        s.pointer_move(Point::new(300.0, 0.0), now);
        assert_eq!(s.pointer_up(Point::default(), now), None);
        assert!(!s.is_animating());
    }

    #[test]
    fn test_cancel_routes_to_active_card() {
        let now = Instant::now();
        let mut s = session();
        s.pointer_down(Point::new(0.0, 0.0), now);
        s.pointer_move(Point::new(-140.0, 0.0), now + ms(300));
        assert_eq!(
            s.pointer_cancel(Point::default(), now + ms(301)),
            Some(GesturePhase::Committing(SwipeDirection::Left))
        );
        assert!(!s.is_gesture_active());
    }

    #[test]
    fn test_unmount_flushes_and_silences() {
        let now = Instant::now();
        let mut s = session();
        s.fling(SwipeDirection::Right, now);
        s.tick(now + ms(200));
        s.fling(SwipeDirection::Right, now + ms(200));

        let flushed = s.unmount();
        assert_eq!(flushed, vec![CardId::new("1")]);
        assert!(!s.is_animating());
        // The second card's exit was cut short, so it stays.
        assert_eq!(top_id(&s), "2");
        assert!(s.tick(now + ms(1000)).is_empty());
    }

    #[test]
    fn test_empty_deck_ignores_input() {
        let now = Instant::now();
        let mut s = DeckSession::new(Vec::new(), DeckConfig::default());
        assert!(!s.pointer_down(Point::default(), now));
        assert!(!s.fling(SwipeDirection::Left, now));
        assert!(s.deck().is_empty());
    }

    #[test]
    fn test_reconfigure_applies_new_settle_delay() {
        let now = Instant::now();
        let mut s = session();
        let mut config = *s.config();
        config.settle_delay_ms = 0;
        s.reconfigure(config);

        s.fling(SwipeDirection::Left, now);
        let report = s.tick(now + ms(500));
        assert_eq!(report.removed, vec![CardId::new("1")]);
    }

    #[test]
    fn test_reconfigure_lets_exit_finish() {
        let now = Instant::now();
        let mut s = session();
        s.fling(SwipeDirection::Left, now);

        let mut config = *s.config();
        config.gesture.commit_distance = CommitDistance::Fixed(40.0);
        s.reconfigure(config);
        assert!(s.is_animating());

        let report = s.tick(now + ms(200));
        assert_eq!(
            report.dismissed,
            vec![(CardId::new("1"), SwipeDirection::Left)]
        );
        assert_eq!(top_id(&s), "2");
    }

    #[test]
    fn test_reconfigure_keeps_drag_in_progress() {
        let now = Instant::now();
        let mut s = session();
        s.pointer_down(Point::new(0.0, 0.0), now);
        s.pointer_move(Point::new(30.0, 0.0), now + ms(100));

        s.reconfigure(*s.config());
        assert!(s.is_gesture_active());

        s.pointer_move(Point::new(70.0, 0.0), now + ms(200));
        assert_eq!(s.tracker(&CardId::new("1")).unwrap().offset(), 70.0);
    }

    #[test]
    fn test_card_width_reported_by_view() {
        let mut s = session();
        assert_eq!(s.card_width(), 360.0);
        s.set_card_width(240.0);
        assert_eq!(s.card_width(), 240.0);
        s.set_card_width(0.0);
        assert_eq!(s.card_width(), 240.0);
    }
}
