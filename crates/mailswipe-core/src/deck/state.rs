//! Deck state: the working set, the dismissed set and pending removals.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::card::{CardId, CardRecord};

/// A dismissed card waiting to be physically removed.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingRemoval {
    id: CardId,
    due: Instant,
}

/// Ordered set of cards still to be triaged.
///
/// Dismissal is two-phase: [`Deck::dismiss`] hides a card at once, and
/// [`Deck::settle`] drops it from the working set after the settle delay.
#[derive(Debug, Clone)]
pub struct Deck {
    working: Vec<CardRecord>,
    dismissed: HashSet<CardId>,
    pending: Vec<PendingRemoval>,
    settle_delay: Duration,
}

impl Deck {
    /// Builds a deck from an externally supplied collection.
    ///
    /// Records repeating an earlier id are dropped (first one wins).
    #[must_use]
    pub fn new(records: impl IntoIterator<Item = CardRecord>, settle_delay: Duration) -> Self {
        let mut seen = HashSet::new();
        let working = records
            .into_iter()
            .filter(|record| {
                let fresh = seen.insert(record.id.clone());
                if !fresh {
                    warn!("Dropping duplicate card id {}", record.id);
                }
                fresh
            })
            .collect();

        Self {
            working,
            dismissed: HashSet::new(),
            pending: Vec::new(),
            settle_delay,
        }
    }

    /// Marks `id` dismissed and schedules its removal at `now + settle_delay`.
    ///
    /// Returns `false` (and changes nothing) if `id` is unknown or already
    /// dismissed.
    pub fn dismiss(&mut self, id: &CardId, now: Instant) -> bool {
        if self.dismissed.contains(id) || !self.working.iter().any(|c| &c.id == id) {
            return false;
        }
        self.dismissed.insert(id.clone());
        self.pending.push(PendingRemoval {
            id: id.clone(),
            due: now + self.settle_delay,
        });
        debug!("Dismissed card {id}, {} remaining", self.remaining());
        true
    }

    /// Physically removes every dismissed card whose delay has elapsed.
    ///
    /// Returns the removed ids in the order they were dismissed.
    pub fn settle(&mut self, now: Instant) -> Vec<CardId> {
        let (due, waiting): (Vec<_>, Vec<_>) = std::mem::take(&mut self.pending)
            .into_iter()
            .partition(|p| p.due <= now);
        self.pending = waiting;
        due.into_iter()
            .map(|p| {
                self.remove(&p.id);
                p.id
            })
            .collect()
    }

    /// Removes every pending card immediately, so no timer is left running.
    pub fn flush_pending(&mut self) -> Vec<CardId> {
        std::mem::take(&mut self.pending)
            .into_iter()
            .map(|p| {
                self.remove(&p.id);
                p.id
            })
            .collect()
    }

    /// Changes the delay applied to future dismissals.
    pub const fn set_settle_delay(&mut self, delay: Duration) {
        self.settle_delay = delay;
    }

    fn remove(&mut self, id: &CardId) {
        self.working.retain(|c| &c.id != id);
        self.dismissed.remove(id);
    }

    /// Cards not yet dismissed, in triage order.
    pub fn visible_set(&self) -> impl Iterator<Item = &CardRecord> + '_ {
        self.working
            .iter()
            .filter(|c| !self.dismissed.contains(&c.id))
    }

    /// First visible card (the interactive one).
    #[must_use]
    pub fn top(&self) -> Option<&CardRecord> {
        self.visible_set().next()
    }

    /// Number of visible cards.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.visible_set().count()
    }

    /// Whether every card has been dismissed ("All caught up").
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.top().is_none()
    }

    /// Whether `id` is dismissed but not yet removed.
    #[must_use]
    pub fn is_dismissed(&self, id: &CardId) -> bool {
        self.dismissed.contains(id)
    }

    /// Ids dismissed but not yet removed.
    pub fn dismissed(&self) -> impl Iterator<Item = &CardId> + '_ {
        self.dismissed.iter()
    }

    /// Size of the working set, including cards still settling.
    #[must_use]
    pub fn working_len(&self) -> usize {
        self.working.len()
    }

    /// Whether any removal is still scheduled.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Earliest scheduled removal.
    #[must_use]
    pub fn next_due(&self) -> Option<Instant> {
        self.pending.iter().map(|p| p.due).min()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::card::sample_cards;

    const SETTLE: Duration = Duration::from_millis(300);

    fn ids(deck: &Deck) -> Vec<&str> {
        deck.visible_set().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_dismiss_hides_immediately_and_preserves_order() {
        let now = Instant::now();
        let mut deck = Deck::new(sample_cards(), SETTLE);

        assert!(deck.dismiss(&CardId::new("3"), now));

        assert_eq!(deck.remaining(), 7);
        assert_eq!(ids(&deck), vec!["1", "2", "4", "5", "6", "7", "8"]);
        assert!(deck.is_dismissed(&CardId::new("3")));
        assert_eq!(deck.working_len(), 8); // still settling
    }

    #[test]
    fn test_dismiss_twice_is_noop() {
        let now = Instant::now();
        let mut deck = Deck::new(sample_cards(), SETTLE);
        let id = CardId::new("5");

        assert!(deck.dismiss(&id, now));
        assert!(!deck.dismiss(&id, now + Duration::from_millis(1)));

        assert_eq!(deck.remaining(), 7);
        assert_eq!(deck.settle(now + SETTLE * 2), vec![id.clone()]);
        assert_eq!(deck.working_len(), 7);
        // Even after removal, another dismiss does nothing.
        assert!(!deck.dismiss(&id, now + SETTLE * 3));
        assert_eq!(deck.remaining(), 7);
    }

    #[test]
    fn test_dismiss_unknown_id_is_noop() {
        let mut deck = Deck::new(sample_cards(), SETTLE);
        assert!(!deck.dismiss(&CardId::new("nope"), Instant::now()));
        assert_eq!(deck.remaining(), 8);
        assert!(!deck.has_pending());
    }

    #[test]
    fn test_settle_waits_for_delay() {
        let now = Instant::now();
        let mut deck = Deck::new(sample_cards(), SETTLE);
        deck.dismiss(&CardId::new("1"), now);
        deck.dismiss(&CardId::new("2"), now + Duration::from_millis(100));

        assert_eq!(deck.next_due(), Some(now + SETTLE));
        assert!(deck.settle(now + Duration::from_millis(299)).is_empty());

        assert_eq!(deck.settle(now + SETTLE), vec![CardId::new("1")]);
        assert!(deck.has_pending());
        assert_eq!(
            deck.settle(now + Duration::from_millis(400)),
            vec![CardId::new("2")]
        );
        assert!(!deck.has_pending());
        assert_eq!(deck.working_len(), 6);
        assert_eq!(deck.dismissed().count(), 0);
    }

    #[test]
    fn test_single_card_deck_empties() {
        let card = sample_cards().remove(0);
        let id = card.id.clone();
        let mut deck = Deck::new([card], SETTLE);

        assert!(!deck.is_empty());
        deck.dismiss(&id, Instant::now());
        assert!(deck.is_empty());
        assert!(deck.top().is_none());
    }

    #[test]
    fn test_empty_collection_is_caught_up() {
        let deck = Deck::new(Vec::new(), SETTLE);
        assert!(deck.is_empty());
        assert_eq!(deck.remaining(), 0);
    }

    #[test]
    fn test_duplicate_ids_keep_first() {
        let mut cards = sample_cards();
        let mut dup = cards[0].clone();
        dup.sender = "Impostor".into();
        cards.push(dup);

        let deck = Deck::new(cards, SETTLE);
        assert_eq!(deck.remaining(), 8);
        assert_eq!(deck.top().unwrap().sender, "Apple");
    }

    #[test]
    fn test_flush_pending_removes_everything_scheduled() {
        let now = Instant::now();
        let mut deck = Deck::new(sample_cards(), SETTLE);
        deck.dismiss(&CardId::new("7"), now);
        deck.dismiss(&CardId::new("8"), now);

        let flushed = deck.flush_pending();
        assert_eq!(flushed, vec![CardId::new("7"), CardId::new("8")]);
        assert!(!deck.has_pending());
        assert_eq!(deck.working_len(), 6);
        assert_eq!(deck.remaining(), 6);
    }
}
