//! Gesture trackers keyed by card id.

use std::collections::HashMap;

use super::tracker::{GesturePhase, GestureTracker};
use crate::card::CardId;
use crate::config::GestureConfig;

/// Owns one [`GestureTracker`] per card, so no two cards ever share gesture
/// state.
#[derive(Debug, Clone)]
pub struct GestureRegistry {
    config: GestureConfig,
    card_width: f32,
    trackers: HashMap<CardId, GestureTracker>,
}

impl GestureRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self {
            card_width: config.default_card_width,
            config,
            trackers: HashMap::new(),
        }
    }

    /// Returns the tracker for `id`, creating an idle one if needed.
    pub fn tracker(&mut self, id: &CardId) -> &mut GestureTracker {
        let config = self.config;
        let width = self.card_width;
        self.trackers.entry(id.clone()).or_insert_with(|| {
            let mut tracker = GestureTracker::new(config);
            tracker.set_card_width(width);
            tracker
        })
    }

    /// Returns the tracker for `id` if one exists.
    #[must_use]
    pub fn get(&self, id: &CardId) -> Option<&GestureTracker> {
        self.trackers.get(id)
    }

    /// Mutable access to the tracker for `id` without creating one.
    pub fn get_mut(&mut self, id: &CardId) -> Option<&mut GestureTracker> {
        self.trackers.get_mut(id)
    }

    /// Uses `config` for trackers created from now on. Idle trackers are
    /// dropped so the next press picks it up; moving ones finish as they are.
    pub fn set_config(&mut self, config: GestureConfig) {
        self.config = config;
        self.trackers
            .retain(|_, tracker| tracker.phase() != GesturePhase::Idle);
    }

    /// Width new trackers are created with.
    #[must_use]
    pub const fn card_width(&self) -> f32 {
        self.card_width
    }

    /// Applies a new card width to every current and future tracker.
    pub fn set_card_width(&mut self, width: f32) {
        if !(width.is_finite() && width > 0.0) {
            return;
        }
        self.card_width = width;
        for tracker in self.trackers.values_mut() {
            tracker.set_card_width(width);
        }
    }

    /// Drops trackers whose card is not in `keep`.
    pub fn retain<'a>(&mut self, keep: impl IntoIterator<Item = &'a CardId>) {
        let keep: std::collections::HashSet<&CardId> = keep.into_iter().collect();
        self.trackers.retain(|id, _| keep.contains(id));
    }

    /// Iterates over all trackers.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&CardId, &mut GestureTracker)> {
        self.trackers.iter_mut()
    }

    /// Whether any tracker is mid-animation.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.trackers.values().any(GestureTracker::is_animating)
    }

    /// Disables and drops every tracker (the deck is going away).
    pub fn stop_all(&mut self) {
        for tracker in self.trackers.values_mut() {
            tracker.disable();
        }
        self.trackers.clear();
    }

    /// Number of live trackers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.trackers.len()
    }

    /// Whether there are no live trackers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trackers.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use std::time::Instant;

    use super::*;
    use crate::config::CommitDistance;
    use crate::gesture::{Point, SwipeDirection};

    #[test]
    fn test_trackers_are_independent() {
        let now = Instant::now();
        let mut registry = GestureRegistry::new(GestureConfig::default());
        let a = CardId::new("a");
        let b = CardId::new("b");

        registry.tracker(&a).press(Point::new(0.0, 0.0), now);
        registry.tracker(&a).move_to(Point::new(50.0, 0.0), now);

        assert_eq!(registry.tracker(&a).offset(), 50.0);
        assert_eq!(registry.tracker(&b).offset(), 0.0);
        assert_eq!(registry.tracker(&b).phase(), GesturePhase::Idle);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_card_width_reaches_new_trackers() {
        let mut registry = GestureRegistry::new(GestureConfig::default());
        registry.set_card_width(200.0);
        assert_eq!(registry.tracker(&CardId::new("x")).commit_threshold(), 50.0);
    }

    #[test]
    fn test_retain_and_stop_all() {
        let now = Instant::now();
        let mut registry = GestureRegistry::new(GestureConfig::default());
        let keep = CardId::new("keep");
        registry.tracker(&keep).fling(SwipeDirection::Right, now);
        registry.tracker(&CardId::new("drop"));

        registry.retain([&keep]);
        assert_eq!(registry.len(), 1);
        assert!(registry.get(&keep).is_some());
        assert!(registry.is_animating());

        registry.stop_all();
        assert!(registry.is_empty());
        assert!(!registry.is_animating());
    }

    #[test]
    fn test_set_config_keeps_moving_trackers() {
        let now = Instant::now();
        let mut registry = GestureRegistry::new(GestureConfig::default());
        let moving = CardId::new("moving");
        let idle = CardId::new("idle");
        registry.tracker(&moving).fling(SwipeDirection::Left, now);
        registry.tracker(&idle);

        let mut config = GestureConfig::default();
        config.commit_distance = CommitDistance::Fixed(40.0);
        registry.set_config(config);

        assert!(registry.get(&idle).is_none());
        assert_eq!(
            registry.get(&moving).unwrap().phase(),
            GesturePhase::Committing(SwipeDirection::Left)
        );
        assert_eq!(registry.tracker(&idle).commit_threshold(), 40.0);
    }
}
