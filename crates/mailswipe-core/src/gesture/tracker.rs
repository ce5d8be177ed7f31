//! Per-card swipe gesture state machine.
//!
//! ```text
//!            press             |dx| > debounce
//!   Idle ───────────► Pressed ─────────────────► Dragging
//!    ▲                   │ release (tap)             │ release / cancel
//!    │                   ▼                           ▼
//!    └──── settled ── Returning ◄── below threshold ─┤
//!                                                    │ past threshold
//!                                                    ▼
//!                       Dismissed ◄── finished ── Committing(dir)
//! ```
//!
//! Time is always passed in by the caller, so the machine is deterministic.

use std::collections::VecDeque;
use std::time::Instant;

use tracing::debug;

use super::motion::{Spring, Tween};
use crate::config::GestureConfig;

/// A pointer position in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate.
    pub y: f32,
}

impl Point {
    /// Creates a point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Direction a committed card leaves the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    /// Towards negative x.
    Left,
    /// Towards positive x.
    Right,
}

impl SwipeDirection {
    /// `-1.0` for left, `1.0` for right.
    #[must_use]
    pub const fn sign(self) -> f32 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }

    /// Direction of a signed value; `None` for zero or NaN.
    #[must_use]
    pub fn of(value: f32) -> Option<Self> {
        if value > 0.0 {
            Some(Self::Right)
        } else if value < 0.0 {
            Some(Self::Left)
        } else {
            None
        }
    }
}

/// Externally visible phase of a tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    /// At rest, waiting for a press.
    Idle,
    /// Pointer is down but has not moved past the debounce distance.
    Pressed,
    /// Card follows the pointer horizontally.
    Dragging,
    /// Springing back to the neutral position.
    Returning,
    /// Animating off-screen in the given direction.
    Committing(SwipeDirection),
    /// Exit finished (or tracker disabled). Ignores all further input.
    Dismissed,
}

/// Something the owner of a tracker must react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    /// The exit animation finished. Emitted at most once per tracker.
    Dismissed {
        /// Direction the card left in.
        direction: SwipeDirection,
    },
    /// The card finished springing back and is idle again.
    Returned,
}

/// Decides whether a release commits.
///
/// Commits when `|offset|` exceeds `distance_threshold`, or when a velocity
/// threshold is configured and `|velocity|` exceeds it. The direction follows
/// the offset when the distance test passes, otherwise the velocity.
#[must_use]
pub fn decide_release(
    offset: f32,
    velocity: f32,
    distance_threshold: f32,
    velocity_threshold: Option<f32>,
) -> Option<SwipeDirection> {
    if offset.abs() > distance_threshold {
        return SwipeDirection::of(offset);
    }
    match velocity_threshold {
        Some(threshold) if velocity.abs() > threshold => SwipeDirection::of(velocity),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy)]
struct Sample {
    at: Instant,
    x: f32,
}

#[derive(Debug, Clone, Copy)]
enum State {
    Idle,
    Pressed { origin: Point, start_offset: f32 },
    Dragging { origin: Point, start_offset: f32 },
    Returning { spring: Spring, last_tick: Instant },
    Committing { direction: SwipeDirection, tween: Tween },
    Dismissed,
}

/// Swipe tracker for a single card.
#[derive(Debug, Clone)]
pub struct GestureTracker {
    config: GestureConfig,
    card_width: f32,
    offset: f32,
    state: State,
    samples: VecDeque<Sample>,
    disabled: bool,
    dismissal_emitted: bool,
}

impl GestureTracker {
    /// Creates an idle tracker using the configured default card width.
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self {
            card_width: config.default_card_width,
            config,
            offset: 0.0,
            state: State::Idle,
            samples: VecDeque::new(),
            disabled: false,
            dismissal_emitted: false,
        }
    }

    /// Updates the laid-out card width. Non-positive widths are ignored.
    pub fn set_card_width(&mut self, width: f32) {
        if width.is_finite() && width > 0.0 {
            self.card_width = width;
        }
    }

    /// Pointer went down on the card. Returns whether the press was accepted.
    ///
    /// A press during `Returning` grabs the card where it currently is.
    pub fn press(&mut self, position: Point, now: Instant) -> bool {
        if self.disabled {
            return false;
        }
        match self.state {
            State::Idle | State::Returning { .. } => {
                self.state = State::Pressed {
                    origin: position,
                    start_offset: self.offset,
                };
                self.samples.clear();
                self.record(now);
                true
            }
            _ => false,
        }
    }

    /// Pointer moved. Only the horizontal component matters.
    pub fn move_to(&mut self, position: Point, now: Instant) {
        if self.disabled {
            return;
        }
        match self.state {
            State::Pressed {
                origin,
                start_offset,
            } => {
                let dx = position.x - origin.x;
                if dx.abs() > self.config.debounce_px {
                    debug!(dx, "Drag started");
                    self.state = State::Dragging {
                        origin,
                        start_offset,
                    };
                    self.offset = start_offset + dx;
                    self.record(now);
                }
            }
            State::Dragging {
                origin,
                start_offset,
            } => {
                self.offset = start_offset + (position.x - origin.x);
                self.record(now);
            }
            _ => {}
        }
    }

    /// Pointer went up. Returns the phase the tracker moved to.
    pub fn release(&mut self, now: Instant) -> GesturePhase {
        if self.disabled {
            return self.phase();
        }
        match self.state {
            State::Pressed { .. } => self.settle_or_return(now),
            State::Dragging { .. } => {
                let velocity = self.velocity(now);
                let decision = decide_release(
                    self.offset,
                    velocity,
                    self.commit_threshold(),
                    self.config.commit_velocity,
                );
                match decision {
                    Some(direction) => self.commit(direction, now),
                    None => self.start_return(velocity, now),
                }
            }
            _ => {}
        }
        self.phase()
    }

    /// The gesture was taken away (system takeover, pointer lost).
    ///
    /// Evaluated like a release using only the distance test; anything short
    /// of the threshold springs back.
    pub fn cancel(&mut self, now: Instant) -> GesturePhase {
        if self.disabled {
            return self.phase();
        }
        match self.state {
            State::Pressed { .. } => self.settle_or_return(now),
            State::Dragging { .. } => {
                match decide_release(self.offset, 0.0, self.commit_threshold(), None) {
                    Some(direction) => self.commit(direction, now),
                    None => self.start_return(0.0, now),
                }
            }
            _ => {}
        }
        self.phase()
    }

    /// Commits the card in `direction` without a drag (keyboard triage).
    ///
    /// Returns whether the fling was accepted.
    pub fn fling(&mut self, direction: SwipeDirection, now: Instant) -> bool {
        if self.disabled {
            return false;
        }
        match self.state {
            State::Idle
            | State::Pressed { .. }
            | State::Dragging { .. }
            | State::Returning { .. } => {
                self.commit(direction, now);
                true
            }
            State::Committing { .. } | State::Dismissed => false,
        }
    }

    /// Advances any running animation to `now`.
    ///
    /// Returns `GestureOutcome::Dismissed` exactly once, on the tick where
    /// the exit animation completes.
    pub fn advance(&mut self, now: Instant) -> Option<GestureOutcome> {
        if self.disabled {
            return None;
        }
        match self.state {
            State::Returning {
                mut spring,
                last_tick,
            } => {
                spring.step(now.saturating_duration_since(last_tick));
                if spring.is_settled() {
                    self.offset = 0.0;
                    self.state = State::Idle;
                    Some(GestureOutcome::Returned)
                } else {
                    self.offset = spring.position();
                    self.state = State::Returning {
                        spring,
                        last_tick: now,
                    };
                    None
                }
            }
            State::Committing { direction, tween } => {
                self.offset = tween.value_at(now);
                if !tween.is_finished(now) {
                    return None;
                }
                self.offset = tween.target();
                self.state = State::Dismissed;
                if self.dismissal_emitted {
                    return None;
                }
                self.dismissal_emitted = true;
                debug!(?direction, "Exit animation finished");
                Some(GestureOutcome::Dismissed { direction })
            }
            _ => None,
        }
    }

    /// Stops any animation and makes the tracker permanently inert.
    pub fn disable(&mut self) {
        self.disabled = true;
        self.samples.clear();
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> GesturePhase {
        if self.disabled {
            return GesturePhase::Dismissed;
        }
        match self.state {
            State::Idle => GesturePhase::Idle,
            State::Pressed { .. } => GesturePhase::Pressed,
            State::Dragging { .. } => GesturePhase::Dragging,
            State::Returning { .. } => GesturePhase::Returning,
            State::Committing { direction, .. } => GesturePhase::Committing(direction),
            State::Dismissed => GesturePhase::Dismissed,
        }
    }

    /// Whether the tracker ignores all input.
    #[must_use]
    pub const fn is_inert(&self) -> bool {
        self.disabled || matches!(self.state, State::Dismissed)
    }

    /// Whether an animation needs frame ticks.
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        !self.disabled && matches!(self.state, State::Returning { .. } | State::Committing { .. })
    }

    /// Horizontal offset from the neutral position.
    #[must_use]
    pub const fn offset(&self) -> f32 {
        self.offset
    }

    /// Visual tilt in degrees, clamped to `±max_rotation_deg`.
    #[must_use]
    pub fn rotation_deg(&self) -> f32 {
        let max = self.config.max_rotation_deg;
        (self.offset / self.config.rotation_span_px * max).clamp(-max, max)
    }

    /// Visual opacity: opaque near the centre, fading out towards the edges.
    #[must_use]
    pub fn opacity(&self) -> f32 {
        let start = self.config.fade_start_px;
        let span = self.config.fade_end_px - start;
        let faded = ((self.offset.abs() - start) / span).clamp(0.0, 1.0);
        1.0 - faded
    }

    /// Commit progress in `-1.0..=1.0`: how close the current offset is to
    /// the distance threshold, signed by direction. Used for swipe hints.
    #[must_use]
    pub fn commit_progress(&self) -> f32 {
        (self.offset / self.commit_threshold()).clamp(-1.0, 1.0)
    }

    /// Distance threshold in pixels for the current card width.
    #[must_use]
    pub fn commit_threshold(&self) -> f32 {
        self.config.commit_distance.resolve(self.card_width)
    }

    /// Pointer velocity in px/ms over the configured window ending at `now`.
    #[must_use]
    pub fn velocity(&self, now: Instant) -> f32 {
        let window = self.config.velocity_window();
        let mut recent = self
            .samples
            .iter()
            .filter(|s| now.saturating_duration_since(s.at) <= window);
        let Some(first) = recent.next() else {
            return 0.0;
        };
        let last = recent.last().unwrap_or(first);
        let elapsed_ms = last.at.saturating_duration_since(first.at).as_secs_f32() * 1000.0;
        if elapsed_ms <= f32::EPSILON {
            return 0.0;
        }
        (last.x - first.x) / elapsed_ms
    }

    fn record(&mut self, now: Instant) {
        let window = self.config.velocity_window();
        while self
            .samples
            .front()
            .is_some_and(|s| now.saturating_duration_since(s.at) > window)
        {
            self.samples.pop_front();
        }
        self.samples.push_back(Sample {
            at: now,
            x: self.offset,
        });
    }

    fn settle_or_return(&mut self, now: Instant) {
        if self.offset.abs() < f32::EPSILON {
            self.offset = 0.0;
            self.state = State::Idle;
        } else {
            self.start_return(0.0, now);
        }
    }

    fn start_return(&mut self, velocity: f32, now: Instant) {
        debug!(offset = self.offset, "Below threshold, returning");
        self.state = State::Returning {
            spring: Spring::new(
                self.offset,
                velocity,
                self.config.spring_stiffness,
                self.config.spring_damping,
            ),
            last_tick: now,
        };
    }

    fn commit(&mut self, direction: SwipeDirection, now: Instant) {
        let target = direction.sign() * self.card_width * self.config.exit_distance_factor;
        debug!(?direction, offset = self.offset, "Swipe committed");
        self.samples.clear();
        self.state = State::Committing {
            direction,
            tween: Tween::new(self.offset, target, now, self.config.exit_duration()),
        };
    }
}
