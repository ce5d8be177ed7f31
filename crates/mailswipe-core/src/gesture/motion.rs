//! Animation primitives driven by explicit timestamps.

use std::time::{Duration, Instant};

/// Largest integration step for the spring. Longer frames are subdivided.
const MAX_SPRING_STEP: Duration = Duration::from_millis(4);

/// Below this distance (px) the spring is considered at rest.
const REST_DISTANCE: f32 = 0.5;

/// Below this speed (px/s) the spring is considered at rest.
const REST_SPEED: f32 = 50.0;

/// Damped spring pulling an offset back to zero (unit mass).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    position: f32,
    /// Velocity in px/s.
    velocity: f32,
    stiffness: f32,
    damping: f32,
}

impl Spring {
    /// Creates a spring at `position` moving at `velocity_px_per_ms`.
    #[must_use]
    pub fn new(position: f32, velocity_px_per_ms: f32, stiffness: f32, damping: f32) -> Self {
        Self {
            position,
            velocity: velocity_px_per_ms * 1000.0,
            stiffness,
            damping,
        }
    }

    /// Advances the simulation by `elapsed` (semi-implicit Euler).
    pub fn step(&mut self, elapsed: Duration) {
        let mut remaining = elapsed;
        while !remaining.is_zero() {
            let dt = remaining.min(MAX_SPRING_STEP);
            remaining -= dt;

            let secs = dt.as_secs_f32();
            let accel = (-self.stiffness).mul_add(self.position, -self.damping * self.velocity);
            self.velocity = accel.mul_add(secs, self.velocity);
            self.position = self.velocity.mul_add(secs, self.position);
        }
    }

    /// Current offset.
    #[must_use]
    pub const fn position(&self) -> f32 {
        self.position
    }

    /// Current velocity in px/ms.
    #[must_use]
    pub fn velocity_px_per_ms(&self) -> f32 {
        self.velocity / 1000.0
    }

    /// Whether the spring has come to rest at zero.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.position.abs() < REST_DISTANCE && self.velocity.abs() < REST_SPEED
    }
}

/// Fixed-duration ease-out interpolation between two offsets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    started: Instant,
    duration: Duration,
}

impl Tween {
    /// Creates a tween starting at `started`.
    #[must_use]
    pub const fn new(from: f32, to: f32, started: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            started,
            duration,
        }
    }

    /// Linear progress in `0.0..=1.0` at `now`.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Interpolated value at `now` (cubic ease-out).
    #[must_use]
    pub fn value_at(&self, now: Instant) -> f32 {
        let t = self.progress(now);
        let eased = 1.0 - (1.0 - t).powi(3);
        (self.to - self.from).mul_add(eased, self.from)
    }

    /// Whether the tween has reached its target at `now`.
    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.duration
    }

    /// Target value.
    #[must_use]
    pub const fn target(&self) -> f32 {
        self.to
    }
}
