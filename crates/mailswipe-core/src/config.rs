//! Deck configuration: gesture thresholds, animation timings and stack look.
//!
//! Every field is `#[serde(default)]`, so a settings file only needs to name
//! the values it changes.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// How far a card must travel before a release commits it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommitDistance {
    /// Fraction of the card's laid-out width.
    Fraction(f32),
    /// Fixed distance in logical pixels.
    Fixed(f32),
}

impl CommitDistance {
    /// Resolves the threshold in pixels for a card of the given width.
    #[must_use]
    pub fn resolve(self, card_width: f32) -> f32 {
        match self {
            Self::Fraction(f) => card_width * f,
            Self::Fixed(px) => px,
        }
    }
}

impl Default for CommitDistance {
    fn default() -> Self {
        Self::Fraction(0.25)
    }
}

/// What re-entering deck mode does after a trip through list mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TogglePolicy {
    /// Keep dismissal progress.
    #[default]
    Preserve,
    /// Start over with the full collection.
    Reset,
}

/// Gesture tracker tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Horizontal movement needed before a press becomes a drag.
    pub debounce_px: f32,
    /// Distance threshold for committing on release.
    pub commit_distance: CommitDistance,
    /// Velocity threshold in px/ms. `None` disables velocity commits.
    pub commit_velocity: Option<f32>,
    /// How much recent pointer history feeds the velocity estimate.
    pub velocity_window_ms: u64,
    /// Tilt at full deflection, in degrees.
    pub max_rotation_deg: f32,
    /// Offset at which the tilt reaches `max_rotation_deg`.
    pub rotation_span_px: f32,
    /// Offset where the dragged card starts to fade.
    pub fade_start_px: f32,
    /// Offset where the dragged card is fully transparent.
    pub fade_end_px: f32,
    /// Exit target as a multiple of the card width.
    pub exit_distance_factor: f32,
    /// Duration of the exit animation.
    pub exit_duration_ms: u64,
    /// Spring stiffness for the return animation (1/s²).
    pub spring_stiffness: f32,
    /// Spring damping for the return animation (1/s).
    pub spring_damping: f32,
    /// Card width used until the renderer reports a real one.
    pub default_card_width: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            debounce_px: 10.0,
            commit_distance: CommitDistance::default(),
            commit_velocity: Some(0.8),
            velocity_window_ms: 100,
            max_rotation_deg: 15.0,
            rotation_span_px: 200.0,
            fade_start_px: 100.0,
            fade_end_px: 200.0,
            exit_distance_factor: 1.2,
            exit_duration_ms: 180,
            spring_stiffness: 300.0,
            spring_damping: 30.0,
            default_card_width: 360.0,
        }
    }
}

impl GestureConfig {
    /// Exit animation duration.
    #[must_use]
    pub const fn exit_duration(&self) -> Duration {
        Duration::from_millis(self.exit_duration_ms)
    }

    /// Velocity sampling window.
    #[must_use]
    pub const fn velocity_window(&self) -> Duration {
        Duration::from_millis(self.velocity_window_ms)
    }
}

/// Visual constants for the stacked cards behind the top one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StackConfig {
    /// Maximum number of cards rendered at once.
    pub max_visible: usize,
    /// Vertical offset added per depth level.
    pub offset_step: f32,
    /// Scale reduction per depth level.
    pub scale_step: f32,
    /// Fixed fan rotation per depth level, in degrees.
    pub fan_step_deg: f32,
    /// Opacity of the cards peeking out behind the top one.
    pub peek_opacity: f32,
    /// Stacking order of the top card. Deeper cards count down from here.
    pub base_order: i32,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            max_visible: 3,
            offset_step: 8.0,
            scale_step: 0.02,
            fan_step_deg: 1.5,
            peek_opacity: 0.95,
            base_order: 10,
        }
    }
}

/// Complete deck configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckConfig {
    /// Gesture tracker tuning.
    pub gesture: GestureConfig,
    /// Stacked-card look.
    pub stack: StackConfig,
    /// Delay between marking a card dismissed and removing it.
    pub settle_delay_ms: u64,
    /// Deck behaviour when toggling back from list mode.
    pub toggle_policy: TogglePolicy,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            gesture: GestureConfig::default(),
            stack: StackConfig::default(),
            settle_delay_ms: 300,
            toggle_policy: TogglePolicy::default(),
        }
    }
}

impl DeckConfig {
    /// Settle delay as a `Duration`.
    #[must_use]
    pub const fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    /// Checks every field, collecting all problems.
    ///
    /// # Errors
    ///
    /// Returns a vector of `ConfigError` if any field is out of range.
    pub fn validate(&self) -> std::result::Result<(), Vec<ConfigError>> {
        let mut errors = Vec::new();
        let g = &self.gesture;
        let s = &self.stack;

        if !(g.debounce_px.is_finite() && g.debounce_px >= 0.0) {
            errors.push(ConfigError::InvalidDebounce);
        }
        match g.commit_distance {
            CommitDistance::Fraction(f) if !(f > 0.0 && f <= 1.0) => {
                errors.push(ConfigError::InvalidCommitDistance);
            }
            CommitDistance::Fixed(px) if !(px.is_finite() && px > 0.0) => {
                errors.push(ConfigError::InvalidCommitDistance);
            }
            _ => {}
        }
        if let Some(v) = g.commit_velocity
            && !(v.is_finite() && v > 0.0)
        {
            errors.push(ConfigError::InvalidCommitVelocity);
        }
        if g.velocity_window_ms == 0 {
            errors.push(ConfigError::InvalidVelocityWindow);
        }
        if !(0.0..=90.0).contains(&g.max_rotation_deg) || g.rotation_span_px <= 0.0 {
            errors.push(ConfigError::InvalidRotation);
        }
        if !(g.fade_start_px >= 0.0 && g.fade_end_px > g.fade_start_px) {
            errors.push(ConfigError::InvalidFade);
        }
        if !(g.exit_distance_factor >= 1.0) || g.exit_duration_ms == 0 {
            errors.push(ConfigError::InvalidExit);
        }
        if !(g.spring_stiffness > 0.0 && g.spring_damping >= 0.0) {
            errors.push(ConfigError::InvalidSpring);
        }
        if !(g.default_card_width.is_finite() && g.default_card_width > 0.0) {
            errors.push(ConfigError::InvalidCardWidth);
        }

        if s.max_visible == 0 {
            errors.push(ConfigError::InvalidMaxVisible);
        }
        #[allow(clippy::cast_precision_loss)] // max_visible is tiny
        let deepest = s.max_visible.saturating_sub(1) as f32;
        if !(s.scale_step >= 0.0 && s.scale_step * deepest < 1.0) {
            errors.push(ConfigError::InvalidScaleStep);
        }
        if !(0.0..=1.0).contains(&s.peek_opacity) {
            errors.push(ConfigError::InvalidPeekOpacity);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Returns `self` if valid.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` listing every invalid field.
    pub fn validated(self) -> Result<Self> {
        self.validate().map_err(Error::InvalidConfig)?;
        Ok(self)
    }
}

/// Validation error for deck configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Debounce distance is negative or not finite.
    InvalidDebounce,
    /// Commit distance is out of range.
    InvalidCommitDistance,
    /// Commit velocity is not positive.
    InvalidCommitVelocity,
    /// Velocity window is zero.
    InvalidVelocityWindow,
    /// Rotation limits are out of range.
    InvalidRotation,
    /// Fade range is empty or negative.
    InvalidFade,
    /// Exit animation parameters are out of range.
    InvalidExit,
    /// Spring parameters are out of range.
    InvalidSpring,
    /// Default card width is not positive.
    InvalidCardWidth,
    /// No cards would be rendered.
    InvalidMaxVisible,
    /// Scale step would shrink deep cards to nothing.
    InvalidScaleStep,
    /// Peek opacity is outside `0.0..=1.0`.
    InvalidPeekOpacity,
}

impl ConfigError {
    /// Get human-readable error message.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::InvalidDebounce => "debounce distance must be a non-negative number",
            Self::InvalidCommitDistance => {
                "commit distance must be a fraction in (0, 1] or a positive pixel value"
            }
            Self::InvalidCommitVelocity => "commit velocity must be positive",
            Self::InvalidVelocityWindow => "velocity window must be at least 1 ms",
            Self::InvalidRotation => "rotation must be 0-90 degrees over a positive span",
            Self::InvalidFade => "fade end must be greater than fade start",
            Self::InvalidExit => "exit distance factor must be >= 1 and duration non-zero",
            Self::InvalidSpring => "spring stiffness must be positive and damping non-negative",
            Self::InvalidCardWidth => "card width must be positive",
            Self::InvalidMaxVisible => "at least one card must be visible",
            Self::InvalidScaleStep => "scale step must keep every visible card above zero",
            Self::InvalidPeekOpacity => "peek opacity must be between 0 and 1",
        }
    }

    /// Get the field name this error relates to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::InvalidDebounce => "gesture.debounce_px",
            Self::InvalidCommitDistance => "gesture.commit_distance",
            Self::InvalidCommitVelocity => "gesture.commit_velocity",
            Self::InvalidVelocityWindow => "gesture.velocity_window_ms",
            Self::InvalidRotation => "gesture.max_rotation_deg",
            Self::InvalidFade => "gesture.fade_end_px",
            Self::InvalidExit => "gesture.exit_duration_ms",
            Self::InvalidSpring => "gesture.spring_stiffness",
            Self::InvalidCardWidth => "gesture.default_card_width",
            Self::InvalidMaxVisible => "stack.max_visible",
            Self::InvalidScaleStep => "stack.scale_step",
            Self::InvalidPeekOpacity => "stack.peek_opacity",
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(DeckConfig::default().validate().is_ok());
    }

    #[test]
    fn test_commit_distance_resolve() {
        assert_eq!(CommitDistance::Fraction(0.25).resolve(400.0), 100.0);
        assert_eq!(CommitDistance::Fixed(100.0).resolve(1000.0), 100.0);
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let mut config = DeckConfig::default();
        config.gesture.commit_distance = CommitDistance::Fraction(1.5);
        config.gesture.fade_end_px = 10.0;
        config.stack.max_visible = 0;

        let errors = config.validate().unwrap_err();
        assert_eq!(
            errors,
            vec![
                ConfigError::InvalidCommitDistance,
                ConfigError::InvalidFade,
                ConfigError::InvalidMaxVisible,
            ]
        );
    }

    #[test]
    fn test_validated_maps_to_error() {
        let mut config = DeckConfig::default();
        config.gesture.commit_velocity = Some(-1.0);

        let err = config.validated().unwrap_err();
        assert!(err.to_string().contains("gesture.commit_velocity"));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let json = r#"{
            "gesture": { "commit_distance": { "fixed": 100.0 }, "commit_velocity": null },
            "toggle_policy": "reset"
        }"#;

        let config: DeckConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.gesture.commit_distance, CommitDistance::Fixed(100.0));
        assert_eq!(config.gesture.commit_velocity, None);
        assert_eq!(config.gesture.debounce_px, 10.0);
        assert_eq!(config.toggle_policy, TogglePolicy::Reset);
        assert_eq!(config.settle_delay(), Duration::from_millis(300));
        assert_eq!(config.stack, StackConfig::default());
    }
}
