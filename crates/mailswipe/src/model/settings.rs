//! Settings model.

use mailswipe_core::DeckConfig;

use crate::style::widgets::palette::ThemeMode;

/// Application settings that persist across sessions.
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AppSettings {
    /// Current theme mode (serialized as string).
    #[serde(default, with = "theme_mode_serde")]
    pub theme_mode: ThemeMode,
    /// Gesture thresholds, timings, stack layout and toggle policy.
    #[serde(default)]
    pub deck: DeckConfig,
}

/// Serde helpers for `ThemeMode` (since it doesn't derive `Serialize`/`Deserialize`).
mod theme_mode_serde {
    use super::ThemeMode;
    use serde::{Deserialize, Deserializer, Serializer};

    #[allow(clippy::trivially_copy_pass_by_ref)] // Required by serde with= signature
    pub fn serialize<S>(mode: &ThemeMode, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let s = match mode {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        };
        serializer.serialize_str(s)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<ThemeMode, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "dark" => Ok(ThemeMode::Dark),
            _ => Ok(ThemeMode::Light),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use mailswipe_core::{CommitDistance, TogglePolicy};

    use super::*;

    #[test]
    fn test_empty_object_is_default() {
        let settings: AppSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, AppSettings::default());
    }

    #[test]
    fn test_partial_deck_section() {
        let json = r#"{
            "theme_mode": "dark",
            "deck": {
                "toggle_policy": "reset",
                "gesture": { "commit_distance": { "fixed": 120.0 } }
            }
        }"#;
        let settings: AppSettings = serde_json::from_str(json).unwrap();

        assert_eq!(settings.theme_mode, ThemeMode::Dark);
        assert_eq!(settings.deck.toggle_policy, TogglePolicy::Reset);
        assert_eq!(
            settings.deck.gesture.commit_distance,
            CommitDistance::Fixed(120.0)
        );
        assert_eq!(settings.deck.settle_delay_ms, 300);
    }

    #[test]
    fn test_unknown_theme_falls_back_to_light() {
        let settings: AppSettings = serde_json::from_str(r#"{"theme_mode":"sepia"}"#).unwrap();
        assert_eq!(settings.theme_mode, ThemeMode::Light);
    }

    #[test]
    fn test_round_trip_keeps_changes() {
        let mut settings = AppSettings::default();
        settings.theme_mode = ThemeMode::Dark;
        settings.deck.gesture.commit_velocity = None;

        let json = serde_json::to_string_pretty(&settings).unwrap();
        let back: AppSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }
}
