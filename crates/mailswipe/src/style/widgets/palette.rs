//! Color palette with light and dark theme support.
//!
//! The light palette follows the soft white cards of a phone mail client;
//! the dark one keeps the same hierarchy on charcoal surfaces.

use iced::Color;

/// Application theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    /// Light theme (default).
    #[default]
    Light,
    /// Dark theme.
    Dark,
}

impl ThemeMode {
    /// The other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Complete color palette for the application.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    // Primary brand colors
    pub primary: Color,
    pub primary_light: Color,

    // Surface colors
    pub surface: Color,
    pub surface_sunken: Color,
    pub background: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub text_on_primary: Color,

    // Swipe direction tints
    pub swipe_left: Color,
    pub swipe_right: Color,

    // State colors
    pub hover: Color,
    pub unread: Color,
    pub badge: Color,
    pub badge_text: Color,

    // Border colors
    pub border_subtle: Color,
    pub border_medium: Color,

    // Shadow color at full intensity
    pub shadow: Color,
}

impl Palette {
    /// Creates the light theme palette.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::from_rgb(0.0, 0.48, 0.95),
            primary_light: Color::from_rgb(0.35, 0.65, 1.0),

            surface: Color::WHITE,
            surface_sunken: Color::from_rgb(0.97, 0.975, 0.99),
            background: Color::from_rgb(0.94, 0.95, 0.97),

            text_primary: Color::from_rgb(0.08, 0.10, 0.14),
            text_secondary: Color::from_rgb(0.42, 0.46, 0.54),
            text_muted: Color::from_rgb(0.60, 0.64, 0.70),
            text_on_primary: Color::WHITE,

            swipe_left: Color::from_rgb(0.98, 0.28, 0.35),
            swipe_right: Color::from_rgb(0.2, 0.75, 0.45),

            hover: Color::from_rgb(0.97, 0.98, 0.99),
            unread: Color::from_rgb(0.0, 0.55, 1.0),
            badge: Color::from_rgb(0.93, 0.95, 1.0),
            badge_text: Color::from_rgb(0.12, 0.35, 0.78),

            border_subtle: Color::from_rgb(0.92, 0.93, 0.95),
            border_medium: Color::from_rgb(0.86, 0.88, 0.91),

            shadow: Color::from_rgba(0.0, 0.0, 0.0, 1.0),
        }
    }

    /// Creates the dark theme palette.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::from_rgb(0.0, 1.0, 0.8),
            primary_light: Color::from_rgb(0.2, 1.0, 0.85),

            surface: Color::from_rgb(0.12, 0.13, 0.15),
            surface_sunken: Color::from_rgb(0.10, 0.11, 0.13),
            background: Color::from_rgb(0.08, 0.09, 0.11),

            text_primary: Color::from_rgb(0.92, 0.93, 0.95),
            text_secondary: Color::from_rgb(0.65, 0.68, 0.72),
            text_muted: Color::from_rgb(0.50, 0.53, 0.58),
            text_on_primary: Color::from_rgb(0.08, 0.09, 0.11),

            swipe_left: Color::from_rgb(1.0, 0.35, 0.4),
            swipe_right: Color::from_rgb(0.2, 0.9, 0.5),

            hover: Color::from_rgb(0.14, 0.15, 0.17),
            unread: Color::from_rgb(0.0, 1.0, 0.8),
            badge: Color::from_rgb(0.10, 0.18, 0.20),
            badge_text: Color::from_rgb(0.2, 1.0, 0.85),

            border_subtle: Color::from_rgb(0.20, 0.21, 0.24),
            border_medium: Color::from_rgb(0.28, 0.29, 0.32),

            shadow: Color::from_rgba(0.0, 0.0, 0.0, 1.0),
        }
    }

    /// Gets the palette for a given theme mode.
    #[must_use]
    pub const fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }
}

/// Current active palette - defaults to light mode.
pub static CURRENT: std::sync::LazyLock<std::sync::RwLock<Palette>> =
    std::sync::LazyLock::new(|| std::sync::RwLock::new(Palette::light()));

/// Sets the current global palette.
pub fn set_theme(mode: ThemeMode) {
    if let Ok(mut palette) = CURRENT.write() {
        *palette = Palette::for_mode(mode);
    }
}

/// Gets a copy of the current palette.
#[must_use]
pub fn current() -> Palette {
    CURRENT.read().map_or_else(|_| Palette::light(), |p| *p)
}

/// `color` with its alpha multiplied by `alpha`.
#[must_use]
pub fn faded(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha.clamp(0.0, 1.0),
        ..color
    }
}

/// Linear blend from `from` towards `to` (`t` in `0.0..=1.0`).
#[must_use]
pub fn mix(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    Color {
        r: (to.r - from.r).mul_add(t, from.r),
        g: (to.g - from.g).mul_add(t, from.g),
        b: (to.b - from.b).mul_add(t, from.b),
        a: (to.a - from.a).mul_add(t, from.a),
    }
}
