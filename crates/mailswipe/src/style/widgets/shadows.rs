//! Shadow presets and rounded corner radii.

use iced::{Shadow, Vector};

use super::palette;

/// Rounded corner radii.
pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SMALL: f32 = 4.0;
    pub const MEDIUM: f32 = 8.0;
    pub const CARD: f32 = 20.0; // Deck cards
    pub const PILL: f32 = 9999.0;
}

pub fn none() -> Shadow {
    Shadow::default()
}

/// Soft shadow under list rows.
pub fn subtle() -> Shadow {
    depth(0.06)
}

/// Card shadow whose darkness follows the card's depth in the stack.
pub fn depth(intensity: f32) -> Shadow {
    let p = palette::current();
    Shadow {
        color: palette::faded(p.shadow, intensity * 0.5),
        offset: Vector::new(0.0, 8.0 * (intensity + 0.5)),
        blur_radius: 24.0 * (intensity + 0.3),
    }
}
