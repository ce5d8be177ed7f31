//! Visual layering of the top few cards.

use crate::card::CardRecord;
use crate::config::StackConfig;

/// Where a stacked card's tilt comes from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rotation {
    /// The card's gesture tracker owns the tilt (top card).
    Gesture,
    /// Fixed fan angle in degrees.
    Fixed(f32),
}

/// Presentation of one card at a given depth in the stack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthStyle {
    /// Downward shift in logical pixels.
    pub vertical_offset: f32,
    /// Uniform scale factor.
    pub scale: f32,
    /// Tilt.
    pub rotation: Rotation,
    /// Base opacity before any gesture fade.
    pub opacity: f32,
    /// Higher values draw on top.
    pub stacking_order: i32,
    /// Shadow alpha.
    pub shadow_intensity: f32,
    /// Whether the card accepts pointer input.
    pub interactive: bool,
}

/// Style for the card at `index` (0 = top), or `None` if it is not drawn.
#[must_use]
#[allow(clippy::cast_precision_loss)] // index < max_visible, a handful at most
pub fn depth_style(index: usize, config: &StackConfig) -> Option<DepthStyle> {
    if index >= config.max_visible {
        return None;
    }
    let depth = index as f32;
    let top = index == 0;

    Some(DepthStyle {
        vertical_offset: depth * config.offset_step,
        scale: depth.mul_add(-config.scale_step, 1.0),
        rotation: if top {
            Rotation::Gesture
        } else {
            Rotation::Fixed(depth * config.fan_step_deg)
        },
        opacity: if top { 1.0 } else { config.peek_opacity },
        stacking_order: config
            .base_order
            .saturating_sub(i32::try_from(index).unwrap_or(i32::MAX)),
        shadow_intensity: depth.mul_add(-0.15, 0.4).max(0.1),
        interactive: top,
    })
}

/// Pairs the first visible cards with their styles, top card first.
pub fn layout<'a>(
    cards: impl IntoIterator<Item = &'a CardRecord>,
    config: &StackConfig,
) -> Vec<(&'a CardRecord, DepthStyle)> {
    cards
        .into_iter()
        .enumerate()
        .map_while(|(index, card)| depth_style(index, config).map(|style| (card, style)))
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::card::sample_cards;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_top_card_style() {
        let style = depth_style(0, &StackConfig::default()).unwrap();
        assert_eq!(style.rotation, Rotation::Gesture);
        assert_eq!(style.vertical_offset, 0.0);
        assert_eq!(style.scale, 1.0);
        assert_eq!(style.opacity, 1.0);
        assert_eq!(style.stacking_order, 10);
        assert!(close(style.shadow_intensity, 0.4));
        assert!(style.interactive);
    }

    #[test]
    fn test_deeper_cards_fan_out() {
        let config = StackConfig::default();
        let second = depth_style(1, &config).unwrap();
        let third = depth_style(2, &config).unwrap();

        assert_eq!(second.rotation, Rotation::Fixed(1.5));
        assert_eq!(third.rotation, Rotation::Fixed(3.0));
        assert_eq!(second.vertical_offset, 8.0);
        assert_eq!(third.vertical_offset, 16.0);
        assert!(close(second.scale, 0.98));
        assert!(close(third.scale, 0.96));
        assert_eq!(second.opacity, 0.95);
        assert!(close(second.shadow_intensity, 0.25));
        assert!(close(third.shadow_intensity, 0.1));
        assert!(!second.interactive);
    }

    #[test]
    fn test_top_card_has_highest_order() {
        let config = StackConfig::default();
        let orders: Vec<i32> = (0..config.max_visible)
            .map(|i| depth_style(i, &config).unwrap().stacking_order)
            .collect();
        assert_eq!(orders, vec![10, 9, 8]);
    }

    #[test]
    fn test_beyond_max_visible_is_hidden() {
        let config = StackConfig::default();
        assert!(depth_style(3, &config).is_none());
        assert!(depth_style(100, &config).is_none());
    }

    #[test]
    fn test_shadow_never_below_floor() {
        let config = StackConfig {
            max_visible: 10,
            ..StackConfig::default()
        };
        let style = depth_style(9, &config).unwrap();
        assert!(close(style.shadow_intensity, 0.1));
    }

    #[test]
    fn test_layout_takes_first_three() {
        let cards = sample_cards();
        let laid_out = layout(&cards, &StackConfig::default());
        let ids: Vec<&str> = laid_out.iter().map(|(c, _)| c.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert!(laid_out[0].1.interactive);
    }
}
