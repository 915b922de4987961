//! Scrolling backdrop
//!
//! A static copy of the background image sits at the back; two more
//! copies tile horizontally in front of it. Each rendered frame the
//! shared offset steps left by a fixed pixel amount and the scrolling
//! pair is repositioned so it always covers the viewport.

use bevy::prelude::*;

use crate::assets::GameAssets;
use crate::constants::{WORLD_HEIGHT, WORLD_WIDTH, Z_BACKDROP, Z_SCROLL};
use crate::tuning::GameplayTweaks;

/// Accumulated horizontal tile offset in pixels
#[derive(Resource, Default)]
pub struct BackgroundScroll {
    pub offset: f32,
}

/// One copy of the tiling background image
#[derive(Component)]
pub struct ScrollingTile {
    /// Which slot this copy fills (0 = lead, 1 = trailing)
    pub slot: f32,
}

/// Spawn the static backdrop and both scrolling copies
pub fn spawn_background(commands: &mut Commands, assets: &GameAssets) {
    // Fixed base layer, fully covered by the scrolling pair in practice
    commands.spawn((
        Sprite {
            image: assets.background.clone(),
            custom_size: Some(Vec2::new(WORLD_WIDTH, WORLD_HEIGHT)),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, Z_BACKDROP),
    ));

    for slot in 0..2 {
        commands.spawn((
            Sprite {
                image: assets.background.clone(),
                custom_size: Some(Vec2::new(WORLD_WIDTH, WORLD_HEIGHT)),
                ..default()
            },
            Transform::from_xyz(-(slot as f32) * WORLD_WIDTH, 0.0, Z_SCROLL),
            ScrollingTile { slot: slot as f32 },
        ));
    }
}

/// Step the offset and reposition both copies.
/// The step is per frame, not per second, so scroll speed tracks frame rate.
pub fn scroll_background(
    mut scroll: ResMut<BackgroundScroll>,
    tweaks: Res<GameplayTweaks>,
    mut tiles: Query<(&ScrollingTile, &mut Transform)>,
) {
    scroll.offset -= tweaks.scroll_step_px;
    let base = scroll.offset.rem_euclid(WORLD_WIDTH);
    for (tile, mut transform) in &mut tiles {
        transform.translation.x = base - tile.slot * WORLD_WIDTH;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile_positions(offset: f32) -> (f32, f32) {
        let base = offset.rem_euclid(WORLD_WIDTH);
        (base, base - WORLD_WIDTH)
    }

    #[test]
    fn test_tiles_cover_viewport_at_any_offset() {
        let half = WORLD_WIDTH / 2.0;
        for i in 0..2000 {
            let offset = -(i as f32);
            let (a, b) = tile_positions(offset);
            let left_edge = (a - half).min(b - half);
            let right_edge = (a + half).max(b + half);
            assert!(left_edge <= -half, "gap on the left at offset {}", offset);
            assert!(right_edge >= half, "gap on the right at offset {}", offset);
            // The two copies abut exactly
            assert_eq!((a - b).abs(), WORLD_WIDTH);
        }
    }

    #[test]
    fn test_offset_wraps_seamlessly() {
        // One pixel before and after a wrap boundary differ by exactly one pixel
        let (before, _) = tile_positions(-799.0);
        let (after, _) = tile_positions(-800.0);
        assert_eq!(before, 1.0);
        assert_eq!(after, 0.0);
    }
}
