//! World components for the ground strip

use bevy::prelude::*;

use crate::assets::GameAssets;
use crate::constants::*;

/// Marker for collidable entities
#[derive(Component, Default)]
pub struct Collider;

/// Ground strip component - the surface everything stands on
#[derive(Component)]
#[require(Collider)]
pub struct Ground;

/// Spawn the ground strip spanning the bottom of the world
pub fn spawn_ground(commands: &mut Commands, assets: &GameAssets) {
    commands.spawn((
        Sprite {
            image: assets.ground.clone(),
            custom_size: Some(GROUND_SIZE),
            ..default()
        },
        Transform::from_translation(GROUND_POS),
        Ground,
    ));
}
