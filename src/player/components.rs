//! Player-related components

use bevy::prelude::*;

/// Marker for the player entity
#[derive(Component)]
pub struct Player;

/// 2D velocity vector - shared by the player and obstacles
#[derive(Component, Default)]
pub struct Velocity(pub Vec2);

/// Whether the player is resting on the ground
#[derive(Component)]
pub struct Grounded(pub bool);
