//! Tunable constants for jumpgame
//!
//! All gameplay values are defined here for easy tweaking.

use bevy::prelude::*;

// =============================================================================
// WORLD DIMENSIONS
// =============================================================================

pub const WORLD_WIDTH: f32 = 800.0;
pub const WORLD_HEIGHT: f32 = 600.0;

/// Ground strip: a 400x32 tile scaled x2, sitting near the bottom edge
pub const GROUND_SIZE: Vec2 = Vec2::new(800.0, 64.0);
pub const GROUND_POS: Vec3 = Vec3::new(0.0, -268.0, Z_GROUND);
pub const GROUND_TOP_Y: f32 = GROUND_POS.y + GROUND_SIZE.y / 2.0;

// =============================================================================
// Z LAYERS
// =============================================================================

pub const Z_BACKDROP: f32 = -1.0;
pub const Z_SCROLL: f32 = 0.0;
pub const Z_GROUND: f32 = 1.0;
pub const Z_OBSTACLE: f32 = 2.0;
pub const Z_PLAYER: f32 = 3.0;
pub const Z_BUTTON: f32 = 5.0;
pub const Z_TEXT: f32 = 10.0;

// =============================================================================
// PHYSICS CONSTANTS
// =============================================================================

pub const PLAYER_GRAVITY: f32 = 600.0; // Downward pull on the player (pixels/sec^2)
pub const OBSTACLE_GRAVITY: f32 = 300.0; // Downward pull on obstacles (pixels/sec^2)
pub const JUMP_VELOCITY: f32 = 350.0; // Upward velocity on a successful jump
pub const OBSTACLE_SPEED: f32 = 200.0; // Leftward obstacle speed (pixels/sec)
pub const OBSTACLE_BOUNCE: f32 = 0.2; // Coefficient of restitution on ground contact
pub const BOUNCE_REST_SPEED: f32 = 20.0; // Below this, a bounce settles to rest
pub const COLLISION_EPSILON: f32 = 0.5; // Skin width for collision detection

// =============================================================================
// SIZE CONSTANTS
// =============================================================================

pub const PLAYER_SIZE: Vec2 = Vec2::new(32.0, 48.0);
pub const OBSTACLE_SIZE: Vec2 = Vec2::new(32.0, 32.0);

// =============================================================================
// SPAWN POSITIONS
// =============================================================================

pub const PLAYER_SPAWN: Vec3 = Vec3::new(-300.0, -150.0, Z_PLAYER);
/// Just off the right edge, at resting height on the ground
pub const OBSTACLE_SPAWN: Vec3 = Vec3::new(400.0, -220.0, Z_OBSTACLE);

// =============================================================================
// TIMING
// =============================================================================

pub const SPAWN_INTERVAL_MS: u64 = 1000; // One obstacle per interval, forever
pub const RESTART_DELAY_MS: u64 = 1000; // Stun duration after a crash

// =============================================================================
// SCROLLING
// =============================================================================

/// Tile offset step per rendered frame (deliberately not time-normalized)
pub const SCROLL_STEP_PX: f32 = 1.0;

// =============================================================================
// PLAYER SPRITESHEET
// =============================================================================

pub const PLAYER_FRAME_SIZE: UVec2 = UVec2::new(32, 48);
pub const PLAYER_SHEET_COLUMNS: u32 = 9;
pub const ANIMATION_FPS: f32 = 10.0;

// =============================================================================
// TEXT/UI
// =============================================================================

pub const HUD_FONT_SIZE: f32 = 32.0;
pub const TEXT_PRIMARY: Color = Color::BLACK;
// Screen-space offsets from the window's top-left corner
pub const SCORE_TEXT_POS: Vec2 = Vec2::new(16.0, 16.0);
pub const HIGH_SCORE_TEXT_POS: Vec2 = Vec2::new(16.0, 50.0);

// =============================================================================
// TOUCH JUMP BUTTON
// =============================================================================

pub const JUMP_BUTTON_POS: Vec3 = Vec3::new(-330.0, -250.0, Z_BUTTON);
pub const JUMP_BUTTON_SIZE: Vec2 = Vec2::new(100.0, 100.0);
pub const JUMP_BUTTON_COLOR: Color = Color::srgb(0.0, 0.0, 1.0);

// =============================================================================
// TINTS
// =============================================================================

pub const CRASH_TINT: Color = Color::srgb(1.0, 0.0, 0.0);
pub const NO_TINT: Color = Color::WHITE;

// =============================================================================
// BACKGROUND
// =============================================================================

pub const CLEAR_COLOR: Color = Color::srgb(0.36, 0.58, 0.77);
