//! Global gameplay tuning settings (decoupled from UI)

use bevy::log::warn;
use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};

use crate::constants::*;

// Serde default functions so older config files keep working
fn default_player_gravity() -> f32 {
    PLAYER_GRAVITY
}
fn default_obstacle_gravity() -> f32 {
    OBSTACLE_GRAVITY
}
fn default_jump_velocity() -> f32 {
    JUMP_VELOCITY
}
fn default_obstacle_speed() -> f32 {
    OBSTACLE_SPEED
}
fn default_obstacle_bounce() -> f32 {
    OBSTACLE_BOUNCE
}
fn default_spawn_interval_ms() -> u64 {
    SPAWN_INTERVAL_MS
}
fn default_restart_delay_ms() -> u64 {
    RESTART_DELAY_MS
}
fn default_scroll_step_px() -> f32 {
    SCROLL_STEP_PX
}

/// Path to global gameplay tuning config
pub const GAMEPLAY_TUNING_FILE: &str = "config/gameplay_tuning.json";

/// Serializable tuning values stored in config
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameplayTuning {
    #[serde(default = "default_player_gravity")]
    pub player_gravity: f32,
    #[serde(default = "default_obstacle_gravity")]
    pub obstacle_gravity: f32,
    #[serde(default = "default_jump_velocity")]
    pub jump_velocity: f32,
    #[serde(default = "default_obstacle_speed")]
    pub obstacle_speed: f32,
    #[serde(default = "default_obstacle_bounce")]
    pub obstacle_bounce: f32,
    #[serde(default = "default_spawn_interval_ms")]
    pub spawn_interval_ms: u64,
    #[serde(default = "default_restart_delay_ms")]
    pub restart_delay_ms: u64,
    #[serde(default = "default_scroll_step_px")]
    pub scroll_step_px: f32,
}

impl Default for GameplayTuning {
    fn default() -> Self {
        Self {
            player_gravity: PLAYER_GRAVITY,
            obstacle_gravity: OBSTACLE_GRAVITY,
            jump_velocity: JUMP_VELOCITY,
            obstacle_speed: OBSTACLE_SPEED,
            obstacle_bounce: OBSTACLE_BOUNCE,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            restart_delay_ms: RESTART_DELAY_MS,
            scroll_step_px: SCROLL_STEP_PX,
        }
    }
}

impl GameplayTuning {
    pub fn apply_to(&self, tweaks: &mut GameplayTweaks) {
        tweaks.player_gravity = self.player_gravity;
        tweaks.obstacle_gravity = self.obstacle_gravity;
        tweaks.jump_velocity = self.jump_velocity;
        tweaks.obstacle_speed = self.obstacle_speed;
        tweaks.obstacle_bounce = self.obstacle_bounce;
        tweaks.spawn_interval_ms = self.spawn_interval_ms;
        tweaks.restart_delay_ms = self.restart_delay_ms;
        tweaks.scroll_step_px = self.scroll_step_px;
    }
}

/// Runtime-adjustable gameplay values for tweaking feel without rebuilds
#[derive(Resource, Debug, Clone)]
pub struct GameplayTweaks {
    pub player_gravity: f32,
    pub obstacle_gravity: f32,
    pub jump_velocity: f32,
    pub obstacle_speed: f32,
    pub obstacle_bounce: f32,
    pub spawn_interval_ms: u64,
    pub restart_delay_ms: u64,
    pub scroll_step_px: f32,
}

impl Default for GameplayTweaks {
    fn default() -> Self {
        let defaults = GameplayTuning::default();
        Self {
            player_gravity: defaults.player_gravity,
            obstacle_gravity: defaults.obstacle_gravity,
            jump_velocity: defaults.jump_velocity,
            obstacle_speed: defaults.obstacle_speed,
            obstacle_bounce: defaults.obstacle_bounce,
            spawn_interval_ms: defaults.spawn_interval_ms,
            restart_delay_ms: defaults.restart_delay_ms,
            scroll_step_px: defaults.scroll_step_px,
        }
    }
}

pub fn load_gameplay_tuning_from_file(path: &str) -> Result<GameplayTuning, String> {
    let contents =
        std::fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {}", path, e))?;
    serde_json::from_str(&contents).map_err(|e| format!("Failed to parse {}: {}", path, e))
}

pub fn apply_global_tuning(tweaks: &mut GameplayTweaks) -> Result<(), String> {
    match load_gameplay_tuning_from_file(GAMEPLAY_TUNING_FILE) {
        Ok(tuning) => {
            tuning.apply_to(tweaks);
            Ok(())
        }
        Err(err) => {
            GameplayTuning::default().apply_to(tweaks);
            Err(err)
        }
    }
}

pub fn load_global_tuning_system(mut tweaks: bevy::prelude::ResMut<GameplayTweaks>) {
    if let Err(err) = apply_global_tuning(&mut tweaks) {
        warn!("{}", err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_falls_back_to_defaults() {
        let tuning: GameplayTuning = serde_json::from_str(r#"{"player_gravity": 500.0}"#).unwrap();
        assert_eq!(tuning.player_gravity, 500.0);
        assert_eq!(tuning.obstacle_gravity, OBSTACLE_GRAVITY);
        assert_eq!(tuning.jump_velocity, JUMP_VELOCITY);
        assert_eq!(tuning.spawn_interval_ms, SPAWN_INTERVAL_MS);
    }

    #[test]
    fn test_apply_to_writes_all_fields() {
        let tuning = GameplayTuning {
            player_gravity: 111.0,
            obstacle_gravity: 112.0,
            jump_velocity: 222.0,
            obstacle_speed: 333.0,
            obstacle_bounce: 0.5,
            spawn_interval_ms: 444,
            restart_delay_ms: 555,
            scroll_step_px: 2.0,
        };
        let mut tweaks = GameplayTweaks::default();
        tuning.apply_to(&mut tweaks);
        assert_eq!(tweaks.player_gravity, 111.0);
        assert_eq!(tweaks.obstacle_gravity, 112.0);
        assert_eq!(tweaks.jump_velocity, 222.0);
        assert_eq!(tweaks.obstacle_speed, 333.0);
        assert_eq!(tweaks.obstacle_bounce, 0.5);
        assert_eq!(tweaks.spawn_interval_ms, 444);
        assert_eq!(tweaks.restart_delay_ms, 555);
        assert_eq!(tweaks.scroll_step_px, 2.0);
    }
}
