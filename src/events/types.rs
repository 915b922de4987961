//! Event type definitions for the logging system

use serde::{Deserialize, Serialize};

/// Game configuration snapshot for analytics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameConfig {
    pub player_gravity: f32,
    pub obstacle_gravity: f32,
    pub jump_velocity: f32,
    pub obstacle_speed: f32,
    pub obstacle_bounce: f32,
    pub spawn_interval_ms: u64,
    pub restart_delay_ms: u64,
    pub scroll_step_px: f32,
}

/// All game events that can be logged
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum GameEvent {
    // === Session Events ===
    /// Session started (generated once per game launch)
    SessionStart {
        session_id: String, // UUID v4
        timestamp: String,  // ISO 8601
    },
    /// Game configuration snapshot (logged after session start)
    Config(GameConfig),

    // === Gameplay Events ===
    /// Player jumped off the ground
    Jump { pos: (f32, f32) },
    /// Obstacle spawned at the right edge
    Spawn { total: u32 },
    /// Player overlapped an obstacle
    Crash {
        score: u64,
        obstacle_pos: (f32, f32),
    },
    /// Stun ended and the running score was wiped
    Restart { discarded_score: u64 },
    /// Score exceeded the stored best
    HighScore { value: u64 },

    // === Debug/Tick Events ===
    /// Frame tick with player state (sampled, not every frame)
    Tick {
        frame: u64,
        player_pos: (f32, f32),
        player_vel: (f32, f32),
        obstacle_count: u32,
        score: u64,
    },
}

impl GameEvent {
    /// Get the event type code for compact serialization
    pub fn type_code(&self) -> &'static str {
        match self {
            GameEvent::SessionStart { .. } => "SE",
            GameEvent::Config(_) => "CF",
            GameEvent::Jump { .. } => "J",
            GameEvent::Spawn { .. } => "SP",
            GameEvent::Crash { .. } => "CR",
            GameEvent::Restart { .. } => "RS",
            GameEvent::HighScore { .. } => "HS",
            GameEvent::Tick { .. } => "T",
        }
    }
}
