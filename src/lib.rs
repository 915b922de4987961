//! Jumpgame - a one-button side-scroller built with Bevy
//!
//! This crate provides all game components, resources, and systems organized into modules.

// Core modules
pub mod config_watcher;
pub mod constants;
pub mod events;
pub mod helpers;
pub mod simulation;
pub mod snapshot;
pub mod storage;
pub mod tuning;

// Game logic modules
pub mod animation;
pub mod assets;
pub mod audio;
pub mod background;
pub mod crash;
pub mod input;
pub mod obstacles;
pub mod player;
pub mod scoring;
pub mod ui;
pub mod world;

// Re-export commonly used types for convenience
pub use animation::{PlayerClip, SpriteAnimation, animate_sprites};
pub use assets::{GameAssets, load_assets};
pub use audio::{MusicController, start_music};
pub use background::{BackgroundScroll, ScrollingTile, scroll_background, spawn_background};
pub use config_watcher::ConfigWatcher;
pub use constants::*;
pub use crash::{PendingRestart, detect_hits, process_restart};
pub use events::{
    BusEvent, EventBuffer, EventBus, EventLogConfig, EventLogger, GameConfig, GameEvent,
    flush_events_to_log, log_tick_events, parse_event, serialize_event, update_event_bus_time,
};
pub use helpers::*;
pub use input::{ControlScheme, JumpInput, capture_input};
pub use obstacles::{
    Obstacle, SpawnTimer, bounce_obstacles, despawn_offscreen_obstacles, obstacle_gravity,
    spawn_obstacles,
};
pub use player::{
    Grounded, Player, Velocity, apply_gravity, apply_velocity, check_ground_collision, execute_jump,
};
pub use scoring::{HighScore, Score, save_high_score, tick_score, track_high_score};
pub use simulation::{HeadlessAppBuilder, sim_setup};
pub use snapshot::{
    GameSnapshot, ObstacleSnapshot, PlayerSnapshot, SnapshotConfig, crash_snapshot, manual_snapshot,
};
pub use storage::HighScoreRecord;
pub use tuning::{GAMEPLAY_TUNING_FILE, GameplayTuning, GameplayTweaks, load_global_tuning_system};
pub use ui::{
    DebugSettings, DebugText, HighScoreText, JumpButton, ScoreText, spawn_jump_button,
    toggle_debug, update_debug_text, update_high_score_text, update_score_text,
};
pub use world::{Collider, Ground, spawn_ground};
