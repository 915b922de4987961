//! Snapshot system - captures game state and screenshots on demand
//!
//! Dumps the full run state (JSON) and optionally a screenshot to the
//! snapshots/ directory, either manually (F4) or automatically on each
//! crash.

use bevy::prelude::*;
use bevy::render::view::screenshot::{Screenshot, save_to_disk};
use chrono::Local;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

use crate::background::BackgroundScroll;
use crate::crash::PendingRestart;
use crate::obstacles::{Obstacle, SpawnTimer};
use crate::player::{Grounded, Player, Velocity};
use crate::scoring::{HighScore, Score};

/// Directory where snapshots are saved
const SNAPSHOT_DIR: &str = "snapshots";

/// Snapshot capture settings
#[derive(Resource)]
pub struct SnapshotConfig {
    /// Capture automatically on every crash
    pub on_crash: bool,
    /// Also save a screenshot with each snapshot
    pub save_screenshots: bool,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            on_crash: true,
            save_screenshots: true,
        }
    }
}

/// Serializable snapshot of the run state
#[derive(Serialize)]
pub struct GameSnapshot {
    /// Timestamp when snapshot was taken
    pub timestamp: String,
    /// What triggered this snapshot
    pub trigger: String,
    /// Current score
    pub score: u64,
    /// Best score so far
    pub high_score: u64,
    /// Seconds left on the restart countdown, if a crash is pending
    pub restart_in: Option<f32>,
    /// Background scroll offset
    pub scroll_offset: f32,
    /// Obstacles spawned since session start
    pub total_spawned: u32,
    /// Player state
    pub player: Option<PlayerSnapshot>,
    /// Live obstacle states
    pub obstacles: Vec<ObstacleSnapshot>,
    /// Path to screenshot (if saved)
    pub screenshot_path: Option<String>,
}

#[derive(Serialize)]
pub struct PlayerSnapshot {
    pub position: (f32, f32),
    pub velocity: (f32, f32),
    pub grounded: bool,
}

#[derive(Serialize)]
pub struct ObstacleSnapshot {
    pub position: (f32, f32),
    pub velocity: (f32, f32),
}

/// Manual snapshot trigger (F4 key)
#[allow(clippy::too_many_arguments)]
pub fn manual_snapshot(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    config: Res<SnapshotConfig>,
    score: Res<Score>,
    high_score: Res<HighScore>,
    pending: Res<PendingRestart>,
    scroll: Res<BackgroundScroll>,
    spawn_timer: Res<SpawnTimer>,
    player_query: Query<(&Transform, &Velocity, &Grounded), With<Player>>,
    obstacle_query: Query<(&Transform, &Velocity), (With<Obstacle>, Without<Player>)>,
) {
    if !keyboard.just_pressed(KeyCode::F4) {
        return;
    }

    capture_snapshot(
        &mut commands,
        &config,
        "manual",
        &score,
        &high_score,
        &pending,
        &scroll,
        &spawn_timer,
        &player_query,
        &obstacle_query,
    );
}

/// Automatic snapshot on the frame a crash lands
#[allow(clippy::too_many_arguments)]
pub fn crash_snapshot(
    mut commands: Commands,
    config: Res<SnapshotConfig>,
    mut was_pending: Local<bool>,
    score: Res<Score>,
    high_score: Res<HighScore>,
    pending: Res<PendingRestart>,
    scroll: Res<BackgroundScroll>,
    spawn_timer: Res<SpawnTimer>,
    player_query: Query<(&Transform, &Velocity, &Grounded), With<Player>>,
    obstacle_query: Query<(&Transform, &Velocity), (With<Obstacle>, Without<Player>)>,
) {
    let pending_now = pending.is_pending();
    let crashed = pending_now && !*was_pending;
    *was_pending = pending_now;

    if !crashed || !config.on_crash {
        return;
    }

    capture_snapshot(
        &mut commands,
        &config,
        "crash",
        &score,
        &high_score,
        &pending,
        &scroll,
        &spawn_timer,
        &player_query,
        &obstacle_query,
    );
}

/// Assemble the snapshot, write the JSON, and queue the screenshot
#[allow(clippy::too_many_arguments)]
fn capture_snapshot(
    commands: &mut Commands,
    config: &SnapshotConfig,
    trigger: &str,
    score: &Score,
    high_score: &HighScore,
    pending: &PendingRestart,
    scroll: &BackgroundScroll,
    spawn_timer: &SpawnTimer,
    player_query: &Query<(&Transform, &Velocity, &Grounded), With<Player>>,
    obstacle_query: &Query<(&Transform, &Velocity), (With<Obstacle>, Without<Player>)>,
) {
    let timestamp = Local::now().format("%Y%m%d_%H%M%S_%3f").to_string();

    if let Err(e) = fs::create_dir_all(SNAPSHOT_DIR) {
        error!("Failed to create snapshot directory: {}", e);
        return;
    }

    let player = player_query
        .iter()
        .next()
        .map(|(transform, velocity, grounded)| PlayerSnapshot {
            position: (transform.translation.x, transform.translation.y),
            velocity: (velocity.0.x, velocity.0.y),
            grounded: grounded.0,
        });

    let obstacles: Vec<ObstacleSnapshot> = obstacle_query
        .iter()
        .map(|(transform, velocity)| ObstacleSnapshot {
            position: (transform.translation.x, transform.translation.y),
            velocity: (velocity.0.x, velocity.0.y),
        })
        .collect();

    let screenshot_filename = format!("{}_{}.png", timestamp, trigger);
    let screenshot_path = if config.save_screenshots {
        Some(format!("{}/{}", SNAPSHOT_DIR, screenshot_filename))
    } else {
        None
    };

    let snapshot = GameSnapshot {
        timestamp: timestamp.clone(),
        trigger: trigger.to_string(),
        score: score.0,
        high_score: high_score.value,
        restart_in: pending.0.as_ref().map(|timer| timer.remaining_secs()),
        scroll_offset: scroll.offset,
        total_spawned: spawn_timer.spawned,
        player,
        obstacles,
        screenshot_path: screenshot_path.clone(),
    };

    let json_path = format!("{}/{}_{}.json", SNAPSHOT_DIR, timestamp, trigger);
    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => {
            if let Err(e) = fs::write(&json_path, json) {
                error!("Failed to write snapshot JSON: {}", e);
            } else {
                info!("Snapshot saved: {}", json_path);
            }
        }
        Err(e) => error!("Failed to serialize snapshot: {}", e),
    }

    if config.save_screenshots {
        let path = PathBuf::from(format!("{}/{}", SNAPSHOT_DIR, screenshot_filename));
        commands
            .spawn(Screenshot::primary_window())
            .observe(save_to_disk(path));
        info!("Screenshot queued: {}", screenshot_filename);
    }
}
