//! Config file auto-reload system
//!
//! Polls the gameplay tuning file every 10 seconds and reloads when modified.

use bevy::prelude::*;
use std::fs;
use std::time::SystemTime;

use crate::tuning::{GAMEPLAY_TUNING_FILE, GameplayTweaks, apply_global_tuning};

/// How often to check for config changes (seconds)
const CHECK_INTERVAL: f32 = 10.0;

/// Tracks modification time of the tuning file for hot-reload
#[derive(Resource)]
pub struct ConfigWatcher {
    /// Time since last check
    pub timer: f32,
    /// Last known modification time
    pub tuning_mtime: Option<SystemTime>,
}

impl Default for ConfigWatcher {
    fn default() -> Self {
        Self {
            timer: 0.0,
            tuning_mtime: get_mtime(GAMEPLAY_TUNING_FILE),
        }
    }
}

/// Get file modification time, or None if file doesn't exist
fn get_mtime(path: &str) -> Option<SystemTime> {
    fs::metadata(path).ok().and_then(|m| m.modified().ok())
}

/// Check for tuning file changes and reload as needed.
/// Runs every 10 seconds.
pub fn check_config_changes(
    time: Res<Time>,
    mut watcher: ResMut<ConfigWatcher>,
    mut tweaks: ResMut<GameplayTweaks>,
) {
    watcher.timer += time.delta_secs();

    if watcher.timer < CHECK_INTERVAL {
        return;
    }
    watcher.timer = 0.0;

    let new_mtime = get_mtime(GAMEPLAY_TUNING_FILE);
    if new_mtime == watcher.tuning_mtime {
        return;
    }
    watcher.tuning_mtime = new_mtime;

    match apply_global_tuning(&mut tweaks) {
        Ok(()) => info!("Auto-reloaded tuning from {}", GAMEPLAY_TUNING_FILE),
        Err(err) => warn!("{}", err),
    }
}
