//! Crash detection and the delayed automatic restart
//!
//! Hitting an obstacle does not stop the game. The player is tinted
//! red, the music pauses, and a one-shot timer starts; when it fires
//! the score resets to zero, the tint clears, and the music resumes.
//! Everything else (spawning, scrolling, scoring, jumping) runs
//! through the whole sequence untouched.

use bevy::audio::AudioSinkPlayback;
use bevy::prelude::*;
use std::time::Duration;

use crate::audio::MusicController;
use crate::constants::*;
use crate::events::{EventBus, GameEvent};
use crate::helpers::aabb_overlap;
use crate::obstacles::Obstacle;
use crate::player::Player;
use crate::scoring::Score;
use crate::tuning::GameplayTweaks;

/// Countdown to the automatic restart after a crash.
/// At most one restart is in flight; hits while one is pending are ignored.
#[derive(Resource, Default)]
pub struct PendingRestart(pub Option<Timer>);

impl PendingRestart {
    pub fn is_pending(&self) -> bool {
        self.0.is_some()
    }
}

/// Check the player against every obstacle and start the restart
/// countdown on the first overlap. Emits Crash events to the EventBus.
pub fn detect_hits(
    tweaks: Res<GameplayTweaks>,
    score: Res<Score>,
    mut pending: ResMut<PendingRestart>,
    mut bus: ResMut<EventBus>,
    mut players: Query<(&Transform, &mut Sprite), With<Player>>,
    obstacles: Query<(&Transform, &Sprite), (With<Obstacle>, Without<Player>)>,
    music: Query<&AudioSink, With<MusicController>>,
) {
    if pending.is_pending() {
        return;
    }

    for (player_transform, mut player_sprite) in &mut players {
        let player_pos = player_transform.translation.truncate();
        let player_size = player_sprite.custom_size.unwrap_or(PLAYER_SIZE);

        for (obstacle_transform, obstacle_sprite) in &obstacles {
            let obstacle_pos = obstacle_transform.translation.truncate();
            let obstacle_size = obstacle_sprite.custom_size.unwrap_or(OBSTACLE_SIZE);

            if !aabb_overlap(player_pos, player_size, obstacle_pos, obstacle_size) {
                continue;
            }

            player_sprite.color = CRASH_TINT;
            for sink in &music {
                sink.pause();
            }

            bus.emit(GameEvent::Crash {
                score: score.0,
                obstacle_pos: (obstacle_pos.x, obstacle_pos.y),
            });
            info!("Crash at score {}", score.0);

            pending.0 = Some(Timer::new(
                Duration::from_millis(tweaks.restart_delay_ms),
                TimerMode::Once,
            ));
            return;
        }
    }
}

/// Tick the restart countdown and perform the reset when it fires
pub fn process_restart(
    time: Res<Time>,
    mut pending: ResMut<PendingRestart>,
    mut score: ResMut<Score>,
    mut bus: ResMut<EventBus>,
    mut players: Query<&mut Sprite, With<Player>>,
    music: Query<&AudioSink, With<MusicController>>,
) {
    let Some(timer) = pending.0.as_mut() else {
        return;
    };

    timer.tick(time.delta());
    if !timer.finished() {
        return;
    }

    bus.emit(GameEvent::Restart {
        discarded_score: score.0,
    });
    info!("Restarting, discarding score {}", score.0);
    score.0 = 0;

    for mut sprite in &mut players {
        sprite.color = NO_TINT;
    }
    for sink in &music {
        sink.play();
    }

    pending.0 = None;
}
