//! Obstacle spawning, motion, and cleanup
//!
//! A repeating timer pushes one obstacle in from the right edge per
//! interval. Obstacles travel left at constant speed, settle onto the
//! ground with a small bounce, and are despawned once fully past the
//! left world edge.

use bevy::prelude::*;
use std::time::Duration;

use crate::assets::GameAssets;
use crate::constants::*;
use crate::events::{EventBus, GameEvent};
use crate::player::Velocity;
use crate::tuning::GameplayTweaks;
use crate::world::{Collider, Ground};

/// Marker for obstacle entities
#[derive(Component)]
#[require(Collider)]
pub struct Obstacle;

/// Repeating spawn timer with a running total
#[derive(Resource)]
pub struct SpawnTimer {
    pub timer: Timer,
    pub spawned: u32,
}

impl SpawnTimer {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            timer: Timer::new(Duration::from_millis(interval_ms), TimerMode::Repeating),
            spawned: 0,
        }
    }
}

impl Default for SpawnTimer {
    fn default() -> Self {
        Self::new(SPAWN_INTERVAL_MS)
    }
}

/// Spawn one obstacle per elapsed interval, in every game state.
/// The timer is never paused or cancelled for the lifetime of the session.
pub fn spawn_obstacles(
    mut commands: Commands,
    time: Res<Time>,
    tweaks: Res<GameplayTweaks>,
    assets: Option<Res<GameAssets>>,
    mut spawn_timer: ResMut<SpawnTimer>,
    mut bus: ResMut<EventBus>,
) {
    // Pick up tuning changes without restarting the timer
    let interval = Duration::from_millis(tweaks.spawn_interval_ms);
    if spawn_timer.timer.duration() != interval {
        spawn_timer.timer.set_duration(interval);
    }

    spawn_timer.timer.tick(time.delta());

    for _ in 0..spawn_timer.timer.times_finished_this_tick() {
        let sprite = match &assets {
            Some(assets) => Sprite {
                image: assets.obstacle.clone(),
                custom_size: Some(OBSTACLE_SIZE),
                ..default()
            },
            None => Sprite {
                custom_size: Some(OBSTACLE_SIZE),
                ..default()
            },
        };

        commands.spawn((
            sprite,
            Transform::from_translation(OBSTACLE_SPAWN),
            Obstacle,
            Velocity(Vec2::new(-tweaks.obstacle_speed, 0.0)),
        ));

        spawn_timer.spawned += 1;
        bus.emit(GameEvent::Spawn {
            total: spawn_timer.spawned,
        });
    }
}

/// Apply gravity to obstacles
pub fn obstacle_gravity(
    tweaks: Res<GameplayTweaks>,
    mut query: Query<&mut Velocity, With<Obstacle>>,
    time: Res<Time>,
) {
    // Use minimum dt for headless mode compatibility
    let dt = time.delta_secs().max(1.0 / 60.0);

    for mut velocity in &mut query {
        velocity.0.y -= tweaks.obstacle_gravity * dt;
    }
}

/// Bounce obstacles off the ground with restitution, settling when slow
pub fn bounce_obstacles(
    tweaks: Res<GameplayTweaks>,
    mut obstacles: Query<(&mut Transform, &mut Velocity, &Sprite), With<Obstacle>>,
    ground_query: Query<(&GlobalTransform, &Sprite), (With<Ground>, Without<Obstacle>)>,
) {
    for (mut transform, mut velocity, sprite) in &mut obstacles {
        let half = sprite.custom_size.unwrap_or(OBSTACLE_SIZE) / 2.0;

        for (ground_global, ground_sprite) in &ground_query {
            let ground_half = ground_sprite.custom_size.unwrap_or(GROUND_SIZE) / 2.0;
            let ground_pos = ground_global.translation().truncate();
            let ground_top = ground_pos.y + ground_half.y;

            let diff_x = transform.translation.x - ground_pos.x;
            if diff_x.abs() >= half.x + ground_half.x {
                continue;
            }

            let bottom = transform.translation.y - half.y;
            if bottom < ground_top && velocity.0.y <= 0.0 {
                transform.translation.y = ground_top + half.y;
                let rebound = -velocity.0.y * tweaks.obstacle_bounce;
                velocity.0.y = if rebound < BOUNCE_REST_SPEED {
                    0.0
                } else {
                    rebound
                };
            }
        }
    }
}

/// Despawn obstacles once fully past the left world edge
pub fn despawn_offscreen_obstacles(
    mut commands: Commands,
    obstacles: Query<(Entity, &Transform, &Sprite), With<Obstacle>>,
) {
    for (entity, transform, sprite) in &obstacles {
        let half_width = sprite.custom_size.unwrap_or(OBSTACLE_SIZE).x / 2.0;
        if transform.translation.x < -WORLD_WIDTH / 2.0 - half_width {
            commands.entity(entity).despawn();
        }
    }
}
