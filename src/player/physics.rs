//! Player physics systems

use bevy::prelude::*;

use crate::assets::GameAssets;
use crate::constants::*;
use crate::events::{EventBus, GameEvent};
use crate::input::JumpInput;
use crate::player::components::*;
use crate::tuning::GameplayTweaks;
use crate::world::Ground;

/// Launch the player if a jump was requested this frame.
/// Only succeeds with ground contact; airborne requests are dropped.
pub fn execute_jump(
    mut commands: Commands,
    jump_input: Res<JumpInput>,
    tweaks: Res<GameplayTweaks>,
    assets: Option<Res<GameAssets>>,
    mut bus: ResMut<EventBus>,
    mut players: Query<(&Transform, &mut Velocity, &Grounded), With<Player>>,
) {
    if !jump_input.requested {
        return;
    }

    for (transform, mut velocity, grounded) in &mut players {
        if !grounded.0 {
            continue;
        }

        velocity.0.y = tweaks.jump_velocity;
        bus.emit(GameEvent::Jump {
            pos: (transform.translation.x, transform.translation.y),
        });

        if let Some(assets) = &assets {
            commands.spawn((
                AudioPlayer::new(assets.jump_sfx.clone()),
                PlaybackSettings::DESPAWN,
            ));
        }
    }
}

/// Apply gravity to the player while airborne
pub fn apply_gravity(
    tweaks: Res<GameplayTweaks>,
    mut query: Query<(&mut Velocity, &Grounded), With<Player>>,
    time: Res<Time>,
) {
    for (mut velocity, grounded) in &mut query {
        if !grounded.0 {
            velocity.0.y -= tweaks.player_gravity * time.delta_secs();
        }
    }
}

/// Move entities by their velocity
pub fn apply_velocity(mut query: Query<(&mut Transform, &Velocity)>, time: Res<Time>) {
    // Use minimum dt for headless mode compatibility
    let dt = time.delta_secs().max(1.0 / 60.0);

    for (mut transform, velocity) in &mut query {
        transform.translation.x += velocity.0.x * dt;
        transform.translation.y += velocity.0.y * dt;
    }
}

/// Check player collision against the ground and the world edges
pub fn check_ground_collision(
    mut player_query: Query<(&mut Transform, &mut Velocity, &mut Grounded, &Sprite), With<Player>>,
    ground_query: Query<(&GlobalTransform, &Sprite), (With<Ground>, Without<Player>)>,
) {
    for (mut player_transform, mut player_velocity, mut grounded, player_sprite) in
        &mut player_query
    {
        let player_size = player_sprite.custom_size.unwrap_or(PLAYER_SIZE);
        let player_half = player_size / 2.0;

        // Assume airborne until we find the ground beneath us
        grounded.0 = false;

        for (ground_global, ground_sprite) in &ground_query {
            let ground_size = ground_sprite.custom_size.unwrap_or(GROUND_SIZE);
            let ground_half = ground_size / 2.0;

            let player_pos = player_transform.translation.truncate();
            let ground_pos = ground_global.translation().truncate();

            let diff = player_pos - ground_pos;
            let overlap_x = player_half.x + ground_half.x - diff.x.abs();
            let overlap_y = player_half.y + ground_half.y - diff.y.abs();

            // No contact
            if overlap_x <= 0.0 || overlap_y <= 0.0 {
                continue;
            }

            if diff.y > 0.0 {
                // Land on top - position slightly inside (EPSILON) so next
                // frame still detects contact
                player_transform.translation.y =
                    ground_pos.y + ground_half.y + player_half.y - COLLISION_EPSILON;
                if player_velocity.0.y <= 0.0 {
                    player_velocity.0.y = 0.0;
                    grounded.0 = true;
                }
            }
        }

        // Confine the player to the world vertically
        let ceiling = WORLD_HEIGHT / 2.0 - player_half.y;
        if player_transform.translation.y > ceiling {
            player_transform.translation.y = ceiling;
            if player_velocity.0.y > 0.0 {
                player_velocity.0.y = 0.0;
            }
        }
    }
}
