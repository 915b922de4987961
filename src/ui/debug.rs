//! Debug UI components and systems

use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;

use crate::background::BackgroundScroll;
use crate::crash::PendingRestart;
use crate::obstacles::{Obstacle, SpawnTimer};
use crate::player::{Grounded, Player, Velocity};
use crate::scoring::Score;

/// Debug overlay visibility (hidden until toggled)
#[derive(Resource, Default)]
pub struct DebugSettings {
    pub visible: bool,
}

/// Debug text component
#[derive(Component)]
pub struct DebugText;

/// Toggle debug overlay visibility (Tab)
pub fn toggle_debug(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut settings: ResMut<DebugSettings>,
    mut text_query: Query<&mut Visibility, With<DebugText>>,
) {
    if keyboard.just_pressed(KeyCode::Tab) {
        settings.visible = !settings.visible;
        if let Ok(mut visibility) = text_query.single_mut() {
            *visibility = if settings.visible {
                Visibility::Inherited
            } else {
                Visibility::Hidden
            };
        }
    }
}

/// Update debug text display
pub fn update_debug_text(
    settings: Res<DebugSettings>,
    diagnostics: Res<DiagnosticsStore>,
    score: Res<Score>,
    scroll: Res<BackgroundScroll>,
    spawn_timer: Res<SpawnTimer>,
    pending: Res<PendingRestart>,
    obstacles: Query<&Obstacle>,
    players: Query<(&Transform, &Velocity, &Grounded), With<Player>>,
    mut text_query: Query<&mut Text2d, With<DebugText>>,
) {
    if !settings.visible {
        return;
    }

    let Ok(mut text) = text_query.single_mut() else {
        return;
    };

    let fps = diagnostics
        .get(&FrameTimeDiagnosticsPlugin::FPS)
        .and_then(|d| d.smoothed())
        .unwrap_or(0.0);

    let player_str = match players.single() {
        Ok((transform, velocity, grounded)) => format!(
            "pos ({:.0},{:.0}) vy {:.0} grounded {}",
            transform.translation.x, transform.translation.y, velocity.0.y, grounded.0
        ),
        Err(_) => "no player".to_string(),
    };

    let restart_str = match &pending.0 {
        Some(timer) => format!(" | restart in {:.2}s", timer.remaining_secs()),
        None => String::new(),
    };

    **text = format!(
        "{:.0} fps | score {} | obstacles {} ({} spawned) | scroll {:.0} | {}{}",
        fps,
        score.0,
        obstacles.iter().count(),
        spawn_timer.spawned,
        scroll.offset,
        player_str,
        restart_str,
    );
}
