//! Input module - ControlScheme, JumpInput resource and capture_input system

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::constants::*;
use crate::helpers::{point_in_rect, window_to_world};

/// Which jump binding is live for this session.
///
/// Exactly one binding is active at a time: desktop sessions read the
/// keyboard, touch sessions read the on-screen button. The default
/// follows the platform; `--touch` / `--keyboard` override it.
#[derive(Resource, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ControlScheme {
    Keyboard,
    Touch,
}

impl Default for ControlScheme {
    fn default() -> Self {
        if cfg!(any(target_os = "android", target_os = "ios")) {
            ControlScheme::Touch
        } else {
            ControlScheme::Keyboard
        }
    }
}

/// Jump request captured this frame
#[derive(Resource, Default)]
pub struct JumpInput {
    pub requested: bool, // Overwritten every frame by capture_input
}

/// Runs first in Update to capture the jump request before physics.
///
/// The keyboard binding fires on the press edge only. The touch binding
/// fires on every frame the button is covered, so holding it re-jumps
/// on the first grounded frame after each landing.
pub fn capture_input(
    scheme: Res<ControlScheme>,
    keyboard: Res<ButtonInput<KeyCode>>,
    touches: Res<Touches>,
    mouse: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut input: ResMut<JumpInput>,
) {
    input.requested = match *scheme {
        ControlScheme::Keyboard => keyboard.just_pressed(KeyCode::Space),
        ControlScheme::Touch => button_covered(&touches, &mouse, &windows),
    };
}

/// True while any touch point or a held left click covers the jump button
fn button_covered(
    touches: &Touches,
    mouse: &ButtonInput<MouseButton>,
    windows: &Query<&Window, With<PrimaryWindow>>,
) -> bool {
    let button_center = JUMP_BUTTON_POS.truncate();

    for touch in touches.iter() {
        if point_in_rect(
            window_to_world(touch.position()),
            button_center,
            JUMP_BUTTON_SIZE,
        ) {
            return true;
        }
    }

    // Mouse fallback keeps the touch layout usable on desktop
    if mouse.pressed(MouseButton::Left)
        && let Ok(window) = windows.single()
        && let Some(cursor) = window.cursor_position()
        && point_in_rect(window_to_world(cursor), button_center, JUMP_BUTTON_SIZE)
    {
        return true;
    }

    false
}
