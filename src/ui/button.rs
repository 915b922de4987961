//! On-screen jump button for the touch control scheme

use bevy::prelude::*;

use crate::constants::*;

/// Marker for the jump button sprite
#[derive(Component)]
pub struct JumpButton;

/// Spawn the jump button. Only called when the touch scheme is active;
/// keyboard sessions never see it.
pub fn spawn_jump_button(commands: &mut Commands) {
    commands.spawn((
        Sprite::from_color(JUMP_BUTTON_COLOR, JUMP_BUTTON_SIZE),
        Transform::from_translation(JUMP_BUTTON_POS),
        JumpButton,
    ));
}
