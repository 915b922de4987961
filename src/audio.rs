//! Background music playback

use bevy::prelude::*;

use crate::assets::GameAssets;

/// Marker for the looping background music entity
#[derive(Component)]
pub struct MusicController;

/// Start the background track. It loops for the whole session and is
/// only ever paused and resumed by the crash sequence.
pub fn start_music(mut commands: Commands, assets: Res<GameAssets>) {
    commands.spawn((
        AudioPlayer::new(assets.music.clone()),
        PlaybackSettings::LOOP,
        MusicController,
    ));
}
