//! Asset manifest and up-front loading
//!
//! Every texture and sound the game uses is declared here by path and
//! loaded into a single `GameAssets` resource before the world is built.

use bevy::prelude::*;

use crate::constants::{PLAYER_FRAME_SIZE, PLAYER_SHEET_COLUMNS};

// Texture paths (relative to assets/)
pub const BACKGROUND_TEXTURE: &str = "textures/background.png";
pub const GROUND_TEXTURE: &str = "textures/platform.png";
pub const OBSTACLE_TEXTURE: &str = "textures/obstacle.png";
pub const PLAYER_SHEET: &str = "textures/player.png";

// Audio paths
pub const MUSIC_TRACK: &str = "audio/background_music.wav";
pub const JUMP_SFX: &str = "audio/jump.wav";

/// Handles for everything in the manifest
#[derive(Resource, Clone)]
pub struct GameAssets {
    pub background: Handle<Image>,
    pub ground: Handle<Image>,
    pub obstacle: Handle<Image>,
    pub player_sheet: Handle<Image>,
    pub player_layout: Handle<TextureAtlasLayout>,
    pub music: Handle<AudioSource>,
    pub jump_sfx: Handle<AudioSource>,
}

/// Load the full manifest and insert it as a resource.
/// Runs before world setup so spawns can clone handles freely.
pub fn load_assets(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut layouts: ResMut<Assets<TextureAtlasLayout>>,
) {
    let player_layout = layouts.add(TextureAtlasLayout::from_grid(
        PLAYER_FRAME_SIZE,
        PLAYER_SHEET_COLUMNS,
        1,
        None,
        None,
    ));

    commands.insert_resource(GameAssets {
        background: asset_server.load(BACKGROUND_TEXTURE),
        ground: asset_server.load(GROUND_TEXTURE),
        obstacle: asset_server.load(OBSTACLE_TEXTURE),
        player_sheet: asset_server.load(PLAYER_SHEET),
        player_layout,
        music: asset_server.load(MUSIC_TRACK),
        jump_sfx: asset_server.load(JUMP_SFX),
    });

    info!("Queued texture and audio loads");
}
