//! Jumpgame - a one-button side-scroller built with Bevy
//!
//! Main entry point: app setup and system registration.

use bevy::{camera::ScalingMode, diagnostic::FrameTimeDiagnosticsPlugin, prelude::*};
use chrono::Local;

use jumpgame::{
    BackgroundScroll, Collider, ConfigWatcher, ControlScheme, DebugSettings, DebugText, EventBus,
    EventLogConfig, EventLogger, GameAssets, GameConfig, GameEvent, GameplayTweaks, Grounded,
    HighScore, HighScoreRecord, HighScoreText, JumpInput, PendingRestart, Player, PlayerClip,
    Score, ScoreText, SnapshotConfig, SpawnTimer, SpriteAnimation, Velocity, animate_sprites,
    audio, background, config_watcher, constants::*, crash, events, input, load_assets, obstacles,
    player, scoring, snapshot, tuning, ui, world,
};

fn main() {
    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();
    let control_scheme = if args.iter().any(|a| a == "--touch") {
        ControlScheme::Touch
    } else if args.iter().any(|a| a == "--keyboard") {
        ControlScheme::Keyboard
    } else {
        ControlScheme::default()
    };

    // Load the persisted high score (zero on first run)
    let high_score = HighScore::from_record(&HighScoreRecord::load());

    // Open the per-session event log
    let mut logger = EventLogger::new(EventLogConfig::default());
    let session_timestamp = Local::now().format("%Y%m%d_%H%M%S").to_string();
    logger.start_session(&session_timestamp);

    App::new()
        .add_plugins((
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    // Set scale_factor_override to 1.0 for consistent behavior on HiDPI displays
                    resolution: bevy::window::WindowResolution::new(
                        WORLD_WIDTH as u32,
                        WORLD_HEIGHT as u32,
                    )
                    .with_scale_factor_override(1.0),
                    title: "Jumpgame".into(),
                    resizable: false,
                    ..default()
                }),
                ..default()
            }),
            FrameTimeDiagnosticsPlugin::default(),
        ))
        .insert_resource(ClearColor(CLEAR_COLOR))
        .insert_resource(control_scheme)
        .insert_resource(high_score)
        .insert_resource(logger)
        .insert_resource(EventBus::new())
        .init_resource::<Score>()
        .init_resource::<JumpInput>()
        .init_resource::<GameplayTweaks>()
        .init_resource::<SpawnTimer>()
        .init_resource::<PendingRestart>()
        .init_resource::<BackgroundScroll>()
        .init_resource::<DebugSettings>()
        .init_resource::<SnapshotConfig>()
        .init_resource::<ConfigWatcher>()
        .add_systems(
            Startup,
            (
                tuning::load_global_tuning_system,
                load_assets,
                setup,
                audio::start_music,
                log_startup_config,
            )
                .chain(),
        )
        // Core gameplay chain. Every system here runs once per rendered
        // frame, in every game state: input, jump, gravity, spawning,
        // movement, collisions, scroll, scoring, crash handling.
        .add_systems(
            Update,
            (
                events::update_event_bus_time,
                input::capture_input,
                player::execute_jump,
                player::apply_gravity,
                obstacles::obstacle_gravity,
                obstacles::spawn_obstacles,
                player::apply_velocity,
                player::check_ground_collision,
                obstacles::bounce_obstacles,
                obstacles::despawn_offscreen_obstacles,
                background::scroll_background,
                scoring::tick_score,
                scoring::track_high_score,
                crash::detect_hits,
                crash::process_restart,
                events::flush_events_to_log,
            )
                .chain(),
        )
        // Presentation and ambient systems - no ordering requirements
        .add_systems(
            Update,
            (
                animate_sprites,
                ui::update_score_text,
                ui::update_high_score_text,
                ui::toggle_debug,
                ui::update_debug_text,
                scoring::save_high_score,
                config_watcher::check_config_changes,
                events::log_tick_events,
                snapshot::manual_snapshot,
                snapshot::crash_snapshot,
            ),
        )
        .run();
}

/// Setup the game world
fn setup(mut commands: Commands, assets: Res<GameAssets>, scheme: Res<ControlScheme>) {
    // Camera - orthographic, FixedVertical keeps the full world height
    // visible regardless of window size
    commands.spawn((
        Camera2d,
        Transform::from_xyz(0.0, 0.0, 0.0),
        Projection::Orthographic(OrthographicProjection {
            scaling_mode: ScalingMode::FixedVertical {
                viewport_height: WORLD_HEIGHT,
            },
            ..OrthographicProjection::default_2d()
        }),
    ));

    background::spawn_background(&mut commands, &assets);
    world::spawn_ground(&mut commands, &assets);

    // Player, running right from the first frame
    let animation = SpriteAnimation::new(PlayerClip::RunRight);
    commands.spawn((
        Sprite {
            image: assets.player_sheet.clone(),
            texture_atlas: Some(TextureAtlas {
                layout: assets.player_layout.clone(),
                index: animation.atlas_index(),
            }),
            custom_size: Some(PLAYER_SIZE),
            ..default()
        },
        Transform::from_translation(PLAYER_SPAWN),
        Player,
        Velocity::default(),
        Grounded(false),
        Collider,
        animation,
    ));

    // HUD - screen space, pinned to the top-left corner
    commands.spawn((
        Text::new("Score: 0"),
        TextFont {
            font_size: HUD_FONT_SIZE,
            ..default()
        },
        TextColor(TEXT_PRIMARY),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(SCORE_TEXT_POS.x),
            top: Val::Px(SCORE_TEXT_POS.y),
            ..default()
        },
        ScoreText,
    ));
    commands.spawn((
        Text::new("High Score: 0"),
        TextFont {
            font_size: HUD_FONT_SIZE,
            ..default()
        },
        TextColor(TEXT_PRIMARY),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(HIGH_SCORE_TEXT_POS.x),
            top: Val::Px(HIGH_SCORE_TEXT_POS.y),
            ..default()
        },
        HighScoreText,
    ));

    // Debug overlay - world space, centered over the ground strip
    commands.spawn((
        Text2d::new(""),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        TextColor(TEXT_PRIMARY),
        Transform::from_xyz(0.0, GROUND_POS.y, Z_TEXT),
        Visibility::Hidden,
        DebugText,
    ));

    // The on-screen button only exists in touch sessions
    if *scheme == ControlScheme::Touch {
        ui::spawn_jump_button(&mut commands);
    }
}

/// Record the effective tuning values at session start
fn log_startup_config(tweaks: Res<GameplayTweaks>, mut bus: ResMut<EventBus>) {
    bus.emit(GameEvent::Config(GameConfig {
        player_gravity: tweaks.player_gravity,
        obstacle_gravity: tweaks.obstacle_gravity,
        jump_velocity: tweaks.jump_velocity,
        obstacle_speed: tweaks.obstacle_speed,
        obstacle_bounce: tweaks.obstacle_bounce,
        spawn_interval_ms: tweaks.spawn_interval_ms,
        restart_delay_ms: tweaks.restart_delay_ms,
        scroll_step_px: tweaks.scroll_step_px,
    }));
}
