//! Headless App Builder
//!
//! Provides a reusable builder for creating headless Bevy apps that run
//! the full gameplay loop without a window, renderer, or audio device.
//! Used by the integration tests below.

use bevy::app::ScheduleRunnerPlugin;
use bevy::prelude::*;
use std::time::Duration;

use crate::background::{BackgroundScroll, ScrollingTile, scroll_background};
use crate::constants::*;
use crate::crash::{PendingRestart, detect_hits, process_restart};
use crate::events::{EventBus, flush_events_to_log, update_event_bus_time};
use crate::input::JumpInput;
use crate::obstacles::{
    Obstacle, SpawnTimer, bounce_obstacles, despawn_offscreen_obstacles, obstacle_gravity,
    spawn_obstacles,
};
use crate::player::{
    Grounded, Player, Velocity, apply_gravity, apply_velocity, check_ground_collision, execute_jump,
};
use crate::scoring::{HighScore, Score, tick_score, track_high_score};
use crate::tuning::{self, GameplayTweaks};
use crate::world::{Collider, Ground};

/// Builder for creating headless Bevy apps
pub struct HeadlessAppBuilder {
    fps: f32,
    manual_time: Option<Duration>,
    minimal_threads: bool,
}

impl HeadlessAppBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self {
            fps: 60.0,
            manual_time: None,
            minimal_threads: false,
        }
    }

    /// Set the target FPS (default: 60)
    pub fn with_fps(mut self, fps: f32) -> Self {
        self.fps = fps;
        self
    }

    /// Advance time by a fixed duration per update instead of wall clock.
    /// Makes frame-coupled behavior (score, scroll, timers) deterministic.
    pub fn with_manual_time(mut self, step: Duration) -> Self {
        self.manual_time = Some(step);
        self
    }

    /// Enable minimal thread mode (task pools = 1)
    ///
    /// Use this when running many apps in parallel to avoid hitting OS thread limits.
    pub fn with_minimal_threads(mut self) -> Self {
        self.minimal_threads = true;
        self
    }

    /// Build the app with minimal plugins, gameplay resources, and the
    /// full Update chain.
    ///
    /// The returned app has:
    /// - MinimalPlugins with ScheduleRunnerPlugin
    /// - TransformPlugin for collision detection
    /// - Gameplay resources (Score, HighScore, GameplayTweaks, EventBus, etc.)
    /// - The same gameplay system ordering the windowed binary uses
    ///
    /// Callers should add a Startup system that spawns entities, or use
    /// `build_with_scene` for the standard player/ground/tiles setup.
    pub fn build(self) -> App {
        let mut app = App::new();

        if self.minimal_threads {
            app.add_plugins(
                MinimalPlugins
                    .set(ScheduleRunnerPlugin::run_loop(Duration::from_secs_f32(
                        1.0 / self.fps,
                    )))
                    .set(TaskPoolPlugin {
                        task_pool_options: TaskPoolOptions::with_num_threads(1),
                    }),
            );
        } else {
            app.add_plugins(MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(
                Duration::from_secs_f32(1.0 / self.fps),
            )));
        }

        // Transform plugin for GlobalTransform propagation (needed for collision)
        app.add_plugins(bevy::transform::TransformPlugin);

        if let Some(step) = self.manual_time {
            app.insert_resource(TimeUpdateStrategy::ManualDuration(step));
        }

        app.init_resource::<GameplayTweaks>();
        let _ = tuning::apply_global_tuning(&mut app.world_mut().resource_mut::<GameplayTweaks>());
        app.init_resource::<Score>();
        app.init_resource::<HighScore>();
        app.init_resource::<JumpInput>();
        app.init_resource::<SpawnTimer>();
        app.init_resource::<PendingRestart>();
        app.init_resource::<BackgroundScroll>();
        app.insert_resource(EventBus::new());

        app.add_systems(
            Update,
            (
                update_event_bus_time,
                execute_jump,
                apply_gravity,
                obstacle_gravity,
                spawn_obstacles,
                apply_velocity,
                check_ground_collision,
                bounce_obstacles,
                despawn_offscreen_obstacles,
                scroll_background,
                tick_score,
                track_high_score,
                detect_hits,
                process_restart,
                flush_events_to_log,
            )
                .chain(),
        );

        app
    }

    /// Build and spawn the standard scene (player, ground, scroll tiles)
    pub fn build_with_scene(self) -> App {
        let mut app = self.build();
        app.add_systems(Startup, sim_setup);
        app
    }
}

/// Setup system for simulation: the standard scene without textures
pub fn sim_setup(mut commands: Commands) {
    commands.spawn((
        Transform::from_translation(PLAYER_SPAWN),
        Sprite {
            custom_size: Some(PLAYER_SIZE),
            ..default()
        },
        Player,
        Velocity::default(),
        Grounded(false),
        Collider,
    ));

    commands.spawn((
        Transform::from_translation(GROUND_POS),
        Sprite {
            custom_size: Some(GROUND_SIZE),
            ..default()
        },
        Ground,
    ));

    for slot in 0..2u32 {
        commands.spawn((
            Transform::from_xyz(-(slot as f32) * WORLD_WIDTH, 0.0, Z_SCROLL),
            Sprite {
                custom_size: Some(Vec2::new(WORLD_WIDTH, WORLD_HEIGHT)),
                ..default()
            },
            ScrollingTile { slot: slot as f32 },
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{EventBuffer, GameEvent, parse_event};

    const FRAME: Duration = Duration::from_millis(20);

    fn test_app() -> App {
        HeadlessAppBuilder::new()
            .with_manual_time(FRAME)
            .build_with_scene()
    }

    fn run_frames(app: &mut App, frames: usize) {
        for _ in 0..frames {
            app.update();
        }
    }

    /// Step until the player has fallen from the spawn point and settled
    fn settle_player(app: &mut App) {
        run_frames(app, 60);
    }

    fn player_state(app: &mut App) -> (Vec3, Vec2, bool) {
        let mut query = app
            .world_mut()
            .query_filtered::<(&Transform, &Velocity, &Grounded), With<Player>>();
        let (transform, velocity, grounded) = query.single(app.world()).unwrap();
        (transform.translation, velocity.0, grounded.0)
    }

    fn obstacle_count(app: &mut App) -> usize {
        let mut query = app.world_mut().query_filtered::<Entity, With<Obstacle>>();
        query.iter(app.world()).count()
    }

    fn score(app: &App) -> u64 {
        app.world().resource::<Score>().0
    }

    fn request_jump(app: &mut App, requested: bool) {
        app.world_mut().resource_mut::<JumpInput>().requested = requested;
    }

    /// Spawn a motionless obstacle resting on the ground at the given x
    fn plant_obstacle(app: &mut App, x: f32) -> Entity {
        app.world_mut()
            .spawn((
                Transform::from_translation(Vec3::new(x, OBSTACLE_SPAWN.y, Z_OBSTACLE)),
                Sprite {
                    custom_size: Some(OBSTACLE_SIZE),
                    ..default()
                },
                Obstacle,
                Velocity::default(),
            ))
            .id()
    }

    fn event_count(app: &App, matcher: fn(&GameEvent) -> bool) -> usize {
        app.world()
            .resource::<EventBus>()
            .processed()
            .iter()
            .filter(|be| matcher(&be.event))
            .count()
    }

    #[test]
    fn test_builder_creates_app() {
        let app = HeadlessAppBuilder::new().build();
        assert!(app.world().contains_resource::<Score>());
        assert!(app.world().contains_resource::<GameplayTweaks>());
        assert!(app.world().contains_resource::<EventBus>());
    }

    #[test]
    fn test_minimal_threads_creates_app() {
        let app = HeadlessAppBuilder::new().with_minimal_threads().build();
        assert!(app.world().contains_resource::<Score>());
    }

    #[test]
    fn test_score_counts_every_frame() {
        let mut app = test_app();
        run_frames(&mut app, 100);
        assert_eq!(score(&app), 100);
    }

    #[test]
    fn test_scroll_offset_advances_every_frame() {
        let mut app = test_app();
        run_frames(&mut app, 100);
        let scroll = app.world().resource::<BackgroundScroll>();
        assert_eq!(scroll.offset, -100.0);
    }

    #[test]
    fn test_player_falls_and_settles_on_ground() {
        let mut app = test_app();
        settle_player(&mut app);

        let (pos, vel, grounded) = player_state(&mut app);
        assert!(grounded);
        assert_eq!(vel.y, 0.0);
        let rest_y = GROUND_TOP_Y + PLAYER_SIZE.y / 2.0 - COLLISION_EPSILON;
        assert!(
            (pos.y - rest_y).abs() < 0.01,
            "player settled at {} instead of {}",
            pos.y,
            rest_y
        );
    }

    #[test]
    fn test_jump_applies_upward_velocity_when_grounded() {
        let mut app = test_app();
        settle_player(&mut app);

        request_jump(&mut app, true);
        app.update();
        request_jump(&mut app, false);

        let (_, vel, _) = player_state(&mut app);
        assert_eq!(vel.y, JUMP_VELOCITY);
        assert_eq!(event_count(&app, |e| matches!(e, GameEvent::Jump { .. })), 1);
    }

    #[test]
    fn test_jump_ignored_in_midair() {
        let mut app = test_app();
        settle_player(&mut app);

        request_jump(&mut app, true);
        app.update();
        // Still rising; a second request must not reset the velocity
        app.update();

        let (_, vel, _) = player_state(&mut app);
        assert!(vel.y < JUMP_VELOCITY);
        assert_eq!(event_count(&app, |e| matches!(e, GameEvent::Jump { .. })), 1);
    }

    #[test]
    fn test_jump_arc_returns_to_ground() {
        let mut app = test_app();
        settle_player(&mut app);

        request_jump(&mut app, true);
        app.update();
        request_jump(&mut app, false);

        // 350 up against 600 down is ~1.17s of air time
        run_frames(&mut app, 80);
        let (_, _, grounded) = player_state(&mut app);
        assert!(grounded);
    }

    #[test]
    fn test_spawner_cadence_one_per_interval() {
        let mut app = test_app();

        // First update is a zero-delta warmup, so N updates cover (N-1) frames
        run_frames(&mut app, 51);
        assert_eq!(obstacle_count(&mut app), 1);
        assert_eq!(app.world().resource::<SpawnTimer>().spawned, 1);

        run_frames(&mut app, 50);
        assert_eq!(obstacle_count(&mut app), 2);
        assert_eq!(app.world().resource::<SpawnTimer>().spawned, 2);
    }

    #[test]
    fn test_spawned_obstacle_moves_left() {
        let mut app = test_app();
        run_frames(&mut app, 51);

        let mut query = app
            .world_mut()
            .query_filtered::<(&Transform, &Velocity), With<Obstacle>>();
        let (transform, velocity) = query.single(app.world()).unwrap();
        assert_eq!(velocity.0.x, -OBSTACLE_SPEED);
        assert!(transform.translation.x < OBSTACLE_SPAWN.x);
    }

    #[test]
    fn test_obstacle_despawns_past_left_edge() {
        let mut app = test_app();
        run_frames(&mut app, 51);
        assert_eq!(obstacle_count(&mut app), 1);

        // 816 world units at 200 u/s is ~4.1s; by 6s it must be gone
        run_frames(&mut app, 300);
        let mut query = app
            .world_mut()
            .query_filtered::<&Transform, With<Obstacle>>();
        for transform in query.iter(app.world()) {
            assert!(transform.translation.x >= -WORLD_WIDTH / 2.0 - OBSTACLE_SIZE.x / 2.0);
        }
    }

    #[test]
    fn test_dropped_obstacle_bounces_then_rests() {
        let mut app = test_app();
        app.update();

        let entity = app
            .world_mut()
            .spawn((
                Transform::from_xyz(0.0, -100.0, Z_OBSTACLE),
                Sprite {
                    custom_size: Some(OBSTACLE_SIZE),
                    ..default()
                },
                Obstacle,
                Velocity::default(),
            ))
            .id();

        run_frames(&mut app, 150);

        let transform = app.world().get::<Transform>(entity).unwrap();
        let velocity = app.world().get::<Velocity>(entity).unwrap();
        let rest_y = GROUND_TOP_Y + OBSTACLE_SIZE.y / 2.0;
        assert!((transform.translation.y - rest_y).abs() < 0.01);
        assert_eq!(velocity.0.y, 0.0);
    }

    #[test]
    fn test_crash_pauses_nothing_but_schedules_restart() {
        let mut app = test_app();
        settle_player(&mut app);

        let (player_pos, _, _) = player_state(&mut app);
        plant_obstacle(&mut app, player_pos.x);
        app.update();

        assert!(app.world().resource::<PendingRestart>().is_pending());
        assert_eq!(
            event_count(&app, |e| matches!(e, GameEvent::Crash { .. })),
            1
        );

        // Score keeps counting and the spawner keeps running while pending
        let score_at_crash = score(&app);
        let spawned_at_crash = app.world().resource::<SpawnTimer>().spawned;
        run_frames(&mut app, 30);
        assert_eq!(score(&app), score_at_crash + 30);
        assert!(app.world().resource::<SpawnTimer>().spawned >= spawned_at_crash);
        assert!(app.world().resource::<PendingRestart>().is_pending());
    }

    #[test]
    fn test_overlap_while_pending_does_not_retrigger() {
        let mut app = test_app();
        settle_player(&mut app);

        let (player_pos, _, _) = player_state(&mut app);
        plant_obstacle(&mut app, player_pos.x);

        // 40 frames of continuous overlap, well inside the restart delay
        run_frames(&mut app, 40);
        assert_eq!(
            event_count(&app, |e| matches!(e, GameEvent::Crash { .. })),
            1
        );
    }

    #[test]
    fn test_restart_resets_score_and_nothing_else() {
        let mut app = test_app();
        settle_player(&mut app);

        // A second obstacle well clear of the player, to confirm restarts
        // never touch the obstacle set
        let bystander = plant_obstacle(&mut app, 300.0);

        let (player_pos, _, _) = player_state(&mut app);
        let obstacle = plant_obstacle(&mut app, player_pos.x);
        app.update();
        assert!(app.world().resource::<PendingRestart>().is_pending());

        // Clear the overlap so the next cycle does not crash again
        app.world_mut().despawn(obstacle);

        let offset_at_crash = app.world().resource::<BackgroundScroll>().offset;
        let mut restarted = false;
        for _ in 0..60 {
            app.update();
            if event_count(&app, |e| matches!(e, GameEvent::Restart { .. })) > 0 {
                restarted = true;
                break;
            }
        }

        assert!(restarted);
        assert_eq!(score(&app), 0);
        assert!(!app.world().resource::<PendingRestart>().is_pending());
        assert!(app.world().get::<Obstacle>(bystander).is_some());
        // Scroll kept advancing through the whole sequence
        assert!(app.world().resource::<BackgroundScroll>().offset < offset_at_crash);
    }

    #[test]
    fn test_session_transcript_parses_back() {
        let mut app = test_app();
        settle_player(&mut app);
        request_jump(&mut app, true);
        app.update();
        request_jump(&mut app, false);
        run_frames(&mut app, 10);

        let mut buffer = EventBuffer::new();
        buffer.start_session("20260822_100000");
        let drained: Vec<(u32, GameEvent)> = app
            .world()
            .resource::<EventBus>()
            .processed()
            .iter()
            .map(|be| (be.time_ms, be.event.clone()))
            .collect();
        buffer.import_events(drained);

        // Session start, one spawn, the jump, plus high score updates
        let transcript = buffer.serialize();
        assert!(transcript.contains("|SE|"));
        assert!(transcript.contains("|SP|"));
        assert!(transcript.contains("|J|"));
        for line in transcript.lines() {
            assert!(parse_event(line).is_some(), "unparseable line: {}", line);
        }
    }

    #[test]
    fn test_high_score_survives_restart() {
        let mut app = test_app();
        settle_player(&mut app);
        let best_before = score(&app);
        assert_eq!(app.world().resource::<HighScore>().value, best_before);

        let (player_pos, _, _) = player_state(&mut app);
        let obstacle = plant_obstacle(&mut app, player_pos.x);
        app.update();
        app.world_mut().despawn(obstacle);
        run_frames(&mut app, 55);

        // The run resumed from zero; the best value never decreases
        assert!(score(&app) < best_before);
        assert!(app.world().resource::<HighScore>().value >= best_before);
        assert!(
            event_count(&app, |e| matches!(e, GameEvent::HighScore { .. })) > 0
        );
    }
}
