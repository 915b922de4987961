//! Sprite sheet animation for the runner
//!
//! The player sheet is a single row of 9 frames: 0-3 run left,
//! 4 faces the camera, 5-8 run right. Clips cycle at 10 fps.

use bevy::prelude::*;

use crate::constants::ANIMATION_FPS;

/// Named clips on the player sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerClip {
    RunLeft,
    Idle,
    RunRight,
}

impl PlayerClip {
    /// First and last atlas indices of the clip (inclusive)
    pub fn frames(self) -> (usize, usize) {
        match self {
            PlayerClip::RunLeft => (0, 3),
            PlayerClip::Idle => (4, 4),
            PlayerClip::RunRight => (5, 8),
        }
    }

    pub fn len(self) -> usize {
        let (first, last) = self.frames();
        last - first + 1
    }
}

/// Per-entity animation state driving the sprite's atlas index
#[derive(Component)]
pub struct SpriteAnimation {
    pub clip: PlayerClip,
    /// Frame offset within the current clip
    pub frame: usize,
    pub timer: Timer,
}

impl SpriteAnimation {
    pub fn new(clip: PlayerClip) -> Self {
        Self {
            clip,
            frame: 0,
            timer: Timer::from_seconds(1.0 / ANIMATION_FPS, TimerMode::Repeating),
        }
    }

    /// Switch clips, restarting only when the clip actually changes
    pub fn play(&mut self, clip: PlayerClip) {
        if self.clip != clip {
            self.clip = clip;
            self.frame = 0;
            self.timer.reset();
        }
    }

    /// Advance the frame timer
    pub fn tick(&mut self, delta: std::time::Duration) {
        self.timer.tick(delta);
        if self.timer.just_finished() {
            self.frame = (self.frame + 1) % self.clip.len();
        }
    }

    /// Absolute index into the sheet for the current frame
    pub fn atlas_index(&self) -> usize {
        self.clip.frames().0 + self.frame
    }
}

/// Step animations and sync the result onto sprite atlases
pub fn animate_sprites(time: Res<Time>, mut query: Query<(&mut SpriteAnimation, &mut Sprite)>) {
    for (mut anim, mut sprite) in &mut query {
        anim.tick(time.delta());
        let index = anim.atlas_index();
        if let Some(atlas) = sprite.texture_atlas.as_mut()
            && atlas.index != index
        {
            atlas.index = index;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_clip_frame_ranges() {
        assert_eq!(PlayerClip::RunLeft.frames(), (0, 3));
        assert_eq!(PlayerClip::Idle.frames(), (4, 4));
        assert_eq!(PlayerClip::RunRight.frames(), (5, 8));
        assert_eq!(PlayerClip::RunRight.len(), 4);
    }

    #[test]
    fn test_run_clip_cycles_at_ten_fps() {
        let mut anim = SpriteAnimation::new(PlayerClip::RunRight);
        assert_eq!(anim.atlas_index(), 5);

        anim.tick(Duration::from_millis(100));
        assert_eq!(anim.atlas_index(), 6);

        anim.tick(Duration::from_millis(100));
        anim.tick(Duration::from_millis(100));
        assert_eq!(anim.atlas_index(), 8);

        // Wraps back to the first frame of the clip
        anim.tick(Duration::from_millis(100));
        assert_eq!(anim.atlas_index(), 5);
    }

    #[test]
    fn test_idle_clip_holds_single_frame() {
        let mut anim = SpriteAnimation::new(PlayerClip::Idle);
        for _ in 0..10 {
            anim.tick(Duration::from_millis(100));
        }
        assert_eq!(anim.atlas_index(), 4);
    }

    #[test]
    fn test_play_same_clip_does_not_restart() {
        let mut anim = SpriteAnimation::new(PlayerClip::RunLeft);
        anim.tick(Duration::from_millis(100));
        assert_eq!(anim.frame, 1);

        anim.play(PlayerClip::RunLeft);
        assert_eq!(anim.frame, 1);

        anim.play(PlayerClip::Idle);
        assert_eq!(anim.frame, 0);
        assert_eq!(anim.atlas_index(), 4);
    }
}
