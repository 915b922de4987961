//! HUD components and systems (score and high score display)

use bevy::prelude::*;

use crate::scoring::{HighScore, Score};

/// Current score text component
#[derive(Component)]
pub struct ScoreText;

/// High score text component
#[derive(Component)]
pub struct HighScoreText;

/// Update the score display
pub fn update_score_text(score: Res<Score>, mut text_query: Query<&mut Text, With<ScoreText>>) {
    let Ok(mut text) = text_query.single_mut() else {
        return;
    };

    text.0 = format!("Score: {}", score.0);
}

/// Update the high score display
pub fn update_high_score_text(
    high_score: Res<HighScore>,
    mut text_query: Query<&mut Text, With<HighScoreText>>,
) {
    let Ok(mut text) = text_query.single_mut() else {
        return;
    };

    text.0 = format!("High Score: {}", high_score.value);
}
