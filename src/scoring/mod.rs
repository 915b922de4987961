//! Scoring module - per-frame score, high score tracking and persistence

use bevy::prelude::*;

use crate::events::{EventBus, GameEvent};
use crate::storage::HighScoreRecord;

/// Score for the current run, one point per rendered frame
#[derive(Resource, Default)]
pub struct Score(pub u64);

/// Best score seen so far and a dirty flag for deferred persistence
#[derive(Resource, Default)]
pub struct HighScore {
    pub value: u64, // Authoritative in-memory value, storage is never re-read
    pub dirty: bool,
}

impl HighScore {
    pub fn from_record(record: &HighScoreRecord) -> Self {
        Self {
            value: record.high_score,
            dirty: false,
        }
    }
}

/// Advance the score by one every frame.
/// Crashes and pending restarts do not stop the counter; only the
/// restart reset touches it.
pub fn tick_score(mut score: ResMut<Score>) {
    score.0 += 1;
}

/// Raise the high score whenever the current score passes it.
/// Emits HighScore events to the EventBus for auditability.
pub fn track_high_score(
    score: Res<Score>,
    mut high_score: ResMut<HighScore>,
    mut bus: ResMut<EventBus>,
) {
    if score.0 > high_score.value {
        high_score.value = score.0;
        high_score.dirty = true;
        bus.emit(GameEvent::HighScore {
            value: high_score.value,
        });
    }
}

/// Minimum seconds between high score writes
const SAVE_INTERVAL: f32 = 1.0;

/// Write the high score record out when dirty, at most once per second.
/// A climbing score re-dirties every frame; the disk only sees the
/// latest value each interval.
pub fn save_high_score(
    time: Res<Time>,
    mut high_score: ResMut<HighScore>,
    mut since_save: Local<f32>,
) {
    *since_save += time.delta_secs();
    if *since_save < SAVE_INTERVAL || !high_score.dirty {
        return;
    }
    *since_save = 0.0;

    let record = HighScoreRecord {
        high_score: high_score.value,
    };
    if let Err(e) = record.save() {
        warn!("Failed to save high score: {}", e);
    }
    high_score.dirty = false;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_high_score_from_record_starts_clean() {
        let record = HighScoreRecord { high_score: 420 };
        let high_score = HighScore::from_record(&record);
        assert_eq!(high_score.value, 420);
        assert!(!high_score.dirty);
    }
}
