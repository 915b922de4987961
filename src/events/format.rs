//! Compact text format for game event serialization
//!
//! Format: `T:NNNNN|CODE|data...`
//! - T:NNNNN = timestamp in milliseconds (5 digits, wraps at 99999)
//! - CODE = event type code
//! - data = pipe-separated values specific to event type
//!
//! Examples:
//! ```text
//! T:00000|SE|3f2a9c1e-...|2026-08-22T10:15:00Z
//! T:01000|SP|1
//! T:01450|J|-300.0,-212.0
//! T:05200|CR|312|-295.0,-220.0
//! T:06200|RS|312
//! ```
//!
//! Tick events (sampled):
//! ```text
//! T:00100|T|6|-300.0,-212.0|0.0,-35.0|2|6
//!          ^frame|player_pos|player_vel|obstacles|score
//! ```

use super::types::{GameConfig, GameEvent};

/// Format a position tuple
fn fmt_pos(pos: (f32, f32)) -> String {
    format!("{:.1},{:.1}", pos.0, pos.1)
}

/// Serialize a GameEvent to compact text format
pub fn serialize_event(time_ms: u32, event: &GameEvent) -> String {
    let ts = format!("T:{:05}", time_ms % 100000);
    let code = event.type_code();

    let data = match event {
        GameEvent::SessionStart {
            session_id,
            timestamp,
        } => {
            format!("{}|{}", session_id, timestamp)
        }
        GameEvent::Config(config) => {
            // Serialize config as compact JSON for easy parsing
            serde_json::to_string(config).unwrap_or_else(|_| "{}".to_string())
        }
        GameEvent::Jump { pos } => fmt_pos(*pos),
        GameEvent::Spawn { total } => total.to_string(),
        GameEvent::Crash {
            score,
            obstacle_pos,
        } => {
            format!("{}|{}", score, fmt_pos(*obstacle_pos))
        }
        GameEvent::Restart { discarded_score } => discarded_score.to_string(),
        GameEvent::HighScore { value } => value.to_string(),
        GameEvent::Tick {
            frame,
            player_pos,
            player_vel,
            obstacle_count,
            score,
        } => {
            format!(
                "{}|{}|{}|{}|{}",
                frame,
                fmt_pos(*player_pos),
                fmt_pos(*player_vel),
                obstacle_count,
                score
            )
        }
    };

    format!("{}|{}|{}", ts, code, data)
}

/// Parse a line back into timestamp and event (optional, for analysis tools)
pub fn parse_event(line: &str) -> Option<(u32, GameEvent)> {
    let parts: Vec<&str> = line.split('|').collect();
    if parts.len() < 3 {
        return None;
    }

    // Parse timestamp
    let ts_str = parts[0].strip_prefix("T:")?;
    let time_ms: u32 = ts_str.parse().ok()?;

    let code = parts[1];
    let data = &parts[2..];

    let event = match code {
        "SE" if data.len() >= 2 => GameEvent::SessionStart {
            session_id: data[0].to_string(),
            timestamp: data[1].to_string(),
        },
        "CF" if !data.is_empty() => {
            // Config is serialized as JSON, rejoin with | in case JSON contains |
            let json_str = data.join("|");
            let config: GameConfig = serde_json::from_str(&json_str).ok()?;
            GameEvent::Config(config)
        }
        "J" if !data.is_empty() => GameEvent::Jump {
            pos: parse_pos(data[0])?,
        },
        "SP" if !data.is_empty() => GameEvent::Spawn {
            total: data[0].parse().ok()?,
        },
        "CR" if data.len() >= 2 => GameEvent::Crash {
            score: data[0].parse().ok()?,
            obstacle_pos: parse_pos(data[1])?,
        },
        "RS" if !data.is_empty() => GameEvent::Restart {
            discarded_score: data[0].parse().ok()?,
        },
        "HS" if !data.is_empty() => GameEvent::HighScore {
            value: data[0].parse().ok()?,
        },
        "T" if data.len() >= 5 => GameEvent::Tick {
            frame: data[0].parse().ok()?,
            player_pos: parse_pos(data[1])?,
            player_vel: parse_pos(data[2])?,
            obstacle_count: data[3].parse().ok()?,
            score: data[4].parse().ok()?,
        },
        _ => return None,
    };

    Some((time_ms, event))
}

fn parse_pos(s: &str) -> Option<(f32, f32)> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != 2 {
        return None;
    }
    Some((parts[0].parse().ok()?, parts[1].parse().ok()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_crash() {
        let event = GameEvent::Crash {
            score: 312,
            obstacle_pos: (-295.0, -220.0),
        };
        let line = serialize_event(5200, &event);
        let (ts, parsed) = parse_event(&line).unwrap();
        assert_eq!(ts, 5200);
        if let GameEvent::Crash {
            score,
            obstacle_pos,
        } = parsed
        {
            assert_eq!(score, 312);
            assert!((obstacle_pos.0 - -295.0).abs() < 0.1);
        } else {
            panic!("Wrong event type");
        }
    }

    #[test]
    fn test_roundtrip_tick() {
        let event = GameEvent::Tick {
            frame: 150,
            player_pos: (-300.0, -212.0),
            player_vel: (0.0, -35.5),
            obstacle_count: 3,
            score: 150,
        };
        let line = serialize_event(2500, &event);
        assert!(line.contains("|T|"));
        let (_, parsed) = parse_event(&line).unwrap();
        if let GameEvent::Tick {
            frame,
            player_vel,
            obstacle_count,
            score,
            ..
        } = parsed
        {
            assert_eq!(frame, 150);
            assert!((player_vel.1 - -35.5).abs() < 0.1);
            assert_eq!(obstacle_count, 3);
            assert_eq!(score, 150);
        } else {
            panic!("Wrong event type");
        }
    }

    #[test]
    fn test_roundtrip_config() {
        let event = GameEvent::Config(GameConfig {
            player_gravity: 600.0,
            obstacle_gravity: 300.0,
            jump_velocity: 350.0,
            obstacle_speed: 200.0,
            obstacle_bounce: 0.2,
            spawn_interval_ms: 1000,
            restart_delay_ms: 1000,
            scroll_step_px: 1.0,
        });
        let line = serialize_event(0, &event);
        let (_, parsed) = parse_event(&line).unwrap();
        if let GameEvent::Config(config) = parsed {
            assert_eq!(config.spawn_interval_ms, 1000);
            assert!((config.jump_velocity - 350.0).abs() < 0.1);
        } else {
            panic!("Wrong event type");
        }
    }

    #[test]
    fn test_timestamp_wraps_at_five_digits() {
        let line = serialize_event(123456, &GameEvent::Spawn { total: 9 });
        assert!(line.starts_with("T:23456|SP|9"));
    }

    #[test]
    fn test_malformed_lines_rejected() {
        assert!(parse_event("garbage").is_none());
        assert!(parse_event("T:00010|ZZ|1").is_none());
        assert!(parse_event("T:00010|CR|only_score").is_none());
    }
}
