//! Game event logging system for analytics
//!
//! Provides a compact text format for logging game events. Systems emit
//! to the EventBus; the logger drains it into a per-session file.

mod bus;
mod format;
mod logger;
mod types;

pub use bus::{BusEvent, EventBus, update_event_bus_time};
pub use format::{parse_event, serialize_event};
pub use logger::{EventBuffer, EventLogConfig, EventLogger, flush_events_to_log, log_tick_events};
pub use types::{GameConfig, GameEvent};
