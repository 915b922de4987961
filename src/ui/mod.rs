//! UI module - HUD text, jump button, and debug overlay

mod button;
mod debug;
mod hud;

pub use button::*;
pub use debug::*;
pub use hud::*;
