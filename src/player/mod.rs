//! Player module - components and physics systems

mod components;
mod physics;

pub use components::*;
pub use physics::*;
