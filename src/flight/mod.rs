//! Aircraft pose and the flight controller.
//!
//! The controller is pure: given elapsed time, a tilt sample and the current
//! pose it returns the next pose. Camera placement is derived from the pose
//! by the renderer and is not stored here.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
