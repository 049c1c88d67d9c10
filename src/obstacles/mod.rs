//! Birds: spawning on a fixed timer, then moving, scoring and colliding.

pub mod collision;
pub mod spawner;
pub mod types;

pub use collision::{update, CollisionReport};
pub use spawner::SpawnTimer;
pub use types::*;
