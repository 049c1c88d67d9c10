//! Obstacle data structures.

use crate::flight::Vec3;
use std::fmt;

/// Opaque per-session obstacle identity. Ids increase in spawn order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObstacleId(pub u64);

impl fmt::Display for ObstacleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bird#{}", self.0)
    }
}

/// A bird flying toward the aircraft.
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    pub id: ObstacleId,
    pub position: Vec3,
    /// Cleared when the obstacle is retired. Obstacles in the active set are
    /// always alive.
    pub alive: bool,
}

impl Obstacle {
    pub fn new(id: ObstacleId, position: Vec3) -> Self {
        Self {
            id,
            position,
            alive: true,
        }
    }
}
