//! Aircraft data structures.

use std::ops::{Add, Sub};

/// A point or offset in world space. `z` is the forward axis.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Euclidean distance between two points.
    pub fn distance(self, other: Vec3) -> f64 {
        (self - other).length()
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

/// Aircraft pose.
///
/// Position is kept inside `[MIN_X, MAX_X] x [MIN_Y, MAX_Y]` by the flight
/// controller; `z` only grows. Rotations are in degrees and purely cosmetic.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AircraftState {
    pub position: Vec3,
    /// Pitch, follows vertical tilt.
    pub rotation_x: f64,
    /// Roll, follows horizontal tilt.
    pub rotation_z: f64,
}

impl AircraftState {
    /// Aircraft at the world origin, level.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        let a = Vec3::new(0.0, 0.0, 0.0);
        let b = Vec3::new(3.0, 4.0, 0.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-12);
        assert!((b.distance(a) - 5.0).abs() < 1e-12);
        assert_eq!(a.distance(a), 0.0);
    }

    #[test]
    fn test_add_sub() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(0.5, -1.0, 10.0);
        assert_eq!(a + b - b, a);
    }

    #[test]
    fn test_new_aircraft_at_origin() {
        let aircraft = AircraftState::new();
        assert_eq!(aircraft.position, Vec3::ZERO);
        assert_eq!(aircraft.rotation_x, 0.0);
        assert_eq!(aircraft.rotation_z, 0.0);
    }
}
