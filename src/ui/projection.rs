//! Pinhole projection from the chase camera onto terminal cells.

use crate::core::constants::CAMERA_FOV_DEGREES;
use crate::flight::{camera_follow, AircraftState, Vec3};

/// Width of a terminal cell relative to its height.
pub const CELL_ASPECT: f64 = 0.5;

/// Points closer to the camera than this are not drawn.
pub const NEAR_PLANE: f64 = 0.5;

/// A projected point in cell coordinates, relative to the drawing area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub col: u16,
    pub row: u16,
    /// Distance along the view axis
    pub depth: f64,
}

/// Camera looking straight down +z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    /// Vertical field of view in degrees
    pub fov_y: f64,
}

impl Camera {
    pub fn following(aircraft: &AircraftState) -> Self {
        Self {
            position: camera_follow(aircraft),
            fov_y: CAMERA_FOV_DEGREES,
        }
    }

    /// Project `point` into a `width` x `height` cell area.
    ///
    /// Returns `None` for points behind the near plane or outside the view.
    pub fn project(&self, point: Vec3, width: u16, height: u16) -> Option<ScreenPoint> {
        if width == 0 || height == 0 {
            return None;
        }
        let rel = point - self.position;
        if rel.z < NEAR_PLANE {
            return None;
        }

        let focal = 1.0 / (self.fov_y.to_radians() / 2.0).tan();
        let aspect = (f64::from(width) * CELL_ASPECT) / f64::from(height);
        let ndc_x = rel.x * focal / (rel.z * aspect);
        let ndc_y = rel.y * focal / rel.z;
        if !(-1.0..=1.0).contains(&ndc_x) || !(-1.0..=1.0).contains(&ndc_y) {
            return None;
        }

        let col = ((ndc_x + 1.0) / 2.0 * f64::from(width)).floor() as u16;
        let row = ((1.0 - ndc_y) / 2.0 * f64::from(height)).floor() as u16;
        Some(ScreenPoint {
            col: col.min(width - 1),
            row: row.min(height - 1),
            depth: rel.z,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> Camera {
        Camera {
            position: Vec3::ZERO,
            fov_y: 60.0,
        }
    }

    #[test]
    fn test_center_of_view() {
        let p = camera().project(Vec3::new(0.0, 0.0, 10.0), 80, 24).unwrap();
        assert_eq!(p.col, 40);
        assert_eq!(p.row, 12);
        assert!((p.depth - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_behind_camera_is_hidden() {
        assert!(camera().project(Vec3::new(0.0, 0.0, -5.0), 80, 24).is_none());
        assert!(camera().project(Vec3::new(0.0, 0.0, 0.1), 80, 24).is_none());
    }

    #[test]
    fn test_outside_frustum_is_hidden() {
        assert!(camera().project(Vec3::new(0.0, 100.0, 10.0), 80, 24).is_none());
        assert!(camera().project(Vec3::new(-100.0, 0.0, 10.0), 80, 24).is_none());
    }

    #[test]
    fn test_farther_points_converge_on_center() {
        let near = camera().project(Vec3::new(3.0, 2.0, 10.0), 80, 24).unwrap();
        let far = camera().project(Vec3::new(3.0, 2.0, 60.0), 80, 24).unwrap();
        assert!(near.col > far.col && far.col >= 40);
        assert!(near.row < far.row && far.row <= 12);
    }

    #[test]
    fn test_aircraft_sits_below_center_of_chase_view() {
        let aircraft = AircraftState::at(Vec3::new(2.0, 1.0, 100.0));
        let p = Camera::following(&aircraft)
            .project(aircraft.position, 80, 24)
            .unwrap();
        assert_eq!(p.col, 40);
        assert!(p.row > 12);
        assert!((p.depth - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_area() {
        assert!(camera().project(Vec3::new(0.0, 0.0, 10.0), 0, 24).is_none());
    }
}
