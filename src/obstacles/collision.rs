//! Obstacle movement, scoring and collision detection.

use super::types::{Obstacle, ObstacleId};
use crate::core::constants::*;
use crate::core::game_state::GameState;
use crate::flight::AircraftState;

/// What one collision pass did, for the renderer's bookkeeping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollisionReport {
    /// Obstacles that passed behind the aircraft and were removed (one point each).
    pub retired: Vec<ObstacleId>,
    /// First obstacle found within collision range this pass.
    pub collided: Option<ObstacleId>,
    /// True only on the pass that ended the game.
    pub game_over_triggered: bool,
}

/// Advance every obstacle by `dt` and resolve passes and hits.
///
/// Per obstacle the pass check runs first, so an obstacle that retires this
/// pass cannot also collide. A hit ends the game and leaves the obstacle in
/// place; the rest of the set still finishes this pass. If the game was
/// already over on entry nothing is touched.
pub fn update(
    dt: f64,
    aircraft: &AircraftState,
    obstacles: &mut Vec<Obstacle>,
    state: &mut GameState,
) -> CollisionReport {
    let mut report = CollisionReport::default();
    if state.game_over {
        return report;
    }

    let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
    let pass_line = aircraft.position.z - PASS_THRESHOLD;

    obstacles.retain_mut(|obstacle| {
        if !obstacle.alive {
            return false;
        }

        obstacle.position.z -= OBSTACLE_SPEED * dt;

        if obstacle.position.z < pass_line {
            obstacle.alive = false;
            state.record_pass();
            report.retired.push(obstacle.id);
            return false;
        }

        if obstacle.position.distance(aircraft.position) < COLLISION_RADIUS {
            report.collided.get_or_insert(obstacle.id);
            if state.end() {
                report.game_over_triggered = true;
            }
        }
        true
    });

    report
}
