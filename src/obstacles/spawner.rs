//! Fixed-interval obstacle spawning on the game clock.

use super::types::{Obstacle, ObstacleId};
use crate::core::constants::*;
use crate::core::game_state::GameState;
use crate::flight::{AircraftState, Vec3};
use rand::Rng;

/// Periodic spawn timer owned by the frame loop.
///
/// Runs on the game clock (summed frame `dt`), so the spawn rate does not
/// depend on the frame rate. The first firing is due at time zero.
#[derive(Debug, Clone)]
pub struct SpawnTimer {
    interval: f64,
    next_due: f64,
    next_id: u64,
}

impl Default for SpawnTimer {
    fn default() -> Self {
        Self::new(SPAWN_INTERVAL_SECONDS)
    }
}

impl SpawnTimer {
    /// Timer firing every `interval` seconds (floored at
    /// `MIN_SPAWN_INTERVAL_SECONDS`).
    pub fn new(interval: f64) -> Self {
        Self {
            interval: interval.max(MIN_SPAWN_INTERVAL_SECONDS),
            next_due: 0.0,
            next_id: 0,
        }
    }

    pub fn interval(&self) -> f64 {
        self.interval
    }

    /// Game-clock time of the next firing.
    pub fn next_due(&self) -> f64 {
        self.next_due
    }

    /// Fire if a spawn is due at `now`.
    ///
    /// At most one obstacle per call, rescheduled one interval later. If the
    /// clock has run more than a full interval past the schedule (a stalled
    /// frame), the missed firings are dropped and the next one is due one
    /// interval after `now`. Once the game is over this is a no-op.
    pub fn tick<R: Rng>(
        &mut self,
        now: f64,
        aircraft: &AircraftState,
        obstacles: &mut Vec<Obstacle>,
        state: &GameState,
        rng: &mut R,
    ) -> Vec<ObstacleId> {
        let mut spawned = Vec::new();
        if state.game_over {
            return spawned;
        }
        if now < self.next_due {
            return spawned;
        }

        let obstacle = self.spawn(aircraft, rng);
        spawned.push(obstacle.id);
        obstacles.push(obstacle);

        self.next_due += self.interval;
        if self.next_due <= now {
            self.next_due = now + self.interval;
        }
        spawned
    }

    fn spawn<R: Rng>(&mut self, aircraft: &AircraftState, rng: &mut R) -> Obstacle {
        let id = ObstacleId(self.next_id);
        self.next_id += 1;

        let offset = Vec3::new(
            rng.gen_range(-SPAWN_X_SPREAD..SPAWN_X_SPREAD),
            rng.gen_range(SPAWN_Y_MIN..SPAWN_Y_MAX),
            SPAWN_DISTANCE,
        );
        Obstacle::new(id, aircraft.position + offset)
    }
}
