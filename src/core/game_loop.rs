//! Per-frame driver for a flight session.
//!
//! A `FlightSession` owns everything the control loop mutates: the aircraft,
//! the active obstacle set, score/game-over state, the spawn timer and the
//! game clock. The host calls [`FlightSession::frame`] once per rendered frame
//! with the elapsed time and reads back a [`FrameSnapshot`] to draw.

use crate::core::game_state::GameState;
use crate::flight::{advance, AircraftState};
use crate::obstacles::{self, Obstacle, ObstacleId, SpawnTimer};
use crate::sensor::{OrientationFeed, OrientationSample};
use log::info;
use rand::Rng;

/// What happened during one frame. Empty once the game is over.
///
/// Lets the renderer create and drop per-obstacle visuals without diffing
/// the obstacle set itself.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameReport {
    /// Obstacles spawned this frame
    pub spawned: Vec<ObstacleId>,
    /// Obstacles passed and removed this frame
    pub retired: Vec<ObstacleId>,
    /// Obstacle the aircraft hit, if any
    pub collided: Option<ObstacleId>,
    /// This frame ended the game
    pub game_over_triggered: bool,
    /// Tilt sample the flight update used
    pub sample: OrientationSample,
}

/// Read-only view of a session for the renderer.
#[derive(Debug, Clone, Copy)]
pub struct FrameSnapshot<'a> {
    pub aircraft: &'a AircraftState,
    pub obstacles: &'a [Obstacle],
    pub state: &'a GameState,
    /// Game clock in seconds
    pub elapsed: f64,
}

/// One play session, from takeoff to game over.
#[derive(Debug, Clone)]
pub struct FlightSession {
    aircraft: AircraftState,
    obstacles: Vec<Obstacle>,
    state: GameState,
    spawner: SpawnTimer,
    clock: f64,
    frames: u64,
}

impl Default for FlightSession {
    fn default() -> Self {
        Self::new()
    }
}

impl FlightSession {
    /// Session with the standard spawn interval.
    pub fn new() -> Self {
        Self::with_spawner(SpawnTimer::default())
    }

    pub fn with_spawner(spawner: SpawnTimer) -> Self {
        Self {
            aircraft: AircraftState::new(),
            obstacles: Vec::new(),
            state: GameState::new(),
            spawner,
            clock: 0.0,
            frames: 0,
        }
    }

    /// Run one frame: read input, fire due spawns, fly, then move obstacles
    /// and resolve passes and hits.
    ///
    /// After game over this returns an empty report and changes nothing.
    pub fn frame<F, R>(&mut self, dt: f64, feed: &F, rng: &mut R) -> FrameReport
    where
        F: OrientationFeed + ?Sized,
        R: Rng,
    {
        if self.state.game_over {
            return FrameReport::default();
        }
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };

        let sample = feed.current_orientation();
        let spawned = self.spawner.tick(
            self.clock,
            &self.aircraft,
            &mut self.obstacles,
            &self.state,
            rng,
        );
        self.aircraft = advance(dt, sample, &self.aircraft);
        let collisions = obstacles::update(dt, &self.aircraft, &mut self.obstacles, &mut self.state);

        self.clock += dt;
        self.frames += 1;

        if collisions.game_over_triggered {
            info!(
                "game over after {:.1}s ({} frames), score {}",
                self.clock, self.frames, self.state.score
            );
        }

        FrameReport {
            spawned,
            retired: collisions.retired,
            collided: collisions.collided,
            game_over_triggered: collisions.game_over_triggered,
            sample,
        }
    }

    pub fn snapshot(&self) -> FrameSnapshot<'_> {
        FrameSnapshot {
            aircraft: &self.aircraft,
            obstacles: &self.obstacles,
            state: &self.state,
            elapsed: self.clock,
        }
    }

    pub fn is_over(&self) -> bool {
        self.state.game_over
    }

    pub fn aircraft(&self) -> &AircraftState {
        &self.aircraft
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Game clock in seconds.
    pub fn elapsed(&self) -> f64 {
        self.clock
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Place an obstacle directly, bypassing the spawn timer.
    pub fn insert_obstacle(&mut self, obstacle: Obstacle) {
        self.obstacles.push(obstacle);
    }
}
