//! Aviate - tilt-steered flight avoidance game.
//!
//! This module exposes the control loop, the orientation source and the
//! terminal renderer for the binary and for testing.

pub mod build_info;
pub mod config;
pub mod core;
pub mod error;
pub mod flight;
pub mod input;
pub mod obstacles;
pub mod sensor;
pub mod ui;

pub use crate::core::game_loop::{FlightSession, FrameReport, FrameSnapshot};
pub use crate::core::game_state::GameState;
pub use crate::error::{AppError, ConfigError, RecordError, SourceError};
pub use crate::sensor::{OrientationFeed, OrientationSample, OrientationSource};
