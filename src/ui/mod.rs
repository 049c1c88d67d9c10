//! Terminal rendering.

pub mod flight_scene;
pub mod hud;
pub mod projection;

use crate::core::game_loop::FrameSnapshot;
use crate::sensor::OrientationSample;
use ratatui::Frame;

/// Main UI drawing function.
pub fn draw_ui(frame: &mut Frame, snapshot: &FrameSnapshot<'_>, tilt: OrientationSample) {
    let size = frame.size();
    flight_scene::render_flight(frame, size, snapshot, tilt);
}
