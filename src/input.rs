//! Keyboard handling for the flight screen.
//!
//! Steering comes from the motion sensor, so the keyboard only controls the
//! host: quitting, and dismissing the game-over screen.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// UI-agnostic host actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightInput {
    /// Esc, q or Ctrl+C
    Quit,
    /// Any other key press
    Other,
    /// Key release/repeat events, ignored
    None,
}

pub fn map_key(key: KeyEvent) -> FlightInput {
    if key.kind == KeyEventKind::Release {
        return FlightInput::None;
    }
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => FlightInput::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => FlightInput::Quit,
        _ => FlightInput::Other,
    }
}

/// Whether the host loop should exit after `input`.
///
/// While flying only an explicit quit exits; on the game-over screen any key
/// does.
pub fn should_exit(input: FlightInput, game_over: bool) -> bool {
    match input {
        FlightInput::Quit => true,
        FlightInput::Other => game_over,
        FlightInput::None => false,
    }
}
