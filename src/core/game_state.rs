//! Score and the terminal game-over flag.

/// Per-session score and game-over state.
///
/// `game_over` only ever goes from false to true. Nothing in a session
/// resets it; starting over means starting a new session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameState {
    /// Obstacles successfully passed.
    pub score: u32,
    /// Set on the first collision.
    pub game_over: bool,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter the terminal state. Returns true only on the call that
    /// actually flipped the flag.
    pub fn end(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        self.game_over = true;
        true
    }

    pub fn record_pass(&mut self) {
        self.score = self.score.saturating_add(1);
    }
}
