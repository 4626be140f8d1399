//! Application state.

use oxo::GameState;
use tracing::debug;

/// Holds the current game.
///
/// Every interaction replaces the state with the one the core returns;
/// invalid input comes back unchanged, so the handlers need no guards.
pub struct App {
    state: GameState,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Gets the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Places the current player's mark at the given cell index.
    pub fn place(&mut self, index: usize) {
        debug!(index, "cell selected");
        self.state = self.state.place(index);
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("restarting game");
        self.state = self.state.reset();
    }
}
