//! Derived game outcome.

use crate::position::Position;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// One of the 8 winning triples (3 rows, 3 columns, 2 diagonals).
pub type Line = [Position; 3];

/// Outcome of evaluating a board.
///
/// Always derived from the board via [`crate::evaluate`], never stored, so it
/// cannot drift from the squares it describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No win and the board is not full; the game continues.
    Undecided,
    /// A player completed a line.
    Win {
        /// The winning player.
        player: Player,
        /// The completed triple.
        line: Line,
    },
    /// All 9 squares filled with no completed line.
    Draw,
}

impl Outcome {
    /// Returns the winner, if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win { player, .. } => Some(*player),
            _ => None,
        }
    }

    /// Returns the winning line, if there is one.
    pub fn winning_line(&self) -> Option<Line> {
        match self {
            Outcome::Win { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Returns true if the game ended in a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }

    /// Returns true if the game is over (win or draw).
    pub fn is_decided(&self) -> bool {
        !matches!(self, Outcome::Undecided)
    }
}
