//! Game state and turn transitions.

use crate::invariants;
use crate::outcome::Outcome;
use crate::position::Position;
use crate::rules;
use crate::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Error raised when a move cannot be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// The index does not name a board position.
    #[display("Index {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),
}

impl std::error::Error for MoveError {}

/// Complete game state: the board plus whose turn it is.
///
/// Transitions have value semantics. [`GameState::place`] and
/// [`GameState::try_place`] return a new state and leave `self` untouched,
/// so a frontend holding the previous value never observes a partial move.
/// Whether the game is over is derived through [`GameState::outcome`],
/// not stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    to_move: Player,
}

impl GameState {
    /// Creates the initial state: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Evaluates the board to its current outcome.
    ///
    /// Recomputed on every call; see [`crate::evaluate`].
    pub fn outcome(&self) -> Outcome {
        rules::evaluate(&self.board)
    }

    /// Returns true if the game has ended in a win or draw.
    pub fn is_over(&self) -> bool {
        self.outcome().is_decided()
    }

    /// Returns the status line a frontend shows for this state:
    /// `Winner: X`, `Winner: O`, `Draw`, or `Next: X` / `Next: O`.
    pub fn status_line(&self) -> String {
        match self.outcome() {
            Outcome::Win { player, .. } => format!("Winner: {player}"),
            Outcome::Draw => "Draw".to_string(),
            Outcome::Undecided => format!("Next: {}", self.to_move),
        }
    }

    /// Places the current player's mark at the given index, treating any
    /// invalid input as a no-op.
    ///
    /// A finished game, an out-of-range index, or an occupied square all
    /// return the state unchanged. Frontends are expected to disable those
    /// inputs, but the core stays safe if called anyway.
    #[instrument(skip(self))]
    pub fn place(&self, index: usize) -> GameState {
        match self.try_place(index) {
            Ok(next) => next,
            Err(error) => {
                debug!(%error, "move rejected");
                self.clone()
            }
        }
    }

    /// Places the current player's mark at the given index, reporting why
    /// a move is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] if the game has ended,
    /// [`MoveError::OutOfBounds`] if the index does not name a position, and
    /// [`MoveError::SquareOccupied`] if the square is taken.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn try_place(&self, index: usize) -> Result<GameState, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }

        let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;

        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let mut next = self.clone();
        next.board.set(pos, Square::Occupied(next.to_move));
        next.to_move = next.to_move.opponent();

        invariants::assert_state(&next);

        Ok(next)
    }

    /// Returns the initial state, regardless of the current one.
    #[instrument(skip(self))]
    pub fn reset(&self) -> GameState {
        GameState::new()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_place_flips_turn() {
        let state = GameState::new();
        let next = state.try_place(4).expect("center is free");
        assert_eq!(next.to_move(), Player::O);
        assert_eq!(next.board().get(Position::Center), Square::Occupied(Player::X));
        // The original state is untouched.
        assert_eq!(state, GameState::new());
    }

    #[test]
    fn test_try_place_occupied() {
        let state = GameState::new().place(4);
        assert_eq!(
            state.try_place(4),
            Err(MoveError::SquareOccupied(Position::Center))
        );
    }

    #[test]
    fn test_try_place_out_of_bounds() {
        let state = GameState::new();
        assert_eq!(state.try_place(9), Err(MoveError::OutOfBounds(9)));
    }
}
