//! Outcome evaluation rules.

mod draw;
mod win;

pub use draw::is_full;
pub use win::winning_line;

use crate::outcome::Outcome;
use crate::types::Board;
use tracing::instrument;

/// Evaluates a board to its derived outcome.
///
/// Pure and total: any board, including partially filled or empty ones,
/// maps to exactly one of [`Outcome::Undecided`], [`Outcome::Win`], or
/// [`Outcome::Draw`].
#[instrument]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((player, line)) = winning_line(board) {
        return Outcome::Win { player, line };
    }

    if is_full(board) {
        return Outcome::Draw;
    }

    Outcome::Undecided
}
