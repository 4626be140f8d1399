//! Win detection.

use crate::outcome::Line;
use crate::position::Position;
use crate::types::{Board, Player, Square};
use tracing::instrument;

/// The 8 winning lines, scanned rows first, then columns, then diagonals.
/// The scan order is fixed so evaluation stays deterministic even on boards
/// no legal move sequence can reach.
const LINES: [Line; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Finds the first completed line on the board.
///
/// Returns the owning player together with the line, `None` if no line
/// is complete.
#[instrument]
pub fn winning_line(board: &Board) -> Option<(Player, Line)> {
    for line in LINES {
        let [a, b, c] = line;
        if let Square::Occupied(player) = board.get(a)
            && board.get(b) == Square::Occupied(player)
            && board.get(c) == Square::Occupied(player)
        {
            return Some((player, line));
        }
    }

    None
}
