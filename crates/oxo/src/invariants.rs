//! First-class invariants over game state.
//!
//! Invariants are logical properties that hold for every state reachable
//! through legal transitions. They are checked with `debug_assert!` after
//! each transition and are testable on their own.

use crate::state::GameState;
use crate::types::Player;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Invariant: X leads O by zero or one mark.
///
/// X moves first and turns alternate, so no reachable board has O ahead
/// of X, or X ahead by two.
pub struct BalancedMarks;

impl Invariant<GameState> for BalancedMarks {
    fn holds(state: &GameState) -> bool {
        let x = state.board().mark_count(Player::X);
        let o = state.board().mark_count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X leads O by zero or one mark"
    }
}

/// Invariant: the player to move follows from the mark counts.
///
/// O is to move exactly when X has one more mark on the board.
pub struct TurnFollowsCounts;

impl Invariant<GameState> for TurnFollowsCounts {
    fn holds(state: &GameState) -> bool {
        let x = state.board().mark_count(Player::X);
        let o = state.board().mark_count(Player::O);
        let expected = if x > o { Player::O } else { Player::X };
        state.to_move() == expected
    }

    fn description() -> &'static str {
        "The player to move follows from the mark counts"
    }
}

/// Asserts all state invariants (debug builds only).
pub(crate) fn assert_state(state: &GameState) {
    debug_assert!(BalancedMarks::holds(state), "{}", BalancedMarks::description());
    debug_assert!(
        TurnFollowsCounts::holds(state),
        "{}",
        TurnFollowsCounts::description()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_holds() {
        let state = GameState::new();
        assert!(BalancedMarks::holds(&state));
        assert!(TurnFollowsCounts::holds(&state));
    }

    #[test]
    fn test_invariants_hold_after_moves() {
        let mut state = GameState::new();
        for index in [4, 0, 8, 2, 3] {
            state = state.place(index);
            assert!(BalancedMarks::holds(&state), "after placing at {index}");
            assert!(TurnFollowsCounts::holds(&state), "after placing at {index}");
        }
    }
}
