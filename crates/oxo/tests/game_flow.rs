//! Full-game scenarios: turn alternation, no-op guards, reset, status lines.

use oxo::{
    BalancedMarks, GameState, Invariant, MoveError, Outcome, Player, Position, Square,
    TurnFollowsCounts,
};

fn play(indices: &[usize]) -> GameState {
    indices
        .iter()
        .fold(GameState::new(), |state, &index| state.place(index))
}

#[test]
fn initial_state() {
    let state = GameState::new();
    assert_eq!(state.to_move(), Player::X);
    assert_eq!(state.outcome(), Outcome::Undecided);
    assert!(!state.is_over());
    assert_eq!(state.status_line(), "Next: X");
}

#[test]
fn turns_alternate() {
    let state = play(&[0]);
    assert_eq!(state.board().get(Position::TopLeft), Square::Occupied(Player::X));
    assert_eq!(state.to_move(), Player::O);
    assert_eq!(state.status_line(), "Next: O");

    let state = state.place(4);
    assert_eq!(state.board().get(Position::Center), Square::Occupied(Player::O));
    assert_eq!(state.to_move(), Player::X);
}

#[test]
fn occupied_square_is_a_no_op() {
    let once = play(&[0]);
    let twice = once.place(0);
    assert_eq!(once, twice);
}

#[test]
fn out_of_range_index_is_a_no_op() {
    let state = play(&[0, 4]);
    assert_eq!(state.place(9), state);
    assert_eq!(state.place(usize::MAX), state);
}

#[test]
fn x_wins_the_top_row() {
    // X: 0, 1, 2; O: 3, 4.
    let state = play(&[0, 3, 1, 4, 2]);
    assert_eq!(
        state.outcome(),
        Outcome::Win {
            player: Player::X,
            line: [Position::TopLeft, Position::TopCenter, Position::TopRight],
        }
    );
    assert!(state.is_over());
    assert_eq!(state.status_line(), "Winner: X");

    // Any further move is a no-op.
    assert_eq!(state.place(5), state);
    assert_eq!(state.try_place(5), Err(MoveError::GameOver));
}

#[test]
fn o_wins_a_column() {
    // X: 0, 2, 6; O: 1, 4, 7 (middle column).
    let state = play(&[0, 1, 2, 4, 6, 7]);
    assert_eq!(state.outcome().winner(), Some(Player::O));
    assert_eq!(state.status_line(), "Winner: O");
}

#[test]
fn full_game_ends_in_draw() {
    // Ends at X O X / X O O / O X X with no completed line.
    let state = play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert_eq!(state.outcome(), Outcome::Draw);
    assert!(state.is_over());
    assert_eq!(state.status_line(), "Draw");
    assert_eq!(state.place(0), state);
}

#[test]
fn reset_returns_the_initial_state() {
    let state = play(&[0, 3, 1, 4, 2]);
    assert_eq!(state.reset(), GameState::new());
    // Idempotent: resetting twice is the same as once.
    assert_eq!(state.reset().reset(), state.reset());
}

#[test]
fn invariants_hold_along_a_full_game() {
    let mut state = GameState::new();
    for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
        state = state.place(index);
        assert!(BalancedMarks::holds(&state));
        assert!(TurnFollowsCounts::holds(&state));
    }
}

#[test]
fn finished_state_round_trips_through_json() {
    let state = play(&[0, 3, 1, 4, 2]);
    let json = serde_json::to_string(&state).expect("serialize");
    let restored: GameState = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(restored, state);
    assert_eq!(restored.outcome().winner(), Some(Player::X));
}
