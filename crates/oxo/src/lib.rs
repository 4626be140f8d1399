//! Two-player tic-tac-toe game logic.
//!
//! The crate is the game's entire logic surface: a 3x3 board of squares,
//! alternating turns between X and O, and outcome evaluation (win with its
//! line, draw, or still undecided). Rendering and input belong to a frontend
//! such as `oxo_tui`.
//!
//! State has value semantics: every transition returns a new [`GameState`],
//! and the outcome is recomputed from the board on demand rather than stored.
//!
//! # Example
//!
//! ```
//! use oxo::{GameState, Outcome, Player};
//!
//! let state = GameState::new().place(0).place(3).place(1).place(4).place(2);
//! match state.outcome() {
//!     Outcome::Win { player, .. } => assert_eq!(player, Player::X),
//!     other => panic!("expected a win, got {other:?}"),
//! }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod invariants;
mod outcome;
mod position;
mod rules;
mod state;
mod types;

pub use invariants::{BalancedMarks, Invariant, TurnFollowsCounts};
pub use outcome::{Line, Outcome};
pub use position::Position;
pub use rules::evaluate;
pub use state::{GameState, MoveError};
pub use types::{Board, Player, Square};
