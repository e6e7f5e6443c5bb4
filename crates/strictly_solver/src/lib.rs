//! Strictly Solver - perfect-play tic-tac-toe
//!
//! The solver classifies positions and finds outcome-optimal moves by
//! minimax search with alpha-beta pruning. It is pure: no I/O, no shared
//! state, and the same inputs always give the same answer.
//!
//! # Architecture
//!
//! - **Rules**: [`evaluate`] classifies a [`Position`] as an [`Outcome`]
//! - **Search**: [`search`] scores every continuation and returns a
//!   [`SearchResult`]; [`best_move`] seeds it for the player on move
//! - **Positions**: immutable boards; [`Position::apply`] validates moves
//! - **Session**: [`GameRecord`] keeps history for a host playing a game
//!
//! # Example
//!
//! ```
//! use strictly_solver::{Cell, Player, Position, Score, best_move};
//!
//! let position: Position = "XX. .O. ...".parse()?;
//! let result = best_move(&position, Player::O);
//! assert_eq!(result.score, Score::Draw);
//! assert_eq!(result.best_move, Some(Cell::new(2)?));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod invariants;
mod position;
mod rules;
mod search;
mod session;
mod types;

// Crate-level exports - Errors
pub use error::{MoveError, ParseError};

// Crate-level exports - Board types
pub use position::Position;
pub use types::{Cell, Player, Square};

// Crate-level exports - Evaluation
pub use rules::{LINES, Outcome, check_winner, evaluate, is_full, threats, winners};

// Crate-level exports - Invariants
pub use invariants::{
    Invariant, InvariantSet, InvariantViolation, MarkBalance, PositionInvariants, SingleWinner,
};

// Crate-level exports - Search
pub use search::{
    FULL_DEPTH, Score, SearchResult, SearchStats, best_move, search, search_with_stats,
};

// Crate-level exports - Host session
pub use session::GameRecord;
