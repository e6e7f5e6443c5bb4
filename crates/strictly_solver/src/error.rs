//! Error types for move application and board parsing.

use crate::types::Cell;
use derive_more::{Display, Error};

/// Error that can occur when validating or applying a move.
///
/// These are the only ill-formed inputs the solver reports. Evaluation and
/// search assume well-formed positions and never fail.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The cell index is outside the board.
    #[display("Cell index {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(#[error(not(source))] usize),

    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    Occupied(#[error(not(source))] Cell),

    /// The position is already won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// The squares do not describe a position reachable by legal play.
    #[display("Invalid position: {}", _0)]
    InvalidPosition(#[error(not(source))] String),
}

/// Error raised when text cannot be read as a board or a player.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ParseError {
    /// The board text does not hold exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    CellCount(#[error(not(source))] usize),

    /// A character is not a mark or an empty-cell marker.
    #[display("Unexpected board character '{}'", _0)]
    Symbol(#[error(not(source))] char),

    /// The player name is neither X nor O.
    #[display("Unknown player '{}' (expected X or O)", _0)]
    Player(#[error(not(source))] String),

    /// The board parsed, but the position is not well formed.
    #[display("{}", _0)]
    Position(MoveError),
}

impl From<MoveError> for ParseError {
    fn from(err: MoveError) -> Self {
        ParseError::Position(err)
    }
}
