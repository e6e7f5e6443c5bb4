//! Core domain types for the solver.

use crate::error::{MoveError, ParseError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Player in the game.
///
/// `X` is the first mark placed on an empty board, `O` the second.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl FromStr for Player {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "x" | "X" => Ok(Player::X),
            "o" | "O" => Ok(Player::O),
            other => Err(ParseError::Player(other.to_string())),
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the owner of the square, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// Index of a cell on the board, in row-major order (0-8).
///
/// A cell is the unit of a move: placing a mark at a cell is legal only
/// while that cell is empty.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(try_from = "usize", into = "usize")]
#[display("{}", _0)]
pub struct Cell(u8);

impl Cell {
    /// Number of cells on the board.
    pub const COUNT: usize = 9;

    /// Creates a cell, rejecting indices outside `0..9`.
    pub fn new(index: usize) -> Result<Self, MoveError> {
        if index < Self::COUNT {
            Ok(Self(index as u8))
        } else {
            Err(MoveError::OutOfBounds(index))
        }
    }

    /// All cells in ascending index order.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..Self::COUNT as u8).map(Cell)
    }

    /// Board index of this cell.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Human-facing label (1-9) used by the terminal host.
    pub fn label(self) -> usize {
        self.index() + 1
    }
}

impl TryFrom<usize> for Cell {
    type Error = MoveError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Cell::new(index)
    }
}

impl From<Cell> for usize {
    fn from(cell: Cell) -> Self {
        cell.index()
    }
}
