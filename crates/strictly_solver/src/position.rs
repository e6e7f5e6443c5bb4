//! Immutable board positions.
//!
//! A [`Position`] is never mutated once built. Applying a move yields a new
//! position, so sibling branches of a search can never observe each other's
//! tentative marks.

use crate::error::{MoveError, ParseError};
use crate::invariants::{InvariantSet, PositionInvariants};
use crate::rules::{self, Outcome};
use crate::types::{Cell, Player, Square};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{instrument, warn};

/// Snapshot of the 3x3 board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Position {
    /// Creates the empty starting position.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Builds a position from raw squares.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvalidPosition`] when the mark counts differ by
    /// more than one or both players own a winning line.
    #[instrument]
    pub fn from_squares(squares: [Square; 9]) -> Result<Self, MoveError> {
        let position = Self { squares };
        PositionInvariants::check_all(&position).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Rejected ill-formed position");
            MoveError::InvalidPosition(descriptions)
        })?;
        Ok(position)
    }

    /// Gets the square at the given cell.
    pub fn get(&self, cell: Cell) -> Square {
        self.squares[cell.index()]
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, cell: Cell) -> bool {
        self.get(cell) == Square::Empty
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of marks the player has on the board.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Player whose turn it is under alternating play with X first.
    pub fn next_player(&self) -> Player {
        if self.count(Player::X) > self.count(Player::O) {
            Player::O
        } else {
            Player::X
        }
    }

    /// Empty cells in ascending order.
    pub fn legal_moves(&self) -> impl Iterator<Item = Cell> + '_ {
        Cell::all().filter(move |cell| self.is_empty(*cell))
    }

    /// Classifies this position. See [`rules::evaluate`].
    pub fn outcome(&self) -> Outcome {
        rules::evaluate(self)
    }

    /// Places `player`'s mark at `cell`, returning the resulting position.
    ///
    /// This is the validation boundary for moves coming from outside the
    /// search. The receiver is left untouched.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the position is already won or drawn.
    /// - [`MoveError::Occupied`] if the cell holds a mark.
    /// - [`MoveError::InvalidPosition`] if the mark breaks alternation.
    #[instrument(skip(self), fields(cell = %cell, player = %player))]
    pub fn apply(&self, cell: Cell, player: Player) -> Result<Self, MoveError> {
        if self.outcome() != Outcome::Undecided {
            return Err(MoveError::GameOver);
        }
        if !self.is_empty(cell) {
            return Err(MoveError::Occupied(cell));
        }
        Self::from_squares(self.place(cell, player).squares)
    }

    /// Every position reachable by `player` moving once, in ascending cell
    /// order.
    pub fn children(&self, player: Player) -> impl Iterator<Item = (Cell, Position)> + '_ {
        self.legal_moves()
            .map(move |cell| (cell, self.place(cell, player)))
    }

    /// Unchecked placement on a copy. Callers guarantee the cell is empty.
    fn place(&self, cell: Cell, player: Player) -> Self {
        let mut squares = self.squares;
        squares[cell.index()] = Square::Occupied(player);
        Self { squares }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Position {
    /// Renders rows as `1|2|X` separated by `-+-+-`; empty cells show their
    /// 1-based label.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.squares[pos] {
                    Square::Empty => write!(f, "{}", pos + 1)?,
                    Square::Occupied(player) => write!(f, "{}", player)?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Position {
    type Err = ParseError;

    /// Reads nine cells: `X`/`O` for marks, `.`, `_` or a digit for empty.
    /// Whitespace and the `|`, `-`, `+` grid separators are ignored, so the
    /// [`Display`](fmt::Display) rendering parses back.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = Vec::with_capacity(Cell::COUNT);
        for ch in s.chars() {
            let square = match ch {
                c if c.is_whitespace() || matches!(c, '|' | '-' | '+') => continue,
                'x' | 'X' => Square::Occupied(Player::X),
                'o' | 'O' => Square::Occupied(Player::O),
                '.' | '_' => Square::Empty,
                c if c.is_ascii_digit() => Square::Empty,
                c => return Err(ParseError::Symbol(c)),
            };
            squares.push(square);
        }
        let squares: [Square; 9] = squares
            .try_into()
            .map_err(|v: Vec<Square>| ParseError::CellCount(v.len()))?;
        Ok(Self::from_squares(squares)?)
    }
}
