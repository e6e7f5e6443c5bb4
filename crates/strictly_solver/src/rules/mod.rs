//! Position evaluation.
//!
//! An [`Outcome`] is a pure function of the board: the same position always
//! classifies the same way.

mod draw;
mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner, threats, winners};

use crate::position::Position;
use crate::types::Player;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Classification of a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The player owns a full line.
    Won(Player),
    /// The board is full with no line owned.
    Drawn,
    /// Moves remain and nobody has won.
    Undecided,
}

impl Outcome {
    /// Whether the game is over.
    pub fn is_terminal(self) -> bool {
        self != Outcome::Undecided
    }

    /// The winner, if any.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Won(player) => Some(player),
            Outcome::Drawn | Outcome::Undecided => None,
        }
    }
}

/// Classifies a position as won, drawn, or undecided.
///
/// Lines are checked in [`LINES`] order and the first owned line decides the
/// winner. A board with no owned line is drawn when full.
#[instrument(level = "trace", skip(position))]
pub fn evaluate(position: &Position) -> Outcome {
    if let Some(player) = check_winner(position) {
        Outcome::Won(player)
    } else if is_full(position) {
        Outcome::Drawn
    } else {
        Outcome::Undecided
    }
}
