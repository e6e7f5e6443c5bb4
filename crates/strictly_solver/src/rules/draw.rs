//! Draw detection.

use crate::position::Position;
use crate::types::Square;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner is a draw.
pub fn is_full(position: &Position) -> bool {
    position.squares().iter().all(|s| *s != Square::Empty)
}
