//! Win detection.

use crate::position::Position;
use crate::types::{Cell, Player, Square};
use strum::IntoEnumIterator;
use tracing::instrument;

/// The eight winning lines as cell-index triples: rows, columns, diagonals.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Owner of a line, if all three of its cells hold the same mark.
fn line_owner(position: &Position, [a, b, c]: [usize; 3]) -> Option<Player> {
    let squares = position.squares();
    let owner = squares[a].player()?;
    (squares[b] == squares[a] && squares[c] == squares[a]).then_some(owner)
}

/// Returns the owner of the first complete line, if any.
#[instrument(level = "trace", skip(position))]
pub fn check_winner(position: &Position) -> Option<Player> {
    LINES.into_iter().find_map(|line| line_owner(position, line))
}

/// Every player that owns at least one line.
///
/// Legal play yields at most one; more means the board is ill formed.
pub fn winners(position: &Position) -> Vec<Player> {
    Player::iter()
        .filter(|player| {
            LINES
                .into_iter()
                .any(|line| line_owner(position, line) == Some(*player))
        })
        .collect()
}

/// Cells that would complete a line for `player` on their next move.
///
/// Not used by the search, which does not look for threats; hosts use it to
/// describe positions.
pub fn threats(position: &Position, player: Player) -> Vec<Cell> {
    position
        .legal_moves()
        .filter(|cell| {
            LINES.into_iter().any(|line| {
                line.contains(&cell.index())
                    && line
                        .iter()
                        .filter(|&&i| i != cell.index())
                        .all(|&i| position.squares()[i] == Square::Occupied(player))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(text: &str) -> Position {
        text.parse().unwrap()
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Position::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        assert_eq!(check_winner(&board("XXX OO. ...")), Some(Player::X));
    }

    #[test]
    fn test_winner_column() {
        assert_eq!(check_winner(&board("XO. XO. .O.")), Some(Player::O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        assert_eq!(check_winner(&board("XXO .O. OX.")), Some(Player::O));
    }

    #[test]
    fn test_no_winner_incomplete() {
        assert_eq!(check_winner(&board("XX. .O. ...")), None);
    }

    #[test]
    fn test_threats() {
        let position = board("XX. .O. ...");
        assert_eq!(threats(&position, Player::X), vec![Cell::new(2).unwrap()]);
        assert!(threats(&position, Player::O).is_empty());
    }
}
