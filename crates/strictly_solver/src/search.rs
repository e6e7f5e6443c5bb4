//! Minimax search with alpha-beta pruning.
//!
//! Scores are always taken from the point of view of one fixed player, the
//! one the search optimizes for, regardless of who is on move at a node.
//! Every recursive call works on its own copy of the position, so the search
//! holds no shared mutable state and repeated calls are replayable.

use crate::position::Position;
use crate::rules::{self, Outcome};
use crate::types::{Cell, Player};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

/// Depth budget that reaches every terminal position from any board.
pub const FULL_DEPTH: u8 = 9;

/// Game-theoretic value of a position for the optimizing player.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(into = "i8", try_from = "i8")]
pub enum Score {
    /// The optimizing player loses.
    Loss = -1,
    /// Neither side can force a win.
    Draw = 0,
    /// The optimizing player wins.
    Win = 1,
}

impl Score {
    /// Numeric value in `{-1, 0, 1}`.
    pub fn value(self) -> i8 {
        self as i8
    }

    /// Terminal score of an outcome. Undecided positions score as a draw.
    pub fn for_outcome(outcome: Outcome, optimizing_for: Player) -> Self {
        match outcome {
            Outcome::Won(player) if player == optimizing_for => Score::Win,
            Outcome::Won(_) => Score::Loss,
            Outcome::Drawn | Outcome::Undecided => Score::Draw,
        }
    }
}

impl From<Score> for i8 {
    fn from(score: Score) -> Self {
        score.value()
    }
}

impl TryFrom<i8> for Score {
    type Error = String;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Score::Loss),
            0 => Ok(Score::Draw),
            1 => Ok(Score::Win),
            other => Err(format!("Score must be -1, 0 or 1, got {}", other)),
        }
    }
}

/// Value of a searched position and the move that achieves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct SearchResult {
    /// Value for the optimizing player.
    pub score: Score,
    /// Best move, absent at terminal nodes.
    pub best_move: Option<Cell>,
}

/// Work done by one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, new)]
pub struct SearchStats {
    /// Positions visited, the root included.
    nodes: u64,
}

/// Searches `position` and returns the best move with its value.
///
/// - `depth`: remaining plies. At zero the position is scored as if
///   terminal, with no winner counting as a draw.
/// - `alpha`, `beta`: the pruning window. Seed with `Loss` and `Win`.
/// - `maximizing`: whether this node picks the highest score; true when
///   `to_move == optimizing_for`.
/// - `to_move`: whose mark a move at this node places.
/// - `optimizing_for`: the player scores are relative to, fixed for the
///   whole tree.
///
/// Children are tried in ascending cell order and a child that ties the
/// running best replaces the recorded move, so among equally good moves the
/// last one found wins. A node stops expanding once `alpha > beta`.
#[instrument(level = "trace", skip(position))]
pub fn search(
    position: &Position,
    depth: u8,
    alpha: Score,
    beta: Score,
    maximizing: bool,
    to_move: Player,
    optimizing_for: Player,
) -> SearchResult {
    search_with_stats(position, depth, alpha, beta, maximizing, to_move, optimizing_for).0
}

/// Same as [`search`], also reporting how many positions were visited.
pub fn search_with_stats(
    position: &Position,
    depth: u8,
    alpha: Score,
    beta: Score,
    maximizing: bool,
    to_move: Player,
    optimizing_for: Player,
) -> (SearchResult, SearchStats) {
    let mut searcher = Searcher::new(optimizing_for);
    let result = searcher.visit(position, depth, alpha, beta, maximizing, to_move);
    (result, SearchStats::new(searcher.nodes))
}

/// Perfect move for `player` from `position`: a full-depth, full-window
/// search optimizing for the mover.
#[instrument(skip(position), fields(player = %player))]
pub fn best_move(position: &Position, player: Player) -> SearchResult {
    let (result, stats) = search_with_stats(
        position,
        FULL_DEPTH,
        Score::Loss,
        Score::Win,
        true,
        player,
        player,
    );
    debug!(
        score = result.score.value(),
        best_move = ?result.best_move,
        nodes = stats.nodes,
        "Search complete"
    );
    result
}

/// Recursion state shared down one search tree.
struct Searcher {
    optimizing_for: Player,
    nodes: u64,
}

impl Searcher {
    fn new(optimizing_for: Player) -> Self {
        Self {
            optimizing_for,
            nodes: 0,
        }
    }

    fn visit(
        &mut self,
        position: &Position,
        depth: u8,
        mut alpha: Score,
        mut beta: Score,
        maximizing: bool,
        to_move: Player,
    ) -> SearchResult {
        self.nodes += 1;

        let outcome = rules::evaluate(position);
        if depth == 0 || outcome.is_terminal() || position.legal_moves().next().is_none() {
            return SearchResult::new(Score::for_outcome(outcome, self.optimizing_for), None);
        }

        let mut value = if maximizing { Score::Loss } else { Score::Win };
        let mut best_move = None;

        for (cell, child) in position.children(to_move) {
            let reply = self.visit(
                &child,
                depth - 1,
                alpha,
                beta,
                !maximizing,
                to_move.opponent(),
            );

            if maximizing {
                value = value.max(reply.score);
                alpha = alpha.max(value);
            } else {
                value = value.min(reply.score);
                beta = beta.min(value);
            }

            if reply.score == value {
                best_move = Some(cell);
            }

            if alpha > beta {
                trace!(%cell, ?alpha, ?beta, "Pruned remaining children");
                break;
            }
        }

        SearchResult::new(value, best_move)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(text: &str) -> Position {
        text.parse().unwrap()
    }

    fn cell(index: usize) -> Option<Cell> {
        Some(Cell::new(index).unwrap())
    }

    #[test]
    fn test_score_ordering() {
        assert!(Score::Loss < Score::Draw);
        assert!(Score::Draw < Score::Win);
        assert_eq!(Score::Loss.value(), -1);
        assert_eq!(Score::try_from(2_i8), Err("Score must be -1, 0 or 1, got 2".to_string()));
    }

    #[test]
    fn test_terminal_scores() {
        let won = board("XXX OO. ...");
        for (optimizing_for, expected) in [(Player::X, Score::Win), (Player::O, Score::Loss)] {
            let result = search(
                &won,
                FULL_DEPTH,
                Score::Loss,
                Score::Win,
                true,
                Player::O,
                optimizing_for,
            );
            assert_eq!(result, SearchResult::new(expected, None));
        }
    }

    #[test]
    fn test_depth_zero_scores_without_expanding() {
        let (result, stats) = search_with_stats(
            &Position::new(),
            0,
            Score::Loss,
            Score::Win,
            true,
            Player::X,
            Player::X,
        );
        assert_eq!(result, SearchResult::new(Score::Draw, None));
        assert_eq!(*stats.nodes(), 1);
    }

    #[test]
    fn test_depth_one_finds_immediate_win() {
        // X X . / O O . / . . .  X to move
        let result = search(
            &board("XX. OO. ..."),
            1,
            Score::Loss,
            Score::Win,
            true,
            Player::X,
            Player::X,
        );
        assert_eq!(result, SearchResult::new(Score::Win, cell(2)));
    }

    #[test]
    fn test_depth_one_minimizer_takes_its_win() {
        // O to move can complete the middle row; X is optimizing.
        let result = search(
            &board("XX. OO. ..."),
            1,
            Score::Loss,
            Score::Win,
            false,
            Player::O,
            Player::X,
        );
        assert_eq!(result, SearchResult::new(Score::Loss, cell(5)));
    }

    #[test]
    fn test_block_forced() {
        // X X . / . O . / . . .  O must block at 2.
        let result = best_move(&board("XX. .O. ..."), Player::O);
        assert_eq!(result, SearchResult::new(Score::Draw, cell(2)));
    }
}
