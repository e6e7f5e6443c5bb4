//! Host-side game record: move history, time travel, and engine replies.
//!
//! The solver itself is stateless. A host that plays a whole game against
//! the engine keeps one [`GameRecord`] per game and routes every human move
//! through it; the record asks [`best_move`] for the engine's reply.

use crate::error::MoveError;
use crate::position::Position;
use crate::rules::Outcome;
use crate::search::best_move;
use crate::types::{Cell, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// A game between a human and the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Positions in play order, starting with the empty board.
    history: Vec<Position>,
    /// Index into `history` of the position being viewed.
    step: usize,
    /// Mark the engine plays.
    engine: Player,
}

impl GameRecord {
    /// Starts a game. When the engine plays X it opens immediately.
    #[instrument]
    pub fn new(engine: Player) -> Self {
        let mut record = Self {
            history: vec![Position::new()],
            step: 0,
            engine,
        };
        record.engine_reply();
        record
    }

    /// Discards the game and starts over with the engine on `engine`.
    #[instrument(skip(self))]
    pub fn reset(&mut self, engine: Player) {
        *self = Self::new(engine);
    }

    /// The position currently viewed.
    pub fn current(&self) -> &Position {
        &self.history[self.step]
    }

    /// Every recorded position, including any beyond the viewed step.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Index of the viewed position.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Mark the engine plays.
    pub fn engine(&self) -> Player {
        self.engine
    }

    /// Mark the human plays.
    pub fn human(&self) -> Player {
        self.engine.opponent()
    }

    /// Player to move at the viewed step. X moves on even steps.
    pub fn to_move(&self) -> Player {
        if self.step % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Outcome of the viewed position.
    pub fn outcome(&self) -> Outcome {
        self.current().outcome()
    }

    /// One-line status for display.
    pub fn status(&self) -> String {
        match self.outcome() {
            Outcome::Won(player) => format!("Winner: {}", player),
            Outcome::Drawn => "Draw".to_string(),
            Outcome::Undecided => format!("Next player: {}", self.to_move()),
        }
    }

    /// Labels for each history entry, as offered for time travel.
    pub fn moves(&self) -> Vec<String> {
        (0..self.history.len())
            .map(|step| match step {
                0 => "Go to game start".to_string(),
                n => format!("Go to move #{}", n),
            })
            .collect()
    }

    /// Plays the human's mark at `cell`, then lets the engine reply.
    ///
    /// Any history beyond the viewed step is discarded first.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the viewed position is decided.
    /// - [`MoveError::Occupied`] if the cell holds a mark.
    /// - [`MoveError::InvalidPosition`] if it is the engine's turn.
    #[instrument(skip(self), fields(cell = %cell, step = self.step))]
    pub fn play(&mut self, cell: Cell) -> Result<(), MoveError> {
        if self.outcome().is_terminal() {
            return Err(MoveError::GameOver);
        }
        let player = self.to_move();
        if player == self.engine {
            return Err(MoveError::InvalidPosition(format!(
                "It is the engine's turn ({})",
                self.engine
            )));
        }

        let next = self.current().apply(cell, player)?;
        self.push(next);
        info!(%player, %cell, status = %self.status(), "Human moved");

        self.engine_reply();
        Ok(())
    }

    /// Moves the view to `step` without discarding later history.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] if `step` is past the last entry.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), MoveError> {
        if step >= self.history.len() {
            return Err(MoveError::OutOfBounds(step));
        }
        self.step = step;
        debug!(step, "Jumped in history");
        Ok(())
    }

    /// Makes the engine's move if it is the engine's turn and the game is
    /// undecided. Returns the cell played.
    #[instrument(skip(self), fields(engine = %self.engine, step = self.step))]
    pub fn engine_reply(&mut self) -> Option<Cell> {
        if self.outcome().is_terminal() || self.to_move() != self.engine {
            return None;
        }
        let cell = best_move(self.current(), self.engine).best_move?;
        let next = match self.current().apply(cell, self.engine) {
            Ok(next) => next,
            Err(err) => {
                warn!(%err, %cell, "Engine move rejected");
                return None;
            }
        };
        self.push(next);
        info!(%cell, status = %self.status(), "Engine moved");
        Some(cell)
    }

    fn push(&mut self, position: Position) {
        self.history.truncate(self.step + 1);
        self.history.push(position);
        self.step = self.history.len() - 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Square;

    fn cell(index: usize) -> Cell {
        Cell::new(index).unwrap()
    }

    #[test]
    fn test_engine_as_x_opens() {
        let record = GameRecord::new(Player::X);
        assert_eq!(record.step(), 1);
        assert_eq!(record.current().count(Player::X), 1);
        assert_eq!(record.to_move(), Player::O);
        assert_eq!(record.status(), "Next player: O");
    }

    #[test]
    fn test_engine_as_o_waits() {
        let record = GameRecord::new(Player::O);
        assert_eq!(record.step(), 0);
        assert_eq!(record.current(), &Position::new());
        assert_eq!(record.moves(), vec!["Go to game start".to_string()]);
    }

    #[test]
    fn test_play_triggers_engine_reply() {
        let mut record = GameRecord::new(Player::O);
        record.play(cell(4)).unwrap();
        assert_eq!(record.step(), 2);
        assert_eq!(record.current().count(Player::O), 1);
        assert_eq!(record.current().get(cell(4)), Square::Occupied(Player::X));
    }

    #[test]
    fn test_play_occupied() {
        let mut record = GameRecord::new(Player::O);
        record.play(cell(4)).unwrap();
        assert_eq!(record.play(cell(4)), Err(MoveError::Occupied(cell(4))));
    }

    #[test]
    fn test_jump_then_play_truncates() {
        let mut record = GameRecord::new(Player::O);
        record.play(cell(0)).unwrap();
        record.play(cell(8)).unwrap();
        let before = record.history().len();
        assert!(before >= 3);

        record.jump_to(0).unwrap();
        assert_eq!(record.history().len(), before);
        assert_eq!(record.status(), "Next player: X");

        record.play(cell(4)).unwrap();
        assert_eq!(record.history().len(), 3);
        assert_eq!(record.current().get(cell(0)), Square::Empty);
    }

    #[test]
    fn test_jump_out_of_range() {
        let mut record = GameRecord::new(Player::O);
        assert_eq!(record.jump_to(1), Err(MoveError::OutOfBounds(1)));
    }

    #[test]
    fn test_jump_to_engine_turn_rejects_human_move() {
        let mut record = GameRecord::new(Player::X);
        record.jump_to(0).unwrap();
        assert!(matches!(
            record.play(cell(0)),
            Err(MoveError::InvalidPosition(_))
        ));
    }

    #[test]
    fn test_engine_reply_waits_for_its_turn() {
        let mut record = GameRecord::new(Player::O);
        assert_eq!(record.engine_reply(), None);
        assert_eq!(record.step(), 0);

        let mut record = GameRecord::new(Player::X);
        record.jump_to(0).unwrap();
        assert_eq!(record.engine_reply(), Some(cell(8)));
        assert_eq!(record.history().len(), 2);
    }

    #[test]
    fn test_reset_switches_sides() {
        let mut record = GameRecord::new(Player::O);
        record.play(cell(4)).unwrap();
        record.reset(Player::X);
        assert_eq!(record.engine(), Player::X);
        assert_eq!(record.human(), Player::O);
        assert_eq!(record.history().len(), 2);
    }
}
