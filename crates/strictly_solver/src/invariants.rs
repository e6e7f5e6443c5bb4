//! First-class board invariants.
//!
//! Every position reachable from the empty board by alternating play
//! satisfies these. They are checked where positions enter the solver
//! ([`Position::from_squares`] and [`Position::apply`]), never inside the
//! search.

use crate::position::Position;
use crate::rules;
use crate::types::Player;
use tracing::{instrument, warn};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: X and O counts differ by at most one.
pub struct MarkBalance;

impl Invariant<Position> for MarkBalance {
    #[instrument(level = "trace", skip(position))]
    fn holds(position: &Position) -> bool {
        let x_count = position.count(Player::X);
        let o_count = position.count(Player::O);

        let valid = x_count.abs_diff(o_count) <= 1;
        if !valid {
            warn!(x_count, o_count, "Mark balance violated");
        }
        valid
    }

    fn description() -> &'static str {
        "X and O counts must differ by at most one"
    }
}

/// Invariant: at most one player owns a winning line.
pub struct SingleWinner;

impl Invariant<Position> for SingleWinner {
    #[instrument(level = "trace", skip(position))]
    fn holds(position: &Position) -> bool {
        let winners = rules::winners(position);
        let valid = winners.len() <= 1;
        if !valid {
            warn!(?winners, "Both players own a winning line");
        }
        valid
    }

    fn description() -> &'static str {
        "At most one player may own a winning line"
    }
}

/// Every invariant a well-formed position satisfies.
pub type PositionInvariants = (MarkBalance, SingleWinner);
