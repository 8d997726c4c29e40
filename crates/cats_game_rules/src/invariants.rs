//! Board invariants that hold for every position reachable through play.
//!
//! Checked in debug builds after each accepted move, and testable on
//! their own against hand-built boards.

use crate::rules::line_owners;
use crate::{Board, Mark};

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

/// A set of invariants checked together.
pub trait InvariantSet<S> {
    /// Returns every violated invariant, or `Ok(())` if all hold.
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

/// X has placed as many marks as O, or exactly one more.
pub struct BalancedMarks;

impl Invariant<Board> for BalancedMarks {
    fn holds(board: &Board) -> bool {
        let x = board.count(Mark::X);
        let o = board.count(Mark::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X count equals O count or exceeds it by one"
    }
}

/// At most one mark owns a complete line.
pub struct SingleWinner;

impl Invariant<Board> for SingleWinner {
    fn holds(board: &Board) -> bool {
        line_owners(board).len() <= 1
    }

    fn description() -> &'static str {
        "Only one mark can own a winning line"
    }
}

/// All board invariants as a composable set.
pub type BoardInvariants = (BalancedMarks, SingleWinner);
