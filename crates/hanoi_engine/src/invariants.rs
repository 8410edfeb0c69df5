//! First-class invariants for the game board.
//!
//! Invariants are logical properties that must hold throughout game
//! execution. They are testable independently and serve as documentation of
//! system guarantees.

use crate::board::GameBoard;
use crate::tower::Tower;

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
    /// Checks all invariants in the set.
    ///
    /// # Errors
    ///
    /// Returns one [`InvariantViolation`] per invariant that fails to hold.
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

/// Invariant: every tower's disc widths strictly decrease from bottom to
/// top.
pub struct OrderedTower;

impl Invariant<GameBoard> for OrderedTower {
    fn holds(board: &GameBoard) -> bool {
        board.towers().iter().all(|tower| {
            tower
                .discs()
                .windows(2)
                .all(|pair| pair[0].width() > pair[1].width())
        })
    }

    fn description() -> &'static str {
        "Disc widths strictly decrease from bottom to top"
    }
}

/// Invariant: the three towers together hold exactly the configured number
/// of discs.
pub struct DiscConservation;

impl Invariant<GameBoard> for DiscConservation {
    fn holds(board: &GameBoard) -> bool {
        board.towers().iter().map(Tower::disc_count).sum::<usize>() == board.number_of_discs()
    }

    fn description() -> &'static str {
        "Total discs across the towers equals the configured disc count"
    }
}
