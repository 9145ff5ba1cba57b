//! First-class invariants for the move history.
//!
//! Invariants are logical properties that must hold after every transition.
//! They are testable independently and checked as postconditions in debug
//! builds.

pub mod alternating_turn;
pub mod cursor_in_range;
pub mod monotonic_history;
pub mod starts_empty;

pub use alternating_turn::AlternatingTurnInvariant;
pub use cursor_in_range::CursorInRangeInvariant;
pub use monotonic_history::MonotonicHistoryInvariant;
pub use starts_empty::StartsEmptyInvariant;

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
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3, I4> InvariantSet<S> for (I1, I2, I3, I4)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
    I4: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if !I4::holds(state) {
            violations.push(InvariantViolation::new(I4::description()));
        }

        collect(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        collect(violations)
    }
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

        collect(violations)
    }
}

/// All history invariants as a composable set.
pub type HistoryInvariants = (
    StartsEmptyInvariant,
    MonotonicHistoryInvariant,
    AlternatingTurnInvariant,
    CursorInRangeInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameHistory, Player, Position, Square};

    fn played(cells: &[usize]) -> GameHistory {
        let mut history = GameHistory::new();
        for &cell in cells {
            history.try_play(cell).expect("legal move");
        }
        history
    }

    #[test]
    fn test_invariant_set_holds_for_new_history() {
        assert!(HistoryInvariants::check_all(&GameHistory::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_branching() {
        let mut history = played(&[0, 4, 8, 2]);
        history.jump_to(2).expect("in range");
        history.try_play(6).expect("legal move");
        assert!(HistoryInvariants::check_all(&history).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_each_violation() {
        let mut history = played(&[4]);
        history.snapshots[1].set(Position::TopLeft, Square::Occupied(Player::X));
        history.current = 7;

        let violations = HistoryInvariants::check_all(&history).unwrap_err();
        assert_eq!(violations.len(), 2);
        assert_eq!(
            violations[1].description,
            CursorInRangeInvariant::description()
        );
    }

    #[test]
    fn test_invariant_set_reports_marked_start() {
        let mut history = played(&[4]);
        history.snapshots[0].set(Position::TopLeft, Square::Occupied(Player::X));
        history.snapshots[1].set(Position::TopLeft, Square::Occupied(Player::X));

        let violations = HistoryInvariants::check_all(&history).unwrap_err();
        assert_eq!(
            violations,
            vec![InvariantViolation::new(StartsEmptyInvariant::description())]
        );
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (MonotonicHistoryInvariant, AlternatingTurnInvariant);
        assert!(TwoInvariants::check_all(&played(&[0, 1])).is_ok());
    }
}
