//! First-class invariants for the game history.
//!
//! Invariants are logical properties that must hold after every
//! mutation. They are checked in debug builds and can be tested
//! independently.

mod cursor_in_bounds;
mod empty_root;
mod single_cell_steps;

pub use cursor_in_bounds::CursorInBounds;
pub use empty_root::EmptyRoot;
pub use single_cell_steps::SingleCellSteps;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("invariant violated: {description}")]
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
/// Implemented for tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns every violation, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Every invariant a [`GameHistory`](crate::GameHistory) maintains.
pub type HistoryInvariants = (CursorInBounds, EmptyRoot, SingleCellSteps);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameHistory;

    #[test]
    fn test_fresh_history_satisfies_all() {
        let history = GameHistory::new();
        assert_eq!(
            <HistoryInvariants as InvariantSet<GameHistory>>::check_all(&history),
            Ok(())
        );
    }

    #[test]
    fn test_all_violations_are_reported() {
        let mut history = GameHistory::new();
        history.entries.clear();

        let violations = <HistoryInvariants as InvariantSet<GameHistory>>::check_all(&history)
            .expect_err("empty history must fail");
        assert_eq!(violations.len(), 2);
        assert!(violations.contains(&InvariantViolation::new(CursorInBounds::description())));
        assert!(violations.contains(&InvariantViolation::new(EmptyRoot::description())));
    }
}
