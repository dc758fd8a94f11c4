//! Properties every tower state must satisfy.
//!
//! Each property is a zero-sized type so that a whole group can be named as
//! a tuple and checked in one call, before or after any move.

/// A yes/no property of a state of type `S`.
pub trait Invariant<S> {
    /// True when `state` has the property.
    fn holds(state: &S) -> bool;

    /// Short name of the property, used in violation reports.
    fn description() -> &'static str;
}

/// A property that failed for some state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Which property failed.
    pub description: String,
}

impl InvariantViolation {
    /// Records a failed property.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A group of properties checked together.
pub trait InvariantSet<S> {
    /// Reports every failed property, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, First, Second> InvariantSet<S> for (First, Second)
where
    First: Invariant<S>,
    Second: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let results = [
            (First::holds(state), First::description()),
            (Second::holds(state), Second::description()),
        ];
        let violations: Vec<InvariantViolation> = results
            .into_iter()
            .filter(|(held, _)| !held)
            .map(|(_, name)| InvariantViolation::new(name))
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod decreasing_sizes;
pub mod ordered_stacks;

pub use decreasing_sizes::DecreasingSizesInvariant;
pub use ordered_stacks::OrderedStacksInvariant;

/// All tower invariants as a composable set.
pub type TowerInvariants = (DecreasingSizesInvariant, OrderedStacksInvariant);
