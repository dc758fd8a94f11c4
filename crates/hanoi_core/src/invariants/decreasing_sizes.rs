//! Decreasing sizes invariant: each cylinder is smaller than the one before it.

use super::super::Tower;
use super::Invariant;

/// Invariant: `size(tower[i]) > size(tower[i + 1])` for every valid `i`.
pub struct DecreasingSizesInvariant;

impl Invariant<Tower> for DecreasingSizesInvariant {
    fn holds(tower: &Tower) -> bool {
        tower
            .cylinders()
            .windows(2)
            .all(|pair| pair[0].size() > pair[1].size())
    }

    fn description() -> &'static str {
        "Cylinder sizes strictly decrease with index"
    }
}
