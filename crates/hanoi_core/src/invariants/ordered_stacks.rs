//! Ordered stacks invariant: no larger cylinder rests on a smaller one.

use super::super::{Peg, Tower};
use super::Invariant;

/// Invariant: on every peg, cylinders listed bottom to top shrink strictly.
///
/// A peg's stack is its cylinders ordered by index, so this holds whenever
/// sizes decrease with index. It is checked per peg so a corrupted size
/// table shows up at the peg where it would be visible.
pub struct OrderedStacksInvariant;

impl Invariant<Tower> for OrderedStacksInvariant {
    fn holds(tower: &Tower) -> bool {
        Peg::ALL.iter().all(|&peg| {
            let sizes: Vec<u32> = tower
                .on_peg(peg)
                .filter_map(|index| tower.cylinder(index))
                .map(|c| c.size())
                .collect();
            sizes.windows(2).all(|pair| pair[0] > pair[1])
        })
    }

    fn description() -> &'static str {
        "No cylinder rests on a smaller cylinder"
    }
}
