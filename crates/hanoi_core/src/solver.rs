//! Optimal recursive solver.
//!
//! Each cylinder is treated as the base of the sub-tower above it. To move
//! cylinder `i` to a target, the sub-tower above it is first moved to the
//! peg that is neither under `i` nor the target, then `i` moves, then the
//! sub-tower follows it onto the target.

use super::contracts::LegalMove;
use super::render::{MoveLog, Render};
use super::{Move, Peg, Tower};
use tracing::{debug, info, instrument};

/// Largest tower the solver accepts; `2^64 - 1` moves still fit a `u64`.
pub const MAX_CYLINDERS: usize = 64;

/// Optimal number of moves for `count` cylinders: `2^count - 1`.
///
/// Saturates at `u64::MAX` past [`MAX_CYLINDERS`].
pub fn optimal_moves(count: usize) -> u64 {
    match count {
        0 => 0,
        n if n >= MAX_CYLINDERS => u64::MAX,
        n => (1u64 << n) - 1,
    }
}

/// Error raised when a tower cannot be solved as requested.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SolveError {
    /// The cylinders do not all start on the same peg.
    #[display("Cylinder {} starts on peg {} but cylinder 0 is on peg {}", cylinder, peg, expected)]
    SplitTower {
        /// First cylinder found off the shared peg.
        cylinder: usize,
        /// Where that cylinder is.
        peg: Peg,
        /// Peg holding cylinder 0.
        expected: Peg,
    },

    /// The tower already sits on the target peg.
    #[display("Tower already on target peg {}", _0)]
    TargetIsSource(#[error(not(source))] Peg),

    /// The move count would not fit in a `u64`.
    #[display("{} cylinders exceeds the maximum of {}", count, max)]
    TooManyCylinders {
        /// Requested cylinder count.
        count: usize,
        /// Largest supported count.
        max: usize,
    },
}

/// Moves every cylinder of `tower` onto `target`, calling `render` after
/// each move.
///
/// The tower must start with every cylinder on one peg other than `target`.
/// An empty tower accepts any target and makes no moves. Returns the number
/// of moves made, which is always [`optimal_moves`] of the tower's size.
#[instrument(skip(tower, render), fields(cylinders = tower.len()))]
pub fn solve<R>(tower: &mut Tower, target: Peg, render: &mut R) -> Result<u64, SolveError>
where
    R: Render + ?Sized,
{
    check_start(tower, target)?;
    info!(%tower, "Solving tower");

    let mut solver = Solver {
        tower,
        render,
        moves: 0,
    };
    if !solver.tower.is_empty() {
        solver.relocate(0, target);
    }

    info!(moves = solver.moves, "Tower solved");
    Ok(solver.moves)
}

/// Solves a fresh `count`-cylinder tower from `source` to `target` and
/// returns every move made.
#[instrument]
pub fn solution(count: usize, source: Peg, target: Peg) -> Result<Vec<Move>, SolveError> {
    let mut tower = Tower::new(count, source);
    let mut log = MoveLog::new();
    solve(&mut tower, target, &mut log)?;
    Ok(log.into_moves())
}

/// Rejects towers the recursion cannot solve correctly.
fn check_start(tower: &Tower, target: Peg) -> Result<(), SolveError> {
    if tower.len() > MAX_CYLINDERS {
        return Err(SolveError::TooManyCylinders {
            count: tower.len(),
            max: MAX_CYLINDERS,
        });
    }
    let Some(expected) = tower.peg(0) else {
        return Ok(());
    };
    if let Some((cylinder, c)) = tower
        .cylinders()
        .iter()
        .enumerate()
        .find(|(_, c)| c.peg() != expected)
    {
        return Err(SolveError::SplitTower {
            cylinder,
            peg: c.peg(),
            expected,
        });
    }
    if expected == target {
        return Err(SolveError::TargetIsSource(target));
    }
    Ok(())
}

/// Recursion state shared by every level: the tower, the sink, the counter.
struct Solver<'a, R: Render + ?Sized> {
    tower: &'a mut Tower,
    render: &'a mut R,
    moves: u64,
}

impl<R: Render + ?Sized> Solver<'_, R> {
    /// Moves cylinder `index` and everything above it onto `target`.
    fn relocate(&mut self, index: usize, target: Peg) {
        let Some(from) = self.tower.peg(index) else {
            return;
        };
        let has_sub_tower = index + 1 < self.tower.len();

        let Some(spare) = Peg::third(from, target) else {
            // Already in place; only the sub-tower may still need to follow.
            if has_sub_tower {
                self.relocate(index + 1, target);
            }
            return;
        };

        if has_sub_tower {
            self.relocate(index + 1, spare);
        }

        self.step(index, from, target);

        if has_sub_tower {
            self.relocate(index + 1, target);
        }
    }

    /// Performs one move and hands the new state to the renderer.
    fn step(&mut self, index: usize, from: Peg, to: Peg) {
        let mov = Move::new(self.moves + 1, index, from, to);
        debug_assert!(
            LegalMove::check(&mov, self.tower).is_ok(),
            "Solver produced an illegal move: {mov}"
        );

        self.tower.set_peg(index, to);
        self.moves = mov.number;
        debug!(%mov, tower = %self.tower, "Moved cylinder");

        self.render.render(self.tower, &mov);
    }
}
