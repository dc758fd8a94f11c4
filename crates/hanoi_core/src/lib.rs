//! Pure Tower of Hanoi logic.
//!
//! A [`Tower`] holds cylinders of strictly decreasing size, each assigned to
//! one of three [`Peg`]s. [`solve`] moves the whole stack to a target peg in
//! the optimal `2^N - 1` moves, handing every intermediate state to a
//! [`Render`] sink.
//!
//! # Example
//!
//! ```
//! use hanoi_core::{MoveLog, Peg, Tower, solve};
//!
//! let mut tower = Tower::new(3, Peg::A);
//! let mut log = MoveLog::new();
//! let moves = solve(&mut tower, Peg::C, &mut log).unwrap();
//!
//! assert_eq!(moves, 7);
//! assert_eq!(tower.shared_peg(), Some(Peg::C));
//! assert_eq!(log.moves().len(), 7);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod colour;
pub mod contracts;
pub mod invariants;
mod peg;
mod render;
mod solver;
mod tower;

pub use action::{Move, MoveError};
pub use colour::{Colour, DEFAULT_PALETTE, palette_colour};
pub use contracts::{Contract, LegalMove, MoveContract};
pub use invariants::{Invariant, InvariantSet, InvariantViolation, TowerInvariants};
pub use peg::Peg;
pub use render::{MoveLog, Render, Silent};
pub use solver::{MAX_CYLINDERS, SolveError, optimal_moves, solution, solve};
pub use tower::{Cylinder, Tower, cylinder_size};
