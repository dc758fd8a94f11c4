//! First-class move events.
//!
//! A move is the relocation of one cylinder between two pegs. The solver
//! produces them; renderers, transcripts and contracts consume them.

use super::Peg;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A single relocation of the topmost cylinder of one peg to another peg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    /// Running move count, starting at 1.
    pub number: u64,
    /// Index of the relocated cylinder (0 is the largest).
    pub cylinder: usize,
    /// Peg the cylinder left.
    pub from: Peg,
    /// Peg the cylinder landed on.
    pub to: Peg,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "#{}: cylinder {} {} -> {}",
            self.number, self.cylinder, self.from, self.to
        )
    }
}

/// Error raised when a move is not legal Tower of Hanoi play.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The move names a cylinder the tower does not have.
    #[display("Cylinder {} does not exist", _0)]
    UnknownCylinder(#[error(not(source))] usize),

    /// The cylinder is not on the peg the move claims it leaves.
    #[display("Cylinder {} is on peg {}, not {}", cylinder, actual, claimed)]
    WrongSource {
        /// Cylinder index.
        cylinder: usize,
        /// Where it actually is.
        actual: Peg,
        /// Where the move says it is.
        claimed: Peg,
    },

    /// A smaller cylinder sits on top of the one being moved.
    #[display("Cylinder {} is covered by cylinder {}", cylinder, above)]
    NotTopmost {
        /// Cylinder index.
        cylinder: usize,
        /// Topmost cylinder on the same peg.
        above: usize,
    },

    /// The destination already holds a smaller cylinder.
    #[display("Cylinder {} cannot land on smaller cylinder {}", cylinder, below)]
    LargerOnSmaller {
        /// Cylinder index.
        cylinder: usize,
        /// Topmost cylinder on the destination peg.
        below: usize,
    },

    /// Source and destination are the same peg.
    #[display("Move leaves cylinder on peg {}", _0)]
    SamePeg(#[error(not(source))] Peg),

    /// A tower invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(#[error(not(source))] String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_display() {
        let mv = Move::new(3, 2, Peg::A, Peg::C);
        assert_eq!(mv.to_string(), "#3: cylinder 2 A -> C");
    }

    #[test]
    fn test_move_error_display() {
        let err = MoveError::NotTopmost {
            cylinder: 0,
            above: 2,
        };
        assert_eq!(err.to_string(), "Cylinder 0 is covered by cylinder 2");
    }

    #[test]
    fn test_move_serializes_with_named_fields() {
        let json = serde_json::to_string(&Move::new(1, 0, Peg::A, Peg::B)).unwrap();
        assert_eq!(json, r#"{"number":1,"cylinder":0,"from":"A","to":"B"}"#);
    }
}
