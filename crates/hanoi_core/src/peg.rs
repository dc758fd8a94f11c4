//! The three pegs of the puzzle.

use serde::{Deserialize, Serialize};

/// One of the three fixed slots a cylinder can occupy.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Peg {
    /// Left peg (conventional source).
    A,
    /// Middle peg.
    B,
    /// Right peg (conventional target).
    C,
}

impl Peg {
    /// All three pegs, left to right.
    pub const ALL: [Peg; 3] = [Peg::A, Peg::B, Peg::C];

    /// Returns the peg that is neither `a` nor `b`.
    ///
    /// Commutative in its arguments. Returns `None` when `a == b`, since two
    /// equal pegs leave two candidates.
    pub fn third(a: Peg, b: Peg) -> Option<Peg> {
        match (a, b) {
            (Peg::A, Peg::B) | (Peg::B, Peg::A) => Some(Peg::C),
            (Peg::A, Peg::C) | (Peg::C, Peg::A) => Some(Peg::B),
            (Peg::B, Peg::C) | (Peg::C, Peg::B) => Some(Peg::A),
            _ => None,
        }
    }

    /// Column position of the peg (0 for `A`).
    pub fn column(self) -> usize {
        match self {
            Peg::A => 0,
            Peg::B => 1,
            Peg::C => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_third_is_the_remaining_peg() {
        assert_eq!(Peg::third(Peg::A, Peg::B), Some(Peg::C));
        assert_eq!(Peg::third(Peg::A, Peg::C), Some(Peg::B));
        assert_eq!(Peg::third(Peg::B, Peg::C), Some(Peg::A));
    }

    #[test]
    fn test_third_is_commutative_and_distinct() {
        for a in Peg::ALL {
            for b in Peg::ALL {
                assert_eq!(Peg::third(a, b), Peg::third(b, a));
                if a != b {
                    let c = Peg::third(a, b).unwrap();
                    assert_ne!(c, a);
                    assert_ne!(c, b);
                    // Any two of the three recover the missing one.
                    assert_eq!(Peg::third(a, c), Some(b));
                    assert_eq!(Peg::third(c, b), Some(a));
                }
            }
        }
    }

    #[test]
    fn test_third_of_equal_pegs_is_none() {
        for peg in Peg::ALL {
            assert_eq!(Peg::third(peg, peg), None);
        }
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!(Peg::from_str("a").unwrap(), Peg::A);
        assert_eq!(Peg::from_str("C").unwrap(), Peg::C);
        assert!(Peg::from_str("D").is_err());
        assert_eq!(Peg::B.to_string(), "B");
    }
}
