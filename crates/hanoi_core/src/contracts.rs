//! Contract-based validation for moves.
//!
//! The tower's mutator trusts its caller. Contracts state what a legal move
//! is so that move sequences can be checked independently of the solver.

use super::action::{Move, MoveError};
use super::invariants::{InvariantSet, TowerInvariants};
use super::Tower;
use tracing::{instrument, warn};

/// Legality rules for changing a state `S` with an action `A`.
///
/// `pre` looks at the state the action is about to change; `post` compares
/// the state before and after it.
pub trait Contract<S, A> {
    /// Rejects an action the state does not allow.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Rejects a resulting state that breaks a tower property.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: the cylinder exists and sits on the move's source peg.
pub struct OnSourcePeg;

impl OnSourcePeg {
    /// Validates the move's source against the tower.
    #[instrument(skip(tower))]
    pub fn check(mov: &Move, tower: &Tower) -> Result<(), MoveError> {
        let actual = tower
            .peg(mov.cylinder)
            .ok_or(MoveError::UnknownCylinder(mov.cylinder))?;
        if actual != mov.from {
            return Err(MoveError::WrongSource {
                cylinder: mov.cylinder,
                actual,
                claimed: mov.from,
            });
        }
        if mov.from == mov.to {
            return Err(MoveError::SamePeg(mov.to));
        }
        Ok(())
    }
}

/// Precondition: the cylinder is the topmost one on its peg.
pub struct Topmost;

impl Topmost {
    /// Validates that nothing rests on the moving cylinder.
    #[instrument(skip(tower))]
    pub fn check(mov: &Move, tower: &Tower) -> Result<(), MoveError> {
        match tower.top_of(mov.from) {
            Some(above) if above != mov.cylinder => Err(MoveError::NotTopmost {
                cylinder: mov.cylinder,
                above,
            }),
            _ => Ok(()),
        }
    }
}

/// Precondition: the destination's top cylinder, if any, is larger.
pub struct LandsOnLarger;

impl LandsOnLarger {
    /// Validates the destination peg.
    #[instrument(skip(tower))]
    pub fn check(mov: &Move, tower: &Tower) -> Result<(), MoveError> {
        match tower.top_of(mov.to) {
            Some(below) if below > mov.cylinder => Err(MoveError::LargerOnSmaller {
                cylinder: mov.cylinder,
                below,
            }),
            _ => Ok(()),
        }
    }
}

/// Composite precondition: a move is legal Tower of Hanoi play.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(tower))]
    pub fn check(mov: &Move, tower: &Tower) -> Result<(), MoveError> {
        OnSourcePeg::check(mov, tower)?;
        Topmost::check(mov, tower)?;
        LandsOnLarger::check(mov, tower)?;
        Ok(())
    }
}

/// Full legality check for one move: [`LegalMove`] before it,
/// [`TowerInvariants`] after it.
pub struct MoveContract;

impl Contract<Tower, Move> for MoveContract {
    fn pre(tower: &Tower, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, tower)
    }

    fn post(_before: &Tower, after: &Tower) -> Result<(), MoveError> {
        TowerInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Tower postcondition failed");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

impl MoveContract {
    /// Applies a move after checking it, then verifies the tower.
    #[instrument(skip(tower))]
    pub fn apply(tower: &mut Tower, action: &Move) -> Result<(), MoveError> {
        Self::pre(tower, action)?;
        let before = tower.clone();
        tower.set_peg(action.cylinder, action.to);
        Self::post(&before, tower)
    }

    /// Applies a whole move sequence, stopping at the first illegal move.
    #[instrument(skip(tower, moves), fields(moves = moves.len()))]
    pub fn replay(tower: &mut Tower, moves: &[Move]) -> Result<(), MoveError> {
        moves.iter().try_for_each(|mov| Self::apply(tower, mov))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Peg;

    #[test]
    fn test_precondition_top_cylinder_moves() {
        let tower = Tower::new(3, Peg::A);
        let action = Move::new(1, 2, Peg::A, Peg::C);
        assert!(MoveContract::pre(&tower, &action).is_ok());
    }

    #[test]
    fn test_precondition_covered_cylinder() {
        let tower = Tower::new(3, Peg::A);
        let action = Move::new(1, 0, Peg::A, Peg::C);
        assert_eq!(
            MoveContract::pre(&tower, &action),
            Err(MoveError::NotTopmost {
                cylinder: 0,
                above: 2
            })
        );
    }

    #[test]
    fn test_precondition_larger_on_smaller() {
        let mut tower = Tower::new(3, Peg::A);
        tower.set_peg(2, Peg::C);
        let action = Move::new(2, 1, Peg::A, Peg::C);
        assert_eq!(
            MoveContract::pre(&tower, &action),
            Err(MoveError::LargerOnSmaller {
                cylinder: 1,
                below: 2
            })
        );
    }

    #[test]
    fn test_precondition_wrong_source() {
        let tower = Tower::new(2, Peg::A);
        let action = Move::new(1, 1, Peg::B, Peg::C);
        assert!(matches!(
            MoveContract::pre(&tower, &action),
            Err(MoveError::WrongSource { .. })
        ));
    }

    #[test]
    fn test_precondition_unknown_cylinder_and_same_peg() {
        let tower = Tower::new(2, Peg::A);
        assert_eq!(
            MoveContract::pre(&tower, &Move::new(1, 5, Peg::A, Peg::B)),
            Err(MoveError::UnknownCylinder(5))
        );
        assert_eq!(
            MoveContract::pre(&tower, &Move::new(1, 1, Peg::A, Peg::A)),
            Err(MoveError::SamePeg(Peg::A))
        );
    }

    #[test]
    fn test_apply_mutates_only_on_success() {
        let mut tower = Tower::new(2, Peg::A);
        assert!(MoveContract::apply(&mut tower, &Move::new(1, 0, Peg::A, Peg::B)).is_err());
        assert_eq!(tower.pegs(), vec![Peg::A, Peg::A]);

        MoveContract::apply(&mut tower, &Move::new(1, 1, Peg::A, Peg::B)).unwrap();
        assert_eq!(tower.pegs(), vec![Peg::A, Peg::B]);
    }

    #[test]
    fn test_replay_classic_two_cylinder_solution() {
        let moves = [
            Move::new(1, 1, Peg::A, Peg::B),
            Move::new(2, 0, Peg::A, Peg::C),
            Move::new(3, 1, Peg::B, Peg::C),
        ];
        let mut tower = Tower::new(2, Peg::A);
        MoveContract::replay(&mut tower, &moves).unwrap();
        assert_eq!(tower.shared_peg(), Some(Peg::C));
    }
}
