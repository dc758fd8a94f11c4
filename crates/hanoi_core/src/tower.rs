//! Peg state model: cylinders and the tower that owns them.

use super::colour::{Colour, palette_colour};
use super::peg::Peg;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A sized, coloured disk. Only its peg ever changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cylinder {
    peg: Peg,
    size: u32,
    colour: Colour,
}

impl Cylinder {
    /// Current peg.
    pub fn peg(&self) -> Peg {
        self.peg
    }

    /// Width of the cylinder, always odd.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Display tag.
    pub fn colour(&self) -> Colour {
        self.colour
    }
}

/// Size of the cylinder at `index` in a tower of `count` cylinders.
///
/// `1 + 2 * (count - index)`: strictly decreasing and always odd.
pub fn cylinder_size(count: usize, index: usize) -> u32 {
    let steps = u32::try_from(count.saturating_sub(index)).unwrap_or(u32::MAX);
    steps.saturating_mul(2).saturating_add(1)
}

/// The full ordered collection of cylinders.
///
/// Index 0 is the largest (bottom) cylinder, index `len() - 1` the smallest.
/// Which cylinder sits above which on a peg follows from the index order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tower {
    cylinders: Vec<Cylinder>,
}

impl Tower {
    /// Creates `count` cylinders on `source`, coloured from the default palette.
    #[instrument]
    pub fn new(count: usize, source: Peg) -> Self {
        let colours: Vec<Colour> = (0..count).map(palette_colour).collect();
        Self::with_colours(&colours, source)
    }

    /// Creates one cylinder per colour on `source`, largest first.
    #[instrument(skip(colours), fields(count = colours.len()))]
    pub fn with_colours(colours: &[Colour], source: Peg) -> Self {
        let count = colours.len();
        let cylinders = colours
            .iter()
            .enumerate()
            .map(|(index, &colour)| Cylinder {
                peg: source,
                size: cylinder_size(count, index),
                colour,
            })
            .collect();
        Self { cylinders }
    }

    /// Number of cylinders.
    pub fn len(&self) -> usize {
        self.cylinders.len()
    }

    /// True when the tower has no cylinders.
    pub fn is_empty(&self) -> bool {
        self.cylinders.is_empty()
    }

    /// Current peg of the cylinder at `index`.
    pub fn peg(&self, index: usize) -> Option<Peg> {
        self.cylinders.get(index).map(Cylinder::peg)
    }

    /// Moves the cylinder at `index` onto `peg`.
    ///
    /// No legality checking happens here; see [`crate::LegalMove`]. Indices
    /// past the end are ignored.
    pub fn set_peg(&mut self, index: usize, peg: Peg) {
        if let Some(cylinder) = self.cylinders.get_mut(index) {
            cylinder.peg = peg;
        }
    }

    /// The cylinder at `index`.
    pub fn cylinder(&self, index: usize) -> Option<&Cylinder> {
        self.cylinders.get(index)
    }

    /// All cylinders, largest first.
    pub fn cylinders(&self) -> &[Cylinder] {
        &self.cylinders
    }

    /// Indices of the cylinders on `peg`, bottom to top.
    pub fn on_peg(&self, peg: Peg) -> impl Iterator<Item = usize> + '_ {
        self.cylinders
            .iter()
            .enumerate()
            .filter(move |(_, c)| c.peg == peg)
            .map(|(index, _)| index)
    }

    /// Index of the topmost cylinder on `peg`, if any.
    pub fn top_of(&self, peg: Peg) -> Option<usize> {
        self.on_peg(peg).last()
    }

    /// The single peg holding every cylinder.
    ///
    /// `None` when the tower is empty or split across pegs.
    pub fn shared_peg(&self) -> Option<Peg> {
        let first = self.cylinders.first()?.peg;
        self.cylinders
            .iter()
            .all(|c| c.peg == first)
            .then_some(first)
    }

    /// Peg of every cylinder, largest first.
    pub fn pegs(&self) -> Vec<Peg> {
        self.cylinders.iter().map(Cylinder::peg).collect()
    }
}

impl std::fmt::Display for Tower {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (index, cylinder) in self.cylinders.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", cylinder.peg)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tower_starts_on_source() {
        let tower = Tower::new(4, Peg::A);
        assert_eq!(tower.len(), 4);
        assert_eq!(tower.pegs(), vec![Peg::A; 4]);
        assert_eq!(tower.shared_peg(), Some(Peg::A));
    }

    #[test]
    fn test_sizes_decrease_and_are_odd() {
        let tower = Tower::new(5, Peg::B);
        let sizes: Vec<u32> = tower.cylinders().iter().map(Cylinder::size).collect();
        assert_eq!(sizes, vec![11, 9, 7, 5, 3]);
    }

    #[test]
    fn test_empty_tower() {
        let tower = Tower::new(0, Peg::A);
        assert!(tower.is_empty());
        assert_eq!(tower.shared_peg(), None);
        assert_eq!(tower.to_string(), "[]");
    }

    #[test]
    fn test_with_colours_sets_count_and_colours() {
        let tower = Tower::with_colours(&[Colour::Yellow, Colour::Blue], Peg::C);
        assert_eq!(tower.len(), 2);
        assert_eq!(tower.cylinder(0).map(Cylinder::colour), Some(Colour::Yellow));
        assert_eq!(tower.cylinder(1).map(Cylinder::colour), Some(Colour::Blue));
        assert_eq!(tower.cylinder(1).map(Cylinder::size), Some(3));
    }

    #[test]
    fn test_set_peg_is_a_single_field_write() {
        let mut tower = Tower::new(3, Peg::A);
        tower.set_peg(2, Peg::C);
        assert_eq!(tower.peg(2), Some(Peg::C));
        assert_eq!(tower.peg(1), Some(Peg::A));
        assert_eq!(tower.shared_peg(), None);
        assert_eq!(tower.to_string(), "[A, A, C]");

        // Out of range is a no-op.
        tower.set_peg(9, Peg::B);
        assert_eq!(tower.len(), 3);
    }

    #[test]
    fn test_on_peg_and_top_of() {
        let mut tower = Tower::new(4, Peg::A);
        tower.set_peg(3, Peg::B);
        tower.set_peg(2, Peg::C);
        assert_eq!(tower.on_peg(Peg::A).collect::<Vec<_>>(), vec![0, 1]);
        assert_eq!(tower.top_of(Peg::A), Some(1));
        assert_eq!(tower.top_of(Peg::B), Some(3));
        assert_eq!(tower.top_of(Peg::C), Some(2));
        tower.set_peg(2, Peg::B);
        assert_eq!(tower.top_of(Peg::C), None);
    }
}
