//! Display tags attached to cylinders.

use serde::{Deserialize, Serialize};

/// Opaque colour tag. The solver never looks at it; renderers map it to
/// whatever their terminal understands.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum Colour {
    /// Terminal default foreground.
    #[default]
    Default,
    /// Red.
    Red,
    /// Green.
    Green,
    /// Yellow.
    Yellow,
    /// Blue.
    Blue,
    /// Magenta.
    Magenta,
    /// Cyan.
    Cyan,
    /// White.
    White,
}

/// Colours handed out to cylinders when none are supplied, cycled by index.
pub const DEFAULT_PALETTE: [Colour; 6] = [
    Colour::Red,
    Colour::Green,
    Colour::Yellow,
    Colour::Blue,
    Colour::Magenta,
    Colour::Cyan,
];

/// Default colour for the cylinder at `index`.
pub fn palette_colour(index: usize) -> Colour {
    DEFAULT_PALETTE[index % DEFAULT_PALETTE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_palette_cycles() {
        assert_eq!(palette_colour(0), Colour::Red);
        assert_eq!(palette_colour(5), Colour::Cyan);
        assert_eq!(palette_colour(6), Colour::Red);
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(Colour::from_str("Yellow").unwrap(), Colour::Yellow);
        assert_eq!(Colour::from_str("MAGENTA").unwrap(), Colour::Magenta);
        assert!(Colour::from_str("mauve").is_err());
        assert_eq!(Colour::Green.to_string(), "green");
    }
}
