//! Colour tags mapped onto xterm-256 palette entries.

use hanoi_core::Colour;

/// xterm-256 index for a colour, `None` for the terminal default.
pub fn xterm_index(colour: Colour) -> Option<u8> {
    match colour {
        Colour::Default => None,
        Colour::Red => Some(9),
        Colour::Green => Some(10),
        Colour::Yellow => Some(11),
        Colour::Blue => Some(12),
        Colour::Magenta => Some(13),
        Colour::Cyan => Some(14),
        Colour::White => Some(15),
    }
}

/// Foreground colour for crossterm output.
pub fn crossterm_colour(colour: Colour) -> crossterm::style::Color {
    xterm_index(colour).map_or(crossterm::style::Color::Reset, crossterm::style::Color::AnsiValue)
}

/// Foreground colour for ratatui buffers.
pub fn ratatui_colour(colour: Colour) -> ratatui::style::Color {
    xterm_index(colour).map_or(ratatui::style::Color::Reset, ratatui::style::Color::Indexed)
}
