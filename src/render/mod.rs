//! Presentation layer: turns tower states into terminal output.
//!
//! Nothing here feeds back into the solver. Each renderer implements
//! [`hanoi_core::Render`] and keeps its own I/O failures until `finish`.

pub mod art;
pub mod fullscreen;
pub mod inline;
pub mod palette;
pub mod plain;

use derive_more::{Display, Error};
use hanoi_core::Move;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// How animation frames reach the terminal.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RenderMode {
    /// Coloured ASCII art redrawn in place with cursor movement.
    #[default]
    Inline,
    /// Alternate-screen ratatui view.
    Fullscreen,
    /// Move counter and peg list per move, no escape sequences.
    Plain,
}

/// Caption shown above the tower for a move.
pub fn move_caption(step: &Move, total: u64) -> String {
    format!(
        "Move {} of {}: cylinder {} {} -> {}",
        step.number, total, step.cylinder, step.from, step.to
    )
}

/// Rendering error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Render error: {} at {}:{}", message, file, line)]
pub struct RenderError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl RenderError {
    /// Creates a new render error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for RenderError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("Terminal I/O error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hanoi_core::Peg;
    use std::str::FromStr;

    #[test]
    fn test_move_caption() {
        let step = Move::new(2, 1, Peg::A, Peg::B);
        assert_eq!(move_caption(&step, 7), "Move 2 of 7: cylinder 1 A -> B");
    }

    #[test]
    fn test_render_mode_parse() {
        assert_eq!(RenderMode::from_str("fullscreen").unwrap(), RenderMode::Fullscreen);
        assert_eq!(RenderMode::Plain.to_string(), "plain");
    }

    #[test]
    fn test_io_error_converts() {
        let err: RenderError = std::io::Error::other("broken pipe").into();
        assert!(err.message.contains("broken pipe"));
    }
}
