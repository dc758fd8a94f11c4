//! Hanoi Console library - animated Tower of Hanoi for the terminal
//!
//! The puzzle logic lives in [`hanoi_core`]; this crate adds everything
//! needed to show it.
//!
//! # Architecture
//!
//! - **Config**: TOML file plus command-line overrides
//! - **Render**: ASCII art, inline ANSI animation, full-screen ratatui view,
//!   plain peg lists
//! - **Transcript**: text or JSON listing of a solution
//!
//! # Example
//!
//! ```no_run
//! use hanoi_console::{AnimationConfig, AnsiRenderer, Peg, optimal_moves, solve};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = AnimationConfig::default().with_cylinders(3);
//! config.validate()?;
//!
//! let mut tower = config.tower();
//! let total = optimal_moves(tower.len());
//! let mut renderer = AnsiRenderer::new(std::io::stdout(), config.delay(), total);
//! renderer.draw(&tower, "Initial state")?;
//! let moves = solve(&mut tower, Peg::C, &mut renderer)?;
//! renderer.finish()?;
//! assert_eq!(moves, total);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
pub mod render;
mod transcript;

// Crate-level exports - Configuration
pub use config::{AnimationConfig, ConfigError, DEFAULT_CYLINDERS};

// Crate-level exports - Rendering
pub use render::fullscreen::{TerminalRenderer, TowerWidget};
pub use render::inline::AnsiRenderer;
pub use render::plain::PegListRenderer;
pub use render::{RenderError, RenderMode};

// Crate-level exports - Transcripts
pub use transcript::{Transcript, TranscriptError, TranscriptFormat, TranscriptWriter};

// Crate-level exports - Puzzle types
pub use hanoi_core::{
    Colour, Cylinder, InvariantSet, LegalMove, MAX_CYLINDERS, Move, MoveContract, MoveError,
    MoveLog, Peg, Render, Silent, SolveError, Tower, TowerInvariants, optimal_moves, solution,
    solve,
};
