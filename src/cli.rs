//! Command-line interface for hanoi_console.

use clap::{Args, Parser, Subcommand};
use hanoi_console::{Colour, Peg, RenderMode, TranscriptFormat};

/// Hanoi Console - animated Tower of Hanoi solver
#[derive(Parser, Debug)]
#[command(name = "hanoi_console")]
#[command(about = "Animate the optimal Tower of Hanoi solution in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `animate`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Animate the solution
    Animate(AnimateArgs),

    /// Print the optimal move list without animating
    Moves {
        /// Number of cylinders
        #[arg(short = 'n', long, default_value = "4")]
        cylinders: usize,

        /// Peg the tower starts on
        #[arg(long = "from", default_value = "A")]
        source: Peg,

        /// Peg the tower moves to
        #[arg(long = "to", default_value = "C")]
        target: Peg,

        /// Output format
        #[arg(long, value_enum, default_value_t = TranscriptFormat::Text)]
        format: TranscriptFormat,
    },
}

/// Options for the `animate` command. Each one overrides the config file.
#[derive(Args, Debug, Default)]
pub struct AnimateArgs {
    /// Path to a TOML animation config
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Number of cylinders
    #[arg(short = 'n', long)]
    pub cylinders: Option<usize>,

    /// Cylinder colours, largest first (sets the cylinder count)
    #[arg(long, value_delimiter = ',')]
    pub colours: Option<Vec<Colour>>,

    /// Peg the tower starts on
    #[arg(long = "from")]
    pub source: Option<Peg>,

    /// Peg the tower moves to
    #[arg(long = "to")]
    pub target: Option<Peg>,

    /// Pause after each move, in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// How frames are drawn
    #[arg(long, value_enum)]
    pub mode: Option<RenderMode>,
}
