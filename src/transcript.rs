//! Listing of a complete solution, as text or JSON.
//!
//! [`Transcript`] holds every move in memory. [`Transcript::stream`] writes
//! the same output while the solver runs, for towers too tall to collect.

use crate::render::RenderError;
use derive_more::{Display, Error, From};
use hanoi_core::{
    MAX_CYLINDERS, Move, Peg, Render, SolveError, Tower, optimal_moves, solution, solve,
};
use serde::{Deserialize, Serialize};
use std::io::Write;
use tracing::{info, instrument, warn};

/// Output format for a transcript.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    strum::Display,
    strum::EnumString,
    clap::ValueEnum,
)]
#[strum(serialize_all = "lowercase")]
pub enum TranscriptFormat {
    /// One `#k: cylinder i A -> C` line per move.
    #[default]
    Text,
    /// Pretty-printed JSON object.
    Json,
}

/// Every move of the optimal solution for one puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    /// Number of cylinders.
    pub cylinders: usize,
    /// Starting peg.
    pub source: Peg,
    /// Destination peg.
    pub target: Peg,
    /// Moves in order.
    pub moves: Vec<Move>,
}

/// Failure while producing a transcript.
#[derive(Debug, Clone, Display, Error, From)]
pub enum TranscriptError {
    /// The puzzle cannot be solved as asked.
    #[display("{}", _0)]
    Solve(SolveError),
    /// The output could not be written.
    #[display("{}", _0)]
    Write(RenderError),
}

impl Transcript {
    /// Solves a fresh tower and records its moves.
    ///
    /// Holds all `2^N - 1` moves at once; use [`Transcript::stream`] for
    /// tall towers.
    #[instrument]
    pub fn solve(cylinders: usize, source: Peg, target: Peg) -> Result<Self, SolveError> {
        let moves = solution(cylinders, source, target)?;
        Ok(Self {
            cylinders,
            source,
            target,
            moves,
        })
    }

    /// True when the move count is `2^N - 1`.
    pub fn is_optimal(&self) -> bool {
        u64::try_from(self.moves.len()).is_ok_and(|n| n == optimal_moves(self.cylinders))
    }

    /// One line per move.
    pub fn to_text(&self) -> String {
        self.moves.iter().map(|m| format!("{}\n", m)).collect()
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Renders in the requested format.
    pub fn format(&self, format: TranscriptFormat) -> serde_json::Result<String> {
        match format {
            TranscriptFormat::Text => Ok(self.to_text()),
            TranscriptFormat::Json => self.to_json(),
        }
    }

    /// Solves a fresh tower, writing each move to `out` as it is made.
    ///
    /// Text output matches [`Transcript::to_text`]. JSON output parses back
    /// into a [`Transcript`]. Returns the number of moves written.
    #[instrument(skip(out))]
    pub fn stream<W: Write>(
        cylinders: usize,
        source: Peg,
        target: Peg,
        format: TranscriptFormat,
        out: W,
    ) -> Result<u64, TranscriptError> {
        if cylinders > MAX_CYLINDERS {
            return Err(SolveError::TooManyCylinders {
                count: cylinders,
                max: MAX_CYLINDERS,
            }
            .into());
        }

        let mut tower = Tower::new(cylinders, source);
        let mut writer = TranscriptWriter::new(out, format, cylinders, source, target);
        solve(&mut tower, target, &mut writer)?;
        let (written, _) = writer.finish()?;
        info!(written, "Transcript streamed");
        Ok(written)
    }
}

/// Render sink that writes transcript lines as moves arrive.
///
/// JSON output opens with the first move, so a puzzle the solver rejects
/// leaves `out` empty.
#[derive(Debug)]
pub struct TranscriptWriter<W: Write> {
    out: W,
    format: TranscriptFormat,
    cylinders: usize,
    source: Peg,
    target: Peg,
    written: u64,
    error: Option<RenderError>,
}

impl<W: Write> TranscriptWriter<W> {
    /// Creates a sink for the moves of one puzzle.
    pub fn new(
        out: W,
        format: TranscriptFormat,
        cylinders: usize,
        source: Peg,
        target: Peg,
    ) -> Self {
        Self {
            out,
            format,
            cylinders,
            source,
            target,
            written: 0,
            error: None,
        }
    }

    /// Moves written so far.
    pub fn written(&self) -> u64 {
        self.written
    }

    /// Closes the output and reports the first write failure, if any.
    pub fn finish(mut self) -> Result<(u64, W), RenderError> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        if self.format == TranscriptFormat::Json {
            if self.written == 0 {
                self.open_json()?;
                writeln!(self.out, "]\n}}")?;
            } else {
                writeln!(self.out, "\n  ]\n}}")?;
            }
        }
        self.out.flush()?;
        Ok((self.written, self.out))
    }

    fn open_json(&mut self) -> std::io::Result<()> {
        write!(
            self.out,
            "{{\n  \"cylinders\": {},\n  \"source\": \"{}\",\n  \"target\": \"{}\",\n  \"moves\": [",
            self.cylinders, self.source, self.target
        )
    }

    fn write_move(&mut self, step: &Move) -> std::io::Result<()> {
        match self.format {
            TranscriptFormat::Text => writeln!(self.out, "{}", step),
            TranscriptFormat::Json => {
                if self.written == 0 {
                    self.open_json()?;
                    write!(self.out, "\n    ")?;
                } else {
                    write!(self.out, ",\n    ")?;
                }
                serde_json::to_writer(&mut self.out, step)?;
                Ok(())
            }
        }
    }
}

impl<W: Write> Render for TranscriptWriter<W> {
    fn render(&mut self, _tower: &Tower, step: &Move) {
        if self.error.is_some() {
            return;
        }
        match self.write_move(step) {
            Ok(()) => self.written += 1,
            Err(err) => {
                let err = RenderError::from(err);
                warn!(error = %err, "Transcript write failed; further moves skipped");
                self.error = Some(err);
            }
        }
    }
}
