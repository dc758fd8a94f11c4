//! Escape-free output: a move counter and the peg of every cylinder.

use super::RenderError;
use hanoi_core::{Move, Render, Tower};
use std::io::Write;
use tracing::warn;

/// Renderer printing `Current move: k` and the tower's peg list per move.
#[derive(Debug)]
pub struct PegListRenderer<W: Write> {
    out: W,
    error: Option<RenderError>,
}

impl<W: Write> PegListRenderer<W> {
    /// Creates a renderer writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    /// Prints a labelled state, e.g. the initial or final tower.
    pub fn print_state(&mut self, label: &str, tower: &Tower) -> Result<(), RenderError> {
        writeln!(self.out, "{} =", label)?;
        writeln!(self.out, "{}", tower)?;
        Ok(())
    }

    /// Reports the first failure seen while rendering moves.
    pub fn finish(self) -> Result<W, RenderError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.out),
        }
    }
}

impl<W: Write> Render for PegListRenderer<W> {
    fn render(&mut self, tower: &Tower, step: &Move) {
        if self.error.is_some() {
            return;
        }
        let written = writeln!(self.out, "Current move: {}", step.number)
            .and_then(|()| writeln!(self.out, "{}", tower));
        if let Err(err) = written {
            let err = RenderError::from(err);
            warn!(error = %err, "Frame dropped; further frames skipped");
            self.error = Some(err);
        }
    }
}
