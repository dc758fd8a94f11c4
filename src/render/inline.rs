//! In-place ANSI animation.
//!
//! Each frame is a caption line followed by the tower art. Before drawing
//! the next frame the cursor moves back up over the previous one and clears
//! it, so the tower animates in place inside normal scrollback. Lines are
//! cut to the terminal width when one is set; a wrapped line would occupy
//! two rows and break the move back up.

use super::{RenderError, art, move_caption, palette};
use crossterm::{
    cursor::{MoveToColumn, MoveUp},
    queue,
    style::{Print, PrintStyledContent, Stylize},
    terminal::{Clear, ClearType},
};
use hanoi_core::{Colour, Move, Render, Tower};
use std::io::Write;
use std::time::Duration;
use tracing::{instrument, warn};

/// Renderer writing coloured frames to any [`Write`] sink.
#[derive(Debug)]
pub struct AnsiRenderer<W: Write> {
    out: W,
    delay: Duration,
    total: u64,
    last_height: u16,
    width: Option<usize>,
    error: Option<RenderError>,
}

impl<W: Write> AnsiRenderer<W> {
    /// Creates a renderer that pauses `delay` after each move of a
    /// `total`-move solution.
    pub fn new(out: W, delay: Duration, total: u64) -> Self {
        Self {
            out,
            delay,
            total,
            last_height: 0,
            width: None,
            error: None,
        }
    }

    /// Cuts every printed line to `columns` characters.
    pub fn with_width(mut self, columns: u16) -> Self {
        self.width = Some(usize::from(columns));
        self
    }

    /// Draws `tower` under `caption`, replacing the previous frame.
    #[instrument(skip(self, tower))]
    pub fn draw(&mut self, tower: &Tower, caption: &str) -> Result<(), RenderError> {
        if self.last_height > 0 {
            queue!(
                self.out,
                MoveUp(self.last_height),
                MoveToColumn(0),
                Clear(ClearType::FromCursorDown)
            )?;
        }

        let caption: String = match self.width {
            Some(width) => caption.chars().take(width).collect(),
            None => caption.to_string(),
        };
        queue!(self.out, Print(caption), Print("\n"))?;
        let lines = art::draw(tower);
        for line in &lines {
            let line = match self.width {
                Some(width) => art::clip(line, width),
                None => line.clone(),
            };
            for segment in &line {
                if segment.colour == Colour::Default {
                    queue!(self.out, Print(&segment.text))?;
                } else {
                    let colour = palette::crossterm_colour(segment.colour);
                    queue!(self.out, PrintStyledContent(segment.text.as_str().with(colour)))?;
                }
            }
            queue!(self.out, Print("\n"))?;
        }
        self.out.flush()?;

        self.last_height = u16::try_from(lines.len() + 1).unwrap_or(u16::MAX);
        Ok(())
    }

    /// Leaves the current frame on screen; the next draw starts below it.
    pub fn detach(&mut self) {
        self.last_height = 0;
    }

    /// Reports the first failure seen while rendering moves.
    pub fn finish(self) -> Result<W, RenderError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.out),
        }
    }
}

impl<W: Write> Render for AnsiRenderer<W> {
    fn render(&mut self, tower: &Tower, step: &Move) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.draw(tower, &move_caption(step, self.total)) {
            warn!(error = %err, "Frame dropped; further frames skipped");
            self.error = Some(err);
            return;
        }
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hanoi_core::{Peg, solve};

    fn output(renderer: AnsiRenderer<Vec<u8>>) -> String {
        String::from_utf8(renderer.finish().unwrap()).unwrap()
    }

    #[test]
    fn test_first_frame_has_no_cursor_motion() {
        let mut renderer = AnsiRenderer::new(Vec::new(), Duration::ZERO, 0);
        renderer.draw(&Tower::new(1, Peg::A), "Initial state").unwrap();
        let text = output(renderer);
        assert!(text.starts_with("Initial state\n"));
        assert!(!text.contains("\x1b[1A"));
        // Red cylinder uses xterm colour 9.
        assert!(text.contains("\x1b[38;5;9m"));
    }

    #[test]
    fn test_later_frames_overwrite_in_place() {
        let mut renderer = AnsiRenderer::new(Vec::new(), Duration::ZERO, 1);
        let mut tower = Tower::new(1, Peg::A);
        renderer.draw(&tower, "Initial state").unwrap();
        solve(&mut tower, Peg::C, &mut renderer).unwrap();
        let text = output(renderer);

        // One caption line plus four art lines for a single cylinder.
        assert!(text.contains("\x1b[5A"));
        assert!(text.contains("Move 1 of 1: cylinder 0 A -> C"));
    }

    #[test]
    fn test_detach_keeps_previous_frame() {
        let mut renderer = AnsiRenderer::new(Vec::new(), Duration::ZERO, 0);
        let tower = Tower::new(1, Peg::A);
        renderer.draw(&tower, "first").unwrap();
        renderer.detach();
        renderer.draw(&tower, "second").unwrap();
        assert!(!output(renderer).contains("\x1b[5A"));
    }

    #[test]
    fn test_narrow_terminal_clips_lines() {
        let mut renderer = AnsiRenderer::new(Vec::new(), Duration::ZERO, 0).with_width(5);
        renderer.draw(&Tower::new(3, Peg::A), "Initial state").unwrap();
        let text = output(renderer);

        assert!(text.starts_with("Initi\n"));
        assert!(text.contains("-----\n"));
        assert!(!text.contains("------"));
        assert!(!text.contains('B'));
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("broken pipe"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_is_kept_and_solver_completes() {
        let mut renderer = AnsiRenderer::new(BrokenPipe, Duration::ZERO, 3);
        let mut tower = Tower::new(2, Peg::A);
        assert_eq!(solve(&mut tower, Peg::C, &mut renderer), Ok(3));
        assert!(renderer.finish().is_err());
    }
}
