//! Full-screen ratatui view of the tower.

use super::{RenderError, art, move_caption, palette};
use hanoi_core::{Move, Render, Tower};
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Widget},
};
use std::time::Duration;
use tracing::{instrument, warn};

/// Widget drawing a tower's ASCII art, centred horizontally.
#[derive(Debug, Clone, Copy)]
pub struct TowerWidget<'a> {
    tower: &'a Tower,
}

impl<'a> TowerWidget<'a> {
    /// Wraps a tower for drawing.
    pub fn new(tower: &'a Tower) -> Self {
        Self { tower }
    }
}

impl Widget for TowerWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = u16::try_from(art::frame_width(self.tower.len())).unwrap_or(u16::MAX);
        let left = area.x + area.width.saturating_sub(width) / 2;

        for (row, line) in art::draw(self.tower).iter().enumerate() {
            let Ok(row) = u16::try_from(row) else { break };
            if row >= area.height {
                break;
            }
            let y = area.y + row;
            let mut x = left;
            for segment in line {
                let remaining = usize::from(area.right().saturating_sub(x));
                if remaining == 0 {
                    break;
                }
                let style = Style::default().fg(palette::ratatui_colour(segment.colour));
                (x, _) = buf.set_stringn(x, y, &segment.text, remaining, style);
            }
        }
    }
}

/// Renderer drawing each state into a ratatui terminal.
#[derive(Debug)]
pub struct TerminalRenderer<B: Backend> {
    terminal: Terminal<B>,
    delay: Duration,
    total: u64,
    error: Option<RenderError>,
}

impl<B: Backend> TerminalRenderer<B> {
    /// Creates a renderer that pauses `delay` after each move of a
    /// `total`-move solution.
    pub fn new(terminal: Terminal<B>, delay: Duration, total: u64) -> Self {
        Self {
            terminal,
            delay,
            total,
            error: None,
        }
    }

    /// Draws `tower` with `caption` as the status line.
    #[instrument(skip(self, tower))]
    pub fn draw(&mut self, tower: &Tower, caption: &str) -> Result<(), RenderError> {
        self.terminal
            .draw(|frame| draw_frame(frame, tower, caption))
            .map_err(|e| RenderError::new(format!("Failed to draw frame: {}", e)))?;
        Ok(())
    }

    /// The underlying terminal.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Reports the first failure seen while rendering moves.
    pub fn finish(self) -> Result<Terminal<B>, RenderError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.terminal),
        }
    }
}

impl<B: Backend> Render for TerminalRenderer<B> {
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

/// Lays out title, tower and caption in the frame.
fn draw_frame(frame: &mut Frame, tower: &Tower, caption: &str) {
    let block = Block::default()
        .title(" Tower of Hanoi ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(frame.area());
    frame.render_widget(block, frame.area());

    let art_height = u16::try_from(art::frame_height(tower.len())).unwrap_or(u16::MAX);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),          // Caption
            Constraint::Length(1),          // Spacer
            Constraint::Length(art_height), // Tower
            Constraint::Min(0),
        ])
        .split(inner);

    let status = Paragraph::new(caption)
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(status, chunks[0]);
    frame.render_widget(TowerWidget::new(tower), chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use hanoi_core::{Colour, Peg, solve};
    use ratatui::backend::TestBackend;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (buf.area.left()..buf.area.right())
            .map(|x| buf[(x, y)].symbol())
            .collect()
    }

    #[test]
    fn test_widget_draws_art_centred() {
        let tower = Tower::new(1, Peg::A);
        let area = Rect::new(0, 0, 19, 4);
        let mut buf = Buffer::empty(area);
        TowerWidget::new(&tower).render(area, &mut buf);

        // Frame width is 15, leaving two columns either side.
        assert_eq!(row_text(&buf, 0), "    |    |    |    ");
        assert_eq!(row_text(&buf, 1), "   ===   |    |    ");
        assert_eq!(row_text(&buf, 3), "    A    B    C    ");
        assert_eq!(buf[(3, 1)].fg, Color::Indexed(9));
    }

    #[test]
    fn test_widget_clips_to_small_area() {
        let tower = Tower::with_colours(&[Colour::Blue, Colour::Cyan], Peg::C);
        let area = Rect::new(0, 0, 5, 2);
        let mut buf = Buffer::empty(area);
        TowerWidget::new(&tower).render(area, &mut buf);
        assert_eq!(row_text(&buf, 0), "   | ");
    }

    #[test]
    fn test_renderer_shows_last_move() {
        let terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
        let mut renderer = TerminalRenderer::new(terminal, Duration::ZERO, 3);
        let mut tower = Tower::new(2, Peg::A);
        assert_eq!(solve(&mut tower, Peg::B, &mut renderer), Ok(3));

        let buf = renderer.terminal().backend().buffer().clone();
        let caption = row_text(&buf, 1);
        assert!(caption.contains("Move 3 of 3: cylinder 1 C -> B"), "{caption}");
        assert!(renderer.finish().is_ok());
    }
}
