//! ASCII drawing of a tower, independent of any terminal.
//!
//! A frame is a list of lines, each a list of coloured [`Segment`]s. Every
//! peg gets a column `2N + 3` wide so the largest cylinder (size `2N + 1`)
//! keeps a blank on each side. Rows are: pole tips, N cylinder levels from
//! top to bottom, the base, and the peg labels.

use hanoi_core::{Colour, Peg, Tower};

/// Run of text drawn in one colour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Characters to print.
    pub text: String,
    /// Colour to print them in.
    pub colour: Colour,
}

impl Segment {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            colour: Colour::Default,
        }
    }
}

/// One printed row of a frame.
pub type ArtLine = Vec<Segment>;

const POLE: &str = "|";
const CYLINDER: char = '=';
const BASE: char = '-';

/// Width of one peg column for `count` cylinders.
pub fn column_width(count: usize) -> usize {
    2 * count + 3
}

/// Number of lines [`draw`] produces for `count` cylinders.
pub fn frame_height(count: usize) -> usize {
    count + 3
}

/// Total width of a frame for `count` cylinders.
pub fn frame_width(count: usize) -> usize {
    column_width(count) * Peg::ALL.len()
}

/// Cuts `line` to at most `width` characters, keeping segment colours.
pub fn clip(line: &[Segment], width: usize) -> ArtLine {
    let mut remaining = width;
    let mut clipped = Vec::new();
    for segment in line {
        if remaining == 0 {
            break;
        }
        let text: String = segment.text.chars().take(remaining).collect();
        remaining -= text.chars().count();
        clipped.push(Segment {
            text,
            colour: segment.colour,
        });
    }
    clipped
}

/// Draws the tower as coloured ASCII art.
pub fn draw(tower: &Tower) -> Vec<ArtLine> {
    let count = tower.len();
    let width = column_width(count);
    let stacks: Vec<Vec<usize>> = Peg::ALL
        .iter()
        .map(|&peg| tower.on_peg(peg).collect())
        .collect();

    let mut lines = Vec::with_capacity(frame_height(count));
    lines.push(Peg::ALL.iter().flat_map(|_| centred(POLE, width)).collect());

    for level in (0..count).rev() {
        let line = stacks
            .iter()
            .flat_map(|stack| match stack.get(level).and_then(|&i| tower.cylinder(i)) {
                Some(cylinder) => {
                    let body = CYLINDER
                        .to_string()
                        .repeat(usize::try_from(cylinder.size()).unwrap_or(width));
                    let mut segments = centred(&body, width);
                    segments[1].colour = cylinder.colour();
                    segments
                }
                None => centred(POLE, width),
            })
            .collect();
        lines.push(line);
    }

    lines.push(vec![Segment::plain(BASE.to_string().repeat(frame_width(count)))]);
    lines.push(
        Peg::ALL
            .iter()
            .flat_map(|peg| centred(&peg.to_string(), width))
            .collect(),
    );
    lines
}

/// Concatenates a frame's text, one line per row, without colours.
pub fn to_plain_text(lines: &[ArtLine]) -> String {
    lines
        .iter()
        .map(|line| line.iter().map(|s| s.text.as_str()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pads `body` with spaces to `width`, returning `[left, body, right]`.
fn centred(body: &str, width: usize) -> [Segment; 3] {
    let len = body.chars().count();
    let left = width.saturating_sub(len) / 2;
    let right = width.saturating_sub(len + left);
    [
        Segment::plain(" ".repeat(left)),
        Segment::plain(body),
        Segment::plain(" ".repeat(right)),
    ]
}
