//! The seam between the solver and whatever shows its progress.

use super::{Move, Tower};

/// Receives every tower state the solver produces.
///
/// Called exactly once per move, synchronously, in move order. The solver
/// ignores anything a renderer does; failures are the renderer's to keep.
pub trait Render {
    /// Observes the tower right after `step` was applied.
    fn render(&mut self, tower: &Tower, step: &Move);
}

impl<F> Render for F
where
    F: FnMut(&Tower, &Move),
{
    fn render(&mut self, tower: &Tower, step: &Move) {
        self(tower, step)
    }
}

/// Renderer that discards every frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Render for Silent {
    fn render(&mut self, _tower: &Tower, _step: &Move) {}
}

/// Renderer that records moves and the tower after each one.
#[derive(Debug, Clone, Default)]
pub struct MoveLog {
    moves: Vec<Move>,
    snapshots: Vec<Tower>,
}

impl MoveLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded moves, in order.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Tower state after each recorded move.
    pub fn snapshots(&self) -> &[Tower] {
        &self.snapshots
    }

    /// Consumes the log, keeping only the moves.
    pub fn into_moves(self) -> Vec<Move> {
        self.moves
    }
}

impl Render for MoveLog {
    fn render(&mut self, tower: &Tower, step: &Move) {
        self.moves.push(*step);
        self.snapshots.push(tower.clone());
    }
}
