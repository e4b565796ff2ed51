//! The persisted per-cell state.

use std::fmt;

/// Render glyph for a live cell.
pub const ALIVE_GLYPH: char = 'O';

/// Render glyph for a dead cell.
pub const DEAD_GLYPH: char = '.';

/// State persisted for one grid position.
///
/// A `Cell` is plain data: the alive/dead bit and the number of rounds the
/// cell has completed. The messaging resources a cell uses while a run is
/// in flight (inbox, outbound links) are scoped to that run and live in the
/// engine, never here. The default cell is dead at round 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    /// Whether the cell is alive.
    pub alive: bool,
    /// Rounds completed so far; reset to 0 whenever topology is rebuilt.
    pub round: u64,
}

impl Cell {
    /// The render glyph for this cell's current state.
    pub fn glyph(&self) -> char {
        if self.alive {
            ALIVE_GLYPH
        } else {
            DEAD_GLYPH
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
