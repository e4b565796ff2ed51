//! The grid container.

use std::fmt;

use crate::cell::Cell;
use crate::error::FieldError;

/// A `rows × cols` rectangular grid of [`Cell`]s.
///
/// Cells are stored in a flat row-major `Vec` and addressed either by
/// `(row, col)` or by flat index (`row * cols + col`). The field owns all
/// cells exclusively; nothing outside this type holds a reference to an
/// individual cell.
///
/// Direct accessors ([`alive`](Field::alive), [`set_alive`](Field::set_alive),
/// [`round`](Field::round)) carry no concurrency guard — they are legal only
/// while no run is in flight, which the engine guarantees by taking
/// `&mut Field` and not returning until every cell unit has terminated.
///
/// # Panics
///
/// Positional accessors panic on out-of-range coordinates. That is a caller
/// contract violation, not a recoverable condition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Field {
    /// Create a field of the given dimensions with every cell dead at round 0.
    ///
    /// Returns [`FieldError::EmptyField`] if either dimension is zero.
    pub fn all_dead(rows: usize, cols: usize) -> Result<Self, FieldError> {
        if rows == 0 || cols == 0 {
            return Err(FieldError::EmptyField);
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::default(); rows * cols],
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells (`rows * cols`).
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) out of bounds for {}x{} field",
            self.rows,
            self.cols,
        );
        row * self.cols + col
    }

    /// Whether the cell at `(row, col)` is alive.
    pub fn alive(&self, row: usize, col: usize) -> bool {
        self.cells[self.index(row, col)].alive
    }

    /// Set the cell at `(row, col)` alive or dead.
    pub fn set_alive(&mut self, row: usize, col: usize, alive: bool) {
        let idx = self.index(row, col);
        self.cells[idx].alive = alive;
    }

    /// Rounds completed by the cell at `(row, col)`.
    pub fn round(&self, row: usize, col: usize) -> u64 {
        self.cells[self.index(row, col)].round
    }

    /// Row-major snapshot of every cell's alive state.
    ///
    /// Used by the engine to seed cell units at the start of a run.
    pub fn snapshot(&self) -> Vec<bool> {
        self.cells.iter().map(|cell| cell.alive).collect()
    }

    /// Reset every cell's round counter to 0.
    ///
    /// Part of topology rebuild: links and round counters are scoped to a
    /// single run.
    pub fn reset_rounds(&mut self) {
        for cell in &mut self.cells {
            cell.round = 0;
        }
    }

    /// Write back one cell's final state by flat index.
    ///
    /// Used by the engine when a cell unit reports completion.
    ///
    /// # Panics
    ///
    /// Panics if `index >= cell_count()`.
    pub fn record(&mut self, index: usize, alive: bool, round: u64) {
        let cell = &mut self.cells[index];
        cell.alive = alive;
        cell.round = round;
    }

    /// Render the field as text: one glyph per cell followed by a space,
    /// one newline per row. Pure function of current state.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            for cell in row {
                write!(f, "{} ", cell.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn all_dead_starts_dead_at_round_zero() {
        let field = Field::all_dead(3, 4).unwrap();
        assert_eq!(field.rows(), 3);
        assert_eq!(field.cols(), 4);
        assert_eq!(field.cell_count(), 12);
        for r in 0..3 {
            for c in 0..4 {
                assert!(!field.alive(r, c));
                assert_eq!(field.round(r, c), 0);
            }
        }
    }

    #[test]
    fn zero_dimension_is_an_error() {
        assert_eq!(Field::all_dead(0, 5), Err(FieldError::EmptyField));
        assert_eq!(Field::all_dead(5, 0), Err(FieldError::EmptyField));
        assert_eq!(Field::all_dead(0, 0), Err(FieldError::EmptyField));
    }

    // ── Accessors ───────────────────────────────────────────────

    #[test]
    fn set_alive_round_trips() {
        let mut field = Field::all_dead(2, 2).unwrap();
        field.set_alive(1, 0, true);
        assert!(field.alive(1, 0));
        assert!(!field.alive(0, 1));
        field.set_alive(1, 0, false);
        assert!(!field.alive(1, 0));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn alive_out_of_range_panics() {
        let field = Field::all_dead(2, 2).unwrap();
        let _ = field.alive(2, 0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn set_alive_out_of_range_panics() {
        let mut field = Field::all_dead(2, 2).unwrap();
        field.set_alive(0, 2, true);
    }

    // ── Engine write-back ───────────────────────────────────────

    #[test]
    fn record_updates_state_and_round() {
        let mut field = Field::all_dead(2, 3).unwrap();
        field.record(4, true, 7);
        assert!(field.alive(1, 1));
        assert_eq!(field.round(1, 1), 7);
    }

    #[test]
    fn reset_rounds_clears_counters_only() {
        let mut field = Field::all_dead(2, 2).unwrap();
        field.record(0, true, 5);
        field.reset_rounds();
        assert_eq!(field.round(0, 0), 0);
        assert!(field.alive(0, 0));
    }

    // ── Rendering ───────────────────────────────────────────────

    #[test]
    fn render_glyphs_and_layout() {
        let mut field = Field::all_dead(2, 3).unwrap();
        field.set_alive(0, 0, true);
        field.set_alive(1, 2, true);
        assert_eq!(field.render(), "O . . \n. . O \n");
    }

    proptest! {
        #[test]
        fn render_length_matches_dimensions(rows in 1usize..12, cols in 1usize..12) {
            let field = Field::all_dead(rows, cols).unwrap();
            // Each cell renders as glyph + space; each row ends in a newline.
            prop_assert_eq!(field.render().len(), rows * (2 * cols + 1));
        }
    }
}
