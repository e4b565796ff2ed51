//! Moore neighborhood enumeration and the flat-index adjacency table.

use smallvec::SmallVec;

/// Maximum possible neighbor count on a non-wrapping rectangular grid.
///
/// The engine sizes its per-cell messaging against this bound: with no
/// wraparound there are no self-links or duplicate links, so one link per
/// offset is the most a cell ever carries. A wraparound variant could
/// produce duplicate links and would need a different bound; the constant
/// is coupled to the no-wrap topology, not a tunable.
pub const MAX_DEGREE: usize = 8;

/// All 8 offsets: N, S, W, E, NW, NE, SW, SE.
const OFFSETS_8: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// In-bounds Moore neighbors of `(row, col)` on a `rows × cols` grid.
///
/// Excludes the cell itself and any out-of-bounds position; no wraparound.
pub fn neighbours(
    rows: usize,
    cols: usize,
    row: usize,
    col: usize,
) -> SmallVec<[(usize, usize); MAX_DEGREE]> {
    let mut result = SmallVec::new();
    for (dr, dc) in OFFSETS_8 {
        let nr = row as i32 + dr;
        let nc = col as i32 + dc;
        if nr >= 0 && nr < rows as i32 && nc >= 0 && nc < cols as i32 {
            result.push((nr as usize, nc as usize));
        }
    }
    result
}

/// Per-cell neighbor table over flat row-major indices.
///
/// `links[i]` holds the flat indices of cell `i`'s in-bounds Moore
/// neighbors, in offset-table order. Moore neighborhoods are symmetric by
/// construction: if `a` appears in `links[b]` then `b` appears in
/// `links[a]`.
#[derive(Clone, Debug)]
pub struct Adjacency {
    rows: usize,
    cols: usize,
    links: Vec<SmallVec<[usize; MAX_DEGREE]>>,
}

impl Adjacency {
    /// Compute the full adjacency table for a `rows × cols` grid.
    pub fn build(rows: usize, cols: usize) -> Self {
        let mut links = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                links.push(
                    neighbours(rows, cols, row, col)
                        .into_iter()
                        .map(|(nr, nc)| nr * cols + nc)
                        .collect(),
                );
            }
        }
        Self { rows, cols, links }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.links.len()
    }

    /// Flat indices of cell `index`'s neighbors.
    pub fn neighbours(&self, index: usize) -> &[usize] {
        &self.links[index]
    }

    /// Number of neighbors of cell `index` (3, 5, or 8 on grids ≥ 3×3).
    pub fn degree(&self, index: usize) -> usize {
        self.links[index].len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ── Neighbour counts ────────────────────────────────────────

    #[test]
    fn corner_edge_interior_counts() {
        let adj = Adjacency::build(5, 4);
        for row in 0..5 {
            for col in 0..4 {
                let on_row_edge = row == 0 || row == 4;
                let on_col_edge = col == 0 || col == 3;
                let expected = match (on_row_edge, on_col_edge) {
                    (true, true) => 3,  // corner
                    (true, false) | (false, true) => 5, // edge
                    (false, false) => 8, // interior
                };
                assert_eq!(
                    adj.degree(row * 4 + col),
                    expected,
                    "degree mismatch at ({row}, {col})"
                );
            }
        }
    }

    #[test]
    fn single_cell_has_no_neighbours() {
        let adj = Adjacency::build(1, 1);
        assert_eq!(adj.degree(0), 0);
    }

    #[test]
    fn single_row_neighbours() {
        let adj = Adjacency::build(1, 3);
        assert_eq!(adj.neighbours(0), &[1]);
        assert_eq!(adj.degree(1), 2);
        assert_eq!(adj.neighbours(2), &[1]);
    }

    #[test]
    fn interior_cell_links_every_surrounding_index() {
        let adj = Adjacency::build(3, 3);
        let mut links: Vec<usize> = adj.neighbours(4).to_vec();
        links.sort_unstable();
        assert_eq!(links, vec![0, 1, 2, 3, 5, 6, 7, 8]);
    }

    #[test]
    fn no_self_links() {
        let adj = Adjacency::build(4, 4);
        for index in 0..adj.cell_count() {
            assert!(!adj.neighbours(index).contains(&index));
        }
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn neighbours_symmetric(rows in 1usize..8, cols in 1usize..8) {
            let adj = Adjacency::build(rows, cols);
            for a in 0..adj.cell_count() {
                for &b in adj.neighbours(a) {
                    prop_assert!(
                        adj.neighbours(b).contains(&a),
                        "neighbour symmetry violated: {} in N({}) but not vice versa",
                        b, a,
                    );
                }
            }
        }

        #[test]
        fn degree_matches_axis_spans(
            rows in 1usize..10,
            cols in 1usize..10,
            row in 0usize..10,
            col in 0usize..10,
        ) {
            let row = row % rows;
            let col = col % cols;
            let adj = Adjacency::build(rows, cols);
            // The neighborhood is the in-bounds (row±1) × (col±1) block
            // minus the cell itself.
            let row_span = (row.min(1) + 1 + usize::from(row + 1 < rows)).min(rows);
            let col_span = (col.min(1) + 1 + usize::from(col + 1 < cols)).min(cols);
            prop_assert_eq!(adj.degree(row * cols + col), row_span * col_span - 1);
        }

        #[test]
        fn degree_never_exceeds_max(rows in 1usize..8, cols in 1usize..8) {
            let adj = Adjacency::build(rows, cols);
            for index in 0..adj.cell_count() {
                prop_assert!(adj.degree(index) <= MAX_DEGREE);
            }
        }
    }
}
