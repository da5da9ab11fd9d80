use std::sync::atomic::{AtomicU8, Ordering};

/// Marker for a cell no agent has claimed yet. Unclaimed cells render as
/// walls; the outermost ring of the grid stays unclaimed forever.
pub const UNCLAIMED: u8 = b'.';

/// Square character grid shared by all carving agents.
///
/// Cells are atomics so four agents can claim concurrently without a lock;
/// which agent wins a contested cell depends on scheduling and that
/// nondeterminism is part of the output, not a defect.
pub struct Grid {
    size: usize,
    cells: Vec<AtomicU8>,
}

impl Grid {
    pub fn new(size: usize) -> Self {
        let mut cells = Vec::with_capacity(size * size);
        cells.resize_with(size * size, || AtomicU8::new(UNCLAIMED));
        Self { size, cells }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Marker at (row, col). Callers bounds-check first; like the carving
    /// walk itself, access and bounds checking are separate steps.
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[row * self.size + col].load(Ordering::Relaxed)
    }

    pub fn set(&self, row: usize, col: usize, marker: u8) {
        self.cells[row * self.size + col].store(marker, Ordering::Relaxed);
    }

    /// Interior check: true iff `1 <= row <= size-2` and `1 <= col <= size-2`.
    ///
    /// Deliberately not a full [0, size-1] bounds check. The walk must never
    /// touch the outermost ring, which remains '.' and forms the outer wall.
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        (1..=self.size.saturating_sub(2)).contains(&row)
            && (1..=self.size.saturating_sub(2)).contains(&col)
    }

    /// Atomically claim (row, col) with `marker` iff it is still unclaimed.
    /// Returns false if another agent got there first.
    pub fn try_claim(&self, row: usize, col: usize, marker: u8) -> bool {
        self.cells[row * self.size + col]
            .compare_exchange(UNCLAIMED, marker, Ordering::Relaxed, Ordering::Relaxed)
            .is_ok()
    }

    /// Rows of space-separated marker characters.
    pub fn render(&self) -> Vec<String> {
        (0..self.size)
            .map(|row| {
                let mut line = String::with_capacity(self.size * 2);
                for col in 0..self.size {
                    if col > 0 {
                        line.push(' ');
                    }
                    line.push(self.get(row, col) as char);
                }
                line
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_all_unclaimed() {
        let grid = Grid::new(5);
        for row in 0..5 {
            for col in 0..5 {
                assert_eq!(grid.get(row, col), UNCLAIMED);
            }
        }
    }

    #[test]
    fn in_bounds_is_interior_only() {
        let grid = Grid::new(7);
        assert!(grid.in_bounds(1, 1));
        assert!(grid.in_bounds(5, 5));
        assert!(!grid.in_bounds(0, 3));
        assert!(!grid.in_bounds(3, 0));
        assert!(!grid.in_bounds(6, 3));
        assert!(!grid.in_bounds(3, 6));
    }

    #[test]
    fn in_bounds_degenerate_sizes_have_no_interior() {
        assert!(!Grid::new(1).in_bounds(0, 0));
        assert!(!Grid::new(2).in_bounds(1, 1));
        // size 3: interior is the single cell (1,1)
        let grid = Grid::new(3);
        assert!(grid.in_bounds(1, 1));
        assert!(!grid.in_bounds(2, 2));
    }

    #[test]
    fn try_claim_only_wins_once() {
        let grid = Grid::new(5);
        assert!(grid.try_claim(2, 2, b'0'));
        assert!(!grid.try_claim(2, 2, b'1'));
        assert_eq!(grid.get(2, 2), b'0');
    }

    #[test]
    fn render_is_space_separated_rows() {
        let grid = Grid::new(3);
        grid.set(1, 1, b'0');
        let rows = grid.render();
        assert_eq!(rows, vec![". . .", ". 0 .", ". . ."]);
    }
}
