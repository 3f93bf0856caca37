// Horizontal and vertical run extraction

use crate::grid::Grid;

/// Reading direction of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left to right along a row.
    Horizontal,
    /// Top to bottom along a column.
    Vertical,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Horizontal, Direction::Vertical];

    /// Distance in cells between consecutive characters of a run.
    #[inline]
    fn stride(self, side: usize) -> usize {
        match self {
            Direction::Horizontal => 1,
            Direction::Vertical => side,
        }
    }
}

impl Grid {
    /// Whether a run of `len` characters starting at `idx` stays inside the
    /// grid in direction `dir`.
    ///
    /// A horizontal run may not wrap past the right edge of its row
    /// (`col + len <= n`); a vertical run may not leave the bottom of the grid
    /// (`row + len <= n`). Zero-length runs and starts past the last cell
    /// never fit.
    pub fn fits(&self, idx: usize, len: usize, dir: Direction) -> bool {
        if len == 0 || idx >= self.cell_count() {
            return false;
        }
        let (row, col) = self.position(idx);
        let offset = match dir {
            Direction::Horizontal => col,
            Direction::Vertical => row,
        };
        offset.checked_add(len).is_some_and(|end| end <= self.side())
    }

    /// The run of `len` characters reading right from `idx`, or `None` if it
    /// would wrap past the end of the row.
    pub fn horizontal(&self, idx: usize, len: usize) -> Option<String> {
        if !self.fits(idx, len, Direction::Horizontal) {
            return None;
        }
        Some(self.cells()[idx..idx + len].iter().collect())
    }

    /// The run of `len` characters reading down from `idx`, or `None` if it
    /// would run off the bottom of the grid.
    pub fn vertical(&self, idx: usize, len: usize) -> Option<String> {
        if !self.fits(idx, len, Direction::Vertical) {
            return None;
        }
        let side = self.side();
        (0..len).map(|k| self.get(idx + k * side)).collect()
    }

    /// Dispatch to [`horizontal`](Self::horizontal) or
    /// [`vertical`](Self::vertical).
    pub fn extract(&self, idx: usize, len: usize, dir: Direction) -> Option<String> {
        match dir {
            Direction::Horizontal => self.horizontal(idx, len),
            Direction::Vertical => self.vertical(idx, len),
        }
    }

    /// Whether `word` is the run starting at `idx` in direction `dir`.
    ///
    /// Same outcome as comparing against [`extract`](Self::extract), without
    /// allocating the run.
    pub fn matches_at(&self, idx: usize, dir: Direction, word: &[char]) -> bool {
        if !self.fits(idx, word.len(), dir) {
            return false;
        }
        let stride = dir.stride(self.side());
        word.iter()
            .enumerate()
            .all(|(k, &ch)| self.get(idx + k * stride) == Some(ch))
    }
}
