// Immutable square character grid stored flat in row-major order

use std::fmt;

use crate::GridError;

/// A square `n x n` grid of characters.
///
/// Cells are stored flat in row-major order: cell `idx` sits at row
/// `idx / n`, column `idx % n`. The grid is validated once at construction
/// and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<char>,
    side: usize,
}

impl Grid {
    /// Build a grid from a flat row-major character sequence.
    ///
    /// Fails with [`GridError::NotSquare`] if the number of characters has no
    /// integer square root. An empty string is a valid `0 x 0` grid.
    pub fn new(text: &str) -> Result<Self, GridError> {
        Self::from_chars(text.chars().collect())
    }

    /// Build a grid from already-decoded cells.
    pub fn from_chars(cells: Vec<char>) -> Result<Self, GridError> {
        let len = cells.len();
        let side = len.isqrt();
        if side * side != len {
            return Err(GridError::NotSquare { len });
        }
        Ok(Self { cells, side })
    }

    /// Build a grid from row-per-line text.
    ///
    /// All whitespace (including line breaks) is dropped and the remaining
    /// characters are concatenated, so a grid read this way cannot contain
    /// whitespace cells. Squareness is checked on the concatenation, not per
    /// line.
    pub fn from_rows(text: &str) -> Result<Self, GridError> {
        Self::from_chars(text.chars().filter(|c| !c.is_whitespace()).collect())
    }

    /// Construct from cells already known to hold `side * side` entries.
    pub(crate) fn from_square(cells: Vec<char>, side: usize) -> Self {
        debug_assert_eq!(cells.len(), side * side);
        Self { cells, side }
    }

    /// Side length `n`.
    #[inline]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Number of cells, `n * n`.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The character at cell `idx`, or `None` past the last cell.
    #[inline]
    pub fn get(&self, idx: usize) -> Option<char> {
        self.cells.get(idx).copied()
    }

    /// All cells in row-major order.
    #[inline]
    pub fn cells(&self) -> &[char] {
        &self.cells
    }

    /// The cells of row `r`, or `None` if `r >= n`.
    pub fn row(&self, r: usize) -> Option<&[char]> {
        if r >= self.side {
            return None;
        }
        let base = r * self.side;
        Some(&self.cells[base..base + self.side])
    }

    /// `(row, column)` of cell `idx`.
    ///
    /// Only meaningful for non-empty grids.
    #[inline]
    pub fn position(&self, idx: usize) -> (usize, usize) {
        (idx / self.side, idx % self.side)
    }
}

impl fmt::Display for Grid {
    /// Renders one row per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.side {
            let base = r * self.side;
            for ch in &self.cells[base..base + self.side] {
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
