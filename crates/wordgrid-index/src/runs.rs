// Enumeration of every (cell, length, direction) attempt in the word band

use wordgrid_core::{Direction, Grid, MAX_WORD_LEN, MIN_WORD_LEN};

/// One attempted extraction: start cell, run length and direction.
pub type Attempt = (usize, usize, Direction);

/// A run that exists in the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub start: usize,
    pub len: usize,
    pub direction: Direction,
    pub text: String,
}

/// Every attempt whose start cell lies in row `row` of a grid of `side`.
///
/// Covers columns `0..side`, lengths `MIN_WORD_LEN..=MAX_WORD_LEN` and both
/// directions. Attempts that do not fit are still yielded; extraction
/// filters them out.
pub fn row_attempts(side: usize, row: usize) -> impl Iterator<Item = Attempt> {
    let base = row * side;
    (0..side).flat_map(move |col| {
        (MIN_WORD_LEN..=MAX_WORD_LEN).flat_map(move |len| {
            Direction::ALL
                .into_iter()
                .map(move |dir| (base + col, len, dir))
        })
    })
}

/// Every attempt in a grid of `side`, row by row.
///
/// Identical to chaining [`row_attempts`] over rows `0..side`.
pub fn all_attempts(side: usize) -> impl Iterator<Item = Attempt> {
    (0..side).flat_map(move |row| row_attempts(side, row))
}

/// Call `f` with every run that starts in row `row`.
pub fn for_each_run_in_row(grid: &Grid, row: usize, mut f: impl FnMut(Run)) {
    for (start, len, direction) in row_attempts(grid.side(), row) {
        if let Some(text) = grid.extract(start, len, direction) {
            f(Run {
                start,
                len,
                direction,
                text,
            });
        }
    }
}

/// Call `f` with every run in the grid.
pub fn for_each_run(grid: &Grid, mut f: impl FnMut(Run)) {
    for row in 0..grid.side() {
        for_each_run_in_row(grid, row, &mut f);
    }
}
