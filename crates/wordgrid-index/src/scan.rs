// Query-time scan index with first-character buckets

use hashbrown::HashMap;
use wordgrid_core::{Direction, Grid};

use crate::WordIndex;

/// Index that stores no runs, only where each character occurs.
///
/// Construction is a single pass over the grid. A query looks up the cells
/// holding the word's first character and compares the word against the
/// horizontal and vertical run at each of them, in row-major order, stopping
/// at the first match.
///
/// Buckets are keyed by first character only; direction and remaining length
/// are checked per candidate by [`Grid::matches_at`], which rejects a
/// candidate that cannot fit before touching any further cell.
#[derive(Debug, Clone, Default)]
pub struct ScanIndex {
    buckets: HashMap<char, Vec<usize>>,
}

impl ScanIndex {
    pub fn build(grid: &Grid) -> Self {
        let mut buckets: HashMap<char, Vec<usize>> = HashMap::new();
        for (idx, &ch) in grid.cells().iter().enumerate() {
            buckets.entry(ch).or_default().push(idx);
        }
        Self { buckets }
    }

    /// Cells holding `ch`, in row-major order.
    pub fn candidates(&self, ch: char) -> &[usize] {
        self.buckets.get(&ch).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct characters in the grid.
    pub fn distinct_chars(&self) -> usize {
        self.buckets.len()
    }
}

impl WordIndex for ScanIndex {
    fn contains(&self, grid: &Grid, word: &str) -> bool {
        let word: Vec<char> = word.chars().collect();
        let Some(&first) = word.first() else {
            return false;
        };
        self.candidates(first).iter().any(|&idx| {
            Direction::ALL
                .into_iter()
                .any(|dir| grid.matches_at(idx, dir, &word))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordgrid_core::generate::alphabet_grid;

    #[test]
    fn buckets_record_every_cell_in_order() {
        let grid = Grid::new("abcabcabc").unwrap();
        let index = ScanIndex::build(&grid);
        assert_eq!(index.candidates('a'), &[0, 3, 6]);
        assert_eq!(index.candidates('c'), &[2, 5, 8]);
        assert_eq!(index.distinct_chars(), 3);
    }

    #[test]
    fn absent_first_char_has_no_candidates() {
        let index = ScanIndex::build(&alphabet_grid(4));
        assert!(index.candidates('z').is_empty());
        assert!(!index.contains(&alphabet_grid(4), "zzzz"));
    }

    #[test]
    fn finds_horizontal_and_vertical() {
        let grid = alphabet_grid(10);
        let index = ScanIndex::build(&grid);
        assert!(index.contains(&grid, "abcdefgh"));
        assert!(index.contains(&grid, "akueoyiscm"));
        assert!(index.contains(&grid, "wxyz"));
    }

    #[test]
    fn later_candidate_can_match() {
        // 'g' at cell 6 only reads "ghij" before the row ends; cell 32 holds
        // the full "ghijklmn".
        let grid = alphabet_grid(10);
        let index = ScanIndex::build(&grid);
        assert_eq!(index.candidates('g')[0], 6);
        assert!(index.contains(&grid, "ghijklmn"));
    }

    #[test]
    fn wrapped_text_is_not_a_run() {
        // Cells 9..19 spell "jklmnopqrs" by wrapping from row 0 into row 1.
        // No row starts with 'j', so it is not a run anywhere.
        let grid = alphabet_grid(10);
        let index = ScanIndex::build(&grid);
        assert!(!index.contains(&grid, "jklmnopqrs"));
        assert!(index.contains(&grid, "klmnopqrst"));
    }

    #[test]
    fn empty_grid_contains_nothing() {
        let grid = Grid::new("").unwrap();
        let index = ScanIndex::build(&grid);
        assert!(!index.contains(&grid, "abcd"));
        assert_eq!(index.run_count(), None);
    }
}
