// Precomputed run set, built sequentially

use hashbrown::HashSet;
use wordgrid_core::Grid;

use crate::WordIndex;
use crate::runs::{Run, for_each_run, for_each_run_in_row};

/// The set of every distinct run of 4 to 20 characters in a grid.
///
/// Building costs `n² × 17 × 2` extraction attempts; afterwards a query is a
/// single hash lookup and the grid is never consulted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordSet {
    words: HashSet<String>,
}

impl WordSet {
    /// Enumerate every run of `grid` on the calling thread.
    pub fn build(grid: &Grid) -> Self {
        let mut words = HashSet::new();
        for_each_run(grid, |run: Run| {
            words.insert(run.text);
        });
        Self { words }
    }

    /// The runs starting in a single row.
    ///
    /// This is the unit of work for the parallel builder.
    pub fn build_row(grid: &Grid, row: usize) -> Self {
        let mut words = HashSet::new();
        for_each_run_in_row(grid, row, |run| {
            words.insert(run.text);
        });
        Self { words }
    }

    /// Union of per-row sets.
    ///
    /// The largest part is reused as the base so that only the smaller ones
    /// are rehashed into it.
    pub fn merge(mut parts: Vec<WordSet>) -> Self {
        let Some(largest) = parts
            .iter()
            .enumerate()
            .max_by_key(|(_, p)| p.len())
            .map(|(i, _)| i)
        else {
            return Self::default();
        };
        let mut merged = parts.swap_remove(largest);
        for part in parts {
            merged.words.extend(part.words);
        }
        merged
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Whether `word` is one of the runs. No length check is applied.
    pub fn contains_word(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl WordIndex for WordSet {
    fn contains(&self, _grid: &Grid, word: &str) -> bool {
        self.contains_word(word)
    }

    fn run_count(&self) -> Option<usize> {
        Some(self.len())
    }
}
