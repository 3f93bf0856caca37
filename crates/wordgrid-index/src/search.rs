// WordSearch: grid plus the index selected by IndexOptions
//
// Construction either fails (grid not square, worker pool failure) or
// returns a handle with a fully built index. There is no partially built
// state and no way to rebuild; a handle is read-only for its whole life and
// can be shared between threads.

use wordgrid_core::{Grid, MAX_WORD_LEN, is_searchable_len};

use crate::options::{IndexOptions, Strategy};
use crate::pool::WorkerPool;
use crate::precompute::WordSet;
use crate::scan::ScanIndex;
use crate::{IndexError, WordIndex, parallel};

/// Membership queries against a square character grid.
#[derive(Debug)]
pub struct WordSearch {
    grid: Grid,
    index: Box<dyn WordIndex>,
    strategy: Strategy,
    workers: usize,
}

impl WordSearch {
    /// Build from flat row-major text with default options.
    pub fn new(text: &str) -> Result<Self, IndexError> {
        Self::with_options(text, IndexOptions::default())
    }

    /// Build from flat row-major text.
    pub fn with_options(text: &str, options: IndexOptions) -> Result<Self, IndexError> {
        Self::from_grid(Grid::new(text)?, options)
    }

    /// Build from an already validated grid.
    pub fn from_grid(grid: Grid, options: IndexOptions) -> Result<Self, IndexError> {
        let workers = options.worker_count();
        let strategy = options
            .strategy
            .resolve(grid.side(), workers, options.parallel_min_side);

        let index: Box<dyn WordIndex> = match strategy {
            Strategy::Scan => Box::new(ScanIndex::build(&grid)),
            Strategy::Parallel => Box::new(parallel::build_with_workers(&grid, workers)?),
            Strategy::Sequential | Strategy::Auto => Box::new(WordSet::build(&grid)),
        };
        let workers = if strategy == Strategy::Parallel {
            workers.get()
        } else {
            1
        };

        Ok(Self {
            grid,
            index,
            strategy,
            workers,
        })
    }

    /// Build with the parallel strategy on a caller-owned pool.
    ///
    /// The pool is only borrowed for the duration of the build.
    pub fn with_pool(grid: Grid, pool: &WorkerPool) -> Result<Self, IndexError> {
        let index = parallel::build_in(&grid, pool)?;
        Ok(Self {
            grid,
            index: Box::new(index),
            strategy: Strategy::Parallel,
            workers: pool.workers(),
        })
    }

    /// Whether `word` reads left-to-right or top-to-bottom from some cell.
    ///
    /// Words that are empty, shorter than 4 or longer than 20 characters are
    /// never present. Never fails.
    pub fn is_present(&self, word: &str) -> bool {
        // Counting stops just past the band so huge inputs are rejected early.
        let len = word.chars().take(MAX_WORD_LEN + 1).count();
        if !is_searchable_len(len) {
            return false;
        }
        self.index.contains(&self.grid, word)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The strategy actually used; never [`Strategy::Auto`].
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Worker threads used to build the index (1 unless parallel).
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Distinct runs held by the index, or `None` for the scan strategy.
    pub fn index_len(&self) -> Option<usize> {
        self.index.run_count()
    }
}
