//! Word indexing and lookup over square character grids.
//!
//! A word is present in a grid if it reads contiguously left-to-right or
//! top-to-bottom from some cell and is 4 to 20 characters long. Three
//! interchangeable strategies answer that question with different
//! preprocessing costs:
//!
//! - [`Strategy::Scan`] -- no precompute; first-character buckets are built at
//!   construction and candidate cells are compared at query time.
//! - [`Strategy::Sequential`] -- every run in the length band is enumerated
//!   once into a [`WordSet`]; queries are a single set lookup.
//! - [`Strategy::Parallel`] -- the same enumeration split into one unit per
//!   grid row, run on a [`WorkerPool`] and merged by union.
//!
//! [`WordSearch`] owns the grid plus whichever index the options select.
//!
//! # Architecture
//!
//! - [`options`] -- Strategy selection and worker count
//! - [`runs`] -- Enumeration of every (cell, length, direction) attempt
//! - [`scan`] -- First-character bucket index
//! - [`precompute`] -- Full run set, built sequentially
//! - [`parallel`] -- Full run set, built row-by-row on a worker pool
//! - [`pool`] -- Explicit worker pool with bounded lifetime
//! - [`search`] -- The query handle

pub mod options;
pub mod parallel;
pub mod pool;
pub mod precompute;
pub mod runs;
pub mod scan;
pub mod search;

use std::fmt;

use wordgrid_core::{Grid, GridError};

pub use options::{IndexOptions, Strategy, UnknownStrategy};
pub use pool::WorkerPool;
pub use precompute::WordSet;
pub use scan::ScanIndex;
pub use search::WordSearch;

/// Error type for index construction.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    /// The grid text was rejected.
    #[error(transparent)]
    Grid(#[from] GridError),

    /// The worker pool could not be created.
    #[error("failed to start worker pool: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),

    /// A row unit panicked while the index was being built.
    #[error("index worker panicked: {0}")]
    WorkerPanicked(String),
}

/// Query side of a built index.
///
/// Implementations are immutable once built, so a single index can answer
/// queries from many threads at once.
pub trait WordIndex: fmt::Debug + Send + Sync {
    /// Whether `word` is a horizontal or vertical run of `grid`.
    ///
    /// `grid` must be the grid the index was built from, and `word` must
    /// already be inside the searchable length band; [`WordSearch`] handles
    /// both.
    fn contains(&self, grid: &Grid, word: &str) -> bool;

    /// Number of distinct runs held by the index, if it stores them.
    fn run_count(&self) -> Option<usize> {
        None
    }
}
