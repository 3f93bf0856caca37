// Index strategy selection and build options

use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

use crate::pool::available_workers;

/// Smallest side length at which [`Strategy::Auto`] picks the parallel
/// builder. Below this the cost of starting workers outweighs the
/// enumeration work per row.
pub const DEFAULT_PARALLEL_MIN_SIDE: usize = 64;

/// How the word index is built and queried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// No precompute: first-character buckets plus query-time comparison.
    Scan,
    /// Full run set built on the calling thread.
    Sequential,
    /// Full run set built one row per unit on a worker pool.
    Parallel,
    /// `Parallel` for large grids when more than one worker is available,
    /// `Sequential` otherwise.
    #[default]
    Auto,
}

impl Strategy {
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Scan => "scan",
            Strategy::Sequential => "sequential",
            Strategy::Parallel => "parallel",
            Strategy::Auto => "auto",
        }
    }

    /// Replace `Auto` with the concrete strategy for a grid of `side`.
    ///
    /// Concrete strategies are returned unchanged.
    pub fn resolve(self, side: usize, workers: NonZeroUsize, parallel_min_side: usize) -> Strategy {
        match self {
            Strategy::Auto if side >= parallel_min_side && workers.get() > 1 => Strategy::Parallel,
            Strategy::Auto => Strategy::Sequential,
            other => other,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unrecognized strategy name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown strategy: {0} (expected scan, sequential, parallel or auto)")]
pub struct UnknownStrategy(pub String);

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "scan" => Ok(Strategy::Scan),
            "sequential" | "seq" => Ok(Strategy::Sequential),
            "parallel" | "par" => Ok(Strategy::Parallel),
            "auto" => Ok(Strategy::Auto),
            _ => Err(UnknownStrategy(s.to_string())),
        }
    }
}

/// Options controlling how a [`WordSearch`](crate::WordSearch) builds its
/// index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOptions {
    /// Which strategy to use.
    pub strategy: Strategy,
    /// Worker count for the parallel builder. `None` uses the host's
    /// available parallelism. A count of 1 builds the row units on the
    /// calling thread.
    pub workers: Option<NonZeroUsize>,
    /// Side length threshold for [`Strategy::Auto`].
    pub parallel_min_side: usize,
}

impl Default for IndexOptions {
    fn default() -> Self {
        Self {
            strategy: Strategy::Auto,
            workers: None,
            parallel_min_side: DEFAULT_PARALLEL_MIN_SIDE,
        }
    }
}

impl IndexOptions {
    pub fn with_strategy(strategy: Strategy) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }

    /// Set an explicit worker count.
    pub fn workers(mut self, workers: NonZeroUsize) -> Self {
        self.workers = Some(workers);
        self
    }

    /// The worker count the parallel builder will use.
    pub fn worker_count(&self) -> NonZeroUsize {
        self.workers.unwrap_or_else(available_workers)
    }
}
