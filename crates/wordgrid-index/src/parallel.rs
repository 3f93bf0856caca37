// Precomputed run set, built one row per unit on a worker pool
//
// The grid is partitioned by row: unit `r` covers every start cell in row
// `r`, the whole length band and both directions, and writes only to its own
// local set. Units read the shared grid and nothing else, so they need no
// locking. Once every unit has returned, the local sets are merged by union
// on the calling thread.
//
// There is no cancellation or timeout. A unit that never returns stalls the
// build indefinitely. A unit that panics fails the whole build; its rows are
// never silently dropped from the index.

use std::num::NonZeroUsize;

use rayon::prelude::*;
use wordgrid_core::Grid;

use crate::IndexError;
use crate::pool::WorkerPool;
use crate::precompute::WordSet;

/// Build the run set on an existing pool.
///
/// Blocks until every row unit has finished.
pub fn build_in(grid: &Grid, pool: &WorkerPool) -> Result<WordSet, IndexError> {
    build_rows_in(grid, pool, WordSet::build_row)
}

/// Run `unit` once per row on `pool`, then merge the row sets.
///
/// If any unit panics the build fails as a whole.
fn build_rows_in<U>(grid: &Grid, pool: &WorkerPool, unit: U) -> Result<WordSet, IndexError>
where
    U: Fn(&Grid, usize) -> WordSet + Sync,
{
    let rows = pool.run(|| {
        (0..grid.side())
            .into_par_iter()
            .map(|row| unit(grid, row))
            .collect::<Vec<_>>()
    })?;
    Ok(WordSet::merge(rows))
}

/// Build the run set with `workers` threads.
///
/// A pool is created for this build and dropped before returning; its idle
/// threads exit on their own afterwards. With a single worker no pool is
/// started: the same row units run one after another on the calling thread.
pub fn build_with_workers(grid: &Grid, workers: NonZeroUsize) -> Result<WordSet, IndexError> {
    if workers.get() == 1 {
        return Ok(build_inline(grid));
    }
    let pool = WorkerPool::new(workers)?;
    build_in(grid, &pool)
}

/// Row units executed sequentially, merged the same way as the pooled build.
pub fn build_inline(grid: &Grid) -> WordSet {
    let rows = (0..grid.side())
        .map(|row| WordSet::build_row(grid, row))
        .collect();
    WordSet::merge(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordgrid_core::generate::alphabet_grid;

    fn n(v: usize) -> NonZeroUsize {
        NonZeroUsize::new(v).unwrap()
    }

    #[test]
    fn pooled_build_matches_sequential() {
        let grid = alphabet_grid(40);
        let pool = WorkerPool::new(n(4)).unwrap();
        assert_eq!(build_in(&grid, &pool).unwrap(), WordSet::build(&grid));
    }

    #[test]
    fn single_worker_falls_back_inline() {
        let grid = alphabet_grid(15);
        assert_eq!(
            build_with_workers(&grid, n(1)).unwrap(),
            WordSet::build(&grid)
        );
    }

    #[test]
    fn more_workers_than_rows() {
        let grid = alphabet_grid(5);
        assert_eq!(
            build_with_workers(&grid, n(16)).unwrap(),
            WordSet::build(&grid)
        );
    }

    #[test]
    fn empty_grid_builds_empty_set() {
        let grid = Grid::new("").unwrap();
        assert!(build_with_workers(&grid, n(2)).unwrap().is_empty());
        assert!(build_inline(&grid).is_empty());
    }

    #[test]
    fn failing_row_fails_the_build() {
        let grid = alphabet_grid(12);
        let pool = WorkerPool::new(n(3)).unwrap();
        let result = build_rows_in(&grid, &pool, |grid, row| {
            if row == 7 {
                panic!("row 7 unreadable");
            }
            WordSet::build_row(grid, row)
        });
        match result {
            Err(IndexError::WorkerPanicked(msg)) => assert_eq!(msg, "row 7 unreadable"),
            other => panic!("expected WorkerPanicked, got {other:?}"),
        }
    }

    #[test]
    fn row_units_cover_every_row_once() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let grid = alphabet_grid(9);
        let pool = WorkerPool::new(n(4)).unwrap();
        let calls: Vec<AtomicUsize> = (0..9).map(|_| AtomicUsize::new(0)).collect();
        let set = build_rows_in(&grid, &pool, |grid, row| {
            calls[row].fetch_add(1, Ordering::Relaxed);
            WordSet::build_row(grid, row)
        })
        .unwrap();
        assert!(calls.iter().all(|c| c.load(Ordering::Relaxed) == 1));
        assert_eq!(set, WordSet::build(&grid));
    }

    #[test]
    fn pool_is_reusable_across_builds() {
        let pool = WorkerPool::new(n(2)).unwrap();
        let a = build_in(&alphabet_grid(8), &pool).unwrap();
        let b = build_in(&alphabet_grid(9), &pool).unwrap();
        assert!(a.contains_word("abcdefgh"));
        assert!(b.contains_word("abcdefghi"));
    }
}
