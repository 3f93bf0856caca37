// Worker pool used by the parallel index builder

use std::any::Any;
use std::num::NonZeroUsize;
use std::panic::{self, AssertUnwindSafe};

use crate::IndexError;

/// The host's available parallelism, or 1 if it cannot be determined.
pub fn available_workers() -> NonZeroUsize {
    std::thread::available_parallelism().unwrap_or(NonZeroUsize::MIN)
}

/// A fixed-size pool of worker threads.
///
/// The pool is an ordinary owned value: callers that build several indexes
/// can create one and pass it to
/// [`WordSearch::with_pool`](crate::WordSearch::with_pool), otherwise the
/// parallel builder creates one for the duration of a single build. All work
/// submitted through the pool has finished when the build returns, since
/// `install` blocks until every row unit is done. Dropping the pool only
/// signals its now idle threads to exit; they hold no results and no borrow
/// of the grid, so the build does not wait for them. The process-wide rayon
/// pool is never used.
pub struct WorkerPool {
    pool: rayon::ThreadPool,
}

impl WorkerPool {
    /// Start a pool with exactly `workers` threads.
    pub fn new(workers: NonZeroUsize) -> Result<Self, IndexError> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers.get())
            .thread_name(|i| format!("wordgrid-worker-{i}"))
            .build()?;
        Ok(Self { pool })
    }

    /// Start a pool sized to the host's available parallelism.
    pub fn with_available_parallelism() -> Result<Self, IndexError> {
        Self::new(available_workers())
    }

    /// Number of worker threads.
    pub fn workers(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Run `job` inside the pool and wait for it.
    ///
    /// Parallel iterators started by `job` execute on this pool's threads. A
    /// panic in any of them is caught here and returned as
    /// [`IndexError::WorkerPanicked`] instead of unwinding into the caller.
    pub(crate) fn run<R, F>(&self, job: F) -> Result<R, IndexError>
    where
        R: Send,
        F: FnOnce() -> R + Send,
    {
        panic::catch_unwind(AssertUnwindSafe(|| self.pool.install(job)))
            .map_err(|payload| IndexError::WorkerPanicked(panic_message(payload.as_ref())))
    }
}

impl std::fmt::Debug for WorkerPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkerPool")
            .field("workers", &self.workers())
            .finish()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
