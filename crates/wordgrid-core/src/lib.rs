//! Square character grid storage and run extraction.
//!
//! This crate holds the shared types used by the word index strategies: the
//! immutable [`Grid`], the [`Direction`] of a run, and the word length band
//! every query and index is bounded by.
//!
//! # Architecture
//!
//! - [`grid`] -- Immutable square grid, validated at construction
//! - [`line`] -- Horizontal and vertical run extraction
//! - [`generate`] -- Deterministic grid generation for benchmarks and tests

pub mod generate;
pub mod grid;
pub mod line;

pub use grid::Grid;
pub use line::Direction;

/// Error type for grid construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("grid is not square: {len} cells has no integer square root")]
    NotSquare { len: usize },
}

/// Shortest word (in characters) that can be present in a grid.
pub const MIN_WORD_LEN: usize = 4;

/// Longest word (in characters) that can be present in a grid.
pub const MAX_WORD_LEN: usize = 20;

/// Returns `true` if a word of `len` characters is inside the searchable band.
///
/// Words outside `MIN_WORD_LEN..=MAX_WORD_LEN` are never present, whatever the
/// grid contains.
#[inline]
pub fn is_searchable_len(len: usize) -> bool {
    (MIN_WORD_LEN..=MAX_WORD_LEN).contains(&len)
}
