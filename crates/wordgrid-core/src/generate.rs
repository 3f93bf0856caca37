// Deterministic grid generation for benchmarks and tests

use crate::grid::Grid;

const ALPHABET: &[char] = &[
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// A `side x side` grid whose cell `i` holds the `(i % 26)`-th lowercase
/// letter.
///
/// `alphabet_grid(10)` is the reference grid used throughout the docs and
/// tests (rows `"abcdefghij"`, `"klmnopqrst"`, `"uvwxyzabcd"`, ...).
pub fn alphabet_grid(side: usize) -> Grid {
    let cells = (0..side * side)
        .map(|i| ALPHABET[i % ALPHABET.len()])
        .collect();
    Grid::from_square(cells, side)
}

/// Flat row-major text of [`alphabet_grid`].
pub fn alphabet_text(side: usize) -> String {
    (0..side * side)
        .map(|i| ALPHABET[i % ALPHABET.len()])
        .collect()
}
