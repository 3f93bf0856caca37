//! Golden tests: check every strategy against hand-verified expectations in
//! `tests/golden/grids.json`.
//!
//! Run: cargo test -p wordgrid-index --test golden

use std::num::NonZeroUsize;
use std::path::PathBuf;

use serde::Deserialize;
use wordgrid_core::{Grid, GridError};
use wordgrid_index::{IndexError, IndexOptions, Strategy, WordSearch};

// ---------------------------------------------------------------------------
// Fixture format
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct Golden {
    grids: Vec<GoldenGrid>,
    not_square: Vec<usize>,
    square: Vec<usize>,
}

#[derive(Debug, Deserialize)]
struct GoldenGrid {
    name: String,
    #[serde(default)]
    rows: Option<Vec<String>>,
    #[serde(default)]
    fill: Option<Fill>,
    cases: Vec<Case>,
}

#[derive(Debug, Deserialize)]
struct Fill {
    ch: char,
    side: usize,
}

#[derive(Debug, Deserialize)]
struct Case {
    word: String,
    present: bool,
    note: String,
}

impl GoldenGrid {
    fn text(&self) -> String {
        match (&self.rows, &self.fill) {
            (Some(rows), _) => rows.concat(),
            (None, Some(fill)) => fill.ch.to_string().repeat(fill.side * fill.side),
            (None, None) => panic!("grid {} has neither rows nor fill", self.name),
        }
    }
}

fn load_golden() -> Golden {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/golden/grids.json");
    let contents = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read golden file {}: {}", path.display(), e));
    serde_json::from_str(&contents)
        .unwrap_or_else(|e| panic!("failed to parse golden file {}: {}", path.display(), e))
}

fn options(strategy: Strategy) -> IndexOptions {
    IndexOptions::with_strategy(strategy).workers(NonZeroUsize::new(3).unwrap())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn golden_queries() {
    let golden = load_golden();
    let mut failures = Vec::new();

    for grid in &golden.grids {
        let text = grid.text();
        for strategy in [Strategy::Scan, Strategy::Sequential, Strategy::Parallel] {
            let ws = WordSearch::with_options(&text, options(strategy))
                .unwrap_or_else(|e| panic!("failed to build {}: {}", grid.name, e));
            for case in &grid.cases {
                if ws.is_present(&case.word) != case.present {
                    failures.push(format!(
                        "{} [{}] {:?}: expected {} ({})",
                        grid.name, strategy, case.word, case.present, case.note
                    ));
                }
            }
        }
    }

    assert!(
        failures.is_empty(),
        "{} golden mismatches:\n{}",
        failures.len(),
        failures.join("\n")
    );
}

#[test]
fn golden_grid_shapes() {
    let golden = load_golden();

    for len in &golden.not_square {
        let text = "k".repeat(*len);
        assert_eq!(Grid::new(&text), Err(GridError::NotSquare { len: *len }));
        match WordSearch::new(&text) {
            Err(IndexError::Grid(GridError::NotSquare { len: l })) => assert_eq!(l, *len),
            other => panic!("length {len}: expected NotSquare, got {other:?}"),
        }
    }

    for len in &golden.square {
        let text = "k".repeat(*len);
        let ws = WordSearch::new(&text)
            .unwrap_or_else(|e| panic!("length {len} should build: {e}"));
        assert_eq!(ws.grid().cell_count(), *len);
    }
}
