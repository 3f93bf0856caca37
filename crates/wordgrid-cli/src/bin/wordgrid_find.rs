// wordgrid-find: Look up words from stdin in a square character grid.
//
// Reads words from stdin (one per line) and reports whether each word reads
// left-to-right or top-to-bottom somewhere in the grid:
//   F: word    (found)
//   N: word    (not found)
//
// Usage:
//   wordgrid-find [-g GRID] [OPTIONS]
//
// Options:
//   -g, --grid PATH         Grid file, one row per line (or WORDGRID_PATH)
//   -s, --strategy NAME     scan, sequential, parallel or auto (or WORDGRID_STRATEGY)
//   -j, --workers N         Worker threads for the parallel build (or WORDGRID_WORKERS)
//   --stats                 Print build statistics to stderr
//   -h, --help              Print help

use std::io::{self, BufRead, Write};
use std::time::Instant;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if wordgrid_cli::wants_help(&args) {
        println!("wordgrid-find: Look up words from stdin in a square character grid.");
        println!();
        println!("Usage: wordgrid-find [-g GRID] [OPTIONS]");
        println!();
        println!("Reads words from stdin (one per line). Prints:");
        println!("  F: word    (found horizontally or vertically)");
        println!("  N: word    (not found)");
        println!();
        println!("Options:");
        println!("  -g, --grid PATH       Grid file, one row per line (or WORDGRID_PATH)");
        println!("  -s, --strategy NAME   scan, sequential, parallel or auto (default: auto)");
        println!("  -j, --workers N       Worker threads for the parallel build");
        println!("  --stats               Print build statistics to stderr");
        println!("  -h, --help            Print this help");
        return;
    }

    let (options, _rest) =
        wordgrid_cli::parse_options(&args).unwrap_or_else(|e| wordgrid_cli::fatal(&e));

    let started = Instant::now();
    let search = wordgrid_cli::build_search(&options).unwrap_or_else(|e| wordgrid_cli::fatal(&e));
    if options.stats {
        eprintln!(
            "grid: {0}x{0}, strategy: {1}, workers: {2}, runs: {3}, build: {4:.3?}",
            search.grid().side(),
            search.strategy(),
            search.workers(),
            search
                .index_len()
                .map_or_else(|| "-".to_string(), |n| n.to_string()),
            started.elapsed()
        );
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        let word = line.trim();
        if word.is_empty() {
            continue;
        }

        let tag = if search.is_present(word) { 'F' } else { 'N' };
        let _ = writeln!(out, "{tag}: {word}");
    }
}
