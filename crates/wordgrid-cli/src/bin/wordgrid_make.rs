// wordgrid-make: Print a generated square grid.
//
// Cell i holds the (i mod 26)-th lowercase letter, so side 10 gives the
// reference grid "abcdefghij" / "klmnopqrst" / ... used in the tests.
// Output is one row per line, the format wordgrid-find reads.
//
// Usage:
//   wordgrid-make SIDE

use std::io::{self, Write};

use wordgrid_core::generate::alphabet_grid;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if wordgrid_cli::wants_help(&args) || args.is_empty() {
        println!("wordgrid-make: Print a generated square grid, one row per line.");
        println!();
        println!("Usage: wordgrid-make SIDE");
        return;
    }

    let side: usize = args[0]
        .parse()
        .unwrap_or_else(|_| wordgrid_cli::fatal(&format!("invalid side length: {}", args[0])));

    let grid = alphabet_grid(side);
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    if let Err(e) = write!(out, "{grid}").and_then(|()| out.flush()) {
        wordgrid_cli::fatal(&format!("failed to write grid: {e}"));
    }
}
