// wordgrid-cli: shared utilities for CLI tools.

use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::process;

use wordgrid_core::Grid;
use wordgrid_index::{IndexOptions, Strategy, WordSearch};

/// Environment variable naming the grid file.
pub const GRID_PATH_ENV: &str = "WORDGRID_PATH";

/// Environment variable selecting the index strategy.
pub const STRATEGY_ENV: &str = "WORDGRID_STRATEGY";

/// Environment variable setting the parallel worker count.
pub const WORKERS_ENV: &str = "WORDGRID_WORKERS";

/// Options shared by the grid tools.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CliOptions {
    pub grid_path: Option<PathBuf>,
    pub index: IndexOptions,
    pub stats: bool,
}

/// Parse tool options from `args`, falling back to the process environment.
///
/// Returns `(options, remaining_args)`.
pub fn parse_options(args: &[String]) -> Result<(CliOptions, Vec<String>), String> {
    parse_options_with_env(args, |key| std::env::var(key).ok())
}

/// Parse tool options from `args`, falling back to `env` for anything not
/// given on the command line.
///
/// Recognized flags:
/// - `-g PATH`, `--grid PATH`, `--grid=PATH`
/// - `-s NAME`, `--strategy NAME`, `--strategy=NAME`
/// - `-j N`, `--workers N`, `--workers=N`
/// - `--stats`
pub fn parse_options_with_env(
    args: &[String],
    env: impl Fn(&str) -> Option<String>,
) -> Result<(CliOptions, Vec<String>), String> {
    let mut options = CliOptions {
        grid_path: env(GRID_PATH_ENV).map(PathBuf::from),
        ..CliOptions::default()
    };
    if let Some(name) = env(STRATEGY_ENV) {
        options.index.strategy = parse_strategy(&name)?;
    }
    if let Some(count) = env(WORKERS_ENV) {
        options.index.workers = Some(parse_workers(&count)?);
    }

    let mut remaining = Vec::new();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => (flag, Some(value.to_string())),
            _ => (arg.as_str(), None),
        };
        let mut value = |name: &str| -> Result<String, String> {
            match &inline {
                Some(v) => Ok(v.clone()),
                None => iter
                    .next()
                    .cloned()
                    .ok_or_else(|| format!("{name} requires a value")),
            }
        };
        match flag {
            "-g" | "--grid" => options.grid_path = Some(PathBuf::from(value(flag)?)),
            "-s" | "--strategy" => options.index.strategy = parse_strategy(&value(flag)?)?,
            "-j" | "--workers" => options.index.workers = Some(parse_workers(&value(flag)?)?),
            "--stats" => options.stats = true,
            _ => remaining.push(arg.clone()),
        }
    }

    Ok((options, remaining))
}

fn parse_strategy(s: &str) -> Result<Strategy, String> {
    s.parse::<Strategy>().map_err(|e| e.to_string())
}

fn parse_workers(s: &str) -> Result<NonZeroUsize, String> {
    s.trim()
        .parse::<NonZeroUsize>()
        .map_err(|_| format!("invalid worker count: {s} (expected a positive integer)"))
}

/// Read a grid file (one row per line; whitespace is ignored).
pub fn load_grid(path: Option<&PathBuf>) -> Result<Grid, String> {
    let Some(path) = path else {
        return Err(format!(
            "no grid given: pass --grid PATH or set {GRID_PATH_ENV}"
        ));
    };
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
    Grid::from_rows(&text).map_err(|e| format!("invalid grid in {}: {}", path.display(), e))
}

/// Load the grid named by `options` and build its index.
pub fn build_search(options: &CliOptions) -> Result<WordSearch, String> {
    let grid = load_grid(options.grid_path.as_ref())?;
    WordSearch::from_grid(grid, options.index)
        .map_err(|e| format!("failed to build word index: {e}"))
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
