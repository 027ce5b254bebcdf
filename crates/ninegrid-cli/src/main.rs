//! The ninegrid command-line program.
//!
//! Reads a puzzle as 81 whitespace-separated integers (0 = empty cell),
//! solves it, and prints the input grid, the result grid, and a validity
//! flag. Solver diagnostics go to the log by default (`RUST_LOG=debug`)
//! or to a file with `--trace`.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use ninegrid_core::{DigitGrid, validate};
use ninegrid_solver::{FileTrace, LogTrace, Solver, TraceSink};

use crate::input::{InputError, read_grid};

mod input;

/// Solve a 9x9 Sudoku puzzle.
#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Puzzle file; stdin when omitted.
    input: Option<PathBuf>,

    /// Write solver diagnostics to this file instead of the log.
    #[arg(long, value_name = "FILE")]
    trace: Option<PathBuf>,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let grid = match load(args.input.as_deref()) {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("ninegrid: {err}");
            process::exit(1);
        }
    };

    let (value, count) = grid.modal_value();
    log::debug!("most frequent cell value: {value} ({count} occurrences)");

    let sink: Box<dyn TraceSink> = match &args.trace {
        Some(path) => Box::new(FileTrace::new(path)),
        None => Box::new(LogTrace),
    };
    let solved = Solver::new(grid.clone()).with_trace(sink).solve();

    println!("{grid}");
    println!();
    println!("{solved}");
    println!();
    println!("{}", validate::is_valid(&solved));
}

fn load(path: Option<&Path>) -> Result<DigitGrid, InputError> {
    match path {
        Some(path) => read_grid(BufReader::new(File::open(path)?)),
        None => read_grid(io::stdin().lock()),
    }
}
