//! roster-bench - Binary Entry Point
//!
//! Runs the lookup suite and then the sort suite over the fixed size list,
//! reading `{size}.txt` input files from the working directory. An
//! unreadable input is fatal: the error goes to stderr and the process
//! exits non-zero with no partial results.

use std::path::Path;
use std::process::ExitCode;

use roster_bench::bench::{self, SIZES};
use roster_bench::DatasetError;

fn run(data_dir: &Path) -> Result<(), DatasetError> {
    bench::run_lookup_suite(data_dir, &SIZES)?;
    bench::run_sort_suite(data_dir, &SIZES)?;
    Ok(())
}

fn main() -> ExitCode {
    println!("===========================================");
    println!("  roster-bench - lookup & sort benchmarks");
    println!("===========================================");
    println!();

    match run(Path::new(".")) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
