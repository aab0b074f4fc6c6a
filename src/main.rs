use clap::Parser;
use std::process::ExitCode;

use vtable_index::cli::{print_error, run_scan, Args};

fn main() -> ExitCode {
    let args = Args::parse();

    match run_scan(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            print_error(&format!("{:#}", err));
            ExitCode::from(1)
        }
    }
}
