//! The `docbase` binary. All behavior lives in `cli/`; this file only parses
//! arguments, invokes `cli::run()` and handles process termination.
//!
//! Errors are printed to stdout, or to stderr in verbose mode where stdout may
//! be carrying output someone wants to keep. Either way the exit code is 1.

use clap::Parser;

mod cli;

fn main() {
    let args = cli::setup::Cli::parse();
    let verbose = args.is_verbose();

    if let Err(e) = cli::run(args) {
        if verbose {
            eprintln!("{}", e);
        } else {
            println!("{}", e);
        }
        std::process::exit(1);
    }
}
