//! minibank CLI
//!
//! Command-line entry point for the bank account demonstration scenario.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --verbose
//! RUST_LOG=minibank=debug cargo run
//! ```
//!
//! The program constructs two sample customers with one account each,
//! exercises the account operations, and writes a human-readable transcript
//! to stdout. Log output goes to stderr.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (rejected operation or failed write)

use minibank::cli;
use minibank::demo;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();

    // Default filter is info, raised to debug by --verbose; RUST_LOG wins
    // when set. Logs go to stderr so the transcript on stdout stays clean.
    let default_filter = if args.verbose {
        "minibank=debug"
    } else {
        "minibank=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    // Run the fixed scenario against stdout
    let mut output = std::io::stdout();
    if let Err(e) = demo::run(&mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
