use clap::Parser;

/// Run the bank account demonstration scenario
#[derive(Parser, Debug)]
#[command(name = "minibank")]
#[command(about = "Run the bank account demonstration scenario", long_about = None)]
pub struct CliArgs {
    /// Enable debug-level logging
    ///
    /// Raises the default log filter from `info` to `debug`. `RUST_LOG`
    /// overrides both.
    #[arg(short, long)]
    pub verbose: bool,
}
