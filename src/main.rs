//! cubrir CLI
//!
//! Anytime minimum vertex cover solving from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Solve one instance
//! cubrir solve graph.json --iterations 2000 --seed 7
//!
//! # Benchmark a dataset
//! cubrir bench --manifest data/mvc/manifest.json --iterations 50
//!
//! # Generate a random dataset
//! cubrir generate --count 20 --min-n 8 --max-n 20 --edge-prob 0.2
//! ```

use std::process::ExitCode;

use clap::Parser;
use cubrir::cli::{run_command, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
