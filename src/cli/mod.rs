//! Command-line interface: solve single instances, benchmark datasets,
//! generate datasets.

mod bench;
mod generate;
mod logging;
mod solve;

pub use bench::BenchArgs;
pub use generate::GenerateArgs;
pub use logging::{log, LogLevel};
pub use solve::SolveArgs;

use clap::{Parser, Subcommand, ValueEnum};

use crate::search::TreePolicy;
use crate::Result;

/// Anytime MCTS solver for minimum vertex cover.
#[derive(Debug, Parser)]
#[command(name = "cubrir", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Suppress all output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Verbose output with per-step details
    #[arg(long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Solve a single graph instance
    Solve(SolveArgs),
    /// Benchmark over a dataset manifest, writing a per-instance CSV
    Bench(BenchArgs),
    /// Generate a random dataset with greedy reference covers
    Generate(GenerateArgs),
}

/// Tree policy choice exposed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum PolicyArg {
    /// Argmax with occasional uniform exploration
    #[default]
    EpsilonGreedy,
    /// Weighted stochastic UCT sampling
    Uct,
}

impl From<PolicyArg> for TreePolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::EpsilonGreedy => TreePolicy::EpsilonGreedy,
            PolicyArg::Uct => TreePolicy::Uct,
        }
    }
}

/// Dispatch a parsed command line.
pub fn run_command(cli: Cli) -> Result<()> {
    let level = if cli.quiet {
        LogLevel::Quiet
    } else if cli.verbose {
        LogLevel::Verbose
    } else {
        LogLevel::Normal
    };

    match cli.command {
        Command::Solve(args) => solve::run(&args, level),
        Command::Bench(args) => bench::run(&args, level),
        Command::Generate(args) => generate::run(&args, level),
    }
}
