//! `solve`: run the engine on one instance and print the best cover.

use std::path::PathBuf;

use clap::Args;

use crate::io::{self, ReferenceSolution};
use crate::search::{MctsConfig, MctsSearch};
use crate::Result;

use super::logging::{log, LogLevel};
use super::PolicyArg;

#[derive(Debug, Args)]
pub struct SolveArgs {
    /// Graph instance (JSON with num_vertices / edges)
    pub input: PathBuf,

    /// Number of search iterations
    #[arg(long, default_value_t = 1000)]
    pub iterations: usize,

    /// Exploration constant for the tree policy
    #[arg(long, default_value_t = 0.0)]
    pub exploration: f64,

    /// Tree policy driving selection
    #[arg(long, value_enum, default_value_t = PolicyArg::EpsilonGreedy)]
    pub policy: PolicyArg,

    /// RNG seed for a reproducible run
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the cover as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: &SolveArgs, level: LogLevel) -> Result<()> {
    let graph = io::load_graph(&args.input)?;
    log(
        level,
        LogLevel::Verbose,
        &format!("loaded {} vertices, {} edges", graph.num_vertices(), graph.num_edges()),
    );

    let config = MctsConfig {
        exploration_constant: args.exploration,
        tree_policy: args.policy.into(),
        seed: args.seed,
    };
    let mut search = MctsSearch::new(&graph, config);
    let mut performed = 0;
    for _ in 0..args.iterations {
        if search.is_exhausted() {
            break;
        }
        search.run();
        performed += 1;
    }
    log(level, LogLevel::Verbose, &format!("ran {performed} iterations"));

    let cover = search.solution();
    debug_assert!(cover.is_cover(&graph));
    let mut vertices: Vec<usize> = cover.selected().iter().copied().collect();
    vertices.sort_unstable();

    if args.json {
        let solution = ReferenceSolution {
            solution_type: "mcts".to_string(),
            size: vertices.len(),
            vertex_cover: vertices,
        };
        println!("{}", serde_json::to_string(&solution)?);
    } else {
        log(
            level,
            LogLevel::Normal,
            &format!("cover size {} (best seen {})", cover.cover_size(), search.answer()),
        );
        log(level, LogLevel::Verbose, &format!("cover: {vertices:?}"));
    }
    Ok(())
}
