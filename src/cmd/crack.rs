use crate::reports;
use clap::Args;
use colbreak::config::Config;
use colbreak::grid::Grid;
use colbreak::optimizer::{ProgressCallback, SearchOptions, SearchResult, Solver};
use colbreak::scorer::Scorer;
use std::process;
use std::sync::Arc;
use tracing::{error, info, warn};

#[derive(Args, Debug, Clone)]
pub struct CrackArgs {
    /// Ciphertext; spaces are stripped and letters lowercased.
    pub ciphertext: String,

    /// Number of columns the message was encrypted with.
    pub key_length: usize,

    #[command(flatten)]
    pub config: Config,

    /// Seed for reproducible runs.
    #[arg(short = 'S', long)]
    pub seed: Option<u64>,

    /// Reject ciphertexts whose length is not a multiple of the key length.
    #[arg(long, default_value_t = false)]
    pub strict: bool,
}

struct ConsoleReporter;

impl ProgressCallback for ConsoleReporter {
    fn on_improvement(&self, plaintext: &str, score: f64, key: &[u8]) -> bool {
        reports::print_improvement(plaintext, score, key);
        true
    }

    fn on_final_result(&self, result: &SearchResult) {
        reports::print_final_result(result);
    }
}

pub fn run(args: CrackArgs, config: Config, scorer: Arc<Scorer>) {
    let normalized = super::normalize_ciphertext(&args.ciphertext);

    let grid = Grid::build(&normalized, args.key_length, args.strict).unwrap_or_else(|e| {
        error!("{}", e);
        process::exit(1);
    });

    let dropped = normalized.len() - grid.len();
    if dropped > 0 {
        warn!(
            "⚠️  {} trailing character(s) do not fill a full column and are dropped.",
            dropped
        );
    }

    info!(
        "🔨 Cracking {} columns over {} characters ({} tries budget)",
        grid.key_length(),
        grid.len(),
        config.search.max_tries
    );

    let mut options = SearchOptions::from(&config);
    options.seed = args.seed;

    let solver = Solver::new(grid, scorer, options);
    if let Err(e) = solver.run(&ConsoleReporter) {
        error!("{}", e);
        process::exit(1);
    }
}
