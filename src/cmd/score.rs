use crate::reports;
use clap::Args;
use colbreak::config::Config;
use colbreak::grid::Grid;
use colbreak::scorer::Scorer;
use std::process;
use std::sync::Arc;
use tracing::error;

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    /// Ciphertext; spaces are stripped and letters lowercased.
    pub ciphertext: String,

    /// Comma-separated column order, e.g. "2,0,1".
    pub key: String,

    #[command(flatten)]
    pub config: Config,

    /// Reject ciphertexts whose length is not a multiple of the key length.
    #[arg(long, default_value_t = false)]
    pub strict: bool,
}

fn parse_key(raw: &str) -> Result<Vec<u8>, String> {
    raw.split(',')
        .map(|s| {
            s.trim()
                .parse::<u8>()
                .map_err(|_| format!("'{}' is not a column index", s.trim()))
        })
        .collect()
}

/// Audits one explicit key: decode, score, report.
pub fn run(args: ScoreArgs, scorer: Arc<Scorer>) {
    let normalized = super::normalize_ciphertext(&args.ciphertext);

    let key = parse_key(&args.key).unwrap_or_else(|e| {
        error!("❌ Bad key: {}", e);
        process::exit(1);
    });

    let grid = Grid::build(&normalized, key.len(), args.strict).unwrap_or_else(|e| {
        error!("{}", e);
        process::exit(1);
    });

    let plaintext = grid.decode(&key).unwrap_or_else(|e| {
        error!("{}", e);
        process::exit(1);
    });

    let score = scorer.score(&plaintext);
    reports::print_audit(&plaintext, score, &key);
}
