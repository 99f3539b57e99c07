use super::{mutation, SearchState};
use crate::config::Config;
use crate::error::CbResult;
use crate::grid::Grid;
use crate::scorer::Scorer;
use std::sync::Arc;
use tracing::debug;

pub struct SearchOptions {
    pub max_tries: usize,
    pub mutation_attempts: usize,
    pub rotation_odds: u32,
    pub seed: Option<u64>,
}

impl From<&Config> for SearchOptions {
    fn from(cfg: &Config) -> Self {
        Self {
            max_tries: cfg.search.max_tries,
            mutation_attempts: cfg.search.mutation_attempts,
            rotation_odds: cfg.search.rotation_odds,
            seed: None, // Set manually if needed
        }
    }
}

/// A trait for receiving updates while the search runs.
/// Boolean return value indicates if the search should continue (true) or
/// abort after the current completed iteration (false).
pub trait ProgressCallback {
    fn on_improvement(&self, plaintext: &str, score: f64, key: &[u8]) -> bool;

    /// Fired exactly once, after the attempt budget is spent or the search
    /// was aborted.
    fn on_final_result(&self, _result: &SearchResult) {}
}

#[derive(Debug, Clone)]
pub struct SearchResult {
    pub score: f64,
    pub key: Vec<u8>,
    pub plaintext: String,
    pub tries: usize,
    pub restarts: usize,
}

/// Greedy hill-climber over column permutations with restart on local
/// exhaustion. Single-threaded; the attempt budget is the only built-in
/// termination, plus the callback's abort signal.
pub struct Solver {
    grid: Grid,
    scorer: Arc<Scorer>,
    options: SearchOptions,
}

impl Solver {
    pub fn new(grid: Grid, scorer: Arc<Scorer>, options: SearchOptions) -> Self {
        Self {
            grid,
            scorer,
            options,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn run<CB: ProgressCallback>(&self, callback: &CB) -> CbResult<SearchResult> {
        let opts = &self.options;
        let key_length = self.grid.key_length();

        let mut rng = match opts.seed {
            Some(s) => fastrand::Rng::with_seed(s),
            None => fastrand::Rng::new(),
        };

        let initial = mutation::random_key(&mut rng, key_length);
        let mut state = SearchState::new(initial.clone());

        // The opening key is scored directly, like every post-restart key.
        let mut pending = Some(initial);

        while state.tries < opts.max_tries {
            let key = match pending.take() {
                Some(k) => k,
                None => match mutation::next_unused_key(
                    &mut rng,
                    &state.run_best_key,
                    &state.used,
                    opts.mutation_attempts,
                    opts.rotation_odds,
                ) {
                    Some(k) => k,
                    None => {
                        // Neighborhood exhausted. The restart itself
                        // consumes no budget; the fresh key is this
                        // iteration's candidate.
                        let fresh = mutation::random_key(&mut rng, key_length);
                        state.restart(fresh.clone());
                        fresh
                    }
                },
            };
            state.used.insert(key.clone());

            let plaintext = self.grid.decode(&key)?;
            let score = self.scorer.score(&plaintext);
            state.tries += 1;

            // Ties are accepted, so plateaus can still be traversed.
            if score >= state.run_best_score {
                state.run_best_score = score;
                state.run_best_key = key.clone();

                if score >= state.best_score {
                    state.best_score = score;
                    state.best_key = key;
                    state.best_plaintext = plaintext.clone();
                }

                if !callback.on_improvement(&plaintext, score, &state.run_best_key) {
                    break;
                }
            }
        }

        debug!(
            "Search finished: {} tries, {} restarts",
            state.tries, state.restarts
        );

        let result = SearchResult {
            score: state.best_score,
            key: state.best_key,
            plaintext: state.best_plaintext,
            tries: state.tries,
            restarts: state.restarts,
        };
        callback.on_final_result(&result);
        Ok(result)
    }
}
