pub mod mutation;
pub mod runner;

pub use self::runner::{ProgressCallback, SearchOptions, SearchResult, Solver};

use std::collections::HashSet;

/// Run-best sentinel, below any real score, so the first candidate after a
/// restart is always accepted.
pub const SCORE_FLOOR: f64 = -1.0;

/// All mutable search state, owned by the loop that drives it.
///
/// `used` and the run-best pair cover the current run only and reset on
/// restart; the all-time bests and the attempt counter span the whole
/// search.
pub struct SearchState {
    pub used: HashSet<Vec<u8>>,
    pub run_best_key: Vec<u8>,
    pub run_best_score: f64,
    pub best_key: Vec<u8>,
    pub best_score: f64,
    pub best_plaintext: String,
    pub tries: usize,
    pub restarts: usize,
}

impl SearchState {
    pub fn new(initial: Vec<u8>) -> Self {
        Self {
            used: HashSet::new(),
            run_best_key: initial.clone(),
            run_best_score: SCORE_FLOOR,
            best_key: initial,
            best_score: SCORE_FLOOR,
            best_plaintext: String::new(),
            tries: 0,
            restarts: 0,
        }
    }

    /// Abandons the current trajectory: the used-key set is cleared and the
    /// run best falls back to the sentinel. All-time bests survive.
    pub fn restart(&mut self, fresh: Vec<u8>) {
        self.used.clear();
        self.run_best_score = SCORE_FLOOR;
        self.run_best_key = fresh;
        self.restarts += 1;
    }
}
