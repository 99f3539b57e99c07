pub mod loader;

use crate::error::CbResult;
use std::collections::HashMap;
use std::path::Path;

/// English-likelihood scorer backed by a tetragram frequency table.
///
/// The table is read-only after construction; lookups that miss contribute
/// nothing rather than erroring.
#[derive(Debug)]
pub struct Scorer {
    table: HashMap<[u8; 4], f64>,
}

impl Scorer {
    /// Builds the table from raw entries. Duplicate grams merge additively.
    pub fn from_entries(entries: impl IntoIterator<Item = ([u8; 4], f64)>) -> Self {
        let mut table = HashMap::new();
        for (gram, freq) in entries {
            *table.entry(gram).or_insert(0.0) += freq;
        }
        Self { table }
    }

    pub fn from_path<P: AsRef<Path>>(path: P, table_scale: f64) -> CbResult<Self> {
        let raw = loader::load_tetragrams_from_path(path, table_scale)?;
        Ok(Self::from_entries(raw.entries))
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Sums the table frequency of every 4-byte window of `text`. Texts
    /// shorter than one window score 0.0. Higher is better; never negative
    /// as long as the table holds non-negative frequencies.
    pub fn score(&self, text: &str) -> f64 {
        let mut score = 0.0;
        for window in text.as_bytes().windows(4) {
            if let Ok(gram) = <[u8; 4]>::try_from(window) {
                if let Some(freq) = self.table.get(&gram) {
                    score += freq;
                }
            }
        }
        score
    }
}
