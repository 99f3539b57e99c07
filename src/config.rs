use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Default)]
pub struct Config {
    #[command(flatten)]
    pub search: SearchParams,
    #[command(flatten)]
    pub table: TableParams,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    /// Total scored attempts before the best candidate is reported.
    #[arg(long, default_value_t = 20_000)]
    pub max_tries: usize,

    /// Mutation retries before a neighborhood counts as exhausted.
    #[arg(long, default_value_t = 100_000)]
    pub mutation_attempts: usize,

    /// One mutation in this many is a rotation instead of a swap;
    /// 0 disables rotations.
    #[arg(long, default_value_t = 101)]
    pub rotation_odds: u32,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            max_tries: 20_000,
            mutation_attempts: 100_000,
            rotation_odds: 101,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TableParams {
    /// Divisor applied to raw tetragram counts while loading.
    #[arg(long, default_value_t = 1.0)]
    pub table_scale: f64,
}

impl Default for TableParams {
    fn default() -> Self {
        Self { table_scale: 1.0 }
    }
}

impl SearchParams {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Self {
        let content = fs::read_to_string(path)
            .unwrap_or_else(|e| panic!("❌ Failed to read params file: {}", e));

        serde_json::from_str(&content)
            .unwrap_or_else(|e| panic!("❌ Failed to parse params JSON: {}", e))
    }

    /// Overlays explicit CLI flags onto file-loaded params, leaving
    /// clap defaults alone.
    pub fn merge_from_cli(&mut self, cli_params: &SearchParams, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli_params.$field.clone();
                }
            };
        }

        update_if_present!(max_tries, "max_tries");
        update_if_present!(mutation_attempts, "mutation_attempts");
        update_if_present!(rotation_odds, "rotation_odds");
    }
}
