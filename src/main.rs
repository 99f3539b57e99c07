use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use colbreak::scorer::Scorer;
use std::process;
use std::sync::Arc;
use tracing::{error, info};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Tab-separated tetragram frequency table.
    #[arg(global = true, short, long, default_value = "data/tetragrams.tsv")]
    tetragrams: String,

    /// JSON file of search parameters; explicit CLI flags win over it.
    #[arg(global = true, long)]
    params: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Crack(cmd::crack::CrackArgs),
    Score(cmd::score::ScoreArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    if cli.debug {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    } else {
        tracing_subscriber::fmt::init();
    }

    let (mut config, cli_search_ref, sub_matches) = match &cli.command {
        Commands::Crack(args) => (
            args.config.clone(),
            &args.config.search,
            matches.subcommand_matches("crack").unwrap(),
        ),
        Commands::Score(args) => (
            args.config.clone(),
            &args.config.search,
            matches.subcommand_matches("score").unwrap(),
        ),
    };

    if let Some(path) = &cli.params {
        info!("⚖️  Loading search params from: {}", path);
        let mut file_params = colbreak::config::SearchParams::load_from_file(path);
        file_params.merge_from_cli(cli_search_ref, sub_matches);
        config.search = file_params;
    }

    let scorer = match Scorer::from_path(&cli.tetragrams, config.table.table_scale) {
        Ok(s) => Arc::new(s),
        Err(e) => {
            error!("❌ Failed to load tetragram table: {}", e);
            process::exit(1);
        }
    };

    if scorer.is_empty() {
        error!("❌ Tetragram table is empty — nothing to score against.");
        process::exit(1);
    }

    match cli.command {
        Commands::Crack(args) => cmd::crack::run(args, config, scorer),
        Commands::Score(args) => cmd::score::run(args, scorer),
    }
}
