use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use std::process;
use strokeforge::config::ScoringWeights;
use tracing::{error, info, warn, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with scoring weights; explicit CLI flags still win.
    #[arg(global = true, long)]
    weights: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score the last attempt against the example.
    Score(cmd::score::ScoreArgs),
    /// Score every attempt on its own to show progress.
    History(cmd::history::HistoryArgs),
    /// Replay a drawing through the frame scheduler.
    Replay(cmd::replay::ReplayArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    info!("🖊️  Initializing StrokeForge...");

    let (mut config, sub_name) = match &cli.command {
        Commands::Score(args) => (args.config.clone(), "score"),
        Commands::History(args) => (args.config.clone(), "history"),
        Commands::Replay(args) => (args.config.clone(), "replay"),
    };
    let Some(sub_matches) = matches.subcommand_matches(sub_name) else {
        error!("Missing arguments for subcommand '{}'", sub_name);
        process::exit(2);
    };

    if let Some(path) = &cli.weights {
        info!("⚖️  Loading Weights from: {}", path);
        match ScoringWeights::load_from_file(path) {
            Ok(mut file_weights) => {
                file_weights.merge_from_cli(&config.weights, sub_matches);
                config.weights = file_weights;
            }
            Err(e) => {
                error!("❌ {}", e);
                process::exit(1);
            }
        }
    } else {
        warn!("⚠️  No external weights loaded. Using embedded defaults.");
    }

    let outcome = match cli.command {
        Commands::Score(args) => cmd::score::run(args, config),
        Commands::History(args) => cmd::history::run(args, config),
        Commands::Replay(args) => cmd::replay::run(args, config),
    };

    if let Err(e) = outcome {
        error!("❌ {}", e);
        process::exit(1);
    }
}
