use super::{load_inputs, make_rng, InputArgs};
use crate::reports::{self, HistoryRow};
use clap::Args;
use rayon::prelude::*;
use strokeforge::config::Config;
use strokeforge::error::SfResult;
use strokeforge::scorer::Scorer;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct HistoryArgs {
    #[command(flatten)]
    pub config: Config,

    #[command(flatten)]
    pub input: InputArgs,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,

    /// Also write one row per attempt to this CSV file.
    #[arg(long)]
    pub csv: Option<String>,
}

pub fn run(args: HistoryArgs, config: Config) -> SfResult<()> {
    let scorer = Scorer::new(config.weights)?;
    let inputs = load_inputs(&args.input)?;
    let constraint_box = inputs.boxes.first();
    let seed = args.seed;

    info!("📈 Scoring {} attempts", inputs.attempts.len());

    // Each attempt is scored as if it were the latest one.
    let rows: Vec<HistoryRow> = inputs
        .attempts
        .par_iter()
        .enumerate()
        .map(|(i, attempt)| {
            let details = scorer.score_details(&inputs.example, attempt, constraint_box);
            let mut rng = make_rng(seed.map(|s| s.wrapping_add(i as u64)));
            let result = scorer.result_from_details(&details, &mut rng, attempt.created);
            HistoryRow::new(i + 1, &result, &details)
        })
        .collect();

    reports::print_history_table(&rows);

    if let Some(path) = &args.csv {
        reports::write_history_csv(path, &rows)?;
        info!("💾 History written to {}", path);
    }
    Ok(())
}
