use super::{load_inputs, make_rng, InputArgs};
use crate::reports;
use clap::Args;
use strokeforge::clock::{Clock, SystemClock};
use strokeforge::config::Config;
use strokeforge::error::{SfResult, StrokeForgeError};
use strokeforge::scorer::Scorer;

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub config: Config,

    #[command(flatten)]
    pub input: InputArgs,

    /// Seed for the feedback draw; same seed, same message.
    #[arg(short = 'S', long)]
    pub seed: Option<u64>,

    /// Print the result as JSON instead of tables.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: ScoreArgs, config: Config) -> SfResult<()> {
    let scorer = Scorer::new(config.weights)?;
    let inputs = load_inputs(&args.input)?;
    let mut rng = make_rng(args.seed);

    let attempt = inputs.attempts.last().ok_or_else(|| {
        StrokeForgeError::Input("no attempt to score; draw the example first".to_string())
    })?;
    let details = scorer.score_details(&inputs.example, attempt, inputs.boxes.first());
    let result = scorer.result_from_details(&details, &mut rng, SystemClock.now_ms());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        reports::print_score_report(&result, &details);
    }
    Ok(())
}
