pub mod history;
pub mod replay;
pub mod score;

use clap::Args;
use strokeforge::drawing::{BoxSize, Drawing};
use strokeforge::error::SfResult;
use tracing::info;

/// Drawing files shared by the scoring commands.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Reference drawing (JSON).
    #[arg(short, long)]
    pub example: String,

    /// Attempt drawings in the order they were made (JSON). Repeatable.
    #[arg(short, long = "attempt", required = true)]
    pub attempts: Vec<String>,

    /// Constraint box as WIDTHxHEIGHT, centered on the attempt surface.
    #[arg(short, long = "box")]
    pub boxes: Vec<String>,
}

pub struct LoadedInputs {
    pub example: Drawing,
    pub attempts: Vec<Drawing>,
    pub boxes: Vec<BoxSize>,
}

impl LoadedInputs {
    pub fn boxes(&self) -> Option<&[BoxSize]> {
        (!self.boxes.is_empty()).then_some(self.boxes.as_slice())
    }
}

pub fn load_inputs(args: &InputArgs) -> SfResult<LoadedInputs> {
    info!("📂 Loading Example: {}", args.example);
    let example = Drawing::load_from_file(&args.example)?;

    let attempts = args
        .attempts
        .iter()
        .map(|path| {
            info!("📂 Loading Attempt: {}", path);
            Drawing::load_from_file(path)
        })
        .collect::<SfResult<Vec<_>>>()?;

    let boxes = args
        .boxes
        .iter()
        .map(|b| BoxSize::parse(b))
        .collect::<SfResult<Vec<_>>>()?;

    Ok(LoadedInputs {
        example,
        attempts,
        boxes,
    })
}

pub fn make_rng(seed: Option<u64>) -> fastrand::Rng {
    match seed {
        Some(s) => fastrand::Rng::with_seed(s),
        None => fastrand::Rng::new(),
    }
}
