use crate::reports;
use clap::Args;
use std::sync::mpsc;
use strokeforge::clock::ManualClock;
use strokeforge::config::Config;
use strokeforge::drawing::Drawing;
use strokeforge::error::SfResult;
use strokeforge::replay::{drive, DrawingReplay, FrameScheduler, ReplayEvent};
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct ReplayArgs {
    #[command(flatten)]
    pub config: Config,

    /// Drawing to replay (JSON).
    #[arg(short, long)]
    pub drawing: String,

    #[arg(long, default_value_t = 100_000)]
    pub max_frames: usize,
}

pub struct ReplaySummary {
    pub frames: usize,
    pub points: usize,
    pub strokes: usize,
    pub finished: bool,
    pub simulated_ms: u64,
}

pub fn run(args: ReplayArgs, config: Config) -> SfResult<()> {
    config.replay.validate()?;
    info!("📂 Loading Drawing: {}", args.drawing);
    let drawing = Drawing::load_from_file(&args.drawing)?;

    let clock = ManualClock::new(0);
    let mut scheduler = FrameScheduler::new(clock.clone());
    let (tx, rx) = mpsc::channel();
    scheduler.schedule(DrawingReplay::new(drawing, config.replay.replay_speed, tx));

    info!(
        "▶️  Replaying at {:.2}x, {}ms frames",
        config.replay.replay_speed, config.replay.frame_ms
    );
    let frames = drive(&mut scheduler, &clock, config.replay.frame_ms, args.max_frames);
    // The replay task owned the sender; it is gone once the scheduler drops it.
    drop(scheduler);

    let mut summary = ReplaySummary {
        frames,
        points: 0,
        strokes: 0,
        finished: false,
        simulated_ms: frames as u64 * config.replay.frame_ms,
    };
    for event in rx.iter() {
        match event {
            ReplayEvent::Point { .. } => summary.points += 1,
            ReplayEvent::StrokeComplete { .. } => summary.strokes += 1,
            ReplayEvent::Finished => summary.finished = true,
        }
    }

    reports::print_replay_summary(&summary);
    Ok(())
}
