use crate::error::{SfResult, StrokeForgeError};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// Slack for float rounding when weights are meant to sum to exactly 1
const BLEND_TOLERANCE: f32 = 1e-4;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[command(flatten)]
    pub weights: ScoringWeights,
    #[command(flatten)]
    pub replay: ReplayParams,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    // === PATH SIMILARITY ===
    // exp(-avg_distance * decay)
    #[arg(long, default_value_t = 5.0)]
    pub similarity_decay: f32,

    // === STROKE PATTERN ===
    // Added to the length difference once per missing/extra stroke
    #[arg(long, default_value_t = 0.1)]
    pub stroke_mismatch_penalty: f32,
    #[arg(long, default_value_t = 0.5)]
    pub strokes_count_weight: f32,
    #[arg(long, default_value_t = 0.5)]
    pub strokes_length_weight: f32,

    // === TIMING ===
    #[arg(long, default_value_t = 0.4)]
    pub timing_ratio_weight: f32,
    #[arg(long, default_value_t = 0.6)]
    pub timing_pattern_weight: f32,

    // === ACCURACY ===
    #[arg(long, default_value_t = 0.75)]
    pub accuracy_path_weight: f32,
    #[arg(long, default_value_t = 0.25)]
    pub accuracy_constraint_weight: f32,

    // === TOTAL ===
    #[arg(long, default_value_t = 0.5)]
    pub total_accuracy_weight: f32,
    #[arg(long, default_value_t = 0.25)]
    pub total_strokes_weight: f32,
    #[arg(long, default_value_t = 0.25)]
    pub total_timing_weight: f32,

    // Returned by comparators that have nothing to compare
    #[arg(long, default_value_t = 0.5)]
    pub neutral_score: f32,

    // === FEEDBACK BANDS (lower bounds on total score) ===
    #[arg(long, default_value_t = 90)]
    pub band_excellent: u8,
    #[arg(long, default_value_t = 75)]
    pub band_very_good: u8,
    #[arg(long, default_value_t = 60)]
    pub band_good: u8,
    #[arg(long, default_value_t = 40)]
    pub band_fair: u8,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            similarity_decay: 5.0,
            stroke_mismatch_penalty: 0.1,
            strokes_count_weight: 0.5,
            strokes_length_weight: 0.5,
            timing_ratio_weight: 0.4,
            timing_pattern_weight: 0.6,
            accuracy_path_weight: 0.75,
            accuracy_constraint_weight: 0.25,
            total_accuracy_weight: 0.5,
            total_strokes_weight: 0.25,
            total_timing_weight: 0.25,
            neutral_score: 0.5,
            band_excellent: 90,
            band_very_good: 75,
            band_good: 60,
            band_fair: 40,
        }
    }
}

impl ScoringWeights {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> SfResult<Self> {
        let content = fs::read_to_string(path)?;
        let weights: Self = serde_json::from_str(&content)?;
        weights.validate()?;
        Ok(weights)
    }

    /// Rejects weights that could push a sub-score out of [0, 1] or break band ordering.
    pub fn validate(&self) -> SfResult<()> {
        let unit_weights = [
            ("strokes_count_weight", self.strokes_count_weight),
            ("strokes_length_weight", self.strokes_length_weight),
            ("timing_ratio_weight", self.timing_ratio_weight),
            ("timing_pattern_weight", self.timing_pattern_weight),
            ("accuracy_path_weight", self.accuracy_path_weight),
            ("accuracy_constraint_weight", self.accuracy_constraint_weight),
            ("total_accuracy_weight", self.total_accuracy_weight),
            ("total_strokes_weight", self.total_strokes_weight),
            ("total_timing_weight", self.total_timing_weight),
            ("neutral_score", self.neutral_score),
        ];
        for (name, value) in unit_weights {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(StrokeForgeError::Config(format!(
                    "{} must be within [0, 1], got {}",
                    name, value
                )));
            }
        }

        // Blended sub-scores stay in [0, 1] only if their weights sum to at most 1
        let blends = [
            (
                "accuracy_path_weight + accuracy_constraint_weight",
                self.accuracy_path_weight + self.accuracy_constraint_weight,
            ),
            (
                "strokes_count_weight + strokes_length_weight",
                self.strokes_count_weight + self.strokes_length_weight,
            ),
            (
                "timing_ratio_weight + timing_pattern_weight",
                self.timing_ratio_weight + self.timing_pattern_weight,
            ),
            (
                "total_accuracy_weight + total_strokes_weight + total_timing_weight",
                self.total_accuracy_weight + self.total_strokes_weight + self.total_timing_weight,
            ),
        ];
        for (name, sum) in blends {
            if sum > 1.0 + BLEND_TOLERANCE {
                return Err(StrokeForgeError::Config(format!(
                    "{} must not exceed 1, got {}",
                    name, sum
                )));
            }
        }

        if !self.similarity_decay.is_finite() || self.similarity_decay <= 0.0 {
            return Err(StrokeForgeError::Config(format!(
                "similarity_decay must be positive, got {}",
                self.similarity_decay
            )));
        }
        if !self.stroke_mismatch_penalty.is_finite() || self.stroke_mismatch_penalty < 0.0 {
            return Err(StrokeForgeError::Config(format!(
                "stroke_mismatch_penalty must be non-negative, got {}",
                self.stroke_mismatch_penalty
            )));
        }

        let bands = [
            self.band_excellent,
            self.band_very_good,
            self.band_good,
            self.band_fair,
        ];
        if self.band_excellent > 100 || bands.windows(2).any(|w| w[0] < w[1]) {
            return Err(StrokeForgeError::Config(format!(
                "feedback bands must descend from at most 100, got {:?}",
                bands
            )));
        }

        Ok(())
    }

    pub fn merge_from_cli(&mut self, cli_weights: &ScoringWeights, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli_weights.$field;
                }
            };
        }

        update_if_present!(similarity_decay, "similarity_decay");

        update_if_present!(stroke_mismatch_penalty, "stroke_mismatch_penalty");
        update_if_present!(strokes_count_weight, "strokes_count_weight");
        update_if_present!(strokes_length_weight, "strokes_length_weight");

        update_if_present!(timing_ratio_weight, "timing_ratio_weight");
        update_if_present!(timing_pattern_weight, "timing_pattern_weight");

        update_if_present!(accuracy_path_weight, "accuracy_path_weight");
        update_if_present!(accuracy_constraint_weight, "accuracy_constraint_weight");

        update_if_present!(total_accuracy_weight, "total_accuracy_weight");
        update_if_present!(total_strokes_weight, "total_strokes_weight");
        update_if_present!(total_timing_weight, "total_timing_weight");

        update_if_present!(neutral_score, "neutral_score");

        update_if_present!(band_excellent, "band_excellent");
        update_if_present!(band_very_good, "band_very_good");
        update_if_present!(band_good, "band_good");
        update_if_present!(band_fair, "band_fair");
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplayParams {
    /// Playback multiplier; 2.0 replays twice as fast as it was drawn.
    #[arg(long, default_value_t = 1.0)]
    pub replay_speed: f32,
    #[arg(long, default_value_t = 16)]
    pub frame_ms: u64,
}

impl Default for ReplayParams {
    fn default() -> Self {
        Self {
            replay_speed: 1.0,
            frame_ms: 16,
        }
    }
}

impl ReplayParams {
    pub fn validate(&self) -> SfResult<()> {
        if !self.replay_speed.is_finite() || self.replay_speed <= 0.0 {
            return Err(StrokeForgeError::Config(format!(
                "replay_speed must be positive, got {}",
                self.replay_speed
            )));
        }
        if self.frame_ms == 0 {
            return Err(StrokeForgeError::Config(
                "frame_ms must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
