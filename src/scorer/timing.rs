use super::pattern::{positional_similarity, shares};
use crate::config::ScoringWeights;
use crate::drawing::Drawing;
use tracing::warn;

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct TimingComparison {
    pub ratio_score: f32,
    pub pattern_score: f32,
    pub score: f32,
}

/// Log-symmetric bell over attempt/example duration: 1 at equal time,
/// identical for twice as fast and twice as slow.
pub fn ratio_score(example_time: u64, attempt_time: u64, neutral: f32) -> f32 {
    if example_time == 0 || attempt_time == 0 {
        return neutral;
    }
    let ratio = attempt_time as f64 / example_time as f64;
    let log = ratio.ln();
    let score = (-(log * log)).exp() as f32;
    if score.is_finite() {
        score
    } else {
        neutral
    }
}

/// Each stroke's share of the summed stroke durations.
pub fn relative_durations(drawing: &Drawing) -> Vec<f32> {
    let durations: Vec<f32> = drawing
        .strokes
        .iter()
        .map(|s| s.duration() as f32)
        .collect();
    shares(&durations)
}

/// Rhythm between strokes. Needs at least two strokes on each side and
/// some measurable duration; otherwise neutral.
pub fn pattern_score(example: &Drawing, attempt: &Drawing, neutral: f32) -> f32 {
    if example.strokes.len() < 2 || attempt.strokes.len() < 2 {
        return neutral;
    }
    let ex = relative_durations(example);
    let at = relative_durations(attempt);
    if ex.iter().all(|&d| d == 0.0) || at.iter().all(|&d| d == 0.0) {
        return neutral;
    }
    positional_similarity(&ex, &at, 0.0)
}

pub fn compare_timing(
    example: &Drawing,
    attempt: &Drawing,
    weights: &ScoringWeights,
) -> TimingComparison {
    for (label, d) in [("example", example), ("attempt", attempt)] {
        if d.total_time == 0 && d.strokes.iter().any(|s| s.duration() > 0) {
            warn!(
                "Timing: {} declares total_time 0 but its strokes carry duration",
                label
            );
        }
    }

    let ratio = ratio_score(
        example.total_time,
        attempt.total_time,
        weights.neutral_score,
    );
    let pattern = pattern_score(example, attempt, weights.neutral_score);
    TimingComparison {
        ratio_score: ratio,
        pattern_score: pattern,
        score: weights.timing_ratio_weight * ratio + weights.timing_pattern_weight * pattern,
    }
}
