use super::types::{ScoreCategories, ScoreDetails};
use crate::config::ScoringWeights;
use crate::consts::{STAR_MAX, STAR_MIN};

/// Maps a [0, 1] sub-score onto 1..=5 stars. Out-of-range and NaN input clamp.
pub fn star(x: f32) -> u8 {
    let x = if x.is_finite() { x.clamp(0.0, 1.0) } else { 0.0 };
    ((x * 4.0 + 1.0).round() as u8).clamp(STAR_MIN, STAR_MAX)
}

pub fn accuracy(path_similarity: f32, constraint_adherence: f32, w: &ScoringWeights) -> f32 {
    w.accuracy_path_weight * path_similarity + w.accuracy_constraint_weight * constraint_adherence
}

/// Weighted blend of the three categories, in [0, 1].
pub fn composite(accuracy: f32, strokes: f32, timing: f32, w: &ScoringWeights) -> f32 {
    let c = w.total_accuracy_weight * accuracy
        + w.total_strokes_weight * strokes
        + w.total_timing_weight * timing;
    if c.is_finite() {
        c.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

pub fn total_score(composite: f32) -> u8 {
    (composite * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Turns sub-scores into the displayed total and stars. A blank attempt
/// gets the floor result regardless of neutral fallbacks in the comparators.
pub fn compose(details: &ScoreDetails) -> (u8, ScoreCategories) {
    if details.is_blank_attempt() {
        return (
            0,
            ScoreCategories {
                accuracy: STAR_MIN,
                strokes: STAR_MIN,
                timing: STAR_MIN,
                overall: STAR_MIN,
            },
        );
    }

    let total = total_score(details.composite);
    let categories = ScoreCategories {
        accuracy: star(details.accuracy),
        strokes: star(details.strokes_score),
        timing: star(details.timing_score),
        overall: star(total as f32 / 100.0),
    };
    (total, categories)
}
