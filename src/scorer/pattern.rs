use crate::config::ScoringWeights;
use crate::consts::EPSILON;
use crate::drawing::Drawing;

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct StrokeComparison {
    pub count_similarity: f32,
    pub length_similarity: f32,
    pub score: f32,
}

/// 1 when the counts match, falling linearly to 0 as one side runs out.
pub fn count_similarity(example_count: usize, attempt_count: usize) -> f32 {
    let max = example_count.max(attempt_count);
    if max == 0 {
        return 1.0;
    }
    let diff = example_count.abs_diff(attempt_count) as f32;
    (1.0 - diff / max as f32).max(0.0)
}

/// Each stroke's share of the drawing's total ink length.
/// All zeros when the drawing has no length (dots only).
pub fn relative_lengths(drawing: &Drawing) -> Vec<f32> {
    let lengths: Vec<f32> = drawing.strokes.iter().map(|s| s.length()).collect();
    shares(&lengths)
}

pub(crate) fn shares(values: &[f32]) -> Vec<f32> {
    let total: f32 = values.iter().sum();
    if total <= EPSILON {
        return vec![0.0; values.len()];
    }
    values.iter().map(|v| v / total).collect()
}

/// Compares two share arrays position by position (i-th vs i-th) over the
/// shorter length. `extra_diff` is added to the summed difference before
/// it is averaged over that length.
pub(crate) fn positional_similarity(a: &[f32], b: &[f32], extra_diff: f32) -> f32 {
    let min_count = a.len().min(b.len());
    if min_count == 0 {
        return 0.0;
    }
    let diff: f32 = a
        .iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).abs())
        .sum::<f32>()
        + extra_diff;
    (1.0 - diff / min_count as f32).max(0.0)
}

pub fn length_similarity(example: &Drawing, attempt: &Drawing, mismatch_penalty: f32) -> f32 {
    if example.is_empty() || attempt.is_empty() {
        return 0.0;
    }
    let mismatch = example.strokes.len().abs_diff(attempt.strokes.len()) as f32;
    positional_similarity(
        &relative_lengths(example),
        &relative_lengths(attempt),
        mismatch * mismatch_penalty,
    )
}

/// Stroke-pattern score on raw drawings: how many strokes, and how the ink
/// is distributed among them.
pub fn compare_strokes(
    example: &Drawing,
    attempt: &Drawing,
    weights: &ScoringWeights,
) -> StrokeComparison {
    let count = count_similarity(example.strokes.len(), attempt.strokes.len());
    let length = length_similarity(example, attempt, weights.stroke_mismatch_penalty);
    StrokeComparison {
        count_similarity: count,
        length_similarity: length,
        score: weights.strokes_count_weight * count + weights.strokes_length_weight * length,
    }
}
