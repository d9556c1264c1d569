pub mod compose;
pub mod constraint;
pub mod feedback;
pub mod normalize;
pub mod pattern;
pub mod similarity;
pub mod timing;
pub mod types;

use self::feedback::FeedbackBand;
pub use self::types::{ScoreCategories, ScoreDetails, ScoreResult};
use crate::clock::{Clock, SystemClock};
use crate::config::ScoringWeights;
use crate::drawing::{BoxSize, Drawing};
use crate::error::{SfResult, StrokeForgeError};
use tracing::debug;

/// Compares a learner's drawing against the example.
///
/// Holds only weights; every call is independent, so one `Scorer` can be
/// shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Scorer {
    pub weights: ScoringWeights,
}

impl Scorer {
    pub fn new(weights: ScoringWeights) -> SfResult<Self> {
        weights.validate()?;
        Ok(Self { weights })
    }

    /// Every sub-score for one example/attempt pair (no feedback draw).
    pub fn score_details(
        &self,
        example: &Drawing,
        attempt: &Drawing,
        constraint_box: Option<&BoxSize>,
    ) -> ScoreDetails {
        let w = &self.weights;

        let norm_example = normalize::normalize(example);
        let norm_attempt = normalize::normalize(attempt);
        let path_similarity =
            similarity::path_similarity(&norm_example, &norm_attempt, w.similarity_decay);
        let constraint_adherence = constraint::constraint_adherence(attempt, constraint_box);
        let accuracy = compose::accuracy(path_similarity, constraint_adherence, w);

        let strokes = pattern::compare_strokes(example, attempt, w);
        let timing = timing::compare_timing(example, attempt, w);

        let composite = compose::composite(accuracy, strokes.score, timing.score, w);

        let d = ScoreDetails {
            path_similarity,
            constraint_adherence,
            accuracy,
            stroke_count_similarity: strokes.count_similarity,
            stroke_length_similarity: strokes.length_similarity,
            strokes_score: strokes.score,
            timing_ratio_score: timing.ratio_score,
            timing_pattern_score: timing.pattern_score,
            timing_score: timing.score,
            composite,
            example_points: example.point_count(),
            attempt_points: attempt.point_count(),
        };

        debug!(
            "Score: path={:.3} box={:.3} acc={:.3} strokes={:.3} (count {:.3}, len {:.3}) timing={:.3} (ratio {:.3}, pattern {:.3})",
            d.path_similarity,
            d.constraint_adherence,
            d.accuracy,
            d.strokes_score,
            d.stroke_count_similarity,
            d.stroke_length_similarity,
            d.timing_score,
            d.timing_ratio_score,
            d.timing_pattern_score
        );

        d
    }

    /// Scores the last attempt. Constraint boxes are per-exercise; the
    /// first one supplied applies.
    pub fn calculate_score_at(
        &self,
        example: &Drawing,
        attempts: &[Drawing],
        constraint_boxes: Option<&[BoxSize]>,
        rng: &mut fastrand::Rng,
        timestamp: u64,
    ) -> SfResult<ScoreResult> {
        let attempt = attempts.last().ok_or_else(|| {
            StrokeForgeError::Input("no attempt to score; draw the example first".to_string())
        })?;
        let constraint_box = constraint_boxes.and_then(|b| b.first());

        let details = self.score_details(example, attempt, constraint_box);
        Ok(self.result_from_details(&details, rng, timestamp))
    }

    pub fn calculate_score(
        &self,
        example: &Drawing,
        attempts: &[Drawing],
        constraint_boxes: Option<&[BoxSize]>,
        rng: &mut fastrand::Rng,
    ) -> SfResult<ScoreResult> {
        self.calculate_score_at(
            example,
            attempts,
            constraint_boxes,
            rng,
            SystemClock.now_ms(),
        )
    }

    pub fn result_from_details(
        &self,
        details: &ScoreDetails,
        rng: &mut fastrand::Rng,
        timestamp: u64,
    ) -> ScoreResult {
        let (total_score, categories) = compose::compose(details);
        let band = FeedbackBand::for_score(total_score, &self.weights);
        debug!("Score: total={} band={}", total_score, band);

        ScoreResult {
            total_score,
            categories,
            feedback: band.pick(rng).to_string(),
            timestamp,
        }
    }
}

/// Scores the last attempt with default weights and a fresh random source.
pub fn calculate_score(
    example: &Drawing,
    attempts: &[Drawing],
    constraint_boxes: Option<&[BoxSize]>,
) -> SfResult<ScoreResult> {
    Scorer::default().calculate_score(
        example,
        attempts,
        constraint_boxes,
        &mut fastrand::Rng::new(),
    )
}
