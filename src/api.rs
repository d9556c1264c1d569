use crate::consts::MAX_ATTEMPTS;
use crate::drawing::{BoxSize, Drawing};
use crate::error::{SfResult, StrokeForgeError};
use crate::scorer::{ScoreResult, Scorer};
use tracing::info;

/// One example and the learner's attempts at it.
///
/// Keeps the best result seen so far; the scoring itself stays stateless.
pub struct PracticeSession {
    example: Drawing,
    attempts: Vec<Drawing>,
    constraint_boxes: Vec<BoxSize>,
    best: Option<ScoreResult>,
}

impl PracticeSession {
    pub fn new(example: Drawing) -> Self {
        Self {
            example,
            attempts: Vec::with_capacity(MAX_ATTEMPTS),
            constraint_boxes: Vec::new(),
            best: None,
        }
    }

    pub fn with_constraint_boxes(mut self, boxes: Vec<BoxSize>) -> Self {
        self.constraint_boxes = boxes;
        self
    }

    /// Seeds the best score from an earlier session (e.g. loaded from storage).
    pub fn with_previous_best(mut self, best: Option<ScoreResult>) -> Self {
        self.best = best;
        self
    }

    pub fn example(&self) -> &Drawing {
        &self.example
    }

    pub fn attempts(&self) -> &[Drawing] {
        &self.attempts
    }

    pub fn attempts_left(&self) -> usize {
        MAX_ATTEMPTS.saturating_sub(self.attempts.len())
    }

    pub fn best(&self) -> Option<&ScoreResult> {
        self.best.as_ref()
    }

    pub fn add_attempt(&mut self, attempt: Drawing) -> SfResult<()> {
        if self.attempts.len() >= MAX_ATTEMPTS {
            return Err(StrokeForgeError::Input(format!(
                "attempt limit of {} reached; reset the session to keep practicing",
                MAX_ATTEMPTS
            )));
        }
        self.attempts.push(attempt);
        Ok(())
    }

    pub fn reset_attempts(&mut self) {
        self.attempts.clear();
    }

    /// Scores the latest attempt. The result replaces the stored best only
    /// when its total is strictly higher.
    pub fn score(
        &mut self,
        scorer: &Scorer,
        rng: &mut fastrand::Rng,
        timestamp: u64,
    ) -> SfResult<ScoreResult> {
        let boxes = (!self.constraint_boxes.is_empty()).then_some(self.constraint_boxes.as_slice());
        let result = scorer.calculate_score_at(&self.example, &self.attempts, boxes, rng, timestamp)?;

        let improved = self
            .best
            .as_ref()
            .map_or(true, |b| result.total_score > b.total_score);
        if improved {
            info!("Session: new best score {}", result.total_score);
            self.best = Some(result.clone());
        }
        Ok(result)
    }
}
