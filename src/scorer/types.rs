use serde::{Deserialize, Serialize};

/// Star ratings, each in 1..=5.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreCategories {
    pub accuracy: u8,
    pub strokes: u8,
    pub timing: u8,
    pub overall: u8,
}

impl ScoreCategories {
    pub fn as_array(&self) -> [(&'static str, u8); 4] {
        [
            ("accuracy", self.accuracy),
            ("strokes", self.strokes),
            ("timing", self.timing),
            ("overall", self.overall),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub total_score: u8, // 0..=100
    pub categories: ScoreCategories,
    pub feedback: String,
    pub timestamp: u64,
}

/// Every intermediate value behind a `ScoreResult`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreDetails {
    // Accuracy
    pub path_similarity: f32,
    pub constraint_adherence: f32,
    pub accuracy: f32,

    // Stroke Pattern
    pub stroke_count_similarity: f32,
    pub stroke_length_similarity: f32,
    pub strokes_score: f32,

    // Timing
    pub timing_ratio_score: f32,
    pub timing_pattern_score: f32,
    pub timing_score: f32,

    // Weighted blend of the three categories, in [0, 1]
    pub composite: f32,

    pub example_points: usize,
    pub attempt_points: usize,
}

impl ScoreDetails {
    /// Nothing was drawn.
    pub fn is_blank_attempt(&self) -> bool {
        self.attempt_points == 0
    }
}
