use crate::config::ScoringWeights;
use strum_macros::{Display, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "kebab-case")]
pub enum FeedbackBand {
    Excellent,
    VeryGood,
    Good,
    Fair,
    NeedsWork,
}

impl FeedbackBand {
    pub fn for_score(total_score: u8, weights: &ScoringWeights) -> Self {
        if total_score >= weights.band_excellent {
            Self::Excellent
        } else if total_score >= weights.band_very_good {
            Self::VeryGood
        } else if total_score >= weights.band_good {
            Self::Good
        } else if total_score >= weights.band_fair {
            Self::Fair
        } else {
            Self::NeedsWork
        }
    }

    pub fn messages(&self) -> &'static [&'static str] {
        match self {
            Self::Excellent => &[
                "Outstanding! That is almost a perfect copy.",
                "Excellent work! Your strokes match the example beautifully.",
                "Superb! Shape, order and rhythm are all spot on.",
            ],
            Self::VeryGood => &[
                "Very good! Just a few small differences from the example.",
                "Great job! Your drawing is very close to the original.",
                "Really nice! A little more care and it will be perfect.",
            ],
            Self::Good => &[
                "Good effort! The overall shape is there.",
                "Nice try! Watch the length of each stroke.",
                "Good work! Try to keep a steadier pace next time.",
            ],
            Self::Fair => &[
                "Not bad! Look at the example again and follow its strokes.",
                "Keep going! Pay attention to the number of strokes.",
                "You are getting there. Try drawing a bit more slowly.",
            ],
            Self::NeedsWork => &[
                "Keep practicing! Watch the replay and try once more.",
                "Let's try again. Follow the example one stroke at a time.",
                "Don't give up! Every attempt makes you better.",
            ],
        }
    }

    /// Draws one message from the band's pool using the caller's generator.
    pub fn pick(&self, rng: &mut fastrand::Rng) -> &'static str {
        let pool = self.messages();
        pool[rng.usize(..pool.len())]
    }
}
