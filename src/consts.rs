/// Lowest star a category can show. A blank attempt still earns one star.
pub const STAR_MIN: u8 = 1;

/// Highest star a category can show.
pub const STAR_MAX: u8 = 5;

/// Attempts a learner gets per example before the session must be reset.
pub const MAX_ATTEMPTS: usize = 5;

/// Below this, lengths and durations are treated as zero.
pub const EPSILON: f32 = 1e-6;

/// Default pen used by the recorder when the caller does not pick one.
pub const DEFAULT_PEN_COLOR: &str = "#1f2937";
pub const DEFAULT_PEN_WIDTH: f32 = 4.0;
