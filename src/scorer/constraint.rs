use crate::drawing::{BoxSize, Drawing};

/// Fraction of raw attempt points inside `bbox`, centered on the attempt's
/// capture surface. No box, or no points, means perfect adherence.
pub fn constraint_adherence(attempt: &Drawing, bbox: Option<&BoxSize>) -> f32 {
    let Some(bbox) = bbox else {
        return 1.0;
    };

    let total = attempt.point_count();
    if total == 0 {
        return 1.0;
    }

    let cx = attempt.width / 2.0;
    let cy = attempt.height / 2.0;
    let half_w = bbox.width / 2.0;
    let half_h = bbox.height / 2.0;

    let outside = attempt
        .points()
        .filter(|p| (p.x - cx).abs() > half_w || (p.y - cy).abs() > half_h)
        .count();

    1.0 - outside as f32 / total as f32
}
