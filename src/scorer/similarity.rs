use crate::drawing::Drawing;

/// Mean nearest-neighbour distance from each candidate point to the reference
/// point set. `None` when either side has no points.
pub fn average_nearest_distance(reference: &Drawing, candidate: &Drawing) -> Option<f32> {
    let ref_points: Vec<_> = reference.points().collect();
    if ref_points.is_empty() {
        return None;
    }

    let mut total = 0.0;
    let mut count = 0usize;
    for p in candidate.points() {
        let nearest = ref_points
            .iter()
            .map(|r| r.distance_to(p))
            .fold(f32::INFINITY, f32::min);
        total += nearest;
        count += 1;
    }

    if count == 0 {
        return None;
    }
    Some(total / count as f32)
}

/// Shape similarity in [0, 1] between two normalized drawings.
///
/// Asymmetric: every candidate point is matched against the reference, so
/// a candidate that covers only part of the reference can still score high.
/// O(N*M) in point counts.
pub fn path_similarity(reference: &Drawing, candidate: &Drawing, decay: f32) -> f32 {
    if reference.is_empty() || candidate.is_empty() {
        return 0.0;
    }
    match average_nearest_distance(reference, candidate) {
        Some(avg) => {
            let sim = (-avg * decay).exp();
            if sim.is_finite() {
                sim.clamp(0.0, 1.0)
            } else {
                0.0
            }
        }
        None => 0.0,
    }
}
