use crate::drawing::{Drawing, Point, Stroke};

/// Maps a drawing into the unit frame: bounding box anchored at the origin,
/// longer side scaled to 1, aspect ratio preserved.
///
/// Drawings whose box is degenerate in either axis (a dot, a perfectly
/// horizontal or vertical line) are only translated. Empty drawings come
/// back unchanged.
pub fn normalize(drawing: &Drawing) -> Drawing {
    let Some(bounds) = drawing.bounds() else {
        return drawing.clone();
    };

    let bw = bounds.width();
    let bh = bounds.height();
    let scale = if bw > 0.0 && bh > 0.0 {
        (1.0 / bw).min(1.0 / bh)
    } else {
        1.0
    };

    let strokes = drawing
        .strokes
        .iter()
        .map(|s| Stroke {
            id: s.id,
            points: s
                .points
                .iter()
                .map(|p| Point {
                    x: (p.x - bounds.min_x) * scale,
                    y: (p.y - bounds.min_y) * scale,
                    ..*p
                })
                .collect(),
            start_time: s.start_time,
            end_time: s.end_time,
            color: s.color.clone(),
            width: s.width,
        })
        .collect();

    Drawing {
        strokes,
        total_time: drawing.total_time,
        width: 1.0,
        height: if bw > 0.0 { bh / bw } else { 1.0 },
        created: drawing.created,
    }
}
