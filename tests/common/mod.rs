#![allow(dead_code)] // Not every test binary uses every helper

use strokeforge::drawing::{Drawing, Point, Stroke};

pub const SURFACE: f32 = 400.0;

/// Builds a stroke from `(x, y, t)` triples; start/end follow the first and last point.
pub fn stroke(id: u32, pts: &[(f32, f32, u64)]) -> Stroke {
    let points: Vec<Point> = pts.iter().map(|&(x, y, t)| Point::new(x, y, t)).collect();
    Stroke {
        id,
        start_time: points.first().map(|p| p.timestamp).unwrap_or(0),
        end_time: points.last().map(|p| p.timestamp).unwrap_or(0),
        points,
        color: "#000000".to_string(),
        width: 3.0,
    }
}

/// Builder for drawings to keep tests short.
pub struct DrawingBuilder {
    strokes: Vec<Stroke>,
    width: f32,
    height: f32,
    total_time: Option<u64>,
}

impl DrawingBuilder {
    pub fn new() -> Self {
        Self {
            strokes: Vec::new(),
            width: SURFACE,
            height: SURFACE,
            total_time: None,
        }
    }

    pub fn stroke(mut self, pts: &[(f32, f32, u64)]) -> Self {
        let id = self.strokes.len() as u32;
        self.strokes.push(stroke(id, pts));
        self
    }

    pub fn surface(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn total_time(mut self, ms: u64) -> Self {
        self.total_time = Some(ms);
        self
    }

    pub fn build(self) -> Drawing {
        let total_time = self.total_time.unwrap_or_else(|| {
            match (self.strokes.first(), self.strokes.last()) {
                (Some(first), Some(last)) => last.end_time.saturating_sub(first.start_time),
                _ => 0,
            }
        });
        Drawing {
            strokes: self.strokes,
            total_time,
            width: self.width,
            height: self.height,
            created: 0,
        }
    }
}

pub fn empty_drawing() -> Drawing {
    Drawing::empty(SURFACE, SURFACE, 0)
}

/// A three-stroke "house": square base, roof, door.
pub fn house() -> Drawing {
    DrawingBuilder::new()
        .stroke(&[
            (100.0, 200.0, 0),
            (300.0, 200.0, 200),
            (300.0, 350.0, 350),
            (100.0, 350.0, 550),
            (100.0, 200.0, 700),
        ])
        .stroke(&[(100.0, 200.0, 900), (200.0, 100.0, 1050), (300.0, 200.0, 1200)])
        .stroke(&[(180.0, 350.0, 1400), (180.0, 290.0, 1480), (220.0, 290.0, 1540), (220.0, 350.0, 1600)])
        .build()
}

pub fn assert_close(actual: f32, expected: f32, tol: f32) {
    assert!(
        (actual - expected).abs() <= tol,
        "expected {} ± {}, got {}",
        expected,
        tol,
        actual
    );
}
