pub mod capture;

use crate::error::{SfResult, StrokeForgeError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
    pub timestamp: u64, // ms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pressure: Option<f32>, // 0..=1
}

impl Point {
    pub fn new(x: f32, y: f32, timestamp: u64) -> Self {
        Self {
            x,
            y,
            timestamp,
            pressure: None,
        }
    }

    #[inline(always)]
    pub fn distance_to(&self, other: &Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// One pen-down to pen-up path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stroke {
    pub id: u32,
    pub points: Vec<Point>,
    pub start_time: u64,
    pub end_time: u64,
    pub color: String,
    pub width: f32,
}

impl Stroke {
    /// Polyline length: sum of distances between consecutive points.
    pub fn length(&self) -> f32 {
        self.points.windows(2).map(|w| w[0].distance_to(&w[1])).sum()
    }

    pub fn duration(&self) -> u64 {
        self.end_time.saturating_sub(self.start_time)
    }
}

/// Axis-aligned bounds over every point of a drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl Bounds {
    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }
}

/// Size of a constraint region, centered on the capture surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxSize {
    pub width: f32,
    pub height: f32,
}

impl BoxSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Parses the CLI form `WIDTHxHEIGHT`, e.g. `200x150`.
    pub fn parse(s: &str) -> SfResult<Self> {
        let (w, h) = s
            .split_once(['x', 'X'])
            .ok_or_else(|| StrokeForgeError::Config(format!("box '{}' is not WxH", s)))?;
        let parse = |v: &str| {
            v.trim()
                .parse::<f32>()
                .ok()
                .filter(|n| n.is_finite() && *n >= 0.0)
                .ok_or_else(|| StrokeForgeError::Config(format!("invalid box dimension '{}'", v)))
        };
        Ok(Self::new(parse(w)?, parse(h)?))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Drawing {
    pub strokes: Vec<Stroke>,
    pub total_time: u64,
    pub width: f32,
    pub height: f32,
    pub created: u64,
}

impl Drawing {
    pub fn empty(width: f32, height: f32, created: u64) -> Self {
        Self {
            strokes: Vec::new(),
            total_time: 0,
            width,
            height,
            created,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = &Point> {
        self.strokes.iter().flat_map(|s| s.points.iter())
    }

    pub fn point_count(&self) -> usize {
        self.strokes.iter().map(|s| s.points.len()).sum()
    }

    pub fn bounds(&self) -> Option<Bounds> {
        let mut pts = self.points();
        let first = pts.next()?;
        let init = Bounds {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x,
            max_y: first.y,
        };
        Some(pts.fold(init, |b, p| Bounds {
            min_x: b.min_x.min(p.x),
            min_y: b.min_y.min(p.y),
            max_x: b.max_x.max(p.x),
            max_y: b.max_y.max(p.y),
        }))
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> SfResult<Self> {
        let content = fs::read_to_string(path)?;
        let drawing: Self = serde_json::from_str(&content)?;
        drawing.validate()?;
        Ok(drawing)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> SfResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Checks the structural invariants a capture session guarantees.
    pub fn validate(&self) -> SfResult<()> {
        if !self.strokes.is_empty() && (self.width <= 0.0 || self.height <= 0.0) {
            return Err(StrokeForgeError::Validation(format!(
                "drawing with strokes needs a positive surface, got {}x{}",
                self.width, self.height
            )));
        }

        let mut seen_ids = std::collections::HashSet::new();
        for stroke in &self.strokes {
            if !seen_ids.insert(stroke.id) {
                return Err(StrokeForgeError::Validation(format!(
                    "duplicate stroke id {}",
                    stroke.id
                )));
            }
            if stroke.points.is_empty() {
                return Err(StrokeForgeError::Validation(format!(
                    "stroke {} has no points",
                    stroke.id
                )));
            }
            if stroke.end_time < stroke.start_time {
                return Err(StrokeForgeError::Validation(format!(
                    "stroke {} ends before it starts",
                    stroke.id
                )));
            }
            if stroke
                .points
                .windows(2)
                .any(|w| w[1].timestamp < w[0].timestamp)
            {
                return Err(StrokeForgeError::Validation(format!(
                    "stroke {} has decreasing timestamps",
                    stroke.id
                )));
            }
            if let Some(p) = stroke
                .points
                .iter()
                .find(|p| !p.x.is_finite() || !p.y.is_finite())
            {
                return Err(StrokeForgeError::Validation(format!(
                    "stroke {} has a non-finite point ({}, {})",
                    stroke.id, p.x, p.y
                )));
            }
            if let Some(pressure) = stroke
                .points
                .iter()
                .filter_map(|p| p.pressure)
                .find(|v| !(0.0..=1.0).contains(v))
            {
                return Err(StrokeForgeError::Validation(format!(
                    "stroke {} has pressure {} outside [0, 1]",
                    stroke.id, pressure
                )));
            }
        }
        Ok(())
    }
}
