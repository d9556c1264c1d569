use super::{Drawing, Point, Stroke};
use crate::clock::Clock;
use crate::consts::{DEFAULT_PEN_COLOR, DEFAULT_PEN_WIDTH};
use crate::error::{SfResult, StrokeForgeError};
use tracing::{debug, warn};

/// Notified whenever the recorder closes a stroke (e.g. to play a sound).
pub trait CaptureObserver {
    fn on_stroke_complete(&mut self, stroke: &Stroke);
}

/// Turns a single-contact pointer stream into a `Drawing`.
///
/// Only one stroke can be active. Moves and releases without a preceding
/// press are ignored, the same way a pointer hovering over the surface is.
pub struct StrokeRecorder<C: Clock> {
    clock: C,
    width: f32,
    height: f32,
    created: u64,
    strokes: Vec<Stroke>,
    active: Option<Stroke>,
    next_id: u32,
    pen_color: String,
    pen_width: f32,
    observer: Option<Box<dyn CaptureObserver>>,
}

impl<C: Clock> StrokeRecorder<C> {
    pub fn new(width: f32, height: f32, clock: C) -> Self {
        let created = clock.now_ms();
        Self {
            clock,
            width,
            height,
            created,
            strokes: Vec::new(),
            active: None,
            next_id: 0,
            pen_color: DEFAULT_PEN_COLOR.to_string(),
            pen_width: DEFAULT_PEN_WIDTH,
            observer: None,
        }
    }

    pub fn with_observer(mut self, observer: Box<dyn CaptureObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Applies to strokes started after this call.
    pub fn set_pen(&mut self, color: &str, width: f32) {
        self.pen_color = color.to_string();
        self.pen_width = width;
    }

    pub fn is_drawing(&self) -> bool {
        self.active.is_some()
    }

    pub fn stroke_count(&self) -> usize {
        self.strokes.len()
    }

    pub fn begin(&mut self, x: f32, y: f32, pressure: Option<f32>) -> SfResult<()> {
        if let Some(active) = &self.active {
            return Err(StrokeForgeError::Capture(format!(
                "stroke {} is still active; only one contact point is tracked",
                active.id
            )));
        }

        let now = self.clock.now_ms();
        let stroke = Stroke {
            id: self.next_id,
            points: vec![self.point(x, y, pressure, now)],
            start_time: now,
            end_time: now,
            color: self.pen_color.clone(),
            width: self.pen_width,
        };
        debug!("Capture: stroke {} started at ({:.1}, {:.1})", stroke.id, x, y);
        self.next_id += 1;
        self.active = Some(stroke);
        Ok(())
    }

    /// Returns false when no stroke is active and the point was dropped.
    pub fn extend(&mut self, x: f32, y: f32, pressure: Option<f32>) -> bool {
        let clock_now = self.clock.now_ms();
        let point = self.point(x, y, pressure, clock_now);
        match self.active.as_mut() {
            Some(stroke) => {
                // Timestamps within a stroke never go backwards
                let now = clock_now.max(stroke.end_time);
                stroke.points.push(Point {
                    timestamp: now,
                    ..point
                });
                stroke.end_time = now;
                true
            }
            None => false,
        }
    }

    pub fn end(&mut self) -> Option<&Stroke> {
        let mut stroke = self.active.take()?;
        stroke.end_time = self.clock.now_ms().max(stroke.end_time);
        debug!(
            "Capture: stroke {} closed with {} points over {}ms",
            stroke.id,
            stroke.points.len(),
            stroke.duration()
        );
        if let Some(observer) = self.observer.as_mut() {
            observer.on_stroke_complete(&stroke);
        }
        self.strokes.push(stroke);
        self.strokes.last()
    }

    /// Ends the session. An unfinished stroke is closed first.
    pub fn finish(mut self) -> Drawing {
        if self.active.is_some() {
            warn!("Capture: session finished mid-stroke; closing it");
            self.end();
        }

        let total_time = match (self.strokes.first(), self.strokes.last()) {
            (Some(first), Some(last)) => last.end_time.saturating_sub(first.start_time),
            _ => 0,
        };

        Drawing {
            strokes: self.strokes,
            total_time,
            width: self.width,
            height: self.height,
            created: self.created,
        }
    }

    fn point(&self, x: f32, y: f32, pressure: Option<f32>, timestamp: u64) -> Point {
        Point {
            x,
            y,
            timestamp,
            pressure: pressure.map(|p| p.clamp(0.0, 1.0)),
        }
    }
}
