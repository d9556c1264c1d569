//! Frame-driven replay of recorded drawings.
//!
//! A `FrameScheduler` owns a list of tasks and advances all of them once per
//! `tick`, handing each the milliseconds elapsed since the previous tick.
//! Time comes from an injected `Clock`, so replays can be stepped
//! deterministically without real delays.

use crate::clock::{Clock, ManualClock};
use crate::drawing::{Drawing, Point};
use std::sync::mpsc::Sender;
use tracing::{debug, trace};

/// One cooperatively scheduled unit of work. Returns true once finished.
pub trait FrameTask {
    fn step(&mut self, elapsed_ms: u64) -> bool;
}

/// Adapts a step closure into a task.
pub struct FnTask<F>(pub F);

impl<F: FnMut(u64) -> bool> FrameTask for FnTask<F> {
    fn step(&mut self, elapsed_ms: u64) -> bool {
        (self.0)(elapsed_ms)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle(u64);

pub struct FrameScheduler<C: Clock> {
    clock: C,
    tasks: Vec<(TaskHandle, Box<dyn FrameTask>)>,
    next_handle: u64,
    last_tick: Option<u64>,
}

impl<C: Clock> FrameScheduler<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            tasks: Vec::new(),
            next_handle: 0,
            last_tick: None,
        }
    }

    pub fn schedule<T: FrameTask + 'static>(&mut self, task: T) -> TaskHandle {
        let handle = TaskHandle(self.next_handle);
        self.next_handle += 1;
        self.tasks.push((handle, Box::new(task)));
        trace!("Scheduler: task {:?} scheduled", handle);
        handle
    }

    pub fn schedule_fn<F: FnMut(u64) -> bool + 'static>(&mut self, step: F) -> TaskHandle {
        self.schedule(FnTask(step))
    }

    /// Returns false if the task already finished or was never scheduled.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|(h, _)| *h != handle);
        if self.tasks.is_empty() {
            self.last_tick = None;
        }
        self.tasks.len() != before
    }

    pub fn is_running(&self) -> bool {
        !self.tasks.is_empty()
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Advances every task once. The first tick after going idle reports
    /// zero elapsed time. Returns whether any task remains.
    pub fn tick(&mut self) -> bool {
        if self.tasks.is_empty() {
            self.last_tick = None;
            return false;
        }

        let now = self.clock.now_ms();
        let elapsed = self
            .last_tick
            .map(|t| now.saturating_sub(t))
            .unwrap_or(0);
        self.last_tick = Some(now);

        self.tasks.retain_mut(|(_, task)| !task.step(elapsed));

        if self.tasks.is_empty() {
            debug!("Scheduler: all tasks finished");
            self.last_tick = None;
            false
        } else {
            true
        }
    }
}

/// Advances a manual clock by `frame_ms` before each tick until the
/// scheduler goes idle or `max_frames` is reached. Returns frames ticked.
pub fn drive(
    scheduler: &mut FrameScheduler<ManualClock>,
    clock: &ManualClock,
    frame_ms: u64,
    max_frames: usize,
) -> usize {
    let mut frames = 0;
    // Prime the scheduler so the first real frame measures elapsed time
    if !scheduler.tick() {
        return frames;
    }
    while frames < max_frames {
        clock.advance(frame_ms);
        frames += 1;
        if !scheduler.tick() {
            break;
        }
    }
    frames
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReplayEvent {
    Point { stroke: usize, point: Point },
    StrokeComplete { stroke: usize },
    Finished,
}

/// Receives what a replay reveals, frame by frame.
pub trait ReplaySink {
    fn on_event(&mut self, event: ReplayEvent);
}

impl ReplaySink for Sender<ReplayEvent> {
    fn on_event(&mut self, event: ReplayEvent) {
        // A dropped receiver just means nobody is watching anymore
        let _ = self.send(event);
    }
}

impl ReplaySink for Vec<ReplayEvent> {
    fn on_event(&mut self, event: ReplayEvent) {
        self.push(event);
    }
}

/// Reveals the points of a drawing in recorded time order.
pub struct DrawingReplay<S: ReplaySink> {
    drawing: Drawing,
    sink: S,
    speed: f32,
    origin: u64,
    played_ms: f64,
    stroke_idx: usize,
    point_idx: usize,
}

impl<S: ReplaySink> DrawingReplay<S> {
    pub fn new(drawing: Drawing, speed: f32, sink: S) -> Self {
        let origin = drawing
            .strokes
            .iter()
            .filter_map(|s| s.points.first().map(|p| p.timestamp.min(s.start_time)))
            .min()
            .unwrap_or(0);
        Self {
            drawing,
            sink,
            speed: if speed.is_finite() && speed > 0.0 {
                speed
            } else {
                1.0
            },
            origin,
            played_ms: 0.0,
            stroke_idx: 0,
            point_idx: 0,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.stroke_idx >= self.drawing.strokes.len()
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

impl<S: ReplaySink> FrameTask for DrawingReplay<S> {
    fn step(&mut self, elapsed_ms: u64) -> bool {
        self.played_ms += elapsed_ms as f64 * self.speed as f64;

        while let Some(stroke) = self.drawing.strokes.get(self.stroke_idx) {
            let Some(point) = stroke.points.get(self.point_idx) else {
                self.sink.on_event(ReplayEvent::StrokeComplete {
                    stroke: self.stroke_idx,
                });
                self.stroke_idx += 1;
                self.point_idx = 0;
                continue;
            };
            let due = point.timestamp.saturating_sub(self.origin) as f64;
            if due > self.played_ms {
                break;
            }
            self.sink.on_event(ReplayEvent::Point {
                stroke: self.stroke_idx,
                point: *point,
            });
            self.point_idx += 1;
        }

        if self.is_finished() {
            self.sink.on_event(ReplayEvent::Finished);
            true
        } else {
            false
        }
    }
}
