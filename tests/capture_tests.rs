use std::cell::RefCell;
use std::rc::Rc;
use strokeforge::clock::ManualClock;
use strokeforge::drawing::capture::{CaptureObserver, StrokeRecorder};
use strokeforge::drawing::Stroke;
use strokeforge::error::StrokeForgeError;
use strokeforge::scorer::Scorer;

struct CompletedIds(Rc<RefCell<Vec<u32>>>);

impl CaptureObserver for CompletedIds {
    fn on_stroke_complete(&mut self, stroke: &Stroke) {
        self.0.borrow_mut().push(stroke.id);
    }
}

fn record_two_strokes(clock: &ManualClock, rec: &mut StrokeRecorder<ManualClock>) {
    rec.begin(10.0, 10.0, Some(0.5)).unwrap();
    clock.advance(20);
    assert!(rec.extend(20.0, 15.0, Some(0.6)));
    clock.advance(20);
    assert!(rec.extend(30.0, 20.0, None));
    clock.advance(5);
    rec.end();

    clock.advance(100);
    rec.begin(50.0, 50.0, None).unwrap();
    clock.advance(40);
    rec.extend(50.0, 90.0, None);
    rec.end();
}

#[test]
fn test_records_strokes_in_order() {
    let clock = ManualClock::new(1_000);
    let mut rec = StrokeRecorder::new(300.0, 200.0, clock.clone());
    record_two_strokes(&clock, &mut rec);
    let d = rec.finish();

    assert_eq!(d.strokes.len(), 2);
    assert_eq!(d.created, 1_000);
    assert_eq!((d.width, d.height), (300.0, 200.0));

    let s0 = &d.strokes[0];
    assert_eq!(s0.id, 0);
    assert_eq!(s0.points.len(), 3);
    assert_eq!(s0.start_time, 1_000);
    assert_eq!(s0.end_time, 1_045);
    assert_eq!(s0.points[1].timestamp, 1_020);
    assert_eq!(s0.points[0].pressure, Some(0.5));

    let s1 = &d.strokes[1];
    assert_eq!(s1.id, 1);
    assert_eq!(s1.start_time, 1_145);
    assert_eq!(s1.end_time, 1_185);

    assert_eq!(d.total_time, 185);
    d.validate().unwrap();
}

#[test]
fn test_second_contact_is_rejected() {
    let clock = ManualClock::new(0);
    let mut rec = StrokeRecorder::new(100.0, 100.0, clock);
    rec.begin(1.0, 1.0, None).unwrap();
    let err = rec.begin(2.0, 2.0, None).unwrap_err();
    assert!(matches!(err, StrokeForgeError::Capture(_)));
    assert!(rec.is_drawing());
}

#[test]
fn test_hover_moves_are_ignored() {
    let clock = ManualClock::new(0);
    let mut rec = StrokeRecorder::new(100.0, 100.0, clock);
    assert!(!rec.extend(5.0, 5.0, None));
    assert!(rec.end().is_none());
    let d = rec.finish();
    assert!(d.is_empty());
    assert_eq!(d.total_time, 0);
}

#[test]
fn test_observer_hears_each_completed_stroke() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let clock = ManualClock::new(0);
    let mut rec = StrokeRecorder::new(300.0, 300.0, clock.clone())
        .with_observer(Box::new(CompletedIds(seen.clone())));
    record_two_strokes(&clock, &mut rec);
    assert_eq!(*seen.borrow(), vec![0, 1]);
}

#[test]
fn test_finish_closes_open_stroke() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let clock = ManualClock::new(0);
    let mut rec = StrokeRecorder::new(100.0, 100.0, clock.clone())
        .with_observer(Box::new(CompletedIds(seen.clone())));
    rec.begin(0.0, 0.0, None).unwrap();
    clock.advance(30);
    rec.extend(10.0, 10.0, None);
    let d = rec.finish();

    assert_eq!(d.strokes.len(), 1);
    assert_eq!(d.strokes[0].end_time, 30);
    assert_eq!(*seen.borrow(), vec![0]);
}

#[test]
fn test_pressure_is_clamped_and_pen_applies() {
    let clock = ManualClock::new(0);
    let mut rec = StrokeRecorder::new(100.0, 100.0, clock);
    rec.set_pen("#ff0000", 8.0);
    rec.begin(0.0, 0.0, Some(1.7)).unwrap();
    rec.extend(1.0, 1.0, Some(-0.2));
    rec.end();
    let d = rec.finish();

    let s = &d.strokes[0];
    assert_eq!(s.color, "#ff0000");
    assert_eq!(s.width, 8.0);
    assert_eq!(s.points[0].pressure, Some(1.0));
    assert_eq!(s.points[1].pressure, Some(0.0));
}

#[test]
fn test_recorded_copy_scores_perfectly() {
    let clock = ManualClock::new(0);
    let mut rec = StrokeRecorder::new(300.0, 300.0, clock.clone());
    record_two_strokes(&clock, &mut rec);
    let example = rec.finish();

    let res = Scorer::default()
        .calculate_score_at(
            &example,
            &[example.clone()],
            None,
            &mut fastrand::Rng::with_seed(1),
            0,
        )
        .unwrap();
    assert_eq!(res.total_score, 100);
}
