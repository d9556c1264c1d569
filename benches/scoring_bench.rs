use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use strokeforge::drawing::{Drawing, Point, Stroke};
use strokeforge::scorer::normalize::normalize;
use strokeforge::scorer::Scorer;

/// Spiral strokes with a few hundred points in total.
fn spiral(strokes: u32, points_per_stroke: u32, wobble: f32) -> Drawing {
    let mut t = 0u64;
    let mut out = Vec::new();
    for id in 0..strokes {
        let start_time = t;
        let points: Vec<Point> = (0..points_per_stroke)
            .map(|i| {
                let a = (id * points_per_stroke + i) as f32 * 0.05;
                let r = 20.0 + a * 15.0 + (i as f32 * wobble).sin() * wobble;
                t += 8;
                Point::new(200.0 + r * a.cos(), 200.0 + r * a.sin(), t)
            })
            .collect();
        out.push(Stroke {
            id,
            points,
            start_time,
            end_time: t,
            color: "#000000".to_string(),
            width: 3.0,
        });
        t += 120;
    }
    Drawing {
        strokes: out,
        total_time: t,
        width: 400.0,
        height: 400.0,
        created: 0,
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    let scorer = Scorer::default();
    let example = spiral(4, 80, 0.0);
    let attempt = spiral(5, 70, 1.5);
    let attempts = vec![attempt.clone()];

    c.bench_function("normalize (320 points)", |b| {
        b.iter(|| normalize(black_box(&example)))
    });

    c.bench_function("score_details (320 vs 350 points)", |b| {
        b.iter(|| scorer.score_details(black_box(&example), black_box(&attempt), None))
    });

    c.bench_function("calculate_score_at", |b| {
        let mut rng = fastrand::Rng::with_seed(42);
        b.iter(|| {
            scorer.calculate_score_at(black_box(&example), black_box(&attempts), None, &mut rng, 0)
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
