use proptest::prelude::*;
use strokeforge::config::ScoringWeights;
use strokeforge::drawing::{BoxSize, Drawing, Point, Stroke};
use strokeforge::scorer::normalize::normalize;
use strokeforge::scorer::similarity::path_similarity;
use strokeforge::scorer::Scorer;

// --- STRATEGIES ---

prop_compose! {
    fn arb_stroke(id: u32)(
        pts in proptest::collection::vec((0.0..400.0f32, 0.0..400.0f32, 0u64..50), 1..20),
        start in 0u64..10_000
    ) -> Stroke {
        let mut t = start;
        let points: Vec<Point> = pts
            .into_iter()
            .map(|(x, y, dt)| {
                t += dt;
                Point::new(x, y, t)
            })
            .collect();
        Stroke {
            id,
            start_time: start,
            end_time: t,
            points,
            color: "#000".to_string(),
            width: 2.0,
        }
    }
}

fn arb_drawing() -> impl Strategy<Value = Drawing> {
    (0usize..5)
        .prop_flat_map(|n| {
            let strokes: Vec<_> = (0..n as u32).map(arb_stroke).collect();
            (strokes, 0u64..20_000)
        })
        .prop_map(|(strokes, total_time)| Drawing {
            strokes,
            total_time,
            width: 400.0,
            height: 400.0,
            created: 0,
        })
}

fn non_empty_drawing() -> impl Strategy<Value = Drawing> {
    arb_drawing().prop_filter("needs strokes", |d| !d.is_empty())
}

fn unit(x: f32) -> bool {
    x.is_finite() && (0.0..=1.0 + 1e-5).contains(&x)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn test_normalize_idempotent(d in non_empty_drawing()) {
        let once = normalize(&d);
        let twice = normalize(&once);
        for (a, b) in once.points().zip(twice.points()) {
            prop_assert!((a.x - b.x).abs() < 1e-3, "x {} vs {}", a.x, b.x);
            prop_assert!((a.y - b.y).abs() < 1e-3, "y {} vs {}", a.y, b.y);
        }
    }

    #[test]
    fn test_self_similarity_is_one(d in non_empty_drawing()) {
        let n = normalize(&d);
        prop_assert_eq!(path_similarity(&n, &n, 5.0), 1.0);
    }

    #[test]
    fn test_subscores_stay_in_unit_range(
        example in arb_drawing(),
        attempt in arb_drawing(),
        box_w in 0.0..500.0f32,
        box_h in 0.0..500.0f32,
        use_box in any::<bool>()
    ) {
        let scorer = Scorer::new(ScoringWeights::default()).unwrap();
        let bbox = BoxSize::new(box_w, box_h);
        let d = scorer.score_details(&example, &attempt, use_box.then_some(&bbox));

        for (name, v) in [
            ("path", d.path_similarity),
            ("box", d.constraint_adherence),
            ("accuracy", d.accuracy),
            ("count", d.stroke_count_similarity),
            ("length", d.stroke_length_similarity),
            ("strokes", d.strokes_score),
            ("ratio", d.timing_ratio_score),
            ("rhythm", d.timing_pattern_score),
            ("timing", d.timing_score),
            ("composite", d.composite),
        ] {
            prop_assert!(unit(v), "{} out of range: {}", name, v);
        }
    }

    #[test]
    fn test_result_is_well_formed(
        example in arb_drawing(),
        attempt in arb_drawing(),
        seed in any::<u64>()
    ) {
        let scorer = Scorer::default();
        let mut rng = fastrand::Rng::with_seed(seed);
        let res = scorer.calculate_score_at(&example, &[attempt], None, &mut rng, 0).unwrap();

        prop_assert!(res.total_score <= 100);
        for (_, stars) in res.categories.as_array() {
            prop_assert!((1..=5).contains(&stars));
        }
        prop_assert!(!res.feedback.is_empty());
    }
}
