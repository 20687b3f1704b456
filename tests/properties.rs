mod common;

use common::*;
use inkglyph::kurbo::Point;
use inkglyph::{
    classify, resolve, segment, CandidateSet, Candidates, Primitive, RecognitionConfig,
    Recognizer, Stroke,
};

fn is_subset(small: CandidateSet, large: CandidateSet) -> bool {
    small.symbols().all(|c| large.contains(c))
}

fn permutations(items: &[Primitive]) -> Vec<Vec<Primitive>> {
    if items.len() <= 1 {
        return vec![items.to_vec()];
    }
    let mut out = Vec::new();
    for i in 0..items.len() {
        let mut rest = items.to_vec();
        let head = rest.remove(i);
        for mut tail in permutations(&rest) {
            tail.insert(0, head);
            out.push(tail);
        }
    }
    out
}

#[test]
fn intersecting_never_grows_the_set() {
    for count in 1..=4 {
        let mut set = CandidateSet::for_count(count).expect("count in range");
        for primitive in Primitive::ALL {
            let narrowed = set.intersect(CandidateSet::for_primitive(primitive));
            assert!(narrowed.len() <= set.len());
            assert!(is_subset(narrowed, set));
            set = narrowed;
        }
    }
}

#[test]
fn resolved_set_respects_every_constraint() {
    let drawings = [
        vec![Primitive::HLine, Primitive::VLine],
        vec![Primitive::FSlash, Primitive::BSlash, Primitive::HLine],
        vec![Primitive::VLine, Primitive::BackwardCurve, Primitive::BackwardCurve],
        vec![Primitive::Circle],
    ];
    for primitives in drawings {
        let set = resolve(&primitives).set();
        let by_count = CandidateSet::for_count(primitives.len()).expect("count in range");
        assert!(is_subset(set, by_count));
        for p in &primitives {
            assert!(is_subset(set, CandidateSet::for_primitive(*p)));
        }
    }
}

#[test]
fn resolution_ignores_drawing_order() {
    let primitives = [
        Primitive::VLine,
        Primitive::HLine,
        Primitive::HLine,
        Primitive::FSlash,
    ];
    let expected = resolve(&primitives);
    for order in permutations(&primitives) {
        assert_eq!(resolve(&order), expected);
    }
}

#[test]
fn counts_outside_range_do_not_resolve() {
    assert_eq!(resolve(&[]), Candidates::Unresolved(0));
    let many = [Primitive::HLine; 5];
    assert_eq!(resolve(&many), Candidates::Unresolved(5));
    assert!(resolve(&many).set().is_empty());
}

#[test]
fn small_bounds_are_a_dot_whatever_the_path() {
    let cfg = RecognitionConfig::default();
    let wiggle: Vec<Point> = (0..50)
        .map(|i| {
            if i % 2 == 0 {
                Point::new(10.0, 10.0)
            } else {
                Point::new(11.9, 11.9)
            }
        })
        .collect();
    let stroke = Stroke::from_points(&wiggle).expect("points");
    assert!(stroke.length() > 50.0);
    let segments = segment(&stroke, &cfg);
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].primitive, Primitive::Dot);

    let short = line((10.0, 10.0), (12.5, 10.0));
    let segments = segment(&short, &cfg);
    assert!(segments.iter().all(|s| s.primitive != Primitive::Dot));
}

#[test]
fn classification_is_repeatable() {
    let cfg = RecognitionConfig::default();
    let stroke = arc((160.0, 200.0), 40.0, -60.0, -300.0);
    let first = segment(&stroke, &cfg);
    let second = segment(&stroke, &cfg);
    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.primitive, b.primitive);
        assert_eq!(classify(a, &cfg), a.primitive);
    }
}

#[test]
fn capital_t_survives_scaling() {
    init_logging();
    let bar = line_points((40.0, 30.0), (100.0, 30.0));
    let stem = line_points((70.0, 32.0), (70.0, 150.0));
    let recognizer = Recognizer::default();
    for factor in [0.5, 1.0, 2.0, 3.0] {
        let strokes = [scaled(&bar, factor), scaled(&stem, factor)];
        assert_eq!(
            recognizer.recognize_strokes(&strokes).symbol(),
            Some('T'),
            "scale {factor}"
        );
    }
}
