mod common;

use common::*;
use inkglyph::{
    resolve, segment, CharacterBuffer, Primitive, Recognition, RecognitionConfig,
    RecognitionContext, Recognizer, Stroke, StrokeOutcome, UnknownReason,
};

fn primitives(strokes: &[Stroke]) -> Vec<Primitive> {
    let recognizer = Recognizer::default();
    strokes
        .iter()
        .flat_map(|s| recognizer.segment(s))
        .map(|s| s.primitive)
        .collect()
}

fn recognize(strokes: &[Stroke]) -> Option<char> {
    init_logging();
    Recognizer::default().recognize_strokes(strokes).symbol()
}

#[test]
fn vertical_line_is_one() {
    let strokes = [line((160.0, 100.0), (160.0, 300.0))];
    assert_eq!(primitives(&strokes), vec![Primitive::VLine]);
    assert!(resolve(&primitives(&strokes)).set().contains('1'));
    assert_eq!(recognize(&strokes), Some('1'));
}

#[test]
fn capped_upright_is_capital_i() {
    let strokes = [
        line((120.0, 100.0), (200.0, 100.0)),
        line((160.0, 102.0), (160.0, 298.0)),
        line((120.0, 300.0), (200.0, 300.0)),
    ];
    assert_eq!(
        primitives(&strokes),
        vec![Primitive::HLine, Primitive::VLine, Primitive::HLine]
    );
    assert_eq!(recognize(&strokes), Some('I'));
}

#[test]
fn peak_is_caret() {
    let strokes = [
        line((150.0, 100.0), (100.0, 200.0)),
        line((151.0, 100.0), (200.0, 200.0)),
    ];
    assert_eq!(
        primitives(&strokes),
        vec![Primitive::FSlash, Primitive::BSlash]
    );
    assert_eq!(recognize(&strokes), Some('^'));
}

#[test]
fn forward_curve_case_follows_height() {
    let small = [arc((160.0, 200.0), 40.0, -60.0, -300.0)];
    assert_eq!(primitives(&small), vec![Primitive::ForwardCurve]);
    assert_eq!(recognize(&small), Some('c'));

    let large = [arc((200.0, 240.0), 150.0, -60.0, -300.0)];
    assert_eq!(primitives(&large), vec![Primitive::ForwardCurve]);
    assert_eq!(recognize(&large), Some('C'));
}

#[test]
fn backward_curve_position_decides_comma() {
    let high = [arc((140.0, 160.0), 60.0, -120.0, 120.0)];
    assert_eq!(primitives(&high), vec![Primitive::BackwardCurve]);
    assert_eq!(recognize(&high), Some(')'));

    let low = [arc((140.0, 420.0), 25.0, -120.0, 120.0)];
    assert_eq!(primitives(&low), vec![Primitive::BackwardCurve]);
    assert_eq!(recognize(&low), Some(','));
}

#[test]
fn five_segments_are_unknown() {
    let strokes: Vec<Stroke> = (0..5)
        .map(|i| {
            let y = 60.0 + 50.0 * i as f64;
            line((100.0, y), (220.0, y))
        })
        .collect();
    let result = Recognizer::default().recognize_strokes(&strokes);
    assert_eq!(
        result,
        Recognition::Unknown(UnknownReason::UnresolvedSegmentCount(5))
    );
    assert_eq!(resolve(&primitives(&strokes)).to_string(), "unknown");
}

#[test]
fn lines_only_letters() {
    let t = [
        line((100.0, 60.0), (220.0, 60.0)),
        line((160.0, 62.0), (160.0, 300.0)),
    ];
    assert_eq!(recognize(&t), Some('T'));

    let l = [
        line((100.0, 60.0), (100.0, 300.0)),
        line((100.0, 300.0), (200.0, 300.0)),
    ];
    assert_eq!(recognize(&l), Some('L'));

    let h = [
        line((100.0, 60.0), (100.0, 300.0)),
        line((220.0, 60.0), (220.0, 300.0)),
        line((100.0, 180.0), (220.0, 180.0)),
    ];
    assert_eq!(recognize(&h), Some('H'));

    let plus = [
        line((100.0, 200.0), (220.0, 200.0)),
        line((160.0, 120.0), (160.0, 260.0)),
    ];
    assert_eq!(recognize(&plus), Some('+'));

    let x = [
        line((100.0, 100.0), (200.0, 200.0)),
        line((200.0, 100.0), (100.0, 200.0)),
    ];
    assert_eq!(recognize(&x), Some('x'));
}

#[test]
fn curves_on_uprights() {
    let d = [
        line((100.0, 60.0), (100.0, 260.0)),
        arc((100.0, 160.0), 100.0, -90.0, 90.0),
    ];
    assert_eq!(recognize(&d), Some('D'));

    let p = [
        line((100.0, 50.0), (100.0, 400.0)),
        arc((100.0, 137.5), 87.5, -90.0, 90.0),
    ];
    assert_eq!(recognize(&p), Some('P'));
}

#[test]
fn loops_and_dots() {
    let o = [arc((160.0, 200.0), 120.0, -90.0, -450.0)];
    assert_eq!(primitives(&o), vec![Primitive::Circle]);
    assert_eq!(recognize(&o), Some('O'));

    assert_eq!(recognize(&[tap((160.0, 200.0))]), Some('.'));
    assert_eq!(
        recognize(&[tap((160.0, 150.0)), tap((161.0, 200.0))]),
        Some(':')
    );

    let i = [line((160.0, 200.0), (160.0, 300.0)), tap((160.0, 170.0))];
    assert_eq!(recognize(&i), Some('i'));

    let bang = [line((160.0, 100.0), (160.0, 260.0)), tap((160.0, 290.0))];
    assert_eq!(recognize(&bang), Some('!'));
}

#[test]
fn unimplemented_shapes_stay_unknown() {
    // A bar and an upright that never meet.
    let strokes = [
        line((100.0, 60.0), (220.0, 60.0)),
        line((300.0, 200.0), (300.0, 400.0)),
    ];
    let result = Recognizer::default().recognize_strokes(&strokes);
    match result {
        Recognition::Unknown(UnknownReason::NoVerifierMatched { candidates }) => {
            assert_eq!(candidates.to_string(), "LTt+");
        }
        other => panic!("expected no match, got {other:?}"),
    }
}

#[test]
fn bar_beside_an_upright_is_not_a_plus() {
    let strokes = [
        line((160.0, 20.0), (160.0, 420.0)),
        line((164.0, 220.0), (264.0, 220.0)),
    ];
    let result = recognize(&strokes);
    assert_ne!(result, Some('+'));
    assert_eq!(result, None);

    let crossing = [
        line((160.0, 20.0), (160.0, 420.0)),
        line((100.0, 240.0), (220.0, 240.0)),
    ];
    assert_eq!(recognize(&crossing), Some('+'));
}

#[test]
fn buffer_keeps_its_result_until_reset() {
    init_logging();
    let cfg = RecognitionConfig::default();
    let ctx = RecognitionContext::default();
    let mut buffer = CharacterBuffer::new();
    buffer.add_stroke(line((100.0, 60.0), (220.0, 60.0)), &cfg);
    buffer.add_stroke(line((160.0, 62.0), (160.0, 300.0)), &cfg);
    assert_eq!(buffer.recognize(&ctx, &cfg), Recognition::Symbol('T'));

    buffer.add_stroke(line((100.0, 300.0), (220.0, 300.0)), &cfg);
    assert_eq!(buffer.resolved(), Some(&Recognition::Symbol('T')));
    assert_eq!(buffer.segments().len(), 3);

    buffer.reset();
    assert!(buffer.resolved().is_none());
}

#[test]
fn stroke_events_drive_the_buffer() {
    init_logging();
    let mut recognizer = Recognizer::default();
    assert_eq!(
        recognizer.push_stroke(line((100.0, 60.0), (220.0, 60.0))),
        StrokeOutcome::Added { segments: 1 }
    );
    recognizer.push_stroke(line((160.0, 62.0), (160.0, 300.0)));
    assert_eq!(recognizer.buffer().segments().len(), 2);
    assert_eq!(recognizer.finish_character(), Recognition::Symbol('T'));

    recognizer.push_stroke(line((160.0, 100.0), (160.0, 300.0)));
    recognizer.clear();
    assert!(recognizer.buffer().is_empty());
}

#[test]
fn one_stroke_corner_splits_into_two_segments() {
    let segments = segment(
        &Stroke::from_points(
            &[
                line_points((100.0, 60.0), (100.0, 300.0)),
                line_points((100.0, 300.0), (220.0, 300.0)),
            ]
            .concat(),
        )
        .expect("points"),
        &inkglyph::RecognitionConfig::default(),
    );
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0].primitive, Primitive::VLine);
}
