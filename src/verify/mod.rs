//! Per-symbol geometric verification.
//!
//! Each verifiable symbol maps to a predicate over the full segment
//! geometry. A predicate either rejects the drawing or names the symbol it
//! proves, which may be a sibling of the candidate it was asked about
//! (`'c'` for `'C'`, `','` for `')'`): shapes that differ only in size or
//! position share one predicate.
//!
//! Every tolerance is a fraction of a length taken from the drawing itself
//! (a segment's height, the character's height) or from the writing
//! surface, never an absolute pixel count.

mod digits;
mod lower;
mod punct;
mod upper;

use kurbo::{Point, Rect};
use log::trace;

use crate::config::{RecognitionConfig, RecognitionContext};
use crate::geom::distance;
use crate::segment::{Primitive, Segment};

/// A verifier: `Some(symbol)` when the drawing proves `symbol`.
pub type Verifier = fn(&Glyph<'_>) -> Option<char>;

/// Symbols with a verifier, grouped by the predicate that proves them.
///
/// Symbols of the alphabet that appear nowhere here (0 2 6 8, e f g h j l
/// m n r, and most punctuation) cannot be recognized yet.
const REGISTRY: &[(&str, Verifier)] = &[
    ("1", digits::one),
    ("3", digits::three),
    ("4", digits::four),
    ("5", digits::five),
    ("7", digits::seven),
    ("9", digits::nine),
    ("A", upper::a),
    ("B", upper::b),
    ("Cc", upper::c),
    ("D", upper::d),
    ("E", upper::e),
    ("F", upper::f),
    ("G", upper::g),
    ("H", upper::h),
    ("I[]", upper::i_or_bracket),
    ("J", upper::j),
    ("Kk", upper::k),
    ("L", upper::l),
    ("M", upper::m),
    ("N", upper::n),
    ("Oo", upper::o),
    ("Pp", upper::p),
    ("Q", upper::q),
    ("R", upper::r),
    ("Ss", upper::s),
    ("T", upper::t),
    ("Uu", upper::u),
    ("Vv", upper::v),
    ("Ww", upper::w),
    ("Xx", upper::x),
    ("Y", upper::y),
    ("Zz", upper::z),
    ("a", lower::a),
    ("b", lower::b),
    ("d", lower::d),
    ("i", lower::i),
    ("q", lower::q),
    ("t", lower::t),
    ("y", lower::y),
    ("!", punct::exclamation),
    ("#", punct::hash),
    ("%", punct::percent),
    ("(", punct::open_paren),
    ("),", punct::close_paren_or_comma),
    ("+", punct::plus),
    ("-_", punct::dash_or_underscore),
    (".", punct::period),
    ("/", punct::slash),
    (":", punct::colon),
    (";", punct::semicolon),
    ("<>", punct::angle_bracket),
    ("=", punct::equals),
    ("\\", punct::backslash),
    ("^", punct::caret),
    ("|", punct::bar),
];

/// The verifier registered for `symbol`, if any.
pub fn verifier(symbol: char) -> Option<Verifier> {
    REGISTRY
        .iter()
        .find(|(symbols, _)| symbols.contains(symbol))
        .map(|&(_, check)| check)
}

/// Test one candidate symbol against the drawing.
///
/// Returns the proven symbol, which may be a sibling variant of
/// `symbol`, or `None` when the geometry does not fit or no verifier
/// exists for it.
pub fn verify(
    symbol: char,
    segments: &[Segment],
    context: &RecognitionContext,
    config: &RecognitionConfig,
) -> Option<char> {
    verify_glyph(symbol, &Glyph::new(segments, segment_bounds(segments), context, config))
}

/// Test one candidate against a prepared glyph, whose bounds may come from
/// the strokes rather than the segments.
pub(crate) fn verify_glyph(symbol: char, glyph: &Glyph<'_>) -> Option<char> {
    let check = verifier(symbol)?;
    let result = check(glyph);
    trace!("verify {:?}: {:?}", symbol, result);
    result
}

/// Union of the segments' bounds, which is the bounds of the strokes they
/// were cut from.
pub fn segment_bounds(segments: &[Segment]) -> Rect {
    segments
        .iter()
        .map(|s| s.bounds)
        .reduce(|a, b| a.union(b))
        .unwrap_or(Rect::ZERO)
}

/// Everything a verifier may look at: the segments in drawing order, the
/// bounds of all strokes, and the surface they were written on.
#[derive(Debug, Clone, Copy)]
pub struct Glyph<'a> {
    segments: &'a [Segment],
    bounds: Rect,
    context: &'a RecognitionContext,
    config: &'a RecognitionConfig,
}

impl<'a> Glyph<'a> {
    pub fn new(
        segments: &'a [Segment],
        bounds: Rect,
        context: &'a RecognitionContext,
        config: &'a RecognitionConfig,
    ) -> Self {
        Self {
            segments,
            bounds,
            context,
            config,
        }
    }

    pub fn segments(&self) -> &'a [Segment] {
        self.segments
    }

    /// Bounds of every stroke in the character.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn context(&self) -> &RecognitionContext {
        self.context
    }

    /// `Some(())` when the drawing has exactly `n` segments.
    fn count(&self, n: usize) -> Option<()> {
        (self.segments.len() == n).then_some(())
    }

    /// Last segment of the given primitive: a later stroke replaces an
    /// earlier one in the same role.
    fn one(&self, primitive: Primitive) -> Option<&'a Segment> {
        self.segments.iter().rfind(|s| s.primitive == primitive)
    }

    /// The first segment of a primitive fills the first role and the last
    /// later one fills the second.
    fn two(&self, primitive: Primitive) -> Option<(&'a Segment, &'a Segment)> {
        let mut matching = self.segments.iter().filter(|s| s.primitive == primitive);
        let first = matching.next()?;
        let second = matching.last()?;
        Some((first, second))
    }

    /// Every segment of the given primitive, in drawing order.
    fn all(&self, primitive: Primitive) -> Vec<&'a Segment> {
        self.segments
            .iter()
            .filter(|s| s.primitive == primitive)
            .collect()
    }

    /// The only segment, when it is of the given primitive.
    fn only(&self, primitive: Primitive) -> Option<&'a Segment> {
        self.count(1)?;
        self.one(primitive)
    }

    /// Uppercase when the character is taller than the small-letter band.
    fn sized(&self, upper: char, lower: char) -> char {
        let limit = self.config.small_letter_fraction * self.context.surface_height;
        if self.bounds.height() > limit {
            upper
        } else {
            lower
        }
    }

    /// True when `y` sits in the low band of the surface.
    fn is_low(&self, y: f64) -> bool {
        y > self.config.low_position_fraction * self.context.surface_height
    }

    /// Horizontal alignment tolerance for stacked marks.
    fn alignment(&self) -> f64 {
        self.config.alignment_fraction * self.context.surface_width
    }

    fn config(&self) -> &RecognitionConfig {
        self.config
    }
}

/// Order two segments by the x of their chord midpoints.
fn left_right<'s>(a: &'s Segment, b: &'s Segment) -> (&'s Segment, &'s Segment) {
    if b.mid().x < a.mid().x {
        (b, a)
    } else {
        (a, b)
    }
}

/// Order two segments by the y of their chord midpoints.
fn top_bottom<'s>(a: &'s Segment, b: &'s Segment) -> (&'s Segment, &'s Segment) {
    if b.mid().y < a.mid().y {
        (b, a)
    } else {
        (a, b)
    }
}

/// Two strokes meeting at the top and spreading at the bottom, like `^`.
fn caret_gap(a: &Segment, b: &Segment) -> bool {
    let top_gap = distance(a.top(), b.top());
    let bottom_gap = distance(a.bottom(), b.bottom());
    top_gap < 0.25 * bottom_gap
}

/// Two strokes meeting at the bottom and spreading at the top, like `V`.
fn v_gap(a: &Segment, b: &Segment) -> bool {
    let top_gap = distance(a.top(), b.top());
    let bottom_gap = distance(a.bottom(), b.bottom());
    bottom_gap < 0.25 * top_gap
}

/// True when `a` and `b` are closer than `limit`.
fn near(a: Point, b: Point, limit: f64) -> bool {
    distance(a, b) < limit
}


#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;
    use crate::alphabet::ALPHABET;

    #[test]
    fn registry_covers_only_alphabet_symbols_once() {
        let mut seen = Vec::new();
        for (symbols, _) in REGISTRY {
            for c in symbols.chars() {
                assert!(ALPHABET.contains(c), "{c:?} not in alphabet");
                assert!(!seen.contains(&c), "{c:?} registered twice");
                seen.push(c);
            }
        }
    }

    #[test]
    fn unimplemented_symbols_have_no_verifier() {
        for c in "0268efghjlmnr {}~@&$*?\"'`".chars() {
            assert!(verifier(c).is_none(), "{c:?} should have no verifier");
        }
    }

    #[test]
    fn single_vertical_line_is_one() {
        let segments = [seg(Primitive::VLine, (100.0, 100.0), (100.0, 300.0))];
        let ctx = RecognitionContext::default();
        let cfg = RecognitionConfig::default();
        assert_eq!(verify('1', &segments, &ctx, &cfg), Some('1'));
        assert_eq!(verify('|', &segments, &ctx, &cfg), Some('|'));
        assert_eq!(verify('l', &segments, &ctx, &cfg), None);
    }

    #[test]
    fn later_segment_takes_a_repeated_role() {
        let segments = [
            seg(Primitive::HLine, (100.0, 100.0), (200.0, 100.0)),
            seg(Primitive::HLine, (100.0, 300.0), (200.0, 300.0)),
        ];
        let ctx = RecognitionContext::default();
        let cfg = RecognitionConfig::default();
        let glyph = Glyph::new(&segments, bounds_of(&segments), &ctx, &cfg);
        assert_eq!(glyph.one(Primitive::HLine).map(|s| s.start.y), Some(300.0));
        assert!(glyph.one(Primitive::VLine).is_none());
    }

    #[test]
    fn stroke_bounds_decide_case() {
        let segments = [curve(
            Primitive::Circle,
            Point::new(150.0, 100.0),
            Point::new(151.0, 101.0),
            Point::new(150.0, 150.0),
        )];
        let ctx = RecognitionContext::default();
        let cfg = RecognitionConfig::default();
        let small = Glyph::new(&segments, bounds_of(&segments), &ctx, &cfg);
        assert_eq!(verify_glyph('O', &small), Some('o'));
        let tall = Glyph::new(&segments, Rect::new(50.0, 50.0, 250.0, 300.0), &ctx, &cfg);
        assert_eq!(verify_glyph('O', &tall), Some('O'));
    }

    #[test]
    fn ordering_helpers() {
        let a = seg(Primitive::VLine, (200.0, 0.0), (200.0, 100.0));
        let b = seg(Primitive::VLine, (100.0, 50.0), (100.0, 150.0));
        assert_eq!(left_right(&a, &b).0.start.x, 100.0);
        assert_eq!(top_bottom(&a, &b).0.start.x, 200.0);
    }

    #[test]
    fn caret_and_v_gaps() {
        let f = seg(Primitive::FSlash, (100.0, 0.0), (50.0, 100.0));
        let b = seg(Primitive::BSlash, (100.0, 0.0), (150.0, 100.0));
        assert!(caret_gap(&f, &b));
        assert!(!v_gap(&f, &b));

        let f = seg(Primitive::FSlash, (150.0, 0.0), (100.0, 100.0));
        let b = seg(Primitive::BSlash, (50.0, 0.0), (100.0, 100.0));
        assert!(v_gap(&b, &f));
        assert!(!caret_gap(&b, &f));
    }
}
