//! Capital letters, and the lowercase letters that share their shape and
//! differ only in size.

use kurbo::Point;

use super::{caret_gap, left_right, near, top_bottom, v_gap, Glyph};
use crate::geom::{between, distance};
use crate::segment::Primitive;

/// Two slashes meeting at the apex, with a bar across the middle half.
pub(super) fn a(g: &Glyph) -> Option<char> {
    g.count(3)?;
    let fslash = g.one(Primitive::FSlash)?;
    let bslash = g.one(Primitive::BSlash)?;
    let bar = g.one(Primitive::HLine)?;
    if !caret_gap(fslash, bslash) {
        return None;
    }

    let ends = [fslash.start, fslash.end, bslash.start, bslash.end];
    let min_x = ends.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
    let max_x = ends.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
    let min_y = fslash.top().y.min(bslash.top().y);
    let max_y = fslash.bottom().y.max(bslash.bottom().y);
    let width = max_x - min_x;
    let height = max_y - min_y;

    let mid = bar.mid();
    (between(mid.x - min_x, 0.25 * width, 0.75 * width)
        && between(mid.y - min_y, 0.25 * height, 0.75 * height))
    .then_some('A')
}

/// Upright with two bowls, the upper from top to middle and the lower from
/// middle to foot.
pub(super) fn b(g: &Glyph) -> Option<char> {
    g.count(3)?;
    let spine = g.one(Primitive::VLine)?;
    let (first, second) = g.two(Primitive::BackwardCurve)?;
    let (upper, lower) = top_bottom(first, second);
    let gap = 0.25 * spine.height();
    (near(spine.top(), upper.top(), gap)
        && near(spine.mid(), upper.bottom(), 2.0 * gap)
        && near(spine.mid(), lower.top(), 2.0 * gap)
        && near(spine.bottom(), lower.bottom(), gap))
    .then_some('B')
}

/// A forward curve that is not too narrow.
pub(super) fn c(g: &Glyph) -> Option<char> {
    g.only(Primitive::ForwardCurve)?;
    let bounds = g.bounds();
    (bounds.width() > 0.4 * bounds.height()).then(|| g.sized('C', 'c'))
}

/// Upright closed by one bowl spanning its whole height.
pub(super) fn d(g: &Glyph) -> Option<char> {
    g.count(2)?;
    let spine = g.one(Primitive::VLine)?;
    let bowl = g.one(Primitive::BackwardCurve)?;
    let gap = 0.25 * spine.height();
    (near(spine.top(), bowl.top(), gap) && near(spine.bottom(), bowl.bottom(), gap))
        .then_some('D')
}

/// Upright with three arms leaving its top, middle and foot.
pub(super) fn e(g: &Glyph) -> Option<char> {
    g.count(4)?;
    let spine = g.one(Primitive::VLine)?;
    let mut arms = g.all(Primitive::HLine);
    if arms.len() != 3 {
        return None;
    }
    arms.sort_by(|a, b| a.left().y.total_cmp(&b.left().y));
    let gap = 0.25 * spine.height();
    (near(spine.top(), arms[0].left(), gap)
        && near(spine.mid(), arms[1].left(), gap)
        && near(spine.bottom(), arms[2].left(), gap))
    .then_some('E')
}

/// Upright with an arm at the top and a second arm clearly lower.
pub(super) fn f(g: &Glyph) -> Option<char> {
    g.count(3)?;
    let spine = g.one(Primitive::VLine)?;
    let (first, second) = g.two(Primitive::HLine)?;
    let (top_arm, mid_arm) = if second.start.y < first.start.y {
        (second, first)
    } else {
        (first, second)
    };
    let gap = 0.25 * spine.height();
    let drop = (top_arm.left().y - mid_arm.left().y).abs();
    (between(drop, gap, 0.75 * spine.height()) && near(spine.top(), top_arm.left(), gap))
        .then_some('F')
}

/// Open curve with a short spur: bar meeting the spur's top, spur's middle
/// meeting the curve's lower end.
pub(super) fn g(g: &Glyph) -> Option<char> {
    g.count(3)?;
    let curve = g.one(Primitive::ForwardCurve)?;
    let bar = g.one(Primitive::HLine)?;
    let spur = g.one(Primitive::VLine)?;
    let reference = bar.width().min(spur.height());
    let bar_mid = bar.mid();
    let spur_top = spur.top();
    let spur_mid = spur.mid();
    let tail = curve.bottom();
    ((bar_mid.y - spur_top.y).abs() <= 0.25 * reference
        && (bar_mid.x - spur_top.x).abs() <= 0.5 * reference
        && (spur_mid.y - tail.y).abs() <= 0.5 * reference
        && (spur_mid.x - tail.x).abs() <= 0.25 * reference)
        .then_some('G')
}

/// Bar joining the middles of two uprights.
pub(super) fn h(g: &Glyph) -> Option<char> {
    g.count(3)?;
    let (first, second) = g.two(Primitive::VLine)?;
    let (left, right) = left_right(first, second);
    let bar = g.one(Primitive::HLine)?;
    let gap = 0.25 * bar.width();
    (near(bar.left(), left.mid(), gap) && near(bar.right(), right.mid(), gap)).then_some('H')
}

/// Upright capped by two bars: centred gives `I`, hanging from the bars'
/// right ends gives `]`, from their left ends `[`.
pub(super) fn i_or_bracket(g: &Glyph) -> Option<char> {
    g.count(3)?;
    let spine = g.one(Primitive::VLine)?;
    let (first, second) = g.two(Primitive::HLine)?;
    let (top, bottom) = top_bottom(first, second);
    let gap = 0.1 * spine.height();
    let capped = |top_end: Point, bottom_end: Point| {
        near(spine.top(), top_end, gap) && near(spine.bottom(), bottom_end, gap)
    };
    if capped(top.mid(), bottom.mid()) {
        Some('I')
    } else if capped(top.right(), bottom.right()) {
        Some(']')
    } else if capped(top.left(), bottom.left()) {
        Some('[')
    } else {
        None
    }
}

/// Capped upright ending in a hook.
pub(super) fn j(g: &Glyph) -> Option<char> {
    g.count(3)?;
    let cap = g.one(Primitive::HLine)?;
    let spine = g.one(Primitive::VLine)?;
    let hook = g.one(Primitive::UShape)?;
    let gap = 0.1 * spine.height();
    (near(spine.top(), cap.mid(), gap) && near(spine.bottom(), hook.right(), gap)).then_some('J')
}

/// Upright with two diagonals meeting at its middle. Tall diagonals make
/// it a capital.
pub(super) fn k(g: &Glyph) -> Option<char> {
    g.count(3)?;
    let spine = g.one(Primitive::VLine)?;
    let upper = g.one(Primitive::FSlash)?;
    let lower = g.one(Primitive::BSlash)?;
    let gap = 0.25 * spine.height();
    let joined = near(upper.bottom(), lower.top(), gap)
        && near(upper.bottom(), spine.mid(), gap)
        && near(lower.top(), spine.mid(), gap);
    if !joined {
        return None;
    }
    if lower.bottom().y - upper.top().y > 0.75 * spine.height() {
        Some('K')
    } else {
        Some('k')
    }
}

pub(super) fn l(g: &Glyph) -> Option<char> {
    g.count(2)?;
    let spine = g.one(Primitive::VLine)?;
    let foot = g.one(Primitive::HLine)?;
    near(spine.bottom(), foot.left(), 0.25 * spine.height()).then_some('L')
}

/// Two uprights joined at their tops by a `V`.
pub(super) fn m(g: &Glyph) -> Option<char> {
    g.count(4)?;
    let (first, second) = g.two(Primitive::VLine)?;
    let (left, right) = left_right(first, second);
    let bslash = g.one(Primitive::BSlash)?;
    let fslash = g.one(Primitive::FSlash)?;
    (near(bslash.top(), left.top(), 0.25 * bslash.height())
        && v_gap(fslash, bslash)
        && near(fslash.top(), right.top(), 0.25 * fslash.height()))
    .then_some('M')
}

/// Diagonal from the left upright's top to the right upright's foot.
pub(super) fn n(g: &Glyph) -> Option<char> {
    g.count(3)?;
    let (first, second) = g.two(Primitive::VLine)?;
    let (left, right) = left_right(first, second);
    let diagonal = g.one(Primitive::BSlash)?;
    let gap = 0.25 * diagonal.height();
    (near(diagonal.top(), left.top(), gap) && near(diagonal.bottom(), right.bottom(), gap))
        .then_some('N')
}

pub(super) fn o(g: &Glyph) -> Option<char> {
    g.only(Primitive::Circle).map(|_| g.sized('O', 'o'))
}

/// Upright with a bowl on its upper half. Case is decided against a
/// taller band than other letters.
pub(super) fn p(g: &Glyph) -> Option<char> {
    g.count(2)?;
    let spine = g.one(Primitive::VLine)?;
    let bowl = g.one(Primitive::BackwardCurve)?;
    let gap = 0.25 * spine.height();
    if !(near(spine.top(), bowl.top(), gap) && near(spine.mid(), bowl.bottom(), 2.0 * gap)) {
        return None;
    }
    let limit = g.config().capital_p_fraction * g.context().surface_height;
    if g.bounds().height() > limit {
        Some('P')
    } else {
        Some('p')
    }
}

/// Loop with a tail starting near its centre.
pub(super) fn q(g: &Glyph) -> Option<char> {
    g.count(2)?;
    let ring = g.one(Primitive::Circle)?;
    let tail = g.one(Primitive::BSlash)?;
    near(tail.top(), ring.centroid(), 0.5 * ring.bounds.height()).then_some('Q')
}

/// `P` with a leg from the bowl's foot.
pub(super) fn r(g: &Glyph) -> Option<char> {
    g.count(3)?;
    let bowl = g.one(Primitive::BackwardCurve)?;
    let leg = g.one(Primitive::BSlash)?;
    let spine = g.one(Primitive::VLine)?;
    let gap = 0.25 * spine.height();
    (near(spine.top(), bowl.top(), gap)
        && near(spine.mid(), bowl.bottom(), 2.0 * gap)
        && near(spine.mid(), leg.top(), 2.0 * gap))
    .then_some('R')
}

/// Forward curve flowing into a backward curve.
pub(super) fn s(g: &Glyph) -> Option<char> {
    g.count(2)?;
    let upper = g.one(Primitive::ForwardCurve)?;
    let lower = g.one(Primitive::BackwardCurve)?;
    let span = distance(upper.top(), lower.bottom());
    near(upper.bottom(), lower.top(), 0.25 * span).then(|| g.sized('S', 's'))
}

/// Upright hanging from the middle of a bar.
pub(super) fn t(g: &Glyph) -> Option<char> {
    g.count(2)?;
    let bar = g.one(Primitive::HLine)?;
    let spine = g.one(Primitive::VLine)?;
    near(spine.top(), bar.mid(), 0.15 * spine.height()).then_some('T')
}

pub(super) fn u(g: &Glyph) -> Option<char> {
    g.only(Primitive::UShape).map(|_| g.sized('U', 'u'))
}

pub(super) fn v(g: &Glyph) -> Option<char> {
    g.count(2)?;
    let segments = g.segments();
    v_gap(&segments[0], &segments[1]).then(|| g.sized('V', 'v'))
}

/// Two `V`s sharing the middle peak.
pub(super) fn w(g: &Glyph) -> Option<char> {
    g.count(4)?;
    let (b1, b2) = g.two(Primitive::BSlash)?;
    let (f1, f2) = g.two(Primitive::FSlash)?;
    let (left_b, right_b) = left_right(b1, b2);
    let (left_f, right_f) = left_right(f1, f2);
    (v_gap(left_b, left_f) && caret_gap(left_f, right_b) && v_gap(right_b, right_f))
        .then(|| g.sized('W', 'w'))
}

/// Two diagonals crossing near both their middles.
pub(super) fn x(g: &Glyph) -> Option<char> {
    g.count(2)?;
    let bslash = g.one(Primitive::BSlash)?;
    let fslash = g.one(Primitive::FSlash)?;

    let top_gap = distance(fslash.top(), bslash.top());
    let bottom_gap = distance(fslash.bottom(), bslash.bottom());
    let mid_gap = distance(fslash.mid(), bslash.mid());
    let max_gap = top_gap.max(bottom_gap);
    let min_gap = top_gap.min(bottom_gap);

    let straddle = fslash.top().x > bslash.top().x
        && fslash.top().y < bslash.bottom().y
        && fslash.bottom().x < bslash.bottom().x
        && fslash.bottom().y > bslash.top().y;

    (min_gap > 0.25 * max_gap && straddle && mid_gap < 0.25 * max_gap).then(|| g.sized('X', 'x'))
}

/// A `V` standing on an upright.
pub(super) fn y(g: &Glyph) -> Option<char> {
    g.count(3)?;
    let fslash = g.one(Primitive::FSlash)?;
    let bslash = g.one(Primitive::BSlash)?;
    let stem = g.one(Primitive::VLine)?;
    let fork = fslash.bottom().midpoint(bslash.bottom());
    (v_gap(fslash, bslash) && near(fork, stem.top(), 0.5 * stem.height())).then_some('Y')
}

/// Diagonal from the top bar's right end to the bottom bar's left end.
pub(super) fn z(g: &Glyph) -> Option<char> {
    g.count(3)?;
    let (first, second) = g.two(Primitive::HLine)?;
    let (top, bottom) = top_bottom(first, second);
    let diagonal = g.one(Primitive::FSlash)?;
    let gap = 0.25 * diagonal.height();
    (near(diagonal.top(), top.right(), gap) && near(diagonal.bottom(), bottom.left(), gap))
        .then(|| g.sized('Z', 'z'))
}
