//! Punctuation and symbols.

use kurbo::Point;

use super::{caret_gap, left_right, near, top_bottom, Glyph};
use crate::geom::{between, distance};
use crate::segment::{Primitive, Segment};

/// Dot a little below the stem, roughly in line with it.
pub(super) fn exclamation(g: &Glyph) -> Option<char> {
    g.count(2)?;
    let stem = g.one(Primitive::VLine)?;
    let dot = g.one(Primitive::Dot)?;
    let height = stem.height();
    (between(dot.top().y - stem.bottom().y, 0.0, 0.5 * height)
        && (dot.top().x - stem.bottom().x).abs() < 0.1 * height)
        .then_some('!')
}

/// Two bars crossed by two slashes at their third points.
pub(super) fn hash(g: &Glyph) -> Option<char> {
    g.count(4)?;
    let (h1, h2) = g.two(Primitive::HLine)?;
    let (f1, f2) = g.two(Primitive::FSlash)?;
    let (top, bottom) = top_bottom(h1, h2);
    let (left, right) = left_right(f1, f2);

    let top_marks = thirds(top.left(), top.right());
    let bottom_marks = thirds(bottom.left(), bottom.right());
    let left_marks = thirds(left.top(), left.bottom());
    let right_marks = thirds(right.top(), right.bottom());

    let gap = [top_marks, bottom_marks, left_marks, right_marks]
        .iter()
        .map(|(a, b)| distance(*a, *b))
        .fold(f64::INFINITY, f64::min);

    (near(top_marks.0, left_marks.0, gap)
        && near(top_marks.1, right_marks.0, gap)
        && near(bottom_marks.0, left_marks.1, gap)
        && near(bottom_marks.1, right_marks.1, gap))
    .then_some('#')
}

/// Points one and two thirds of the way from `a` to `b`.
fn thirds(a: Point, b: Point) -> (Point, Point) {
    (a.lerp(b, 1.0 / 3.0), a.lerp(b, 2.0 / 3.0))
}

/// Slash with a loop near each half.
pub(super) fn percent(g: &Glyph) -> Option<char> {
    g.count(3)?;
    let (c1, c2) = g.two(Primitive::Circle)?;
    let (upper, lower) = top_bottom(c1, c2);
    let slash = g.one(Primitive::FSlash)?;
    let reach = 0.5 * slash.height();
    (near(slash.mid(), upper.centroid(), reach) && near(slash.mid(), lower.centroid(), reach))
        .then_some('%')
}

pub(super) fn open_paren(g: &Glyph) -> Option<char> {
    g.only(Primitive::ForwardCurve).map(|_| '(')
}

/// A backward curve: `,` when written low on the surface.
pub(super) fn close_paren_or_comma(g: &Glyph) -> Option<char> {
    let curve = g.only(Primitive::BackwardCurve)?;
    Some(if g.is_low(curve.centroid().y) { ',' } else { ')' })
}

/// Bar and upright crossing near both their middles.
pub(super) fn plus(g: &Glyph) -> Option<char> {
    g.count(2)?;
    let bar = g.one(Primitive::HLine)?;
    let upright = g.one(Primitive::VLine)?;
    crosses(bar, upright).then_some('+')
}

/// The bar spans the upright's x and the upright spans the bar's y, with
/// the two middles close together.
fn crosses(bar: &Segment, upright: &Segment) -> bool {
    let straddle = bar.left().x < upright.mid().x
        && upright.mid().x < bar.right().x
        && upright.top().y < bar.mid().y
        && bar.mid().y < upright.bottom().y;
    let top_gap = distance(upright.top(), bar.top());
    let bottom_gap = distance(upright.bottom(), bar.bottom());
    let mid_gap = distance(upright.mid(), bar.mid());
    straddle && mid_gap < 0.25 * top_gap.max(bottom_gap)
}

/// A bar: `_` when written low on the surface.
pub(super) fn dash_or_underscore(g: &Glyph) -> Option<char> {
    let bar = g.only(Primitive::HLine)?;
    Some(if g.is_low(bar.centroid().y) { '_' } else { '-' })
}

pub(super) fn period(g: &Glyph) -> Option<char> {
    g.only(Primitive::Dot).map(|_| '.')
}

pub(super) fn slash(g: &Glyph) -> Option<char> {
    g.only(Primitive::FSlash).map(|_| '/')
}

/// Two dots stacked in line.
pub(super) fn colon(g: &Glyph) -> Option<char> {
    g.count(2)?;
    let (d1, d2) = g.two(Primitive::Dot)?;
    let (upper, lower) = top_bottom(d1, d2);
    ((upper.centroid().x - lower.centroid().x).abs() < g.alignment()).then_some(':')
}

/// Dot above the head of a small backward curve.
pub(super) fn semicolon(g: &Glyph) -> Option<char> {
    g.count(2)?;
    let dot = g.one(Primitive::Dot)?;
    let tail = g.one(Primitive::BackwardCurve)?;
    ((dot.centroid().x - tail.top().x).abs() < g.alignment()).then_some(';')
}

/// Two diagonals meeting at a point: the upper one decides the direction.
pub(super) fn angle_bracket(g: &Glyph) -> Option<char> {
    g.count(2)?;
    let bslash = g.one(Primitive::BSlash)?;
    let fslash = g.one(Primitive::FSlash)?;
    let (upper, lower) = top_bottom(bslash, fslash);
    let height = lower.bottom().y - upper.top().y;
    if !near(upper.bottom(), lower.top(), 0.1 * height) {
        return None;
    }
    if upper.primitive == Primitive::BSlash {
        Some('>')
    } else {
        Some('<')
    }
}

/// Two bars stacked in line, compared by their sampled centres.
pub(super) fn equals(g: &Glyph) -> Option<char> {
    g.count(2)?;
    let (b1, b2) = g.two(Primitive::HLine)?;
    let (upper, lower) = top_bottom(b1, b2);
    ((upper.centroid().x - lower.centroid().x).abs() < g.alignment()).then_some('=')
}

pub(super) fn backslash(g: &Glyph) -> Option<char> {
    g.only(Primitive::BSlash).map(|_| '\\')
}

pub(super) fn caret(g: &Glyph) -> Option<char> {
    g.count(2)?;
    let segments = g.segments();
    caret_gap(&segments[0], &segments[1]).then_some('^')
}

pub(super) fn bar(g: &Glyph) -> Option<char> {
    g.only(Primitive::VLine).map(|_| '|')
}
