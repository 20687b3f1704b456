//! Lowercase letters with a shape of their own.
//!
//! No verifier exists yet for e, f, g, h, j, l, m, n or r.

use super::digits::loop_on_stem;
use super::{near, Glyph};
use crate::geom::{between, distance};
use crate::segment::Primitive;

/// Bowl against the full height of a short stem.
pub(super) fn a(g: &Glyph) -> Option<char> {
    g.count(2)?;
    let bowl = g.one(Primitive::ForwardCurve)?;
    let stem = g.one(Primitive::VLine)?;
    let gap = 0.2 * stem.height();
    (near(stem.top(), bowl.top(), gap) && near(stem.bottom(), bowl.bottom(), gap)).then_some('a')
}

/// Bowl on the lower half of a tall stem, opening left.
pub(super) fn b(g: &Glyph) -> Option<char> {
    g.count(2)?;
    let stem = g.one(Primitive::VLine)?;
    let bowl = g.one(Primitive::BackwardCurve)?;
    let gap = 0.2 * stem.height();
    (near(stem.mid(), bowl.top(), gap) && near(stem.bottom(), bowl.bottom(), gap)).then_some('b')
}

/// Bowl on the lower half of a tall stem, opening right.
pub(super) fn d(g: &Glyph) -> Option<char> {
    g.count(2)?;
    let bowl = g.one(Primitive::ForwardCurve)?;
    let stem = g.one(Primitive::VLine)?;
    let gap = 0.2 * stem.height();
    (near(stem.mid(), bowl.top(), gap) && near(stem.bottom(), bowl.bottom(), gap)).then_some('d')
}

/// Dot a little above the stem, roughly in line with it.
pub(super) fn i(g: &Glyph) -> Option<char> {
    g.count(2)?;
    let stem = g.one(Primitive::VLine)?;
    let dot = g.one(Primitive::Dot)?;
    let height = stem.height();
    (between(stem.top().y - dot.bottom().y, 0.0, 0.5 * height)
        && (stem.top().x - dot.bottom().x).abs() < 0.1 * height)
        .then_some('i')
}

/// The `9` shape with its stem starting anywhere below the small-letter
/// line.
pub(super) fn q(g: &Glyph) -> Option<char> {
    let surface = g.context().surface_height;
    let min_top = g.config().small_letter_fraction * surface;
    loop_on_stem(g, min_top, f64::INFINITY).then_some('q')
}

/// Cross bar a fifth to a half of the way down the stem.
pub(super) fn t(g: &Glyph) -> Option<char> {
    g.count(2)?;
    let stem = g.one(Primitive::VLine)?;
    let bar = g.one(Primitive::HLine)?;
    let height = stem.height();
    between(distance(stem.top(), bar.mid()), 0.2 * height, 0.5 * height).then_some('t')
}

/// Short diagonal ending on the middle of the long one.
pub(super) fn y(g: &Glyph) -> Option<char> {
    g.count(2)?;
    let short = g.one(Primitive::BSlash)?;
    let long = g.one(Primitive::FSlash)?;
    near(short.bottom(), long.mid(), 0.25 * long.height()).then_some('y')
}
