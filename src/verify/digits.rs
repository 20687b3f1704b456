//! Digits. 0, 2, 6 and 8 have no verifier.

use super::{near, top_bottom, Glyph};
use crate::segment::Primitive;

/// A lone vertical stroke.
pub(super) fn one(g: &Glyph) -> Option<char> {
    g.only(Primitive::VLine).map(|_| '1')
}

/// Two backward curves stacked so the upper one's foot meets the lower
/// one's head.
pub(super) fn three(g: &Glyph) -> Option<char> {
    g.count(2)?;
    let (a, b) = g.two(Primitive::BackwardCurve)?;
    let (upper, lower) = top_bottom(a, b);
    let height = (lower.bottom().y - upper.top().y).abs();
    near(upper.bottom(), lower.top(), 0.25 * height).then_some('3')
}

/// Slash into a bar, crossed by an upright near the bar's middle.
pub(super) fn four(g: &Glyph) -> Option<char> {
    g.count(3)?;
    let bar = g.one(Primitive::HLine)?;
    let upright = g.one(Primitive::VLine)?;
    let slash = g.one(Primitive::FSlash)?;
    let gap = 0.25 * upright.height();
    (near(bar.left(), slash.bottom(), gap) && near(upright.mid(), bar.mid(), gap)).then_some('4')
}

/// Flag, upright, and a bowl hanging from the upright's foot.
pub(super) fn five(g: &Glyph) -> Option<char> {
    g.count(3)?;
    let flag = g.one(Primitive::HLine)?;
    let upright = g.one(Primitive::VLine)?;
    let bowl = g.one(Primitive::BackwardCurve)?;
    let height = (bowl.bottom().y - flag.left().y).abs();
    let gap = 0.25 * height;
    (near(flag.left(), upright.top(), gap) && near(upright.bottom(), bowl.top(), gap))
        .then_some('5')
}

pub(super) fn seven(g: &Glyph) -> Option<char> {
    g.count(2)?;
    let bar = g.one(Primitive::HLine)?;
    let slash = g.one(Primitive::FSlash)?;
    near(bar.right(), slash.top(), 0.25 * slash.height()).then_some('7')
}

/// Loop on the left of an upright, with the upright's top in the upper
/// part of the surface.
pub(super) fn nine(g: &Glyph) -> Option<char> {
    let max_top = g.config().small_letter_fraction * g.context().surface_height;
    loop_on_stem(g, -1.0, max_top).then_some('9')
}

/// Shared by `9` and `q`: a forward curve whose ends meet the top and the
/// middle of an upright, the upright starting between `min_top` and
/// `max_top`.
pub(super) fn loop_on_stem(g: &Glyph, min_top: f64, max_top: f64) -> bool {
    if g.count(2).is_none() {
        return false;
    }
    let (Some(stem), Some(bowl)) = (g.one(Primitive::VLine), g.one(Primitive::ForwardCurve)) else {
        return false;
    };
    let gap = 0.25 * stem.height();
    let top = stem.top().y;
    near(stem.top(), bowl.top(), gap)
        && near(stem.mid(), bowl.bottom(), gap)
        && min_top < top
        && top < max_top
}
