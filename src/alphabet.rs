//! Symbol alphabet and candidate resolution.
//!
//! Each primitive and each segment count (1 to 4) has a fixed bit vector
//! over the 95-symbol alphabet: bit `i` is set when symbol `i` can contain
//! that primitive, or can be drawn with that many segments. Intersecting
//! the vectors for an observed segment list prunes the alphabet to the
//! symbols worth verifying.

use std::fmt;

use crate::segment::Primitive;

/// The recognizable symbols, in resolution order.
pub const ALPHABET: &str =
    "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz !\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Number of symbols in [`ALPHABET`].
pub const ALPHABET_LEN: usize = 95;

/// Candidate string reported when the segment count cannot be resolved.
pub const UNRESOLVED: &str = "unknown";

/// Largest segment count a symbol can be drawn with.
pub const MAX_SEGMENTS: usize = 4;

const HLINE: CandidateSet = CandidateSet::from_bits(
    "01101101001000111111010000000100000100001100000000000001000001100100000011010000010001010100000",
);
const VLINE: CandidateSet = CandidateSet::from_bits(
    "01001100010101111111111101010100001011010001101111011101000000111010010001000000000001010000100",
);
const FSLASH: CandidateSet = CandidateSet::from_bits(
    "01001001001000000000101000000001111100000000001000000000011111000101000010000100101000001000000",
);
const BSLASH: CandidateSet = CandidateSet::from_bits(
    "00000000001000000000101100110001111000000000001000000000011110000000000010000000101000101010000",
);
const BACKWARD_CURVE: CandidateSet = CandidateSet::from_bits(
    "00110100000101000000000001011000000001000000000000010010000000000010000100100001000100000000000",
);
const CIRCLE: CandidateSet = CandidateSet::from_bits(
    "10000010100000000000000010100000000000000000000000100000000000000001000000000000000000000000000",
);
const FORWARD_CURVE: CandidateSet = CandidateSet::from_bits(
    "00000010010010001000000000001000000010111000000000001010000000000010001000000000000000000000000",
);
const DOT: CandidateSet = CandidateSet::from_bits(
    "00000000000000000000000000000000000000000000110000000000000000010000000000001011000100000000000",
);
const U_SHAPE: CandidateSet = CandidateSet::from_bits(
    "00000000000000000001000000000010000000000000010000000000100000000000000000000000000000000000000",
);

const BY_COUNT: [CandidateSet; MAX_SEGMENTS] = [
    CandidateSet::from_bits(
        "11000000000010000000000010000010000000100101000101100100100000000000011100111100000000100110100",
    ),
    CandidateSet::from_bits(
        "00110011110001000000010001101101010011011000110010011011010110011000000001000011111100001000000",
    ),
    CandidateSet::from_bits(
        "01001100001100011111100100010000001100000000001000000000000001100011000010000000000001010000000",
    ),
    CandidateSet::from_bits(
        "00000000000000100000001000000000100000000000000000000000001000000100000000000000000000000000000",
    ),
];

/// A set of alphabet symbols, one bit per symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CandidateSet(u128);

impl CandidateSet {
    pub const EMPTY: CandidateSet = CandidateSet(0);
    pub const FULL: CandidateSet = CandidateSet((1u128 << ALPHABET_LEN) - 1);

    /// Parse a bit string whose first character is bit 0.
    ///
    /// Panics at compile time if the string is malformed.
    pub const fn from_bits(bits: &str) -> Self {
        let bytes = bits.as_bytes();
        assert!(bytes.len() == ALPHABET_LEN, "bit string must cover the alphabet");
        let mut value = 0u128;
        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                b'1' => value |= 1u128 << i,
                b'0' => {}
                _ => panic!("bit string may only contain 0 and 1"),
            }
            i += 1;
        }
        CandidateSet(value)
    }

    /// Symbols that can contain the given primitive.
    pub fn for_primitive(primitive: Primitive) -> Self {
        match primitive {
            Primitive::HLine => HLINE,
            Primitive::VLine => VLINE,
            Primitive::FSlash => FSLASH,
            Primitive::BSlash => BSLASH,
            Primitive::BackwardCurve => BACKWARD_CURVE,
            Primitive::ForwardCurve => FORWARD_CURVE,
            Primitive::Circle => CIRCLE,
            Primitive::Dot => DOT,
            Primitive::UShape => U_SHAPE,
            Primitive::Unknown => CandidateSet::EMPTY,
        }
    }

    /// Symbols drawn with exactly `count` segments, or `None` outside 1..=4.
    pub fn for_count(count: usize) -> Option<Self> {
        count
            .checked_sub(1)
            .and_then(|i| BY_COUNT.get(i))
            .copied()
    }

    pub fn contains(self, symbol: char) -> bool {
        index_of(symbol).is_some_and(|i| self.0 & (1u128 << i) != 0)
    }

    pub fn intersect(self, other: CandidateSet) -> CandidateSet {
        CandidateSet(self.0 & other.0)
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Member symbols in alphabet order.
    pub fn symbols(self) -> impl Iterator<Item = char> {
        ALPHABET
            .chars()
            .enumerate()
            .filter(move |(i, _)| self.0 & (1u128 << i) != 0)
            .map(|(_, c)| c)
    }
}

impl fmt::Display for CandidateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.symbols().try_for_each(|c| write!(f, "{c}"))
    }
}

/// Outcome of candidate resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Candidates {
    Resolved(CandidateSet),
    /// Segment count outside 1..=4.
    Unresolved(usize),
}

impl Candidates {
    /// Resolved symbols, empty when unresolved.
    pub fn set(self) -> CandidateSet {
        match self {
            Candidates::Resolved(set) => set,
            Candidates::Unresolved(_) => CandidateSet::EMPTY,
        }
    }
}

impl fmt::Display for Candidates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Candidates::Resolved(set) => write!(f, "{set}"),
            Candidates::Unresolved(_) => f.write_str(UNRESOLVED),
        }
    }
}

/// Intersect the per-primitive and per-count vectors for a segment list.
///
/// Only the multiset of primitives and the count matter; order does not.
pub fn resolve(primitives: &[Primitive]) -> Candidates {
    let Some(by_count) = CandidateSet::for_count(primitives.len()) else {
        return Candidates::Unresolved(primitives.len());
    };
    let set = primitives
        .iter()
        .fold(CandidateSet::FULL, |acc, &p| {
            acc.intersect(CandidateSet::for_primitive(p))
        })
        .intersect(by_count);
    Candidates::Resolved(set)
}

/// Position of `symbol` in [`ALPHABET`].
pub fn index_of(symbol: char) -> Option<usize> {
    ALPHABET.chars().position(|c| c == symbol)
}
