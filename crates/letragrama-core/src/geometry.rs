//! Connector segments and the non-crossing predicate.
//!
//! On the king-move graph the only way two connectors can cross without
//! sharing an endpoint is the pair of diagonals of one unit square. The
//! orientation test below is therefore deliberately the simple strict form:
//! collinear overlap cannot occur between adjacent-cell segments, and
//! touching configurations are legal.

use crate::cell::Cell;
use std::fmt;

/// A connector between two consecutive letters of a word.
///
/// Equality is unordered: `Segment::new(a, b) == Segment::new(b, a)`.
#[derive(Clone, Copy, Debug, Eq)]
pub struct Segment {
    /// First endpoint.
    pub a: Cell,
    /// Second endpoint.
    pub b: Cell,
}

impl Segment {
    /// Create a segment between `a` and `b`.
    pub const fn new(a: Cell, b: Cell) -> Self {
        Self { a, b }
    }

    /// Returns `true` if the two segments have an endpoint in common,
    /// in either orientation.
    pub fn shares_endpoint(&self, other: &Segment) -> bool {
        self.a == other.a || self.a == other.b || self.b == other.a || self.b == other.b
    }

    /// Returns `true` if the endpoints are one king move apart.
    pub fn is_unit(&self) -> bool {
        self.a.is_adjacent(self.b)
    }

    /// Returns `true` if this segment properly crosses any of `others`.
    pub fn crosses_any<'a>(&self, others: impl IntoIterator<Item = &'a Segment>) -> bool {
        others.into_iter().any(|o| segments_intersect(self, o))
    }
}

impl PartialEq for Segment {
    fn eq(&self, other: &Self) -> bool {
        (self.a == other.a && self.b == other.b) || (self.a == other.b && self.b == other.a)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.a, self.b)
    }
}

/// Signed area of the triangle `(p, q, r)`, with x = row and y = col.
#[inline]
fn orient(p: Cell, q: Cell, r: Cell) -> i64 {
    let (px, py) = (p.row as i64, p.col as i64);
    let (qx, qy) = (q.row as i64, q.col as i64);
    let (rx, ry) = (r.row as i64, r.col as i64);
    (qx - px) * (ry - py) - (qy - py) * (rx - px)
}

/// Returns `true` iff the open interiors of `a` and `b` properly cross.
///
/// Segments sharing an endpoint never cross. Collinear and touching
/// configurations are not reported.
pub fn segments_intersect(a: &Segment, b: &Segment) -> bool {
    if a.shares_endpoint(b) {
        return false;
    }
    let (p1, p2) = (a.a, a.b);
    let (q1, q2) = (b.a, b.b);
    orient(p1, p2, q1) * orient(p1, p2, q2) < 0 && orient(q1, q2, p1) * orient(q1, q2, p2) < 0
}
