//! Planar geometry primitives for channel outlines
//!
//! Value types only: points, straight wall edges, three-point circular arcs,
//! and closed profiles built from them. The sole validation performed here is
//! rejecting degenerate constructions (collinear arc definitions and
//! discontinuous profiles); everything else is the builders' concern.
//!
//! Arcs are kept in three-point form (entry point, geometric midpoint, exit
//! point) because that is how the turns are naturally derived and what a
//! solid-modeling backend's arc constructor accepts; [`Arc::center`] and
//! [`Arc::radius`] convert to center/radius form for numerically robust
//! queries.

use crate::error::{LayoutError, LayoutResult};
use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};

/// A 2D point in the shared planar frame
pub type Point = Point2<f64>;

/// Geometric comparison tolerance (model units)
pub const TOLERANCE: f64 = 1e-9;

/// Relative collinearity threshold for three-point arcs (unitless)
const COLLINEARITY_EPS: f64 = 1e-12;

/// A straight channel-wall edge
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    /// Create a segment between two points (unchecked)
    #[must_use]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Segment length
    #[must_use]
    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }

    /// The same edge traversed in the opposite direction
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(self.end, self.start)
    }

    /// The segment translated by an offset
    #[must_use]
    pub fn translated(&self, offset: Vector2<f64>) -> Self {
        Self::new(self.start + offset, self.end + offset)
    }
}

/// A curved channel-wall edge defined by the standard three-point construction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arc {
    pub start: Point,
    pub mid: Point,
    pub end: Point,
}

impl Arc {
    /// Create a three-point arc, rejecting collinear definitions.
    ///
    /// # Errors
    ///
    /// `DegenerateGeometry` when the three points are collinear or
    /// coincident, judged relative to the chord lengths.
    pub fn new(start: Point, mid: Point, end: Point) -> LayoutResult<Self> {
        let a = mid - start;
        let b = end - start;
        let cross = a.x * b.y - a.y * b.x;
        // Scale-relative test so arcs stay valid at any unit scale:
        // |sin(angle)| below the threshold means collinear.
        let scale = a.norm() * b.norm();
        if scale == 0.0 || cross.abs() < COLLINEARITY_EPS * scale {
            return Err(LayoutError::degenerate(format!(
                "collinear three-point arc definition: ({:.6}, {:.6}) - ({:.6}, {:.6}) - ({:.6}, {:.6})",
                start.x, start.y, mid.x, mid.y, end.x, end.y
            )));
        }
        Ok(Self { start, mid, end })
    }

    /// Circumcenter of the three defining points.
    #[must_use]
    pub fn center(&self) -> Point {
        let a = self.start;
        let b = self.mid;
        let c = self.end;
        let d = 2.0 * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y));
        let a2 = a.coords.norm_squared();
        let b2 = b.coords.norm_squared();
        let c2 = c.coords.norm_squared();
        let ux = (a2 * (b.y - c.y) + b2 * (c.y - a.y) + c2 * (a.y - b.y)) / d;
        let uy = (a2 * (c.x - b.x) + b2 * (a.x - c.x) + c2 * (b.x - a.x)) / d;
        Point::new(ux, uy)
    }

    /// Circumradius of the three defining points.
    #[must_use]
    pub fn radius(&self) -> f64 {
        (self.start - self.center()).norm()
    }

    /// The same arc traversed in the opposite direction
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            start: self.end,
            mid: self.mid,
            end: self.start,
        }
    }

    /// The arc translated by an offset
    #[must_use]
    pub fn translated(&self, offset: Vector2<f64>) -> Self {
        Self {
            start: self.start + offset,
            mid: self.mid + offset,
            end: self.end + offset,
        }
    }
}

/// One edge of a channel-wall outline
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProfileElement {
    Segment(Segment),
    Arc(Arc),
}

impl ProfileElement {
    /// Start point of the edge
    #[must_use]
    pub fn start(&self) -> Point {
        match self {
            Self::Segment(s) => s.start,
            Self::Arc(a) => a.start,
        }
    }

    /// End point of the edge
    #[must_use]
    pub fn end(&self) -> Point {
        match self {
            Self::Segment(s) => s.end,
            Self::Arc(a) => a.end,
        }
    }

    /// The same edge traversed in the opposite direction
    #[must_use]
    pub fn reversed(&self) -> Self {
        match self {
            Self::Segment(s) => Self::Segment(s.reversed()),
            Self::Arc(a) => Self::Arc(a.reversed()),
        }
    }

    /// The edge translated by an offset
    #[must_use]
    pub fn translated(&self, offset: Vector2<f64>) -> Self {
        match self {
            Self::Segment(s) => Self::Segment(s.translated(offset)),
            Self::Arc(a) => Self::Arc(a.translated(offset)),
        }
    }
}

impl From<Segment> for ProfileElement {
    fn from(s: Segment) -> Self {
        Self::Segment(s)
    }
}

impl From<Arc> for ProfileElement {
    fn from(a: Arc) -> Self {
        Self::Arc(a)
    }
}

/// An ordered, closed sequence of wall edges bounding one channel outline.
///
/// This is exactly the unit that the external solid-modeling backend later
/// extrudes into a solid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    elements: Vec<ProfileElement>,
}

impl Profile {
    /// Build a closed profile, validating end-to-end continuity and closure.
    ///
    /// # Errors
    ///
    /// `DegenerateGeometry` when fewer than two edges are given, when
    /// consecutive edges do not share an endpoint within [`TOLERANCE`], or
    /// when the last edge does not return to the first edge's start.
    pub fn closed(elements: Vec<ProfileElement>) -> LayoutResult<Self> {
        if elements.len() < 2 {
            return Err(LayoutError::degenerate(format!(
                "a closed profile needs at least 2 edges, got {}",
                elements.len()
            )));
        }
        for (i, pair) in elements.windows(2).enumerate() {
            let gap = (pair[1].start() - pair[0].end()).norm();
            if gap > TOLERANCE {
                return Err(LayoutError::degenerate(format!(
                    "profile discontinuity of {gap:.3e} between edges {i} and {}",
                    i + 1
                )));
            }
        }
        let closure = (elements[0].start() - elements[elements.len() - 1].end()).norm();
        if closure > TOLERANCE {
            return Err(LayoutError::degenerate(format!(
                "profile is not closed: gap of {closure:.3e} between last and first edge"
            )));
        }
        Ok(Self { elements })
    }

    /// A `width × height` axis-aligned rectangle with `min` at the lower-left
    /// corner, as four segments.
    ///
    /// # Errors
    ///
    /// `DegenerateGeometry` when either side is not positive.
    pub fn rectangle(min: Point, width: f64, height: f64) -> LayoutResult<Self> {
        if width <= TOLERANCE || height <= TOLERANCE {
            return Err(LayoutError::degenerate(format!(
                "degenerate rectangle: {width:.3e} x {height:.3e}"
            )));
        }
        let a = min;
        let b = Point::new(min.x + width, min.y);
        let c = Point::new(min.x + width, min.y + height);
        let d = Point::new(min.x, min.y + height);
        Self::closed(vec![
            Segment::new(a, b).into(),
            Segment::new(b, c).into(),
            Segment::new(c, d).into(),
            Segment::new(d, a).into(),
        ])
    }

    /// The wall edges in traversal order
    #[must_use]
    pub fn elements(&self) -> &[ProfileElement] {
        &self.elements
    }

    /// Number of wall edges
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Whether the edge sequence is continuous and returns to its start
    #[must_use]
    pub fn is_closed(&self) -> bool {
        if self.elements.len() < 2 {
            return false;
        }
        let continuous = self
            .elements
            .windows(2)
            .all(|pair| (pair[1].start() - pair[0].end()).norm() <= TOLERANCE);
        let first = self.elements[0].start();
        let last = self.elements[self.elements.len() - 1].end();
        continuous && (first - last).norm() <= TOLERANCE
    }

    /// The profile translated by an offset
    #[must_use]
    pub fn translated(&self, offset: Vector2<f64>) -> Self {
        Self {
            elements: self
                .elements
                .iter()
                .map(|e| e.translated(offset))
                .collect(),
        }
    }
}
