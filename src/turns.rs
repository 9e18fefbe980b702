//! Serpentine turn-unit generation
//!
//! One turn unit is a 180° U-turn of the resistor channel: two horizontal
//! entry walls (one per wall chain of the outline), and a pair of concentric
//! arcs, outer radius `curve_rad + channel_width/2` and inner radius
//! `curve_rad - channel_width/2`, whose radius difference is exactly
//! `channel_width`, which is what keeps the channel width constant through
//! the turn. Each unit reverses the horizontal travel direction and advances
//! the path by `2 * curve_rad` along the stage axis with no net lateral
//! drift; successive units alternate bulge side to form the meander.

use crate::error::LayoutResult;
use crate::geometry::{Arc, Point, Segment};

/// Cross-section dimensions shared by every turn of one resistor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelDims {
    /// Channel bore width
    pub channel_width: f64,
    /// Centerline turn radius
    pub curve_rad: f64,
    /// Lateral half-extent of the meander is `resistor_width / 2`
    pub resistor_width: f64,
}

/// One U-turn of the meander, split per wall chain of the outline.
///
/// `left_*` belongs to the chain that starts on the left wall of the lead-in
/// channel (traversed bottom to top), `right_*` to the opposite chain. The
/// caller threads `exit` into the next turn's origin and `exit_edge` into its
/// entry-wall x-coordinates.
#[derive(Debug, Clone, Copy)]
pub struct TurnUnit {
    pub left_wall: Segment,
    pub left_arc: Arc,
    pub right_wall: Segment,
    pub right_arc: Arc,
    /// Origin for the next turn: `(origin.x, origin.y + 2 * curve_rad)`
    pub exit: Point,
    /// x-coordinate where the next turn's entry walls begin
    pub exit_edge: f64,
}

/// Generate one U-turn anchored at `origin`.
///
/// The entry walls run from `left_entry_x` / `right_entry_x` to the bulge
/// side at `origin.x ± resistor_width / 2`; interior turns span the full
/// `resistor_width`, while the first and last turns of a resistor are clipped
/// by the lead-in and lead-out channel (the caller passes the clipped entry
/// x-coordinates).
///
/// # Errors
///
/// `DegenerateGeometry` when the arcs collapse, which only happens for
/// `curve_rad <= channel_width / 2`; the resistor builder rejects that
/// combination up front.
pub fn turn(
    origin: Point,
    left_entry_x: f64,
    right_entry_x: f64,
    dims: &ChannelDims,
    bulge_right: bool,
) -> LayoutResult<TurnUnit> {
    let w = dims.channel_width;
    let r = dims.curve_rad;
    let half_span = dims.resistor_width / 2.0;
    let y = origin.y;

    // Signed lateral direction of the bulge and the wall x it turns at.
    let sign = if bulge_right { 1.0 } else { -1.0 };
    let side = origin.x + sign * half_span;

    // Concentric U-turn arcs: both centered at (side, y + curve_rad + w/2).
    let outer = Arc::new(
        Point::new(side, y),
        Point::new(side + sign * (r + w / 2.0), y + r + w / 2.0),
        Point::new(side, y + 2.0 * r + w),
    )?;
    let inner = Arc::new(
        Point::new(side, y + w),
        Point::new(side + sign * (r - w / 2.0), y + r + w / 2.0),
        Point::new(side, y + 2.0 * r),
    )?;

    // The upstream-facing wall continues the inner arc's chain, the
    // downstream-facing wall the outer arc's. Which outline chain each pair
    // lands on flips with the bulge side.
    let (left_wall, left_arc, right_wall, right_arc) = if bulge_right {
        (
            Segment::new(Point::new(left_entry_x, y + w), Point::new(side, y + w)),
            inner,
            Segment::new(Point::new(right_entry_x, y), Point::new(side, y)),
            outer,
        )
    } else {
        (
            Segment::new(Point::new(left_entry_x, y), Point::new(side, y)),
            outer,
            Segment::new(Point::new(right_entry_x, y + w), Point::new(side, y + w)),
            inner,
        )
    };

    Ok(TurnUnit {
        left_wall,
        left_arc,
        right_wall,
        right_arc,
        exit: Point::new(origin.x, y + 2.0 * r),
        exit_edge: side,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn dims() -> ChannelDims {
        ChannelDims {
            channel_width: 0.02,
            curve_rad: 0.02,
            resistor_width: 0.3,
        }
    }

    #[test]
    fn turn_advances_two_radii_with_no_drift() {
        let d = dims();
        let origin = Point::new(0.0, 0.17);
        let unit = turn(origin, -0.01, 0.01, &d, true).unwrap();
        assert_relative_eq!(unit.exit.x, origin.x, epsilon = 1e-12);
        assert_relative_eq!(
            unit.exit.y,
            origin.y + 2.0 * d.curve_rad,
            epsilon = 1e-12
        );
    }

    #[test]
    fn arc_radii_differ_by_channel_width() {
        let d = dims();
        let unit = turn(Point::new(0.0, 0.0), -0.01, 0.01, &d, true).unwrap();
        // Right bulge puts the outer arc on the right chain.
        let outer = unit.right_arc.radius();
        let inner = unit.left_arc.radius();
        assert_relative_eq!(outer - inner, d.channel_width, epsilon = 1e-12);
        assert_relative_eq!(outer, d.curve_rad + d.channel_width / 2.0, epsilon = 1e-12);
        assert_relative_eq!(inner, d.curve_rad - d.channel_width / 2.0, epsilon = 1e-12);
    }

    #[test]
    fn arcs_are_concentric() {
        let d = dims();
        let unit = turn(Point::new(0.0, 0.0), -0.01, 0.01, &d, true).unwrap();
        let c_outer = unit.right_arc.center();
        let c_inner = unit.left_arc.center();
        assert_relative_eq!(c_outer.x, c_inner.x, epsilon = 1e-9);
        assert_relative_eq!(c_outer.y, c_inner.y, epsilon = 1e-9);
        // Centered laterally at the bulge-side wall.
        assert_relative_eq!(c_outer.x, d.resistor_width / 2.0, epsilon = 1e-9);
        assert_relative_eq!(
            c_outer.y,
            d.curve_rad + d.channel_width / 2.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn left_bulge_mirrors_the_turn() {
        let d = dims();
        let right = turn(Point::new(0.0, 0.0), -0.15, 0.15, &d, true).unwrap();
        let left = turn(Point::new(0.0, 0.0), 0.15, -0.15, &d, false).unwrap();
        assert_relative_eq!(right.exit_edge, -left.exit_edge, epsilon = 1e-12);
        assert_relative_eq!(
            right.right_arc.mid.x,
            -left.left_arc.mid.x,
            epsilon = 1e-12
        );
    }

    #[test]
    fn tight_radius_degenerates() {
        let d = ChannelDims {
            channel_width: 0.02,
            curve_rad: 0.01, // == channel_width / 2, inner arc collapses
            resistor_width: 0.3,
        };
        assert!(turn(Point::new(0.0, 0.0), -0.01, 0.01, &d, true).is_err());
    }
}
