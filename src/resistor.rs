//! Serpentine resistor channel outlines
//!
//! A resistor channel is a straight lead-in run, `curve_num` meander units
//! (two alternating U-turns each), and a straight lead-out run. The extra
//! path length raises the fluidic resistance of the branch; the outline is a
//! single closed profile.
//!
//! The outline is assembled from two wall chains walked bottom to top: the
//! chain starting on the left wall of the lead-in and the chain starting on
//! the right wall. The closed loop is the left chain, a top end cap, the
//! right chain reversed, and a bottom end cap. Walls shared by the lead-in /
//! lead-out and the first / last traverse are emitted once, so the loop never
//! overlaps itself.

use crate::error::{require_non_negative, require_positive, LayoutError, LayoutResult};
use crate::geometry::{Point, Profile, ProfileElement, Segment, TOLERANCE};
use crate::turns::{turn, ChannelDims};

/// The full outline of one serpentine resistor channel
#[derive(Debug, Clone, PartialEq)]
pub struct ResistorPath {
    /// Closed outline of the channel walls
    pub profile: Profile,
    /// Anchor where flow enters (bottom centerline)
    pub entry: Point,
    /// Anchor where flow exits: `(entry.x, entry.y + height)`
    pub exit: Point,
    /// Straight run length above and below the meander
    pub straight_len: f64,
}

/// Validate the cross-section dimensions shared by every resistor of a network.
pub(crate) fn validate_dims(dims: &ChannelDims, curve_num: usize) -> LayoutResult<()> {
    require_positive("channel_width", dims.channel_width)?;
    require_positive("resistor_width", dims.resistor_width)?;
    require_non_negative("curve_rad", dims.curve_rad)?;
    if dims.resistor_width <= dims.channel_width {
        return Err(LayoutError::invalid_parameter(
            "resistor_width",
            dims.resistor_width,
            format!(
                "must exceed channel_width ({})",
                dims.channel_width
            ),
        ));
    }
    if curve_num > 0 && dims.curve_rad <= dims.channel_width / 2.0 {
        return Err(LayoutError::invalid_parameter(
            "curve_rad",
            dims.curve_rad,
            format!(
                "must exceed channel_width / 2 ({}) or the inner turn arc collapses",
                dims.channel_width / 2.0
            ),
        ));
    }
    Ok(())
}

/// Build one resistor outline from `origin` to `origin + (0, height)`.
///
/// `straight_len = (height - 4 * curve_rad * curve_num) / 2`; the meander
/// consumes `4 * curve_rad` of vertical travel per unit and the remainder is
/// split between the lead-in and lead-out runs.
///
/// # Errors
///
/// `InvalidGeometryParameters` when any dimension is out of domain or when
/// `height < 4 * curve_rad * curve_num` (negative straight run).
pub fn build(
    origin: Point,
    dims: &ChannelDims,
    height: f64,
    curve_num: usize,
) -> LayoutResult<ResistorPath> {
    validate_dims(dims, curve_num)?;
    require_positive("height", height)?;

    let meander_height = 4.0 * dims.curve_rad * curve_num as f64;
    let straight_len = (height - meander_height) / 2.0;
    if straight_len < 0.0 {
        return Err(LayoutError::invalid_parameter(
            "height",
            height,
            format!(
                "must be at least 4 * curve_rad * curve_num = {meander_height} \
                 or the straight run length becomes negative"
            ),
        ));
    }

    let exit = Point::new(origin.x, origin.y + height);

    // No turns: the resistor degenerates to a single straight run.
    if curve_num == 0 {
        let profile = Profile::rectangle(
            Point::new(origin.x - dims.channel_width / 2.0, origin.y),
            dims.channel_width,
            height,
        )?;
        return Ok(ResistorPath {
            profile,
            entry: origin,
            exit,
            straight_len,
        });
    }

    let w = dims.channel_width;
    let half_w = w / 2.0;
    let half_span = dims.resistor_width / 2.0;
    let x0 = origin.x;
    let y0 = origin.y;
    let y_meander = y0 + straight_len;
    let y_end = y_meander + meander_height;

    let mut left: Vec<ProfileElement> = Vec::with_capacity(4 * curve_num + 3);
    let mut right: Vec<ProfileElement> = Vec::with_capacity(4 * curve_num + 3);

    // Lead-in: the left wall runs all the way to the first traverse's far
    // wall level (the channel opening interrupts the right wall earlier).
    push_wall(
        &mut left,
        Point::new(x0 - half_w, y0),
        Point::new(x0 - half_w, y_meander + w),
    );
    push_wall(
        &mut right,
        Point::new(x0 + half_w, y0),
        Point::new(x0 + half_w, y_meander),
    );

    // Meander: 2 * curve_num U-turns, alternating bulge starting right.
    let mut cursor = Point::new(x0, y_meander);
    let mut left_entry = x0 - half_w;
    let mut right_entry = x0 + half_w;
    for k in 0..2 * curve_num {
        let unit = turn(cursor, left_entry, right_entry, dims, k % 2 == 0)?;
        left.push(unit.left_wall.into());
        left.push(unit.left_arc.into());
        right.push(unit.right_wall.into());
        right.push(unit.right_arc.into());
        cursor = unit.exit;
        left_entry = unit.exit_edge;
        right_entry = unit.exit_edge;
    }
    debug_assert!((cursor.y - y_end).abs() <= TOLERANCE);

    // Lead-out. The final traverse comes back from the left, so both chains
    // close toward the exit channel; with a zero-length lead-out the outline
    // caps at the final traverse instead.
    if straight_len > TOLERANCE {
        push_wall(
            &mut left,
            Point::new(x0 - half_span, y_end + w),
            Point::new(x0 - half_w, y_end + w),
        );
        push_wall(
            &mut left,
            Point::new(x0 - half_w, y_end + w),
            Point::new(x0 - half_w, y0 + height),
        );
        push_wall(
            &mut right,
            Point::new(x0 - half_span, y_end),
            Point::new(x0 + half_w, y_end),
        );
        push_wall(
            &mut right,
            Point::new(x0 + half_w, y_end),
            Point::new(x0 + half_w, y0 + height),
        );
    } else {
        push_wall(
            &mut left,
            Point::new(x0 - half_span, y_end + w),
            Point::new(x0 + half_w, y_end + w),
        );
        push_wall(
            &mut right,
            Point::new(x0 - half_span, y_end),
            Point::new(x0 + half_w, y_end),
        );
    }

    // Close the loop: left chain up, top cap, right chain back down, bottom cap.
    let top_start = left[left.len() - 1].end();
    let top_end = right[right.len() - 1].end();
    let mut elements = left;
    push_wall(&mut elements, top_start, top_end);
    elements.extend(right.iter().rev().map(ProfileElement::reversed));
    push_wall(
        &mut elements,
        Point::new(x0 + half_w, y0),
        Point::new(x0 - half_w, y0),
    );

    let profile = Profile::closed(elements)?;
    Ok(ResistorPath {
        profile,
        entry: origin,
        exit,
        straight_len,
    })
}

/// Append a straight wall, skipping edges shorter than the tolerance.
fn push_wall(chain: &mut Vec<ProfileElement>, start: Point, end: Point) {
    if (end - start).norm() > TOLERANCE {
        chain.push(Segment::new(start, end).into());
    }
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
    fn straight_run_splits_remaining_height() {
        let path = build(Point::new(0.0, 0.0), &dims(), 0.5, 2).unwrap();
        assert_relative_eq!(path.straight_len, 0.17, epsilon = 1e-12);
    }

    #[test]
    fn outline_is_closed() {
        let path = build(Point::new(0.0, 0.0), &dims(), 0.5, 2).unwrap();
        assert!(path.profile.is_closed());
    }

    #[test]
    fn anchors_are_vertically_separated_by_height() {
        let origin = Point::new(1.25, -0.75);
        let path = build(origin, &dims(), 0.5, 3).unwrap();
        assert_relative_eq!(path.exit.x, origin.x, epsilon = 1e-12);
        assert_relative_eq!(path.exit.y - path.entry.y, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn no_turns_degenerates_to_a_rectangle() {
        let path = build(Point::new(0.0, 0.0), &dims(), 0.5, 0).unwrap();
        assert_eq!(path.profile.len(), 4);
        assert!(path.profile.is_closed());
        assert_relative_eq!(path.straight_len, 0.25, epsilon = 1e-12);
    }

    #[test]
    fn negative_straight_run_is_rejected() {
        // 4 * 0.05 * 2 = 0.4 > 0.1
        let d = ChannelDims {
            channel_width: 0.02,
            curve_rad: 0.05,
            resistor_width: 0.3,
        };
        let err = build(Point::new(0.0, 0.0), &d, 0.1, 2);
        assert!(matches!(
            err,
            Err(LayoutError::InvalidGeometryParameters { name: "height", .. })
        ));
    }

    #[test]
    fn exact_fit_height_is_accepted() {
        // height == 4 * curve_rad * curve_num: zero-length straight runs
        let path = build(Point::new(0.0, 0.0), &dims(), 0.16, 2).unwrap();
        assert_relative_eq!(path.straight_len, 0.0, epsilon = 1e-12);
        assert!(path.profile.is_closed());
    }

    #[test]
    fn narrow_resistor_is_rejected() {
        let d = ChannelDims {
            channel_width: 0.3,
            curve_rad: 0.2,
            resistor_width: 0.3,
        };
        assert!(matches!(
            build(Point::new(0.0, 0.0), &d, 2.0, 1),
            Err(LayoutError::InvalidGeometryParameters {
                name: "resistor_width",
                ..
            })
        ));
    }

    #[test]
    fn tight_turn_radius_is_rejected_up_front() {
        let d = ChannelDims {
            channel_width: 0.02,
            curve_rad: 0.01,
            resistor_width: 0.3,
        };
        assert!(matches!(
            build(Point::new(0.0, 0.0), &d, 0.5, 2),
            Err(LayoutError::InvalidGeometryParameters {
                name: "curve_rad",
                ..
            })
        ));
    }

    #[test]
    fn meander_walls_stay_inside_the_footprint() {
        let d = dims();
        let path = build(Point::new(0.0, 0.0), &d, 0.5, 2).unwrap();
        let reach = d.resistor_width / 2.0 + d.curve_rad + d.channel_width / 2.0;
        for element in path.profile.elements() {
            for p in [element.start(), element.end()] {
                assert!(p.x.abs() <= reach + 1e-12, "x={} outside footprint", p.x);
                assert!(p.y >= -1e-12 && p.y <= 0.5 + d.channel_width + 1e-12);
            }
        }
    }

    #[test]
    fn element_count_grows_with_turns() {
        // Per unit: 2 U-turns, each contributing a wall and an arc per chain.
        let one = build(Point::new(0.0, 0.0), &dims(), 0.5, 1).unwrap();
        let two = build(Point::new(0.0, 0.0), &dims(), 0.5, 2).unwrap();
        assert_eq!(two.profile.len() - one.profile.len(), 8);
    }
}
