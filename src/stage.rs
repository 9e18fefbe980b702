//! Ladder-stage row layout
//!
//! One stage of the ladder network is a connecting duct plus `unit_num`
//! identical resistor columns spaced `connect_width` apart, all sharing the
//! stage's entry y and advancing together to the exit y. The row is stored
//! as one prototype outline at the leftmost column plus a replication spec
//! (count and spacing) for the solid-modeling backend's pattern operation;
//! [`Stage::unit_outlines`] materializes every column explicitly for callers
//! that want the flat geometry, and both views are guaranteed identical.

use crate::error::{require_positive, LayoutError, LayoutResult};
use crate::geometry::{Point, Profile};
use crate::resistor::{self, ResistorPath};
use crate::turns::ChannelDims;
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Replication instruction for the backend's array/pattern operation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Replication {
    /// Number of copies, the prototype included
    pub count: usize,
    /// Center-to-center spacing along the row's transverse (x) axis
    pub spacing: f64,
}

/// One row of the ladder network
#[derive(Debug, Clone, PartialEq)]
pub struct Stage {
    /// Number of parallel resistor units in this row
    pub unit_num: usize,
    /// Anchor where the row begins
    pub entry: Point,
    /// Anchor for the next stage: `(entry.x, entry.y + height)`
    pub next_anchor: Point,
    /// Resistor outline at the leftmost column
    pub resistor: ResistorPath,
    /// How the backend replicates the resistor across the row
    pub replication: Replication,
    /// Connecting duct spanning the row at the entry y; `None` for a
    /// single-unit row, whose duct degenerates to zero width
    pub duct: Option<Profile>,
}

/// Lay out one stage from its entry anchor.
///
/// Columns sit at x-offsets `k * connect_width` for
/// `k = -(unit_num-1)/2 ... +(unit_num-1)/2` around the entry anchor; the
/// connecting duct is a `(unit_num-1) * connect_width` by `channel_width`
/// rectangle joining them at the entry y.
///
/// # Errors
///
/// `InvalidGeometryParameters` for a zero `unit_num`, a non-positive
/// `connect_width`, or any dimension rejected by the resistor builder.
pub fn build(
    entry: Point,
    unit_num: usize,
    connect_width: f64,
    height: f64,
    dims: &ChannelDims,
    curve_num: usize,
) -> LayoutResult<Stage> {
    if unit_num == 0 {
        return Err(LayoutError::invalid_parameter(
            "unit_num",
            0.0,
            "a stage needs at least one resistor unit",
        ));
    }
    require_positive("connect_width", connect_width)?;

    let row_width = (unit_num - 1) as f64 * connect_width;
    let left_x = entry.x - row_width / 2.0;

    let duct = if unit_num > 1 {
        Some(Profile::rectangle(
            Point::new(left_x, entry.y),
            row_width,
            dims.channel_width,
        )?)
    } else {
        None
    };

    let resistor = resistor::build(Point::new(left_x, entry.y), dims, height, curve_num)?;

    log::debug!(
        "stage with {unit_num} units: columns at x = {left_x} .. {} step {connect_width}",
        left_x + row_width
    );

    Ok(Stage {
        unit_num,
        entry,
        next_anchor: Point::new(entry.x, entry.y + height),
        resistor,
        replication: Replication {
            count: unit_num,
            spacing: connect_width,
        },
        duct,
    })
}

impl Stage {
    /// x-coordinate of each column's centerline, left to right
    #[must_use]
    pub fn column_positions(&self) -> Vec<f64> {
        (0..self.unit_num)
            .map(|k| self.resistor.entry.x + k as f64 * self.replication.spacing)
            .collect()
    }

    /// Every resistor outline of the row, materialized by translating the
    /// prototype column by column (identical to building each column
    /// independently).
    #[must_use]
    pub fn unit_outlines(&self) -> Vec<Profile> {
        (0..self.unit_num)
            .map(|k| {
                self.resistor
                    .profile
                    .translated(Vector2::new(k as f64 * self.replication.spacing, 0.0))
            })
            .collect()
    }

    /// All closed profiles of the row: the duct (when present) followed by
    /// every materialized resistor column.
    #[must_use]
    pub fn profiles(&self) -> Vec<Profile> {
        let mut out = Vec::with_capacity(self.unit_num + 1);
        if let Some(duct) = &self.duct {
            out.push(duct.clone());
        }
        out.extend(self.unit_outlines());
        out
    }

    /// Vertical distance covered by the row
    #[must_use]
    pub fn height(&self) -> f64 {
        self.next_anchor.y - self.entry.y
    }
}
