//! Gradient-network assembly
//!
//! Top-level driver: validates the parameter set eagerly, then iterates the
//! ladder stages from `input_num + 1` to `output_num` units, threading the
//! anchor point from one stage to the next. Assembly is a pure function of
//! the parameters; calling it twice yields geometrically identical output.

use crate::error::{require_positive, LayoutError, LayoutResult};
use crate::geometry::{Point, Profile};
use crate::resistor;
use crate::stage::{self, Stage};
use crate::turns::ChannelDims;
use serde::{Deserialize, Serialize};

/// Parameter set for one gradient-generator network.
///
/// All linear dimensions are given in user units and multiplied by
/// `unit_scale` to reach model units, replacing the fixed conversion the
/// host-CAD original applied to its text inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NetworkParams {
    /// Number of fluid inputs
    pub input_num: usize,
    /// Number of fluid outputs; the ladder runs from `input_num + 1` to
    /// `output_num` units per stage
    pub output_num: usize,
    /// Center-to-center spacing between resistor columns in a row
    pub connect_width: f64,
    /// Anchor-to-anchor vertical extent of one stage
    pub height: f64,
    /// Channel bore width
    pub channel_width: f64,
    /// Meander units per resistor
    pub curve_num: usize,
    /// Centerline radius of the meander turns
    pub curve_rad: f64,
    /// Lateral extent of the meander
    pub resistor_width: f64,
    /// Extrusion depth recorded for the solid-modeling backend; unused by
    /// the 2D layout itself
    pub channel_height: f64,
    /// Multiplier from user units to model units
    pub unit_scale: f64,
}

impl Default for NetworkParams {
    fn default() -> Self {
        Self {
            input_num: crate::defaults::DEFAULT_INPUT_NUM,
            output_num: crate::defaults::DEFAULT_OUTPUT_NUM,
            connect_width: crate::defaults::DEFAULT_CONNECT_WIDTH,
            height: crate::defaults::DEFAULT_STAGE_HEIGHT,
            channel_width: crate::defaults::DEFAULT_CHANNEL_WIDTH,
            curve_num: crate::defaults::DEFAULT_CURVE_NUM,
            curve_rad: crate::defaults::DEFAULT_CURVE_RAD,
            resistor_width: crate::defaults::DEFAULT_RESISTOR_WIDTH,
            channel_height: crate::defaults::DEFAULT_CHANNEL_HEIGHT,
            unit_scale: 1.0,
        }
    }
}

impl NetworkParams {
    /// Start from the default parameter set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the input/output port counts
    #[must_use]
    pub fn with_ports(mut self, input_num: usize, output_num: usize) -> Self {
        self.input_num = input_num;
        self.output_num = output_num;
        self
    }

    /// Set the column spacing
    #[must_use]
    pub fn with_connect_width(mut self, connect_width: f64) -> Self {
        self.connect_width = connect_width;
        self
    }

    /// Set the per-stage height
    #[must_use]
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    /// Set the channel bore width
    #[must_use]
    pub fn with_channel_width(mut self, channel_width: f64) -> Self {
        self.channel_width = channel_width;
        self
    }

    /// Set the meander unit count and turn radius
    #[must_use]
    pub fn with_meander(mut self, curve_num: usize, curve_rad: f64) -> Self {
        self.curve_num = curve_num;
        self.curve_rad = curve_rad;
        self
    }

    /// Set the meander lateral extent
    #[must_use]
    pub fn with_resistor_width(mut self, resistor_width: f64) -> Self {
        self.resistor_width = resistor_width;
        self
    }

    /// Set the extrusion depth recorded for the backend
    #[must_use]
    pub fn with_channel_height(mut self, channel_height: f64) -> Self {
        self.channel_height = channel_height;
        self
    }

    /// Set the user-unit to model-unit multiplier
    #[must_use]
    pub fn with_unit_scale(mut self, unit_scale: f64) -> Self {
        self.unit_scale = unit_scale;
        self
    }

    /// Number of stages the network will contain
    #[must_use]
    pub fn stage_count(&self) -> usize {
        self.output_num.saturating_sub(self.input_num)
    }

    /// Cross-section dimensions in model units
    pub(crate) fn scaled_dims(&self) -> ChannelDims {
        ChannelDims {
            channel_width: self.channel_width * self.unit_scale,
            curve_rad: self.curve_rad * self.unit_scale,
            resistor_width: self.resistor_width * self.unit_scale,
        }
    }

    /// Validate the whole parameter set, naming the first offending value.
    ///
    /// # Errors
    ///
    /// `InvalidInputRange` when `output_num < input_num + 1`;
    /// `InvalidGeometryParameters` for any dimension out of domain,
    /// including a `height` too small for the meander.
    pub fn validate(&self) -> LayoutResult<()> {
        if self.output_num < self.input_num + 1 {
            return Err(LayoutError::invalid_range(self.input_num, self.output_num));
        }
        require_positive("unit_scale", self.unit_scale)?;
        require_positive("connect_width", self.connect_width)?;
        require_positive("height", self.height)?;
        require_positive("channel_height", self.channel_height)?;
        let dims = self.scaled_dims();
        resistor::validate_dims(&dims, self.curve_num)?;
        let meander_height = 4.0 * dims.curve_rad * self.curve_num as f64;
        if self.height * self.unit_scale < meander_height {
            return Err(LayoutError::invalid_parameter(
                "height",
                self.height,
                format!(
                    "must be at least 4 * curve_rad * curve_num = {} in model units",
                    meander_height
                ),
            ));
        }
        Ok(())
    }
}

/// The complete layout of one gradient-generator network
#[derive(Debug, Clone, PartialEq)]
pub struct GradientNetwork {
    params: NetworkParams,
    stages: Vec<Stage>,
}

impl GradientNetwork {
    /// The parameter set the network was generated from
    #[must_use]
    pub fn params(&self) -> &NetworkParams {
        &self.params
    }

    /// The ladder stages in flow order
    #[must_use]
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Per-stage entry anchors followed by the final exit anchor
    #[must_use]
    pub fn anchors(&self) -> Vec<Point> {
        let mut anchors: Vec<Point> = self.stages.iter().map(|s| s.entry).collect();
        if let Some(last) = self.stages.last() {
            anchors.push(last.next_anchor);
        }
        anchors
    }

    /// Every closed profile of the network, in stage order: each stage's
    /// duct (when present) followed by its materialized resistor columns.
    /// This flat list is the unit handed to the solid-modeling backend.
    #[must_use]
    pub fn profiles(&self) -> Vec<Profile> {
        self.stages.iter().flat_map(Stage::profiles).collect()
    }
}

/// Assemble the full network layout from its parameters.
///
/// Stages run from `input_num + 1` to `output_num` units, the first anchored
/// at the origin, each later one at the anchor its predecessor produced.
///
/// # Errors
///
/// Any validation failure from [`NetworkParams::validate`]; no partial
/// output is ever produced.
pub fn assemble(params: NetworkParams) -> LayoutResult<GradientNetwork> {
    params.validate()?;

    let dims = params.scaled_dims();
    let connect_width = params.connect_width * params.unit_scale;
    let height = params.height * params.unit_scale;

    let mut stages = Vec::with_capacity(params.stage_count());
    let mut anchor = Point::new(0.0, 0.0);
    for unit_num in params.input_num + 1..=params.output_num {
        let stage = stage::build(
            anchor,
            unit_num,
            connect_width,
            height,
            &dims,
            params.curve_num,
        )?;
        anchor = stage.next_anchor;
        stages.push(stage);
    }

    log::info!(
        "assembled gradient network: {} inputs -> {} outputs, {} stages, {} profiles",
        params.input_num,
        params.output_num,
        stages.len(),
        stages
            .iter()
            .map(|s| s.unit_num + usize::from(s.duct.is_some()))
            .sum::<usize>()
    );

    Ok(GradientNetwork { params, stages })
}
