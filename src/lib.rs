//! `gradgen` - Parametric 2D Layout for Microfluidic Gradient Generators
//!
//! A library for computing the planar geometry of branching microfluidic
//! gradient-generator devices: ladder networks of serpentine resistor
//! channels that connect a small number of fluid inputs to a larger number
//! of outputs. The output is a list of watertight closed profiles (straight
//! segments and three-point circular arcs) plus the anchor points chaining
//! the ladder stages, ready to hand to an external solid-modeling backend
//! for extrusion and patterning.
//!
//! # Architecture
//!
//! - **geometry**: point, segment, three-point arc, and closed-profile value types
//! - **turns**: one 180° meander U-turn from two concentric arcs
//! - **resistor**: serpentine resistor outlines (lead-in, meander, lead-out)
//! - **stage**: one ladder row of evenly spaced resistor columns plus its duct
//! - **network**: parameter validation and stage-by-stage assembly
//! - **export**: JSON hand-off document for the solid-modeling backend
//!
//! The core is a deterministic pure function from parameters to geometry:
//! no I/O, no shared state, no host-CAD session.
//!
//! # Example
//!
//! ```rust
//! use gradgen::prelude::*;
//!
//! # fn main() -> Result<(), gradgen::LayoutError> {
//! let params = NetworkParams::new()
//!     .with_ports(2, 5)
//!     .with_channel_width(0.02)
//!     .with_meander(2, 0.02);
//!
//! let network = assemble(params)?;
//! assert_eq!(network.stages().len(), 3);
//!
//! let handoff = BackendHandoff::from_network(&network, "gradient chip", 0.0);
//! let json = HandoffWriter::new().to_json_string(&handoff)?;
//! assert!(json.contains("profiles"));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod export;
pub mod geometry;
pub mod network;
pub mod resistor;
pub mod stage;
pub mod turns;

// Re-export commonly used types
pub use error::{LayoutError, LayoutResult};
pub use export::{BackendHandoff, HandoffWriter};
pub use geometry::{Arc, Point, Profile, ProfileElement, Segment};
pub use network::{assemble, GradientNetwork, NetworkParams};
pub use resistor::ResistorPath;
pub use stage::{Replication, Stage};
pub use turns::ChannelDims;

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default layout parameters (model units; the values of the original
/// host-CAD tool after its unit conversion)
pub mod defaults {
    /// Default number of fluid inputs
    pub const DEFAULT_INPUT_NUM: usize = 2;

    /// Default number of fluid outputs
    pub const DEFAULT_OUTPUT_NUM: usize = 5;

    /// Default column spacing within a stage
    pub const DEFAULT_CONNECT_WIDTH: f64 = 0.5;

    /// Default per-stage height
    pub const DEFAULT_STAGE_HEIGHT: f64 = 0.5;

    /// Default channel bore width
    pub const DEFAULT_CHANNEL_WIDTH: f64 = 0.02;

    /// Default meander units per resistor
    pub const DEFAULT_CURVE_NUM: usize = 2;

    /// Default meander turn radius
    pub const DEFAULT_CURVE_RAD: f64 = 0.02;

    /// Default meander lateral extent
    pub const DEFAULT_RESISTOR_WIDTH: f64 = 0.3;

    /// Default extrusion depth recorded for the backend
    pub const DEFAULT_CHANNEL_HEIGHT: f64 = 0.02;
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{LayoutError, LayoutResult};
    pub use crate::export::{BackendHandoff, HandoffWriter};
    pub use crate::geometry::{Arc, Point, Profile, ProfileElement, Segment};
    pub use crate::network::{assemble, GradientNetwork, NetworkParams};
    pub use crate::resistor::ResistorPath;
    pub use crate::stage::{Replication, Stage};
    pub use crate::turns::ChannelDims;

    pub use crate::defaults::*;
}
