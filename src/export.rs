//! Backend hand-off document
//!
//! The core never extrudes or replicates geometry itself; it records exactly
//! what the external solid-modeling backend needs: the flat list of closed
//! profiles, the per-stage anchors, the extrusion depth, and the per-stage
//! replication instruction for the backend's array/pattern operation.
//! The document serializes to JSON.
//!
//! Profiles stay in the 2D layout plane; the plane's z offset is carried
//! once on the document (anchors are lifted to `[x, y, z]`) so a 2.5D host
//! can place the sketch plane without the core ever using z.

use crate::error::LayoutResult;
use crate::geometry::Profile;
use crate::network::GradientNetwork;
use crate::stage::Replication;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Document metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandoffMetadata {
    /// Design name
    pub name: String,
    /// Generation timestamp, RFC 3339
    pub generated_at: String,
    /// User-unit to model-unit multiplier the layout was generated with
    pub unit_scale: f64,
}

/// One stage of the hand-off: its anchors, replication instruction, and
/// closed profiles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageHandoff {
    /// Parallel resistor units in the row
    pub unit_num: usize,
    /// Entry anchor, lifted to the sketch plane
    pub anchor: [f64; 3],
    /// Next-stage anchor, lifted to the sketch plane
    pub next_anchor: [f64; 3],
    /// Pattern instruction for the backend: replicate the resistor solid
    /// `count` times with `spacing` along x
    pub replication: Replication,
    /// Connecting-duct profile; absent for single-unit rows
    pub duct: Option<Profile>,
    /// Prototype resistor outline at the leftmost column
    pub resistor: Profile,
}

/// Complete hand-off to the external solid-modeling backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendHandoff {
    pub metadata: HandoffMetadata,
    /// Distance each profile is extruded into a solid
    pub extrude_depth: f64,
    /// z of the sketch plane all profiles lie in
    pub z_offset: f64,
    /// Per-stage anchors, replication specs, and prototype profiles
    pub stages: Vec<StageHandoff>,
    /// Every profile of the network fully materialized (ducts and all
    /// resistor columns), for backends without a pattern operation
    pub profiles: Vec<Profile>,
}

impl BackendHandoff {
    /// Capture a generated network as a hand-off document.
    #[must_use]
    pub fn from_network(network: &GradientNetwork, name: impl Into<String>, z_offset: f64) -> Self {
        let params = network.params();
        let stages = network
            .stages()
            .iter()
            .map(|stage| StageHandoff {
                unit_num: stage.unit_num,
                anchor: [stage.entry.x, stage.entry.y, z_offset],
                next_anchor: [stage.next_anchor.x, stage.next_anchor.y, z_offset],
                replication: stage.replication,
                duct: stage.duct.clone(),
                resistor: stage.resistor.profile.clone(),
            })
            .collect();

        Self {
            metadata: HandoffMetadata {
                name: name.into(),
                generated_at: chrono::Utc::now().to_rfc3339(),
                unit_scale: params.unit_scale,
            },
            extrude_depth: params.channel_height * params.unit_scale,
            z_offset,
            stages,
            profiles: network.profiles(),
        }
    }
}

/// JSON writer for hand-off documents
#[derive(Debug, Clone, Default)]
pub struct HandoffWriter {
    pretty: bool,
}

impl HandoffWriter {
    /// Create a writer with compact output
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable pretty-printed output
    #[must_use]
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Serialize a hand-off document to a JSON string.
    ///
    /// # Errors
    ///
    /// `Json` on serialization failure.
    pub fn to_json_string(&self, handoff: &BackendHandoff) -> LayoutResult<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(handoff)?
        } else {
            serde_json::to_string(handoff)?
        };
        Ok(json)
    }

    /// Write a hand-off document to a JSON file.
    ///
    /// # Errors
    ///
    /// `Json` on serialization failure, `Io` on write failure.
    pub fn export_json<P: AsRef<Path>>(
        &self,
        handoff: &BackendHandoff,
        path: P,
    ) -> LayoutResult<()> {
        let json = self.to_json_string(handoff)?;
        fs::write(path.as_ref(), json)?;
        log::info!(
            "wrote hand-off with {} profiles to {}",
            handoff.profiles.len(),
            path.as_ref().display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::{assemble, NetworkParams};

    fn network() -> GradientNetwork {
        assemble(
            NetworkParams::new()
                .with_ports(2, 4)
                .with_connect_width(0.5)
                .with_height(0.5)
                .with_channel_width(0.02)
                .with_meander(2, 0.02)
                .with_resistor_width(0.3),
        )
        .unwrap()
    }

    #[test]
    fn handoff_captures_every_profile() {
        let network = network();
        let handoff = BackendHandoff::from_network(&network, "grad", 0.0);
        assert_eq!(handoff.stages.len(), 2);
        assert_eq!(handoff.profiles.len(), network.profiles().len());
        assert_eq!(handoff.stages[1].replication.count, 4);
        assert!((handoff.stages[1].replication.spacing - 0.5).abs() < 1e-12);
    }

    #[test]
    fn anchors_carry_the_plane_offset() {
        let handoff = BackendHandoff::from_network(&network(), "grad", 0.125);
        for stage in &handoff.stages {
            assert!((stage.anchor[2] - 0.125).abs() < 1e-12);
            assert!((stage.next_anchor[2] - 0.125).abs() < 1e-12);
        }
    }

    #[test]
    fn handoff_round_trips_through_json() {
        let handoff = BackendHandoff::from_network(&network(), "grad", 0.0);
        let json = HandoffWriter::new().to_json_string(&handoff).unwrap();
        let back: BackendHandoff = serde_json::from_str(&json).unwrap();
        assert_eq!(back, handoff);
    }

    #[test]
    fn pretty_output_is_larger() {
        let handoff = BackendHandoff::from_network(&network(), "grad", 0.0);
        let compact = HandoffWriter::new().to_json_string(&handoff).unwrap();
        let pretty = HandoffWriter::new()
            .with_pretty(true)
            .to_json_string(&handoff)
            .unwrap();
        assert!(pretty.len() > compact.len());
        assert!(pretty.contains("\"extrude_depth\""));
    }
}
