//! Geometric properties of the generated channel outlines.

use approx::assert_relative_eq;
use gradgen::{assemble, NetworkParams, Point, ProfileElement};

fn params() -> NetworkParams {
    NetworkParams::new()
        .with_ports(2, 5)
        .with_connect_width(0.5)
        .with_height(0.5)
        .with_channel_width(0.02)
        .with_meander(2, 0.02)
        .with_resistor_width(0.3)
}

#[test]
fn every_profile_is_watertight() {
    let network = assemble(params()).unwrap();
    let profiles = network.profiles();
    assert!(!profiles.is_empty());
    for profile in &profiles {
        assert!(profile.is_closed(), "open profile in network output");
    }
}

#[test]
fn turn_arcs_keep_the_channel_width_constant() {
    let network = assemble(params()).unwrap();
    let channel_width = 0.02;
    let curve_rad = 0.02;
    for stage in network.stages() {
        let radii: Vec<f64> = stage
            .resistor
            .profile
            .elements()
            .iter()
            .filter_map(|e| match e {
                ProfileElement::Arc(arc) => Some(arc.radius()),
                ProfileElement::Segment(_) => None,
            })
            .collect();
        // Two concentric arcs per U-turn, two U-turns per meander unit.
        assert_eq!(radii.len(), 4 * 2);
        for r in &radii {
            let outer = curve_rad + channel_width / 2.0;
            let inner = curve_rad - channel_width / 2.0;
            assert!(
                (r - outer).abs() < 1e-9 || (r - inner).abs() < 1e-9,
                "unexpected arc radius {r}"
            );
        }
        // Equal numbers of inner and outer arcs.
        let outer_count = radii
            .iter()
            .filter(|r| (**r - (curve_rad + channel_width / 2.0)).abs() < 1e-9)
            .count();
        assert_eq!(outer_count * 2, radii.len());
    }
}

#[test]
fn meander_stays_inside_its_footprint() {
    let network = assemble(params()).unwrap();
    let reach = 0.3 / 2.0 + 0.02 + 0.02 / 2.0; // resistor_width/2 + curve_rad + channel_width/2
    for stage in network.stages() {
        let center = stage.resistor.entry.x;
        for element in stage.resistor.profile.elements() {
            for p in [element.start(), element.end()] {
                assert!(
                    (p.x - center).abs() <= reach + 1e-12,
                    "wall at x = {} escapes the column footprint",
                    p.x
                );
            }
        }
    }
}

#[test]
fn columns_are_translated_copies_of_the_prototype() {
    let network = assemble(params()).unwrap();
    for stage in network.stages() {
        let outlines = stage.unit_outlines();
        assert_eq!(outlines.len(), stage.unit_num);
        let prototype = &outlines[0];
        for (k, outline) in outlines.iter().enumerate() {
            let dx = k as f64 * stage.replication.spacing;
            assert_eq!(outline.len(), prototype.len());
            for (a, b) in outline.elements().iter().zip(prototype.elements()) {
                assert_relative_eq!(a.start().x, b.start().x + dx, epsilon = 1e-12);
                assert_relative_eq!(a.start().y, b.start().y, epsilon = 1e-12);
            }
        }
    }
}

#[test]
fn column_positions_are_symmetric_about_the_anchor() {
    let network = assemble(params()).unwrap();
    for stage in network.stages() {
        let positions = stage.column_positions();
        let first = positions.first().copied().unwrap();
        let last = positions.last().copied().unwrap();
        assert_relative_eq!(first + last, 2.0 * stage.entry.x, epsilon = 1e-12);
        for pair in positions.windows(2) {
            assert_relative_eq!(pair[1] - pair[0], 0.5, epsilon = 1e-12);
        }
    }
}

#[test]
fn outline_vertices_are_shared_exactly_between_edges() {
    // Watertightness at the raw-coordinate level: each edge begins where
    // the previous one ended.
    let network = assemble(params()).unwrap();
    for profile in network.profiles() {
        let elements = profile.elements();
        for pair in elements.windows(2) {
            let gap = (pair[1].start() - pair[0].end()).norm();
            assert!(gap < 1e-12, "vertex gap of {gap}");
        }
    }
}

#[test]
fn exact_fit_meander_caps_at_the_final_traverse() {
    // height == 4 * curve_rad * curve_num leaves zero-length straight runs.
    let network = assemble(params().with_height(0.16)).unwrap();
    for stage in network.stages() {
        assert_relative_eq!(stage.resistor.straight_len, 0.0, epsilon = 1e-12);
        assert!(stage.resistor.profile.is_closed());
        assert_relative_eq!(
            stage.resistor.exit.y - stage.resistor.entry.y,
            0.16,
            epsilon = 1e-12
        );
    }
}

#[test]
fn first_stage_is_anchored_at_the_origin() {
    let network = assemble(params()).unwrap();
    let origin = Point::new(0.0, 0.0);
    assert_eq!(network.stages()[0].entry, origin);
    assert_eq!(network.anchors()[0], origin);
}
