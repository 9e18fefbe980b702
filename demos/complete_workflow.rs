//! Complete workflow example: parameters → layout → backend hand-off
//!
//! This example demonstrates the full gradient-generator workflow:
//! 1. Configure the ladder network parameters
//! 2. Generate the 2D layout
//! 3. Inspect the generated stages
//! 4. Export the JSON hand-off for the solid-modeling backend
//!
//! Run with `RUST_LOG=debug` to see the per-stage construction log.

use gradgen::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    println!("=== Gradient Generator Layout Workflow ===");
    println!();

    // Step 1: Configure the network
    println!("Step 1: Configuring network parameters...");
    let params = NetworkParams::new()
        .with_ports(2, 5)
        .with_connect_width(0.5)
        .with_height(0.5)
        .with_channel_width(0.02)
        .with_meander(2, 0.02)
        .with_resistor_width(0.3)
        .with_channel_height(0.02);

    println!("✓ Parameters configured");
    println!("  - Inputs: {}", params.input_num);
    println!("  - Outputs: {}", params.output_num);
    println!("  - Ladder stages: {}", params.stage_count());
    println!();

    // Step 2: Generate the 2D layout
    println!("Step 2: Generating layout...");
    let network = assemble(params)?;

    println!("✓ Layout generated");
    println!("  - Stages: {}", network.stages().len());
    println!("  - Closed profiles: {}", network.profiles().len());
    println!();

    // Step 3: Inspect the generated stages
    println!("Step 3: Inspecting stages...");
    for stage in network.stages() {
        println!(
            "  - Stage with {} parallel resistor(s) at y = {:.3}",
            stage.unit_num, stage.entry.y
        );
        println!(
            "      straight run: {:.4}, duct: {}, columns at {:?}",
            stage.resistor.straight_len,
            if stage.duct.is_some() { "yes" } else { "no" },
            stage.column_positions()
        );
    }

    let arc_count: usize = network
        .profiles()
        .iter()
        .map(|p| {
            p.elements()
                .iter()
                .filter(|e| matches!(e, ProfileElement::Arc(_)))
                .count()
        })
        .sum();
    println!("  - Total arc edges: {}", arc_count);
    println!();

    // Step 4: Export the backend hand-off
    println!("Step 4: Exporting backend hand-off...");
    std::fs::create_dir_all("output")?;

    let handoff = BackendHandoff::from_network(&network, "gradient chip", 0.0);
    let writer = HandoffWriter::new().with_pretty(true);
    writer.export_json(&handoff, "output/gradient_handoff.json")?;

    println!("✓ Exported JSON hand-off");
    println!("  - Extrude depth: {:.4}", handoff.extrude_depth);
    println!("  - Stages recorded: {}", handoff.stages.len());
    println!();

    println!("=== Workflow Complete ===");
    println!("Files generated:");
    println!("  - output/gradient_handoff.json (solid-modeling backend input)");

    Ok(())
}
