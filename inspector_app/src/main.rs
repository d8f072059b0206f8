//! Collision wireframe inspector
//!
//! Loads a serialized physics aggregate from a RON property-tree file,
//! runs the wireframe decoder, and reports buffer statistics plus any
//! shapes the decoder had to drop. Useful for checking aggregate files
//! without spinning up a renderer.

use phys_wire::prelude::*;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: phys_inspect <aggregate.ron>");
        return ExitCode::FAILURE;
    };

    log::info!("loading aggregate from {path}");
    let source = match std::fs::read_to_string(&path) {
        Ok(source) => source,
        Err(err) => {
            log::error!("failed to read {path}: {err}");
            return ExitCode::FAILURE;
        }
    };

    let tree: PropertyTree = match ron::from_str(&source) {
        Ok(tree) => tree,
        Err(err) => {
            log::error!("failed to parse {path}: {err}");
            return ExitCode::FAILURE;
        }
    };

    let extraction = extract_aggregate(&tree);
    for (i, part) in extraction.aggregate.parts.iter().enumerate() {
        println!(
            "part {i}: {} spheres, {} capsules, {} hulls",
            part.spheres.len(),
            part.capsules.len(),
            part.hulls.len()
        );
    }

    let decoded = decode_tree(&tree);
    println!("vertices: {}", decoded.buffer.vertex_count());
    println!("segments: {}", decoded.buffer.segment_count());
    println!(
        "buffer bytes: {} vertex + {} index",
        decoded.buffer.vertex_bytes().len(),
        decoded.buffer.index_bytes().len()
    );

    for skip in &decoded.skipped {
        println!(
            "skipped {} {} in part {}: {}",
            skip.kind, skip.index, skip.part, skip.reason
        );
    }

    // Partial results are fine; the decode itself never hard-fails.
    ExitCode::SUCCESS
}
