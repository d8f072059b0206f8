//! Aggregate-to-buffer orchestration
//!
//! Appends shapes in a fixed deterministic order: parts in input order,
//! and within a part spheres, then capsules, then hulls. A failing shape
//! is reported and skipped; the decode always returns the best-effort
//! buffer built from everything else.

use super::buffer::{ShapeGeometry, WireframeBuffer, WireframeBuilder};
use super::hull::hull_wireframe;
use super::{tessellate, DecodeError, SkippedShape};
use crate::phys::{extract_aggregate, CollisionAggregate, ShapeKind};
use crate::tree::PropertyTree;
use log::{debug, warn};

/// Best-effort decode result.
#[derive(Debug, Clone, Default)]
pub struct Decoded {
    /// Buffer built from every shape that decoded successfully.
    pub buffer: WireframeBuffer,
    /// Shapes that were dropped, with reasons.
    pub skipped: Vec<SkippedShape>,
}

/// Decode a typed aggregate into one shared wireframe buffer.
#[must_use]
pub fn decode_aggregate(aggregate: &CollisionAggregate) -> Decoded {
    decode_into(aggregate, WireframeBuilder::new())
}

/// [`decode_aggregate`] with a caller-configured builder (custom color).
#[must_use]
pub fn decode_into(aggregate: &CollisionAggregate, mut builder: WireframeBuilder) -> Decoded {
    let mut skipped = Vec::new();
    for (part_index, part) in aggregate.parts.iter().enumerate() {
        for (i, sphere) in part.spheres.iter().enumerate() {
            let geo = tessellate::sphere(sphere.center, sphere.radius);
            commit(&mut builder, &mut skipped, part_index, ShapeKind::Sphere, i, Ok(geo));
        }
        for (i, capsule) in part.capsules.iter().enumerate() {
            let geo = tessellate::capsule(capsule.endpoint_a, capsule.endpoint_b, capsule.radius);
            commit(&mut builder, &mut skipped, part_index, ShapeKind::Capsule, i, Ok(geo));
        }
        for (i, hull) in part.hulls.iter().enumerate() {
            commit(
                &mut builder,
                &mut skipped,
                part_index,
                ShapeKind::Hull,
                i,
                hull_wireframe(hull),
            );
        }
    }
    let buffer = builder.finish();
    debug!(
        "decoded {} vertices, {} segments ({} shapes skipped)",
        buffer.vertex_count(),
        buffer.segment_count(),
        skipped.len()
    );
    Decoded { buffer, skipped }
}

/// Full pipeline: extract a property tree, then decode the result.
///
/// The returned skip list carries extraction-time failures first,
/// followed by tessellation/accumulation-time failures.
#[must_use]
pub fn decode_tree(tree: &PropertyTree) -> Decoded {
    let extraction = extract_aggregate(tree);
    let decoded = decode_aggregate(&extraction.aggregate);
    let mut skipped = extraction.skipped;
    skipped.extend(decoded.skipped);
    Decoded {
        buffer: decoded.buffer,
        skipped,
    }
}

fn commit(
    builder: &mut WireframeBuilder,
    skipped: &mut Vec<SkippedShape>,
    part: usize,
    kind: ShapeKind,
    index: usize,
    geometry: Result<ShapeGeometry, DecodeError>,
) {
    if let Err(reason) = geometry.and_then(|geo| builder.append(&geo)) {
        warn!("skipping {kind} {index} in part {part}: {reason}");
        skipped.push(SkippedShape {
            part,
            kind,
            index,
            reason,
        });
    }
}
