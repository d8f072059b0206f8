//! Hull edge-list decoding
//!
//! Each edge record is paired directly with the origin of the edge it
//! names as `next`: one record, one segment. The chain is deliberately
//! not walked to face closure and duplicate segments are not removed;
//! the edge array is trusted to already encode the desired line set.

use super::buffer::ShapeGeometry;
use super::DecodeError;
use crate::phys::Hull;

/// Decode one hull into local wireframe geometry.
///
/// All hull vertices are appended first; each edge then contributes one
/// segment from `vertices[edge.origin]` to
/// `vertices[edges[edge.next].origin]`.
///
/// # Errors
///
/// [`DecodeError::IndexOutOfRange`] when any edge references a vertex or
/// edge outside the hull; the whole hull is rejected, no partial
/// geometry escapes.
pub fn hull_wireframe(hull: &Hull) -> Result<ShapeGeometry, DecodeError> {
    let mut geo = ShapeGeometry::new();
    for &vertex in &hull.vertices {
        geo.push_vertex(vertex);
    }
    for edge in &hull.edges {
        let a = vertex_index(hull, edge.origin)?;
        let next = hull
            .edges
            .get(edge.next as usize)
            .ok_or(DecodeError::IndexOutOfRange {
                kind: "edge",
                index: edge.next,
                len: hull.edges.len(),
            })?;
        let b = vertex_index(hull, next.origin)?;
        geo.push_segment(a, b);
    }
    Ok(geo)
}

fn vertex_index(hull: &Hull, index: u32) -> Result<u32, DecodeError> {
    if (index as usize) < hull.vertices.len() {
        Ok(index)
    } else {
        Err(DecodeError::IndexOutOfRange {
            kind: "vertex",
            index,
            len: hull.vertices.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec3;
    use crate::phys::HullEdge;

    fn ring_hull() -> Hull {
        Hull {
            vertices: vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(1.0, 1.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
            ],
            edges: vec![
                HullEdge { origin: 0, next: 1 },
                HullEdge { origin: 1, next: 2 },
                HullEdge { origin: 2, next: 3 },
                HullEdge { origin: 3, next: 0 },
            ],
        }
    }

    #[test]
    fn test_ring_hull_yields_one_segment_per_edge() {
        let geo = hull_wireframe(&ring_hull()).unwrap();
        assert_eq!(geo.vertex_count(), 4);
        assert_eq!(geo.segments(), &[(0, 1), (1, 2), (2, 3), (3, 0)]);
    }

    #[test]
    fn test_vertices_keep_hull_order() {
        let hull = ring_hull();
        let geo = hull_wireframe(&hull).unwrap();
        assert_eq!(geo.positions(), hull.vertices.as_slice());
    }

    #[test]
    fn test_out_of_range_next_edge_rejects_the_hull() {
        let mut hull = ring_hull();
        hull.edges[2].next = 9;
        let err = hull_wireframe(&hull).unwrap_err();
        assert_eq!(
            err,
            DecodeError::IndexOutOfRange {
                kind: "edge",
                index: 9,
                len: 4
            }
        );
    }

    #[test]
    fn test_out_of_range_origin_rejects_the_hull() {
        let mut hull = ring_hull();
        hull.edges[0].origin = 4;
        let err = hull_wireframe(&hull).unwrap_err();
        assert_eq!(
            err,
            DecodeError::IndexOutOfRange {
                kind: "vertex",
                index: 4,
                len: 4
            }
        );
    }

    #[test]
    fn test_no_chain_walking_or_deduplication() {
        // Two edges pointing at each other produce two (mirrored)
        // segments; nothing collapses them.
        let hull = Hull {
            vertices: vec![Vec3::zeros(), Vec3::x()],
            edges: vec![
                HullEdge { origin: 0, next: 1 },
                HullEdge { origin: 1, next: 0 },
            ],
        };
        let geo = hull_wireframe(&hull).unwrap();
        assert_eq!(geo.segments(), &[(0, 1), (1, 0)]);
    }
}
