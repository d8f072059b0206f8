//! Typed collision shape records
//!
//! The decode target of the property-tree walk: plain, immutable data
//! describing the collision shapes of one resource. Grouping below the
//! shape-kind level is not preserved; a part is just its three shape
//! sets, any of which may be empty.

pub mod extract;

pub use extract::{extract_aggregate, Extraction};

use crate::foundation::math::Vec3;
use std::fmt;

/// Full decoded set of collision shapes for one resource.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CollisionAggregate {
    /// Constituent shape groups, in serialized order.
    pub parts: Vec<Part>,
}

/// One constituent shape group within an aggregate.
///
/// A part may contribute shapes of several kinds at once.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Part {
    /// Sphere shapes, in serialized order.
    pub spheres: Vec<Sphere>,
    /// Capsule shapes, in serialized order.
    pub capsules: Vec<Capsule>,
    /// Convex hull shapes, in serialized order.
    pub hulls: Vec<Hull>,
}

impl Part {
    /// Total number of shapes in this part.
    #[must_use]
    pub fn shape_count(&self) -> usize {
        self.spheres.len() + self.capsules.len() + self.hulls.len()
    }
}

/// Sphere collision shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    /// Center position.
    pub center: Vec3,
    /// Radius; non-negative.
    pub radius: f32,
}

/// Capsule collision shape: two cap centers and a shared radius.
///
/// `endpoint_a == endpoint_b` is legal; the capsule degenerates to two
/// coincident sphere caps and must still decode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Capsule {
    /// First cap center.
    pub endpoint_a: Vec3,
    /// Second cap center.
    pub endpoint_b: Vec3,
    /// Radius; non-negative.
    pub radius: f32,
}

/// Convex hull collision shape: explicit vertices plus an edge-index
/// list.
///
/// The edge indices are not validated here; the wireframe decoder checks
/// them and fails the individual hull on an out-of-range reference.
#[derive(Debug, Clone, PartialEq)]
pub struct Hull {
    /// Hull corner positions.
    pub vertices: Vec<Vec3>,
    /// Edge records indexing into `vertices` and into themselves.
    pub edges: Vec<HullEdge>,
}

/// One hull edge record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HullEdge {
    /// Index of this edge's origin vertex within the hull's vertex list.
    pub origin: u32,
    /// Index of the following edge within the hull's edge list.
    pub next: u32,
}

/// Shape categories the decoder understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    /// Sphere shape.
    Sphere,
    /// Capsule shape.
    Capsule,
    /// Convex hull shape.
    Hull,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Sphere => "sphere",
            Self::Capsule => "capsule",
            Self::Hull => "hull",
        })
    }
}
