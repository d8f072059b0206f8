//! # phys_wire
//!
//! Decodes a loosely-typed serialized physics aggregate (a tree of named
//! scalar/array properties) into renderer-agnostic wireframe geometry:
//! flat vertex and 16-bit line-index buffers representing spheres,
//! capsules, and convex hulls.
//!
//! The pipeline runs once, synchronously, during scene construction:
//!
//! 1. [`phys::extract_aggregate`] walks the property tree into typed
//!    [`phys::CollisionAggregate`] records.
//! 2. [`wireframe::tessellate`] and [`wireframe::hull`] turn each shape
//!    into local vertex/segment geometry.
//! 3. [`wireframe::WireframeBuilder`] accumulates everything into one
//!    shared [`wireframe::WireframeBuffer`] with correct index offsets.
//!
//! All failures are shape-local: a malformed record, an out-of-range hull
//! edge, or a blown vertex budget drops only that shape, and the decoder
//! always returns a best-effort buffer plus a skip report.
//!
//! ## Quick Start
//!
//! ```rust
//! use phys_wire::prelude::*;
//!
//! let sphere = PropertyTree::new().with(
//!     "m_Sphere",
//!     PropertyTree::new()
//!         .with("m_vCenter", PropertyValue::vector3(Vec3::zeros()))
//!         .with("m_flRadius", 1.0),
//! );
//! let shape = PropertyTree::new().with("m_spheres", vec![sphere.into()]);
//! let part = PropertyTree::new().with("m_rnShape", shape);
//! let tree = PropertyTree::new().with("m_parts", vec![part.into()]);
//!
//! let decoded = decode_tree(&tree);
//! assert_eq!(decoded.buffer.vertex_count(), 48);
//! assert!(decoded.skipped.is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod foundation;
pub mod phys;
pub mod tree;
pub mod wireframe;

pub use tree::{PropertyTree, PropertyValue, TreeError};
pub use wireframe::{
    decode_aggregate, decode_tree, DecodeError, Decoded, SkippedShape, WireframeBuffer,
    WireframeBuilder,
};

/// Common imports for decoder users
pub mod prelude {
    pub use crate::foundation::math::{Vec3, Vec4};
    pub use crate::phys::{
        extract_aggregate, Capsule, CollisionAggregate, Hull, HullEdge, Part, ShapeKind, Sphere,
    };
    pub use crate::tree::{PropertyTree, PropertyValue, TreeError};
    pub use crate::wireframe::{
        decode_aggregate, decode_tree, DecodeError, Decoded, SkippedShape, WireframeBuffer,
        WireframeBuilder,
    };
}
