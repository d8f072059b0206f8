//! Wireframe decode pipeline
//!
//! Turns typed collision shapes into flat line-list geometry suitable for
//! a 16-bit-index renderer. Tessellation and accumulation run once,
//! synchronously, and are deterministic: the same input always produces
//! bit-identical buffers.

pub mod buffer;
pub mod decode;
pub mod hull;
pub mod tessellate;

pub use buffer::{ShapeGeometry, WireframeBuffer, WireframeBuilder, MAX_VERTICES, VERTEX_STRIDE};
pub use decode::{decode_aggregate, decode_into, decode_tree, Decoded};

use crate::phys::ShapeKind;
use crate::tree::TreeError;
use thiserror::Error;

/// Shape-local decode failures.
///
/// Every variant is non-fatal to the aggregate: the offending shape is
/// skipped, reported, and decoding continues with the next shape.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A shape record has missing, ill-typed, or wrong-arity fields.
    #[error("malformed shape record: {0}")]
    MalformedShape(String),

    /// A hull edge references a vertex or edge outside its hull.
    #[error("hull {kind} index {index} out of range (length {len})")]
    IndexOutOfRange {
        /// Which list the bad index points into (`"vertex"` or `"edge"`).
        kind: &'static str,
        /// The out-of-range index.
        index: u32,
        /// Length of the referenced list.
        len: usize,
    },

    /// Appending the shape would push the global vertex count past the
    /// 16-bit index ceiling.
    #[error("vertex budget exceeded: {requested} more vertices on top of {committed} would pass {max}")]
    VertexBudgetExceeded {
        /// Vertices the rejected shape wanted to add.
        requested: usize,
        /// Vertices already committed to the buffer.
        committed: usize,
        /// The hard vertex capacity.
        max: usize,
    },
}

impl From<TreeError> for DecodeError {
    fn from(err: TreeError) -> Self {
        Self::MalformedShape(err.to_string())
    }
}

/// Diagnostic record for one shape the decoder had to drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedShape {
    /// Index of the owning part within the aggregate.
    pub part: usize,
    /// Shape category the record belonged to.
    pub kind: ShapeKind,
    /// Index of the record within its category array.
    pub index: usize,
    /// Why it was dropped.
    pub reason: DecodeError,
}
