//! Shared vertex/index accumulation
//!
//! Shape decoders produce local [`ShapeGeometry`]; the builder owns the
//! flat output lists, applies the per-shape vertex offset, and enforces
//! the 16-bit index capacity. Once finished, the buffer is immutable and
//! ownership moves to the renderer.

use super::DecodeError;
use crate::foundation::math::{Vec3, Vec4};

/// Floats per output vertex: position x,y,z then color r,g,b,a.
pub const VERTEX_STRIDE: usize = 7;

/// Hard vertex capacity of the output format.
///
/// Consumers read the index buffer as unsigned 16-bit values, so the
/// shared buffer never holds more than 65535 vertices.
pub const MAX_VERTICES: usize = u16::MAX as usize;

/// Standard debug wireframe color (solid red).
#[must_use]
pub fn debug_color() -> Vec4 {
    Vec4::new(1.0, 0.0, 0.0, 1.0)
}

/// One shape's geometry in shape-local space.
///
/// Positions plus segment index pairs into those positions. Produced by
/// the tessellators and the hull decoder; consumed, offset, and colored
/// by [`WireframeBuilder::append`]. Shape decoders never touch the shared
/// output lists directly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapeGeometry {
    positions: Vec<Vec3>,
    segments: Vec<(u32, u32)>,
}

impl ShapeGeometry {
    /// Empty geometry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a vertex, returning its local index.
    pub fn push_vertex(&mut self, position: Vec3) -> u32 {
        let index = self.positions.len() as u32;
        self.positions.push(position);
        index
    }

    /// Append one line segment between two local vertex indices.
    pub fn push_segment(&mut self, a: u32, b: u32) {
        debug_assert!((a as usize) < self.positions.len());
        debug_assert!((b as usize) < self.positions.len());
        self.segments.push((a, b));
    }

    /// Local vertex positions.
    #[must_use]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Local segment index pairs.
    #[must_use]
    pub fn segments(&self) -> &[(u32, u32)] {
        &self.segments
    }

    /// Number of local vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of line segments.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }
}

/// Accumulates shape geometry into the shared flat buffers.
///
/// Records the global vertex count before each shape lands so the shape's
/// local indices map to the right global vertices.
#[derive(Debug, Clone)]
pub struct WireframeBuilder {
    vertices: Vec<f32>,
    indices: Vec<u16>,
    color: Vec4,
}

impl WireframeBuilder {
    /// Builder using the standard debug color.
    #[must_use]
    pub fn new() -> Self {
        Self::with_color(debug_color())
    }

    /// Builder with a custom wireframe color.
    #[must_use]
    pub fn with_color(color: Vec4) -> Self {
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
            color,
        }
    }

    /// Number of vertices committed so far.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / VERTEX_STRIDE
    }

    /// Commit one shape's geometry at the current vertex offset.
    ///
    /// The append is atomic: on failure the buffer is unchanged and the
    /// caller may continue with the next shape.
    ///
    /// # Errors
    ///
    /// [`DecodeError::VertexBudgetExceeded`] when the shape would push the
    /// global vertex count past [`MAX_VERTICES`].
    pub fn append(&mut self, shape: &ShapeGeometry) -> Result<(), DecodeError> {
        let offset = self.vertex_count();
        if offset + shape.vertex_count() > MAX_VERTICES {
            return Err(DecodeError::VertexBudgetExceeded {
                requested: shape.vertex_count(),
                committed: offset,
                max: MAX_VERTICES,
            });
        }
        for position in shape.positions() {
            self.vertices.extend_from_slice(&[
                position.x,
                position.y,
                position.z,
                self.color.x,
                self.color.y,
                self.color.z,
                self.color.w,
            ]);
        }
        let offset = offset as u32;
        for &(a, b) in shape.segments() {
            self.indices.push((offset + a) as u16);
            self.indices.push((offset + b) as u16);
        }
        Ok(())
    }

    /// Finish accumulation, yielding the immutable buffer.
    #[must_use]
    pub fn finish(self) -> WireframeBuffer {
        WireframeBuffer {
            vertices: self.vertices,
            indices: self.indices,
        }
    }
}

impl Default for WireframeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Final wireframe geometry.
///
/// Flat stride-7 float vertices (position then RGBA color) and unsigned
/// 16-bit indices consumed in pairs as line-list topology. Immutable once
/// built; hand it to the renderer by value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WireframeBuffer {
    vertices: Vec<f32>,
    indices: Vec<u16>,
}

impl WireframeBuffer {
    /// Flat vertex data, stride [`VERTEX_STRIDE`].
    #[must_use]
    pub fn vertices(&self) -> &[f32] {
        &self.vertices
    }

    /// Line-list indices; each consecutive pair is one segment.
    #[must_use]
    pub fn indices(&self) -> &[u16] {
        &self.indices
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / VERTEX_STRIDE
    }

    /// Number of indices.
    #[must_use]
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Number of line segments.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.indices.len() / 2
    }

    /// True when no shape contributed any geometry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Raw bytes of the vertex buffer, ready for GPU upload.
    #[must_use]
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Raw bytes of the index buffer.
    #[must_use]
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}
