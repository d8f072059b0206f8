//! Math utilities and types
//!
//! Provides the fundamental math types used by the decoder.

pub use nalgebra::{Matrix3, Matrix4, Rotation3, Vector3, Vector4};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type (also used for RGBA colors)
pub type Vec4 = Vector4<f32>;

/// 3x3 matrix type
pub type Mat3 = Matrix3<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// 3D point type
pub type Point3 = nalgebra::Point3<f32>;

/// Orientation basis for the segment from `a` to `b`.
///
/// Derived the way a look-at transform derives its rotation, with the
/// translation discarded: the returned matrix's third column is the unit
/// vector from `a` toward `b`, so a local `(x, y, 0)` offset lands in the
/// plane perpendicular to that axis.
///
/// When the endpoints coincide the axis direction is undefined; the
/// identity basis is returned so callers get deterministic world-plane
/// geometry instead of NaNs.
pub fn axis_frame(a: Vec3, b: Vec3) -> Mat3 {
    let axis = b - a;
    if axis.norm_squared() < f32::EPSILON {
        return Mat3::identity();
    }
    let z = axis.normalize();
    // World up, unless the axis is almost vertical.
    let up = if z.y.abs() > 0.999 { Vec3::x() } else { Vec3::y() };
    let x = up.cross(&z).normalize();
    let y = z.cross(&x);
    Mat3::from_columns(&[x, y, z])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_axis_frame_is_orthonormal() {
        let frame = axis_frame(Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, -1.0, 0.5));
        let product = frame.transpose() * frame;
        assert_relative_eq!(product, Mat3::identity(), epsilon = 1e-5);
    }

    #[test]
    fn test_axis_frame_third_column_points_along_axis() {
        let a = Vec3::new(0.0, 0.0, 0.0);
        let b = Vec3::new(5.0, 0.0, 0.0);
        let frame = axis_frame(a, b);
        assert_relative_eq!(frame.column(2).into_owned(), Vec3::x(), epsilon = 1e-6);
    }

    #[test]
    fn test_axis_frame_handles_vertical_axis() {
        let frame = axis_frame(Vec3::zeros(), Vec3::new(0.0, 10.0, 0.0));
        assert!(frame.iter().all(|v| v.is_finite()));
        assert_relative_eq!(frame.column(2).into_owned(), Vec3::y(), epsilon = 1e-6);
    }

    #[test]
    fn test_axis_frame_degenerate_falls_back_to_identity() {
        let p = Vec3::new(3.0, 3.0, 3.0);
        assert_eq!(axis_frame(p, p), Mat3::identity());
    }
}
