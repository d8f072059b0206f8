//! Fixed-resolution tessellation of curved shapes
//!
//! Spheres and capsules become closed 16-gon circle approximations.
//! Everything here is a pure function of its inputs; identical shapes
//! always tessellate to identical local geometry.

use super::buffer::ShapeGeometry;
use crate::foundation::math::{axis_frame, Mat3, Rotation3, Vec3};
use std::f32::consts::{FRAC_PI_2, PI};

/// Vertices (and segments) per approximated circle.
const CIRCLE_SEGMENTS: u32 = 16;

/// Longitudinal struts connecting a capsule's two caps.
const CAPSULE_STRUTS: u32 = 4;

/// Append a closed 16-gon circle of `radius` around `center`.
///
/// Vertices sit at `center + orientation * (r cos θ, r sin θ, 0)`; segment
/// `i` connects vertex `i` to vertex `(i + 1) mod 16`, closing the loop.
fn circle(geo: &mut ShapeGeometry, center: Vec3, radius: f32, orientation: &Mat3) {
    let base = geo.vertex_count() as u32;
    for i in 0..CIRCLE_SEGMENTS {
        let theta = i as f32 * 2.0 * PI / CIRCLE_SEGMENTS as f32;
        let local = Vec3::new(theta.cos() * radius, theta.sin() * radius, 0.0);
        geo.push_vertex(center + orientation * local);
    }
    for i in 0..CIRCLE_SEGMENTS {
        geo.push_segment(base + i, base + (i + 1) % CIRCLE_SEGMENTS);
    }
}

fn sphere_into(geo: &mut ShapeGeometry, center: Vec3, radius: f32) {
    let about_x = Rotation3::from_axis_angle(&Vec3::x_axis(), FRAC_PI_2).into_inner();
    let about_y = Rotation3::from_axis_angle(&Vec3::y_axis(), FRAC_PI_2).into_inner();
    circle(geo, center, radius, &Mat3::identity());
    circle(geo, center, radius, &about_x);
    circle(geo, center, radius, &about_y);
}

/// Tessellate a sphere as three mutually orthogonal great circles.
///
/// Produces 48 vertices and 48 independent segments; no segment crosses
/// between circles.
#[must_use]
pub fn sphere(center: Vec3, radius: f32) -> ShapeGeometry {
    let mut geo = ShapeGeometry::new();
    sphere_into(&mut geo, center, radius);
    geo
}

/// Tessellate a capsule: one sphere cap per endpoint plus four
/// longitudinal struts in the plane perpendicular to the axis.
///
/// Equal endpoints are legal; the caps coincide and the struts collapse
/// to zero length (the axis basis falls back to identity, see
/// [`axis_frame`]).
#[must_use]
pub fn capsule(endpoint_a: Vec3, endpoint_b: Vec3, radius: f32) -> ShapeGeometry {
    let mut geo = ShapeGeometry::new();
    sphere_into(&mut geo, endpoint_a, radius);
    sphere_into(&mut geo, endpoint_b, radius);

    let frame = axis_frame(endpoint_a, endpoint_b);
    for i in 0..CAPSULE_STRUTS {
        let theta = i as f32 * FRAC_PI_2;
        let offset = frame * Vec3::new(theta.cos() * radius, theta.sin() * radius, 0.0);
        let a = geo.push_vertex(endpoint_a + offset);
        let b = geo.push_vertex(endpoint_b + offset);
        geo.push_segment(a, b);
    }
    geo
}
