/// Attribute interpolation across a triangle from barycentric weights
use nalgebra::Vector3;

use crate::geometry::{Fragment, Triangle};

/// Depth at a barycentric coordinate: `-(alpha*p0.z + beta*p1.z + gamma*p2.z)`.
///
/// A raw linear blend of the vertices' z components in whatever space the
/// triangle currently sits, negated so larger values are nearer under the
/// pipeline's depth convention. This is deliberately NOT perspective-correct
/// (no division by `w` before the blend, none by the blended `1/w` after);
/// drivers relying on this kernel get exactly this approximation.
pub fn interpolate_depth(coord: Vector3<f32>, triangle: &Triangle) -> f32 {
    let p0 = triangle.vertices[0].position;
    let p1 = triangle.vertices[1].position;
    let p2 = triangle.vertices[2].position;
    -(coord.x * p0.z + coord.y * p1.z + coord.z * p2.z)
}

/// Blend all shading attributes at a barycentric coordinate into a
/// [`Fragment`].
///
/// Uses the same `(alpha, beta, gamma)` to vertex correspondence as
/// [`crate::barycentric::barycentric_coordinates`], so a triple computed
/// there blends color, normal, position, and light vector consistently.
pub fn interpolate_fragment(coord: Vector3<f32>, triangle: &Triangle) -> Fragment {
    let [v0, v1, v2] = &triangle.vertices;
    Fragment {
        color: coord.x * v0.color + coord.y * v1.color + coord.z * v2.color,
        normal: coord.x * v0.normal.xyz() + coord.y * v1.normal.xyz() + coord.z * v2.normal.xyz(),
        position: coord.x * v0.position.xyz()
            + coord.y * v1.position.xyz()
            + coord.z * v2.position.xyz(),
        light: coord.x * v0.light.xyz() + coord.y * v1.light.xyz() + coord.z * v2.light.xyz(),
    }
}
