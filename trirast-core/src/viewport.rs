/// Clip-space to pixel-space mapping
///
/// The default pipeline leaves screen mapping to its drivers; these
/// functions are the contract for drivers that want the kernel's convention
/// rather than their own. Forward and inverse are exact mirrors, step for
/// step, so `screen_to_clip(clip_to_screen(v, res), res)` returns `v` within
/// floating tolerance for any non-degenerate `w`. A `w` of zero propagates
/// non-finite components through the perspective divide, matching the
/// kernel-wide degenerate-input policy.
use nalgebra::{Vector2, Vector4};

use crate::geometry::{Triangle, Vertex};

/// Map one clip-space position to pixel space.
///
/// Perspective divide (`x,y,z /= w`, keeping `w`), then rescale from
/// `[-1,1]` to `[0,1]`, then scale x/y by the target resolution. The step
/// order is part of the contract; reordering breaks the inverse.
pub fn clip_to_screen(v: Vector4<f32>, resolution: Vector2<f32>) -> Vector4<f32> {
    let mut p = v;

    // Clip space to NDC (perspective divide)
    p.x /= p.w;
    p.y /= p.w;
    p.z /= p.w;

    // NDC [-1,1] to [0,1]
    p.x = (p.x + 1.0) / 2.0;
    p.y = (p.y + 1.0) / 2.0;
    p.z = (p.z + 1.0) / 2.0;

    // Scale to pixel coordinates
    p.x *= resolution.x;
    p.y *= resolution.y;
    p
}

/// Map one pixel-space position back to clip space.
///
/// Undoes each step of [`clip_to_screen`] in reverse order, re-multiplying
/// by the preserved `w` last.
pub fn screen_to_clip(v: Vector4<f32>, resolution: Vector2<f32>) -> Vector4<f32> {
    let mut p = v;

    // Pixel coordinates to [0,1]
    p.x /= resolution.x;
    p.y /= resolution.y;

    // [0,1] back to NDC [-1,1]
    p.x = p.x * 2.0 - 1.0;
    p.y = p.y * 2.0 - 1.0;
    p.z = p.z * 2.0 - 1.0;

    // NDC back to clip space
    p.x *= p.w;
    p.y *= p.w;
    p.z *= p.w;
    p
}

/// Apply [`clip_to_screen`] to all three vertex positions of a triangle,
/// leaving the shading attributes untouched.
pub fn triangle_to_screen(triangle: &Triangle, resolution: Vector2<f32>) -> Triangle {
    map_positions(triangle, |p| clip_to_screen(p, resolution))
}

/// Apply [`screen_to_clip`] to all three vertex positions of a triangle.
pub fn triangle_to_clip(triangle: &Triangle, resolution: Vector2<f32>) -> Triangle {
    map_positions(triangle, |p| screen_to_clip(p, resolution))
}

fn map_positions(triangle: &Triangle, f: impl Fn(Vector4<f32>) -> Vector4<f32>) -> Triangle {
    let [v0, v1, v2] = triangle.vertices;
    Triangle::new(
        Vertex {
            position: f(v0.position),
            ..v0
        },
        Vertex {
            position: f(v1.position),
            ..v1
        },
        Vertex {
            position: f(v2.position),
            ..v2
        },
    )
}
