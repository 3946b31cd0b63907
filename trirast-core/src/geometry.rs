/// Geometry primitives for the rasterization kernel
use nalgebra::{Vector2, Vector3, Vector4};

/// A triangle vertex: clip-space position plus the attributes that get
/// interpolated across the face.
///
/// Positions, normals, and light vectors are all 4-component homogeneous so
/// translation and perspective terms survive transform composition.
#[derive(Debug, Clone, Copy)]
pub struct Vertex {
    /// Clip-space homogeneous position
    pub position: Vector4<f32>,
    /// World-space homogeneous light vector
    pub light: Vector4<f32>,
    /// Linear RGB color (no range enforced here)
    pub color: Vector3<f32>,
    /// Homogeneous normal
    pub normal: Vector4<f32>,
}

impl Vertex {
    pub fn new(
        position: Vector4<f32>,
        light: Vector4<f32>,
        color: Vector3<f32>,
        normal: Vector4<f32>,
    ) -> Self {
        Self {
            position,
            light,
            color,
            normal,
        }
    }

    /// A vertex carrying only a position, with zeroed shading attributes.
    pub fn from_position(position: Vector4<f32>) -> Self {
        Self {
            position,
            light: Vector4::zeros(),
            color: Vector3::zeros(),
            normal: Vector4::zeros(),
        }
    }
}

/// A triangle as the rasterizer sees it, after the external vertex stage has
/// transformed it into clip space (or whichever space the caller is working
/// in; the math below is space-agnostic as long as callers are consistent).
///
/// Winding order is significant: it sets the sign of the signed area and
/// therefore which side counts as "inside" in sign-based tests. Callers must
/// supply all triangles with one consistent winding.
#[derive(Debug, Clone, Copy)]
pub struct Triangle {
    pub vertices: [Vertex; 3],
}

impl Triangle {
    pub fn new(v0: Vertex, v1: Vertex, v2: Vertex) -> Self {
        Self {
            vertices: [v0, v1, v2],
        }
    }

    /// A triangle from bare positions, with zeroed shading attributes.
    pub fn from_positions(p0: Vector4<f32>, p1: Vector4<f32>, p2: Vector4<f32>) -> Self {
        Self::new(
            Vertex::from_position(p0),
            Vertex::from_position(p1),
            Vertex::from_position(p2),
        )
    }

    /// Axis-aligned bounding box of the three vertex positions.
    ///
    /// Exact componentwise min/max per axis. The driver walks only the
    /// pixels inside this box before paying for a barycentric test, so a
    /// loose bound would cost real throughput; an exact one is cheap.
    pub fn bounding_box(&self) -> (Vector3<f32>, Vector3<f32>) {
        let p0 = self.vertices[0].position;
        let p1 = self.vertices[1].position;
        let p2 = self.vertices[2].position;

        let min = Vector3::new(
            p0.x.min(p1.x).min(p2.x),
            p0.y.min(p1.y).min(p2.y),
            p0.z.min(p1.z).min(p2.z),
        );
        let max = Vector3::new(
            p0.x.max(p1.x).max(p2.x),
            p0.y.max(p1.y).max(p2.y),
            p0.z.max(p1.z).max(p2.z),
        );
        (min, max)
    }

    /// Centroid of the triangle in the x/y projection plane.
    ///
    /// Always strictly inside a non-degenerate triangle, which makes it a
    /// convenient known-interior sample point.
    pub fn centroid_xy(&self) -> Vector2<f32> {
        let p0 = self.vertices[0].position;
        let p1 = self.vertices[1].position;
        let p2 = self.vertices[2].position;
        Vector2::new((p0.x + p1.x + p2.x) / 3.0, (p0.y + p1.y + p2.y) / 3.0)
    }
}

/// One candidate pixel's interpolated attributes, handed off to the external
/// shading stage. Built by the driver per accepted pixel and never retained
/// by this kernel.
#[derive(Debug, Clone, Copy)]
pub struct Fragment {
    pub color: Vector3<f32>,
    pub normal: Vector3<f32>,
    pub position: Vector3<f32>,
    pub light: Vector3<f32>,
}
