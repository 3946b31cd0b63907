/// Row-accessible 4x4 transform matrices
use nalgebra::{Matrix4, Vector4};

/// A 4x4 matrix stored as four rows, each a `Vector4` with `x..w` component
/// access.
///
/// `nalgebra::Matrix4` is column-major; this re-layout gives per-row access
/// so a matrix-vector product is four dot products, and the type itself is a
/// plain `Copy` value with no ties to the host matrix library. That makes it
/// safe to hand by value into however many parallel pixel/triangle contexts
/// the driver spawns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowMatrix {
    pub x: Vector4<f32>,
    pub y: Vector4<f32>,
    pub z: Vector4<f32>,
    pub w: Vector4<f32>,
}

impl RowMatrix {
    /// Re-layout a column-major matrix into row form.
    ///
    /// For each destination row `r` and column `c`, `dest[r][c] = source[c][r]`.
    /// This is a pure re-indexing, not an inverse-transpose; the caller must
    /// keep using the same column-vector convention the source matrix was
    /// built with.
    pub fn from_matrix(source: &Matrix4<f32>) -> Self {
        Self {
            x: source.row(0).transpose(),
            y: source.row(1).transpose(),
            z: source.row(2).transpose(),
            w: source.row(3).transpose(),
        }
    }

    /// Rebuild the column-major matrix from the row form.
    ///
    /// Exact inverse of [`RowMatrix::from_matrix`] -- a pure index
    /// permutation, so the round trip has no floating error.
    pub fn to_matrix(&self) -> Matrix4<f32> {
        Matrix4::new(
            self.x.x, self.x.y, self.x.z, self.x.w,
            self.y.x, self.y.y, self.y.z, self.y.w,
            self.z.x, self.z.y, self.z.z, self.z.w,
            self.w.x, self.w.y, self.w.z, self.w.w,
        )
    }

    /// Standard matrix-vector product: `result[row] = sum(m[row][col] * v[col])`.
    ///
    /// Used for positions, normals, and light vectors alike; which matrix is
    /// appropriate for each (normals want the inverse-transpose) is the
    /// caller's concern.
    pub fn transform(&self, v: Vector4<f32>) -> Vector4<f32> {
        Vector4::new(
            self.x.dot(&v),
            self.y.dot(&v),
            self.z.dot(&v),
            self.w.dot(&v),
        )
    }
}
