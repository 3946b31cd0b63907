/// Barycentric coordinate math: signed areas, weights, and the
/// point-in-triangle test
///
/// This is the per-candidate-pixel inner loop of the rasterizer. Degenerate
/// (zero-area) triangles are handled by propagation: the weight division
/// produces non-finite values, which [`is_in_bounds`] rejects, so the caller
/// discards the candidate like any other outside point. No guard is applied
/// before the division.
use nalgebra::{Vector2, Vector3, Vector4};

use crate::geometry::Triangle;

/// Signed area of the triangle projected onto the x/y plane.
///
/// `0.5 * ((p2.x - p0.x)(p1.y - p0.y) - (p1.x - p0.x)(p2.y - p0.y))`.
/// The sign encodes winding order; the magnitude is the geometric area.
/// Collinear vertices give exactly 0, which downstream weight division
/// treats by propagating non-finite results.
pub fn signed_area(triangle: &Triangle) -> f32 {
    let p0 = triangle.vertices[0].position;
    let p1 = triangle.vertices[1].position;
    let p2 = triangle.vertices[2].position;
    0.5 * ((p2.x - p0.x) * (p1.y - p0.y) - (p1.x - p0.x) * (p2.y - p0.y))
}

/// Signed area of the synthetic triangle `(a,0,1), (b,0,1), (c,0,1)`.
fn sub_area(a: Vector2<f32>, b: Vector2<f32>, c: Vector2<f32>) -> f32 {
    let synthetic = Triangle::from_positions(
        Vector4::new(a.x, a.y, 0.0, 1.0),
        Vector4::new(b.x, b.y, 0.0, 1.0),
        Vector4::new(c.x, c.y, 0.0, 1.0),
    );
    signed_area(&synthetic)
}

/// One barycentric weight: the ratio of the sub-triangle `(a, b, c)`'s
/// signed area to the full triangle's signed area.
pub fn barycentric_weight(
    a: Vector2<f32>,
    b: Vector2<f32>,
    c: Vector2<f32>,
    triangle: &Triangle,
) -> f32 {
    sub_area(a, b, c) / signed_area(triangle)
}

/// Barycentric coordinates `(alpha, beta, gamma)` of `point` against the
/// triangle's x/y projection.
///
/// The vertex-argument order below fixes which weight belongs to which
/// vertex: evaluated at `p0`, `p1`, `p2` this returns `(1,0,0)`, `(0,1,0)`,
/// `(0,0,1)`. Attribute blending must consume the triple in that same order
/// or colors/normals/light vectors land on the wrong corners.
///
/// The full area is computed once and shared by both weight divisions; that
/// only saves the redundant recomputation, the results are identical to
/// calling [`barycentric_weight`] twice.
pub fn barycentric_coordinates(triangle: &Triangle, point: Vector2<f32>) -> Vector3<f32> {
    let p0 = triangle.vertices[0].position.xy();
    let p1 = triangle.vertices[1].position.xy();
    let p2 = triangle.vertices[2].position.xy();
    let full = signed_area(triangle);

    let beta = sub_area(p0, point, p2) / full;
    let gamma = sub_area(p0, p1, point) / full;
    let alpha = 1.0 - beta - gamma;
    Vector3::new(alpha, beta, gamma)
}

/// Whether a barycentric triple lies inside the triangle, edges included.
///
/// All three components must fall in the closed interval `[0, 1]`. Points
/// exactly on an edge shared by two triangles therefore test inside both;
/// that double coverage is the documented contract (no top-left or other
/// tie-break rule), and callers that need single coverage must resolve it
/// themselves. Non-finite components always fail, which is what discards
/// candidates from degenerate triangles.
pub fn is_in_bounds(coord: Vector3<f32>) -> bool {
    coord.x >= 0.0
        && coord.x <= 1.0
        && coord.y >= 0.0
        && coord.y <= 1.0
        && coord.z >= 0.0
        && coord.z <= 1.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// The reference right triangle: p0=(0,0), p1=(1,0), p2=(0,1), z=0, w=1.
    fn unit_right_triangle() -> Triangle {
        Triangle::from_positions(
            Vector4::new(0.0, 0.0, 0.0, 1.0),
            Vector4::new(1.0, 0.0, 0.0, 1.0),
            Vector4::new(0.0, 1.0, 0.0, 1.0),
        )
    }

    #[test]
    fn test_signed_area_of_reference_triangle() {
        assert_relative_eq!(signed_area(&unit_right_triangle()), -0.5);
    }

    #[test]
    fn test_signed_area_sign_flips_with_winding() {
        let tri = unit_right_triangle();
        let flipped = Triangle::new(tri.vertices[0], tri.vertices[2], tri.vertices[1]);
        assert_relative_eq!(signed_area(&flipped), 0.5);
    }

    #[test]
    fn test_coordinates_at_interior_point() {
        let coords = barycentric_coordinates(&unit_right_triangle(), Vector2::new(0.25, 0.25));
        assert_relative_eq!(coords.x, 0.5, epsilon = 1e-6);
        assert_relative_eq!(coords.y, 0.25, epsilon = 1e-6);
        assert_relative_eq!(coords.z, 0.25, epsilon = 1e-6);
    }

    #[test]
    fn test_coordinates_at_vertices() {
        let tri = unit_right_triangle();
        let expected = [
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            Vector3::new(0.0, 0.0, 1.0),
        ];
        for (vertex, want) in tri.vertices.iter().zip(expected) {
            let coords = barycentric_coordinates(&tri, vertex.position.xy());
            assert_relative_eq!(coords.x, want.x, epsilon = 1e-6);
            assert_relative_eq!(coords.y, want.y, epsilon = 1e-6);
            assert_relative_eq!(coords.z, want.z, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_coordinates_sum_to_one() {
        let tri = Triangle::from_positions(
            Vector4::new(-2.0, 1.0, 0.0, 1.0),
            Vector4::new(4.0, 0.5, 0.0, 1.0),
            Vector4::new(1.0, -3.0, 0.0, 1.0),
        );
        // Inside, outside, and on-edge points alike.
        for point in [
            Vector2::new(1.0, 0.0),
            Vector2::new(-5.0, 7.0),
            Vector2::new(1.0, 0.75),
            tri.centroid_xy(),
        ] {
            let coords = barycentric_coordinates(&tri, point);
            assert_relative_eq!(coords.x + coords.y + coords.z, 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_weight_matches_coordinate_computation() {
        let tri = unit_right_triangle();
        let point = Vector2::new(0.1, 0.2);
        let p0 = tri.vertices[0].position.xy();
        let p2 = tri.vertices[2].position.xy();
        let beta = barycentric_weight(p0, point, p2, &tri);
        assert_relative_eq!(beta, barycentric_coordinates(&tri, point).y, epsilon = 1e-6);
    }

    #[test]
    fn test_in_bounds_at_vertices_and_centroid() {
        let tri = unit_right_triangle();
        for vertex in &tri.vertices {
            let coords = barycentric_coordinates(&tri, vertex.position.xy());
            assert!(is_in_bounds(coords));
        }
        assert!(is_in_bounds(barycentric_coordinates(&tri, tri.centroid_xy())));
    }

    #[test]
    fn test_out_of_bounds_far_outside() {
        let coords = barycentric_coordinates(&unit_right_triangle(), Vector2::new(50.0, 50.0));
        assert!(!is_in_bounds(coords));
    }

    #[test]
    fn test_shared_edge_is_inside_both_triangles() {
        // Two triangles sharing the edge (1,0)-(0,1), consistently wound.
        let a = unit_right_triangle();
        let b = Triangle::from_positions(
            Vector4::new(1.0, 1.0, 0.0, 1.0),
            Vector4::new(0.0, 1.0, 0.0, 1.0),
            Vector4::new(1.0, 0.0, 0.0, 1.0),
        );
        let on_edge = Vector2::new(0.5, 0.5);
        assert!(is_in_bounds(barycentric_coordinates(&a, on_edge)));
        assert!(is_in_bounds(barycentric_coordinates(&b, on_edge)));
    }

    #[test]
    fn test_degenerate_triangle_is_rejected_by_bounds_test() {
        let collinear = Triangle::from_positions(
            Vector4::new(0.0, 0.0, 0.0, 1.0),
            Vector4::new(1.0, 1.0, 0.0, 1.0),
            Vector4::new(2.0, 2.0, 0.0, 1.0),
        );
        assert_eq!(signed_area(&collinear), 0.0);
        let coords = barycentric_coordinates(&collinear, Vector2::new(0.5, 0.5));
        // Division by zero area propagates non-finite weights, and the
        // bounds test discards them like any outside point.
        assert!(coords.iter().any(|c| !c.is_finite()));
        assert!(!is_in_bounds(coords));
    }
}
