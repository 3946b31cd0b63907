/// Trirast Core Library - Stateless rasterization math kernel
///
/// This library provides the pure geometric math used inside a triangle
/// rasterization pipeline: row-accessible transform matrices, triangle
/// bounding boxes, barycentric coordinates, and depth interpolation.
/// Everything here is an allocation-free function over small value types;
/// vertex processing, shading, framebuffers, and work scheduling belong
/// to the callers that drive it.

pub mod barycentric;
pub mod geometry;
pub mod interpolate;
pub mod transform;
pub mod viewport;

// Re-export commonly used types
pub use geometry::{Fragment, Triangle, Vertex};
pub use transform::RowMatrix;
