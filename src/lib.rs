//! # Meshfield
//!
//! Barycentric interpolation of scalar fields on unstructured 2D triangle meshes.
//!
//! Meshfield takes a triangle mesh with one sample value per vertex and turns
//! it into a continuous scalar field: evaluation at any point finds the
//! triangle containing that point and blends the triangle's three vertex
//! samples with barycentric weights. Typical sources for such meshes are
//! triangulated irregular networks (terrain elevation), finite-element or
//! finite-volume solver output, and scattered sensor data after triangulation.
//!
//! ## Features
//!
//! - **Barycentric interpolation**: piecewise-linear evaluation of per-vertex samples
//! - **Fast point location**: kd-tree nearest-vertex search, with a brute-force fallback
//! - **Topology reuse**: bind any number of value arrays to one validated mesh
//! - **Flexible indexing**: support for 16-bit, 32-bit, and 64-bit indices
//! - **Parallel batches**: evaluate point sets across threads with rayon
//!
//! Points covered by no triangle evaluate to `0.0` (see
//! [`NO_COVERAGE_VALUE`](field::NO_COVERAGE_VALUE)); use
//! [`try_evaluate`](field::MeshInterpolator::try_evaluate) when a field that
//! genuinely takes the value `0.0` must be told apart from no coverage.
//!
//! ## Quick Start
//!
//! ```
//! use meshfield::prelude::*;
//! use nalgebra::Point2;
//!
//! // One triangle with a sample value at each corner
//! let positions = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(0.0, 1.0),
//! ];
//! let values = vec![10.0, 20.0, 30.0];
//! let triangles = vec![[0, 1, 2]];
//!
//! let field: MeshInterpolator = MeshInterpolator::new(&positions, &values, &triangles).unwrap();
//!
//! // Inside: the vertex samples are blended
//! assert!((field.evaluate(0.25, 0.25) - 17.5).abs() < 1e-12);
//!
//! // Outside: no coverage
//! assert_eq!(field.evaluate(2.0, 2.0), 0.0);
//! assert_eq!(field.try_evaluate(2.0, 2.0), None);
//! ```
//!
//! ## Reusing a Topology
//!
//! Building a mesh validates every triangle and constructs a kd-tree over the
//! vertices. When several attributes live on the same mesh, pay that cost
//! once:
//!
//! ```
//! use meshfield::prelude::*;
//! use nalgebra::Point2;
//!
//! # let positions = vec![
//! #     Point2::new(0.0, 0.0),
//! #     Point2::new(1.0, 0.0),
//! #     Point2::new(0.0, 1.0),
//! # ];
//! # let triangles = vec![[0, 1, 2]];
//! let elevation: MeshInterpolator =
//!     MeshInterpolator::new(&positions, &[120.0, 135.0, 150.0], &triangles).unwrap();
//!
//! // Same mesh, different attribute; vertices, triangles, and the kd-tree
//! // are shared rather than rebuilt
//! let temperature = elevation.with_values(vec![18.5, 17.0, 16.2]).unwrap();
//!
//! let p = (0.2, 0.3);
//! println!("elevation {:.1} m, temperature {:.1} C",
//!     elevation.evaluate(p.0, p.1), temperature.evaluate(p.0, p.1));
//! ```
//!
//! ## Inspecting the Mesh
//!
//! The underlying topology is available for adjacency and geometry queries:
//!
//! ```
//! use meshfield::prelude::*;
//! use nalgebra::Point2;
//!
//! # let positions = vec![
//! #     Point2::new(0.0, 0.0),
//! #     Point2::new(1.0, 0.0),
//! #     Point2::new(0.0, 1.0),
//! # ];
//! # let triangles = vec![[0, 1, 2]];
//! # let values = vec![10.0, 20.0, 30.0];
//! # let field: MeshInterpolator = MeshInterpolator::new(&positions, &values, &triangles).unwrap();
//! let mesh = field.topology();
//! println!("Vertices: {}", mesh.num_vertices());
//! println!("Triangles: {}", mesh.num_triangles());
//!
//! for t in mesh.triangle_ids() {
//!     let area = mesh.triangle_area(t);
//!     let centroid = mesh.triangle_centroid(t);
//!     println!("Triangle {:?}: area={}, centroid={:?}", t, area, centroid);
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod field;
pub mod mesh;

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types and functions:
///
/// ```
/// use meshfield::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{FieldError, Result};
    pub use crate::field::{MeshInterpolator, ScalarField2, NO_COVERAGE_VALUE};
    pub use crate::mesh::{
        build_topology, BarycentricCoords, LocateStrategy, MeshIndex, MeshTopology, Triangle,
        TriangleId, Vertex, VertexId,
    };
}

// Re-export nalgebra types for convenience
pub use nalgebra;
