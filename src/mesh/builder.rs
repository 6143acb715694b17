//! Mesh topology construction.
//!
//! This module builds a [`MeshTopology`] from a vertex position array and
//! triangle index triples, the layout produced by most triangulators. All
//! validation happens up front: a failed build returns an error before any
//! topology has been assembled.

use nalgebra::Point2;

use super::index::{MeshIndex, TriangleId, VertexId};
use super::spatial::VertexKdTree;
use super::topology::{MeshTopology, Triangle, Vertex};
use crate::error::{FieldError, Result};

/// Build a mesh topology from vertex positions and triangle index triples.
///
/// Each triangle is validated before anything is assembled: an index outside
/// the vertex array or a repeated index within one triple fails the build
/// with an error naming the offending triangle. Collinear (zero-area)
/// triangles are accepted as given.
///
/// On success, every triangle id has been appended to the fan of each of its
/// three vertices, in triangle order, and the vertex kd-tree has been built.
///
/// # Arguments
/// * `positions` - Vertex positions; the row of a position is its vertex index
/// * `triangles` - Triangles as `[v1, v2, v3]` indices into `positions`
///
/// # Example
/// ```
/// use meshfield::mesh::{build_topology, MeshTopology};
/// use nalgebra::Point2;
///
/// let positions = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(0.0, 1.0),
/// ];
/// let triangles = vec![[0, 1, 2]];
///
/// let topology: MeshTopology = build_topology(&positions, &triangles).unwrap();
/// assert_eq!(topology.num_vertices(), 3);
/// assert_eq!(topology.num_triangles(), 1);
/// ```
pub fn build_topology<I: MeshIndex>(
    positions: &[Point2<f64>],
    triangles: &[[usize; 3]],
) -> Result<MeshTopology<I>> {
    if positions.is_empty() {
        return Err(FieldError::NoVertices);
    }
    if triangles.is_empty() {
        return Err(FieldError::NoTriangles);
    }

    // Validate triangle indices
    for (ti, tri) in triangles.iter().enumerate() {
        for &vi in tri {
            if vi >= positions.len() {
                return Err(FieldError::InvalidVertexIndex {
                    triangle: ti,
                    vertex: vi,
                });
            }
        }
        if tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2] {
            return Err(FieldError::DegenerateTriangle { triangle: ti });
        }
    }

    let mut vertices: Vec<Vertex<I>> = positions.iter().map(|&p| Vertex::new(p)).collect();

    let mut tris: Vec<Triangle<I>> = Vec::with_capacity(triangles.len());
    for (ti, tri) in triangles.iter().enumerate() {
        let tid = TriangleId::<I>::new(ti);
        tris.push(Triangle::new([
            VertexId::new(tri[0]),
            VertexId::new(tri[1]),
            VertexId::new(tri[2]),
        ]));

        for &vi in tri {
            vertices[vi].triangles.push(tid);
        }
    }

    let kdtree = VertexKdTree::build(positions);

    Ok(MeshTopology {
        vertices,
        triangles: tris,
        kdtree,
    })
}
