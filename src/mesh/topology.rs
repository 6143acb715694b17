//! Triangle mesh topology.
//!
//! This module provides the immutable mesh representation used for
//! scalar-field interpolation. Triangles live in an arena addressed by
//! [`TriangleId`]; each vertex keeps the list of triangles that reference
//! it (its fan), so point location can walk from a vertex to its incident
//! triangles without pointer cycles.
//!
//! # Immutability
//!
//! A [`MeshTopology`] is built once by [`build_topology`] and never modified
//! afterwards. Interpolators share one topology through an `Arc`, which is
//! what makes rebinding a new value array cheap.
//!
//! [`build_topology`]: crate::mesh::build_topology

use nalgebra::Point2;

use super::barycentric::BarycentricCoords;
use super::index::{MeshIndex, TriangleId, VertexId};
use super::spatial::{NearestVertex, VertexKdTree};

/// A vertex in the mesh.
#[derive(Debug, Clone)]
pub struct Vertex<I: MeshIndex = u32> {
    /// The 2D position of this vertex.
    pub position: Point2<f64>,

    /// Triangles that reference this vertex, in construction order.
    pub triangles: Vec<TriangleId<I>>,
}

impl<I: MeshIndex> Vertex<I> {
    /// Create a new vertex at the given position, with no incident triangles.
    pub fn new(position: Point2<f64>) -> Self {
        Self {
            position,
            triangles: Vec::new(),
        }
    }

    /// Create a new vertex from coordinates.
    pub fn from_coords(x: f64, y: f64) -> Self {
        Self::new(Point2::new(x, y))
    }
}

/// A triangle in the mesh.
#[derive(Debug, Clone, Copy)]
pub struct Triangle<I: MeshIndex = u32> {
    /// The three corner vertices, in the order given at construction.
    pub vertices: [VertexId<I>; 3],
}

impl<I: MeshIndex> Triangle<I> {
    /// Create a new triangle from three vertex ids.
    pub fn new(vertices: [VertexId<I>; 3]) -> Self {
        Self { vertices }
    }
}

/// An immutable triangle mesh: vertices, triangles, and a kd-tree over the
/// vertex positions.
///
/// Vertex and triangle ids are row positions in the underlying arrays, so
/// they match the order of the construction input.
#[derive(Debug)]
pub struct MeshTopology<I: MeshIndex = u32> {
    /// All vertices in the mesh.
    pub(crate) vertices: Vec<Vertex<I>>,

    /// All triangles in the mesh.
    pub(crate) triangles: Vec<Triangle<I>>,

    /// Nearest-neighbor index over the vertex positions.
    pub(crate) kdtree: VertexKdTree,
}

impl<I: MeshIndex> MeshTopology<I> {
    // ==================== Accessors ====================

    /// Get the number of vertices.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of triangles.
    #[inline]
    pub fn num_triangles(&self) -> usize {
        self.triangles.len()
    }

    /// Get a vertex by ID.
    #[inline]
    pub fn vertex(&self, id: VertexId<I>) -> &Vertex<I> {
        &self.vertices[id.index()]
    }

    /// Get a triangle by ID.
    #[inline]
    pub fn triangle(&self, id: TriangleId<I>) -> &Triangle<I> {
        &self.triangles[id.index()]
    }

    /// Get the position of a vertex.
    #[inline]
    pub fn position(&self, v: VertexId<I>) -> &Point2<f64> {
        &self.vertex(v).position
    }

    /// Get the triangles incident to a vertex, in construction order.
    #[inline]
    pub fn vertex_triangles(&self, v: VertexId<I>) -> &[TriangleId<I>] {
        &self.vertex(v).triangles
    }

    /// Get the three vertices of a triangle.
    #[inline]
    pub fn triangle_vertices(&self, t: TriangleId<I>) -> [VertexId<I>; 3] {
        self.triangle(t).vertices
    }

    /// Get the positions of the three vertices of a triangle.
    pub fn triangle_positions(&self, t: TriangleId<I>) -> [Point2<f64>; 3] {
        let [v1, v2, v3] = self.triangle_vertices(t);
        [*self.position(v1), *self.position(v2), *self.position(v3)]
    }

    // ==================== Iteration ====================

    /// Iterate over all vertex IDs.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId<I>> + '_ {
        (0..self.vertices.len()).map(|i| VertexId::new(i))
    }

    /// Iterate over all vertices with their IDs.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexId<I>, &Vertex<I>)> + '_ {
        self.vertices
            .iter()
            .enumerate()
            .map(|(i, v)| (VertexId::new(i), v))
    }

    /// Iterate over all triangle IDs.
    pub fn triangle_ids(&self) -> impl Iterator<Item = TriangleId<I>> + '_ {
        (0..self.triangles.len()).map(|i| TriangleId::new(i))
    }

    /// Iterate over all triangles with their IDs.
    pub fn triangles(&self) -> impl Iterator<Item = (TriangleId<I>, &Triangle<I>)> + '_ {
        self.triangles
            .iter()
            .enumerate()
            .map(|(i, t)| (TriangleId::new(i), t))
    }

    // ==================== Geometry ====================

    /// Compute the barycentric coordinates of `(x, y)` in a triangle.
    pub fn barycentric(&self, t: TriangleId<I>, x: f64, y: f64) -> BarycentricCoords {
        let [p1, p2, p3] = self.triangle_positions(t);
        BarycentricCoords::from_points(&p1, &p2, &p3, &Point2::new(x, y))
    }

    /// Check whether `(x, y)` lies strictly inside a triangle.
    ///
    /// Points on an edge or at a corner are classified as outside, as are
    /// all points when the triangle is degenerate.
    pub fn triangle_contains(&self, t: TriangleId<I>, x: f64, y: f64) -> bool {
        self.barycentric(t, x, y).is_strictly_inside()
    }

    /// Compute the area of a triangle.
    pub fn triangle_area(&self, t: TriangleId<I>) -> f64 {
        let [p1, p2, p3] = self.triangle_positions(t);
        let e1 = p2 - p1;
        let e2 = p3 - p1;
        0.5 * e1.perp(&e2).abs()
    }

    /// Compute the centroid of a triangle.
    pub fn triangle_centroid(&self, t: TriangleId<I>) -> Point2<f64> {
        let [p1, p2, p3] = self.triangle_positions(t);
        Point2::from((p1.coords + p2.coords + p3.coords) / 3.0)
    }

    /// Compute the bounding box of the mesh.
    pub fn bounding_box(&self) -> Option<(Point2<f64>, Point2<f64>)> {
        if self.vertices.is_empty() {
            return None;
        }

        let mut min = self.vertices[0].position;
        let mut max = self.vertices[0].position;

        for v in &self.vertices {
            for i in 0..2 {
                min[i] = min[i].min(v.position[i]);
                max[i] = max[i].max(v.position[i]);
            }
        }

        Some((min, max))
    }

    // ==================== Spatial Queries ====================

    /// Find the `k` vertices closest to `(x, y)`, in ascending distance order.
    pub fn nearest_vertices(&self, x: f64, y: f64, k: usize) -> Vec<NearestVertex> {
        self.kdtree.nearest(x, y, k)
    }

    // ==================== Validation ====================

    /// Check that vertex/triangle cross-references are consistent.
    pub fn is_valid(&self) -> bool {
        // Every triangle corner is in range and listed in that vertex's fan
        for (tid, tri) in self.triangles() {
            for v in tri.vertices {
                if v.index() >= self.vertices.len() {
                    return false;
                }
                if !self.vertex(v).triangles.contains(&tid) {
                    return false;
                }
            }
        }

        // Every fan entry points back at a triangle that uses the vertex
        for (vid, vertex) in self.vertices() {
            for &t in &vertex.triangles {
                if t.index() >= self.triangles.len() {
                    return false;
                }
                if !self.triangle(t).vertices.contains(&vid) {
                    return false;
                }
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::build_topology;

    fn split_square() -> MeshTopology<u32> {
        // Unit square split along the (0,0)-(1,1) diagonal
        let positions = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ];
        let triangles = vec![[0, 1, 2], [0, 2, 3]];
        build_topology(&positions, &triangles).unwrap()
    }

    #[test]
    fn test_counts_and_corner_order() {
        let topo = split_square();
        assert_eq!(topo.num_vertices(), 4);
        assert_eq!(topo.num_triangles(), 2);

        // Corner order matches the construction input
        let [v1, v2, v3] = topo.triangle_vertices(TriangleId::new(1));
        assert_eq!([v1.index(), v2.index(), v3.index()], [0, 2, 3]);
    }

    #[test]
    fn test_fan_contents_and_order() {
        let topo = split_square();
        let t0 = TriangleId::<u32>::new(0);
        let t1 = TriangleId::<u32>::new(1);

        // Vertices 0 and 2 are shared by both triangles, fans in build order
        assert_eq!(topo.vertex_triangles(VertexId::new(0)), &[t0, t1]);
        assert_eq!(topo.vertex_triangles(VertexId::new(2)), &[t0, t1]);
        assert_eq!(topo.vertex_triangles(VertexId::new(1)), &[t0]);
        assert_eq!(topo.vertex_triangles(VertexId::new(3)), &[t1]);
    }

    #[test]
    fn test_triangle_contains_is_strict() {
        let topo = split_square();
        let t0 = TriangleId::<u32>::new(0);

        assert!(topo.triangle_contains(t0, 0.6, 0.2));
        // The shared diagonal belongs to neither triangle
        assert!(!topo.triangle_contains(t0, 0.5, 0.5));
        assert!(!topo.triangle_contains(TriangleId::new(1), 0.5, 0.5));
        // Corners are outside
        assert!(!topo.triangle_contains(t0, 0.0, 0.0));
    }

    #[test]
    fn test_triangle_area_and_centroid() {
        let topo = split_square();
        let t0 = TriangleId::<u32>::new(0);

        assert!((topo.triangle_area(t0) - 0.5).abs() < 1e-12);

        let c = topo.triangle_centroid(t0);
        assert!((c.x - 2.0 / 3.0).abs() < 1e-12);
        assert!((c.y - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_bounding_box() {
        let topo = split_square();
        let (min, max) = topo.bounding_box().unwrap();

        assert_eq!(min, Point2::new(0.0, 0.0));
        assert_eq!(max, Point2::new(1.0, 1.0));
    }

    #[test]
    fn test_nearest_vertices_from_topology() {
        let topo = split_square();
        let hits = topo.nearest_vertices(0.1, 0.1, 2);

        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].vertex, 0);
        assert!(hits[0].distance < hits[1].distance);
    }

    #[test]
    fn test_is_valid() {
        let topo = split_square();
        assert!(topo.is_valid());
    }
}
