//! Nearest-neighbor search over mesh vertices.
//!
//! A [`VertexKdTree`] is built once over all vertex positions when the
//! topology is constructed and never modified afterwards. Queries return
//! vertex row indices with true Euclidean distances, closest first.

use std::fmt;
use std::num::NonZero;

use kiddo::{immutable::float::kdtree::ImmutableKdTree, SquaredEuclidean};
use nalgebra::Point2;

/// A vertex returned from a nearest-neighbor query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestVertex {
    /// Row index of the vertex in the mesh's vertex array.
    pub vertex: usize,
    /// Euclidean distance from the query point to the vertex.
    pub distance: f64,
}

/// Immutable kd-tree over vertex positions, keyed by vertex row index.
pub struct VertexKdTree {
    tree: ImmutableKdTree<f64, usize, 2, 32>,
    len: usize,
}

impl VertexKdTree {
    /// Build the tree from vertex positions. Entry `i` is keyed by row `i`.
    pub fn build(positions: &[Point2<f64>]) -> Self {
        let coords: Vec<[f64; 2]> = positions.iter().map(|p| [p.x, p.y]).collect();
        Self {
            tree: ImmutableKdTree::new_from_slice(&coords),
            len: coords.len(),
        }
    }

    /// Get the number of indexed vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check whether the tree is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Find the `k` vertices closest to `(x, y)`, in ascending distance order.
    ///
    /// Returns fewer than `k` entries when the mesh has fewer vertices, and
    /// nothing for `k == 0`.
    pub fn nearest(&self, x: f64, y: f64, k: usize) -> Vec<NearestVertex> {
        let Some(k) = NonZero::new(k) else {
            return Vec::new();
        };

        self.tree
            .nearest_n::<SquaredEuclidean>(&[x, y], k)
            .into_iter()
            .map(|n| NearestVertex {
                vertex: n.item,
                distance: n.distance.sqrt(),
            })
            .collect()
    }
}

impl fmt::Debug for VertexKdTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VertexKdTree").field("len", &self.len).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_positions() -> Vec<Point2<f64>> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(3.0, 4.0),
            Point2::new(0.0, 1.0),
            Point2::new(-2.0, 0.0),
        ]
    }

    #[test]
    fn test_nearest_orders_by_distance() {
        let tree = VertexKdTree::build(&sample_positions());
        let hits = tree.nearest(0.0, 0.0, 4);

        assert_eq!(hits.len(), 4);
        assert_eq!(hits[0].vertex, 0);
        assert_eq!(hits[0].distance, 0.0);
        assert_eq!(hits[1].vertex, 2);
        assert!((hits[1].distance - 1.0).abs() < 1e-12);
        assert_eq!(hits[2].vertex, 3);
        assert!((hits[2].distance - 2.0).abs() < 1e-12);
        assert_eq!(hits[3].vertex, 1);
        assert!((hits[3].distance - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_distances_are_euclidean_not_squared() {
        let tree = VertexKdTree::build(&sample_positions());
        let hits = tree.nearest(0.0, 0.0, 4);

        // Vertex 1 sits at (3, 4), distance 5 (not 25)
        let far = hits.iter().find(|h| h.vertex == 1).unwrap();
        assert!((far.distance - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_k_larger_than_vertex_count_clamps() {
        let tree = VertexKdTree::build(&sample_positions());
        let hits = tree.nearest(0.5, 0.5, 10);

        assert_eq!(hits.len(), 4);
    }

    #[test]
    fn test_k_zero_returns_nothing() {
        let tree = VertexKdTree::build(&sample_positions());
        assert!(tree.nearest(0.0, 0.0, 0).is_empty());
    }

    #[test]
    fn test_len() {
        let tree = VertexKdTree::build(&sample_positions());
        assert_eq!(tree.len(), 4);
        assert!(!tree.is_empty());
    }
}
