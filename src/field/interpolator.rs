//! Barycentric interpolation of vertex samples over a triangle mesh.

use std::sync::Arc;

use nalgebra::Point2;
use rayon::prelude::*;

use crate::error::{FieldError, Result};
use crate::mesh::{
    build_topology, find_triangle_containing, LocateStrategy, MeshIndex, MeshTopology, TriangleId,
};

use super::{ScalarField2, NO_COVERAGE_VALUE};

/// A piecewise-linear scalar field defined by samples at mesh vertices.
///
/// Evaluation locates the triangle containing the query point (see
/// [`LocateStrategy`]) and blends the triangle's three vertex samples with
/// barycentric weights. Points covered by no triangle evaluate to
/// [`NO_COVERAGE_VALUE`]; evaluation never fails.
///
/// The topology is held behind an `Arc` and shared by every interpolator
/// derived through [`with_values`] or [`from_topology`], so binding a new
/// sample array to an existing mesh costs nothing beyond the array itself.
/// A built interpolator is immutable and can be evaluated from many threads
/// at once.
///
/// # Example
/// ```
/// use meshfield::field::MeshInterpolator;
/// use nalgebra::Point2;
///
/// let positions = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(0.0, 1.0),
/// ];
/// let values = vec![10.0, 20.0, 30.0];
/// let triangles = vec![[0, 1, 2]];
///
/// let field: MeshInterpolator = MeshInterpolator::new(&positions, &values, &triangles).unwrap();
/// assert!((field.evaluate(0.25, 0.25) - 17.5).abs() < 1e-12);
/// assert_eq!(field.evaluate(2.0, 2.0), 0.0);
/// ```
///
/// [`with_values`]: MeshInterpolator::with_values
/// [`from_topology`]: MeshInterpolator::from_topology
#[derive(Debug, Clone)]
pub struct MeshInterpolator<I: MeshIndex = u32> {
    topology: Arc<MeshTopology<I>>,
    values: Vec<f64>,
    strategy: LocateStrategy,
}

impl<I: MeshIndex> MeshInterpolator<I> {
    /// Build an interpolator from positions, per-vertex values, and triangle
    /// index triples, using the default locate strategy.
    ///
    /// # Arguments
    /// * `positions` - Vertex positions; the row of a position is its vertex index
    /// * `values` - One sample value per vertex, in vertex order
    /// * `triangles` - Triangles as `[v1, v2, v3]` indices into `positions`
    pub fn new(
        positions: &[Point2<f64>],
        values: &[f64],
        triangles: &[[usize; 3]],
    ) -> Result<Self> {
        Self::with_strategy(positions, values, triangles, LocateStrategy::default())
    }

    /// Build an interpolator with an explicit locate strategy.
    pub fn with_strategy(
        positions: &[Point2<f64>],
        values: &[f64],
        triangles: &[[usize; 3]],
        strategy: LocateStrategy,
    ) -> Result<Self> {
        if values.len() != positions.len() {
            return Err(FieldError::ValueCountMismatch {
                expected: positions.len(),
                actual: values.len(),
            });
        }

        let topology = Arc::new(build_topology(positions, triangles)?);
        Ok(Self {
            topology,
            values: values.to_vec(),
            strategy,
        })
    }

    /// Build an interpolator over an existing, possibly shared, topology.
    ///
    /// This is how several value arrays are bound to one mesh: build the
    /// topology once, wrap it in an `Arc`, and create one interpolator per
    /// attribute.
    pub fn from_topology(
        topology: Arc<MeshTopology<I>>,
        values: Vec<f64>,
        strategy: LocateStrategy,
    ) -> Result<Self> {
        if values.len() != topology.num_vertices() {
            return Err(FieldError::ValueCountMismatch {
                expected: topology.num_vertices(),
                actual: values.len(),
            });
        }

        Ok(Self {
            topology,
            values,
            strategy,
        })
    }

    /// Create a new interpolator over the same topology with a different
    /// value array.
    ///
    /// The vertices, triangles, and kd-tree are shared, not copied; only the
    /// value array is new. The strategy carries over.
    pub fn with_values(&self, values: Vec<f64>) -> Result<Self> {
        Self::from_topology(Arc::clone(&self.topology), values, self.strategy)
    }

    // ==================== Accessors ====================

    /// Get the mesh topology.
    #[inline]
    pub fn topology(&self) -> &MeshTopology<I> {
        &self.topology
    }

    /// Get a handle to the shared topology, for use with
    /// [`from_topology`](MeshInterpolator::from_topology).
    #[inline]
    pub fn shared_topology(&self) -> Arc<MeshTopology<I>> {
        Arc::clone(&self.topology)
    }

    /// Get the per-vertex sample values, in vertex order.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Get the locate strategy used by this interpolator.
    #[inline]
    pub fn strategy(&self) -> LocateStrategy {
        self.strategy
    }

    // ==================== Evaluation ====================

    /// Evaluate the field at `(x, y)`.
    ///
    /// Returns [`NO_COVERAGE_VALUE`] when no triangle strictly contains the
    /// point. Points on triangle edges and vertices count as uncovered.
    pub fn evaluate(&self, x: f64, y: f64) -> f64 {
        self.try_evaluate(x, y).unwrap_or(NO_COVERAGE_VALUE)
    }

    /// Evaluate the field at `(x, y)`, or `None` when the point is covered
    /// by no triangle.
    ///
    /// Unlike [`evaluate`](MeshInterpolator::evaluate), this distinguishes a
    /// genuine field value of `0.0` from a point outside the mesh.
    pub fn try_evaluate(&self, x: f64, y: f64) -> Option<f64> {
        let t = self.find_triangle_containing(x, y)?;
        Some(self.interpolate_in(t, x, y))
    }

    /// Find the triangle strictly containing `(x, y)` under this
    /// interpolator's strategy.
    pub fn find_triangle_containing(&self, x: f64, y: f64) -> Option<TriangleId<I>> {
        find_triangle_containing(&self.topology, x, y, self.strategy)
    }

    fn interpolate_in(&self, t: TriangleId<I>, x: f64, y: f64) -> f64 {
        let [v1, v2, v3] = self.topology.triangle_vertices(t);
        let bary = self.topology.barycentric(t, x, y);
        bary.interpolate(
            self.values[v1.index()],
            self.values[v2.index()],
            self.values[v3.index()],
        )
    }

    /// Evaluate the field at a slice of points.
    pub fn evaluate_batch(&self, points: &[(f64, f64)]) -> Vec<f64> {
        points.iter().map(|&(x, y)| self.evaluate(x, y)).collect()
    }

    /// Evaluate the field at a slice of points in parallel.
    ///
    /// Evaluation touches no shared mutable state, so the points are simply
    /// split across the rayon thread pool.
    pub fn evaluate_batch_parallel(&self, points: &[(f64, f64)]) -> Vec<f64> {
        points
            .par_iter()
            .map(|&(x, y)| self.evaluate(x, y))
            .collect()
    }
}

impl<I: MeshIndex> ScalarField2 for MeshInterpolator<I> {
    fn evaluate(&self, x: f64, y: f64) -> f64 {
        MeshInterpolator::evaluate(self, x, y)
    }
}
