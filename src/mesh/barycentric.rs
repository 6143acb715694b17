//! Barycentric coordinates on 2D triangles.
//!
//! Barycentric coordinates express a query point as a weighted combination
//! of a triangle's three corners. They serve double duty here: the signs of
//! the weights decide containment, and the weights themselves blend the
//! per-vertex samples during interpolation.

use nalgebra::Point2;

/// Barycentric coordinates of a query point with respect to a triangle.
///
/// For a triangle with corners `p1`, `p2`, `p3` and a query point `q`, the
/// weights satisfy `alpha + beta + gamma = 1` and
/// `q = alpha * p1 + beta * p2 + gamma * p3`. All three weights are strictly
/// positive exactly when `q` lies strictly inside the triangle; points on an
/// edge or at a corner produce a zero weight.
///
/// For a degenerate (zero-area) triangle the denominator vanishes and the
/// weights are non-finite. [`is_strictly_inside`] returns `false` for
/// non-finite weights, so callers that gate on it never blend with them.
///
/// [`is_strictly_inside`]: BarycentricCoords::is_strictly_inside
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarycentricCoords {
    /// Weight of the first triangle corner.
    pub alpha: f64,
    /// Weight of the second triangle corner.
    pub beta: f64,
    /// Weight of the third triangle corner.
    pub gamma: f64,
}

impl BarycentricCoords {
    /// Compute the barycentric coordinates of `q` in the triangle
    /// (`p1`, `p2`, `p3`).
    pub fn from_points(
        p1: &Point2<f64>,
        p2: &Point2<f64>,
        p3: &Point2<f64>,
        q: &Point2<f64>,
    ) -> Self {
        let d = (p2.y - p3.y) * (p1.x - p3.x) + (p3.x - p2.x) * (p1.y - p3.y);
        let alpha = ((p2.y - p3.y) * (q.x - p3.x) + (p3.x - p2.x) * (q.y - p3.y)) / d;
        let beta = ((p3.y - p1.y) * (q.x - p3.x) + (p1.x - p3.x) * (q.y - p3.y)) / d;
        let gamma = 1.0 - alpha - beta;

        Self { alpha, beta, gamma }
    }

    /// Check whether the query point lies strictly inside the triangle.
    ///
    /// Points on an edge or at a corner have a zero weight and are classified
    /// as outside. Non-finite weights (degenerate triangle) also fail.
    #[inline]
    pub fn is_strictly_inside(&self) -> bool {
        self.alpha > 0.0 && self.beta > 0.0 && self.gamma > 0.0
    }

    /// Blend three per-corner samples with these weights.
    #[inline]
    pub fn interpolate(&self, f1: f64, f2: f64, f3: f64) -> f64 {
        self.alpha * f1 + self.beta * f2 + self.gamma * f3
    }
}
