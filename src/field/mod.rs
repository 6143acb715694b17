//! Scalar fields over the 2D plane.
//!
//! A scalar field maps a query point `(x, y)` to an `f64`. The central
//! implementation is [`MeshInterpolator`], which interpolates per-vertex
//! samples across a triangle mesh; the [`ScalarField2`] trait lets callers
//! treat interpolators, closures, and analytic functions uniformly.

mod interpolator;

pub use interpolator::MeshInterpolator;

/// Value returned when a query point is covered by no triangle.
///
/// Note that an interpolated field can legitimately take this value inside
/// the mesh as well; use [`MeshInterpolator::try_evaluate`] to tell the two
/// apart.
pub const NO_COVERAGE_VALUE: f64 = 0.0;

/// A scalar field over 2D space.
pub trait ScalarField2 {
    /// Evaluate the field at `(x, y)`.
    fn evaluate(&self, x: f64, y: f64) -> f64;
}

/// Any plain function of `(x, y)` is a scalar field. Handy for analytic
/// reference fields in tests and for composing with interpolated ones.
impl<F> ScalarField2 for F
where
    F: Fn(f64, f64) -> f64,
{
    fn evaluate(&self, x: f64, y: f64) -> f64 {
        self(x, y)
    }
}
