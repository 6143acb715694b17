//! Error types for meshfield.
//!
//! This module defines all error types used throughout the library.
//! Errors occur only while building a topology or binding sample values;
//! field evaluation itself never fails (queries outside the mesh return
//! the no-coverage value instead).

use thiserror::Error;

/// Result type alias using [`FieldError`].
pub type Result<T> = std::result::Result<T, FieldError>;

/// Errors that can occur while building a mesh or binding sample values.
#[derive(Error, Debug)]
pub enum FieldError {
    /// The mesh has no vertices.
    #[error("mesh has no vertices")]
    NoVertices,

    /// The mesh has no triangles.
    #[error("mesh has no triangles")]
    NoTriangles,

    /// A triangle references a vertex index outside the vertex array.
    #[error("triangle {triangle} references invalid vertex index {vertex}")]
    InvalidVertexIndex {
        /// The triangle index.
        triangle: usize,
        /// The invalid vertex index.
        vertex: usize,
    },

    /// A triangle lists the same vertex more than once.
    #[error("triangle {triangle} is degenerate (has duplicate vertices)")]
    DegenerateTriangle {
        /// The triangle index.
        triangle: usize,
    },

    /// The sample value array does not have one entry per vertex.
    #[error("expected {expected} sample values (one per vertex), got {actual}")]
    ValueCountMismatch {
        /// The vertex count.
        expected: usize,
        /// The number of values supplied.
        actual: usize,
    },
}
