//! Core mesh data structures and point location.
//!
//! This module provides the immutable triangle-mesh representation that
//! scalar-field interpolation is built on.
//!
//! # Overview
//!
//! The primary type is [`MeshTopology`]: a vertex array, a triangle arena,
//! and a kd-tree over the vertex positions. Triangles hold vertex ids; each
//! vertex holds the ids of the triangles incident to it. There are no
//! pointer cycles, so the whole structure is plain data that can be shared
//! freely across threads.
//!
//! # Index Types
//!
//! Mesh elements are identified by type-safe index wrappers:
//! - [`VertexId`] - Identifies a vertex
//! - [`TriangleId`] - Identifies a triangle
//!
//! These indices are generic over the underlying integer type ([`MeshIndex`]
//! trait), allowing you to choose `u16`, `u32`, or `u64` based on mesh size.
//!
//! # Construction
//!
//! Topologies are built from position and index arrays:
//!
//! ```
//! use meshfield::mesh::{build_topology, MeshTopology};
//! use nalgebra::Point2;
//!
//! let positions = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(0.0, 1.0),
//! ];
//! let triangles = vec![[0, 1, 2]];
//!
//! let topology: MeshTopology = build_topology(&positions, &triangles).unwrap();
//! assert!(topology.triangle_contains(meshfield::mesh::TriangleId::new(0), 0.25, 0.25));
//! ```

mod barycentric;
mod builder;
mod index;
mod locate;
mod spatial;
mod topology;

pub use barycentric::BarycentricCoords;
pub use builder::build_topology;
pub use index::{MeshIndex, TriangleId, VertexId};
pub use locate::{find_triangle_containing, LocateStrategy, NEAREST_CANDIDATES};
pub use spatial::{NearestVertex, VertexKdTree};
pub use topology::{MeshTopology, Triangle, Vertex};
