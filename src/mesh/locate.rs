//! Point location: finding the triangle that contains a query point.
//!
//! Two strategies are provided. [`LocateStrategy::BruteForce`] tests every
//! triangle in storage order. [`LocateStrategy::NearestVertex`] queries the
//! vertex kd-tree and scans the incident-triangle fan of the closest vertex;
//! it is much faster on large meshes but can miss when the containing
//! triangle is not incident to that vertex.
//!
//! Containment is strict everywhere: a point on a triangle edge or at a
//! vertex belongs to no triangle.

use super::index::{MeshIndex, TriangleId, VertexId};
use super::topology::MeshTopology;

/// Number of nearest vertices requested from the kd-tree per query.
pub const NEAREST_CANDIDATES: usize = 10;

/// Strategy for locating the triangle that contains a query point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LocateStrategy {
    /// Query the kd-tree and scan the fan of the single closest vertex.
    ///
    /// Cost per query is the kd-tree lookup plus the fan size. The containing
    /// triangle is found only if it is incident to the closest vertex: a query
    /// deep inside a large triangle whose nearest vertex belongs to a
    /// different fan, or a query just outside the hull, can report no triangle
    /// even though one contains it. Use [`BruteForce`] when a miss cannot be
    /// tolerated.
    ///
    /// [`BruteForce`]: LocateStrategy::BruteForce
    #[default]
    NearestVertex,

    /// Test every triangle in storage order.
    ///
    /// Cost is linear in the triangle count, but a containing triangle is
    /// never missed. When several triangles contain the point (overlapping
    /// input), the first one in storage order wins.
    BruteForce,
}

/// Find a triangle strictly containing `(x, y)` using the given strategy.
///
/// Returns `None` when no triangle contains the point; for
/// [`LocateStrategy::NearestVertex`] this includes the documented misses.
pub fn find_triangle_containing<I: MeshIndex>(
    topology: &MeshTopology<I>,
    x: f64,
    y: f64,
    strategy: LocateStrategy,
) -> Option<TriangleId<I>> {
    match strategy {
        LocateStrategy::NearestVertex => locate_near_vertex(topology, x, y),
        LocateStrategy::BruteForce => locate_brute_force(topology, x, y),
    }
}

fn locate_brute_force<I: MeshIndex>(
    topology: &MeshTopology<I>,
    x: f64,
    y: f64,
) -> Option<TriangleId<I>> {
    topology
        .triangle_ids()
        .find(|&t| topology.triangle_contains(t, x, y))
}

fn locate_near_vertex<I: MeshIndex>(
    topology: &MeshTopology<I>,
    x: f64,
    y: f64,
) -> Option<TriangleId<I>> {
    let candidates = topology.nearest_vertices(x, y, NEAREST_CANDIDATES);
    // Only the closest candidate's fan is consulted
    let closest = candidates.first()?;

    topology
        .vertex_triangles(VertexId::new(closest.vertex))
        .iter()
        .copied()
        .find(|&t| topology.triangle_contains(t, x, y))
}
