//! Type definitions for graph property-based tests.

use crate::{Graph, GraphBuilder, Orientation, Weight};

/// Shape of a generated graph.
///
/// Each variant stresses a different part of the queries: tie handling,
/// lazy deletion of stale queue entries, or disconnection reporting.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum Topology {
    /// Random spanning tree plus a handful of extra edges. Always connected.
    Sparse,
    /// Close to a complete graph (edge probability 0.7-0.95).
    Dense,
    /// Large groups of edges share one of up to three weights.
    ManyIdentical,
    /// Two to four components with no edges between them.
    Disconnected,
    /// Parallel edges, self-loops, and zero weights on top of a sparse base.
    Multigraph,
}

/// Fixture for graph property tests.
///
/// Holds the raw edge list so failures can be reported and oracles can run
/// without going through [`Graph`].
#[derive(Clone, Debug)]
pub(super) struct GraphFixture {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Orientation used when building the graph.
    pub orientation: Orientation,
    /// Edges in insertion order.
    pub edges: Vec<(usize, usize, Weight)>,
    /// Topology used during generation.
    pub topology: Topology,
}

impl GraphFixture {
    /// Builds the [`Graph`] described by the fixture.
    pub(super) fn build(&self) -> Result<Graph, String> {
        GraphBuilder::new(self.vertex_count)
            .with_orientation(self.orientation)
            .with_edges(self.edges.iter().copied())
            .build()
            .map_err(|err| format!("fixture did not build: {err} ({self})"))
    }
}

impl std::fmt::Display for GraphFixture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "topology={:?}, orientation={:?}, vertices={}, edges={}",
            self.topology,
            self.orientation,
            self.vertex_count,
            self.edges.len(),
        )
    }
}

/// Size bounds for generated fixtures.
#[derive(Clone, Copy, Debug)]
pub(super) struct SizeBounds {
    /// Smallest vertex count to generate.
    pub min_vertices: usize,
    /// Largest vertex count to generate (inclusive).
    pub max_vertices: usize,
}

/// Small graphs that exhaustive oracles can still enumerate.
pub(super) const ORACLE_SIZE: SizeBounds = SizeBounds {
    min_vertices: 2,
    max_vertices: 6,
};

/// Larger graphs checked only for structural invariants.
pub(super) const STRUCTURAL_SIZE: SizeBounds = SizeBounds {
    min_vertices: 8,
    max_vertices: 48,
};
