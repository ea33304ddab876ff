//! Result type shared by the Prim and Kruskal queries.

use super::Weight;

/// A single accepted spanning-tree edge.
///
/// Endpoints keep the orientation in which the algorithm discovered the
/// edge; they are not canonicalised.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TreeEdge {
    source: usize,
    target: usize,
    weight: Weight,
}

impl TreeEdge {
    /// Creates an edge record.
    #[must_use]
    pub const fn new(source: usize, target: usize, weight: Weight) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Returns the endpoint the edge was reached from.
    #[must_use]
    #[rustfmt::skip]
    pub fn source(&self) -> usize { self.source }

    /// Returns the endpoint the edge leads to.
    #[must_use]
    #[rustfmt::skip]
    pub fn target(&self) -> usize { self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub fn weight(&self) -> Weight { self.weight }
}

/// The edges selected by a minimum spanning tree query and their total
/// weight.
///
/// When the graph is disconnected the query stops early and the result
/// holds fewer than `vertex_count - 1` edges. Check [`Self::is_spanning`]
/// before treating the result as a full spanning tree.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SpanningTree {
    edges: Vec<TreeEdge>,
    total_weight: Weight,
    vertex_count: usize,
}

impl SpanningTree {
    pub(crate) fn with_capacity(vertex_count: usize) -> Self {
        Self {
            edges: Vec::with_capacity(vertex_count.saturating_sub(1)),
            total_weight: 0,
            vertex_count,
        }
    }

    pub(crate) fn push(&mut self, edge: TreeEdge) {
        self.total_weight = self.total_weight.saturating_add(edge.weight);
        self.edges.push(edge);
    }

    /// Returns the accepted edges in acceptance order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[TreeEdge] { &self.edges }

    /// Returns the sum of the accepted edge weights.
    #[must_use]
    #[rustfmt::skip]
    pub fn total_weight(&self) -> Weight { self.total_weight }

    /// Returns the vertex count of the graph the tree was computed for.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns `true` when the edges span every vertex, that is when exactly
    /// `vertex_count - 1` edges were accepted.
    ///
    /// An empty graph is trivially spanned.
    #[must_use]
    pub fn is_spanning(&self) -> bool {
        self.edges.len() == self.vertex_count.saturating_sub(1)
    }

    /// Consumes the tree and returns its edges.
    #[must_use]
    pub fn into_edges(self) -> Vec<TreeEdge> {
        self.edges
    }
}
