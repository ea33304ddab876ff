//! Weighted graph storage and the queries that run over it.
//!
//! A [`Graph`] owns one adjacency list per vertex. Edges are only ever added;
//! the shortest-path and spanning-tree queries allocate their own working
//! state and never mutate the graph, so repeated queries on an unchanged
//! graph return identical results.
//!
//! Edge weights are signed, but every query assumes they are non-negative.
//! This is a precondition and is not checked.

mod builder;
mod kruskal;
mod prim;
mod queue;
mod shortest_path;
mod spanning_tree;


pub use self::{
    builder::GraphBuilder,
    shortest_path::ShortestPath,
    spanning_tree::{SpanningTree, TreeEdge},
};

use crate::error::{GraphError, Result};

/// Integer edge weight and path length.
pub type Weight = i64;

/// Distance reported by [`Graph::shortest_path`] when the target cannot be
/// reached. Larger than any attainable path sum.
pub const UNREACHABLE: Weight = Weight::MAX;

/// Whether edges are one-way or mirrored onto both endpoints.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Orientation {
    /// `add_edge(u, v, w)` only lets `u` reach `v`.
    Directed,
    /// `add_edge(u, v, w)` connects `u` and `v` in both directions.
    #[default]
    Undirected,
}

/// An adjacency entry: the vertex an edge leads to and its weight.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Neighbour {
    vertex: usize,
    weight: Weight,
}

impl Neighbour {
    /// Returns the vertex at the far end of the edge.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex(&self) -> usize { self.vertex }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub fn weight(&self) -> Weight { self.weight }
}

/// A weighted graph over the vertices `0..vertex_count`.
///
/// # Examples
/// ```
/// use waygraph_core::{Graph, Orientation};
///
/// let mut graph = Graph::new(4, Orientation::Undirected);
/// graph.add_edge(0, 1, 1)?;
/// graph.add_edge(1, 2, 2)?;
/// graph.add_edge(0, 2, 4)?;
/// graph.add_edge(2, 3, 1)?;
///
/// let route = graph.shortest_path(0, 3)?;
/// assert_eq!(route.distance(), 4);
/// assert_eq!(route.path(), &[0, 1, 2, 3]);
///
/// let tree = graph.minimum_spanning_tree_kruskal();
/// assert!(tree.is_spanning());
/// assert_eq!(tree.total_weight(), 4);
/// # Ok::<(), waygraph_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Graph {
    orientation: Orientation,
    adjacency: Vec<Vec<Neighbour>>,
    edge_count: usize,
}

impl Graph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    #[must_use]
    pub fn new(vertex_count: usize, orientation: Orientation) -> Self {
        Self {
            orientation,
            adjacency: vec![Vec::new(); vertex_count],
            edge_count: 0,
        }
    }

    /// Returns the number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_count(&self) -> usize { self.adjacency.len() }

    /// Returns how many edges have been added. An undirected edge counts
    /// once even though it appears in two adjacency lists.
    #[must_use]
    #[rustfmt::skip]
    pub fn edge_count(&self) -> usize { self.edge_count }

    /// Returns the orientation fixed at construction.
    #[must_use]
    #[rustfmt::skip]
    pub fn orientation(&self) -> Orientation { self.orientation }

    /// Returns `true` for directed graphs.
    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.orientation == Orientation::Directed
    }

    /// Adds an edge from `source` to `target`.
    ///
    /// Undirected graphs also record the mirror edge from `target` to
    /// `source`. Parallel edges are kept as-is and self-loops are allowed.
    ///
    /// # Errors
    /// Returns [`GraphError::IndexOutOfRange`] when either endpoint is not a
    /// vertex of the graph. The graph is left unchanged.
    pub fn add_edge(&mut self, source: usize, target: usize, weight: Weight) -> Result<()> {
        self.check_vertex(source)?;
        self.check_vertex(target)?;

        self.adjacency[source].push(Neighbour {
            vertex: target,
            weight,
        });
        if self.orientation == Orientation::Undirected {
            self.adjacency[target].push(Neighbour {
                vertex: source,
                weight,
            });
        }
        self.edge_count = self.edge_count.saturating_add(1);
        Ok(())
    }

    /// Returns the adjacency list of `vertex` in insertion order.
    ///
    /// # Errors
    /// Returns [`GraphError::IndexOutOfRange`] when `vertex` is not a vertex
    /// of the graph.
    pub fn neighbours(&self, vertex: usize) -> Result<&[Neighbour]> {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .ok_or(GraphError::IndexOutOfRange {
                vertex,
                vertex_count: self.vertex_count(),
            })
    }

    fn check_vertex(&self, vertex: usize) -> Result<()> {
        if vertex < self.vertex_count() {
            Ok(())
        } else {
            Err(GraphError::IndexOutOfRange {
                vertex,
                vertex_count: self.vertex_count(),
            })
        }
    }
}
