//! Staged construction of [`Graph`] instances.
//!
//! The builder collects the vertex count, orientation, and edge list, then
//! validates everything in one [`GraphBuilder::build`] call.

use tracing::instrument;

use crate::error::Result;

use super::{Graph, Orientation, Weight};

/// Configures and constructs [`Graph`] instances.
///
/// # Examples
/// ```
/// use waygraph_core::{GraphBuilder, Orientation};
///
/// let graph = GraphBuilder::new(3)
///     .with_orientation(Orientation::Directed)
///     .with_edge(0, 1, 5)
///     .with_edge(1, 2, 1)
///     .build()
///     .expect("edges reference existing vertices");
/// assert!(graph.is_directed());
/// assert_eq!(graph.edge_count(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GraphBuilder {
    vertex_count: usize,
    orientation: Orientation,
    edges: Vec<(usize, usize, Weight)>,
}

impl GraphBuilder {
    /// Creates a builder for an undirected graph with `vertex_count`
    /// vertices and no edges.
    ///
    /// # Examples
    /// ```
    /// use waygraph_core::{GraphBuilder, Orientation};
    ///
    /// let builder = GraphBuilder::new(4);
    /// assert_eq!(builder.vertex_count(), 4);
    /// assert_eq!(builder.orientation(), Orientation::Undirected);
    /// ```
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            ..Self::default()
        }
    }

    /// Overrides the edge orientation.
    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Stages an edge. Endpoints are validated by [`GraphBuilder::build`].
    #[must_use]
    pub fn with_edge(mut self, source: usize, target: usize, weight: Weight) -> Self {
        self.edges.push((source, target, weight));
        self
    }

    /// Stages every edge yielded by `edges`, in order.
    ///
    /// # Examples
    /// ```
    /// use waygraph_core::GraphBuilder;
    ///
    /// let graph = GraphBuilder::new(3)
    ///     .with_edges([(0, 1, 2), (1, 2, 3)])
    ///     .build()
    ///     .expect("edges are valid");
    /// assert_eq!(graph.edge_count(), 2);
    /// ```
    #[must_use]
    pub fn with_edges(mut self, edges: impl IntoIterator<Item = (usize, usize, Weight)>) -> Self {
        self.edges.extend(edges);
        self
    }

    /// Returns the configured vertex count.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the configured orientation.
    #[must_use]
    #[rustfmt::skip]
    pub fn orientation(&self) -> Orientation { self.orientation }

    /// Validates the staged edges and constructs the [`Graph`].
    ///
    /// # Errors
    /// Returns [`crate::GraphError::IndexOutOfRange`] for the first staged
    /// edge that references a vertex outside `0..vertex_count`.
    ///
    /// # Examples
    /// ```
    /// use waygraph_core::{GraphBuilder, GraphError};
    ///
    /// let err = GraphBuilder::new(2).with_edge(0, 2, 1).build().unwrap_err();
    /// assert_eq!(err, GraphError::IndexOutOfRange { vertex: 2, vertex_count: 2 });
    /// ```
    #[instrument(
        name = "graph.build",
        err,
        skip(self),
        fields(
            vertex_count = self.vertex_count,
            orientation = ?self.orientation,
            edges = self.edges.len(),
        ),
    )]
    pub fn build(self) -> Result<Graph> {
        let mut graph = Graph::new(self.vertex_count, self.orientation);
        for (source, target, weight) in self.edges {
            graph.add_edge(source, target, weight)?;
        }
        Ok(graph)
    }
}
