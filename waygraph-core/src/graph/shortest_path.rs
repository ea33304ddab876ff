//! Single-pair shortest paths with Dijkstra's algorithm.

use tracing::{debug, instrument};

use crate::error::Result;

use super::{Graph, UNREACHABLE, Weight, queue::MinQueue};

/// Outcome of a [`Graph::shortest_path`] query.
///
/// An unreachable target is a normal outcome rather than an error: the
/// distance is [`UNREACHABLE`] and the path is empty.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ShortestPath {
    distance: Weight,
    path: Vec<usize>,
}

impl ShortestPath {
    const fn unreachable() -> Self {
        Self {
            distance: UNREACHABLE,
            path: Vec::new(),
        }
    }

    /// Returns the summed weight of the path, or [`UNREACHABLE`].
    #[must_use]
    #[rustfmt::skip]
    pub fn distance(&self) -> Weight { self.distance }

    /// Returns the vertices from start to end inclusive. Empty when the end
    /// is unreachable.
    #[must_use]
    #[rustfmt::skip]
    pub fn path(&self) -> &[usize] { &self.path }

    /// Returns `true` when a path was found.
    #[must_use]
    pub fn is_reachable(&self) -> bool {
        !self.path.is_empty()
    }

    /// Consumes the result and returns the vertex path.
    #[must_use]
    pub fn into_path(self) -> Vec<usize> {
        self.path
    }
}

impl Graph {
    /// Finds a minimum-weight path from `start` to `end`.
    ///
    /// The search stops as soon as `end` leaves the queue, which is only
    /// sound because weights are non-negative. Queue entries superseded by a
    /// shorter distance are skipped when popped.
    ///
    /// # Errors
    /// Returns [`crate::GraphError::IndexOutOfRange`] when `start` or `end`
    /// is not a vertex of the graph.
    ///
    /// # Examples
    /// ```
    /// use waygraph_core::{GraphBuilder, UNREACHABLE};
    ///
    /// let graph = GraphBuilder::new(3).with_edge(0, 1, 5).build()?;
    /// let route = graph.shortest_path(0, 2)?;
    /// assert!(!route.is_reachable());
    /// assert_eq!(route.distance(), UNREACHABLE);
    /// assert!(route.path().is_empty());
    /// # Ok::<(), waygraph_core::GraphError>(())
    /// ```
    #[instrument(
        name = "graph.shortest_path",
        err,
        skip(self),
        fields(vertex_count = self.vertex_count()),
    )]
    pub fn shortest_path(&self, start: usize, end: usize) -> Result<ShortestPath> {
        self.check_vertex(start)?;
        self.check_vertex(end)?;

        let vertex_count = self.vertex_count();
        let mut distance = vec![UNREACHABLE; vertex_count];
        let mut predecessor: Vec<Option<usize>> = vec![None; vertex_count];
        let mut queue = MinQueue::new();
        distance[start] = 0;
        queue.push(0, start);

        while let Some((reached, vertex)) = queue.pop() {
            if vertex == end {
                let path = trace_back(&predecessor, start, end);
                debug!(
                    distance = reached,
                    hops = path.len().saturating_sub(1),
                    "shortest path found"
                );
                return Ok(ShortestPath {
                    distance: reached,
                    path,
                });
            }

            if reached > distance[vertex] {
                continue;
            }

            for neighbour in &self.adjacency[vertex] {
                let candidate = reached.saturating_add(neighbour.weight);
                if candidate < distance[neighbour.vertex] {
                    distance[neighbour.vertex] = candidate;
                    predecessor[neighbour.vertex] = Some(vertex);
                    queue.push(candidate, neighbour.vertex);
                }
            }
        }

        debug!("end vertex is unreachable from start");
        Ok(ShortestPath::unreachable())
    }
}

fn trace_back(predecessor: &[Option<usize>], start: usize, end: usize) -> Vec<usize> {
    let mut path = vec![end];
    let mut current = end;
    while current != start {
        let Some(previous) = predecessor[current] else {
            break;
        };
        path.push(previous);
        current = previous;
    }
    path.reverse();
    path
}
