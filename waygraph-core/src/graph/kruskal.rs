//! Kruskal's minimum spanning tree over the sorted global edge list.

use tracing::{debug, instrument};

use crate::DisjointSet;

use super::{Graph, SpanningTree, TreeEdge};

impl Graph {
    /// Builds a minimum spanning tree with Kruskal's algorithm.
    ///
    /// Every adjacency entry becomes a candidate, so each undirected edge is
    /// considered twice. The second copy is rejected by the disjoint set
    /// because its endpoints are already joined. Candidates are stably
    /// sorted by weight, so equal weights keep adjacency order and the
    /// output is deterministic.
    ///
    /// Disconnected graphs yield a spanning forest for which
    /// [`SpanningTree::is_spanning`] is `false`.
    ///
    /// # Examples
    /// ```
    /// use waygraph_core::GraphBuilder;
    ///
    /// let graph = GraphBuilder::new(3).with_edge(0, 1, 5).build()?;
    /// let forest = graph.minimum_spanning_tree_kruskal();
    /// assert_eq!(forest.edges().len(), 1);
    /// assert!(!forest.is_spanning());
    /// # Ok::<(), waygraph_core::GraphError>(())
    /// ```
    #[must_use]
    #[instrument(
        name = "graph.kruskal",
        skip(self),
        fields(vertex_count = self.vertex_count(), directed = self.is_directed()),
    )]
    pub fn minimum_spanning_tree_kruskal(&self) -> SpanningTree {
        let vertex_count = self.vertex_count();
        let wanted = vertex_count.saturating_sub(1);
        let mut tree = SpanningTree::with_capacity(vertex_count);

        let candidates = self.sorted_candidates();
        let mut sets = DisjointSet::new(vertex_count);
        for edge in candidates {
            if tree.edges().len() >= wanted {
                break;
            }
            if sets.link(edge.source(), edge.target()) {
                tree.push(edge);
            }
        }

        debug!(
            edges = tree.edges().len(),
            total_weight = tree.total_weight(),
            spanning = tree.is_spanning(),
            components = sets.set_count(),
            "kruskal spanning tree built"
        );
        tree
    }

    fn sorted_candidates(&self) -> Vec<TreeEdge> {
        let mut candidates: Vec<TreeEdge> = self
            .adjacency
            .iter()
            .enumerate()
            .flat_map(|(source, neighbours)| {
                neighbours
                    .iter()
                    .map(move |neighbour| TreeEdge::new(source, neighbour.vertex, neighbour.weight))
            })
            .collect();
        candidates.sort_by_key(TreeEdge::weight);
        candidates
    }
}
