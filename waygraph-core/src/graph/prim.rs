//! Prim's minimum spanning tree, grown outward from vertex 0.

use tracing::{debug, instrument};

use super::{Graph, SpanningTree, TreeEdge, queue::MinQueue};

impl Graph {
    /// Builds a minimum spanning tree with Prim's algorithm starting at
    /// vertex 0.
    ///
    /// Candidate edges wait in a min-queue ordered by weight. Candidates
    /// leading to an already visited vertex are discarded when popped rather
    /// than removed in advance. Only the component containing vertex 0 is
    /// spanned, so a disconnected graph yields a result for which
    /// [`SpanningTree::is_spanning`] is `false`. A graph without vertices
    /// yields an empty tree.
    ///
    /// # Examples
    /// ```
    /// use waygraph_core::GraphBuilder;
    ///
    /// let graph = GraphBuilder::new(3)
    ///     .with_edges([(0, 1, 3), (1, 2, 1), (0, 2, 2)])
    ///     .build()?;
    /// let tree = graph.minimum_spanning_tree_prim();
    /// assert!(tree.is_spanning());
    /// assert_eq!(tree.total_weight(), 3);
    /// # Ok::<(), waygraph_core::GraphError>(())
    /// ```
    #[must_use]
    #[instrument(
        name = "graph.prim",
        skip(self),
        fields(vertex_count = self.vertex_count(), directed = self.is_directed()),
    )]
    pub fn minimum_spanning_tree_prim(&self) -> SpanningTree {
        let vertex_count = self.vertex_count();
        let mut tree = SpanningTree::with_capacity(vertex_count);
        if vertex_count == 0 {
            debug!("graph has no vertices, returning empty tree");
            return tree;
        }

        let mut visited = vec![false; vertex_count];
        let mut visited_count = 0_usize;
        // `None` marks the bootstrap entry that seeds the walk at vertex 0.
        let mut queue = MinQueue::new();
        queue.push(0, (None, 0_usize));

        while visited_count < vertex_count {
            let Some((weight, (source, target))) = queue.pop() else {
                break;
            };
            if visited[target] {
                continue;
            }
            visited[target] = true;
            visited_count = visited_count.saturating_add(1);

            for neighbour in &self.adjacency[target] {
                if !visited[neighbour.vertex] {
                    queue.push(neighbour.weight, (Some(target), neighbour.vertex));
                }
            }

            if let Some(from) = source {
                tree.push(TreeEdge::new(from, target, weight));
            }
        }

        debug!(
            edges = tree.edges().len(),
            total_weight = tree.total_weight(),
            spanning = tree.is_spanning(),
            "prim spanning tree built"
        );
        tree
    }
}
