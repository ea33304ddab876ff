//! Seeded synthetic graphs for benchmarks.
//!
//! Every generated graph has a random spanning backbone, so it is connected,
//! plus a configurable number of random extra edges per vertex. The same
//! configuration always yields the same graph.

use rand::{Rng, SeedableRng, rngs::SmallRng};
use thiserror::Error;
use waygraph_core::{Graph, GraphBuilder, GraphError, Orientation, Weight};

/// Shape of a synthetic graph.
#[derive(Clone, Debug)]
pub struct SyntheticConfig {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Random edges added per vertex after the backbone.
    pub extra_edges_per_vertex: usize,
    /// Largest edge weight, inclusive. Weights are drawn from `0..=max_weight`.
    pub max_weight: Weight,
    /// Whether edges are one-way.
    pub orientation: Orientation,
    /// Seed for the random number generator.
    pub seed: u64,
}

/// Errors raised while generating a synthetic graph.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SyntheticError {
    /// The graph must contain at least one vertex.
    #[error("vertex_count must be greater than zero")]
    ZeroVertices,
    /// Edge weights must be non-negative.
    #[error("max_weight must be non-negative, got {max_weight}")]
    NegativeMaxWeight {
        /// The rejected upper bound.
        max_weight: Weight,
    },
    /// The edge count overflowed `usize`.
    #[error("{vertex_count} vertices with {extra_edges_per_vertex} extra edges each overflows")]
    TooManyEdges {
        /// Requested vertex count.
        vertex_count: usize,
        /// Requested extra edges per vertex.
        extra_edges_per_vertex: usize,
    },
    /// Graph construction rejected a generated edge.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Generates the graph described by `config`.
///
/// # Errors
/// Returns [`SyntheticError`] when the configuration is invalid.
///
/// # Examples
/// ```
/// use waygraph_benches::synthetic::{SyntheticConfig, generate};
/// use waygraph_core::Orientation;
///
/// let graph = generate(&SyntheticConfig {
///     vertex_count: 10,
///     extra_edges_per_vertex: 2,
///     max_weight: 100,
///     orientation: Orientation::Undirected,
///     seed: 7,
/// })?;
/// assert_eq!(graph.edge_count(), 9 + 20);
/// assert!(graph.minimum_spanning_tree_kruskal().is_spanning());
/// # Ok::<(), waygraph_benches::synthetic::SyntheticError>(())
/// ```
pub fn generate(config: &SyntheticConfig) -> Result<Graph, SyntheticError> {
    let extra_edges = validate(config)?;
    let mut rng = SmallRng::seed_from_u64(config.seed);
    let vertex_count = config.vertex_count;

    let mut edges = Vec::with_capacity(vertex_count.saturating_add(extra_edges));
    for vertex in 1..vertex_count {
        let parent = rng.gen_range(0..vertex);
        let weight = rng.gen_range(0..=config.max_weight);
        // Directed backbones point away from vertex 0 so every vertex is
        // reachable from it.
        edges.push((parent, vertex, weight));
    }
    for _ in 0..extra_edges {
        let source = rng.gen_range(0..vertex_count);
        let target = rng.gen_range(0..vertex_count);
        let weight = rng.gen_range(0..=config.max_weight);
        edges.push((source, target, weight));
    }

    Ok(GraphBuilder::new(vertex_count)
        .with_orientation(config.orientation)
        .with_edges(edges)
        .build()?)
}

fn validate(config: &SyntheticConfig) -> Result<usize, SyntheticError> {
    if config.vertex_count == 0 {
        return Err(SyntheticError::ZeroVertices);
    }
    if config.max_weight < 0 {
        return Err(SyntheticError::NegativeMaxWeight {
            max_weight: config.max_weight,
        });
    }
    config
        .vertex_count
        .checked_mul(config.extra_edges_per_vertex)
        .ok_or(SyntheticError::TooManyEdges {
            vertex_count: config.vertex_count,
            extra_edges_per_vertex: config.extra_edges_per_vertex,
        })
}
