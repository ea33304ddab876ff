//! Strategy builders for graph property-based tests.
//!
//! Each generator draws from a seeded [`SmallRng`] so that a failing case can
//! be replayed from its topology and seed alone.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{Orientation, Weight};

use super::types::{GraphFixture, SizeBounds, Topology};

/// Exclusive upper bound for generated weights.
const MAX_WEIGHT: Weight = 100;

/// Generates undirected fixtures of the given size across all topologies.
pub(super) fn undirected_fixture_strategy(
    bounds: SizeBounds,
) -> impl Strategy<Value = GraphFixture> {
    (topology_strategy(), any::<u64>()).prop_map(move |(topology, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(topology, Orientation::Undirected, bounds, &mut rng)
    })
}

/// Generates fixtures of either orientation, for shortest-path properties.
pub(super) fn any_fixture_strategy(bounds: SizeBounds) -> impl Strategy<Value = GraphFixture> {
    (topology_strategy(), any::<bool>(), any::<u64>()).prop_map(
        move |(topology, directed, seed)| {
            let orientation = if directed {
                Orientation::Directed
            } else {
                Orientation::Undirected
            };
            let mut rng = SmallRng::seed_from_u64(seed);
            generate_fixture(topology, orientation, bounds, &mut rng)
        },
    )
}

/// Generates a fixture for a specific topology.
///
/// Useful for rstest cases where the topology is chosen explicitly rather
/// than sampled by proptest.
pub(super) fn generate_fixture(
    topology: Topology,
    orientation: Orientation,
    bounds: SizeBounds,
    rng: &mut SmallRng,
) -> GraphFixture {
    let vertex_count = rng.gen_range(bounds.min_vertices..=bounds.max_vertices);
    let mut builder = EdgeBuilder::default();
    match topology {
        Topology::Sparse => {
            builder.spanning_tree(0, vertex_count, rng, random_weight);
            builder.random_extras(0, vertex_count, vertex_count / 2, rng, random_weight);
        }
        Topology::Dense => {
            let probability = rng.gen_range(0.7..=0.95);
            builder.probabilistic(0, vertex_count, probability, rng, random_weight);
            builder.spanning_tree(0, vertex_count, rng, random_weight);
        }
        Topology::ManyIdentical => {
            let pool_size = rng.gen_range(1..=3);
            let pool: Vec<Weight> = (0..pool_size).map(|_| rng.gen_range(1..=10)).collect();
            let mut pooled = |r: &mut SmallRng| pool[r.gen_range(0..pool.len())];
            let probability = rng.gen_range(0.3..=0.7);
            builder.probabilistic(0, vertex_count, probability, rng, &mut pooled);
            builder.spanning_tree(0, vertex_count, rng, &mut pooled);
        }
        Topology::Disconnected => {
            for (offset, size) in split_into_components(vertex_count, rng) {
                builder.spanning_tree(offset, size, rng, random_weight);
                builder.random_extras(offset, size, size / 2, rng, random_weight);
            }
        }
        Topology::Multigraph => {
            builder.spanning_tree(0, vertex_count, rng, random_weight);
            builder.multigraph_extras(vertex_count, rng);
        }
    }

    GraphFixture {
        vertex_count,
        orientation,
        edges: builder.edges,
        topology,
    }
}

fn random_weight(rng: &mut SmallRng) -> Weight {
    rng.gen_range(0..MAX_WEIGHT)
}

/// Splits `0..vertex_count` into two to four contiguous, non-empty blocks.
fn split_into_components(vertex_count: usize, rng: &mut SmallRng) -> Vec<(usize, usize)> {
    let max_components = vertex_count.clamp(1, 4);
    let components = rng.gen_range(max_components.min(2)..=max_components);

    let mut cuts: Vec<usize> = (1..vertex_count).collect();
    shuffle(&mut cuts, rng);
    cuts.truncate(components.saturating_sub(1));
    cuts.sort_unstable();

    let mut blocks = Vec::with_capacity(components);
    let mut start = 0;
    for cut in cuts.into_iter().chain(std::iter::once(vertex_count)) {
        blocks.push((start, cut - start));
        start = cut;
    }
    blocks
}

/// Accumulates edges in insertion order.
#[derive(Default)]
struct EdgeBuilder {
    edges: Vec<(usize, usize, Weight)>,
}

impl EdgeBuilder {
    /// Connects `offset..offset + size` with a random spanning tree built
    /// from a shuffled walk.
    fn spanning_tree(
        &mut self,
        offset: usize,
        size: usize,
        rng: &mut SmallRng,
        mut weight: impl FnMut(&mut SmallRng) -> Weight,
    ) {
        let mut order: Vec<usize> = (offset..offset + size).collect();
        shuffle(&mut order, rng);
        for pair in order.windows(2) {
            let w = weight(rng);
            self.edges.push((pair[0], pair[1], w));
        }
    }

    /// Adds an edge between every pair in the block with the given
    /// probability.
    fn probabilistic(
        &mut self,
        offset: usize,
        size: usize,
        probability: f64,
        rng: &mut SmallRng,
        mut weight: impl FnMut(&mut SmallRng) -> Weight,
    ) {
        for i in offset..offset + size {
            for j in (i + 1)..offset + size {
                if rng.gen_bool(probability) {
                    let w = weight(rng);
                    self.edges.push((i, j, w));
                }
            }
        }
    }

    /// Adds up to `count` random edges between distinct block members.
    fn random_extras(
        &mut self,
        offset: usize,
        size: usize,
        count: usize,
        rng: &mut SmallRng,
        mut weight: impl FnMut(&mut SmallRng) -> Weight,
    ) {
        if size < 2 {
            return;
        }
        for _ in 0..count {
            let i = offset + rng.gen_range(0..size);
            let j = offset + rng.gen_range(0..size);
            if i != j {
                let w = weight(rng);
                self.edges.push((i, j, w));
            }
        }
    }

    /// Duplicates some existing edges with new weights and sprinkles in
    /// self-loops and zero-weight edges.
    fn multigraph_extras(&mut self, vertex_count: usize, rng: &mut SmallRng) {
        let base = self.edges.clone();
        for &(source, target, _) in &base {
            if rng.gen_bool(0.5) {
                let w = random_weight(rng);
                self.edges.push((target, source, w));
            }
        }
        for _ in 0..rng.gen_range(1..=3) {
            let vertex = rng.gen_range(0..vertex_count);
            let w = random_weight(rng);
            self.edges.push((vertex, vertex, w));
        }
        if vertex_count >= 2 {
            let i = rng.gen_range(0..vertex_count);
            let j = rng.gen_range(0..vertex_count);
            self.edges.push((i, j, 0));
        }
    }
}

/// Fisher-Yates shuffle using the provided RNG.
fn shuffle(slice: &mut [usize], rng: &mut SmallRng) {
    for i in (1..slice.len()).rev() {
        let j = rng.gen_range(0..=i);
        slice.swap(i, j);
    }
}

/// Samples a topology, biased towards the tie-heavy and multigraph shapes
/// that exercise stale queue entries and duplicate candidate edges the most.
pub(super) fn topology_strategy() -> impl Strategy<Value = Topology> {
    prop_oneof![
        2 => Just(Topology::Sparse),
        2 => Just(Topology::Dense),
        3 => Just(Topology::ManyIdentical),
        2 => Just(Topology::Disconnected),
        3 => Just(Topology::Multigraph),
    ]
}
