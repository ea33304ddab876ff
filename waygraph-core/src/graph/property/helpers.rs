//! Shared helper functions for graph property-based tests.
//!
//! Provides the independent union-find and reachability routines the
//! structural checks compare results against.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::Weight;

use super::types::GraphFixture;

/// Path-halving find for union-find verification.
pub(super) fn find_root(parent: &mut [usize], mut node: usize) -> usize {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}

/// Counts connected components of the undirected edge list.
pub(super) fn component_count(vertex_count: usize, edges: &[(usize, usize, Weight)]) -> usize {
    let mut parent: Vec<usize> = (0..vertex_count).collect();
    let mut components = vertex_count;
    for &(source, target, _) in edges {
        let a = find_root(&mut parent, source);
        let b = find_root(&mut parent, target);
        if a != b {
            parent[b] = a;
            components -= 1;
        }
    }
    components
}

/// Marks every vertex reachable from `start` by following edges in the
/// direction the orientation allows.
pub(super) fn reachable_from(
    vertex_count: usize,
    edges: &[(usize, usize, Weight)],
    directed: bool,
    start: usize,
) -> Vec<bool> {
    let mut adjacency = vec![Vec::new(); vertex_count];
    for &(source, target, _) in edges {
        adjacency[source].push(target);
        if !directed {
            adjacency[target].push(source);
        }
    }

    let mut seen = vec![false; vertex_count];
    let mut stack = vec![start];
    seen[start] = true;
    while let Some(vertex) = stack.pop() {
        for &next in &adjacency[vertex] {
            if !seen[next] {
                seen[next] = true;
                stack.push(next);
            }
        }
    }
    seen
}

/// Returns `true` when the fixture contains an edge usable as the hop
/// `from -> to` with exactly `weight`.
pub(super) fn has_edge(
    edges: &[(usize, usize, Weight)],
    directed: bool,
    from: usize,
    to: usize,
    weight: Weight,
) -> bool {
    edges.iter().any(|&(source, target, w)| {
        let forward = (source, target) == (from, to);
        let backward = !directed && (target, source) == (from, to);
        w == weight && (forward || backward)
    })
}

/// Lightest weight of any edge usable as the hop `from -> to`.
pub(super) fn lightest_edge(
    edges: &[(usize, usize, Weight)],
    directed: bool,
    from: usize,
    to: usize,
) -> Option<Weight> {
    edges
        .iter()
        .filter(|&&(source, target, _)| {
            (source, target) == (from, to) || (!directed && (target, source) == (from, to))
        })
        .map(|&(_, _, weight)| weight)
        .min()
}

/// Fails the case with both values and the fixture when they differ.
pub(super) fn expect_eq<T>(what: &str, actual: T, expected: T, fixture: &GraphFixture) -> TestCaseResult
where
    T: PartialEq + std::fmt::Debug,
{
    if actual == expected {
        Ok(())
    } else {
        Err(TestCaseError::fail(format!(
            "{what} mismatch: actual={actual:?}, expected={expected:?} ({fixture})"
        )))
    }
}
