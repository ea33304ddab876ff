//! Structural invariant verification.
//!
//! For graphs too large for the exhaustive oracles, verifies:
//!
//! - **Tree edges exist**: every tree edge is an input edge with the same
//!   weight, and none is a self-loop.
//! - **Acyclicity**: no tree contains a cycle.
//! - **Weight bookkeeping**: `total_weight` equals the sum of the edges.
//! - **Edge count**: Kruskal keeps `V - C` edges for `C` components, Prim
//!   keeps one fewer than the size of vertex 0's component.
//! - **Spanning flag**: set exactly when the input is connected.
//! - **Path validity**: every reported path starts and ends where asked,
//!   visits each vertex once, and its hops add up to the reported distance.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{Graph, SpanningTree, UNREACHABLE};

use super::helpers::{
    component_count, expect_eq, find_root, has_edge, lightest_edge, reachable_from,
};
use super::types::GraphFixture;

/// Runs the spanning-tree invariants for an undirected fixture.
pub(super) fn run_tree_invariants_property(fixture: &GraphFixture) -> TestCaseResult {
    let graph = fixture.build().map_err(TestCaseError::fail)?;
    let components = component_count(fixture.vertex_count, &fixture.edges);
    let connected = components <= 1;

    let kruskal = graph.minimum_spanning_tree_kruskal();
    validate_tree(fixture, &kruskal, "kruskal")?;
    expect_eq(
        "kruskal edge count",
        kruskal.edges().len(),
        fixture.vertex_count - components,
        fixture,
    )?;
    expect_eq("kruskal spanning", kruskal.is_spanning(), connected, fixture)?;

    let prim = graph.minimum_spanning_tree_prim();
    validate_tree(fixture, &prim, "prim")?;
    let component_of_zero = reachable_from(fixture.vertex_count, &fixture.edges, false, 0)
        .into_iter()
        .filter(|&seen| seen)
        .count();
    expect_eq(
        "prim edge count",
        prim.edges().len(),
        component_of_zero - 1,
        fixture,
    )?;
    expect_eq("prim spanning", prim.is_spanning(), connected, fixture)?;

    Ok(())
}

/// Runs the path invariants from vertex 0 to every other vertex.
pub(super) fn run_path_invariants_property(fixture: &GraphFixture) -> TestCaseResult {
    let graph = fixture.build().map_err(TestCaseError::fail)?;
    let directed = graph.is_directed();
    let reachable = reachable_from(fixture.vertex_count, &fixture.edges, directed, 0);

    for (end, &reachable) in reachable.iter().enumerate() {
        validate_path(fixture, &graph, end, reachable)?;
    }
    Ok(())
}

fn validate_tree(fixture: &GraphFixture, tree: &SpanningTree, label: &str) -> TestCaseResult {
    let mut parent: Vec<usize> = (0..fixture.vertex_count).collect();
    let mut sum = 0;

    for (i, edge) in tree.edges().iter().enumerate() {
        let (source, target, weight) = (edge.source(), edge.target(), edge.weight());
        if source == target {
            return Err(TestCaseError::fail(format!(
                "{label} edge {i}: self-loop on {source} ({fixture})"
            )));
        }
        if !has_edge(&fixture.edges, false, source, target, weight) {
            return Err(TestCaseError::fail(format!(
                "{label} edge {i}: ({source}, {target}, {weight}) is not an input edge ({fixture})"
            )));
        }
        let a = find_root(&mut parent, source);
        let b = find_root(&mut parent, target);
        if a == b {
            return Err(TestCaseError::fail(format!(
                "{label} edge {i}: ({source}, {target}) closes a cycle ({fixture})"
            )));
        }
        parent[b] = a;
        sum += weight;
    }

    expect_eq(
        &format!("{label} total weight"),
        tree.total_weight(),
        sum,
        fixture,
    )
}

fn validate_path(
    fixture: &GraphFixture,
    graph: &Graph,
    end: usize,
    reachable: bool,
) -> TestCaseResult {
    let result = graph
        .shortest_path(0, end)
        .map_err(|err| TestCaseError::fail(format!("shortest_path(0, {end}) failed: {err}")))?;

    if !reachable {
        expect_eq("unreachable distance", result.distance(), UNREACHABLE, fixture)?;
        return expect_eq("unreachable path length", result.path().len(), 0, fixture);
    }

    let path = result.path();
    if path.first() != Some(&0) || path.last() != Some(&end) {
        return Err(TestCaseError::fail(format!(
            "path to {end} has wrong endpoints: {path:?} ({fixture})"
        )));
    }

    let mut visited = vec![false; fixture.vertex_count];
    for &vertex in path {
        if std::mem::replace(&mut visited[vertex], true) {
            return Err(TestCaseError::fail(format!(
                "path to {end} revisits {vertex}: {path:?} ({fixture})"
            )));
        }
    }

    let mut distance = 0;
    for hop in path.windows(2) {
        let Some(weight) = lightest_edge(&fixture.edges, graph.is_directed(), hop[0], hop[1])
        else {
            return Err(TestCaseError::fail(format!(
                "path to {end} uses missing hop {} -> {} ({fixture})",
                hop[0], hop[1],
            )));
        };
        distance += weight;
    }
    expect_eq(
        &format!("distance to {end}"),
        result.distance(),
        distance,
        fixture,
    )
}
