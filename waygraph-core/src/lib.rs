//! Waygraph core library.
//!
//! Weighted graphs with Dijkstra shortest paths, Prim and Kruskal minimum
//! spanning trees, and the union-find structure Kruskal relies on.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod disjoint_set;
mod error;
mod graph;
#[cfg(test)]
mod test_utils;

pub use crate::{
    disjoint_set::DisjointSet,
    error::{DisjointSetError, DisjointSetErrorCode, GraphError, GraphErrorCode, Result},
    graph::{
        Graph, GraphBuilder, Neighbour, Orientation, ShortestPath, SpanningTree, TreeEdge,
        UNREACHABLE, Weight,
    },
};
