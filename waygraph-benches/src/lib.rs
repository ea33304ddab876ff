//! Benchmark support crate for waygraph.
//!
//! Provides seeded synthetic graphs and parameter types used by the
//! Criterion benchmarks for shortest paths and spanning trees.

pub mod error;
pub mod params;
pub mod synthetic;
