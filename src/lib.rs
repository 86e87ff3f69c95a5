//! Shortest-path optimization core.
//!
//! This library implements single-source shortest paths on directed graphs
//! with non-negative edge weights using the recursive partitioning scheme of
//! Duan, Mao and Yin ("Breaking the Sorting Barrier for Directed Single-Source
//! Shortest Paths", 2025), which achieves O(m log^(2/3) n) work on sparse
//! graphs by sparsifying large frontiers into pivots and recursing over
//! distance-ordered blocks.
//!
//! On top of the single-objective engine sits a multi-objective layer:
//! vector-weighted graphs with per-objective minimize/maximize senses, a
//! dominance-pruned Pareto front enumeration, and scalarization strategies
//! (weighted sum, epsilon-constraint, lexicographic, knee point) that reduce
//! to the single-objective driver.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod pareto;
pub mod paths;

pub use algorithm::dijkstra::{compare_with_dijkstra, reference_dijkstra};
pub use algorithm::sssp::{
    sssp, sssp_bounded, sssp_many, sssp_statistics, sssp_with_parents, DmySolver, SsspStatistics,
};
pub use graph::directed::DirectedGraph;
pub use graph::multi_objective::{MultiObjectiveGraph, Sense};
pub use graph::Graph;
pub use pareto::scalarize::{epsilon_constraint, lexicographic, path_objectives, weighted_sum};
pub use pareto::search::{knee_point, pareto_front};
pub use pareto::Solution;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("invalid input: {0}")]
    Validation(String),

    #[error("vertex {vertex} is out of bounds for a graph with {vertex_count} vertices")]
    Bounds { vertex: usize, vertex_count: usize },

    #[error("objective sense mismatch: {0}")]
    Sense(String),

    #[error("parent walk exceeded {0} steps; the parent vector contains a cycle")]
    Cycle(usize),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
