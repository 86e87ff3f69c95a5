pub mod directed;
pub mod generators;
pub mod multi_objective;
pub mod traits;

pub use directed::DirectedGraph;
pub use generators::{grid, random_sparse};
pub use multi_objective::{MultiObjectiveGraph, Sense};
pub use traits::Graph;
