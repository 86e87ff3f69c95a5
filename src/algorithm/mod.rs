pub mod bmssp;
pub mod dijkstra;
pub mod partition;
pub mod pivots;
pub mod recursive;
pub mod sssp;

pub use bmssp::bounded_multi_source;
pub use dijkstra::{compare_with_dijkstra, reference_dijkstra, reference_dijkstra_with_parents};
pub use partition::{partition_blocks, Block};
pub use pivots::select_pivots;
pub use recursive::recursive_layer;
pub use sssp::{DmySolver, SsspStatistics};
