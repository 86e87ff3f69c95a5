pub mod frontier;
pub mod priority_queue;

pub use frontier::Frontier;
pub use priority_queue::MinHeap;
