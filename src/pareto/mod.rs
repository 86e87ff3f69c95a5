//! Multi-objective layer: dominance-pruned Pareto enumeration and
//! scalarization strategies over vector-weighted graphs.

pub mod dominance;
pub mod scalarize;
pub mod search;

use serde::{Deserialize, Serialize};

/// Relative tolerance for epsilon-dominance pruning once the Pareto cap is
/// reached.
pub const EPSILON: f64 = 1e-6;

/// One non-dominated path with its accumulated objective vector.
///
/// The objective vector always equals the sum of edge objectives along the
/// path. An infeasible result (epsilon-constraint with no feasible path, or
/// an unreachable target) carries an empty path and all-infinite objectives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    pub path: Vec<usize>,
    pub objectives: Vec<f64>,
}

impl Solution {
    /// The all-infinite marker for an unreachable or infeasible target.
    pub fn infeasible(dimension: usize) -> Self {
        Solution {
            path: Vec::new(),
            objectives: vec![f64::INFINITY; dimension],
        }
    }

    pub fn is_feasible(&self) -> bool {
        self.objectives.iter().all(|o| o.is_finite())
    }
}
