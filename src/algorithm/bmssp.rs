use crate::data_structures::Frontier;
use crate::graph::Graph;
use crate::{Error, Result};
use log::trace;
use num_traits::{Float, Zero};
use std::fmt::Debug;

/// Bounded multi-source relaxation (BMSSP).
///
/// Runs at most `rounds` label-correcting rounds from `frontier`, relaxing
/// every outgoing edge of a vertex whose distance is within `bound`. An edge
/// `(u -> v)` improves `v` only when the candidate distance both beats
/// `dist[v]` and stays within `bound`; the improvement records `u` as the
/// parent. Rounds stop early once nothing changes.
///
/// Frontier vertices are visited in insertion order and ties keep the first
/// improver, so repeated runs produce identical distance and parent output.
///
/// Returns the vertices updated in the final productive round, or the
/// initial frontier when no round produced an update.
pub fn bounded_multi_source<W, G>(
    graph: &G,
    dist: &mut [W],
    parent: &mut [Option<usize>],
    frontier: &[usize],
    bound: W,
    rounds: usize,
) -> Result<Vec<usize>>
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    let n = graph.vertex_count();
    if frontier.is_empty() {
        return Err(Error::Validation("relaxation frontier must not be empty".into()));
    }
    if rounds == 0 {
        return Err(Error::Validation("round cap must be at least 1".into()));
    }
    if bound < W::zero() {
        return Err(Error::Validation("distance bound must be non-negative".into()));
    }
    if dist.len() != n || parent.len() != n {
        return Err(Error::Validation(format!(
            "distance and parent buffers must have length {}",
            n
        )));
    }
    for &v in frontier {
        if v >= n {
            return Err(Error::Bounds {
                vertex: v,
                vertex_count: n,
            });
        }
    }

    let mut current = frontier.to_vec();
    let mut last_updated: Option<Vec<usize>> = None;

    for round in 0..rounds {
        let mut next = Frontier::new(n);
        for &u in &current {
            if dist[u] > bound {
                continue;
            }
            for (v, weight) in graph.outgoing_edges(u) {
                let candidate = dist[u] + weight;
                if candidate < dist[v] && candidate <= bound {
                    dist[v] = candidate;
                    parent[v] = Some(u);
                    next.push(v);
                }
            }
        }
        if next.is_empty() {
            trace!("bmssp settled after {} rounds", round);
            break;
        }
        trace!("bmssp round {} updated {} vertices", round + 1, next.len());
        current = next.into_vec();
        last_updated = Some(current.clone());
    }

    Ok(last_updated.unwrap_or_else(|| frontier.to_vec()))
}
