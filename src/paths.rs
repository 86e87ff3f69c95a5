//! Parent-chain walks, reachability and verification helpers layered on the
//! driver's outputs.

use crate::algorithm::sssp;
use crate::graph::Graph;
use crate::{Error, Result};
use num_traits::{Float, Zero};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Debug;

/// Walks the parent chain from `target` back to `source`.
///
/// Returns the path source..=target, or an empty vector when the walk
/// diverges before reaching the source (the target is unreachable). A walk
/// longer than the vertex count fails with [`Error::Cycle`]; a correct
/// parent vector can never trigger this, it guards against corrupted input.
pub fn reconstruct_path(
    parent: &[Option<usize>],
    source: usize,
    target: usize,
) -> Result<Vec<usize>> {
    let n = parent.len();
    for v in [source, target] {
        if v >= n {
            return Err(Error::Bounds {
                vertex: v,
                vertex_count: n,
            });
        }
    }

    if target == source {
        return Ok(vec![source]);
    }

    let mut path = vec![target];
    let mut current = target;
    loop {
        match parent[current] {
            None => return Ok(Vec::new()),
            Some(pred) => {
                path.push(pred);
                current = pred;
                if current == source {
                    break;
                }
                if path.len() > n {
                    return Err(Error::Cycle(n));
                }
            }
        }
    }
    path.reverse();
    Ok(path)
}

/// The full shortest-path tree as a map from each reachable vertex to its
/// path from `source`.
pub fn shortest_path_tree(
    parent: &[Option<usize>],
    source: usize,
) -> Result<BTreeMap<usize, Vec<usize>>> {
    let mut tree = BTreeMap::new();
    for target in 0..parent.len() {
        let path = reconstruct_path(parent, source, target)?;
        if !path.is_empty() {
            tree.insert(target, path);
        }
    }
    Ok(tree)
}

/// Sums edge weights along consecutive path pairs, taking the cheapest
/// parallel edge for each pair. Infinity when any pair lacks an edge or the
/// path is empty; zero for a single-vertex path.
pub fn path_length<W, G>(path: &[usize], graph: &G) -> W
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    if path.is_empty() {
        return W::infinity();
    }
    let mut total = W::zero();
    for pair in path.windows(2) {
        let hop = graph
            .outgoing_edges(pair[0])
            .filter(|&(target, _)| target == pair[1])
            .map(|(_, weight)| weight)
            .min();
        match hop {
            Some(weight) => total = total + weight,
            None => return W::infinity(),
        }
    }
    total
}

/// Checks `dist[target]` against the graph: some incoming edge must witness
/// it and no incoming edge may undercut it (triangle inequality).
pub fn verify_shortest_path<W, G>(graph: &G, dist: &[W], source: usize, target: usize) -> bool
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    if target >= dist.len() || source >= dist.len() {
        return false;
    }
    if target == source {
        return dist[target] == W::zero();
    }

    let mut witnessed = false;
    for (u, v, weight) in graph.edges() {
        if v != target {
            continue;
        }
        let via = dist[u] + weight;
        if via < dist[target] {
            return false;
        }
        if via == dist[target] {
            witnessed = true;
        }
    }
    if dist[target] == W::infinity() {
        // unreachable is consistent exactly when no incoming edge settles it
        return true;
    }
    witnessed
}

/// All vertices within `budget` of `source`, ascending by id.
pub fn reachable_vertices<W, G>(graph: &G, source: usize, budget: W) -> Result<Vec<usize>>
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    if budget < W::zero() {
        return Err(Error::Validation("budget must be non-negative".into()));
    }
    let dist = sssp::sssp(graph, source)?;
    Ok((0..dist.len()).filter(|&v| dist[v] <= budget).collect())
}

/// Shortest distance and one shortest path from `source` to `target`;
/// `(infinity, [])` when unreachable.
pub fn shortest_path<W, G>(graph: &G, source: usize, target: usize) -> Result<(W, Vec<usize>)>
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    if !graph.has_vertex(target) {
        return Err(Error::Bounds {
            vertex: target,
            vertex_count: graph.vertex_count(),
        });
    }
    let (dist, parent) = sssp::sssp_with_parents(graph, source)?;
    if dist[target] == W::infinity() {
        return Ok((W::infinity(), Vec::new()));
    }
    let path = reconstruct_path(&parent, source, target)?;
    Ok((dist[target], path))
}

/// Ratio `dist[numerator] / dist[denominator]` from one search; infinity
/// when either distance is infinite or the denominator is zero.
pub fn distance_ratio<W, G>(
    graph: &G,
    source: usize,
    numerator: usize,
    denominator: usize,
) -> Result<W>
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    for v in [numerator, denominator] {
        if !graph.has_vertex(v) {
            return Err(Error::Bounds {
                vertex: v,
                vertex_count: graph.vertex_count(),
            });
        }
    }
    let dist = sssp::sssp(graph, source)?;
    let (a, b) = (dist[numerator], dist[denominator]);
    if a == W::infinity() || b == W::infinity() || b == W::zero() {
        return Ok(W::infinity());
    }
    Ok(a / b)
}

/// Reachability summary of one search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectivitySummary {
    pub source: usize,
    pub reachable_count: usize,
    pub unreachable_count: usize,
    pub reachable_fraction: f64,
}

pub fn connectivity_summary<W, G>(graph: &G, source: usize) -> Result<ConnectivitySummary>
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    let dist: Vec<W> = sssp::sssp(graph, source)?;
    let reachable_count = dist.iter().filter(|d| **d != W::infinity()).count();
    let n = dist.len();
    Ok(ConnectivitySummary {
        source,
        reachable_count,
        unreachable_count: n - reachable_count,
        reachable_fraction: reachable_count as f64 / n as f64,
    })
}
