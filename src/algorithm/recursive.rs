use crate::algorithm::bmssp::bounded_multi_source;
use crate::algorithm::partition::partition_blocks;
use crate::algorithm::pivots::select_pivots;
use crate::graph::Graph;
use crate::Result;
use log::debug;
use num_traits::{Float, Zero};
use std::fmt::Debug;

/// Pivot threshold for a recursion layer over `size` vertices:
/// `ceil(size^(1/3))`, at least 1. Also caps the relaxation rounds of each
/// BMSSP invocation.
pub fn pivot_threshold(size: usize) -> usize {
    ((size as f64).powf(1.0 / 3.0).ceil() as usize).max(1)
}

/// Partition parameter for a recursion layer over `size` vertices:
/// `max(1, ceil(ln(size)^(1/3)))`, yielding up to `2^t` blocks.
pub fn partition_parameter(size: usize) -> u32 {
    if size <= 1 {
        return 1;
    }
    ((size as f64).ln().powf(1.0 / 3.0).ceil() as u32).max(1)
}

/// One layer of the recursion: refines `dist`/`parent` so that every vertex
/// of `u` reachable from the frontier `s` within `bound` ends up with its
/// true shortest distance.
///
/// The layer either relaxes directly from `s` (small filtered candidate set)
/// or sparsifies the candidates into pivots first, then partitions `u` into
/// distance-ordered blocks and recurses on each with a tightened bound.
///
/// Inputs are pre-validated by the driver; the recursion itself raises no
/// errors of its own.
pub fn recursive_layer<W, G>(
    graph: &G,
    dist: &mut [W],
    parent: &mut [Option<usize>],
    u: &[usize],
    s: &[usize],
    bound: W,
) -> Result<()>
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    if u.is_empty() {
        return Ok(());
    }
    if u.len() == 1 {
        let v = u[0];
        if s.contains(&v) && dist[v] <= bound {
            relax_from(graph, dist, parent, v, bound);
        }
        return Ok(());
    }

    let k = pivot_threshold(u.len());
    let t = partition_parameter(u.len());

    let mut in_frontier = vec![false; graph.vertex_count()];
    for &v in s {
        in_frontier[v] = true;
    }
    let candidates: Vec<usize> = u
        .iter()
        .copied()
        .filter(|&v| !in_frontier[v] && dist[v] != W::infinity() && dist[v] <= bound)
        .collect();

    let next_frontier = if candidates.len() <= k * s.len() {
        bounded_multi_source(graph, dist, parent, s, bound, k)?
    } else {
        let mut pivots = select_pivots(&candidates, dist, k);
        pivots.sort_unstable();
        debug!(
            "sparsified {} candidates into {} pivots (k={})",
            candidates.len(),
            pivots.len(),
            k
        );
        bounded_multi_source(graph, dist, parent, &pivots, bound, k)?
    };

    let mut in_next = vec![false; graph.vertex_count()];
    for &v in &next_frontier {
        in_next[v] = true;
    }

    for block in partition_blocks(u, dist, t, bound) {
        let mut block_frontier: Vec<usize> = block
            .vertices
            .iter()
            .copied()
            .filter(|&v| in_next[v])
            .collect();
        if block_frontier.is_empty() {
            // seed with the smallest settled vertex of the block
            if let Some(seed) = block
                .vertices
                .iter()
                .copied()
                .filter(|&v| dist[v] != W::infinity())
                .min()
            {
                block_frontier.push(seed);
            }
        }
        if block_frontier.is_empty() {
            continue;
        }
        recursive_layer(
            graph,
            dist,
            parent,
            &block.vertices,
            &block_frontier,
            block.upper_bound,
        )?;
    }
    Ok(())
}

/// Relaxes the outgoing edges of one vertex, respecting `bound`.
fn relax_from<W, G>(graph: &G, dist: &mut [W], parent: &mut [Option<usize>], v: usize, bound: W)
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    for (target, weight) in graph.outgoing_edges(v) {
        let candidate = dist[v] + weight;
        if candidate < dist[target] && candidate <= bound {
            dist[target] = candidate;
            parent[target] = Some(v);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::dijkstra::reference_dijkstra;
    use crate::graph::generators::random_sparse;
    use ordered_float::OrderedFloat;

    #[test]
    fn a_single_layer_refines_toward_the_oracle() {
        let g = random_sparse(80, 3, 10.0, 17);
        let n = g.vertex_count();
        let mut dist = vec![OrderedFloat(f64::INFINITY); n];
        let mut parent = vec![None; n];
        dist[0] = OrderedFloat(0.0);

        let all: Vec<usize> = (0..n).collect();
        recursive_layer(
            &g,
            &mut dist,
            &mut parent,
            &all,
            &[0],
            OrderedFloat(f64::INFINITY),
        )
        .unwrap();

        // the layer never undershoots the true distances, and every finite
        // distance is backed by a real edge from its recorded parent
        let oracle = reference_dijkstra(&g, 0).unwrap();
        for v in 0..n {
            assert!(dist[v] >= oracle[v], "vertex {} below the oracle", v);
            if v != 0 && dist[v] != OrderedFloat(f64::INFINITY) {
                let p = parent[v].expect("finite vertex needs a parent");
                assert!(g.min_edge_weight(p, v).is_some());
            }
        }
        assert_eq!(dist[0], OrderedFloat(0.0));
    }

    #[test]
    fn pivot_threshold_grows_as_cube_root() {
        assert_eq!(pivot_threshold(1), 1);
        assert_eq!(pivot_threshold(8), 2);
        assert_eq!(pivot_threshold(1000), 10);
        assert_eq!(pivot_threshold(1001), 11);
    }

    #[test]
    fn partition_parameter_is_at_least_one() {
        assert_eq!(partition_parameter(0), 1);
        assert_eq!(partition_parameter(1), 1);
        assert!(partition_parameter(2) >= 1);
        // ln(1e6) ~ 13.8, cube root ~ 2.4
        assert_eq!(partition_parameter(1_000_000), 3);
    }
}
