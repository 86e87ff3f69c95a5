use crate::data_structures::MinHeap;
use crate::graph::Graph;
use crate::{Error, Result};
use num_traits::{Float, Zero};
use std::fmt::Debug;

/// Classic binary-heap Dijkstra, kept as the correctness oracle for the
/// recursive driver. Ties pop the smaller vertex id first and only strict
/// improvements update the parent, matching the driver's tie-break.
pub fn reference_dijkstra_with_parents<W, G>(
    graph: &G,
    source: usize,
) -> Result<(Vec<W>, Vec<Option<usize>>)>
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    let n = graph.vertex_count();
    if !graph.has_vertex(source) {
        return Err(Error::Bounds {
            vertex: source,
            vertex_count: n,
        });
    }

    let mut dist = vec![W::infinity(); n];
    let mut parent: Vec<Option<usize>> = vec![None; n];
    dist[source] = W::zero();

    let mut heap: MinHeap<usize, W> = MinHeap::new();
    heap.push(source, W::zero());

    while let Some((u, d)) = heap.pop() {
        if d > dist[u] {
            continue;
        }
        for (v, weight) in graph.outgoing_edges(u) {
            let candidate = d + weight;
            if candidate < dist[v] {
                dist[v] = candidate;
                parent[v] = Some(u);
                heap.push(v, candidate);
            }
        }
    }

    Ok((dist, parent))
}

/// Distance-only variant of [`reference_dijkstra_with_parents`].
pub fn reference_dijkstra<W, G>(graph: &G, source: usize) -> Result<Vec<W>>
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    reference_dijkstra_with_parents(graph, source).map(|(dist, _)| dist)
}

/// True when the recursive driver and Dijkstra agree element-wise on every
/// distance from `source` (infinity compares equal to infinity).
pub fn compare_with_dijkstra<W, G>(graph: &G, source: usize) -> Result<bool>
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    let dmy = crate::algorithm::sssp::sssp(graph, source)?;
    let oracle = reference_dijkstra(graph, source)?;
    Ok(dmy == oracle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::DirectedGraph;
    use ordered_float::OrderedFloat;

    #[test]
    fn settles_a_small_graph() {
        let g = DirectedGraph::new(
            4,
            vec![(0, 1), (0, 2), (1, 3), (2, 3)],
            vec![
                OrderedFloat(1.0),
                OrderedFloat(4.0),
                OrderedFloat(2.0),
                OrderedFloat(1.0),
            ],
        )
        .unwrap();
        let (dist, parent) = reference_dijkstra_with_parents(&g, 0).unwrap();
        assert_eq!(
            dist,
            vec![
                OrderedFloat(0.0),
                OrderedFloat(1.0),
                OrderedFloat(4.0),
                OrderedFloat(3.0)
            ]
        );
        assert_eq!(parent, vec![None, Some(0), Some(0), Some(1)]);
    }

    #[test]
    fn rejects_out_of_range_source() {
        let g =
            DirectedGraph::new(2, vec![(0, 1)], vec![OrderedFloat(1.0)]).unwrap();
        assert!(matches!(
            reference_dijkstra(&g, 5),
            Err(Error::Bounds { .. })
        ));
    }
}
