use crate::graph::DirectedGraph;
use ordered_float::OrderedFloat;
use rand::prelude::*;
use rand::rngs::StdRng;

/// Generates a random sparse directed graph with roughly `avg_out_degree`
/// outgoing edges per vertex and weights drawn uniformly from
/// `(0, max_weight]`. Seeded for reproducible test inputs.
pub fn random_sparse(
    n: usize,
    avg_out_degree: usize,
    max_weight: f64,
    seed: u64,
) -> DirectedGraph<OrderedFloat<f64>> {
    assert!(n > 1, "need at least two vertices");
    assert!(max_weight > 0.0, "max_weight must be positive");

    let mut rng = StdRng::seed_from_u64(seed);
    let mut edges = Vec::with_capacity(n * avg_out_degree);
    let mut weights = Vec::with_capacity(n * avg_out_degree);

    for source in 0..n {
        for _ in 0..avg_out_degree {
            let target = rng.gen_range(0..n);
            edges.push((source, target));
            weights.push(OrderedFloat(rng.gen_range(0.0..max_weight) + f64::MIN_POSITIVE));
        }
    }

    // A chain of cheap edges keeps most of the graph reachable from vertex 0
    for source in 0..n - 1 {
        edges.push((source, source + 1));
        weights.push(OrderedFloat(rng.gen_range(0.5..max_weight)));
    }

    DirectedGraph::new(n, edges, weights).expect("generated edges stay in range")
}

/// Generates a `width` x `height` grid with unit-weight edges in the four
/// cardinal directions.
pub fn grid(width: usize, height: usize) -> DirectedGraph<OrderedFloat<f64>> {
    assert!(width > 0 && height > 0, "grid dimensions must be positive");

    let index = |x: usize, y: usize| y * width + x;
    let mut edges = Vec::new();

    for y in 0..height {
        for x in 0..width {
            if x + 1 < width {
                edges.push((index(x, y), index(x + 1, y)));
                edges.push((index(x + 1, y), index(x, y)));
            }
            if y + 1 < height {
                edges.push((index(x, y), index(x, y + 1)));
                edges.push((index(x, y + 1), index(x, y)));
            }
        }
    }

    let weights = vec![OrderedFloat(1.0); edges.len()];
    DirectedGraph::new(width * height, edges, weights).expect("generated edges stay in range")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    #[test]
    fn random_sparse_is_reproducible() {
        let a = random_sparse(50, 3, 10.0, 7);
        let b = random_sparse(50, 3, 10.0, 7);
        assert_eq!(a.edge_count(), b.edge_count());
        for id in 0..a.edge_count() {
            assert_eq!(a.edge(id), b.edge(id));
            assert_eq!(a.weight(id), b.weight(id));
        }
    }

    #[test]
    fn grid_has_expected_shape() {
        let g = grid(3, 2);
        assert_eq!(g.vertex_count(), 6);
        // 2 horizontal pairs per row * 2 rows + 3 vertical pairs, both directions
        assert_eq!(g.edge_count(), (2 * 2 + 3) * 2);
        assert_eq!(g.out_degree(0), 2);
    }
}
