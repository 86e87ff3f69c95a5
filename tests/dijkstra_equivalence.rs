use ordered_float::OrderedFloat;
use pareto_sssp::graph::generators::{grid, random_sparse};
use pareto_sssp::graph::Graph;
use pareto_sssp::paths::{path_length, reconstruct_path};
use pareto_sssp::{
    compare_with_dijkstra, reference_dijkstra, sssp, sssp_bounded, sssp_many, sssp_with_parents,
};

const INF: OrderedFloat<f64> = OrderedFloat(f64::INFINITY);

#[test]
fn matches_dijkstra_on_random_sparse_graphs() {
    for seed in 0..8u64 {
        let g = random_sparse(250, 4, 50.0, seed);
        let dmy = sssp(&g, 0).unwrap();
        let oracle = reference_dijkstra(&g, 0).unwrap();
        assert_eq!(dmy, oracle, "divergence on seed {}", seed);
        assert!(compare_with_dijkstra(&g, 0).unwrap());
    }
}

#[test]
fn matches_dijkstra_on_a_grid() {
    let g = grid(25, 18);
    for source in [0, 217, 449] {
        assert_eq!(
            sssp(&g, source).unwrap(),
            reference_dijkstra(&g, source).unwrap()
        );
    }
}

#[test]
fn matches_dijkstra_from_every_source_of_a_small_graph() {
    let g = random_sparse(60, 3, 20.0, 99);
    for source in 0..g.vertex_count() {
        assert_eq!(
            sssp(&g, source).unwrap(),
            reference_dijkstra(&g, source).unwrap(),
            "divergence from source {}",
            source
        );
    }
}

#[test]
fn triangle_inequality_holds_on_every_edge() {
    let g = random_sparse(300, 4, 30.0, 5);
    let dist = sssp(&g, 0).unwrap();
    for (u, v, w) in g.edges() {
        assert!(
            dist[v] <= dist[u] + w,
            "edge {} -> {} violates the triangle inequality",
            u,
            v
        );
    }
}

#[test]
fn bounded_results_are_a_truncation_of_the_full_search() {
    let g = random_sparse(200, 4, 25.0, 11);
    let full = sssp(&g, 0).unwrap();
    let finite_max = full
        .iter()
        .filter(|d| **d != INF)
        .cloned()
        .max()
        .unwrap();
    let bound = finite_max / OrderedFloat(2.0);

    let bounded = sssp_bounded(&g, 0, bound).unwrap();
    for v in 0..g.vertex_count() {
        if full[v] <= bound {
            assert_eq!(bounded[v], full[v]);
        } else {
            assert_eq!(bounded[v], INF);
        }
    }
}

#[test]
fn reconstructed_paths_have_exactly_the_reported_length() {
    let g = random_sparse(150, 4, 40.0, 21);
    let (dist, parent) = sssp_with_parents(&g, 0).unwrap();
    for target in 0..g.vertex_count() {
        if dist[target] == INF {
            continue;
        }
        let path = reconstruct_path(&parent, 0, target).unwrap();
        assert!(!path.is_empty());
        assert_eq!(
            path_length(&path, &g),
            dist[target],
            "path to {} does not add up",
            target
        );
    }
}

#[test]
fn repeated_runs_are_bit_identical() {
    let g = random_sparse(180, 4, 35.0, 33);
    let first = sssp_with_parents(&g, 0).unwrap();
    let second = sssp_with_parents(&g, 0).unwrap();
    assert_eq!(first, second);
}

#[test]
fn parallel_searches_equal_sequential_ones() {
    let g = random_sparse(120, 3, 15.0, 44);
    let sources = vec![0, 5, 17, 63, 119];
    let many = sssp_many(&g, &sources).unwrap();
    for (i, &source) in sources.iter().enumerate() {
        assert_eq!(many[i], sssp(&g, source).unwrap());
    }
    assert!(sssp_many(&g, &[0, 999]).is_err());
}
