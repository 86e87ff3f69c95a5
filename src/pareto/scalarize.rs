use crate::algorithm::sssp::sssp_with_parents;
use crate::data_structures::MinHeap;
use crate::graph::{MultiObjectiveGraph, Sense};
use crate::pareto::dominance::scalar_surrogate;
use crate::pareto::search::{label_path, on_path, Label};
use crate::pareto::Solution;
use crate::paths::reconstruct_path;
use crate::{Error, Result};
use ordered_float::OrderedFloat;

fn require_all_minimize(graph: &MultiObjectiveGraph, operation: &str) -> Result<()> {
    if graph.senses().contains(&Sense::Maximize) {
        return Err(Error::Sense(format!(
            "{} requires every objective to be minimized; convert maximized objectives to costs first",
            operation
        )));
    }
    Ok(())
}

fn check_endpoints(graph: &MultiObjectiveGraph, source: usize, target: usize) -> Result<()> {
    for v in [source, target] {
        if !graph.has_vertex(v) {
            return Err(Error::Bounds {
                vertex: v,
                vertex_count: graph.vertex_count(),
            });
        }
    }
    Ok(())
}

/// Sums edge objective vectors along a path. Among parallel edges the one
/// with the smallest scalar surrogate wins (earliest edge id on ties). An
/// empty path or a missing hop yields all-infinite objectives.
pub fn path_objectives(graph: &MultiObjectiveGraph, path: &[usize]) -> Vec<f64> {
    let dimension = graph.dimension();
    if path.is_empty() {
        return vec![f64::INFINITY; dimension];
    }

    let senses = graph.senses();
    let mut total = vec![0.0; dimension];
    for pair in path.windows(2) {
        let hop = graph
            .outgoing(pair[0])
            .filter(|(_, edge)| edge.target == pair[1])
            .min_by_key(|(id, edge)| {
                (OrderedFloat(scalar_surrogate(&edge.objectives, senses)), *id)
            });
        match hop {
            Some((_, edge)) => {
                for (acc, step) in total.iter_mut().zip(&edge.objectives) {
                    *acc += step;
                }
            }
            None => return vec![f64::INFINITY; dimension],
        }
    }
    total
}

/// Minimizes the weighted sum of the objectives over a single path.
///
/// Only defined for all-minimize graphs ([`Error::Sense`] otherwise, since a
/// maximized objective would reward arbitrarily long paths). The reduction
/// derives a scalar-weighted graph and runs the single-objective driver on
/// it; the returned objective vector is re-summed from the original edge
/// vectors.
pub fn weighted_sum(
    graph: &MultiObjectiveGraph,
    source: usize,
    target: usize,
    weights: &[f64],
) -> Result<Solution> {
    require_all_minimize(graph, "weighted sum")?;
    check_endpoints(graph, source, target)?;
    if weights.len() != graph.dimension() {
        return Err(Error::Validation(format!(
            "{} weights supplied for {} objectives",
            weights.len(),
            graph.dimension()
        )));
    }
    if weights.iter().any(|w| *w < 0.0) {
        return Err(Error::Validation("scalarization weights must be non-negative".into()));
    }

    let derived = graph.scalarized(|objectives| {
        objectives
            .iter()
            .zip(weights)
            .map(|(o, w)| o * w)
            .sum::<f64>()
    })?;

    let (dist, parent) = sssp_with_parents(&derived, source)?;
    if dist[target] == OrderedFloat(f64::INFINITY) {
        return Ok(Solution::infeasible(graph.dimension()));
    }
    let path = reconstruct_path(&parent, source, target)?;
    let objectives = path_objectives(graph, &path);
    Ok(Solution { path, objectives })
}

/// Optimizes one objective subject to bounds on the others.
///
/// `bounds[i]` caps the cumulative value of objective `i` along the path: an
/// upper bound for minimized objectives, a lower bound for maximized ones;
/// infinity means unconstrained. The optimized objective honors its own
/// sense. Labels violating a minimized bound are rejected during
/// relaxation (cumulative values only grow); maximized bounds are enforced
/// at the target, where the full accumulation is known.
///
/// An unreachable or constraint-infeasible target is reported as an
/// all-infinite solution, not an error.
pub fn epsilon_constraint(
    graph: &MultiObjectiveGraph,
    source: usize,
    target: usize,
    objective_index: usize,
    bounds: &[f64],
) -> Result<Solution> {
    check_endpoints(graph, source, target)?;
    let dimension = graph.dimension();
    if objective_index >= dimension {
        return Err(Error::Validation(format!(
            "objective index {} out of range for {} objectives",
            objective_index, dimension
        )));
    }
    if bounds.len() != dimension {
        return Err(Error::Validation(format!(
            "{} bounds supplied for {} objectives",
            bounds.len(),
            dimension
        )));
    }

    let senses = graph.senses();
    let optimized_sense = senses[objective_index];
    let derived = |objectives: &[f64]| match optimized_sense {
        Sense::Minimize => objectives[objective_index],
        Sense::Maximize => -objectives[objective_index],
    };
    let constrained: Vec<usize> = (0..dimension)
        .filter(|&i| i != objective_index && bounds[i].is_finite())
        .collect();

    let mut arena: Vec<Label> = Vec::new();
    let mut resident: Vec<Vec<usize>> = vec![Vec::new(); graph.vertex_count()];
    let mut queue: MinHeap<usize, OrderedFloat<f64>> = MinHeap::new();

    arena.push(Label {
        vertex: source,
        objectives: vec![0.0; dimension],
        predecessor: None,
    });
    resident[source].push(0);
    queue.push(0, OrderedFloat(0.0));

    // comparison vector: the derived cost first, then each constrained
    // objective under its own sense
    let compare_key = |objectives: &[f64]| -> Vec<f64> {
        let mut key = Vec::with_capacity(1 + constrained.len());
        key.push(derived(objectives));
        for &i in &constrained {
            key.push(match senses[i] {
                Sense::Minimize => objectives[i],
                Sense::Maximize => -objectives[i],
            });
        }
        key
    };
    let weakly_dominates =
        |a: &[f64], b: &[f64]| a.iter().zip(b).all(|(x, y)| x <= y);

    while let Some((label_id, _)) = queue.pop() {
        let label = arena[label_id].clone();
        if !resident[label.vertex].contains(&label_id) {
            continue;
        }
        if label.vertex == target {
            continue;
        }

        for (_, edge) in graph.outgoing(label.vertex) {
            let next = edge.target;
            if on_path(&arena, label_id, next) {
                continue;
            }

            let mut objectives = label.objectives.clone();
            for (acc, step) in objectives.iter_mut().zip(&edge.objectives) {
                *acc += step;
            }

            // a minimized bound can never be repaired once exceeded
            if constrained.iter().any(|&i| {
                senses[i] == Sense::Minimize && objectives[i] > bounds[i]
            }) {
                continue;
            }

            let candidate_key = compare_key(&objectives);
            if resident[next]
                .iter()
                .any(|&id| weakly_dominates(&compare_key(&arena[id].objectives), &candidate_key))
            {
                continue;
            }
            resident[next].retain(|&id| {
                !weakly_dominates(&candidate_key, &compare_key(&arena[id].objectives))
            });

            let new_id = arena.len();
            arena.push(Label {
                vertex: next,
                objectives,
                predecessor: Some(label_id),
            });
            resident[next].push(new_id);
            if next != target {
                queue.push(
                    new_id,
                    OrderedFloat(derived(&arena[new_id].objectives)),
                );
            }
        }
    }

    let feasible = |objectives: &[f64]| {
        constrained.iter().all(|&i| match senses[i] {
            Sense::Minimize => objectives[i] <= bounds[i],
            Sense::Maximize => objectives[i] >= bounds[i],
        })
    };
    let best = resident[target]
        .iter()
        .copied()
        .filter(|&id| feasible(&arena[id].objectives))
        .min_by_key(|&id| (OrderedFloat(derived(&arena[id].objectives)), id));

    Ok(match best {
        Some(id) => Solution {
            path: label_path(&arena, id),
            objectives: arena[id].objectives.clone(),
        },
        None => Solution::infeasible(dimension),
    })
}

/// Lexicographic minimization in `priority` order over an all-minimize
/// graph.
///
/// Reduces to one single-objective search with perturbation weights
/// `M^(d-1-j)` for the objective at priority rank `j`, where `M` exceeds
/// any achievable objective total, so a difference at one rank always
/// outweighs every lower rank combined.
pub fn lexicographic(
    graph: &MultiObjectiveGraph,
    source: usize,
    target: usize,
    priority: &[usize],
) -> Result<Solution> {
    require_all_minimize(graph, "lexicographic search")?;
    check_endpoints(graph, source, target)?;
    let dimension = graph.dimension();

    let mut seen = priority.to_vec();
    seen.sort_unstable();
    if seen != (0..dimension).collect::<Vec<_>>() {
        return Err(Error::Validation(format!(
            "priority must be a permutation of 0..{}",
            dimension
        )));
    }

    // M bounds any path total: 1 + the largest per-objective sum over all edges
    let mut scale = vec![0.0; dimension];
    for id in 0..graph.edge_count() {
        for (acc, value) in scale.iter_mut().zip(&graph.edge(id).objectives) {
            *acc += value;
        }
    }
    let magnitude = 1.0 + scale.iter().cloned().fold(0.0, f64::max);

    let derived = graph.scalarized(|objectives| {
        priority
            .iter()
            .enumerate()
            .map(|(rank, &i)| objectives[i] * magnitude.powi((dimension - 1 - rank) as i32))
            .sum::<f64>()
    })?;

    let (dist, parent) = sssp_with_parents(&derived, source)?;
    if dist[target] == OrderedFloat(f64::INFINITY) {
        return Ok(Solution::infeasible(dimension));
    }
    let path = reconstruct_path(&parent, source, target)?;
    let objectives = path_objectives(graph, &path);
    Ok(Solution { path, objectives })
}
