use crate::data_structures::MinHeap;
use crate::graph::{MultiObjectiveGraph, Sense};
use crate::pareto::dominance::{dominates, epsilon_dominates, scalar_surrogate};
use crate::pareto::{Solution, EPSILON};
use crate::{Error, Result};
use log::debug;
use ordered_float::OrderedFloat;

/// One partial path in the label arena. Predecessors are arena indices, so
/// paths are reconstructed by an index walk and labels never own each other.
#[derive(Debug, Clone)]
pub(crate) struct Label {
    pub vertex: usize,
    pub objectives: Vec<f64>,
    pub predecessor: Option<usize>,
}

/// True when `vertex` already lies on the path encoded by `label_id`.
/// Extending a label back onto its own path can only help maximized
/// objectives by cycling, which is never a valid path improvement.
pub(crate) fn on_path(arena: &[Label], mut label_id: usize, vertex: usize) -> bool {
    loop {
        let label = &arena[label_id];
        if label.vertex == vertex {
            return true;
        }
        match label.predecessor {
            Some(pred) => label_id = pred,
            None => return false,
        }
    }
}

/// The vertex sequence of a label, source first.
pub(crate) fn label_path(arena: &[Label], mut label_id: usize) -> Vec<usize> {
    let mut path = vec![arena[label_id].vertex];
    while let Some(pred) = arena[label_id].predecessor {
        label_id = pred;
        path.push(arena[label_id].vertex);
    }
    path.reverse();
    path
}

/// Enumerates non-dominated paths from `source` to `target` by multi-label
/// search.
///
/// Every vertex keeps a set of mutually non-dominated labels; a candidate
/// label is admitted only if no resident dominates it, and evicts the
/// residents it dominates. The expansion queue is ordered by the scalar
/// surrogate with label-id tie-breaks, so enumeration is deterministic.
///
/// With `max_solutions` at least the true Pareto set size the result is the
/// exact Pareto front; otherwise it is a non-dominated subset. When the
/// target set is at the cap, epsilon-dominance (relative tolerance
/// [`EPSILON`]) thins crowded labels before the search continues; if nothing
/// can be thinned the search stops.
pub fn pareto_front(
    graph: &MultiObjectiveGraph,
    source: usize,
    target: usize,
    max_solutions: usize,
) -> Result<Vec<Solution>> {
    let n = graph.vertex_count();
    for v in [source, target] {
        if !graph.has_vertex(v) {
            return Err(Error::Bounds {
                vertex: v,
                vertex_count: n,
            });
        }
    }
    if max_solutions == 0 {
        return Err(Error::Validation("max_solutions must be at least 1".into()));
    }

    let senses = graph.senses();
    let dimension = graph.dimension();

    let mut arena: Vec<Label> = Vec::new();
    let mut resident: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut queue: MinHeap<usize, OrderedFloat<f64>> = MinHeap::new();

    arena.push(Label {
        vertex: source,
        objectives: vec![0.0; dimension],
        predecessor: None,
    });
    resident[source].push(0);
    queue.push(0, OrderedFloat(0.0));

    while let Some((label_id, _)) = queue.pop() {
        if resident[target].len() >= max_solutions {
            thin_by_epsilon(&mut resident[target], &arena, senses);
            if resident[target].len() >= max_solutions {
                debug!(
                    "pareto cap of {} reached with queue length {}",
                    max_solutions,
                    queue.len()
                );
                break;
            }
        }

        let label = arena[label_id].clone();
        // a label evicted after being queued is stale
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

            if resident[next]
                .iter()
                .any(|&id| dominates(&arena[id].objectives, &objectives, senses))
            {
                continue;
            }
            if next == target
                && resident[next].len() >= max_solutions
                && resident[next]
                    .iter()
                    .any(|&id| epsilon_dominates(&arena[id].objectives, &objectives, senses, EPSILON))
            {
                continue;
            }

            resident[next].retain(|&id| !dominates(&objectives, &arena[id].objectives, senses));

            let new_id = arena.len();
            arena.push(Label {
                vertex: next,
                objectives: objectives.clone(),
                predecessor: Some(label_id),
            });
            resident[next].push(new_id);
            if next != target {
                queue.push(new_id, OrderedFloat(scalar_surrogate(&objectives, senses)));
            }
        }
    }

    let mut ids = resident[target].clone();
    ids.sort_by_key(|&id| (OrderedFloat(scalar_surrogate(&arena[id].objectives, senses)), id));

    Ok(ids
        .into_iter()
        .map(|id| Solution {
            path: label_path(&arena, id),
            objectives: arena[id].objectives.clone(),
        })
        .collect())
}

/// Greedy epsilon-dominance thinning in surrogate order: a label survives
/// unless an already-kept label epsilon-dominates it.
fn thin_by_epsilon(ids: &mut Vec<usize>, arena: &[Label], senses: &[Sense]) {
    let mut ordered = ids.clone();
    ordered.sort_by_key(|&id| (OrderedFloat(scalar_surrogate(&arena[id].objectives, senses)), id));

    let mut kept: Vec<usize> = Vec::with_capacity(ordered.len());
    for id in ordered {
        if !kept
            .iter()
            .any(|&k| epsilon_dominates(&arena[k].objectives, &arena[id].objectives, senses, EPSILON))
        {
            kept.push(id);
        }
    }
    *ids = kept;
}

/// The Pareto solution closest to the utopia corner in normalized objective
/// space.
///
/// Each objective is scaled to `[0, 1]` across the front respecting its
/// sense (maximized objectives use one minus the normalized value, so zero
/// is always best); a dimension with no spread contributes nothing. Ties on
/// the Euclidean distance keep the earliest solution in the front's order.
pub fn knee_point(front: &[Solution], senses: &[Sense]) -> Option<Solution> {
    if front.is_empty() {
        return None;
    }
    let dimension = senses.len();

    let mut lo = vec![f64::INFINITY; dimension];
    let mut hi = vec![f64::NEG_INFINITY; dimension];
    for solution in front {
        for i in 0..dimension {
            lo[i] = lo[i].min(solution.objectives[i]);
            hi[i] = hi[i].max(solution.objectives[i]);
        }
    }

    let mut best: Option<(OrderedFloat<f64>, usize)> = None;
    for (index, solution) in front.iter().enumerate() {
        let mut squared = 0.0;
        for i in 0..dimension {
            let range = hi[i] - lo[i];
            if range <= 0.0 {
                continue;
            }
            let normalized = (solution.objectives[i] - lo[i]) / range;
            let distance = match senses[i] {
                Sense::Minimize => normalized,
                Sense::Maximize => 1.0 - normalized,
            };
            squared += distance * distance;
        }
        let key = OrderedFloat(squared);
        if best.map_or(true, |(b, _)| key < b) {
            best = Some((key, index));
        }
    }

    best.map(|(_, index)| front[index].clone())
}
