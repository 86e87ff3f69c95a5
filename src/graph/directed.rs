use crate::graph::traits::Graph;
use crate::{Error, Result};
use num_traits::{Float, Zero};
use std::fmt::Debug;

/// A directed edge identified by its position in the edge array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub source: usize,
    pub target: usize,
}

/// A directed graph with non-negative edge weights.
///
/// Vertices are `0..n`. Edge ids are `0..m` and equal the edge's position in
/// the edge and weight arrays. Adjacency is materialized as a
/// vector-of-vectors of edge ids so the outgoing list of any vertex is an
/// O(1) lookup. Parallel edges and self-loops are permitted.
///
/// The graph is validated on construction and immutable afterwards.
#[derive(Debug, Clone)]
pub struct DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    vertex_count: usize,
    edges: Vec<Edge>,
    weights: Vec<W>,
    /// Outgoing edge ids per vertex, in edge-id order
    adjacency: Vec<Vec<usize>>,
}

impl<W> DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Builds a graph from `n` vertices, an edge list and a parallel weight
    /// array.
    ///
    /// Fails with [`Error::Validation`] when the vertex set is empty, the
    /// weight array does not match the edge array, any weight is negative,
    /// or an edge endpoint is out of range.
    pub fn new(
        vertex_count: usize,
        edges: Vec<(usize, usize)>,
        weights: Vec<W>,
    ) -> Result<Self> {
        if vertex_count == 0 {
            return Err(Error::Validation("graph must have at least one vertex".into()));
        }
        if weights.len() != edges.len() {
            return Err(Error::Validation(format!(
                "{} weights supplied for {} edges",
                weights.len(),
                edges.len()
            )));
        }
        for (id, weight) in weights.iter().enumerate() {
            if *weight < W::zero() {
                return Err(Error::Validation(format!(
                    "edge {} has negative weight {:?}",
                    id, weight
                )));
            }
        }

        let mut adjacency = vec![Vec::new(); vertex_count];
        let mut edge_records = Vec::with_capacity(edges.len());
        for (id, (source, target)) in edges.into_iter().enumerate() {
            if source >= vertex_count || target >= vertex_count {
                return Err(Error::Validation(format!(
                    "edge {} ({} -> {}) leaves the vertex range 0..{}",
                    id, source, target, vertex_count
                )));
            }
            adjacency[source].push(id);
            edge_records.push(Edge { source, target });
        }

        Ok(DirectedGraph {
            vertex_count,
            edges: edge_records,
            weights,
            adjacency,
        })
    }

    /// The edge with the given id.
    pub fn edge(&self, edge_id: usize) -> Edge {
        self.edges[edge_id]
    }

    /// The weight of the edge with the given id.
    pub fn weight(&self, edge_id: usize) -> W {
        self.weights[edge_id]
    }

    /// Outgoing edge ids of a vertex.
    pub fn outgoing_edge_ids(&self, vertex: usize) -> &[usize] {
        &self.adjacency[vertex]
    }

    pub fn out_degree(&self, vertex: usize) -> usize {
        self.adjacency[vertex].len()
    }

    /// The minimum weight among edges from `source` to `target`, if any.
    /// With parallel edges the cheapest one wins.
    pub fn min_edge_weight(&self, source: usize, target: usize) -> Option<W> {
        self.adjacency[source]
            .iter()
            .filter(|&&id| self.edges[id].target == target)
            .map(|&id| self.weights[id])
            .fold(None, |best, w| match best {
                None => Some(w),
                Some(b) => Some(if w < b { w } else { b }),
            })
    }
}

impl<W> Graph<W> for DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        Box::new(
            self.adjacency[vertex]
                .iter()
                .map(move |&id| (self.edges[id].target, self.weights[id])),
        )
    }

    fn edges(&self) -> Box<dyn Iterator<Item = (usize, usize, W)> + '_> {
        Box::new(
            self.edges
                .iter()
                .zip(self.weights.iter())
                .map(|(e, &w)| (e.source, e.target, w)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordered_float::OrderedFloat;

    fn weights(values: &[f64]) -> Vec<OrderedFloat<f64>> {
        values.iter().map(|&w| OrderedFloat(w)).collect()
    }

    #[test]
    fn builds_adjacency_in_edge_order() {
        let g = DirectedGraph::new(
            3,
            vec![(0, 1), (0, 2), (1, 2)],
            weights(&[1.0, 2.0, 3.0]),
        )
        .unwrap();
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.outgoing_edge_ids(0), &[0, 1]);
        let out: Vec<_> = g.outgoing_edges(0).collect();
        assert_eq!(out, vec![(1, OrderedFloat(1.0)), (2, OrderedFloat(2.0))]);
    }

    #[test]
    fn rejects_empty_vertex_set() {
        let result = DirectedGraph::<OrderedFloat<f64>>::new(0, vec![], vec![]);
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn rejects_weight_count_mismatch() {
        let result = DirectedGraph::new(2, vec![(0, 1)], weights(&[1.0, 2.0]));
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn rejects_negative_weight() {
        let result = DirectedGraph::new(2, vec![(0, 1)], weights(&[-0.5]));
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn rejects_out_of_range_endpoint() {
        let result = DirectedGraph::new(2, vec![(0, 2)], weights(&[1.0]));
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn parallel_edges_keep_their_ids_and_min_wins() {
        let g = DirectedGraph::new(
            2,
            vec![(0, 1), (0, 1)],
            weights(&[5.0, 2.0]),
        )
        .unwrap();
        assert_eq!(g.min_edge_weight(0, 1), Some(OrderedFloat(2.0)));
        assert_eq!(g.min_edge_weight(1, 0), None);
    }
}
