use crate::graph::DirectedGraph;
use crate::{Error, Result};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// Optimization direction of one objective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sense {
    Minimize,
    Maximize,
}

/// A directed edge carrying one value per objective.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiObjectiveEdge {
    pub source: usize,
    pub target: usize,
    pub objectives: Vec<f64>,
}

/// A directed graph whose edges carry objective vectors of a fixed
/// dimension, with a graph-level sense per objective.
///
/// Topology follows [`DirectedGraph`]: vertices `0..n`, edge ids equal to
/// positions in the edge array, adjacency as edge-id lists. Objective names
/// are metadata only.
#[derive(Debug, Clone)]
pub struct MultiObjectiveGraph {
    vertex_count: usize,
    dimension: usize,
    edges: Vec<MultiObjectiveEdge>,
    adjacency: Vec<Vec<usize>>,
    senses: Vec<Sense>,
    objective_names: Vec<String>,
}

impl MultiObjectiveGraph {
    /// Builds a multi-objective graph. `senses` defaults to all-[`Sense::Minimize`]
    /// and `objective_names` to empty metadata when omitted.
    pub fn new(
        vertex_count: usize,
        edges: Vec<(usize, usize, Vec<f64>)>,
        dimension: usize,
        senses: Option<Vec<Sense>>,
        objective_names: Option<Vec<String>>,
    ) -> Result<Self> {
        if vertex_count == 0 {
            return Err(Error::Validation("graph must have at least one vertex".into()));
        }
        if dimension == 0 {
            return Err(Error::Validation("objective dimension must be at least 1".into()));
        }
        let senses = senses.unwrap_or_else(|| vec![Sense::Minimize; dimension]);
        if senses.len() != dimension {
            return Err(Error::Validation(format!(
                "{} senses supplied for {} objectives",
                senses.len(),
                dimension
            )));
        }
        let objective_names = objective_names.unwrap_or_default();
        if !objective_names.is_empty() && objective_names.len() != dimension {
            return Err(Error::Validation(format!(
                "{} objective names supplied for {} objectives",
                objective_names.len(),
                dimension
            )));
        }

        let mut adjacency = vec![Vec::new(); vertex_count];
        let mut edge_records = Vec::with_capacity(edges.len());
        for (id, (source, target, objectives)) in edges.into_iter().enumerate() {
            if source >= vertex_count || target >= vertex_count {
                return Err(Error::Validation(format!(
                    "edge {} ({} -> {}) leaves the vertex range 0..{}",
                    id, source, target, vertex_count
                )));
            }
            if objectives.len() != dimension {
                return Err(Error::Validation(format!(
                    "edge {} carries {} objective values, expected {}",
                    id,
                    objectives.len(),
                    dimension
                )));
            }
            adjacency[source].push(id);
            edge_records.push(MultiObjectiveEdge {
                source,
                target,
                objectives,
            });
        }

        Ok(MultiObjectiveGraph {
            vertex_count,
            dimension,
            edges: edge_records,
            adjacency,
            senses,
            objective_names,
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of objectives per edge.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn senses(&self) -> &[Sense] {
        &self.senses
    }

    pub fn objective_names(&self) -> &[String] {
        &self.objective_names
    }

    pub fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count
    }

    pub fn edge(&self, edge_id: usize) -> &MultiObjectiveEdge {
        &self.edges[edge_id]
    }

    /// Outgoing edges of a vertex as `(edge_id, edge)` pairs, in edge-id order.
    pub fn outgoing(&self, vertex: usize) -> impl Iterator<Item = (usize, &MultiObjectiveEdge)> {
        self.adjacency[vertex].iter().map(move |&id| (id, &self.edges[id]))
    }

    /// Derives a single-objective graph over the same topology by collapsing
    /// each edge's objective vector with `scalar`. The scalarization
    /// strategies reduce onto the single-objective driver through this.
    ///
    /// Fails with [`Error::Validation`] when any derived weight is negative.
    pub fn scalarized<F>(&self, scalar: F) -> Result<DirectedGraph<OrderedFloat<f64>>>
    where
        F: Fn(&[f64]) -> f64,
    {
        let edges = self
            .edges
            .iter()
            .map(|e| (e.source, e.target))
            .collect::<Vec<_>>();
        let weights = self
            .edges
            .iter()
            .map(|e| OrderedFloat(scalar(&e.objectives)))
            .collect::<Vec<_>>();
        DirectedGraph::new(self.vertex_count, edges, weights)
    }
}
