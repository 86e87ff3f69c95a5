use crate::algorithm::recursive::{partition_parameter, pivot_threshold, recursive_layer};
use crate::graph::Graph;
use crate::{Error, Result};
use log::debug;
use num_traits::{Float, Zero};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::time::Instant;

/// Default cap on correctness-fallback sweeps.
const DEFAULT_FALLBACK_PASSES: usize = 10;

/// Observational record returned by [`DmySolver::sssp_statistics`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SsspStatistics {
    pub vertex_count: usize,
    pub edge_count: usize,
    pub source: usize,
    /// Pivot threshold k chosen for the top recursion layer
    pub pivot_threshold: usize,
    /// Partition parameter t chosen for the top recursion layer
    pub partition_parameter: u32,
    pub runtime_ms: f64,
    pub reachable_count: usize,
    pub unreachable_count: usize,
    /// Largest finite distance
    pub max_distance: f64,
    /// Mean over finite distances
    pub mean_distance: f64,
}

/// Single-source shortest path driver built on the recursive
/// frontier-sparsification scheme.
///
/// The driver owns the distance and parent buffers for the duration of a
/// call, runs the recursion over the full vertex set, then applies a bounded
/// Bellman-Ford mop-up that repairs any relaxation the recursion left
/// pending. The mop-up is a correctness mechanism, not a performance one;
/// its pass cap defaults to 10 and is the only driver tunable.
///
/// Equal-distance ties keep the first improving parent encountered in the
/// deterministic relaxation order, which is the smallest predecessor id.
#[derive(Debug, Clone)]
pub struct DmySolver {
    max_fallback_passes: usize,
}

impl Default for DmySolver {
    fn default() -> Self {
        DmySolver::new()
    }
}

impl DmySolver {
    pub fn new() -> Self {
        DmySolver {
            max_fallback_passes: DEFAULT_FALLBACK_PASSES,
        }
    }

    /// Overrides the fallback pass cap (clamped to at least 1).
    pub fn with_max_fallback_passes(mut self, passes: usize) -> Self {
        self.max_fallback_passes = passes.max(1);
        self
    }

    /// Shortest distances from `source` to every vertex; unreachable
    /// vertices map to infinity.
    pub fn sssp<W, G>(&self, graph: &G, source: usize) -> Result<Vec<W>>
    where
        W: Float + Zero + Debug + Copy + Ord,
        G: Graph<W>,
    {
        self.solve(graph, source, W::infinity()).map(|(dist, _)| dist)
    }

    /// Distances plus one valid shortest-path tree as a parent vector;
    /// `parent[source]` is `None`.
    pub fn sssp_with_parents<W, G>(
        &self,
        graph: &G,
        source: usize,
    ) -> Result<(Vec<W>, Vec<Option<usize>>)>
    where
        W: Float + Zero + Debug + Copy + Ord,
        G: Graph<W>,
    {
        self.solve(graph, source, W::infinity())
    }

    /// Distances truncated at `max_distance`: vertices further than the
    /// bound report infinity.
    pub fn sssp_bounded<W, G>(&self, graph: &G, source: usize, max_distance: W) -> Result<Vec<W>>
    where
        W: Float + Zero + Debug + Copy + Ord,
        G: Graph<W>,
    {
        if max_distance < W::zero() {
            return Err(Error::Validation("max_distance must be non-negative".into()));
        }
        self.solve(graph, source, max_distance).map(|(dist, _)| dist)
    }

    /// Runs [`DmySolver::sssp`] and reports run observations alongside.
    pub fn sssp_statistics<W, G>(&self, graph: &G, source: usize) -> Result<SsspStatistics>
    where
        W: Float + Zero + Debug + Copy + Ord,
        G: Graph<W>,
    {
        let started = Instant::now();
        let (dist, _) = self.solve(graph, source, W::infinity())?;
        let runtime_ms = started.elapsed().as_secs_f64() * 1e3;

        let finite: Vec<f64> = dist
            .iter()
            .filter(|d| **d != W::infinity())
            .map(|d| d.to_f64().unwrap_or(f64::INFINITY))
            .collect();
        let reachable_count = finite.len();
        let max_distance = finite.iter().cloned().fold(0.0, f64::max);
        let mean_distance = if finite.is_empty() {
            0.0
        } else {
            finite.iter().sum::<f64>() / finite.len() as f64
        };

        Ok(SsspStatistics {
            vertex_count: graph.vertex_count(),
            edge_count: graph.edge_count(),
            source,
            pivot_threshold: pivot_threshold(graph.vertex_count()),
            partition_parameter: partition_parameter(graph.vertex_count()),
            runtime_ms,
            reachable_count,
            unreachable_count: graph.vertex_count() - reachable_count,
            max_distance,
            mean_distance,
        })
    }

    /// Independent searches from several sources, run in parallel over the
    /// shared immutable graph. Each search owns its own buffers.
    pub fn sssp_many<W, G>(&self, graph: &G, sources: &[usize]) -> Result<Vec<Vec<W>>>
    where
        W: Float + Zero + Debug + Copy + Ord + Send,
        G: Graph<W> + Sync,
    {
        for &source in sources {
            if !graph.has_vertex(source) {
                return Err(Error::Bounds {
                    vertex: source,
                    vertex_count: graph.vertex_count(),
                });
            }
        }
        sources
            .par_iter()
            .map(|&source| self.sssp(graph, source))
            .collect()
    }

    fn solve<W, G>(
        &self,
        graph: &G,
        source: usize,
        bound: W,
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

        debug!(
            "dmy sssp: n={} m={} source={} k={} t={}",
            n,
            graph.edge_count(),
            source,
            pivot_threshold(n),
            partition_parameter(n)
        );

        let all: Vec<usize> = (0..n).collect();
        recursive_layer(graph, &mut dist, &mut parent, &all, &[source], bound)?;
        self.repair(graph, &mut dist, &mut parent, bound);

        Ok((dist, parent))
    }

    /// Bounded Bellman-Ford mop-up: sweeps every outgoing edge of every
    /// settled vertex until a pass changes nothing or the cap is hit.
    ///
    /// Passes alternate between ascending and descending vertex order, so a
    /// chain of pending relaxations settles one monotone run per pass
    /// instead of one edge.
    fn repair<W, G>(&self, graph: &G, dist: &mut [W], parent: &mut [Option<usize>], bound: W)
    where
        W: Float + Zero + Debug + Copy + Ord,
        G: Graph<W>,
    {
        let n = graph.vertex_count();
        let passes = n.min(self.max_fallback_passes);
        for pass in 0..passes {
            let mut changed = false;
            let order: Box<dyn Iterator<Item = usize>> = if pass % 2 == 0 {
                Box::new(0..n)
            } else {
                Box::new((0..n).rev())
            };
            for u in order {
                if dist[u] == W::infinity() || dist[u] > bound {
                    continue;
                }
                for (v, weight) in graph.outgoing_edges(u) {
                    let candidate = dist[u] + weight;
                    if candidate < dist[v] && candidate <= bound {
                        dist[v] = candidate;
                        parent[v] = Some(u);
                        changed = true;
                    }
                }
            }
            if !changed {
                debug!("fallback converged after {} passes", pass);
                return;
            }
        }
        debug!("fallback hit the {}-pass cap", passes);
    }
}

/// [`DmySolver::sssp`] with default settings.
pub fn sssp<W, G>(graph: &G, source: usize) -> Result<Vec<W>>
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    DmySolver::new().sssp(graph, source)
}

/// [`DmySolver::sssp_with_parents`] with default settings.
pub fn sssp_with_parents<W, G>(graph: &G, source: usize) -> Result<(Vec<W>, Vec<Option<usize>>)>
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    DmySolver::new().sssp_with_parents(graph, source)
}

/// [`DmySolver::sssp_bounded`] with default settings.
pub fn sssp_bounded<W, G>(graph: &G, source: usize, max_distance: W) -> Result<Vec<W>>
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    DmySolver::new().sssp_bounded(graph, source, max_distance)
}

/// [`DmySolver::sssp_statistics`] with default settings.
pub fn sssp_statistics<W, G>(graph: &G, source: usize) -> Result<SsspStatistics>
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    DmySolver::new().sssp_statistics(graph, source)
}

/// [`DmySolver::sssp_many`] with default settings.
pub fn sssp_many<W, G>(graph: &G, sources: &[usize]) -> Result<Vec<Vec<W>>>
where
    W: Float + Zero + Debug + Copy + Ord + Send,
    G: Graph<W> + Sync,
{
    DmySolver::new().sssp_many(graph, sources)
}
