//! Edge-sampling strategies.
//!
//! Each strategy takes a source graph and an edge budget and returns an
//! edge-induced subgraph over the same node universe. The strategy is a
//! tagged variant resolved at configuration time, so an unknown key fails
//! before any sampling runs.
//!
//! ## References
//!
//! - Leskovec, Faloutsos (2006): *Sampling from Large Graphs*.
//!
//! Notes:
//! - All variants are stochastic but deterministic for a fixed RNG stream.
//! - Only `RandomEdgeWithInduction` may overshoot the budget; the other two
//!   hit it exactly.

use rand::prelude::*;

use crate::graph::Graph;
use crate::{Error, Result};

/// Probability of the node-first branch in [`EdgeSamplingPolicy::HybridNodeEdge`].
const HYBRID_NODE_EDGE_PROB: f64 = 0.8;

/// Strategy for carving an edge subsample out of a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EdgeSamplingPolicy {
    /// Uniform edges without replacement.
    RandomEdge,
    /// Uniform edges, then every source edge running between endpoints the
    /// sample touched.
    RandomEdgeWithInduction,
    /// Draws a random node's incident edge with probability 0.8, a uniform
    /// edge otherwise, until the budget is met.
    HybridNodeEdge,
}

impl EdgeSamplingPolicy {
    /// Resolve a configuration key.
    ///
    /// Accepts the full names `random-edge`, `random-edge-with-induction`
    /// and `hybrid-node-edge`, plus the short aliases `rs`, `rswi`, `hnes`.
    pub fn from_key(key: &str) -> Result<Self> {
        match key {
            "random-edge" | "rs" => Ok(Self::RandomEdge),
            "random-edge-with-induction" | "rswi" => Ok(Self::RandomEdgeWithInduction),
            "hybrid-node-edge" | "hnes" => Ok(Self::HybridNodeEdge),
            _ => Err(Error::UnknownSamplingMethod(key.to_string())),
        }
    }

    /// The canonical configuration key for this variant.
    pub fn key(&self) -> &'static str {
        match self {
            Self::RandomEdge => "random-edge",
            Self::RandomEdgeWithInduction => "random-edge-with-induction",
            Self::HybridNodeEdge => "hybrid-node-edge",
        }
    }

    /// Sample an edge-induced subgraph with approximately `target` edges.
    ///
    /// The result shares `graph`'s node universe and its edge set is a
    /// subset of `graph`'s. Asking for more edges than the graph has is an
    /// error; no clamping happens.
    pub fn sample_with_rng<R: Rng + ?Sized>(
        &self,
        graph: &Graph,
        target: usize,
        rng: &mut R,
    ) -> Result<Graph> {
        let available = graph.edge_count();
        if target > available {
            return Err(Error::TargetExceedsEdges { requested: target, available });
        }
        let sampled = match self {
            Self::RandomEdge => random_edge(graph, target, rng),
            Self::RandomEdgeWithInduction => random_edge_with_induction(graph, target, rng),
            Self::HybridNodeEdge => hybrid_node_edge(graph, target, rng),
        };
        Ok(sampled)
    }
}

impl std::str::FromStr for EdgeSamplingPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_key(s)
    }
}

impl std::fmt::Display for EdgeSamplingPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Uniform `target`-of-n edges: shuffle the edge list, keep a prefix.
fn random_edge<R: Rng + ?Sized>(graph: &Graph, target: usize, rng: &mut R) -> Graph {
    let mut edges = graph.edges();
    edges.shuffle(rng);
    let mut out = graph.same_nodes();
    for &(u, v) in edges.iter().take(target) {
        out.add_edge(u, v);
    }
    out
}

/// Uniform edge sample, closed over the endpoints it touched: any source
/// edge with both endpoints covered is pulled in as well.
fn random_edge_with_induction<R: Rng + ?Sized>(
    graph: &Graph,
    target: usize,
    rng: &mut R,
) -> Graph {
    let mut edges = graph.edges();
    edges.shuffle(rng);
    let mut covered = vec![false; graph.node_count()];
    let mut out = graph.same_nodes();
    for &(u, v) in edges.iter().take(target) {
        out.add_edge(u, v);
        covered[u] = true;
        covered[v] = true;
    }
    for (u, v) in graph.edges() {
        if covered[u] && covered[v] {
            out.add_edge(u, v);
        }
    }
    out
}

/// Node-biased edge collection: pick a random non-isolated node and one of
/// its incident edges, or fall back to a uniform edge, until `target`
/// distinct edges are collected.
fn hybrid_node_edge<R: Rng + ?Sized>(graph: &Graph, target: usize, rng: &mut R) -> Graph {
    let edges = graph.edges();
    let active: Vec<usize> = (0..graph.node_count()).filter(|&u| graph.degree(u) > 0).collect();
    let mut out = graph.same_nodes();
    while out.edge_count() < target {
        let (u, v) = if rng.random::<f64>() < HYBRID_NODE_EDGE_PROB {
            let u = active[rng.random_range(0..active.len())];
            let nth = rng.random_range(0..graph.degree(u));
            let v = graph.neighbors(u).nth(nth).expect("index bounded by degree");
            (u, v)
        } else {
            edges[rng.random_range(0..edges.len())]
        };
        out.add_edge(u, v);
    }
    out
}
