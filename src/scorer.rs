//! The downstream feature-scoring seam.
//!
//! The datasets this crate emits feed a family of graph-metric scorers that
//! live outside it. They all follow the same two-phase contract: `fit`
//! precomputes whatever state the metric needs from a graph, `transform`
//! maps node pairs to one numeric feature column. A scorer that evaluates
//! hypothetical edges should mutate the graph only through
//! [`ScopedEdge`](crate::graph::ScopedEdge), so the structure is restored
//! on every exit path.

use crate::graph::Graph;
use crate::Result;

/// Two-phase scorer over node pairs.
pub trait PairScorer {
    /// Precompute state from `graph`.
    fn fit(&mut self, graph: &Graph) -> Result<()>;

    /// Map each `(node_i, node_j)` pair to one feature value.
    ///
    /// Implementations may assume `fit` ran first.
    fn transform(&self, pairs: &[(usize, usize)]) -> Result<Vec<f64>>;

    /// Column name of the produced feature.
    fn feature_name(&self) -> &str;
}
