//! Nested holdout/train subgraph construction.
//!
//! Two shrink steps produce `train ⊂ holdout ⊂ original`. The pairs removed
//! between holdout and train become training positives; the pairs removed
//! between the original and the holdout become evaluation positives. Strict
//! nesting guarantees the two sets never leak into each other.

use rand::prelude::*;
use tracing::debug;

use crate::graph::Graph;
use crate::policy::EdgeSamplingPolicy;
use crate::{Error, Result};

/// Build the holdout and train subgraphs of `graph`.
///
/// The holdout targets `floor(alpha_outer * |E|)` edges of `graph`; the
/// train view targets `floor(alpha_inner * |E(holdout)|)` edges of the
/// holdout. After sampling, the chain
/// `|E(train)| < |E(holdout)| < |E(graph)|` must hold strictly; a violation
/// is fatal and carries all three counts plus both targets, since it means
/// the configuration is degenerate for this graph (alpha too close to 1, or
/// the graph too small or sparse for the requested ratios).
///
/// Alpha ranges are not checked here. [`SamplerConfig::validate`] rejects
/// out-of-range ratios before a sampler is built; calling this function
/// directly with `alpha_outer = 1.0` surfaces as a nesting violation.
///
/// [`SamplerConfig::validate`]: crate::sampler::SamplerConfig::validate
pub fn build_nested_with_rng<R: Rng + ?Sized>(
    graph: &Graph,
    alpha_outer: f64,
    alpha_inner: f64,
    policy: EdgeSamplingPolicy,
    rng: &mut R,
) -> Result<(Graph, Graph)> {
    let holdout_target = (alpha_outer * graph.edge_count() as f64).floor() as usize;
    let holdout = policy.sample_with_rng(graph, holdout_target, rng)?;

    let train_target = (alpha_inner * holdout.edge_count() as f64).floor() as usize;
    let train = policy.sample_with_rng(&holdout, train_target, rng)?;

    let (orig, ho, tr) = (graph.edge_count(), holdout.edge_count(), train.edge_count());
    if !(tr < ho && ho < orig) {
        return Err(Error::NestingViolation {
            orig,
            holdout: ho,
            train: tr,
            holdout_target,
            train_target,
        });
    }
    debug!(orig, holdout = ho, train = tr, policy = %policy, "nested subgraphs built");
    Ok((holdout, train))
}
