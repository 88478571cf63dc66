//! Pipeline orchestration.
//!
//! [`GraphSampler`] wires the stages end to end: nested subgraph
//! construction, pair labeling for both graph pairs, balancing, and the
//! optional shuffle. The pipeline is single-threaded and fully
//! deterministic given a seed: one generator is threaded through every
//! stochastic step, and any failure aborts the whole call with no partial
//! output.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::balance::{balance_with_rng, shuffle_with_rng};
use crate::graph::Graph;
use crate::label::{label_pairs, LabeledDataset};
use crate::nested::build_nested_with_rng;
use crate::policy::EdgeSamplingPolicy;
use crate::{Error, Result};

/// Configuration for [`GraphSampler`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SamplerConfig {
    /// Edge-sampling strategy applied at both shrink steps.
    pub sampling_method: EdgeSamplingPolicy,
    /// Holdout shrink ratio relative to the input graph, in (0, 1).
    pub alpha_outer: f64,
    /// Train shrink ratio relative to the holdout, in (0, 1).
    pub alpha_inner: f64,
    /// Seed for the pipeline generator.
    pub random_state: u64,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            sampling_method: EdgeSamplingPolicy::RandomEdge,
            alpha_outer: 0.8,
            alpha_inner: 0.8,
            random_state: 42,
        }
    }
}

impl SamplerConfig {
    /// Set the sampling strategy.
    pub fn with_method(mut self, method: EdgeSamplingPolicy) -> Self {
        self.sampling_method = method;
        self
    }

    /// Set both shrink ratios.
    pub fn with_alphas(mut self, alpha_outer: f64, alpha_inner: f64) -> Self {
        self.alpha_outer = alpha_outer;
        self.alpha_inner = alpha_inner;
        self
    }

    /// Set the generator seed.
    pub fn with_random_state(mut self, random_state: u64) -> Self {
        self.random_state = random_state;
        self
    }

    /// Reject shrink ratios outside the open interval (0, 1).
    pub fn validate(&self) -> Result<()> {
        for (name, value) in
            [("alpha_outer", self.alpha_outer), ("alpha_inner", self.alpha_inner)]
        {
            if !(value > 0.0 && value < 1.0) {
                return Err(Error::AlphaOutOfRange { name, value });
            }
        }
        Ok(())
    }
}

/// Samples class-balanced train and holdout datasets from one input graph.
///
/// The train dataset is labeled between the holdout and train subgraphs;
/// the holdout dataset between the original graph and the holdout. Strict
/// nesting keeps the two positive sets disjoint.
///
/// The borrowed graph must not be mutated elsewhere while a `sample*` call
/// runs; the borrow checker enforces this.
#[derive(Debug)]
pub struct GraphSampler<'g> {
    graph: &'g Graph,
    config: SamplerConfig,
}

impl<'g> GraphSampler<'g> {
    /// Validate `config` and wrap `graph`. Configuration errors surface
    /// here, before any sampling.
    pub fn new(graph: &'g Graph, config: SamplerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { graph, config })
    }

    /// The validated configuration.
    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// Produce `(train, holdout)` datasets, `num_samples` rows per label
    /// each, from a generator seeded with the configured `random_state`.
    pub fn sample(
        &self,
        num_samples: usize,
        shuffle: bool,
    ) -> Result<(LabeledDataset, LabeledDataset)> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.config.random_state);
        self.sample_with_rng(num_samples, shuffle, &mut rng)
    }

    /// As [`sample`](GraphSampler::sample), with a caller-built generator.
    pub fn sample_with_rng<R: Rng + ?Sized>(
        &self,
        num_samples: usize,
        shuffle: bool,
        rng: &mut R,
    ) -> Result<(LabeledDataset, LabeledDataset)> {
        let (holdout, train) = build_nested_with_rng(
            self.graph,
            self.config.alpha_outer,
            self.config.alpha_inner,
            self.config.sampling_method,
            rng,
        )?;

        let train_pool = label_pairs(&holdout, &train);
        let holdout_pool = label_pairs(self.graph, &holdout);
        debug!(
            train_pool = train_pool.len(),
            holdout_pool = holdout_pool.len(),
            "node pairs labeled"
        );

        let mut train_ds = balance_with_rng(&train_pool, num_samples, rng)?;
        let mut holdout_ds = balance_with_rng(&holdout_pool, num_samples, rng)?;

        if shuffle {
            shuffle_with_rng(&mut train_ds, rng);
            shuffle_with_rng(&mut holdout_ds, rng);
        }
        debug!(rows = train_ds.len(), shuffle, "datasets balanced");
        Ok((train_ds, holdout_ds))
    }
}
