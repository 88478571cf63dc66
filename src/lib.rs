//! `linksplit`: supervised training data for link prediction.
//!
//! Carves an observed graph into two strictly nested subgraphs (a holdout
//! and a train view), labels node pairs as positives (edges removed by
//! sampling) or negatives (non-edges of the richer graph), and emits
//! class-balanced, reproducible datasets for downstream feature scoring.
//!
//! Exposed modules:
//! - `graph`: contiguous-id undirected graph + scoped mutation guard.
//! - `policy`: pluggable edge-sampling strategies.
//! - `nested`: holdout/train construction with the strict-nesting check.
//! - `label`: positive/negative pair enumeration.
//! - `balance`: fixed-count-per-label resampling with replacement.
//! - `sampler`: the end-to-end pipeline.
//! - `scorer`: the fit/transform contract downstream scorers implement.
//! - `batch`: many-graph runs with per-unit failure isolation.
//!
//! Every stochastic entrypoint takes a caller-supplied RNG (`*_with_rng`)
//! or a seed; nothing in the pipeline touches global randomness.

#![forbid(unsafe_code)]

pub mod balance;
pub mod batch;
pub mod graph;
pub mod label;
pub mod nested;
pub mod policy;
pub mod sampler;
pub mod scorer;

pub use balance::{balance_with_rng, shuffle_with_rng};
pub use graph::{Graph, ScopedEdge};
pub use label::{label_pairs, Label, LabeledDataset, NodePairRecord};
pub use nested::build_nested_with_rng;
pub use policy::EdgeSamplingPolicy;
pub use sampler::{GraphSampler, SamplerConfig};
pub use scorer::PairScorer;

/// Errors across the sampling pipeline.
///
/// All of these abort the whole `sample()` call; no partial or degraded
/// dataset is ever returned, and nothing is retried internally.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// Unrecognized sampling-method key.
    #[error("unknown sampling method {0:?} (expected random-edge, random-edge-with-induction or hybrid-node-edge)")]
    UnknownSamplingMethod(String),

    /// A shrink ratio outside the open interval (0, 1).
    #[error("{name} must lie in (0, 1), got {value}")]
    AlphaOutOfRange { name: &'static str, value: f64 },

    /// The strict chain `train < holdout < original` failed after sampling.
    #[error("nesting violated: edge counts orig={orig}, holdout={holdout} (target {holdout_target}), train={train} (target {train_target})")]
    NestingViolation {
        orig: usize,
        holdout: usize,
        train: usize,
        holdout_target: usize,
        train_target: usize,
    },

    /// A policy was asked for more edges than the source graph has.
    #[error("sampling target {requested} exceeds the {available} available edges")]
    TargetExceedsEdges { requested: usize, available: usize },

    /// Balancing found no records to draw for a label.
    #[error("cannot balance: no {label:?} records to sample from")]
    EmptyClassPool { label: label::Label },
}

pub type Result<T> = std::result::Result<T, Error>;
