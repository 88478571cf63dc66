//! Split a 6-node cycle into train/holdout link-prediction datasets.
//!
//! The cycle has 6 edges; alpha 0.5 targets a 3-edge holdout and a 1-edge
//! train view, leaving removed edges as positives and the cycle's
//! non-edges as negatives. Both datasets are balanced to 4 rows per label.

use linksplit::{EdgeSamplingPolicy, Graph, GraphSampler, SamplerConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let g = Graph::from_edges(6, &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 0)]);

    let config = SamplerConfig::default()
        .with_method(EdgeSamplingPolicy::from_key("random-edge")?)
        .with_alphas(0.5, 0.5)
        .with_random_state(42);

    let sampler = GraphSampler::new(&g, config)?;
    let (train, holdout) = sampler.sample(4, true)?;

    println!("input graph: {} nodes, {} edges", g.node_count(), g.edge_count());
    println!();
    println!("train dataset ({} rows):", train.len());
    for r in train.records() {
        println!("  ({}, {})  label={}", r.node_i, r.node_j, r.label.as_u8());
    }
    println!();
    println!("holdout dataset ({} rows):", holdout.len());
    for r in holdout.records() {
        println!("  ({}, {})  label={}", r.node_i, r.node_j, r.label.as_u8());
    }

    Ok(())
}
