use linksplit::{
    balance_with_rng, build_nested_with_rng, label_pairs, shuffle_with_rng, EdgeSamplingPolicy,
    Error, Graph, GraphSampler, Label, NodePairRecord, SamplerConfig,
};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::{HashMap, HashSet};

fn arb_graph() -> impl Strategy<Value = Graph> {
    (4usize..16).prop_flat_map(|n| {
        prop::collection::vec((0..n, 0..n), 0..n * 3).prop_map(move |pairs| {
            let mut g = Graph::with_nodes(n);
            for (u, v) in pairs {
                if u != v {
                    g.add_edge(u.min(v), u.max(v));
                }
            }
            g
        })
    })
}

fn arb_policy() -> impl Strategy<Value = EdgeSamplingPolicy> {
    prop_oneof![
        Just(EdgeSamplingPolicy::RandomEdge),
        Just(EdgeSamplingPolicy::RandomEdgeWithInduction),
        Just(EdgeSamplingPolicy::HybridNodeEdge),
    ]
}

proptest! {
    #[test]
    fn prop_nesting_is_strict_or_fails_loudly(
        g in arb_graph(),
        alpha_outer in 0.05f64..0.95,
        alpha_inner in 0.05f64..0.95,
        policy in arb_policy(),
        seed in 0u64..1000,
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        match build_nested_with_rng(&g, alpha_outer, alpha_inner, policy, &mut rng) {
            Ok((holdout, train)) => {
                prop_assert!(train.edge_count() < holdout.edge_count());
                prop_assert!(holdout.edge_count() < g.edge_count());
                prop_assert_eq!(holdout.node_count(), g.node_count());
                prop_assert_eq!(train.node_count(), g.node_count());
                for (u, v) in train.edges() {
                    prop_assert!(holdout.contains_edge(u, v));
                }
                for (u, v) in holdout.edges() {
                    prop_assert!(g.contains_edge(u, v));
                }
            }
            Err(Error::NestingViolation { orig, holdout, train, .. }) => {
                // The reported counts must actually break the chain.
                prop_assert!(!(train < holdout && holdout < orig));
            }
            Err(other) => prop_assert!(false, "unexpected error: {other:?}"),
        }
    }

    #[test]
    fn prop_labels_partition_the_pair_space(
        g in arb_graph(),
        alpha in 0.3f64..0.9,
        seed in 0u64..1000,
    ) {
        let target = (alpha * g.edge_count() as f64).floor() as usize;
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let inner = EdgeSamplingPolicy::RandomEdge
            .sample_with_rng(&g, target, &mut rng)
            .unwrap();

        let records = label_pairs(&g, &inner);
        let positives: HashSet<(usize, usize)> = records.iter()
            .filter(|r| r.label == Label::Positive)
            .map(|r| (r.node_i, r.node_j))
            .collect();
        let negatives: HashSet<(usize, usize)> = records.iter()
            .filter(|r| r.label == Label::Negative)
            .map(|r| (r.node_i, r.node_j))
            .collect();

        prop_assert!(positives.is_disjoint(&negatives));
        prop_assert_eq!(positives.len() + inner.edge_count(), g.edge_count());

        let n = g.node_count();
        prop_assert_eq!(negatives.len(), n * (n - 1) / 2 - g.edge_count());
        for &(u, v) in &positives {
            prop_assert!(u < v);
            prop_assert!(g.contains_edge(u, v) && !inner.contains_edge(u, v));
        }
        for &(u, v) in &negatives {
            prop_assert!(u < v);
            prop_assert!(!g.contains_edge(u, v));
        }
    }

    #[test]
    fn prop_balanced_output_size(
        positives in 1usize..6,
        negatives in 1usize..40,
        num_samples in 0usize..50,
        seed in 0u64..1000,
    ) {
        let mut records = Vec::new();
        for i in 0..positives {
            records.push(NodePairRecord { node_i: i, node_j: i + 50, label: Label::Positive });
        }
        for i in 0..negatives {
            records.push(NodePairRecord { node_i: i, node_j: i + 100, label: Label::Negative });
        }

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let ds = balance_with_rng(&records, num_samples, &mut rng).unwrap();
        prop_assert_eq!(ds.len(), 2 * num_samples);
        prop_assert_eq!(ds.count(Label::Positive), num_samples);
        prop_assert_eq!(ds.count(Label::Negative), num_samples);
    }

    #[test]
    fn prop_shuffle_preserves_rows(
        positives in 1usize..6,
        negatives in 1usize..40,
        num_samples in 1usize..30,
        seed in 0u64..1000,
    ) {
        let mut records = Vec::new();
        for i in 0..positives {
            records.push(NodePairRecord { node_i: i, node_j: i + 50, label: Label::Positive });
        }
        for i in 0..negatives {
            records.push(NodePairRecord { node_i: i, node_j: i + 100, label: Label::Negative });
        }

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let ds = balance_with_rng(&records, num_samples, &mut rng).unwrap();
        let mut shuffled = ds.clone();
        shuffle_with_rng(&mut shuffled, &mut rng);

        let histogram = |d: &linksplit::LabeledDataset| {
            let mut m: HashMap<NodePairRecord, usize> = HashMap::new();
            for &r in d.records() {
                *m.entry(r).or_insert(0) += 1;
            }
            m
        };
        prop_assert_eq!(histogram(&ds), histogram(&shuffled));
    }

    #[test]
    fn prop_pipeline_is_deterministic(
        g in arb_graph(),
        policy in arb_policy(),
        num_samples in 1usize..20,
        shuffle in any::<bool>(),
        seed in 0u64..1000,
    ) {
        let config = SamplerConfig::default()
            .with_method(policy)
            .with_alphas(0.7, 0.7)
            .with_random_state(seed);
        let sampler = GraphSampler::new(&g, config).unwrap();
        let a = sampler.sample(num_samples, shuffle);
        let b = sampler.sample(num_samples, shuffle);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_successful_runs_are_exactly_balanced(
        g in arb_graph(),
        num_samples in 1usize..20,
        seed in 0u64..1000,
    ) {
        let config = SamplerConfig::default()
            .with_alphas(0.6, 0.6)
            .with_random_state(seed);
        let sampler = GraphSampler::new(&g, config).unwrap();
        if let Ok((train, holdout)) = sampler.sample(num_samples, false) {
            for ds in [&train, &holdout] {
                prop_assert_eq!(ds.len(), 2 * num_samples);
                prop_assert_eq!(ds.count(Label::Positive), num_samples);
                prop_assert_eq!(ds.count(Label::Negative), num_samples);
            }
        }
    }
}
