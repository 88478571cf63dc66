//! Class-balanced resampling.
//!
//! Link-prediction pools are wildly imbalanced: a handful of removed edges
//! against O(V²) non-edges. Balancing draws a fixed count per label with
//! replacement, so the minority class is oversampled rather than truncating
//! the majority.

use rand::prelude::*;

use crate::label::{Label, LabeledDataset, NodePairRecord};
use crate::{Error, Result};

/// Resample `records` to exactly `num_samples` rows per label, drawing with
/// replacement.
///
/// The result always has `2 * num_samples` rows: the label-0 block followed
/// by the label-1 block. Use [`shuffle_with_rng`] to randomize row order
/// afterwards. A label with no records to draw from is an error when
/// `num_samples > 0`.
pub fn balance_with_rng<R: Rng + ?Sized>(
    records: &[NodePairRecord],
    num_samples: usize,
    rng: &mut R,
) -> Result<LabeledDataset> {
    let mut out = Vec::with_capacity(2 * num_samples);
    for label in [Label::Negative, Label::Positive] {
        let pool: Vec<&NodePairRecord> = records.iter().filter(|r| r.label == label).collect();
        if pool.is_empty() && num_samples > 0 {
            return Err(Error::EmptyClassPool { label });
        }
        for _ in 0..num_samples {
            out.push(*pool[rng.random_range(0..pool.len())]);
        }
    }
    Ok(LabeledDataset::new(out))
}

/// Shuffle dataset rows in place.
///
/// Positions are renumbered by the new order; no stable-order guarantee
/// survives a shuffle.
pub fn shuffle_with_rng<R: Rng + ?Sized>(dataset: &mut LabeledDataset, rng: &mut R) {
    dataset.records_mut().shuffle(rng);
}
