use crate::models::{PairResult, TraitWeights};
use crate::core::{grouping::NormalizedBird, normalizer::TRAIT_SCALE_MAX};

/// Best possible compatibility, reached when every difference is zero
pub const MAX_COMPATIBILITY: f64 = 100.0;

/// Weight differences are rescaled onto the same range as the other traits.
/// Tracks the normalizer's scale so the two cannot drift apart.
pub const WEIGHT_DIFF_SCALE: f64 = TRAIT_SCALE_MAX;

/// Absolute per-trait differences for one sire x dam pair
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TraitDifferences {
    pub color: f64,
    pub head: f64,
    pub feather: f64,
    pub weight: f64,
    pub power: f64,
    pub health: f64,
}

impl TraitDifferences {
    /// Weighted dissimilarity `S` of the pair
    #[inline]
    pub fn weighted_sum(&self, weights: &TraitWeights) -> f64 {
        self.color * weights.color
            + self.head * weights.head
            + self.feather * weights.feather
            + self.weight * weights.weight
            + self.power * weights.power
            + self.health * weights.health
    }
}

/// Compute the six trait differences between a sire and a dam
///
/// The raw weight gap (grams) is divided by the target weight, floored at 1
/// to keep degenerate targets from dividing by zero, then scaled to 0-10.
#[inline]
pub fn trait_differences(
    sire: &NormalizedBird,
    dam: &NormalizedBird,
    target_weight: f64,
) -> TraitDifferences {
    let a = &sire.record;
    let b = &dam.record;

    TraitDifferences {
        color: (sire.color_v - dam.color_v).abs(),
        head: (sire.head_v - dam.head_v).abs(),
        feather: (sire.feather_v - dam.feather_v).abs(),
        weight: (a.weight - b.weight).abs() / target_weight.max(1.0) * WEIGHT_DIFF_SCALE,
        power: (a.power - b.power).abs(),
        health: (a.health - b.health).abs(),
    }
}

/// Convert a weighted dissimilarity into a compatibility score (0-100)
///
/// Only the lower bound needs clamping: `S >= 0` keeps the score at or below 100.
/// Anything that rounds to zero or below becomes a positive `0.0`.
#[inline]
pub fn compatibility(weighted_sum: f64) -> f64 {
    let score = round2(MAX_COMPATIBILITY - weighted_sum);
    if score > 0.0 { score } else { 0.0 }
}

/// Round to two decimal places, halves away from zero
#[inline]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Score a single sire x dam combination
pub fn score_pair(
    sire: &NormalizedBird,
    dam: &NormalizedBird,
    target_weight: f64,
    weights: &TraitWeights,
) -> PairResult {
    let diffs = trait_differences(sire, dam, target_weight);
    let score = compatibility(diffs.weighted_sum(weights));

    PairResult {
        sire_id: sire.record.id.clone(),
        dam_id: dam.record.id.clone(),
        compatibility: score,
        diff_color: diffs.color,
        diff_head: diffs.head,
        diff_feather: diffs.feather,
        diff_weight: round2(diffs.weight),
        diff_power: diffs.power,
        diff_health: diffs.health,
        sire_image: sire.record.image_ref().to_string(),
        dam_image: dam.record.image_ref().to_string(),
    }
}
