use crate::models::{BirdRecord, PairResult, TraitWeights};
use crate::core::{
    grouping::{group_by_sex, NormalizedBird},
    scoring::score_pair,
};

/// Result of ranking a whole roster
#[derive(Debug, Clone, Default)]
pub struct RankResult {
    /// Every sire x dam pair, best first
    pub pairs: Vec<PairResult>,
    pub total_birds: usize,
    pub sires: usize,
    pub dams: usize,
    pub unassigned: usize,
}

impl RankResult {
    /// Top-K prefix of the ranking
    pub fn top(&self, k: usize) -> &[PairResult] {
        &self.pairs[..k.min(self.pairs.len())]
    }

    /// Highest-ranked pair, if any pair exists at all
    pub fn best(&self) -> Option<&PairResult> {
        self.pairs.first()
    }
}

/// Exhaustive pair ranker
///
/// Every sire is compared with every dam; compatibility is not local, so no
/// candidate can be pruned up front without losing correctness.
#[derive(Debug, Clone)]
pub struct PairRanker {
    weights: TraitWeights,
}

impl PairRanker {
    pub fn new(weights: TraitWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: TraitWeights::default(),
        }
    }

    pub fn weights(&self) -> &TraitWeights {
        &self.weights
    }

    /// Score the full cross product of two groups and sort it
    ///
    /// Pairs are enumerated sire-major, dam-minor. The sort is stable, so
    /// pairs with equal compatibility keep that enumeration order.
    ///
    /// # Arguments
    /// * `sires` - First pairing group (males)
    /// * `dams` - Second pairing group (females)
    /// * `target_weight` - Target body weight in grams, the weight-difference denominator
    pub fn rank(
        &self,
        sires: &[NormalizedBird],
        dams: &[NormalizedBird],
        target_weight: f64,
    ) -> Vec<PairResult> {
        let mut pairs: Vec<PairResult> = sires
            .iter()
            .flat_map(|sire| {
                dams.iter()
                    .map(move |dam| score_pair(sire, dam, target_weight, &self.weights))
            })
            .collect();

        // Descending by compatibility; slice::sort_by is stable
        pairs.sort_by(|a, b| {
            b.compatibility
                .partial_cmp(&a.compatibility)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        pairs
    }

    /// Group a roster by sex, normalize it and rank every pair
    pub fn rank_roster(&self, records: &[BirdRecord], target_weight: f64) -> RankResult {
        let grouped = group_by_sex(records);
        let pairs = self.rank(&grouped.sires, &grouped.dams, target_weight);

        tracing::debug!(
            "Ranked {} pairs from {} sires and {} dams ({} unassigned)",
            pairs.len(),
            grouped.sires.len(),
            grouped.dams.len(),
            grouped.unassigned
        );

        RankResult {
            pairs,
            total_birds: records.len(),
            sires: grouped.sires.len(),
            dams: grouped.dams.len(),
            unassigned: grouped.unassigned,
        }
    }
}

impl Default for PairRanker {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
