// Core algorithm exports
pub mod grouping;
pub mod normalizer;
pub mod ranker;
pub mod scoring;

pub use grouping::{group_by_sex, GroupedRoster, NormalizedBird};
pub use normalizer::{normalize, CategoricalTrait, DEFAULT_TRAIT_SCORE, TRAIT_SCALE_MAX};
pub use ranker::{PairRanker, RankResult};
pub use scoring::{compatibility, score_pair, trait_differences, TraitDifferences};
