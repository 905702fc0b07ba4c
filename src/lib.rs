//! Loft Match - pairing compatibility service for pigeon breeding rosters
//!
//! This library provides the core pairing algorithm: categorical traits are
//! normalized onto a shared 0-10 scale, every sire is compared with every dam
//! through a weighted sum of trait differences, and the resulting pairs are
//! ranked by a bounded compatibility score.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{PairRanker, RankResult, normalizer::{normalize, CategoricalTrait}};
pub use models::{BirdRecord, PairResult, TraitWeights, TargetTraits, RankPairsRequest, RankPairsResponse};
