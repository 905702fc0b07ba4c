use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use crate::models::domain::{PairResult, TargetTraits, TraitWeights};

/// Resolved picture of one side of the best pair
///
/// Falls back to a plain text label whenever the image cannot be shown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Portrait {
    Image {
        path: String,
        width: u32,
        height: u32,
        caption: String,
    },
    Label {
        text: String,
    },
}

/// Highlighted top-ranked pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BestPairView {
    #[serde(rename = "sireId")]
    pub sire_id: String,
    #[serde(rename = "damId")]
    pub dam_id: String,
    pub compatibility: f64,
    pub sire: Portrait,
    pub dam: Portrait,
}

/// Response for the rank endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankPairsResponse {
    #[serde(rename = "runId")]
    pub run_id: String,
    pub pairs: Vec<PairResult>,
    #[serde(rename = "bestPair")]
    pub best_pair: Option<BestPairView>,
    #[serde(rename = "totalBirds")]
    pub total_birds: usize,
    pub sires: usize,
    pub dams: usize,
    pub unassigned: usize,
    #[serde(rename = "totalPairs")]
    pub total_pairs: usize,
}

/// Known vocabularies and defaults for building a client form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraitCatalogResponse {
    pub vocabularies: BTreeMap<String, Vec<TraitValue>>,
    #[serde(rename = "defaultScore")]
    pub default_score: f64,
    pub targets: TargetTraits,
    pub weights: TraitWeights,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraitValue {
    pub value: String,
    pub score: f64,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    #[serde(rename = "rosterSize")]
    pub roster_size: usize,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}
