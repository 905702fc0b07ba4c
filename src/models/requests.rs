use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{BirdRecord, TargetTraits, TraitWeights};

/// Request to rank sire x dam pairs
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct RankPairsRequest {
    /// Roster to rank; the sample roster is used when omitted
    #[serde(default)]
    pub birds: Option<Vec<BirdRecord>>,
    #[serde(default)]
    pub targets: Option<TargetTraits>,
    #[serde(default)]
    #[validate(nested)]
    pub weights: Option<TraitWeights>,
    #[serde(default)]
    #[validate(range(min = 1, max = 500))]
    pub limit: Option<u16>,
}

/// Query string for the CSV upload endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct RankCsvQuery {
    #[serde(default)]
    #[validate(range(min = 1, max = 500))]
    pub limit: Option<u16>,
}
