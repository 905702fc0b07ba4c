// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{BirdRecord, Sex, PairResult, TraitWeights, TargetTraits};
pub use requests::{RankPairsRequest, RankCsvQuery};
pub use responses::{RankPairsResponse, BestPairView, Portrait, TraitCatalogResponse, TraitValue, HealthResponse, ErrorResponse};
