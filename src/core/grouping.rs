use crate::models::{BirdRecord, Sex};
use crate::core::normalizer::{normalize, CategoricalTrait};

/// A bird together with its categorical traits mapped onto the 0-10 scale
///
/// The derived scores are computed once when the bird enters a scoring pass.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedBird {
    pub record: BirdRecord,
    pub color_v: f64,
    pub head_v: f64,
    pub feather_v: f64,
}

impl NormalizedBird {
    pub fn from_record(record: BirdRecord) -> Self {
        let color_v = normalize(CategoricalTrait::Color, &record.color);
        let head_v = normalize(CategoricalTrait::HeadShape, &record.head);
        let feather_v = normalize(CategoricalTrait::FeatherPattern, &record.feather);

        Self {
            record,
            color_v,
            head_v,
            feather_v,
        }
    }
}

/// Roster split into the two pairing groups
#[derive(Debug, Clone, Default)]
pub struct GroupedRoster {
    pub sires: Vec<NormalizedBird>,
    pub dams: Vec<NormalizedBird>,
    /// Birds whose sex tag matched neither group
    pub unassigned: usize,
}

/// Normalize every bird and split the roster by sex, keeping roster order
pub fn group_by_sex(records: &[BirdRecord]) -> GroupedRoster {
    let mut grouped = GroupedRoster::default();

    for record in records {
        match record.sex() {
            Some(Sex::Male) => grouped.sires.push(NormalizedBird::from_record(record.clone())),
            Some(Sex::Female) => grouped.dams.push(NormalizedBird::from_record(record.clone())),
            None => {
                tracing::debug!("Bird {} has unrecognised sex tag {:?}, skipping", record.id, record.gender);
                grouped.unassigned += 1;
            }
        }
    }

    grouped
}
