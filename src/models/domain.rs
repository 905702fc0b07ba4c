use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

/// Sex tag of a bird; sires form the first group of every pairing, dams the second
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Parse a free-form sex tag, ignoring case and surrounding whitespace
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "male" => Some(Sex::Male),
            "female" => Some(Sex::Female),
            _ => None,
        }
    }
}

/// One bird in a roster, as loaded from CSV or JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirdRecord {
    #[serde(deserialize_with = "deserialize_bird_id")]
    pub id: String,
    pub gender: String,
    pub color: String,
    pub head: String,
    pub feather: String,
    /// Body weight in grams
    pub weight: f64,
    pub power: f64,
    pub health: f64,
    #[serde(rename = "imagePath", alias = "image_path", default)]
    pub image_path: Option<String>,
}

impl BirdRecord {
    /// Helper to get the parsed sex tag, `None` when it is neither male nor female
    pub fn sex(&self) -> Option<Sex> {
        Sex::parse(&self.gender)
    }

    /// Image reference with absent and blank values collapsed to an empty string
    pub fn image_ref(&self) -> &str {
        self.image_path.as_deref().map(str::trim).unwrap_or("")
    }
}

/// Bird ids arrive either as strings or as bare JSON integers
fn deserialize_bird_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Signed(i64),
        Unsigned(u64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Signed(n) => n.to_string(),
        RawId::Unsigned(n) => n.to_string(),
    })
}

/// Scored sire x dam combination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairResult {
    #[serde(rename = "sireId")]
    pub sire_id: String,
    #[serde(rename = "damId")]
    pub dam_id: String,
    pub compatibility: f64,
    #[serde(rename = "diffColor")]
    pub diff_color: f64,
    #[serde(rename = "diffHead")]
    pub diff_head: f64,
    #[serde(rename = "diffFeather")]
    pub diff_feather: f64,
    #[serde(rename = "diffWeight")]
    pub diff_weight: f64,
    #[serde(rename = "diffPower")]
    pub diff_power: f64,
    #[serde(rename = "diffHealth")]
    pub diff_health: f64,
    #[serde(rename = "sireImage")]
    pub sire_image: String,
    #[serde(rename = "damImage")]
    pub dam_image: String,
}

/// Relative importance of each trait difference
///
/// Weights are plain multipliers and need not sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct TraitWeights {
    #[validate(range(min = 0.0))]
    pub color: f64,
    #[validate(range(min = 0.0))]
    pub weight: f64,
    #[validate(range(min = 0.0))]
    pub head: f64,
    #[validate(range(min = 0.0))]
    pub feather: f64,
    #[validate(range(min = 0.0))]
    pub power: f64,
    #[validate(range(min = 0.0))]
    pub health: f64,
}

impl Default for TraitWeights {
    fn default() -> Self {
        Self {
            color: 0.3,
            weight: 0.2,
            head: 0.1,
            feather: 0.1,
            power: 0.2,
            health: 0.1,
        }
    }
}

impl TraitWeights {
    /// Total of all weights; only informational, nothing requires it to be 1
    pub fn sum(&self) -> f64 {
        self.color + self.weight + self.head + self.feather + self.power + self.health
    }
}

/// Breeding targets used to pre-fill a client form
///
/// Only `weight` takes part in scoring, as the weight-difference denominator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetTraits {
    pub color: String,
    /// Target body weight in grams
    pub weight: f64,
    pub head: String,
    pub feather: String,
    pub power: f64,
    pub health: f64,
}

impl Default for TargetTraits {
    fn default() -> Self {
        Self {
            color: "white".to_string(),
            weight: 400.0,
            head: "long".to_string(),
            feather: "smooth".to_string(),
            power: 9.0,
            health: 9.0,
        }
    }
}
