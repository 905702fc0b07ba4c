use std::fmt;
use std::str::FromStr;

/// Upper bound of the common trait scale every difference is expressed on
pub const TRAIT_SCALE_MAX: f64 = 10.0;

/// Score given to any categorical value missing from the lookup tables.
///
/// Unknown vocabulary degrades to a mid-high score instead of failing the pass.
pub const DEFAULT_TRAIT_SCORE: f64 = 7.0;

const COLOR_SCORES: &[(&str, f64)] = &[
    ("white", 10.0),
    ("gray", 8.0),
    ("black", 6.0),
    ("brown", 7.0),
];

const HEAD_SHAPE_SCORES: &[(&str, f64)] = &[
    ("long", 10.0),
    ("medium", 7.0),
    ("short", 5.0),
];

const FEATHER_PATTERN_SCORES: &[(&str, f64)] = &[
    ("smooth", 10.0),
    ("medium", 7.0),
    ("rough", 4.0),
];

/// Categorical traits that are mapped onto the numeric scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoricalTrait {
    Color,
    HeadShape,
    FeatherPattern,
}

impl CategoricalTrait {
    pub const ALL: [CategoricalTrait; 3] = [
        CategoricalTrait::Color,
        CategoricalTrait::HeadShape,
        CategoricalTrait::FeatherPattern,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CategoricalTrait::Color => "color",
            CategoricalTrait::HeadShape => "head-shape",
            CategoricalTrait::FeatherPattern => "feather-pattern",
        }
    }

    /// Known values and their scores, in table order
    pub fn vocabulary(&self) -> &'static [(&'static str, f64)] {
        match self {
            CategoricalTrait::Color => COLOR_SCORES,
            CategoricalTrait::HeadShape => HEAD_SHAPE_SCORES,
            CategoricalTrait::FeatherPattern => FEATHER_PATTERN_SCORES,
        }
    }
}

impl fmt::Display for CategoricalTrait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CategoricalTrait {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "color" => Ok(CategoricalTrait::Color),
            "head-shape" | "head" => Ok(CategoricalTrait::HeadShape),
            "feather-pattern" | "feather" => Ok(CategoricalTrait::FeatherPattern),
            other => Err(format!("unknown categorical trait: {}", other)),
        }
    }
}

/// Map a raw categorical value onto the 0-10 trait scale
///
/// Lookup lower-cases the value and nothing else. Values missing from the trait's table score
/// [`DEFAULT_TRAIT_SCORE`]; this never fails.
#[inline]
pub fn normalize(trait_kind: CategoricalTrait, raw_value: &str) -> f64 {
    let key = raw_value.to_lowercase();

    trait_kind
        .vocabulary()
        .iter()
        .find(|(known, _)| *known == key)
        .map(|(_, score)| *score)
        .unwrap_or(DEFAULT_TRAIT_SCORE)
}
