// Unit tests for Loft Match

use loft_match::core::{
    normalizer::{normalize, CategoricalTrait, DEFAULT_TRAIT_SCORE, TRAIT_SCALE_MAX},
    grouping::NormalizedBird,
    scoring::{compatibility, score_pair, trait_differences},
    PairRanker,
};
use loft_match::models::{BirdRecord, TraitWeights};

fn create_bird(
    id: &str,
    gender: &str,
    color: &str,
    head: &str,
    feather: &str,
    weight: f64,
    power: f64,
    health: f64,
) -> BirdRecord {
    BirdRecord {
        id: id.to_string(),
        gender: gender.to_string(),
        color: color.to_string(),
        head: head.to_string(),
        feather: feather.to_string(),
        weight,
        power,
        health,
        image_path: None,
    }
}

fn uniform_weights(value: f64) -> TraitWeights {
    TraitWeights {
        color: value,
        weight: value,
        head: value,
        feather: value,
        power: value,
        health: value,
    }
}

#[test]
fn test_normalizer_is_total() {
    let inputs = ["white", "WHITE", "", "  ", "long", "smooth", "medium", "tiger-striped", "ümlaut", "10"];

    for trait_kind in CategoricalTrait::ALL {
        for raw in inputs {
            let score = normalize(trait_kind, raw);
            assert!(score >= 0.0 && score <= TRAIT_SCALE_MAX, "{} -> {}", raw, score);
        }
    }
}

#[test]
fn test_normalizer_unknown_is_seven() {
    assert_eq!(DEFAULT_TRAIT_SCORE, 7.0);
    assert_eq!(normalize(CategoricalTrait::Color, "red"), 7.0);
    assert_eq!(normalize(CategoricalTrait::HeadShape, "round"), 7.0);
    assert_eq!(normalize(CategoricalTrait::FeatherPattern, "curly"), 7.0);
}

#[test]
fn test_self_compatibility_any_weights() {
    let sire = NormalizedBird::from_record(create_bird("M1", "male", "gray", "short", "rough", 388.0, 4.0, 6.0));
    let dam = NormalizedBird::from_record(create_bird("F1", "female", "GRAY", "Short", "rough", 388.0, 4.0, 6.0));

    for weights in [uniform_weights(0.0), uniform_weights(1.0), uniform_weights(1_000.0), TraitWeights::default()] {
        let pair = score_pair(&sire, &dam, 400.0, &weights);
        assert_eq!(pair.compatibility, 100.0);
        assert_eq!(pair.diff_color, 0.0);
        assert_eq!(pair.diff_head, 0.0);
        assert_eq!(pair.diff_feather, 0.0);
        assert_eq!(pair.diff_weight, 0.0);
        assert_eq!(pair.diff_power, 0.0);
        assert_eq!(pair.diff_health, 0.0);
    }
}

#[test]
fn test_bounded_output() {
    let sire = NormalizedBird::from_record(create_bird("M1", "male", "white", "long", "smooth", 900.0, 10.0, 10.0));
    let dam = NormalizedBird::from_record(create_bird("F1", "female", "black", "short", "rough", 100.0, 1.0, 1.0));

    for value in [0.0, 0.1, 1.0, 5.0, 50.0] {
        for target in [0.0, 1.0, 400.0] {
            let pair = score_pair(&sire, &dam, target, &uniform_weights(value));
            assert!(pair.compatibility >= 0.0 && pair.compatibility <= 100.0);
        }
    }

    // Large weights push S past 100 and clamp to zero
    let pair = score_pair(&sire, &dam, 400.0, &uniform_weights(50.0));
    assert_eq!(pair.compatibility, 0.0);
}

#[test]
fn test_monotonic_in_power_difference() {
    let weights = TraitWeights::default();
    let sire = NormalizedBird::from_record(create_bird("M1", "male", "white", "long", "smooth", 400.0, 9.0, 9.0));

    let mut previous = f64::INFINITY;
    for power in [9.0, 8.0, 6.5, 4.0, 1.0] {
        let dam = NormalizedBird::from_record(create_bird("F1", "female", "white", "long", "smooth", 400.0, power, 9.0));
        let score = score_pair(&sire, &dam, 400.0, &weights).compatibility;
        assert!(score <= previous, "compatibility rose from {} to {}", previous, score);
        previous = score;
    }
}

#[test]
fn test_compatibility_non_increasing() {
    let mut previous = compatibility(0.0);
    for step in 1..=250 {
        let current = compatibility(step as f64 * 0.5);
        assert!(current <= previous);
        previous = current;
    }
    assert_eq!(previous, 0.0);
}

#[test]
fn test_example_identical_pair() {
    let ranker = PairRanker::new(TraitWeights {
        color: 0.9,
        weight: 0.4,
        head: 0.0,
        feather: 2.5,
        power: 0.2,
        health: 0.1,
    });
    let roster = vec![
        create_bird("M1", "male", "white", "long", "smooth", 400.0, 9.0, 9.0),
        create_bird("F1", "female", "white", "long", "smooth", 400.0, 9.0, 9.0),
    ];

    let result = ranker.rank_roster(&roster, 400.0);

    assert_eq!(result.pairs.len(), 1);
    assert_eq!(result.pairs[0].compatibility, 100.0);
}

#[test]
fn test_example_with_difference() {
    let ranker = PairRanker::new(TraitWeights {
        color: 0.3,
        weight: 0.0,
        head: 0.0,
        feather: 0.0,
        power: 0.2,
        health: 0.1,
    });
    let roster = vec![
        create_bird("M1", "male", "white", "long", "smooth", 400.0, 9.0, 9.0),
        create_bird("F1", "female", "black", "long", "smooth", 400.0, 5.0, 5.0),
    ];

    let result = ranker.rank_roster(&roster, 400.0);

    assert_eq!(result.pairs.len(), 1);
    let pair = &result.pairs[0];
    assert_eq!(pair.sire_id, "M1");
    assert_eq!(pair.dam_id, "F1");
    assert_eq!(pair.diff_color, 4.0);
    assert_eq!(pair.diff_power, 4.0);
    assert_eq!(pair.diff_health, 4.0);
    assert_eq!(pair.compatibility, 97.6);
}

#[test]
fn test_roles_are_not_symmetric_in_output() {
    let sire = NormalizedBird::from_record(create_bird("M1", "male", "white", "long", "smooth", 420.0, 9.0, 9.0));
    let dam = NormalizedBird::from_record(create_bird("F1", "female", "brown", "short", "rough", 380.0, 5.0, 7.0));

    let forward = trait_differences(&sire, &dam, 400.0);
    let backward = trait_differences(&dam, &sire, 400.0);

    // Differences are absolute, only the id roles swap
    assert_eq!(forward, backward);
    let pair = score_pair(&sire, &dam, 400.0, &TraitWeights::default());
    assert_eq!((pair.sire_id.as_str(), pair.dam_id.as_str()), ("M1", "F1"));
}

#[test]
fn test_image_refs_passed_through() {
    let mut sire_record = create_bird("M1", "male", "white", "long", "smooth", 400.0, 9.0, 9.0);
    sire_record.image_path = Some("images/m1.jpg".to_string());
    let sire = NormalizedBird::from_record(sire_record);
    let dam = NormalizedBird::from_record(create_bird("F1", "female", "white", "long", "smooth", 400.0, 9.0, 9.0));

    let pair = score_pair(&sire, &dam, 400.0, &TraitWeights::default());

    assert_eq!(pair.sire_image, "images/m1.jpg");
    assert_eq!(pair.dam_image, "");
}
