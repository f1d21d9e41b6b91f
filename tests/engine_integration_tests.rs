//! Engine Integration Tests
//!
//! End-to-end checks through the public API: chart reference values, the two
//! postnatal entry modes, and properties that must hold for every input.

use approx::assert_abs_diff_eq;
use wuxing_engine::postnatal::{SleepEntry, SymptomEntry};
use wuxing_engine::{
    balance_score, build_chart, classify, normalize_scores, score_natal, score_observation,
    score_questionnaire, AssessmentRequest, BirthInput, DailyObservation, Element, ElementMap,
    ElementPercentages, ElementScores, EngineError, QuestionnaireAnswers, ScoringWeights,
    WuxingScorer,
};

fn answers(pairs: &[(&str, usize)]) -> QuestionnaireAnswers {
    pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

/// Five values rounded to one decimal may drift from 100 by at most 0.2
const SUM_TOLERANCE: f64 = 0.2 + 1e-9;

fn assert_valid_percentages(p: &ElementPercentages) {
    assert!((p.sum() - 100.0).abs() <= SUM_TOLERANCE, "sum was {}", p.sum());
    for (element, value) in p.iter() {
        assert!((0.0..=100.0).contains(&value), "{} = {}", element, value);
    }
}

// ============================================================================
// End-to-end examples
// ============================================================================

#[test]
fn reference_birth_reproduces_pillars() {
    let chart = build_chart(&BirthInput::new(1990, 10, 25, 14)).unwrap();
    assert_eq!(chart.year.label(), "庚午");
    assert_eq!(chart.day.stem.label(), "癸");
    assert_eq!(chart.day_master().element(), Element::Water);
}

#[test]
fn groggy_sleep_raises_fire_by_six() {
    let weights = ScoringWeights::default();
    let baseline = score_observation(&DailyObservation::default(), &weights).unwrap();
    let groggy = DailyObservation {
        sleep: Some(SleepEntry {
            duration: None,
            feeling: Some("昏昏沉沉".to_string()),
        }),
        ..Default::default()
    };
    let profile = score_observation(&groggy, &weights).unwrap();

    assert_abs_diff_eq!(baseline.scores.fire, 50.0);
    assert_abs_diff_eq!(profile.scores.fire - baseline.scores.fire, 6.0);
    for element in [Element::Wood, Element::Earth, Element::Metal, Element::Water] {
        assert_abs_diff_eq!(profile.scores.get(element), 50.0);
    }
}

#[test]
fn highest_water_answer_makes_water_dominant() {
    let profile =
        score_questionnaire(&answers(&[("cold_limbs", 3)]), &ScoringWeights::default()).unwrap();
    assert_eq!(profile.dominant, Element::Water);
    assert_abs_diff_eq!(profile.scores.water, 58.0);
    let water = profile.percentages.get(Element::Water);
    for (element, value) in profile.percentages.iter() {
        if element != Element::Water {
            assert!(water > value);
        }
    }
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn chart_builder_is_deterministic() {
    for year in [1899, 1900, 1984, 1990, 2000, 2024] {
        for month in 1..=12 {
            let birth = BirthInput::new(year, month, 28, (month * 2 - 1) % 24);
            assert_eq!(build_chart(&birth).unwrap(), build_chart(&birth).unwrap());
        }
    }
}

#[test]
fn natal_percentages_sum_to_100() {
    let weights = ScoringWeights::default();
    for year in 1900..2030 {
        for month in 1..=12 {
            for day in [1, 7, 14, 21, 28] {
                for hour in (0..24).step_by(2) {
                    let birth = BirthInput::new(year, month, day, hour);
                    let profile = score_natal(&build_chart(&birth).unwrap(), &weights);
                    let sum = profile.percentages.sum();
                    assert!(
                        (sum - 100.0).abs() <= SUM_TOLERANCE,
                        "{year}-{month}-{day} {hour}h summed to {sum}"
                    );
                }
            }
        }
    }
}

#[test]
fn rolling_mean_sums_to_100() {
    let scorer = WuxingScorer::default();
    let regions = ["头", "胸口", "胃", "皮肤", "腰"];
    for start in 0..regions.len() {
        for severity in 1..=10u8 {
            let days: Vec<DailyObservation> = (0..7)
                .map(|offset| DailyObservation {
                    symptoms: vec![
                        SymptomEntry {
                            body_region: regions[(start + offset) % 5].to_string(),
                            severity,
                        },
                        SymptomEntry {
                            body_region: regions[(start + 2 * offset + 1) % 5].to_string(),
                            severity: 11 - severity,
                        },
                    ],
                    ..Default::default()
                })
                .collect();
            let summary = scorer.summarize_days(&days).unwrap();
            assert_eq!(summary.days, 7);
            assert_valid_percentages(&summary.mean_percentages);
        }
    }
}

#[test]
fn zero_total_yields_even_split() {
    let zero = ElementScores::default();
    let p = normalize_scores(&zero);
    for element in Element::ALL {
        assert_eq!(p.get(element), 20.0);
    }
    assert_eq!(balance_score(&p), 100);
}

#[test]
fn balance_score_non_increasing_in_spread() {
    let mut previous = u8::MAX;
    for tenth in 0..=150 {
        let d = tenth as f64 / 20.0;
        let scores = ElementMap {
            wood: 20.0 + d,
            fire: 20.0,
            earth: 20.0,
            metal: 20.0,
            water: 20.0 - d,
        };
        let p = normalize_scores(&scores);
        let score = balance_score(&p);
        assert!(score <= previous);
        if p.spread() >= 10.0 {
            assert_eq!(score, 0);
        }
        previous = score;
    }
}

#[test]
fn balance_is_100_only_when_even() {
    let uneven = normalize_scores(&ElementMap {
        wood: 21.0,
        fire: 20.0,
        earth: 20.0,
        metal: 20.0,
        water: 19.0,
    });
    assert!(balance_score(&uneven) < 100);
    assert_eq!(balance_score(&ElementPercentages::even()), 100);
}

#[test]
fn extreme_severities_stay_clamped() {
    let weights = ScoringWeights::default();
    let obs = DailyObservation {
        symptoms: (0..40)
            .map(|_| SymptomEntry {
                body_region: "腰".to_string(),
                severity: 10,
            })
            .collect(),
        ..Default::default()
    };
    let profile = score_observation(&obs, &weights).unwrap();
    for (_, value) in profile.scores.iter() {
        assert!((0.0..=100.0).contains(&value));
    }
    assert_abs_diff_eq!(profile.scores.water, 100.0);
    assert_valid_percentages(&profile.percentages);
}

#[test]
fn dominant_tie_breaks_in_priority_order() {
    // Symmetric tags on earth and water: earth comes first
    let profile = score_questionnaire(
        &answers(&[("appetite", 1), ("cold_limbs", 1)]),
        &ScoringWeights::default(),
    )
    .unwrap();
    assert_eq!(
        profile.percentages.get(Element::Earth),
        profile.percentages.get(Element::Water)
    );
    assert_eq!(profile.dominant, Element::Earth);

    let classification = classify(&profile.scores, &profile.percentages);
    assert_eq!(classification.constitution.primary, Element::Earth);
    assert_eq!(classification.constitution.secondary, Some(Element::Water));
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn validation_errors_surface_before_scoring() {
    let scorer = WuxingScorer::default();
    let err = scorer.score_natal(&BirthInput::new(2000, 0, 1, 0)).unwrap_err();
    assert_eq!(err.field(), Some("month"));

    let err = scorer
        .score_questionnaire(&answers(&[("breathing", 7)]))
        .unwrap_err();
    assert!(matches!(err, EngineError::OptionOutOfRange { index: 7, .. }));
    assert!(err.is_validation());
}

#[test]
fn full_report_serializes_to_json() {
    let report = WuxingScorer::default()
        .assess_full(&AssessmentRequest {
            birth: BirthInput::new(1990, 10, 25, 14),
            postnatal: None,
            current_season: None,
        })
        .unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["natal"]["profile"]["strength"], "strong");
    assert_eq!(json["natal"]["recommendation"]["key"]["dominant"], "water");
    assert!(json["postnatal"].is_null());
}
