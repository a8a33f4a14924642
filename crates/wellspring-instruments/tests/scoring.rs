use jiff::Timestamp;
use wellspring_core::models::assessment::{AssessmentType, ConcernLevel, RawResponse};
use wellspring_instruments::error::InstrumentError;
use wellspring_instruments::{config, score};

fn at() -> Timestamp {
    "2026-08-01T09:00:00Z".parse().unwrap()
}

#[test]
fn pss10_worked_example() {
    let response = RawResponse::new(vec![2, 3, 2, 1, 1, 3, 2, 1, 2, 3]);
    let scored = score(AssessmentType::Pss10, &response, at()).unwrap();

    assert_eq!(scored.raw_score, 26);
    assert_eq!(scored.max_score, 40);
    assert_eq!(scored.category, "Moderate");
    assert_eq!(scored.concern, ConcernLevel::Moderate);
    assert!((scored.normalized_score - 35.0).abs() < 1e-9);
}

#[test]
fn wrong_length_is_rejected() {
    let response = RawResponse::new(vec![1, 2, 3]);
    let err = score(AssessmentType::Pss10, &response, at()).unwrap_err();
    match err {
        InstrumentError::InvalidResponseLength {
            expected, actual, ..
        } => {
            assert_eq!(expected, 10);
            assert_eq!(actual, 3);
        }
        other => panic!("expected InvalidResponseLength, got {other:?}"),
    }
}

#[test]
fn out_of_range_item_is_rejected() {
    let mut answers = vec![1; 10];
    answers[6] = 5;
    let err = score(AssessmentType::Pss10, &RawResponse::new(answers), at()).unwrap_err();
    match err {
        InstrumentError::ItemOutOfRange { index, value, .. } => {
            assert_eq!(index, 6);
            assert_eq!(value, 5);
        }
        other => panic!("expected ItemOutOfRange, got {other:?}"),
    }
}

#[test]
fn cut_point_boundaries_are_inclusive_lower() {
    // Reversed items answered at the max contribute zero, so the raw score
    // is the sum of the non-reversed items.
    let raw_14 = RawResponse::new(vec![4, 4, 4, 4, 4, 2, 4, 4, 0, 0]);
    let scored = score(AssessmentType::Pss10, &raw_14, at()).unwrap();
    assert_eq!(scored.raw_score, 14);
    assert_eq!(scored.category, "Moderate");

    let raw_13 = RawResponse::new(vec![4, 4, 4, 4, 4, 1, 4, 4, 0, 0]);
    let scored = score(AssessmentType::Pss10, &raw_13, at()).unwrap();
    assert_eq!(scored.raw_score, 13);
    assert_eq!(scored.category, "Low");
}

#[test]
fn reverse_scoring_maps_extremes_onto_each_other() {
    // All-zero answers flip the four reversed items to the item max.
    let all_zero = RawResponse::new(vec![0; 10]);
    let scored = score(AssessmentType::Pss10, &all_zero, at()).unwrap();
    assert_eq!(scored.raw_score, 16);

    // Answering the reversed items at the max and everything else at zero
    // produces the true minimum.
    let reversed_max = RawResponse::new(vec![0, 0, 0, 4, 4, 0, 4, 4, 0, 0]);
    let scored = score(AssessmentType::Pss10, &reversed_max, at()).unwrap();
    assert_eq!(scored.raw_score, 0);
    assert!((scored.normalized_score - 100.0).abs() < 1e-9);
}

#[test]
fn raising_a_stress_item_never_raises_the_normalized_score() {
    let baseline = RawResponse::new(vec![1; 10]);
    let base = score(AssessmentType::Pss10, &baseline, at()).unwrap();

    for index in [0, 1, 2, 5, 8, 9] {
        let mut answers = vec![1; 10];
        answers[index] = 3;
        let bumped = score(AssessmentType::Pss10, &RawResponse::new(answers), at()).unwrap();
        assert!(
            bumped.normalized_score <= base.normalized_score,
            "bumping item {index} raised the normalized score"
        );
    }
}

#[test]
fn normalized_scores_stay_in_bounds_for_all_instruments() {
    for assessment_type in AssessmentType::ALL {
        let cfg = config(assessment_type);
        let min = RawResponse::new(vec![cfg.response_range.min; cfg.item_count]);
        let max = RawResponse::new(vec![cfg.response_range.max; cfg.item_count]);

        for response in [min, max] {
            let scored = score(assessment_type, &response, at()).unwrap();
            assert!(
                (0.0..=100.0).contains(&scored.normalized_score),
                "{assessment_type:?}: normalized {} out of bounds",
                scored.normalized_score
            );
        }
    }
}

#[test]
fn burnout_reverses_accomplishment_items() {
    // All zeros: exhaustion and depersonalization read best-possible, but the
    // eight accomplishment items flip to the max, giving raw 48 and a
    // weighted normalized score of (1 − 0.3) · 100.
    let scored = score(AssessmentType::Burnout, &RawResponse::new(vec![0; 22]), at()).unwrap();
    assert_eq!(scored.raw_score, 48);
    assert_eq!(scored.category, "Moderate");
    assert!((scored.normalized_score - 70.0).abs() < 1e-9);
}

#[test]
fn direct_scales_normalize_without_inversion() {
    let scored = score(
        AssessmentType::JobSatisfaction,
        &RawResponse::new(vec![4; 6]),
        at(),
    )
    .unwrap();
    assert_eq!(scored.raw_score, 24);
    assert_eq!(scored.category, "High");
    assert!((scored.normalized_score - 100.0).abs() < 1e-9);

    let scored = score(
        AssessmentType::WorkLifeBalance,
        &RawResponse::new(vec![0; 8]),
        at(),
    )
    .unwrap();
    assert_eq!(scored.category, "Poor");
    assert_eq!(scored.concern, ConcernLevel::High);
    assert!((scored.normalized_score - 0.0).abs() < 1e-9);
}

#[test]
fn dass21_equal_subscale_weights_match_the_inverted_total() {
    let scored = score(AssessmentType::Dass21, &RawResponse::new(vec![1; 21]), at()).unwrap();
    assert_eq!(scored.raw_score, 21);
    assert_eq!(scored.category, "Mild");
    let expected = (1.0 - 21.0 / 63.0) * 100.0;
    assert!((scored.normalized_score - expected).abs() < 1e-9);
}

#[test]
fn configs_are_internally_consistent() {
    use wellspring_instruments::scoring::NormalizationRule;

    for assessment_type in AssessmentType::ALL {
        let cfg = config(assessment_type);
        assert!(cfg.item_count > 0);
        assert_eq!(cfg.response_range.min, 0);
        assert_eq!(cfg.bands[0].lower, 0, "{assessment_type:?}");
        assert!(
            cfg.bands.windows(2).all(|w| w[0].lower < w[1].lower),
            "{assessment_type:?}: bands not ascending"
        );
        assert!(cfg.reversed_items.iter().all(|&i| i < cfg.item_count));

        if let NormalizationRule::WeightedSubscales(subscales) = &cfg.rule {
            let mut covered: Vec<usize> = subscales.iter().flat_map(|s| s.items.clone()).collect();
            covered.sort_unstable();
            covered.dedup();
            assert_eq!(
                covered,
                (0..cfg.item_count).collect::<Vec<_>>(),
                "{assessment_type:?}: subscales must partition the items"
            );
        }
    }
}
