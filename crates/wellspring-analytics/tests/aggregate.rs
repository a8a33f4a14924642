use jiff::Timestamp;
use wellspring_analytics::aggregate;
use wellspring_core::models::assessment::{AssessmentType, ConcernLevel, ScoredAssessment};
use wellspring_core::models::history::SubjectHistory;

fn now() -> Timestamp {
    "2026-08-01T00:00:00Z".parse().unwrap()
}

fn days_ago(days: i64) -> Timestamp {
    Timestamp::from_second(now().as_second() - days * 86_400).unwrap()
}

fn scored(assessment_type: AssessmentType, normalized: f64, at: Timestamp) -> ScoredAssessment {
    ScoredAssessment {
        assessment_type,
        raw_score: 0,
        max_score: 40,
        category: "Low".to_string(),
        concern: ConcernLevel::None,
        normalized_score: normalized,
        administered_at: at,
    }
}

#[test]
fn empty_history_returns_neutral_exactly() {
    let result = aggregate(&SubjectHistory::default(), 30, now());
    assert_eq!(result.composite_index, 50.0);
    assert_eq!(result.confidence, 0.0);
    assert!(result.domain_scores.is_empty());
    assert_eq!(result.assessment_count, 0);
}

#[test]
fn assessments_outside_the_window_are_ignored() {
    let history = SubjectHistory::new(vec![scored(AssessmentType::Pss10, 80.0, days_ago(45))]);
    let result = aggregate(&history, 30, now());
    assert_eq!(result.composite_index, 50.0);
    assert_eq!(result.confidence, 0.0);
}

#[test]
fn single_fresh_domain_scores_sixty_confidence() {
    // One of five domains present (completeness 10) at age zero (recency 50).
    let history = SubjectHistory::new(vec![scored(AssessmentType::Pss10, 72.0, now())]);
    let result = aggregate(&history, 30, now());
    assert!((result.composite_index - 72.0).abs() < 1e-9);
    assert!((result.confidence - 60.0).abs() < 1e-9);
    assert_eq!(result.assessment_count, 1);
}

#[test]
fn missing_domains_do_not_drag_the_index_toward_neutral() {
    // PSS-10 carries weight 1.0, work-life balance 0.75; nothing else present.
    let history = SubjectHistory::new(vec![
        scored(AssessmentType::Pss10, 80.0, now()),
        scored(AssessmentType::WorkLifeBalance, 40.0, now()),
    ]);
    let result = aggregate(&history, 30, now());
    let expected = (80.0 * 1.0 + 40.0 * 0.75) / 1.75;
    assert!((result.composite_index - expected).abs() < 1e-9);
}

#[test]
fn only_the_most_recent_assessment_per_domain_counts() {
    let history = SubjectHistory::new(vec![
        scored(AssessmentType::Pss10, 30.0, days_ago(20)),
        scored(AssessmentType::Pss10, 90.0, days_ago(1)),
    ]);
    let result = aggregate(&history, 30, now());
    assert_eq!(result.domain_scores[&AssessmentType::Pss10], 90.0);
    assert_eq!(result.assessment_count, 2);
}

#[test]
fn confidence_grows_as_fresh_domains_are_added() {
    let mut assessments = Vec::new();
    let mut last_confidence = 0.0;
    for assessment_type in AssessmentType::ALL {
        assessments.push(scored(assessment_type, 60.0, now()));
        let result = aggregate(&SubjectHistory::new(assessments.clone()), 30, now());
        assert!(
            result.confidence > last_confidence,
            "confidence did not grow when {assessment_type:?} was added"
        );
        last_confidence = result.confidence;
    }
    // All five domains, all at age zero: completeness and recency both cap.
    assert!((last_confidence - 100.0).abs() < 1e-9);
}

#[test]
fn recency_decays_linearly_toward_the_window_edge() {
    let fresh = aggregate(
        &SubjectHistory::new(vec![scored(AssessmentType::Pss10, 60.0, now())]),
        30,
        now(),
    );
    let stale = aggregate(
        &SubjectHistory::new(vec![scored(AssessmentType::Pss10, 60.0, days_ago(30))]),
        30,
        now(),
    );
    // At the window edge the recency component halves: 50 → 25.
    assert!((fresh.confidence - stale.confidence - 25.0).abs() < 1e-9);
}
