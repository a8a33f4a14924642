use jiff::Timestamp;
use uuid::Uuid;

use wellspring_core::models::assessment::{AssessmentType, ConcernLevel, ScoredAssessment};
use wellspring_core::models::history::SubjectHistory;
use wellspring_core::models::intervention::{Concern, InterventionCategory};
use wellspring_core::models::subject::SubjectProfile;
use wellspring_risk::catalog::CATALOG;
use wellspring_risk::{
    DEFAULT_MAX_RESULTS, FeatureVector, ModelArtifact, RiskStratifier, derive_concerns, recommend,
};

fn at() -> Timestamp {
    "2026-08-01T09:00:00Z".parse().unwrap()
}

fn scored(
    assessment_type: AssessmentType,
    raw_score: u32,
    concern: ConcernLevel,
) -> ScoredAssessment {
    ScoredAssessment {
        assessment_type,
        raw_score,
        max_score: 100,
        category: "test".to_string(),
        concern,
        normalized_score: 50.0,
        administered_at: at(),
    }
}

fn stratifier() -> RiskStratifier {
    RiskStratifier::new(ModelArtifact::bundled().unwrap())
}

#[test]
fn concerns_follow_the_documented_cut_offs() {
    let history = SubjectHistory::new(vec![
        scored(AssessmentType::Pss10, 20, ConcernLevel::Moderate),
        scored(AssessmentType::Dass21, 10, ConcernLevel::None),
        scored(AssessmentType::Burnout, 60, ConcernLevel::Moderate),
    ]);

    let concerns = derive_concerns(&history);
    assert!(concerns.contains(&Concern::HighStress));
    // DASS below Moderate and burnout below High do not register.
    assert!(!concerns.contains(&Concern::EmotionalDistress));
    assert!(!concerns.contains(&Concern::Burnout));
}

#[test]
fn every_domain_in_trouble_yields_every_concern() {
    let history = SubjectHistory::new(vec![
        scored(AssessmentType::Pss10, 30, ConcernLevel::High),
        scored(AssessmentType::Dass21, 45, ConcernLevel::High),
        scored(AssessmentType::Burnout, 100, ConcernLevel::High),
        scored(AssessmentType::WorkLifeBalance, 5, ConcernLevel::High),
        scored(AssessmentType::JobSatisfaction, 4, ConcernLevel::Moderate),
    ]);

    let concerns = derive_concerns(&history);
    assert_eq!(concerns.len(), 5);
}

#[test]
fn result_count_respects_max_results() {
    let profile = SubjectProfile::new(Uuid::new_v4());
    let features = FeatureVector::from_profile(&profile, &SubjectHistory::default());

    let recommendations = recommend(
        &profile,
        &[Concern::HighStress],
        &stratifier(),
        &features,
        3,
    )
    .unwrap();
    assert_eq!(recommendations.len(), 3);

    let recommendations = recommend(
        &profile,
        &[Concern::HighStress],
        &stratifier(),
        &features,
        DEFAULT_MAX_RESULTS,
    )
    .unwrap();
    assert!(recommendations.len() <= DEFAULT_MAX_RESULTS);
}

#[test]
fn priorities_are_contiguous_from_one_with_no_ties() {
    let profile = SubjectProfile::new(Uuid::new_v4());
    let features = FeatureVector::from_profile(&profile, &SubjectHistory::default());

    let recommendations = recommend(
        &profile,
        &[Concern::Burnout, Concern::HighStress],
        &stratifier(),
        &features,
        CATALOG.len() + 10,
    )
    .unwrap();

    assert_eq!(recommendations.len(), CATALOG.len());
    let priorities: Vec<u32> = recommendations.iter().map(|r| r.priority).collect();
    assert_eq!(priorities, (1..=CATALOG.len() as u32).collect::<Vec<_>>());
}

#[test]
fn ranking_is_descending_in_combined_score() {
    let profile = SubjectProfile::new(Uuid::new_v4());
    let features = FeatureVector::from_profile(&profile, &SubjectHistory::default());

    let recommendations = recommend(
        &profile,
        &[Concern::EmotionalDistress],
        &stratifier(),
        &features,
        CATALOG.len(),
    )
    .unwrap();

    for pair in recommendations.windows(2) {
        assert!(pair[0].combined_score >= pair[1].combined_score);
    }
}

#[test]
fn short_sleep_boosts_sleep_interventions() {
    let rank_of_sleep = |sleep_hours: f64| {
        let mut profile = SubjectProfile::new(Uuid::new_v4());
        profile.sleep_hours = Some(sleep_hours);
        let features = FeatureVector::from_profile(&profile, &SubjectHistory::default());
        let recommendations = recommend(
            &profile,
            &[Concern::HighStress],
            &stratifier(),
            &features,
            CATALOG.len(),
        )
        .unwrap();
        recommendations
            .iter()
            .position(|r| r.category == InterventionCategory::Sleep)
            .expect("sleep candidate missing from full ranking")
    };

    assert!(rank_of_sleep(5.0) < rank_of_sleep(8.0));
}

#[test]
fn long_hours_boost_workload_interventions() {
    let best_workload_rank = |hours: f64| {
        let mut profile = SubjectProfile::new(Uuid::new_v4());
        profile.hours_per_week = Some(hours);
        let features = FeatureVector::from_profile(&profile, &SubjectHistory::default());
        let recommendations = recommend(
            &profile,
            &[Concern::PoorWorkLifeBalance],
            &stratifier(),
            &features,
            CATALOG.len(),
        )
        .unwrap();
        recommendations
            .iter()
            .position(|r| r.category == InterventionCategory::Workload)
            .expect("workload candidate missing from full ranking")
    };

    assert!(best_workload_rank(58.0) <= best_workload_rank(40.0));
}

#[test]
fn therapy_takes_longer_than_its_catalog_baseline() {
    let profile = SubjectProfile::new(Uuid::new_v4());
    let features = FeatureVector::from_profile(&profile, &SubjectHistory::default());

    let recommendations = recommend(
        &profile,
        &[Concern::EmotionalDistress],
        &stratifier(),
        &features,
        CATALOG.len(),
    )
    .unwrap();

    let therapy = recommendations
        .iter()
        .find(|r| r.category == InterventionCategory::Therapy)
        .expect("therapy candidate missing");
    let baseline = CATALOG
        .iter()
        .find(|c| c.category == InterventionCategory::Therapy)
        .unwrap()
        .typical_weeks_to_effect;
    assert!(therapy.estimated_weeks_to_effect > baseline);
}
