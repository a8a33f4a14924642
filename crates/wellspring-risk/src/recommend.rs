use tracing::debug;

use wellspring_core::models::assessment::{AssessmentType, ConcernLevel};
use wellspring_core::models::history::SubjectHistory;
use wellspring_core::models::intervention::{
    Concern, InterventionCandidate, InterventionCategory, InterventionRecommendation,
};
use wellspring_core::models::subject::SubjectProfile;

use crate::catalog::CATALOG;
use crate::error::RiskError;
use crate::features::FeatureVector;
use crate::stratify::RiskStratifier;

pub const DEFAULT_MAX_RESULTS: usize = 5;

const RELEVANCE_WEIGHT: f64 = 0.4;
const PREDICTED_WEIGHT: f64 = 0.4;
const BASELINE_WEIGHT: f64 = 0.2;

/// Map each domain's most recent category band onto the concern vocabulary.
/// Cut-offs are the documented clinical ones: stress and emotional distress
/// at Moderate or worse, burnout at High or worse, work-life balance only in
/// the Poor band, job satisfaction in the Low band.
pub fn derive_concerns(history: &SubjectHistory) -> Vec<Concern> {
    let mut concerns = Vec::new();
    let mut check = |assessment_type, threshold, concern| {
        if let Some(latest) = history.latest(assessment_type)
            && latest.concern >= threshold
        {
            concerns.push(concern);
        }
    };

    check(
        AssessmentType::Pss10,
        ConcernLevel::Moderate,
        Concern::HighStress,
    );
    check(
        AssessmentType::Dass21,
        ConcernLevel::Moderate,
        Concern::EmotionalDistress,
    );
    check(AssessmentType::Burnout, ConcernLevel::High, Concern::Burnout);
    check(
        AssessmentType::WorkLifeBalance,
        ConcernLevel::High,
        Concern::PoorWorkLifeBalance,
    );
    check(
        AssessmentType::JobSatisfaction,
        ConcernLevel::Moderate,
        Concern::LowJobSatisfaction,
    );

    concerns
}

/// Score the catalog against the subject's concerns and the stratifier's
/// predicted per-candidate response, then rank and truncate.
///
/// Priorities in the returned list are contiguous `1..=N` with ties broken
/// by catalog order. Pure aside from the read-only stratifier dependency.
pub fn recommend(
    profile: &SubjectProfile,
    concerns: &[Concern],
    stratifier: &RiskStratifier,
    features: &FeatureVector,
    max_results: usize,
) -> Result<Vec<InterventionRecommendation>, RiskError> {
    let mut scored = Vec::with_capacity(CATALOG.len());

    for candidate in CATALOG.iter() {
        let relevance = relevance_score(profile, concerns, candidate);
        let response = stratifier.predict_intervention_response(features, candidate)?;

        let combined = RELEVANCE_WEIGHT * relevance
            + PREDICTED_WEIGHT * response.effectiveness
            + BASELINE_WEIGHT * candidate.baseline_effectiveness;

        scored.push((candidate, combined, response.weeks_to_effect));
    }

    // Stable sort keeps catalog order for equal scores.
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    scored.truncate(max_results);

    debug!(
        returned = scored.len(),
        concerns = concerns.len(),
        "interventions ranked"
    );

    Ok(scored
        .into_iter()
        .enumerate()
        .map(
            |(rank, (candidate, combined, weeks))| InterventionRecommendation {
                name: candidate.name.clone(),
                category: candidate.category,
                priority: rank as u32 + 1,
                combined_score: combined,
                estimated_weeks_to_effect: weeks,
                effort: candidate.effort,
                evidence: candidate.evidence,
            },
        )
        .collect())
}

/// 0.3 per matching target concern plus situational boosts, capped at 1.0.
fn relevance_score(
    profile: &SubjectProfile,
    concerns: &[Concern],
    candidate: &InterventionCandidate,
) -> f64 {
    let category = candidate.category;
    let matches = candidate
        .target_concerns
        .iter()
        .filter(|c| concerns.contains(c))
        .count();
    let mut relevance = 0.3 * matches as f64;

    if category == InterventionCategory::Sleep
        && profile.sleep_hours.is_some_and(|h| h < 6.0)
    {
        relevance += 0.3;
    }
    if category == InterventionCategory::Workload
        && profile.hours_per_week.is_some_and(|h| h > 50.0)
    {
        relevance += 0.2;
    }

    relevance.min(1.0)
}
