use std::collections::BTreeMap;

use jiff::Timestamp;
use tracing::debug;

use wellspring_core::models::assessment::AssessmentType;
use wellspring_core::models::history::SubjectHistory;
use wellspring_core::models::wellness::WellnessIndexResult;

const SECONDS_PER_DAY: f64 = 86_400.0;

pub(crate) fn age_days(now: Timestamp, administered_at: Timestamp) -> f64 {
    (now.as_second() - administered_at.as_second()) as f64 / SECONDS_PER_DAY
}

pub(crate) fn in_window(now: Timestamp, administered_at: Timestamp, window_days: u32) -> bool {
    let age = age_days(now, administered_at);
    age >= 0.0 && age <= window_days as f64
}

/// Combine the most recent in-window normalized score per domain into one
/// composite wellness index plus a confidence value.
///
/// Only the weights of domains actually present are summed, so a missing
/// domain never drags the index toward neutral. Confidence is a completeness
/// component (fraction of domains present, ≤50) plus a recency component
/// (per-domain linear decay from 1.0 at age zero to 0.5 at the window edge,
/// averaged, ≤50). An empty window returns the neutral result exactly.
pub fn aggregate(
    history: &SubjectHistory,
    window_days: u32,
    now: Timestamp,
) -> WellnessIndexResult {
    let mut domain_scores = BTreeMap::new();
    let mut weighted_sum = 0.0;
    let mut weight_sum = 0.0;
    let mut recency_sum = 0.0;
    let mut assessment_count = 0;

    for assessment_type in AssessmentType::ALL {
        let recent: Vec<_> = history
            .by_type(assessment_type)
            .into_iter()
            .filter(|a| in_window(now, a.administered_at, window_days))
            .collect();
        assessment_count += recent.len();

        let Some(latest) = recent.last() else {
            continue;
        };

        let weight = wellspring_instruments::config(assessment_type).aggregation_weight;
        weighted_sum += latest.normalized_score * weight;
        weight_sum += weight;

        let decay = if window_days > 0 {
            1.0 - 0.5 * (age_days(now, latest.administered_at) / window_days as f64)
        } else {
            1.0
        };
        recency_sum += decay;

        domain_scores.insert(assessment_type, latest.normalized_score);
    }

    if domain_scores.is_empty() {
        return WellnessIndexResult::neutral();
    }

    let present = domain_scores.len() as f64;
    let total = AssessmentType::ALL.len() as f64;
    let completeness = (present / total) * 50.0;
    let recency = (recency_sum / present) * 50.0;
    let composite_index = weighted_sum / weight_sum;

    debug!(
        composite_index,
        domains = domain_scores.len(),
        assessment_count,
        "aggregated wellness index"
    );

    WellnessIndexResult {
        composite_index,
        confidence: completeness + recency,
        domain_scores,
        assessment_count,
    }
}
