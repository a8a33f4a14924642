use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::assessment::AssessmentType;

/// Composite wellness index across the domains present in a subject's recent
/// history. Recomputed fresh on every request; never persisted by the engine.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WellnessIndexResult {
    /// 0–100, weighted mean of the most recent normalized score per domain.
    pub composite_index: f64,
    /// 0–100: completeness component (≤50) plus recency component (≤50).
    pub confidence: f64,
    /// Most recent in-window normalized score per domain.
    pub domain_scores: BTreeMap<AssessmentType, f64>,
    /// Number of in-window assessments considered.
    pub assessment_count: usize,
}

impl WellnessIndexResult {
    /// The neutral result returned when no assessment falls in the window.
    pub fn neutral() -> Self {
        Self {
            composite_index: 50.0,
            confidence: 0.0,
            domain_scores: BTreeMap::new(),
            assessment_count: 0,
        }
    }
}
