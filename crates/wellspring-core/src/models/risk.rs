use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskTier {
    Low,
    Moderate,
    High,
}

/// One feature the classifier weights heavily, surfaced by name so callers
/// can explain a tier without access to the model internals.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ContributingFactor {
    pub name: String,
    /// Global importance weight from the model artifact, 0–1.
    pub importance: f64,
}

/// Output of the risk stratifier for one subject.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskAssessment {
    pub tier: RiskTier,
    /// Highest class probability, 0–1.
    pub confidence: f64,
    /// Top model features by global importance, ranked.
    pub contributing_factors: Vec<ContributingFactor>,
    /// Rule-based suggestions layered on the tier, urgent first, at most 6.
    pub recommendations: Vec<String>,
}

/// One step of a projected stress trajectory. Illustrative only: the curves
/// are fixed decay schedules applied to a regression estimate, not a causal
/// forecast.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TrajectoryPoint {
    pub week: u32,
    /// Projected stress score with no intervention, 0–100, higher = worse.
    pub unassisted: f64,
    /// Projected stress score assuming an active intervention.
    pub assisted: f64,
}
