use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Concerns derived from assessment categories crossing clinical cut-offs.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Concern {
    HighStress,
    EmotionalDistress,
    Burnout,
    PoorWorkLifeBalance,
    LowJobSatisfaction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum InterventionCategory {
    Mindfulness,
    Exercise,
    Sleep,
    Workload,
    Social,
    Therapy,
    TimeOff,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum EffortLevel {
    Low,
    Moderate,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum EvidenceLevel {
    Emerging,
    Moderate,
    Strong,
}

/// Static catalog entry describing one candidate intervention.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InterventionCandidate {
    pub name: String,
    pub category: InterventionCategory,
    pub target_concerns: Vec<Concern>,
    /// Population-level effectiveness, 0–1.
    pub baseline_effectiveness: f64,
    /// Typical weeks until the subject notices an effect.
    pub typical_weeks_to_effect: f64,
    pub effort: EffortLevel,
    pub evidence: EvidenceLevel,
}

/// One ranked recommendation. Computed per request; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InterventionRecommendation {
    pub name: String,
    pub category: InterventionCategory,
    /// Rank, 1 = highest priority. Contiguous 1..N across the returned list.
    pub priority: u32,
    /// 0.4·relevance + 0.4·predicted effectiveness + 0.2·baseline.
    pub combined_score: f64,
    pub estimated_weeks_to_effect: f64,
    pub effort: EffortLevel,
    pub evidence: EvidenceLevel,
}
