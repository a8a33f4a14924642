use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Self-report instruments the engine can score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AssessmentType {
    /// PSS-10: Perceived Stress Scale, 10 items.
    Pss10,
    /// DASS-21: Depression Anxiety Stress Scales, 21 items.
    Dass21,
    /// MBI-style burnout inventory, 22 items across three subscales.
    Burnout,
    /// Work-life balance questionnaire, 8 items.
    WorkLifeBalance,
    /// Job satisfaction questionnaire, 6 items.
    JobSatisfaction,
}

impl AssessmentType {
    pub const ALL: [AssessmentType; 5] = [
        AssessmentType::Pss10,
        AssessmentType::Dass21,
        AssessmentType::Burnout,
        AssessmentType::WorkLifeBalance,
        AssessmentType::JobSatisfaction,
    ];

    /// Stable string identifier (e.g., "pss10", "dass21").
    pub fn id(&self) -> &'static str {
        match self {
            AssessmentType::Pss10 => "pss10",
            AssessmentType::Dass21 => "dass21",
            AssessmentType::Burnout => "burnout",
            AssessmentType::WorkLifeBalance => "work_life_balance",
            AssessmentType::JobSatisfaction => "job_satisfaction",
        }
    }
}

/// Ordered answers to one administration of an instrument, as captured from
/// the subject. Values are raw Likert responses, unvalidated until scored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RawResponse {
    pub answers: Vec<u8>,
}

impl RawResponse {
    pub fn new(answers: Vec<u8>) -> Self {
        Self { answers }
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

/// How concerning a category band is, direction-corrected: a "Poor"
/// work-life-balance band and a "Severe" DASS band both map to elevated
/// levels even though their raw scales run in opposite directions.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ConcernLevel {
    None,
    Mild,
    Moderate,
    High,
    Severe,
}

/// One scored administration of an instrument. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoredAssessment {
    pub assessment_type: AssessmentType,
    pub raw_score: u32,
    pub max_score: u32,
    /// Category label from the instrument's cut-point table (e.g., "Moderate").
    pub category: String,
    /// Direction-corrected severity of the category band.
    pub concern: ConcernLevel,
    /// 0–100, higher always means better wellness.
    pub normalized_score: f64,
    pub administered_at: jiff::Timestamp,
}
