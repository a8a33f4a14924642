use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::assessment::{AssessmentType, ScoredAssessment};

/// A subject's scored assessments, supplied by the persistence collaborator
/// as an immutable snapshot. Append-only from the engine's perspective — the
/// engine only ever reads it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubjectHistory {
    pub assessments: Vec<ScoredAssessment>,
}

impl SubjectHistory {
    pub fn new(assessments: Vec<ScoredAssessment>) -> Self {
        Self { assessments }
    }

    pub fn record(&mut self, scored: ScoredAssessment) {
        self.assessments.push(scored);
    }

    /// All assessments of one type, ordered oldest first.
    pub fn by_type(&self, assessment_type: AssessmentType) -> Vec<&ScoredAssessment> {
        let mut entries: Vec<&ScoredAssessment> = self
            .assessments
            .iter()
            .filter(|a| a.assessment_type == assessment_type)
            .collect();
        entries.sort_by_key(|a| a.administered_at);
        entries
    }

    /// The most recent assessment of one type, if any.
    pub fn latest(&self, assessment_type: AssessmentType) -> Option<&ScoredAssessment> {
        self.by_type(assessment_type).into_iter().next_back()
    }

    /// The assessment types that appear at least once in the history.
    pub fn types_present(&self) -> Vec<AssessmentType> {
        AssessmentType::ALL
            .into_iter()
            .filter(|t| self.assessments.iter().any(|a| a.assessment_type == *t))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.assessments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assessments.is_empty()
    }
}
