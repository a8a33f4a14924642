//! wellspring-instruments
//!
//! Static configuration for each supported self-report instrument — item
//! counts, response ranges, reverse-scored items, cut-point tables,
//! normalization rules — plus the pure scoring function that turns a raw
//! answer vector into a [`ScoredAssessment`].
//!
//! [`ScoredAssessment`]: wellspring_core::models::assessment::ScoredAssessment

pub mod error;
pub mod instruments;
pub mod scoring;

use wellspring_core::models::assessment::AssessmentType;

use scoring::InstrumentConfig;

pub use scoring::score;

/// Static configuration for an assessment type. The enum is closed, so every
/// variant resolves at compile time — there is no runtime registry to miss.
pub fn config(assessment_type: AssessmentType) -> &'static InstrumentConfig {
    match assessment_type {
        AssessmentType::Pss10 => &instruments::pss10::CONFIG,
        AssessmentType::Dass21 => &instruments::dass21::CONFIG,
        AssessmentType::Burnout => &instruments::burnout::CONFIG,
        AssessmentType::WorkLifeBalance => &instruments::work_life_balance::CONFIG,
        AssessmentType::JobSatisfaction => &instruments::job_satisfaction::CONFIG,
    }
}
