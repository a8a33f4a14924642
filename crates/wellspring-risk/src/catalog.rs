use std::sync::LazyLock;

use wellspring_core::models::intervention::{
    Concern, EffortLevel, EvidenceLevel, InterventionCandidate, InterventionCategory,
};

/// The static intervention catalog. Versioned configuration, read-only at
/// runtime; the recommender scores and ranks against it per request.
pub static CATALOG: LazyLock<Vec<InterventionCandidate>> = LazyLock::new(|| {
    vec![
        candidate(
            "Mindfulness-Based Stress Reduction",
            InterventionCategory::Mindfulness,
            &[Concern::HighStress, Concern::EmotionalDistress],
            0.70,
            4.0,
            EffortLevel::Moderate,
            EvidenceLevel::Strong,
        ),
        candidate(
            "Daily Breathing Exercises",
            InterventionCategory::Mindfulness,
            &[Concern::HighStress],
            0.55,
            1.0,
            EffortLevel::Low,
            EvidenceLevel::Moderate,
        ),
        candidate(
            "Structured Exercise Program",
            InterventionCategory::Exercise,
            &[
                Concern::HighStress,
                Concern::EmotionalDistress,
                Concern::Burnout,
            ],
            0.75,
            3.0,
            EffortLevel::High,
            EvidenceLevel::Strong,
        ),
        candidate(
            "Sleep Hygiene Program",
            InterventionCategory::Sleep,
            &[Concern::HighStress, Concern::EmotionalDistress],
            0.65,
            2.0,
            EffortLevel::Low,
            EvidenceLevel::Strong,
        ),
        candidate(
            "Workload Negotiation with Manager",
            InterventionCategory::Workload,
            &[Concern::Burnout, Concern::PoorWorkLifeBalance],
            0.60,
            2.0,
            EffortLevel::Moderate,
            EvidenceLevel::Moderate,
        ),
        candidate(
            "Calendar Boundary Setting",
            InterventionCategory::Workload,
            &[Concern::PoorWorkLifeBalance, Concern::Burnout],
            0.50,
            1.0,
            EffortLevel::Low,
            EvidenceLevel::Emerging,
        ),
        candidate(
            "Cognitive Behavioral Therapy",
            InterventionCategory::Therapy,
            &[
                Concern::EmotionalDistress,
                Concern::HighStress,
                Concern::LowJobSatisfaction,
            ],
            0.85,
            8.0,
            EffortLevel::High,
            EvidenceLevel::Strong,
        ),
        candidate(
            "Peer Support Group",
            InterventionCategory::Social,
            &[Concern::Burnout, Concern::EmotionalDistress],
            0.55,
            3.0,
            EffortLevel::Low,
            EvidenceLevel::Moderate,
        ),
        candidate(
            "Planned Time Off",
            InterventionCategory::TimeOff,
            &[Concern::Burnout, Concern::HighStress],
            0.60,
            1.0,
            EffortLevel::Moderate,
            EvidenceLevel::Moderate,
        ),
        candidate(
            "Career Development Conversation",
            InterventionCategory::Workload,
            &[Concern::LowJobSatisfaction],
            0.50,
            4.0,
            EffortLevel::Low,
            EvidenceLevel::Emerging,
        ),
    ]
});

fn candidate(
    name: &str,
    category: InterventionCategory,
    target_concerns: &[Concern],
    baseline_effectiveness: f64,
    typical_weeks_to_effect: f64,
    effort: EffortLevel,
    evidence: EvidenceLevel,
) -> InterventionCandidate {
    InterventionCandidate {
        name: name.to_string(),
        category,
        target_concerns: target_concerns.to_vec(),
        baseline_effectiveness,
        typical_weeks_to_effect,
        effort,
        evidence,
    }
}
