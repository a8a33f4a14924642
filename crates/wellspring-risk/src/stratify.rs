use std::sync::Arc;

use tracing::debug;

use wellspring_core::models::intervention::{InterventionCandidate, InterventionCategory};
use wellspring_core::models::risk::{ContributingFactor, RiskAssessment, RiskTier, TrajectoryPoint};

use crate::error::RiskError;
use crate::features::{FEATURE_COUNT, FeatureVector};
use crate::model::{ModelArtifact, TIER_COUNT};

/// Weekly decay applied to the projected stress score with no intervention.
const UNASSISTED_DECAY: f64 = 0.995;
/// Weekly decay assuming an active intervention.
const ASSISTED_DECAY: f64 = 0.96;
/// At most this many rule-based recommendations per assessment.
const MAX_RECOMMENDATIONS: usize = 6;

/// Stateless inference over a caller-owned model handle. Cheap to clone and
/// safe to share across threads; the artifact is read-only after load.
#[derive(Debug, Clone)]
pub struct RiskStratifier {
    model: Arc<ModelArtifact>,
}

/// Predicted response to one intervention for one subject.
#[derive(Debug, Clone, Copy)]
pub struct InterventionResponse {
    /// Predicted effectiveness for this subject, 0–1.
    pub effectiveness: f64,
    /// Predicted weeks until the subject notices an effect.
    pub weeks_to_effect: f64,
}

impl RiskStratifier {
    pub fn new(model: Arc<ModelArtifact>) -> Self {
        Self { model }
    }

    pub fn model_version(&self) -> &str {
        &self.model.version
    }

    /// Classify a subject into a risk tier with per-class probabilities,
    /// contributing-factor ranking, and rule-based recommendations.
    pub fn predict(&self, features: &FeatureVector) -> Result<RiskAssessment, RiskError> {
        let z = self.standardize(features)?;

        let mut logits = [0.0f64; TIER_COUNT];
        for (tier, logit) in logits.iter_mut().enumerate() {
            *logit = self.model.class_intercepts[tier]
                + self.model.class_weights[tier]
                    .iter()
                    .zip(&z)
                    .map(|(w, x)| w * x)
                    .sum::<f64>();
        }
        let probabilities = softmax(&logits);

        let (tier_index, confidence) = probabilities
            .iter()
            .copied()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .unwrap_or((0, 0.0));
        let tier = match tier_index {
            0 => RiskTier::Low,
            1 => RiskTier::Moderate,
            _ => RiskTier::High,
        };

        debug!(?tier, confidence, "risk tier predicted");

        Ok(RiskAssessment {
            tier,
            confidence,
            contributing_factors: self.contributing_factors(),
            recommendations: rule_recommendations(features, tier),
        })
    }

    /// Project the regression-predicted current stress score over `weeks`
    /// weekly steps under the two fixed decay curves. Illustrative only —
    /// the curves are schedules, not a causal forecast.
    pub fn project_trajectory(
        &self,
        features: &FeatureVector,
        weeks: u32,
    ) -> Result<Vec<TrajectoryPoint>, RiskError> {
        let current = self.predict_stress_score(features)?;

        let trajectory = (0..=weeks)
            .map(|week| TrajectoryPoint {
                week,
                unassisted: (current * UNASSISTED_DECAY.powi(week as i32)).clamp(0.0, 100.0),
                assisted: (current * ASSISTED_DECAY.powi(week as i32)).clamp(0.0, 100.0),
            })
            .collect();

        Ok(trajectory)
    }

    /// Predicted effectiveness and time-to-effect of one catalog candidate
    /// for this subject: the category modifier table adjusts the candidate's
    /// baseline, and subjects with more predicted stress have more headroom
    /// to improve.
    pub fn predict_intervention_response(
        &self,
        features: &FeatureVector,
        candidate: &InterventionCandidate,
    ) -> Result<InterventionResponse, RiskError> {
        let stress = self.predict_stress_score(features)?;
        let headroom = stress / 100.0;
        let modifier = category_modifier(candidate.category);

        let effectiveness = (candidate.baseline_effectiveness
            * modifier.effectiveness
            * (0.7 + 0.3 * headroom))
            .clamp(0.0, 1.0);
        let weeks_to_effect = candidate.typical_weeks_to_effect * modifier.time;

        Ok(InterventionResponse {
            effectiveness,
            weeks_to_effect,
        })
    }

    /// Regression estimate of the subject's current stress, 0–100,
    /// higher = worse.
    fn predict_stress_score(&self, features: &FeatureVector) -> Result<f64, RiskError> {
        let z = self.standardize(features)?;
        let score = self.model.regressor_intercept
            + self
                .model
                .regressor_weights
                .iter()
                .zip(&z)
                .map(|(w, x)| w * x)
                .sum::<f64>();
        Ok(score.clamp(0.0, 100.0))
    }

    fn contributing_factors(&self) -> Vec<ContributingFactor> {
        let mut ranked: Vec<ContributingFactor> = self
            .model
            .feature_names
            .iter()
            .zip(&self.model.feature_importances)
            .map(|(name, &importance)| ContributingFactor {
                name: name.clone(),
                importance,
            })
            .collect();
        ranked.sort_by(|a, b| b.importance.total_cmp(&a.importance));
        ranked.truncate(5);
        ranked
    }

    /// An artifact built by hand (rather than through `from_json`) may never
    /// have been validated, so inference re-checks the dimensions it is
    /// about to index.
    fn standardize(&self, features: &FeatureVector) -> Result<[f64; FEATURE_COUNT], RiskError> {
        self.model.validate()?;

        let mut z = [0.0f64; FEATURE_COUNT];
        for i in 0..FEATURE_COUNT {
            z[i] = (features.values[i] - self.model.scaler_mean[i]) / self.model.scaler_std[i];
        }
        Ok(z)
    }
}

struct CategoryModifier {
    effectiveness: f64,
    time: f64,
}

/// Fixed per-category adjustments: clinical therapy is more effective but
/// slower to take hold than breathing exercises, and so on.
fn category_modifier(category: InterventionCategory) -> CategoryModifier {
    let (effectiveness, time) = match category {
        InterventionCategory::Mindfulness => (1.00, 0.6),
        InterventionCategory::Exercise => (1.05, 1.0),
        InterventionCategory::Sleep => (1.10, 0.8),
        InterventionCategory::Workload => (1.10, 1.2),
        InterventionCategory::Social => (0.95, 1.0),
        InterventionCategory::Therapy => (1.15, 1.5),
        InterventionCategory::TimeOff => (0.90, 0.5),
    };
    CategoryModifier {
        effectiveness,
        time,
    }
}

fn softmax(logits: &[f64; TIER_COUNT]) -> [f64; TIER_COUNT] {
    let max = logits.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mut exps = [0.0f64; TIER_COUNT];
    for (e, &l) in exps.iter_mut().zip(logits) {
        *e = (l - max).exp();
    }
    let sum: f64 = exps.iter().sum();
    for e in &mut exps {
        *e /= sum;
    }
    exps
}

/// Deterministic threshold rules layered on top of the tier, urgent first.
fn rule_recommendations(features: &FeatureVector, tier: RiskTier) -> Vec<String> {
    let mut recommendations = Vec::new();

    if tier == RiskTier::High {
        recommendations.push(
            "Sustained high strain: consider a referral to an occupational health or \
             mental-health professional."
                .to_string(),
        );
    }
    if features.hours_per_week() > 50.0 {
        recommendations.push(
            "Working hours exceed 50 per week; negotiate a reduced or restructured workload."
                .to_string(),
        );
    }
    if features.sleep_hours() < 6.5 {
        recommendations
            .push("Sleep is below 6.5 hours; prioritize a consistent sleep routine.".to_string());
    }
    if features.exercise_days_per_week() < 2.0 {
        recommendations.push(
            "Physical activity is low; aim for at least two active days per week.".to_string(),
        );
    }
    if features.social_support() < 5.0 {
        recommendations.push(
            "Reported social support is low; schedule regular contact with friends, family, \
             or peers."
                .to_string(),
        );
    }
    if features.commute_minutes() > 60.0 {
        recommendations.push(
            "The commute exceeds an hour each way; explore remote days or travel-time \
             adjustments."
                .to_string(),
        );
    }
    match tier {
        RiskTier::Moderate => recommendations
            .push("Re-assess within two weeks to confirm the current picture.".to_string()),
        RiskTier::Low => {
            recommendations.push("Keep the current routine and re-assess monthly.".to_string());
        }
        RiskTier::High => {}
    }

    recommendations.truncate(MAX_RECOMMENDATIONS);
    recommendations
}
