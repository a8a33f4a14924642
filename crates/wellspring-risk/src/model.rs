use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::RiskError;
use crate::features::FEATURE_COUNT;

/// Number of ordered risk tiers the classifier emits.
pub const TIER_COUNT: usize = 3;

/// A pre-trained classifier/regressor pair plus its feature scaler,
/// deserialized once and treated as immutable. The classifier is a
/// multinomial logistic model over three ordered tiers; the regressor
/// predicts a current stress score used for trajectory projection and
/// intervention-response estimates.
///
/// Model quality and calibration are a training-pipeline concern, out of
/// scope here; this type only defines the fixed-input inference contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub version: String,
    pub feature_names: Vec<String>,
    pub scaler_mean: Vec<f64>,
    pub scaler_std: Vec<f64>,
    /// One row per tier (low, moderate, high), one column per feature.
    pub class_weights: Vec<Vec<f64>>,
    pub class_intercepts: Vec<f64>,
    pub regressor_weights: Vec<f64>,
    pub regressor_intercept: f64,
    /// Global importances, 0–1, same order as `feature_names`.
    pub feature_importances: Vec<f64>,
}

impl ModelArtifact {
    /// Parse and validate an artifact. Any parse or dimension failure makes
    /// the model unavailable — there is no partially loaded state.
    pub fn from_json(json: &str) -> Result<Self, RiskError> {
        let artifact: ModelArtifact = serde_json::from_str(json)
            .map_err(|e| RiskError::ModelUnavailable(format!("artifact parse failed: {e}")))?;
        artifact.validate()?;
        info!(version = %artifact.version, "risk model artifact loaded");
        Ok(artifact)
    }

    /// The artifact shipped with the crate, for callers that do not manage
    /// their own. Loading is cheap but callers should still do it once per
    /// process and share the handle.
    pub fn bundled() -> Result<Arc<Self>, RiskError> {
        let artifact = Self::from_json(include_str!("../model/artifact.json"))?;
        Ok(Arc::new(artifact))
    }

    pub(crate) fn validate(&self) -> Result<(), RiskError> {
        let check = |field: &'static str, actual: usize, expected: usize| {
            if actual == expected {
                Ok(())
            } else {
                Err(RiskError::ArtifactDimension {
                    field,
                    expected,
                    actual,
                })
            }
        };

        check("feature_names", self.feature_names.len(), FEATURE_COUNT)?;
        check("scaler_mean", self.scaler_mean.len(), FEATURE_COUNT)?;
        check("scaler_std", self.scaler_std.len(), FEATURE_COUNT)?;
        check("class_weights", self.class_weights.len(), TIER_COUNT)?;
        for row in &self.class_weights {
            check("class_weights row", row.len(), FEATURE_COUNT)?;
        }
        check("class_intercepts", self.class_intercepts.len(), TIER_COUNT)?;
        check(
            "regressor_weights",
            self.regressor_weights.len(),
            FEATURE_COUNT,
        )?;
        check(
            "feature_importances",
            self.feature_importances.len(),
            FEATURE_COUNT,
        )?;

        if self.scaler_std.iter().any(|&s| s <= 0.0) {
            return Err(RiskError::ModelUnavailable(
                "scaler_std contains a non-positive entry".to_string(),
            ));
        }

        Ok(())
    }
}
