use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Demographic and lifestyle attributes for one subject, supplied read-only
/// by the persistence collaborator. Lifestyle fields are optional; the risk
/// crate substitutes population-typical defaults at feature-assembly time
/// rather than persisting anything back.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubjectProfile {
    pub id: Uuid,
    pub age: Option<f64>,
    pub tenure_years: Option<f64>,
    pub hours_per_week: Option<f64>,
    pub commute_minutes: Option<f64>,
    pub sleep_hours: Option<f64>,
    pub exercise_days_per_week: Option<f64>,
    /// Self-rated social support, 1–10.
    pub social_support: Option<f64>,
}

impl SubjectProfile {
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            age: None,
            tenure_years: None,
            hours_per_week: None,
            commute_minutes: None,
            sleep_hours: None,
            exercise_days_per_week: None,
            social_support: None,
        }
    }
}
