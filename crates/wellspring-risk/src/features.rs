use wellspring_core::models::assessment::AssessmentType;
use wellspring_core::models::history::SubjectHistory;
use wellspring_core::models::subject::SubjectProfile;

pub const FEATURE_COUNT: usize = 12;

/// Fixed feature order consumed by the classifier. The bundled artifact's
/// `feature_names` must match this list exactly.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "age",
    "tenure_years",
    "hours_per_week",
    "commute_minutes",
    "sleep_hours",
    "exercise_days_per_week",
    "social_support",
    "pss10_raw",
    "dass21_raw",
    "burnout_raw",
    "work_life_balance_raw",
    "job_satisfaction_raw",
];

/// Population-typical values substituted for absent attributes, in feature
/// order. The classifier never sees a null.
pub const FEATURE_DEFAULTS: [f64; FEATURE_COUNT] = [
    38.0, // age
    5.0,  // tenure_years
    42.0, // hours_per_week
    25.0, // commute_minutes
    7.0,  // sleep_hours
    2.0,  // exercise_days_per_week
    6.0,  // social_support
    16.0, // pss10_raw
    12.0, // dass21_raw
    45.0, // burnout_raw
    18.0, // work_life_balance_raw
    14.0, // job_satisfaction_raw
];

/// Fixed-order numeric encoding of one subject for classifier input. Built
/// per request and never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    pub values: [f64; FEATURE_COUNT],
}

impl FeatureVector {
    pub fn from_profile(profile: &SubjectProfile, history: &SubjectHistory) -> Self {
        let raw = |assessment_type: AssessmentType, default: f64| {
            history
                .latest(assessment_type)
                .map(|a| a.raw_score as f64)
                .unwrap_or(default)
        };

        let values = [
            profile.age.unwrap_or(FEATURE_DEFAULTS[0]),
            profile.tenure_years.unwrap_or(FEATURE_DEFAULTS[1]),
            profile.hours_per_week.unwrap_or(FEATURE_DEFAULTS[2]),
            profile.commute_minutes.unwrap_or(FEATURE_DEFAULTS[3]),
            profile.sleep_hours.unwrap_or(FEATURE_DEFAULTS[4]),
            profile
                .exercise_days_per_week
                .unwrap_or(FEATURE_DEFAULTS[5]),
            profile.social_support.unwrap_or(FEATURE_DEFAULTS[6]),
            raw(AssessmentType::Pss10, FEATURE_DEFAULTS[7]),
            raw(AssessmentType::Dass21, FEATURE_DEFAULTS[8]),
            raw(AssessmentType::Burnout, FEATURE_DEFAULTS[9]),
            raw(AssessmentType::WorkLifeBalance, FEATURE_DEFAULTS[10]),
            raw(AssessmentType::JobSatisfaction, FEATURE_DEFAULTS[11]),
        ];

        Self { values }
    }

    pub fn hours_per_week(&self) -> f64 {
        self.values[2]
    }

    pub fn commute_minutes(&self) -> f64 {
        self.values[3]
    }

    pub fn sleep_hours(&self) -> f64 {
        self.values[4]
    }

    pub fn exercise_days_per_week(&self) -> f64 {
        self.values[5]
    }

    pub fn social_support(&self) -> f64 {
        self.values[6]
    }
}
