use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::assessment::AssessmentType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TrendDirection {
    Improving,
    Declining,
    Stable,
}

/// Least-squares trend over one domain's normalized scores. Slope is defined
/// on the normalized "higher = better" scale, so a positive slope always
/// means wellness increasing.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TrendResult {
    /// Normalized-score change per day.
    pub slope: f64,
    pub r_squared: f64,
    pub p_value: f64,
    pub direction: TrendDirection,
    /// Sample standard deviation of the series.
    pub volatility: f64,
    pub latest_score: f64,
    /// Latest minus earliest score in the window.
    pub score_change: f64,
    pub sample_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum InsightKind {
    ImprovingTrend,
    DecliningTrend,
    HighVariability,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum InsightSeverity {
    Positive,
    Warning,
    Info,
}

/// Deterministic narrative derived from one domain's trend.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Insight {
    pub kind: InsightKind,
    pub assessment_type: AssessmentType,
    pub title: String,
    pub narrative: String,
    pub severity: InsightSeverity,
    pub recommended_actions: Vec<String>,
}

/// Everything the trend analyzer produces for one subject.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TrendReport {
    pub trends: BTreeMap<AssessmentType, TrendResult>,
    pub insights: Vec<Insight>,
    pub recommendations: Vec<String>,
}
