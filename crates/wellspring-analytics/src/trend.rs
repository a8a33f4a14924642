use std::collections::BTreeMap;

use jiff::Timestamp;
use tracing::debug;

use wellspring_core::models::assessment::AssessmentType;
use wellspring_core::models::history::SubjectHistory;
use wellspring_core::models::trend::{TrendDirection, TrendReport, TrendResult};

use crate::aggregate::{age_days, in_window};
use crate::insight::{aggregate_recommendations, build_insights};
use crate::stats::{linear_regression, std_dev};

/// Slope magnitudes below this count as stable.
const STABLE_SLOPE: f64 = 0.1;

/// Fit a per-domain linear trend over the in-window history and derive
/// qualitative insights and aggregate recommendations.
///
/// Domains with fewer than two in-window assessments are omitted; a history
/// with no analyzable domain yields an empty report, not an error.
pub fn analyze(history: &SubjectHistory, window_days: u32, now: Timestamp) -> TrendReport {
    let mut trends = BTreeMap::new();

    for assessment_type in AssessmentType::ALL {
        let series: Vec<_> = history
            .by_type(assessment_type)
            .into_iter()
            .filter(|a| in_window(now, a.administered_at, window_days))
            .collect();
        if series.len() < 2 {
            continue;
        }

        let first = series[0].administered_at;
        let xs: Vec<f64> = series
            .iter()
            .map(|a| age_days(a.administered_at, first))
            .collect();
        let ys: Vec<f64> = series.iter().map(|a| a.normalized_score).collect();

        let reg = linear_regression(&xs, &ys);

        // Slope lives on the normalized "higher = better" scale, so positive
        // always means wellness improving.
        let direction = if reg.slope.abs() < STABLE_SLOPE {
            TrendDirection::Stable
        } else if reg.slope > 0.0 {
            TrendDirection::Improving
        } else {
            TrendDirection::Declining
        };

        trends.insert(
            assessment_type,
            TrendResult {
                slope: reg.slope,
                r_squared: reg.r_squared,
                p_value: reg.p_value,
                direction,
                volatility: std_dev(&ys),
                latest_score: *ys.last().unwrap_or(&0.0),
                score_change: ys.last().unwrap_or(&0.0) - ys.first().unwrap_or(&0.0),
                sample_count: series.len(),
            },
        );
    }

    debug!(domains = trends.len(), "trend analysis complete");

    let insights = build_insights(&trends);
    let recommendations = aggregate_recommendations(&trends);

    TrendReport {
        trends,
        insights,
        recommendations,
    }
}
