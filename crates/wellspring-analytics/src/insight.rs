use std::collections::BTreeMap;

use wellspring_core::models::assessment::AssessmentType;
use wellspring_core::models::trend::{
    Insight, InsightKind, InsightSeverity, TrendDirection, TrendResult,
};

/// Minimum |slope| (points per day) for a trend insight.
const INSIGHT_SLOPE: f64 = 0.5;
/// Minimum fit quality for a trend insight.
const INSIGHT_R_SQUARED: f64 = 0.3;
/// Sample standard deviation above which a variability insight fires.
const VOLATILITY_THRESHOLD: f64 = 15.0;

/// Derive deterministic insights from the fitted trends. Thresholds are
/// fixed; the same trends always produce the same insights.
pub(crate) fn build_insights(trends: &BTreeMap<AssessmentType, TrendResult>) -> Vec<Insight> {
    let mut insights = Vec::new();

    for (&assessment_type, trend) in trends {
        let domain = wellspring_instruments::config(assessment_type).name.clone();

        if trend.direction == TrendDirection::Improving
            && trend.slope > INSIGHT_SLOPE
            && trend.r_squared > INSIGHT_R_SQUARED
        {
            insights.push(Insight {
                kind: InsightKind::ImprovingTrend,
                assessment_type,
                title: format!("{domain} is improving"),
                narrative: format!(
                    "{domain} scores have risen by {:.1} points over the last {} \
                     administrations, a consistent upward trend.",
                    trend.score_change, trend.sample_count
                ),
                severity: InsightSeverity::Positive,
                recommended_actions: improving_actions(assessment_type),
            });
        }

        if trend.direction == TrendDirection::Declining
            && trend.slope < -INSIGHT_SLOPE
            && trend.r_squared > INSIGHT_R_SQUARED
        {
            insights.push(Insight {
                kind: InsightKind::DecliningTrend,
                assessment_type,
                title: format!("{domain} is declining"),
                narrative: format!(
                    "{domain} scores have dropped by {:.1} points across {} \
                     administrations. The decline is consistent, not a one-off dip.",
                    trend.score_change.abs(),
                    trend.sample_count
                ),
                severity: InsightSeverity::Warning,
                recommended_actions: declining_actions(assessment_type),
            });
        }

        if trend.volatility > VOLATILITY_THRESHOLD {
            insights.push(Insight {
                kind: InsightKind::HighVariability,
                assessment_type,
                title: format!("{domain} is fluctuating"),
                narrative: format!(
                    "{domain} scores vary widely between administrations \
                     (spread {:.1} points). Day-to-day circumstances may be \
                     driving the swings.",
                    trend.volatility
                ),
                severity: InsightSeverity::Info,
                recommended_actions: variability_actions(assessment_type),
            });
        }
    }

    insights
}

/// Compare declining against improving domains and emit escalation or
/// reinforcement suggestions accordingly, de-duplicated in first-seen order.
pub(crate) fn aggregate_recommendations(
    trends: &BTreeMap<AssessmentType, TrendResult>,
) -> Vec<String> {
    let declining = trends
        .values()
        .filter(|t| t.direction == TrendDirection::Declining)
        .count();
    let improving = trends
        .values()
        .filter(|t| t.direction == TrendDirection::Improving)
        .count();

    let mut recommendations: Vec<String> = Vec::new();
    let mut push = |s: &str| {
        if !recommendations.iter().any(|r| r == s) {
            recommendations.push(s.to_string());
        }
    };

    if declining > improving && declining > 0 {
        push("Several areas are trending downward; consider scheduling a check-in with a wellbeing professional.");
        push("Revisit recent changes in workload or routine that coincide with the decline.");
        push("Shorten the assessment interval to track whether the decline continues.");
    } else if improving > declining && improving > 0 {
        push("Momentum is positive; keep the routines that coincided with the improvement.");
        push("Note what changed recently so the improvement can be sustained deliberately.");
    }

    recommendations
}

fn improving_actions(assessment_type: AssessmentType) -> Vec<String> {
    let actions: &[&str] = match assessment_type {
        AssessmentType::Pss10 => &[
            "Keep the stress-management habits that are working",
            "Note which recent changes coincided with lower stress",
            "Maintain the current assessment cadence to confirm the trend",
        ],
        AssessmentType::Dass21 => &[
            "Continue current coping strategies",
            "Keep any scheduled support sessions in place",
            "Record what has helped so it can be repeated in harder weeks",
        ],
        AssessmentType::Burnout => &[
            "Protect the recovery time that enabled the rebound",
            "Keep workload boundaries where they are",
            "Review energy levels again in two weeks",
        ],
        AssessmentType::WorkLifeBalance => &[
            "Keep the boundaries between work and personal time",
            "Continue scheduling non-work commitments first",
            "Watch for creep in working hours",
        ],
        AssessmentType::JobSatisfaction => &[
            "Keep doing the work that feels meaningful",
            "Share what improved with your manager or team",
            "Revisit goals while motivation is high",
        ],
    };
    actions.iter().map(|s| s.to_string()).collect()
}

fn declining_actions(assessment_type: AssessmentType) -> Vec<String> {
    let actions: &[&str] = match assessment_type {
        AssessmentType::Pss10 => &[
            "Practice a daily relaxation exercise such as paced breathing",
            "Identify the top two current stressors and address one directly",
            "Protect sleep — stress and short sleep reinforce each other",
            "Consider talking to a professional if the rise continues",
        ],
        AssessmentType::Dass21 => &[
            "Reach out to a mental-health professional",
            "Keep regular contact with supportive friends or family",
            "Maintain basic routines: sleep, meals, daylight, movement",
            "Reduce commitments temporarily where possible",
        ],
        AssessmentType::Burnout => &[
            "Discuss workload with your manager",
            "Take real breaks during the workday, away from the screen",
            "Plan time fully away from work in the next fortnight",
            "Reconnect with the parts of the job that used to energize you",
        ],
        AssessmentType::WorkLifeBalance => &[
            "Set a hard stop time for the workday",
            "Block personal commitments in the calendar like meetings",
            "Audit evening and weekend work over the next week",
        ],
        AssessmentType::JobSatisfaction => &[
            "Identify which aspects of the role changed for the worse",
            "Raise one concrete, fixable issue with your manager",
            "Seek out tasks aligned with your strengths",
        ],
    };
    actions.iter().map(|s| s.to_string()).collect()
}

fn variability_actions(assessment_type: AssessmentType) -> Vec<String> {
    let actions: &[&str] = match assessment_type {
        AssessmentType::Pss10 => &[
            "Keep a short daily note of stress peaks and their triggers",
            "Answer assessments at a consistent time of day",
            "Look for weekly patterns — certain days may drive the swings",
        ],
        _ => &[
            "Answer assessments at a consistent time of day",
            "Note unusual circumstances alongside each assessment",
            "Look for external events that line up with the swings",
        ],
    };
    actions.iter().map(|s| s.to_string()).collect()
}
