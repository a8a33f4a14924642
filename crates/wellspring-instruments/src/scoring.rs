use serde::{Deserialize, Serialize};
use ts_rs::TS;

use wellspring_core::models::assessment::{
    AssessmentType, ConcernLevel, RawResponse, ScoredAssessment,
};

use crate::error::InstrumentError;

/// Inclusive range of valid per-item answers. Every supported instrument
/// anchors its scale at 0 so that reverse-scoring (`max − value`) stays
/// inside the same range.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResponseRange {
    pub min: u8,
    pub max: u8,
}

impl ResponseRange {
    pub fn contains(&self, value: u8) -> bool {
        value >= self.min && value <= self.max
    }
}

/// One row of a cut-point table. The lower bound is inclusive; the band runs
/// up to the next band's lower bound (the last band runs to the max score).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategoryBand {
    pub label: String,
    pub lower: u32,
    /// Direction-corrected severity of falling in this band.
    pub concern: ConcernLevel,
}

/// A named group of items within a multi-subscale instrument, with the
/// weight it contributes to normalization. Items are 0-based indices into
/// the (already reverse-scored) answer vector.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubscaleSpec {
    pub name: String,
    pub items: Vec<usize>,
    pub weight: f64,
}

/// How a raw score maps onto the 0–100 "higher = better" wellness scale.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum NormalizationRule {
    /// Higher raw = worse wellness: `(1 − raw/max) · 100`.
    InvertedSum,
    /// Higher raw = better wellness: `(raw/max) · 100`.
    DirectSum,
    /// Weighted mean of per-subscale distress ratios, then inverted. Item
    /// reversal has already happened, so every subscale reads higher = worse.
    WeightedSubscales(Vec<SubscaleSpec>),
}

/// Static configuration for one instrument. Treated as versioned, read-only
/// data; the scoring function is pure over this plus its inputs.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InstrumentConfig {
    pub name: String,
    pub item_count: usize,
    pub response_range: ResponseRange,
    /// 0-based indices reverse-scored as `max − value` before summing.
    pub reversed_items: Vec<usize>,
    /// Ascending lower bounds; the first band starts at 0.
    pub bands: Vec<CategoryBand>,
    pub rule: NormalizationRule,
    /// Weight this domain carries in the wellness index.
    pub aggregation_weight: f64,
}

impl InstrumentConfig {
    pub fn max_score(&self) -> u32 {
        self.item_count as u32 * self.response_range.max as u32
    }

    /// The band whose inclusive lower bound covers `raw_score`.
    pub fn band_for(&self, raw_score: u32) -> Option<&CategoryBand> {
        self.bands.iter().rev().find(|b| raw_score >= b.lower)
    }
}

/// Score one administration of an instrument.
///
/// Validates length and per-item range, applies reverse scoring, sums to a
/// raw score, classifies it against the cut-point table, and normalizes onto
/// the 0–100 "higher = better" scale. Pure function of its inputs and the
/// instrument's static configuration.
pub fn score(
    assessment_type: AssessmentType,
    response: &RawResponse,
    administered_at: jiff::Timestamp,
) -> Result<ScoredAssessment, InstrumentError> {
    let cfg = crate::config(assessment_type);

    if response.len() != cfg.item_count {
        return Err(InstrumentError::InvalidResponseLength {
            assessment: assessment_type,
            expected: cfg.item_count,
            actual: response.len(),
        });
    }
    for (index, &value) in response.answers.iter().enumerate() {
        if !cfg.response_range.contains(value) {
            return Err(InstrumentError::ItemOutOfRange {
                assessment: assessment_type,
                index,
                value,
                min: cfg.response_range.min,
                max: cfg.response_range.max,
            });
        }
    }

    let adjusted: Vec<u32> = response
        .answers
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            if cfg.reversed_items.contains(&i) {
                (cfg.response_range.max - v) as u32
            } else {
                v as u32
            }
        })
        .collect();

    let raw_score: u32 = adjusted.iter().sum();
    let max_score = cfg.max_score();

    let band = cfg
        .band_for(raw_score)
        .ok_or(InstrumentError::UnknownCategory {
            assessment: assessment_type,
            raw_score,
        })?;

    let normalized_score = normalize(cfg, &adjusted, raw_score, max_score).clamp(0.0, 100.0);

    Ok(ScoredAssessment {
        assessment_type,
        raw_score,
        max_score,
        category: band.label.clone(),
        concern: band.concern,
        normalized_score,
        administered_at,
    })
}

fn normalize(cfg: &InstrumentConfig, adjusted: &[u32], raw_score: u32, max_score: u32) -> f64 {
    match &cfg.rule {
        NormalizationRule::InvertedSum => (1.0 - raw_score as f64 / max_score as f64) * 100.0,
        NormalizationRule::DirectSum => (raw_score as f64 / max_score as f64) * 100.0,
        NormalizationRule::WeightedSubscales(subscales) => {
            let item_max = cfg.response_range.max as f64;
            let mut weighted = 0.0;
            let mut weight_sum = 0.0;
            for subscale in subscales {
                let sum: u32 = subscale.items.iter().map(|&i| adjusted[i]).sum();
                let subscale_max = subscale.items.len() as f64 * item_max;
                weighted += (sum as f64 / subscale_max) * subscale.weight;
                weight_sum += subscale.weight;
            }
            (1.0 - weighted / weight_sum) * 100.0
        }
    }
}
