use std::sync::LazyLock;

use wellspring_core::models::assessment::ConcernLevel;

use crate::instruments::band;
use crate::scoring::{InstrumentConfig, NormalizationRule, ResponseRange};

/// Work-life balance questionnaire: 8 items rated 0–4, total 0–32.
/// Higher raw = better balance, so normalization is the direct ratio.
pub static CONFIG: LazyLock<InstrumentConfig> = LazyLock::new(|| InstrumentConfig {
    name: "Work-Life Balance".to_string(),
    item_count: 8,
    response_range: ResponseRange { min: 0, max: 4 },
    reversed_items: vec![],
    bands: vec![
        band("Poor", 0, ConcernLevel::High),
        band("Fair", 13, ConcernLevel::Moderate),
        band("Good", 21, ConcernLevel::None),
        band("Excellent", 27, ConcernLevel::None),
    ],
    rule: NormalizationRule::DirectSum,
    aggregation_weight: 0.75,
});
