use std::sync::LazyLock;

use wellspring_core::models::assessment::ConcernLevel;

use crate::instruments::band;
use crate::scoring::{InstrumentConfig, NormalizationRule, ResponseRange};

/// Job satisfaction questionnaire: 6 items rated 0–4, total 0–24.
/// Higher raw = more satisfied.
pub static CONFIG: LazyLock<InstrumentConfig> = LazyLock::new(|| InstrumentConfig {
    name: "Job Satisfaction".to_string(),
    item_count: 6,
    response_range: ResponseRange { min: 0, max: 4 },
    reversed_items: vec![],
    bands: vec![
        band("Low", 0, ConcernLevel::Moderate),
        band("Moderate", 10, ConcernLevel::Mild),
        band("High", 17, ConcernLevel::None),
    ],
    rule: NormalizationRule::DirectSum,
    aggregation_weight: 0.75,
});
