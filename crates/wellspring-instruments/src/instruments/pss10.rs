use std::sync::LazyLock;

use wellspring_core::models::assessment::ConcernLevel;

use crate::instruments::band;
use crate::scoring::{InstrumentConfig, NormalizationRule, ResponseRange};

/// PSS-10: Perceived Stress Scale, 10 items rated 0–4.
/// Items 4, 5, 7, and 8 (1-based) are positively worded and reverse-scored.
/// Total 0–40; higher raw = more perceived stress.
pub static CONFIG: LazyLock<InstrumentConfig> = LazyLock::new(|| InstrumentConfig {
    name: "PSS-10".to_string(),
    item_count: 10,
    response_range: ResponseRange { min: 0, max: 4 },
    reversed_items: vec![3, 4, 6, 7],
    bands: vec![
        band("Low", 0, ConcernLevel::None),
        band("Moderate", 14, ConcernLevel::Moderate),
        band("High", 27, ConcernLevel::High),
    ],
    rule: NormalizationRule::InvertedSum,
    aggregation_weight: 1.0,
});
