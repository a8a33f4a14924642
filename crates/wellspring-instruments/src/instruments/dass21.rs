use std::sync::LazyLock;

use wellspring_core::models::assessment::ConcernLevel;

use crate::instruments::band;
use crate::scoring::{InstrumentConfig, NormalizationRule, ResponseRange, SubscaleSpec};

/// DASS-21: Depression Anxiety Stress Scales, 21 items rated 0–3.
///
/// The canonical item→subscale assignment is the published DASS-21 mapping
/// (1-based): depression {3, 5, 10, 13, 16, 17, 21}, anxiety
/// {2, 4, 7, 9, 15, 19, 20}, stress {1, 6, 8, 11, 12, 14, 18}. It is fixed
/// configuration here and not negotiable at runtime.
///
/// Subscales are equally weighted, so the normalized score coincides with the
/// inverted total ratio; cut points apply to the 0–63 total.
pub static CONFIG: LazyLock<InstrumentConfig> = LazyLock::new(|| InstrumentConfig {
    name: "DASS-21".to_string(),
    item_count: 21,
    response_range: ResponseRange { min: 0, max: 3 },
    reversed_items: vec![],
    bands: vec![
        band("Normal", 0, ConcernLevel::None),
        band("Mild", 15, ConcernLevel::Mild),
        band("Moderate", 26, ConcernLevel::Moderate),
        band("Severe", 40, ConcernLevel::High),
        band("Extremely Severe", 51, ConcernLevel::Severe),
    ],
    rule: NormalizationRule::WeightedSubscales(vec![
        SubscaleSpec {
            name: "Depression".to_string(),
            items: vec![2, 4, 9, 12, 15, 16, 20],
            weight: 1.0,
        },
        SubscaleSpec {
            name: "Anxiety".to_string(),
            items: vec![1, 3, 6, 8, 14, 18, 19],
            weight: 1.0,
        },
        SubscaleSpec {
            name: "Stress".to_string(),
            items: vec![0, 5, 7, 10, 11, 13, 17],
            weight: 1.0,
        },
    ]),
    aggregation_weight: 1.5,
});
