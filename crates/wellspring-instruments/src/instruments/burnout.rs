use std::sync::LazyLock;

use wellspring_core::models::assessment::ConcernLevel;

use crate::instruments::band;
use crate::scoring::{InstrumentConfig, NormalizationRule, ResponseRange, SubscaleSpec};

/// MBI-style burnout inventory: 22 items rated 0–6 across three subscales
/// laid out in contiguous blocks — emotional exhaustion (items 1–9),
/// depersonalization (items 10–14), personal accomplishment (items 15–22).
///
/// Accomplishment items are positively worded, so they sit in
/// `reversed_items`; after reversal every item reads higher = worse and the
/// 0–132 total is direction-consistent. Normalization weights the subscale
/// distress ratios 0.4 / 0.3 / 0.3 before inverting onto 0–100.
pub static CONFIG: LazyLock<InstrumentConfig> = LazyLock::new(|| InstrumentConfig {
    name: "Burnout Inventory".to_string(),
    item_count: 22,
    response_range: ResponseRange { min: 0, max: 6 },
    reversed_items: (14..22).collect(),
    bands: vec![
        band("Low", 0, ConcernLevel::None),
        band("Moderate", 44, ConcernLevel::Moderate),
        band("High", 88, ConcernLevel::High),
    ],
    rule: NormalizationRule::WeightedSubscales(vec![
        SubscaleSpec {
            name: "Emotional Exhaustion".to_string(),
            items: (0..9).collect(),
            weight: 0.4,
        },
        SubscaleSpec {
            name: "Depersonalization".to_string(),
            items: (9..14).collect(),
            weight: 0.3,
        },
        SubscaleSpec {
            name: "Reduced Personal Accomplishment".to_string(),
            items: (14..22).collect(),
            weight: 0.3,
        },
    ]),
    aggregation_weight: 1.25,
});
