pub mod burnout;
pub mod dass21;
pub mod job_satisfaction;
pub mod pss10;
pub mod work_life_balance;

use wellspring_core::models::assessment::ConcernLevel;

use crate::scoring::CategoryBand;

pub(crate) fn band(label: &str, lower: u32, concern: ConcernLevel) -> CategoryBand {
    CategoryBand {
        label: label.to_string(),
        lower,
        concern,
    }
}
