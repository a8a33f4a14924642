use thiserror::Error;

use wellspring_core::models::assessment::AssessmentType;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("{assessment:?}: expected {expected} answers, got {actual}")]
    InvalidResponseLength {
        assessment: AssessmentType,
        expected: usize,
        actual: usize,
    },

    #[error("{assessment:?}: answer {value} at index {index} is outside range [{min}, {max}]")]
    ItemOutOfRange {
        assessment: AssessmentType,
        index: usize,
        value: u8,
        min: u8,
        max: u8,
    },

    #[error("{assessment:?}: no category band covers raw score {raw_score}")]
    UnknownCategory {
        assessment: AssessmentType,
        raw_score: u32,
    },
}
