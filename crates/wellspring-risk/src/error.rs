use thiserror::Error;

#[derive(Debug, Error)]
pub enum RiskError {
    /// The model artifact is missing, unparseable, or dimensionally unusable.
    /// Fatal to the call; callers own any fallback behavior.
    #[error("model artifact unavailable: {0}")]
    ModelUnavailable(String),

    #[error("model artifact malformed: {field} has {actual} entries, expected {expected}")]
    ArtifactDimension {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
}
