//! wellspring-analytics
//!
//! Wellness index aggregation and trend analysis over a subject's scored
//! assessment history. Both entry points take the history as an immutable
//! snapshot plus an explicit `now` — the crate performs no I/O and holds no
//! state, so concurrent invocations for different subjects need no
//! coordination.

pub mod aggregate;
pub mod insight;
mod stats;
pub mod trend;

pub use aggregate::aggregate;
pub use trend::analyze;
