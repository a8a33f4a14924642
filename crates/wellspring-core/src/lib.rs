//! wellspring-core
//!
//! Pure domain types shared across the Wellspring engine crates. No scoring
//! logic lives here — this is the vocabulary the instrument, analytics, and
//! risk crates speak to each other and to external collaborators.

pub mod models;
