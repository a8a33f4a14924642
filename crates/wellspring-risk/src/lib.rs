//! wellspring-risk
//!
//! Risk stratification and intervention recommendation. A pre-trained
//! classifier/regressor artifact is loaded once into a caller-owned
//! [`ModelArtifact`] handle; inference over it is read-only and safe from
//! concurrent callers. The intervention recommender scores a static catalog
//! against the subject's derived concerns and the stratifier's predicted
//! per-intervention response.

pub mod catalog;
pub mod error;
pub mod features;
pub mod model;
pub mod recommend;
pub mod stratify;

pub use features::FeatureVector;
pub use model::ModelArtifact;
pub use recommend::{DEFAULT_MAX_RESULTS, derive_concerns, recommend};
pub use stratify::RiskStratifier;
