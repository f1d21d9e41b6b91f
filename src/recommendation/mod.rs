//! Recommendation Generator
//!
//! Pure table lookup keyed by (dominant, weakest, strength, season). No
//! scoring happens here.

pub mod generator;
pub mod tables;
pub mod types;

pub use generator::RecommendationGenerator;
pub use types::{ElementAdvice, Recommendation, RecommendationKey};
