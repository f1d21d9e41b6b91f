//! Five-Element (Wuxing) Computation Engine
//!
//! Deterministic rule-and-lookup pipelines:
//! - `chart`: birth timestamp → four pillars
//! - `natal`: four pillars → weighted element distribution + day-master strength
//! - `postnatal`: daily observations or questionnaire → acquired distribution
//! - `classification`: balance score and constitution for either distribution
//! - `recommendation`: table-driven advice
//!
//! Everything is pure and synchronous; lookup tables are immutable statics.

pub mod chart;
pub mod classification;
pub mod config;
pub mod element;
pub mod error;
pub mod natal;
pub mod postnatal;
pub mod recommendation;
pub mod rolling;
pub mod scorer;
pub mod tables;
pub mod utils;

// Re-export commonly used types
pub use chart::{build_chart, season_for_month, BirthInput, Chart, Pillar};
pub use classification::{balance_score, classify, Classification, Constitution};
pub use config::ScoringWeights;
pub use element::{Element, ElementMap, ElementPercentages, ElementScores};
pub use error::{EngineError, EngineResult};
pub use natal::{score_natal, DayMasterStrength, NatalProfile};
pub use postnatal::{
    score_observation, score_questionnaire, DailyObservation, PostnatalProfile,
    QuestionnaireAnswers, SymptomTag,
};
pub use recommendation::{Recommendation, RecommendationGenerator, RecommendationKey};
pub use rolling::{summarize, RollingSummary};
pub use scorer::{AssessmentRequest, PostnatalInput, WuxingReport, WuxingScorer};
pub use tables::{Branch, Season, Stem};
pub use utils::normalize_scores;
