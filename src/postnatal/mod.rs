//! Postnatal Symptom-Score Engine
//!
//! Two entry modes, one scoring routine:
//! - Observation mode: daily record → vocabulary tags
//! - Questionnaire mode: answer map → option tags
//!
//! Both end in `score_tags` (base 50, signed severities, clamp 0-100), then the
//! shared normalization. Weights are validated on entry. Dominant element ties
//! resolve in priority order (wood, fire, earth, metal, water).

pub mod observation;
pub mod questionnaire;
pub mod tags;
pub mod vocabulary;

pub use observation::{DailyObservation, EmotionEntry, MealEntry, SleepEntry, SymptomEntry};
pub use questionnaire::{
    find_question, questionnaire_tags, Question, QuestionnaireAnswers, QUESTIONS,
};
pub use tags::{score_tags, SymptomTag, TagCategory};
pub use vocabulary::{BodyRegion, MealFeeling, Mood, SleepDuration, SleepFeeling};

use serde::{Deserialize, Serialize};

use crate::config::ScoringWeights;
use crate::element::{Element, ElementPercentages, ElementScores};
use crate::error::EngineResult;
use crate::utils::{dominant_element, normalize_scores};

/// Which entry mode produced a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostnatalSource {
    Observation,
    Questionnaire,
}

/// Postnatal scoring result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostnatalProfile {
    /// Clamped per-element scores before normalization
    pub scores: ElementScores,
    pub percentages: ElementPercentages,
    pub dominant: Element,
    pub tags: Vec<SymptomTag>,
    pub source: PostnatalSource,
}

fn build_profile(
    tags: Vec<SymptomTag>,
    source: PostnatalSource,
    weights: &ScoringWeights,
) -> PostnatalProfile {
    let scores = score_tags(&tags, weights);
    let percentages = normalize_scores(&scores);
    let dominant = dominant_element(percentages.as_map());

    tracing::debug!(
        "Postnatal ({:?}): {} tags, dominant {}",
        source,
        tags.len(),
        dominant
    );

    PostnatalProfile {
        scores,
        percentages,
        dominant,
        tags,
        source,
    }
}

/// Score a daily observation bundle
pub fn score_observation(
    observation: &DailyObservation,
    weights: &ScoringWeights,
) -> EngineResult<PostnatalProfile> {
    weights.validate()?;
    let tags = observation.to_tags()?;
    Ok(build_profile(tags, PostnatalSource::Observation, weights))
}

/// Score a questionnaire answer map
pub fn score_questionnaire(
    answers: &QuestionnaireAnswers,
    weights: &ScoringWeights,
) -> EngineResult<PostnatalProfile> {
    weights.validate()?;
    let tags = questionnaire_tags(answers)?;
    Ok(build_profile(tags, PostnatalSource::Questionnaire, weights))
}
