//! Wuxing Scorer - main coordinator
//!
//! Holds one set of weights and runs every pipeline against it. The natal and
//! postnatal layers are reported side by side and never merged.

use serde::{Deserialize, Serialize};

use crate::chart::{build_chart, BirthInput, Chart};
use crate::classification::{classify, Classification};
use crate::config::ScoringWeights;
use crate::error::EngineResult;
use crate::natal::{self, NatalProfile};
use crate::postnatal::{self, DailyObservation, PostnatalProfile, QuestionnaireAnswers};
use crate::recommendation::{Recommendation, RecommendationGenerator, RecommendationKey};
use crate::rolling::{self, RollingSummary};
use crate::tables::Season;

/// Either postnatal entry mode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostnatalInput {
    Observation(DailyObservation),
    Questionnaire(QuestionnaireAnswers),
}

/// Everything `assess_full` needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRequest {
    pub birth: BirthInput,
    #[serde(default)]
    pub postnatal: Option<PostnatalInput>,
    /// Season advice is keyed on; defaults to the birth month's season
    #[serde(default)]
    pub current_season: Option<Season>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NatalLayer {
    pub profile: NatalProfile,
    pub classification: Classification,
    pub recommendation: Recommendation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostnatalLayer {
    pub profile: PostnatalProfile,
    pub classification: Classification,
    pub recommendation: Recommendation,
}

/// Both layers for one person
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WuxingReport {
    pub chart: Chart,
    pub season: Season,
    pub natal: NatalLayer,
    pub postnatal: Option<PostnatalLayer>,
}

/// Main five-element scorer
#[derive(Debug, Clone, Default)]
pub struct WuxingScorer {
    weights: ScoringWeights,
}

impl WuxingScorer {
    /// Scorer with validated weights
    pub fn new(weights: ScoringWeights) -> EngineResult<Self> {
        weights.validate()?;
        Ok(Self { weights })
    }

    /// Scorer with weights from `WUXING_WEIGHTS`, or the reference weights
    pub fn from_env() -> EngineResult<Self> {
        Self::new(ScoringWeights::from_env()?)
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn build_chart(&self, birth: &BirthInput) -> EngineResult<Chart> {
        build_chart(birth)
    }

    pub fn score_natal(&self, birth: &BirthInput) -> EngineResult<NatalProfile> {
        let chart = build_chart(birth)?;
        Ok(natal::score_natal(&chart, &self.weights))
    }

    pub fn score_observation(
        &self,
        observation: &DailyObservation,
    ) -> EngineResult<PostnatalProfile> {
        postnatal::score_observation(observation, &self.weights)
    }

    pub fn score_questionnaire(
        &self,
        answers: &QuestionnaireAnswers,
    ) -> EngineResult<PostnatalProfile> {
        postnatal::score_questionnaire(answers, &self.weights)
    }

    pub fn score_postnatal(&self, input: &PostnatalInput) -> EngineResult<PostnatalProfile> {
        match input {
            PostnatalInput::Observation(obs) => self.score_observation(obs),
            PostnatalInput::Questionnaire(answers) => self.score_questionnaire(answers),
        }
    }

    /// Rolling summary over many days, scored in parallel
    pub fn summarize_days(
        &self,
        observations: &[DailyObservation],
    ) -> EngineResult<RollingSummary> {
        rolling::summarize(observations, &self.weights)
    }

    pub fn natal_layer(&self, profile: NatalProfile, season: Season) -> NatalLayer {
        let classification = classify(&profile.scores, &profile.percentages);
        let recommendation = RecommendationGenerator::generate(RecommendationKey {
            dominant: classification.dominant,
            weakest: classification.weakest,
            strength: Some(profile.strength),
            season,
        });
        NatalLayer {
            profile,
            classification,
            recommendation,
        }
    }

    pub fn postnatal_layer(&self, profile: PostnatalProfile, season: Season) -> PostnatalLayer {
        let classification = classify(&profile.scores, &profile.percentages);
        let recommendation = RecommendationGenerator::generate(RecommendationKey {
            dominant: classification.dominant,
            weakest: classification.weakest,
            strength: None,
            season,
        });
        PostnatalLayer {
            profile,
            classification,
            recommendation,
        }
    }

    /// Chart, natal layer and optional postnatal layer
    ///
    /// All validation happens before any scoring, so an invalid postnatal
    /// input fails the whole request.
    pub fn assess_full(&self, request: &AssessmentRequest) -> EngineResult<WuxingReport> {
        let chart = build_chart(&request.birth)?;
        let postnatal_profile = request
            .postnatal
            .as_ref()
            .map(|input| self.score_postnatal(input))
            .transpose()?;

        let natal_profile = natal::score_natal(&chart, &self.weights);
        let season = request.current_season.unwrap_or(natal_profile.season);

        tracing::info!(
            "Assessed {}: natal {}, postnatal {}",
            chart,
            natal_profile.strength.label(),
            postnatal_profile
                .as_ref()
                .map(|p| p.dominant.name())
                .unwrap_or("none")
        );

        Ok(WuxingReport {
            chart,
            season,
            natal: self.natal_layer(natal_profile, season),
            postnatal: postnatal_profile.map(|p| self.postnatal_layer(p, season)),
        })
    }
}
