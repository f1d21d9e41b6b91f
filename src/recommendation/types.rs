use serde::{Deserialize, Serialize};

use crate::element::Element;
use crate::natal::DayMasterStrength;
use crate::tables::Season;

/// Selection key for a recommendation bundle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecommendationKey {
    pub dominant: Element,
    pub weakest: Element,
    /// Natal layer only
    pub strength: Option<DayMasterStrength>,
    pub season: Season,
}

impl RecommendationKey {
    /// All five elements tie (dominant and weakest resolve to the same element)
    pub fn is_even(&self) -> bool {
        self.dominant == self.weakest
    }
}

/// Advice lists for rendering by a presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub key: RecommendationKey,
    pub summary: String,
    pub diet: Vec<String>,
    pub exercise: Vec<String>,
    pub emotional: Vec<String>,
    pub seasonal: Vec<String>,
}

/// Static advice for one element, split by direction
#[derive(Debug, Clone, Copy)]
pub struct ElementAdvice {
    /// Diet when the element runs high
    pub diet_excess: &'static [&'static str],
    /// Diet when the element runs low
    pub diet_deficient: &'static [&'static str],
    pub exercise_excess: &'static [&'static str],
    pub exercise_deficient: &'static [&'static str],
    pub emotional_excess: &'static [&'static str],
    pub emotional_deficient: &'static [&'static str],
}
