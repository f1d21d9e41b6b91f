//! Symptom tags and the shared tag-scoring routine

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::config::ScoringWeights;
use crate::element::{Element, ElementScores};

/// Kind of signal a tag records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagCategory {
    Emotion,
    Physical,
    /// Tongue or other direct observation
    Observation,
    Lifestyle,
}

/// A weighted signal on one element
///
/// Positive severity aggravates the element, negative severity is a
/// health-affirming counter-signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomTag {
    pub element: Element,
    pub category: TagCategory,
    pub label: String,
    pub severity: i32,
}

impl SymptomTag {
    pub fn new(element: Element, category: TagCategory, label: &str, severity: i32) -> Self {
        Self {
            element,
            category,
            label: label.to_string(),
            severity,
        }
    }
}

/// Tags produced by one recognized observation value
pub type TagList = SmallVec<[SymptomTag; 2]>;

/// Start every element at the base score, add each tag's signed severity,
/// then clamp each element into [floor, ceiling]
///
/// Unvalidated bounds never panic: the floor is applied first, so a swapped
/// range pins every element to the ceiling.
pub fn score_tags(tags: &[SymptomTag], weights: &ScoringWeights) -> ElementScores {
    let mut scores = ElementScores::splat(weights.postnatal_base_score);
    for tag in tags {
        tracing::trace!("Tag {} {:?} {:+}", tag.element, tag.label, tag.severity);
        scores.add(tag.element, tag.severity as f64);
    }
    scores.map(|_, v| v.max(weights.postnatal_floor).min(weights.postnatal_ceiling))
}
