//! Steps 3-7: multiplicative adjustments of the accumulated scores
//!
//! Order matters: each step scales the running totals left by the previous one.

use serde::{Deserialize, Serialize};

use crate::config::ScoringWeights;
use crate::element::{Element, ElementScores};
use crate::tables::{
    matched_branch_combinations, matched_stem_combinations, Branch, LifeStage,
    MatchedCombination, SeasonalState, Stem,
};

/// Relation of an element to the day-master element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    Same,
    /// Generates the day master
    Generating,
    /// Generated by the day master
    Generated,
    /// Restricts the day master
    Restricting,
    /// Restricted by the day master
    Restricted,
}

impl Relation {
    pub fn of(element: Element, day_master: Element) -> Relation {
        if element == day_master {
            Relation::Same
        } else if element.generates() == day_master {
            Relation::Generating
        } else if day_master.generates() == element {
            Relation::Generated
        } else if element.restricts() == day_master {
            Relation::Restricting
        } else {
            Relation::Restricted
        }
    }
}

/// Step 3: scale every element by its seasonal state
pub fn apply_seasonal(scores: &mut ElementScores, seasonal: Element, weights: &ScoringWeights) {
    for element in Element::ALL {
        let state = SeasonalState::of(element, seasonal);
        scores.scale(element, weights.seasonal.for_state(state));
    }
}

/// Step 4: scale the day-master element by its life-stage weight
pub fn apply_life_stage(
    scores: &mut ElementScores,
    day_master: Element,
    stage: LifeStage,
    weights: &ScoringWeights,
) {
    scores.scale(day_master, weights.life_stage_weight(stage));
}

/// Step 5: generation/restriction multipliers relative to the day master
pub fn apply_relations(scores: &mut ElementScores, day_master: Element, weights: &ScoringWeights) {
    let rel = &weights.relation;
    for element in Element::ALL {
        let factor = match Relation::of(element, day_master) {
            Relation::Same => rel.same,
            Relation::Generating => rel.generating,
            Relation::Generated => rel.generated,
            Relation::Restricting => rel.restricting,
            Relation::Restricted => rel.restricted,
        };
        scores.scale(element, factor);
    }
}

/// Step 6: bonus for each stem pair fully present among the pillar stems
pub fn apply_stem_combinations(
    scores: &mut ElementScores,
    stems: &[Stem],
    weights: &ScoringWeights,
) -> Vec<MatchedCombination> {
    let matched = matched_stem_combinations(stems);
    for combo in &matched {
        scores.scale(combo.element, weights.stem_combination_bonus);
    }
    matched
}

/// Step 7: bonus for each branch pair fully present among the pillar branches
pub fn apply_branch_combinations(
    scores: &mut ElementScores,
    branches: &[Branch],
    weights: &ScoringWeights,
) -> Vec<MatchedCombination> {
    let matched = matched_branch_combinations(branches);
    for combo in &matched {
        scores.scale(combo.element, weights.branch_combination_bonus);
    }
    matched
}
