//! Natal Element Scorer
//!
//! Converts a four-pillar chart into a weighted five-element distribution and
//! a day-master strength verdict. Steps run in a fixed order because steps
//! 3-7 scale the totals accumulated so far:
//!
//! 1. Base stem/branch weights
//! 2. Hidden stems
//! 3. Seasonal dominance ladder
//! 4. Day-master life stage in the month branch
//! 5. Generation/restriction relative to the day master
//! 6. Stem combinations
//! 7. Branch combinations
//! 8. Normalize to percentages
//! 9. Strength verdict on the pre-normalization scores

pub mod accumulation;
pub mod adjustments;
pub mod strength;

pub use adjustments::Relation;
pub use strength::{judge_strength, DayMasterStrength};

use serde::{Deserialize, Serialize};

use crate::chart::Chart;
use crate::config::ScoringWeights;
use crate::element::{Element, ElementPercentages, ElementScores};
use crate::tables::{life_stage, Branch, LifeStage, MatchedCombination, Season, Stem};
use crate::utils::normalize_scores;

use accumulation::{accumulate_base, accumulate_hidden_stems};
use adjustments::{
    apply_branch_combinations, apply_life_stage, apply_relations, apply_seasonal,
    apply_stem_combinations,
};

/// Running scores captured after each step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NatalBreakdown {
    pub after_base: ElementScores,
    pub after_hidden_stems: ElementScores,
    pub after_seasonal: ElementScores,
    pub after_life_stage: ElementScores,
    pub after_relations: ElementScores,
    pub after_stem_combinations: ElementScores,
    pub after_branch_combinations: ElementScores,
    pub stem_combinations: Vec<MatchedCombination>,
    pub branch_combinations: Vec<MatchedCombination>,
}

/// Natal scoring result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NatalProfile {
    pub chart: Chart,
    /// Final pre-normalization scores
    pub scores: ElementScores,
    pub percentages: ElementPercentages,
    pub day_master: Stem,
    pub day_master_element: Element,
    pub month_branch: Branch,
    pub season: Season,
    pub seasonal_element: Element,
    pub day_master_stage: LifeStage,
    pub strength: DayMasterStrength,
    pub breakdown: NatalBreakdown,
}

/// Score a chart with the given weights
pub fn score_natal(chart: &Chart, weights: &ScoringWeights) -> NatalProfile {
    let day_master = chart.day_master();
    let dm_element = day_master.element();
    let month_branch = chart.month_branch();
    let seasonal_element = month_branch.element();

    let mut scores = ElementScores::default();

    accumulate_base(chart, weights, &mut scores);
    let after_base = scores;

    accumulate_hidden_stems(chart, weights, &mut scores);
    let after_hidden_stems = scores;

    apply_seasonal(&mut scores, seasonal_element, weights);
    let after_seasonal = scores;

    let stage = life_stage(day_master, month_branch);
    apply_life_stage(&mut scores, dm_element, stage, weights);
    let after_life_stage = scores;

    apply_relations(&mut scores, dm_element, weights);
    let after_relations = scores;

    let stem_combinations = apply_stem_combinations(&mut scores, &chart.stems(), weights);
    let after_stem_combinations = scores;

    let branch_combinations = apply_branch_combinations(&mut scores, &chart.branches(), weights);
    let after_branch_combinations = scores;

    let percentages = normalize_scores(&scores);
    let strength = judge_strength(&scores, dm_element, seasonal_element, weights);

    tracing::debug!(
        "Natal {}: day master {} ({}) stage {} in {}, strength {:?}, combinations {}/{}",
        chart,
        day_master,
        dm_element,
        stage.label(),
        month_branch,
        strength,
        stem_combinations.len(),
        branch_combinations.len(),
    );

    NatalProfile {
        chart: *chart,
        scores,
        percentages,
        day_master,
        day_master_element: dm_element,
        month_branch,
        season: Season::from_month_branch(month_branch),
        seasonal_element,
        day_master_stage: stage,
        strength,
        breakdown: NatalBreakdown {
            after_base,
            after_hidden_stems,
            after_seasonal,
            after_life_stage,
            after_relations,
            after_stem_combinations,
            after_branch_combinations,
            stem_combinations,
            branch_combinations,
        },
    }
}
