//! Step 9: day-master strength verdict

use serde::{Deserialize, Serialize};

use crate::config::ScoringWeights;
use crate::element::{Element, ElementScores};

/// Strong / weak / balanced day master
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayMasterStrength {
    Strong,
    Weak,
    Balanced,
}

impl DayMasterStrength {
    pub fn label(self) -> &'static str {
        match self {
            DayMasterStrength::Strong => "身强",
            DayMasterStrength::Weak => "身弱",
            DayMasterStrength::Balanced => "中和",
        }
    }
}

/// Compare the day-master score (pre-normalization) with the mean of all five
///
/// In season and above `strong_threshold` × mean → strong; out of season and
/// below `weak_threshold` × mean → weak; everything else is balanced.
pub fn judge_strength(
    scores: &ElementScores,
    day_master: Element,
    seasonal: Element,
    weights: &ScoringWeights,
) -> DayMasterStrength {
    let mean = scores.mean();
    let own = scores.get(day_master);
    let in_season = day_master == seasonal;

    if in_season && own > mean * weights.strong_threshold {
        DayMasterStrength::Strong
    } else if !in_season && own < mean * weights.weak_threshold {
        DayMasterStrength::Weak
    } else {
        DayMasterStrength::Balanced
    }
}
