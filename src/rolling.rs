//! Rolling aggregation over many days of observations
//!
//! Each day is an independent postnatal call, run in parallel with Rayon. The
//! aggregate is computed afterwards; the engine itself has no batch notion.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::ScoringWeights;
use crate::element::{Element, ElementMap, ElementPercentages, ElementScores};
use crate::error::EngineResult;
use crate::postnatal::{score_observation, DailyObservation, PostnatalProfile};
use crate::utils::{dominant_element, normalize_scores};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollingSummary {
    pub days: usize,
    /// Mean of the daily percentage vectors, renormalized to 100
    pub mean_percentages: ElementPercentages,
    /// How many days each element was dominant
    pub dominant_counts: ElementMap<usize>,
    /// Dominant element of the mean vector
    pub dominant: Element,
}

/// Score every observation in parallel and aggregate
///
/// Any invalid day fails the whole batch.
pub fn summarize(
    observations: &[DailyObservation],
    weights: &ScoringWeights,
) -> EngineResult<RollingSummary> {
    let profiles = observations
        .par_iter()
        .map(|obs| score_observation(obs, weights))
        .collect::<EngineResult<Vec<_>>>()?;

    Ok(summarize_profiles(&profiles))
}

/// Aggregate already-computed profiles; empty input gives the even split
pub fn summarize_profiles(profiles: &[PostnatalProfile]) -> RollingSummary {
    let days = profiles.len();
    if days == 0 {
        return RollingSummary {
            days,
            mean_percentages: ElementPercentages::even(),
            dominant_counts: ElementMap::splat(0),
            dominant: Element::Wood,
        };
    }

    let mut sums = ElementScores::splat(0.0);
    let mut dominant_counts = ElementMap::splat(0usize);
    for profile in profiles {
        for (element, value) in profile.percentages.iter() {
            sums.add(element, value);
        }
        *dominant_counts.get_mut(profile.dominant) += 1;
    }

    // Sums are proportional to the means
    let mean_percentages = normalize_scores(&sums);
    let dominant = dominant_element(mean_percentages.as_map());

    tracing::debug!("Rolling summary over {} days: dominant {}", days, dominant);

    RollingSummary {
        days,
        mean_percentages,
        dominant_counts,
        dominant,
    }
}
