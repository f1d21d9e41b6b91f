//! Balance & Classification
//!
//! Works on either layer: takes the raw scores and their percentage vector.

use serde::{Deserialize, Serialize};

use crate::element::{Element, ElementPercentages, ElementScores};
use crate::utils::{rank_elements, weakest_element};

/// Primary/secondary constitutional type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constitution {
    pub primary: Element,
    /// Second-ranked element, absent when its raw score is zero
    pub secondary: Option<Element>,
    /// Primary element's raw score sits below the five-element mean
    pub primary_deficient: bool,
}

impl Constitution {
    /// e.g. "火型" or "火土型"
    pub fn label(&self) -> String {
        match self.secondary {
            Some(secondary) => format!("{}{}型", self.primary.label(), secondary.label()),
            None => format!("{}型", self.primary.label()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// 0-100, 100 only for a perfectly even distribution
    pub balance_score: u8,
    /// Max minus min percentage
    pub spread: f64,
    pub constitution: Constitution,
    pub dominant: Element,
    pub weakest: Element,
}

/// max(0, 100 − 10 × spread), rounded
pub fn balance_score(percentages: &ElementPercentages) -> u8 {
    let raw = 100.0 - 10.0 * percentages.spread();
    raw.round().clamp(0.0, 100.0) as u8
}

pub fn constitution(scores: &ElementScores, percentages: &ElementPercentages) -> Constitution {
    let ranked = rank_elements(percentages.as_map());
    let primary = ranked[0];
    let secondary = Some(ranked[1]).filter(|e| scores.get(*e) != 0.0);

    Constitution {
        primary,
        secondary,
        primary_deficient: scores.get(primary) < scores.mean(),
    }
}

/// Balance score plus constitution for one layer
pub fn classify(scores: &ElementScores, percentages: &ElementPercentages) -> Classification {
    let constitution = constitution(scores, percentages);
    Classification {
        balance_score: balance_score(percentages),
        spread: percentages.spread(),
        constitution,
        dominant: constitution.primary,
        weakest: weakest_element(percentages.as_map()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ElementMap;
    use crate::utils::normalize_scores;

    fn pct(wood: f64, fire: f64, earth: f64, metal: f64, water: f64) -> ElementPercentages {
        ElementPercentages(ElementMap {
            wood,
            fire,
            earth,
            metal,
            water,
        })
    }

    #[test]
    fn test_even_distribution_scores_100() {
        assert_eq!(balance_score(&ElementPercentages::even()), 100);
    }

    #[test]
    fn test_balance_score_bands() {
        assert_eq!(balance_score(&pct(20.5, 19.5, 20.0, 20.0, 20.0)), 90);
        assert_eq!(balance_score(&pct(20.1, 19.9, 20.0, 20.0, 20.0)), 98);
        assert_eq!(balance_score(&pct(25.0, 15.0, 20.0, 20.0, 20.0)), 0);
        assert_eq!(balance_score(&pct(60.0, 10.0, 10.0, 10.0, 10.0)), 0);
    }

    #[test]
    fn test_balance_score_is_monotonic() {
        let mut last = 100;
        for step in 0..=60 {
            let d = step as f64 * 0.1;
            let score = balance_score(&pct(20.0 + d, 20.0 - d, 20.0, 20.0, 20.0));
            assert!(score <= last);
            last = score;
        }
        assert_eq!(last, 0);
    }

    #[test]
    fn test_secondary_absent_when_raw_score_zero() {
        let scores = ElementMap {
            wood: 0.0,
            fire: 30.0,
            earth: 0.0,
            metal: 0.0,
            water: 0.0,
        };
        let c = constitution(&scores, &normalize_scores(&scores));
        assert_eq!(c.primary, Element::Fire);
        assert_eq!(c.secondary, None);
        assert_eq!(c.label(), "火型");
    }

    #[test]
    fn test_secondary_and_label() {
        let scores = ElementMap {
            wood: 5.0,
            fire: 30.0,
            earth: 20.0,
            metal: 1.0,
            water: 2.0,
        };
        let result = classify(&scores, &normalize_scores(&scores));
        assert_eq!(result.constitution.secondary, Some(Element::Earth));
        assert_eq!(result.constitution.label(), "火土型");
        assert!(!result.constitution.primary_deficient);
        assert_eq!(result.weakest, Element::Metal);
    }
}
