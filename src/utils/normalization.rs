//! Normalization Utilities
//!
//! Shared by the natal and postnatal pipelines: converts raw element scores to
//! a one-decimal percentage distribution and ranks elements with the fixed
//! priority tie-break (wood, fire, earth, metal, water).

use crate::element::{Element, ElementMap, ElementPercentages, ElementScores};

/// Round to one decimal place
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Percentage share of each element, rounded to one decimal
///
/// A zero (or non-positive) total yields the even 20.0 split.
pub fn normalize_scores(scores: &ElementScores) -> ElementPercentages {
    let total = scores.total();
    if total <= 0.0 || !total.is_finite() {
        return ElementPercentages::even();
    }
    ElementPercentages(scores.map(|_, v| round1(v / total * 100.0)))
}

/// Elements ordered by value descending; equal values keep priority order
pub fn rank_elements(values: &ElementMap<f64>) -> [Element; 5] {
    let mut ranked = Element::ALL;
    // Stable sort keeps Element::ALL order among ties
    ranked.sort_by(|a, b| values.get(*b).total_cmp(&values.get(*a)));
    ranked
}

/// Highest-valued element, earliest in priority order on ties
pub fn dominant_element(values: &ElementMap<f64>) -> Element {
    let mut best = Element::Wood;
    for (element, value) in values.iter() {
        if value > values.get(best) {
            best = element;
        }
    }
    best
}

/// Lowest-valued element, earliest in priority order on ties
pub fn weakest_element(values: &ElementMap<f64>) -> Element {
    let mut worst = Element::Wood;
    for (element, value) in values.iter() {
        if value < values.get(worst) {
            worst = element;
        }
    }
    worst
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_total_is_even() {
        let pct = normalize_scores(&ElementScores::default());
        for (_, v) in pct.iter() {
            assert_eq!(v, 20.0);
        }
    }

    #[test]
    fn test_percentages_round_to_one_decimal() {
        let scores = ElementMap {
            wood: 1.0,
            fire: 1.0,
            earth: 1.0,
            metal: 0.0,
            water: 0.0,
        };
        let pct = normalize_scores(&scores);
        assert_relative_eq!(pct.get(Element::Wood), 33.3);
        assert_relative_eq!(pct.get(Element::Metal), 0.0);
        assert!((pct.sum() - 100.0).abs() <= 0.2 + 1e-9);
    }

    #[test]
    fn test_tie_break_prefers_priority_order() {
        let values = ElementMap {
            wood: 10.0,
            fire: 30.0,
            earth: 10.0,
            metal: 30.0,
            water: 20.0,
        };
        assert_eq!(dominant_element(&values), Element::Fire);
        assert_eq!(weakest_element(&values), Element::Wood);
        assert_eq!(
            rank_elements(&values),
            [Element::Fire, Element::Metal, Element::Water, Element::Wood, Element::Earth]
        );
    }
}
