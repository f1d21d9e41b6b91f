//! Steps 1-2: base and hidden-stem accumulation

use crate::chart::Chart;
use crate::config::ScoringWeights;
use crate::element::ElementScores;
use crate::tables::hidden_stems;

/// Step 1: fixed weight per pillar stem and per pillar branch
pub fn accumulate_base(chart: &Chart, weights: &ScoringWeights, scores: &mut ElementScores) {
    for pillar in chart.pillars() {
        scores.add(pillar.stem.element(), weights.stem_weight);
        scores.add(pillar.branch.element(), weights.branch_weight);
    }
}

/// Step 2: hidden-stem base weight × table weight, for every hidden stem
pub fn accumulate_hidden_stems(
    chart: &Chart,
    weights: &ScoringWeights,
    scores: &mut ElementScores,
) {
    for branch in chart.branches() {
        for hidden in hidden_stems(branch) {
            scores.add(hidden.stem.element(), weights.hidden_stem_weight * hidden.weight);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{build_chart, BirthInput};
    use crate::element::Element;
    use approx::assert_relative_eq;

    #[test]
    fn test_base_totals() {
        let chart = build_chart(&BirthInput::new(1990, 10, 25, 14)).unwrap();
        let mut scores = ElementScores::default();
        accumulate_base(&chart, &ScoringWeights::default(), &mut scores);
        // 4 stems × 10 + 4 branches × 8
        assert_relative_eq!(scores.total(), 72.0);
        // 庚午 甲子 癸丑 己未: metal 10, fire 8, wood 10, water 10+8, earth 8+10+8
        assert_relative_eq!(scores.get(Element::Earth), 26.0);
        assert_relative_eq!(scores.get(Element::Water), 18.0);
    }

    #[test]
    fn test_hidden_stems_for_reference_chart() {
        let chart = build_chart(&BirthInput::new(1990, 10, 25, 14)).unwrap();
        let mut scores = ElementScores::default();
        accumulate_hidden_stems(&chart, &ScoringWeights::default(), &mut scores);
        // 午: 丁7 己3; 子: 癸10; 丑: 己6 癸3 辛1; 未: 己6 丁3 乙1
        assert_relative_eq!(scores.get(Element::Fire), 10.0, epsilon = 1e-9);
        assert_relative_eq!(scores.get(Element::Earth), 15.0, epsilon = 1e-9);
        assert_relative_eq!(scores.get(Element::Water), 13.0, epsilon = 1e-9);
        assert_relative_eq!(scores.get(Element::Metal), 1.0, epsilon = 1e-9);
        assert_relative_eq!(scores.get(Element::Wood), 1.0, epsilon = 1e-9);
    }
}
