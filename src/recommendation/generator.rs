use super::tables::{
    element_advice, seasonal_advice, seasonal_caution, strength_advice, EVEN_DIET,
    EVEN_EMOTIONAL, EVEN_EXERCISE,
};
use super::types::{Recommendation, RecommendationKey};

fn owned(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|s| s.to_string()).collect()
}

fn combine(first: &[&str], second: &[&str]) -> Vec<String> {
    first.iter().chain(second).map(|s| s.to_string()).collect()
}

/// Table-driven recommendation generator
pub struct RecommendationGenerator;

impl RecommendationGenerator {
    /// Assemble the advice bundle for a selection key
    ///
    /// Diet, exercise and emotional lists combine the dominant element's
    /// "excess" lines with the weakest element's "deficient" lines. An even
    /// distribution gets the general lines instead. Strength lines are added to
    /// exercise; the seasonal list gains a caution when the dominant element
    /// rules the current season.
    pub fn generate(key: RecommendationKey) -> Recommendation {
        let (diet, mut exercise, emotional) = if key.is_even() {
            (owned(EVEN_DIET), owned(EVEN_EXERCISE), owned(EVEN_EMOTIONAL))
        } else {
            let high = element_advice(key.dominant);
            let low = element_advice(key.weakest);
            (
                combine(high.diet_excess, low.diet_deficient),
                combine(high.exercise_excess, low.exercise_deficient),
                combine(high.emotional_excess, low.emotional_deficient),
            )
        };

        if let Some(strength) = key.strength {
            exercise.extend(owned(strength_advice(strength)));
        }

        let mut seasonal = owned(seasonal_advice(key.season));
        if !key.is_even() && key.dominant == key.season.element() {
            seasonal.push(seasonal_caution(key.season));
        }

        Recommendation {
            key,
            summary: Self::summary(&key),
            diet,
            exercise,
            emotional,
            seasonal,
        }
    }

    /// One-line summary, e.g. "水偏旺，火偏弱，身强，时值冬"
    pub fn summary(key: &RecommendationKey) -> String {
        let mut parts = Vec::with_capacity(3);
        if key.is_even() {
            parts.push("五行均衡".to_string());
        } else {
            parts.push(format!("{}偏旺", key.dominant.label()));
            parts.push(format!("{}偏弱", key.weakest.label()));
        }
        if let Some(strength) = key.strength {
            parts.push(strength.label().to_string());
        }
        parts.push(format!("时值{}", key.season.label()));
        parts.join("，")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Element;
    use crate::natal::DayMasterStrength;
    use crate::tables::Season;

    fn key(
        dominant: Element,
        weakest: Element,
        strength: Option<DayMasterStrength>,
    ) -> RecommendationKey {
        RecommendationKey {
            dominant,
            weakest,
            strength,
            season: Season::Winter,
        }
    }

    #[test]
    fn test_deterministic_selection() {
        let k = key(Element::Water, Element::Fire, Some(DayMasterStrength::Strong));
        assert_eq!(RecommendationGenerator::generate(k), RecommendationGenerator::generate(k));
    }

    #[test]
    fn test_summary_line() {
        let k = key(Element::Water, Element::Fire, Some(DayMasterStrength::Strong));
        assert_eq!(RecommendationGenerator::summary(&k), "水偏旺，火偏弱，身强，时值冬");
    }

    #[test]
    fn test_lists_combine_dominant_and_weakest() {
        let rec = RecommendationGenerator::generate(key(Element::Wood, Element::Metal, None));
        assert_eq!(rec.diet.len(), 4);
        assert_eq!(rec.diet[0], element_advice(Element::Wood).diet_excess[0]);
        assert_eq!(rec.diet[2], element_advice(Element::Metal).diet_deficient[0]);
        assert_eq!(rec.exercise.len(), 4);
    }

    #[test]
    fn test_seasonal_caution_when_dominant_rules_season() {
        let water = RecommendationGenerator::generate(key(Element::Water, Element::Fire, None));
        let wood = RecommendationGenerator::generate(key(Element::Wood, Element::Fire, None));
        assert_eq!(water.seasonal.len(), wood.seasonal.len() + 1);
    }

    #[test]
    fn test_even_distribution_uses_general_advice() {
        let rec = RecommendationGenerator::generate(key(Element::Wood, Element::Wood, None));
        assert!(rec.summary.starts_with("五行均衡"));
        assert_eq!(rec.diet, owned(EVEN_DIET));
    }

    #[test]
    fn test_strength_lines_go_to_exercise() {
        let weak = RecommendationGenerator::generate(key(
            Element::Wood,
            Element::Fire,
            Some(DayMasterStrength::Weak),
        ));
        assert_eq!(weak.exercise.len(), 5);
    }
}
