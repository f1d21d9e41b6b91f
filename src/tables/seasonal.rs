//! Seasonal dominance (旺相休囚死)
//!
//! The month branch's element rules the season. Every element takes a state by
//! its generation-cycle distance from that seasonal element.

use serde::{Deserialize, Serialize};

use super::ganzhi::Branch;
use crate::element::Element;

/// Five-state seasonal ladder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeasonalState {
    /// 旺: same element as the season
    Dominant,
    /// 相: generated by the season
    Rising,
    /// 休: generates the season
    Resting,
    /// 囚: restricts the season
    Constrained,
    /// 死: restricted by the season
    Depleted,
}

impl SeasonalState {
    /// State of `element` while `seasonal` rules
    pub fn of(element: Element, seasonal: Element) -> SeasonalState {
        match element.cycle_distance(seasonal) {
            0 => SeasonalState::Dominant,
            1 => SeasonalState::Rising,
            2 => SeasonalState::Depleted,
            3 => SeasonalState::Constrained,
            _ => SeasonalState::Resting,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SeasonalState::Dominant => "旺",
            SeasonalState::Rising => "相",
            SeasonalState::Resting => "休",
            SeasonalState::Constrained => "囚",
            SeasonalState::Depleted => "死",
        }
    }
}

/// Season named after the ruling element of the month branch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    Spring,
    Summer,
    /// Earth months 辰未戌丑 (四季土)
    LateSummer,
    Autumn,
    Winter,
}

impl Season {
    pub const ALL: [Season; 5] = [
        Season::Spring,
        Season::Summer,
        Season::LateSummer,
        Season::Autumn,
        Season::Winter,
    ];

    pub fn from_element(element: Element) -> Season {
        match element {
            Element::Wood => Season::Spring,
            Element::Fire => Season::Summer,
            Element::Earth => Season::LateSummer,
            Element::Metal => Season::Autumn,
            Element::Water => Season::Winter,
        }
    }

    pub fn from_month_branch(branch: Branch) -> Season {
        Self::from_element(branch.element())
    }

    /// Element that rules this season
    pub fn element(self) -> Element {
        match self {
            Season::Spring => Element::Wood,
            Season::Summer => Element::Fire,
            Season::LateSummer => Element::Earth,
            Season::Autumn => Element::Metal,
            Season::Winter => Element::Water,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Season::Spring => "春",
            Season::Summer => "夏",
            Season::LateSummer => "长夏",
            Season::Autumn => "秋",
            Season::Winter => "冬",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ladder_in_spring() {
        let s = Element::Wood;
        assert_eq!(SeasonalState::of(Element::Wood, s), SeasonalState::Dominant);
        assert_eq!(SeasonalState::of(Element::Fire, s), SeasonalState::Rising);
        assert_eq!(SeasonalState::of(Element::Water, s), SeasonalState::Resting);
        assert_eq!(SeasonalState::of(Element::Metal, s), SeasonalState::Constrained);
        assert_eq!(SeasonalState::of(Element::Earth, s), SeasonalState::Depleted);
    }

    #[test]
    fn test_month_branch_season() {
        assert_eq!(Season::from_month_branch(Branch::Zi), Season::Winter);
        assert_eq!(Season::from_month_branch(Branch::Chen), Season::LateSummer);
        assert_eq!(Season::from_month_branch(Branch::You), Season::Autumn);
        for season in Season::ALL {
            assert_eq!(Season::from_element(season.element()), season);
        }
    }
}
