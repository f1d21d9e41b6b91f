//! Stem five-combinations (天干五合) and branch six-harmonies (地支六合)
//!
//! Each unordered pair resolves to one element.

use serde::{Deserialize, Serialize};

use super::ganzhi::{Branch, Stem};
use crate::element::Element;

/// 甲己合土、乙庚合金、丙辛合水、丁壬合木、戊癸合火
pub const STEM_COMBINATIONS: [(Stem, Stem, Element); 5] = [
    (Stem::Jia, Stem::Ji, Element::Earth),
    (Stem::Yi, Stem::Geng, Element::Metal),
    (Stem::Bing, Stem::Xin, Element::Water),
    (Stem::Ding, Stem::Ren, Element::Wood),
    (Stem::Wu, Stem::Gui, Element::Fire),
];

/// 子丑合土、寅亥合木、卯戌合火、辰酉合金、巳申合水、午未合土
pub const BRANCH_COMBINATIONS: [(Branch, Branch, Element); 6] = [
    (Branch::Zi, Branch::Chou, Element::Earth),
    (Branch::Yin, Branch::Hai, Element::Wood),
    (Branch::Mao, Branch::Xu, Element::Fire),
    (Branch::Chen, Branch::You, Element::Metal),
    (Branch::Si, Branch::Shen, Element::Water),
    (Branch::Wu, Branch::Wei, Element::Earth),
];

/// A combination found in a chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchedCombination {
    /// e.g. "甲己"
    pub pair: String,
    pub element: Element,
}

/// Stem pairs whose both members appear among `stems`
pub fn matched_stem_combinations(stems: &[Stem]) -> Vec<MatchedCombination> {
    STEM_COMBINATIONS
        .iter()
        .filter(|(a, b, _)| stems.contains(a) && stems.contains(b))
        .map(|(a, b, element)| MatchedCombination {
            pair: format!("{}{}", a.label(), b.label()),
            element: *element,
        })
        .collect()
}

/// Branch pairs whose both members appear among `branches`
pub fn matched_branch_combinations(branches: &[Branch]) -> Vec<MatchedCombination> {
    BRANCH_COMBINATIONS
        .iter()
        .filter(|(a, b, _)| branches.contains(a) && branches.contains(b))
        .map(|(a, b, element)| MatchedCombination {
            pair: format!("{}{}", a.label(), b.label()),
            element: *element,
        })
        .collect()
}
