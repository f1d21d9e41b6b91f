//! Hidden stems (藏干) carried by each branch
//!
//! Weights are fractional shares in (0, 1]; they need not sum to 1
//! (午 and 亥 carry two stems at 0.7 / 0.3).

use super::ganzhi::{Branch, Stem};

/// A stem latently present in a branch
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HiddenStem {
    pub stem: Stem,
    pub weight: f64,
}

const fn hs(stem: Stem, weight: f64) -> HiddenStem {
    HiddenStem { stem, weight }
}

// Indexed by Branch::index()
static HIDDEN_STEMS: [&[HiddenStem]; 12] = [
    &[hs(Stem::Gui, 1.0)],                                           // 子
    &[hs(Stem::Ji, 0.6), hs(Stem::Gui, 0.3), hs(Stem::Xin, 0.1)],    // 丑
    &[hs(Stem::Jia, 0.6), hs(Stem::Bing, 0.3), hs(Stem::Wu, 0.1)],   // 寅
    &[hs(Stem::Yi, 1.0)],                                            // 卯
    &[hs(Stem::Wu, 0.6), hs(Stem::Yi, 0.3), hs(Stem::Gui, 0.1)],     // 辰
    &[hs(Stem::Bing, 0.6), hs(Stem::Wu, 0.3), hs(Stem::Geng, 0.1)],  // 巳
    &[hs(Stem::Ding, 0.7), hs(Stem::Ji, 0.3)],                       // 午
    &[hs(Stem::Ji, 0.6), hs(Stem::Ding, 0.3), hs(Stem::Yi, 0.1)],    // 未
    &[hs(Stem::Geng, 0.6), hs(Stem::Ren, 0.3), hs(Stem::Wu, 0.1)],   // 申
    &[hs(Stem::Xin, 1.0)],                                           // 酉
    &[hs(Stem::Wu, 0.6), hs(Stem::Xin, 0.3), hs(Stem::Ding, 0.1)],   // 戌
    &[hs(Stem::Ren, 0.7), hs(Stem::Jia, 0.3)],                       // 亥
];

/// Ordered hidden stems of a branch (main qi first)
pub fn hidden_stems(branch: Branch) -> &'static [HiddenStem] {
    HIDDEN_STEMS[branch.index()]
}
