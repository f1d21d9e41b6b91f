//! Static lookup tables
//!
//! All tables are immutable data keyed by closed enums:
//! - `ganzhi`: stems, branches and their elements
//! - `hidden_stems`: branch → weighted hidden stems
//! - `twelve_stages`: per-stem twelve life-cycle stages
//! - `seasonal`: seasonal dominance ladder and season labels
//! - `combinations`: stem and branch pair combinations

pub mod ganzhi;
pub mod hidden_stems;
pub mod twelve_stages;
pub mod seasonal;
pub mod combinations;

pub use ganzhi::{Branch, Stem};
pub use hidden_stems::{hidden_stems, HiddenStem};
pub use twelve_stages::{life_stage, LifeStage};
pub use seasonal::{Season, SeasonalState};
pub use combinations::{
    matched_branch_combinations, matched_stem_combinations, MatchedCombination,
    BRANCH_COMBINATIONS, STEM_COMBINATIONS,
};

/// Starting hour stem (子时) for each day stem (五鼠遁)
///
/// 甲己→甲, 乙庚→丙, 丙辛→戊, 丁壬→庚, 戊癸→壬
pub const HOUR_STEM_START: [Stem; 10] = [
    Stem::Jia,  // 甲
    Stem::Bing, // 乙
    Stem::Wu,   // 丙
    Stem::Geng, // 丁
    Stem::Ren,  // 戊
    Stem::Jia,  // 己
    Stem::Bing, // 庚
    Stem::Wu,   // 辛
    Stem::Geng, // 壬
    Stem::Ren,  // 癸
];
