//! Twelve life-cycle stages (十二长生)
//!
//! Yang stems advance forward from their 长生 branch, yin stems walk backward.
//! The table below is the expanded result, indexed [stem][branch].

use serde::{Deserialize, Serialize};

use super::ganzhi::{Branch, Stem};

/// Vitality state of a stem in a given branch context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LifeStage {
    ChangSheng, // 长生
    MuYu,       // 沐浴
    GuanDai,    // 冠带
    LinGuan,    // 临官
    DiWang,     // 帝旺
    Shuai,      // 衰
    Bing,       // 病
    Si,         // 死
    Mu,         // 墓
    Jue,        // 绝
    Tai,        // 胎
    Yang,       // 养
}

impl LifeStage {
    pub const ALL: [LifeStage; 12] = [
        LifeStage::ChangSheng,
        LifeStage::MuYu,
        LifeStage::GuanDai,
        LifeStage::LinGuan,
        LifeStage::DiWang,
        LifeStage::Shuai,
        LifeStage::Bing,
        LifeStage::Si,
        LifeStage::Mu,
        LifeStage::Jue,
        LifeStage::Tai,
        LifeStage::Yang,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            LifeStage::ChangSheng => "长生",
            LifeStage::MuYu => "沐浴",
            LifeStage::GuanDai => "冠带",
            LifeStage::LinGuan => "临官",
            LifeStage::DiWang => "帝旺",
            LifeStage::Shuai => "衰",
            LifeStage::Bing => "病",
            LifeStage::Si => "死",
            LifeStage::Mu => "墓",
            LifeStage::Jue => "绝",
            LifeStage::Tai => "胎",
            LifeStage::Yang => "养",
        }
    }
}

use LifeStage::{
    Bing as BI, ChangSheng as CS, DiWang as DW, GuanDai as GD, Jue as JU, LinGuan as LG,
    Mu as MU, MuYu as MY, Shuai as SH, Si as SI, Tai as TA, Yang as YA,
};

//  子   丑   寅   卯   辰   巳   午   未   申   酉   戌   亥
static STAGE_TABLE: [[LifeStage; 12]; 10] = [
    [MY, GD, LG, DW, SH, BI, SI, MU, JU, TA, YA, CS], // 甲
    [BI, SH, DW, LG, GD, MY, CS, YA, TA, JU, MU, SI], // 乙
    [TA, YA, CS, MY, GD, LG, DW, SH, BI, SI, MU, JU], // 丙
    [JU, MU, SI, BI, SH, DW, LG, GD, MY, CS, YA, TA], // 丁
    [TA, YA, CS, MY, GD, LG, DW, SH, BI, SI, MU, JU], // 戊
    [JU, MU, SI, BI, SH, DW, LG, GD, MY, CS, YA, TA], // 己
    [SI, MU, JU, TA, YA, CS, MY, GD, LG, DW, SH, BI], // 庚
    [CS, YA, TA, JU, MU, SI, BI, SH, DW, LG, GD, MY], // 辛
    [DW, SH, BI, SI, MU, JU, TA, YA, CS, MY, GD, LG], // 壬
    [LG, GD, MY, CS, YA, TA, JU, MU, SI, BI, SH, DW], // 癸
];

/// Life stage of `stem` when the context branch is `branch`
pub fn life_stage(stem: Stem, branch: Branch) -> LifeStage {
    STAGE_TABLE[stem.index()][branch.index()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lu_positions() {
        // 甲禄在寅, 癸禄在子, 庚禄在申
        assert_eq!(life_stage(Stem::Jia, Branch::Yin), LifeStage::LinGuan);
        assert_eq!(life_stage(Stem::Gui, Branch::Zi), LifeStage::LinGuan);
        assert_eq!(life_stage(Stem::Geng, Branch::Shen), LifeStage::LinGuan);
    }

    #[test]
    fn test_each_row_is_a_permutation() {
        for stem in Stem::ALL {
            let mut seen = [false; 12];
            for branch in Branch::ALL {
                seen[life_stage(stem, branch).index()] = true;
            }
            assert!(seen.iter().all(|s| *s), "{stem}");
        }
    }

    #[test]
    fn test_direction_by_polarity() {
        // 甲 starts at 亥 and moves forward; 乙 starts at 午 and moves backward
        assert_eq!(life_stage(Stem::Jia, Branch::Hai), LifeStage::ChangSheng);
        assert_eq!(life_stage(Stem::Jia, Branch::Zi), LifeStage::MuYu);
        assert_eq!(life_stage(Stem::Yi, Branch::Wu), LifeStage::ChangSheng);
        assert_eq!(life_stage(Stem::Yi, Branch::Si), LifeStage::MuYu);
    }
}
