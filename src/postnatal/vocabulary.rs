//! Closed observation vocabulary
//!
//! Every recognized observation value is an enum variant, and each variant's
//! tags come from an exhaustive `match`. Adding a value means adding a variant,
//! which the compiler forces through `tags()`. Unrecognized text parses to
//! `None` and produces no tags.

use serde::{Deserialize, Serialize};
use smallvec::smallvec;

use super::tags::{SymptomTag, TagCategory, TagList};
use crate::element::Element;

use Element::{Earth, Fire, Metal, Water, Wood};
use TagCategory::{Emotion, Lifestyle, Observation, Physical};

fn tag(element: Element, category: TagCategory, label: &str, severity: i32) -> SymptomTag {
    SymptomTag::new(element, category, label, severity)
}

// ============================================================================
// Sleep
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SleepDuration {
    UnderFive,
    FiveToSix,
    SixToSeven,
    SevenToEight,
    OverEight,
}

impl SleepDuration {
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim() {
            "少于5小时" | "<5h" => Some(SleepDuration::UnderFive),
            "5-6小时" | "5-6h" => Some(SleepDuration::FiveToSix),
            "6-7小时" | "6-7h" => Some(SleepDuration::SixToSeven),
            "7-8小时" | "7-8h" => Some(SleepDuration::SevenToEight),
            "8小时以上" | ">8h" => Some(SleepDuration::OverEight),
            _ => None,
        }
    }

    pub fn tags(self) -> TagList {
        match self {
            SleepDuration::UnderFive => smallvec![
                tag(Water, Lifestyle, "睡眠严重不足", 6),
                tag(Fire, Lifestyle, "熬夜耗阴", 4),
            ],
            SleepDuration::FiveToSix => smallvec![tag(Fire, Lifestyle, "睡眠偏少", 3)],
            SleepDuration::SixToSeven => smallvec![],
            SleepDuration::SevenToEight => smallvec![tag(Water, Lifestyle, "睡眠充足", -3)],
            SleepDuration::OverEight => smallvec![tag(Earth, Lifestyle, "嗜睡多眠", 4)],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SleepFeeling {
    Refreshed,
    Okay,
    Groggy,
    RestlessDreams,
    HardToFallAsleep,
    NightWaking,
}

impl SleepFeeling {
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim() {
            "神清气爽" | "refreshed" => Some(SleepFeeling::Refreshed),
            "还行" | "一般" | "okay" => Some(SleepFeeling::Okay),
            "昏昏沉沉" | "groggy" => Some(SleepFeeling::Groggy),
            "多梦易醒" | "restless" => Some(SleepFeeling::RestlessDreams),
            "难以入睡" | "insomnia" => Some(SleepFeeling::HardToFallAsleep),
            "半夜醒来" | "night_waking" => Some(SleepFeeling::NightWaking),
            _ => None,
        }
    }

    pub fn tags(self) -> TagList {
        match self {
            SleepFeeling::Refreshed => smallvec![
                tag(Fire, Physical, "睡后神清", -3),
                tag(Water, Physical, "精力恢复", -2),
            ],
            SleepFeeling::Okay => smallvec![],
            SleepFeeling::Groggy => smallvec![tag(Fire, Physical, "昏沉乏神", 6)],
            SleepFeeling::RestlessDreams => smallvec![
                tag(Fire, Physical, "多梦易醒", 5),
                tag(Wood, Physical, "魂不守舍", 2),
            ],
            SleepFeeling::HardToFallAsleep => smallvec![
                tag(Wood, Physical, "入睡困难", 4),
                tag(Fire, Physical, "心神不宁", 3),
            ],
            SleepFeeling::NightWaking => smallvec![tag(Wood, Physical, "丑时易醒", 5)],
        }
    }
}

// ============================================================================
// Mood
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mood {
    Happy,
    Calm,
    Angry,
    Irritable,
    Anxious,
    Worried,
    Sad,
    Fearful,
    Exhausted,
    Overexcited,
    Neutral,
}

impl Mood {
    /// Accepts a Chinese label or an emoji
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim() {
            "开心" | "😊" | "😄" => Some(Mood::Happy),
            "平静" | "😌" => Some(Mood::Calm),
            "生气" | "愤怒" | "😡" | "😠" => Some(Mood::Angry),
            "烦躁" | "😤" => Some(Mood::Irritable),
            "焦虑" | "😰" => Some(Mood::Anxious),
            "忧虑" | "思虑" | "😟" | "🤔" => Some(Mood::Worried),
            "悲伤" | "难过" | "😢" | "😭" => Some(Mood::Sad),
            "恐惧" | "害怕" | "😨" | "😱" => Some(Mood::Fearful),
            "疲惫" | "😩" | "😫" => Some(Mood::Exhausted),
            "兴奋" | "🤩" => Some(Mood::Overexcited),
            "一般" | "😐" => Some(Mood::Neutral),
            _ => None,
        }
    }

    /// Tags at the reference intensity (4-7)
    pub fn tags(self) -> TagList {
        match self {
            Mood::Happy => smallvec![
                tag(Fire, Emotion, "心情愉悦", -3),
                tag(Wood, Emotion, "气机舒畅", -2),
            ],
            Mood::Calm => smallvec![
                tag(Wood, Emotion, "情绪平和", -2),
                tag(Earth, Emotion, "心思安定", -2),
            ],
            Mood::Angry => smallvec![tag(Wood, Emotion, "怒伤肝", 6)],
            Mood::Irritable => smallvec![
                tag(Wood, Emotion, "肝气郁结", 4),
                tag(Fire, Emotion, "心烦", 2),
            ],
            Mood::Anxious => smallvec![
                tag(Fire, Emotion, "心神不安", 4),
                tag(Earth, Emotion, "思虑过度", 2),
            ],
            Mood::Worried => smallvec![tag(Earth, Emotion, "思伤脾", 5)],
            Mood::Sad => smallvec![tag(Metal, Emotion, "悲伤肺", 6)],
            Mood::Fearful => smallvec![tag(Water, Emotion, "恐伤肾", 6)],
            Mood::Exhausted => smallvec![
                tag(Earth, Emotion, "气虚乏力", 3),
                tag(Water, Emotion, "精气不足", 3),
            ],
            Mood::Overexcited => smallvec![tag(Fire, Emotion, "喜伤心", 4)],
            Mood::Neutral => smallvec![],
        }
    }
}

/// Scale a reference severity by a 1-10 intensity
///
/// 1-3 halves it (keeping at least magnitude 1), 4-7 keeps it, 8-10 applies ×3/2.
pub fn scale_by_intensity(severity: i32, intensity: u8) -> i32 {
    match intensity {
        0..=3 => {
            let halved = severity / 2;
            if halved == 0 && severity != 0 {
                severity.signum()
            } else {
                halved
            }
        }
        4..=7 => severity,
        _ => severity * 3 / 2,
    }
}

// ============================================================================
// Meals
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MealFeeling {
    GoodAppetite,
    Normal,
    PoorAppetite,
    Bloating,
    AcidReflux,
    BitterMouth,
    QuickHunger,
    ColdSensitive,
}

impl MealFeeling {
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim() {
            "吃得很香" | "胃口好" => Some(MealFeeling::GoodAppetite),
            "正常" => Some(MealFeeling::Normal),
            "没胃口" => Some(MealFeeling::PoorAppetite),
            "吃完胀气" | "腹胀" => Some(MealFeeling::Bloating),
            "反酸烧心" => Some(MealFeeling::AcidReflux),
            "口干口苦" => Some(MealFeeling::BitterMouth),
            "容易饿" => Some(MealFeeling::QuickHunger),
            "吃冷的不舒服" => Some(MealFeeling::ColdSensitive),
            _ => None,
        }
    }

    pub fn tags(self) -> TagList {
        match self {
            MealFeeling::GoodAppetite => smallvec![tag(Earth, Lifestyle, "脾胃健运", -4)],
            MealFeeling::Normal => smallvec![],
            MealFeeling::PoorAppetite => smallvec![tag(Earth, Physical, "纳呆", 5)],
            MealFeeling::Bloating => smallvec![
                tag(Earth, Physical, "食后腹胀", 5),
                tag(Wood, Physical, "肝气犯脾", 2),
            ],
            MealFeeling::AcidReflux => smallvec![
                tag(Wood, Physical, "肝气犯胃", 4),
                tag(Earth, Physical, "胃失和降", 2),
            ],
            MealFeeling::BitterMouth => smallvec![
                tag(Fire, Observation, "口干", 4),
                tag(Wood, Observation, "口苦", 2),
            ],
            MealFeeling::QuickHunger => smallvec![
                tag(Earth, Physical, "消谷善饥", 3),
                tag(Fire, Physical, "胃火", 2),
            ],
            MealFeeling::ColdSensitive => smallvec![
                tag(Water, Physical, "阳气不足", 3),
                tag(Earth, Physical, "脾胃虚寒", 3),
            ],
        }
    }
}

// ============================================================================
// Body regions
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyRegion {
    Head,
    Eyes,
    Flanks,
    Chest,
    Tongue,
    Stomach,
    Abdomen,
    Limbs,
    Throat,
    Nose,
    Skin,
    Lungs,
    LowerBack,
    Knees,
    Ears,
    Bones,
}

impl BodyRegion {
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim() {
            "头" | "头部" => Some(BodyRegion::Head),
            "眼睛" => Some(BodyRegion::Eyes),
            "胁肋" | "两胁" => Some(BodyRegion::Flanks),
            "胸口" | "心口" => Some(BodyRegion::Chest),
            "舌" | "口腔" => Some(BodyRegion::Tongue),
            "胃" | "胃部" => Some(BodyRegion::Stomach),
            "腹部" | "肚子" => Some(BodyRegion::Abdomen),
            "肌肉" | "四肢" => Some(BodyRegion::Limbs),
            "咽喉" | "喉咙" => Some(BodyRegion::Throat),
            "鼻" | "鼻子" => Some(BodyRegion::Nose),
            "皮肤" => Some(BodyRegion::Skin),
            "肺" | "肺部" => Some(BodyRegion::Lungs),
            "腰" | "腰部" => Some(BodyRegion::LowerBack),
            "膝" | "膝盖" => Some(BodyRegion::Knees),
            "耳" | "耳朵" => Some(BodyRegion::Ears),
            "骨" | "关节" => Some(BodyRegion::Bones),
            _ => None,
        }
    }

    /// Element and tag label for discomfort in this region
    pub fn mapping(self) -> (Element, &'static str) {
        match self {
            BodyRegion::Head => (Wood, "头痛头胀"),
            BodyRegion::Eyes => (Wood, "目涩"),
            BodyRegion::Flanks => (Wood, "胁肋胀痛"),
            BodyRegion::Chest => (Fire, "胸闷心悸"),
            BodyRegion::Tongue => (Fire, "口舌生疮"),
            BodyRegion::Stomach => (Earth, "胃脘不适"),
            BodyRegion::Abdomen => (Earth, "腹痛腹胀"),
            BodyRegion::Limbs => (Earth, "肢体困重"),
            BodyRegion::Throat => (Metal, "咽喉不利"),
            BodyRegion::Nose => (Metal, "鼻塞"),
            BodyRegion::Skin => (Metal, "皮肤干燥"),
            BodyRegion::Lungs => (Metal, "咳嗽气短"),
            BodyRegion::LowerBack => (Water, "腰酸"),
            BodyRegion::Knees => (Water, "膝软"),
            BodyRegion::Ears => (Water, "耳鸣"),
            BodyRegion::Bones => (Water, "骨节酸痛"),
        }
    }

    /// Single physical tag carrying the reported severity
    pub fn tag(self, severity: u8) -> SymptomTag {
        let (element, label) = self.mapping();
        tag(element, Physical, label, severity as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groggy_is_fire_six() {
        let tags = SleepFeeling::parse("昏昏沉沉").unwrap().tags();
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].element, Fire);
        assert_eq!(tags[0].severity, 6);
    }

    #[test]
    fn test_unrecognized_values_parse_to_none() {
        assert!(SleepFeeling::parse("睡得像个婴儿").is_none());
        assert!(Mood::parse("🦄").is_none());
        assert!(MealFeeling::parse("").is_none());
        assert!(BodyRegion::parse("尾巴").is_none());
    }

    #[test]
    fn test_mood_accepts_emoji_and_label() {
        assert_eq!(Mood::parse("😡"), Some(Mood::Angry));
        assert_eq!(Mood::parse(" 愤怒 "), Some(Mood::Angry));
        assert_eq!(Mood::parse("😭"), Some(Mood::Sad));
    }

    #[test]
    fn test_intensity_scaling() {
        assert_eq!(scale_by_intensity(6, 2), 3);
        assert_eq!(scale_by_intensity(1, 1), 1);
        assert_eq!(scale_by_intensity(-3, 3), -1);
        assert_eq!(scale_by_intensity(6, 5), 6);
        assert_eq!(scale_by_intensity(6, 9), 9);
        assert_eq!(scale_by_intensity(-3, 10), -4);
    }

    #[test]
    fn test_body_region_tag() {
        let t = BodyRegion::parse("腰部").unwrap().tag(7);
        assert_eq!(t.element, Water);
        assert_eq!(t.severity, 7);
        assert_eq!(t.category, Physical);
    }
}
