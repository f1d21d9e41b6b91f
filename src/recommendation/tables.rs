//! Advice tables keyed by element, strength verdict and season

use super::types::ElementAdvice;
use crate::element::Element;
use crate::natal::DayMasterStrength;
use crate::tables::Season;

static WOOD: ElementAdvice = ElementAdvice {
    diet_excess: &["少吃辛辣油炸，减少饮酒", "多吃芹菜、菊花茶等清肝之品"],
    diet_deficient: &["适量食用绿叶蔬菜、枸杞", "可加少许醋调味以养肝"],
    exercise_excess: &["散步、慢跑等舒缓运动疏泄肝气", "避免对抗性强的竞技运动"],
    exercise_deficient: &["练习八段锦、拉伸以舒展筋骨", "清晨户外活动，接触草木"],
    emotional_excess: &["遇事先深呼吸，避免暴怒", "通过书写或倾诉释放压力"],
    emotional_deficient: &["给自己定小目标，培养决断力", "多接触自然，舒展心胸"],
};

static FIRE: ElementAdvice = ElementAdvice {
    diet_excess: &["少吃辛辣、烧烤，控制咖啡摄入", "多吃苦瓜、莲子、绿豆等清心之品"],
    diet_deficient: &["适量食用红枣、桂圆、红豆", "饮食宜温热，少食生冷"],
    exercise_excess: &["选择太极、瑜伽等静态运动", "避免正午高温时段剧烈运动"],
    exercise_deficient: &["适度有氧运动促进血液循环", "多晒太阳，保持日间活动"],
    emotional_excess: &["避免过度兴奋，睡前减少刺激", "练习静坐冥想，收敛心神"],
    emotional_deficient: &["多参与社交，与朋友分享喜悦", "培养让自己开心的爱好"],
};

static EARTH: ElementAdvice = ElementAdvice {
    diet_excess: &["少吃甜食、油腻和难消化的食物", "七分饱，避免暴饮暴食"],
    diet_deficient: &["多吃山药、小米、南瓜健脾", "三餐定时，细嚼慢咽"],
    exercise_excess: &["饭后散步助消化", "适度增加运动量，避免久坐"],
    exercise_deficient: &["做腹部按摩、摩腹", "进行轻中强度的规律运动"],
    emotional_excess: &["减少反复思虑，学会放下", "把担忧写下来，逐条处理"],
    emotional_deficient: &["建立稳定的日常作息", "多与家人相处，增强安定感"],
};

static METAL: ElementAdvice = ElementAdvice {
    diet_excess: &["少吃辛辣刺激食物", "多吃梨、百合润燥"],
    diet_deficient: &["多吃白色食物如白萝卜、银耳、山药", "多喝温水，保持呼吸道湿润"],
    exercise_excess: &["选择舒展型运动，避免过度紧绷", "练习放松式呼吸"],
    exercise_deficient: &["练习深呼吸、腹式呼吸增强肺气", "适量快走或游泳"],
    emotional_excess: &["放下过高要求，接纳不完美", "适度表达情绪，不压抑"],
    emotional_deficient: &["允许自己悲伤，不强行压抑", "整理居住环境，断舍离"],
};

static WATER: ElementAdvice = ElementAdvice {
    diet_excess: &["减少盐分摄入", "少喝冷饮，避免寒凉食物过量"],
    diet_deficient: &["多吃黑色食物如黑豆、黑芝麻、核桃", "适量食用羊肉等温补之品"],
    exercise_excess: &["温和运动为主，注意腰腿保暖", "避免在寒冷潮湿环境中运动"],
    exercise_deficient: &["练习站桩、深蹲强健腰膝", "保证充足睡眠，不熬夜"],
    emotional_excess: &["减少不必要的担惊受怕", "与信任的人谈谈顾虑"],
    emotional_deficient: &["积累小成就建立信心", "冥想静养，培养内在定力"],
};

pub fn element_advice(element: Element) -> &'static ElementAdvice {
    match element {
        Element::Wood => &WOOD,
        Element::Fire => &FIRE,
        Element::Earth => &EARTH,
        Element::Metal => &METAL,
        Element::Water => &WATER,
    }
}

/// Advice lines used when all five elements tie
pub static EVEN_DIET: &[&str] = &["五味均衡，不偏嗜", "三餐规律，顺应时令饮食"];
pub static EVEN_EXERCISE: &[&str] = &["保持规律适度的运动习惯"];
pub static EVEN_EMOTIONAL: &[&str] = &["保持平和心态，情绪有节"];

/// Extra lines for a strong or weak day master
pub fn strength_advice(strength: DayMasterStrength) -> &'static [&'static str] {
    match strength {
        DayMasterStrength::Strong => &["身强宜泄：多运动出汗，把精力用在创造性的事情上"],
        DayMasterStrength::Weak => &["身弱宜扶：注意休息，量力而行，避免过度消耗"],
        DayMasterStrength::Balanced => &[],
    }
}

pub fn seasonal_advice(season: Season) -> &'static [&'static str] {
    match season {
        Season::Spring => &["春季养肝：早睡早起，舒展身体", "饮食宜清淡，适当多吃时令青菜"],
        Season::Summer => &["夏季养心：午间小憩，避免大汗伤津", "适当吃苦味食物清热"],
        Season::LateSummer => &["长夏养脾：防湿邪，少食生冷", "可用薏米、赤小豆祛湿"],
        Season::Autumn => &["秋季养肺：防燥润肺，早卧早起", "多吃梨、银耳等滋润之品"],
        Season::Winter => &["冬季养肾：早卧晚起，注意保暖", "适当进补，少做大汗淋漓的运动"],
    }
}

/// Appended when the dominant element is also the season's element
pub fn seasonal_caution(season: Season) -> String {
    let element = season.element().label();
    format!("时值{}，{element}气当令，{element}本已偏旺，宜收敛", season.label())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_element_has_advice() {
        for element in Element::ALL {
            let advice = element_advice(element);
            assert!(!advice.diet_excess.is_empty());
            assert!(!advice.diet_deficient.is_empty());
            assert!(!advice.exercise_excess.is_empty());
            assert!(!advice.emotional_deficient.is_empty());
        }
    }

    #[test]
    fn test_balanced_strength_adds_nothing() {
        assert!(strength_advice(DayMasterStrength::Balanced).is_empty());
        assert_eq!(strength_advice(DayMasterStrength::Weak).len(), 1);
    }

    #[test]
    fn test_every_season_has_advice() {
        for season in Season::ALL {
            assert!(!seasonal_advice(season).is_empty());
        }
    }
}
