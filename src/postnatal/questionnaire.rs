//! Questionnaire mode: fixed question set, answer = selected option index
//!
//! Two questions per element, 3-4 options each. Option 0 is always the
//! health-affirming answer; later options escalate severity.

use rustc_hash::FxHashMap;
use serde::Serialize;

use super::tags::{SymptomTag, TagCategory};
use crate::element::Element;
use crate::error::{EngineError, EngineResult};

use Element::{Earth, Fire, Metal, Water, Wood};

/// Question id → selected option index
pub type QuestionnaireAnswers = FxHashMap<String, usize>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuestionOption {
    pub label: &'static str,
    pub element: Element,
    pub severity: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub prompt: &'static str,
    pub element: Element,
    pub category: TagCategory,
    pub options: &'static [QuestionOption],
}

const fn opt(label: &'static str, element: Element, severity: i32) -> QuestionOption {
    QuestionOption {
        label,
        element,
        severity,
    }
}

pub static QUESTIONS: [Question; 10] = [
    Question {
        id: "irritability",
        prompt: "最近是否容易发脾气、烦躁？",
        element: Wood,
        category: TagCategory::Emotion,
        options: &[
            opt("心平气和", Wood, -2),
            opt("偶尔烦躁", Wood, 2),
            opt("经常烦躁", Wood, 5),
            opt("一点就着", Wood, 7),
        ],
    },
    Question {
        id: "eye_fatigue",
        prompt: "眼睛是否干涩、容易疲劳？",
        element: Wood,
        category: TagCategory::Physical,
        options: &[
            opt("没有", Wood, -1),
            opt("用眼久了会", Wood, 3),
            opt("经常干涩发胀", Wood, 6),
        ],
    },
    Question {
        id: "palpitations",
        prompt: "是否有心慌、心跳加快的感觉？",
        element: Fire,
        category: TagCategory::Physical,
        options: &[
            opt("没有", Fire, -2),
            opt("偶尔", Fire, 3),
            opt("经常", Fire, 6),
        ],
    },
    Question {
        id: "mouth_ulcers",
        prompt: "是否容易口舌生疮、口干舌燥？",
        element: Fire,
        category: TagCategory::Observation,
        options: &[
            opt("很少", Fire, -1),
            opt("偶尔上火", Fire, 3),
            opt("经常口腔溃疡", Fire, 5),
            opt("反复发作", Fire, 7),
        ],
    },
    Question {
        id: "appetite",
        prompt: "最近胃口和消化怎么样？",
        element: Earth,
        category: TagCategory::Physical,
        options: &[
            opt("胃口好消化好", Earth, -2),
            opt("饭后偶尔腹胀", Earth, 3),
            opt("食欲差常腹胀", Earth, 6),
        ],
    },
    Question {
        id: "overthinking",
        prompt: "是否经常思虑过多、难以放下？",
        element: Earth,
        category: TagCategory::Emotion,
        options: &[
            opt("想得开", Earth, -2),
            opt("有时反复琢磨", Earth, 3),
            opt("经常思虑不停", Earth, 5),
            opt("思虑到影响睡眠", Earth, 7),
        ],
    },
    Question {
        id: "breathing",
        prompt: "是否容易气短、咳嗽或感冒？",
        element: Metal,
        category: TagCategory::Physical,
        options: &[
            opt("很少", Metal, -2),
            opt("换季时会", Metal, 3),
            opt("经常", Metal, 6),
        ],
    },
    Question {
        id: "skin_dryness",
        prompt: "皮肤是否干燥、容易过敏？",
        element: Metal,
        category: TagCategory::Observation,
        options: &[
            opt("皮肤润泽", Metal, -1),
            opt("秋冬偏干", Metal, 2),
            opt("常年干燥瘙痒", Metal, 5),
        ],
    },
    Question {
        id: "cold_limbs",
        prompt: "手脚是否怕冷、冰凉？",
        element: Water,
        category: TagCategory::Physical,
        options: &[
            opt("手脚温暖", Water, -2),
            opt("冬天偏凉", Water, 3),
            opt("常年手脚冰凉", Water, 6),
            opt("怕冷且腰膝酸软", Water, 8),
        ],
    },
    Question {
        id: "night_urination",
        prompt: "夜间是否需要起夜？",
        element: Water,
        category: TagCategory::Physical,
        options: &[
            opt("不起夜", Water, -1),
            opt("偶尔一次", Water, 2),
            opt("每晚一到两次", Water, 5),
            opt("每晚多次", Water, 7),
        ],
    },
];

/// Look up a question by id
pub fn find_question(id: &str) -> Option<&'static Question> {
    QUESTIONS.iter().find(|q| q.id == id)
}

/// Validate every answer, then emit one tag per answered question
///
/// Tags follow question-set order regardless of map iteration order.
pub fn questionnaire_tags(answers: &QuestionnaireAnswers) -> EngineResult<Vec<SymptomTag>> {
    for (id, &index) in answers {
        let question =
            find_question(id).ok_or_else(|| EngineError::UnknownQuestion(id.clone()))?;
        if index >= question.options.len() {
            return Err(EngineError::OptionOutOfRange {
                question: id.clone(),
                index,
                options: question.options.len(),
            });
        }
    }

    let tags = QUESTIONS
        .iter()
        .filter_map(|question| {
            let index = *answers.get(question.id)?;
            let option = &question.options[index];
            Some(SymptomTag::new(
                option.element,
                question.category,
                option.label,
                option.severity,
            ))
        })
        .collect();

    Ok(tags)
}
