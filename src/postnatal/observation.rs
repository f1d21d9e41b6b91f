//! Observation mode: a loosely structured daily record
//!
//! Every field is optional. Recognized values map to tags through the closed
//! vocabulary; unrecognized text is ignored. Intensities and severities are
//! validated before any tag is produced.

use serde::{Deserialize, Serialize};

use super::tags::SymptomTag;
use super::vocabulary::{
    scale_by_intensity, BodyRegion, MealFeeling, Mood, SleepDuration, SleepFeeling,
};
use crate::error::{EngineError, EngineResult};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SleepEntry {
    #[serde(default, alias = "duration_label")]
    pub duration: Option<String>,
    #[serde(default, alias = "feeling_label")]
    pub feeling: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmotionEntry {
    /// Chinese label or emoji
    #[serde(alias = "emoji", alias = "emoji_or_label")]
    pub label: String,
    pub intensity: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealEntry {
    #[serde(alias = "feeling_label")]
    pub feeling: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomEntry {
    pub body_region: String,
    pub severity: u8,
}

/// One day's self-reported observations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DailyObservation {
    pub sleep: Option<SleepEntry>,
    pub emotions: Vec<EmotionEntry>,
    pub meals: Vec<MealEntry>,
    pub symptoms: Vec<SymptomEntry>,
}

fn check_range(field: &'static str, value: u8) -> EngineResult<()> {
    if (1..=10).contains(&value) {
        Ok(())
    } else {
        Err(EngineError::InvalidIntensity { field, value })
    }
}

impl DailyObservation {
    pub fn validate(&self) -> EngineResult<()> {
        for emotion in &self.emotions {
            check_range("intensity", emotion.intensity)?;
        }
        for symptom in &self.symptoms {
            check_range("severity", symptom.severity)?;
        }
        Ok(())
    }

    /// Validate, then translate every recognized value into tags
    pub fn to_tags(&self) -> EngineResult<Vec<SymptomTag>> {
        self.validate()?;

        let mut tags = Vec::new();

        if let Some(sleep) = &self.sleep {
            if let Some(duration) = sleep.duration.as_deref().and_then(SleepDuration::parse) {
                tags.extend(duration.tags());
            }
            if let Some(feeling) = sleep.feeling.as_deref().and_then(SleepFeeling::parse) {
                tags.extend(feeling.tags());
            }
        }

        for entry in &self.emotions {
            if let Some(mood) = Mood::parse(&entry.label) {
                tags.extend(mood.tags().into_iter().map(|mut tag| {
                    tag.severity = scale_by_intensity(tag.severity, entry.intensity);
                    tag
                }));
            }
        }

        for entry in &self.meals {
            if let Some(feeling) = MealFeeling::parse(&entry.feeling) {
                tags.extend(feeling.tags());
            }
        }

        for entry in &self.symptoms {
            if let Some(region) = BodyRegion::parse(&entry.body_region) {
                tags.push(region.tag(entry.severity));
            }
        }

        Ok(tags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Element;

    #[test]
    fn test_empty_bundle_has_no_tags() {
        let obs = DailyObservation::default();
        assert!(obs.to_tags().unwrap().is_empty());
    }

    #[test]
    fn test_deserializes_partial_bundle() {
        let json = r#"{
            "sleep": {"duration_label": "少于5小时", "feeling_label": "昏昏沉沉"},
            "emotions": [{"emoji": "😡", "intensity": 9}]
        }"#;
        let obs: DailyObservation = serde_json::from_str(json).unwrap();
        assert!(obs.meals.is_empty());
        let tags = obs.to_tags().unwrap();
        // water 6 + fire 4 from duration, fire 6 from feeling, wood 9 from anger
        assert_eq!(tags.len(), 4);
        let anger = tags.iter().find(|t| t.element == Element::Wood).unwrap();
        assert_eq!(anger.severity, 9);
    }

    #[test]
    fn test_unrecognized_values_are_ignored() {
        let obs = DailyObservation {
            meals: vec![MealEntry {
                feeling: "还不错吧".into(),
            }],
            symptoms: vec![SymptomEntry {
                body_region: "尾巴".into(),
                severity: 5,
            }],
            ..Default::default()
        };
        assert!(obs.to_tags().unwrap().is_empty());
    }

    #[test]
    fn test_out_of_range_intensity_is_rejected() {
        let obs = DailyObservation {
            emotions: vec![EmotionEntry {
                label: "开心".into(),
                intensity: 11,
            }],
            ..Default::default()
        };
        let err = obs.to_tags().unwrap_err();
        assert!(matches!(
            err,
            EngineError::InvalidIntensity {
                field: "intensity",
                value: 11
            }
        ));
    }

    #[test]
    fn test_zero_severity_is_rejected() {
        let obs = DailyObservation {
            symptoms: vec![SymptomEntry {
                body_region: "膝盖".into(),
                severity: 0,
            }],
            ..Default::default()
        };
        assert_eq!(obs.to_tags().unwrap_err().field(), Some("severity"));
    }
}
