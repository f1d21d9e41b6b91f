//! Scoring weights
//!
//! Every tunable multiplier of the natal and postnatal pipelines. `Default`
//! returns the reference constants; a JSON file may override any subset.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::tables::{LifeStage, SeasonalState};

/// Environment variable naming an optional weights JSON file
pub const WEIGHTS_ENV_VAR: &str = "WUXING_WEIGHTS";

/// Multipliers for the five seasonal states
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeasonalMultipliers {
    pub dominant: f64,
    pub rising: f64,
    pub resting: f64,
    pub constrained: f64,
    pub depleted: f64,
}

impl Default for SeasonalMultipliers {
    fn default() -> Self {
        Self {
            dominant: 2.5,
            rising: 1.5,
            resting: 1.0,
            constrained: 0.5,
            depleted: 0.2,
        }
    }
}

impl SeasonalMultipliers {
    pub fn for_state(&self, state: SeasonalState) -> f64 {
        match state {
            SeasonalState::Dominant => self.dominant,
            SeasonalState::Rising => self.rising,
            SeasonalState::Resting => self.resting,
            SeasonalState::Constrained => self.constrained,
            SeasonalState::Depleted => self.depleted,
        }
    }
}

/// Multipliers relative to the day-master element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelationMultipliers {
    pub same: f64,
    /// Element that generates the day master
    pub generating: f64,
    /// Element the day master generates (left untouched by default)
    pub generated: f64,
    /// Element that restricts the day master
    pub restricting: f64,
    /// Element the day master restricts
    pub restricted: f64,
}

impl Default for RelationMultipliers {
    fn default() -> Self {
        Self {
            same: 1.3,
            generating: 1.1,
            generated: 1.0,
            restricting: 0.9,
            restricted: 0.95,
        }
    }
}

/// Complete weight set for both pipelines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    pub stem_weight: f64,
    pub branch_weight: f64,
    pub hidden_stem_weight: f64,
    pub seasonal: SeasonalMultipliers,
    /// Indexed by LifeStage order (长生 … 养)
    pub life_stage_weights: [f64; 12],
    pub relation: RelationMultipliers,
    pub stem_combination_bonus: f64,
    pub branch_combination_bonus: f64,
    /// Day master above this × mean (in season) is strong
    pub strong_threshold: f64,
    /// Day master below this × mean (out of season) is weak
    pub weak_threshold: f64,
    pub postnatal_base_score: f64,
    pub postnatal_floor: f64,
    pub postnatal_ceiling: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            stem_weight: 10.0,
            branch_weight: 8.0,
            hidden_stem_weight: 10.0,
            seasonal: SeasonalMultipliers::default(),
            //                  长生 沐浴 冠带 临官 帝旺 衰   病   死   墓   绝   胎   养
            life_stage_weights: [1.5, 1.2, 1.8, 2.2, 2.5, 1.0, 0.7, 0.4, 0.6, 0.2, 0.5, 0.8],
            relation: RelationMultipliers::default(),
            stem_combination_bonus: 1.2,
            branch_combination_bonus: 1.1,
            strong_threshold: 1.3,
            weak_threshold: 0.7,
            postnatal_base_score: 50.0,
            postnatal_floor: 0.0,
            postnatal_ceiling: 100.0,
        }
    }
}

impl ScoringWeights {
    /// Load weights from a JSON file; absent fields keep their defaults
    pub fn load(path: &Path) -> EngineResult<Self> {
        let contents = fs::read_to_string(path).map_err(|source| EngineError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        let weights: ScoringWeights =
            serde_json::from_str(&contents).map_err(|source| EngineError::ParseConfig {
                path: path.to_path_buf(),
                source,
            })?;
        weights.validate()?;
        tracing::info!("Loaded scoring weights from {:?}", path);
        Ok(weights)
    }

    /// Weights named by `WUXING_WEIGHTS`, or the defaults
    pub fn from_env() -> EngineResult<Self> {
        let Ok(path) = std::env::var(WEIGHTS_ENV_VAR) else {
            return Ok(Self::default());
        };
        let path = Path::new(&path);
        if !path.exists() {
            tracing::warn!("Weights file {:?} not found - using reference weights", path);
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn life_stage_weight(&self, stage: LifeStage) -> f64 {
        self.life_stage_weights[stage.index()]
    }

    /// Reject negative or non-finite multipliers and an empty clamp range
    pub fn validate(&self) -> EngineResult<()> {
        let named = [
            ("stem_weight", self.stem_weight),
            ("branch_weight", self.branch_weight),
            ("hidden_stem_weight", self.hidden_stem_weight),
            ("seasonal.dominant", self.seasonal.dominant),
            ("seasonal.rising", self.seasonal.rising),
            ("seasonal.resting", self.seasonal.resting),
            ("seasonal.constrained", self.seasonal.constrained),
            ("seasonal.depleted", self.seasonal.depleted),
            ("relation.same", self.relation.same),
            ("relation.generating", self.relation.generating),
            ("relation.generated", self.relation.generated),
            ("relation.restricting", self.relation.restricting),
            ("relation.restricted", self.relation.restricted),
            ("stem_combination_bonus", self.stem_combination_bonus),
            ("branch_combination_bonus", self.branch_combination_bonus),
            ("strong_threshold", self.strong_threshold),
            ("weak_threshold", self.weak_threshold),
        ];
        for (name, value) in named {
            if !value.is_finite() || value < 0.0 {
                return Err(EngineError::Config(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }
        if let Some(bad) = self
            .life_stage_weights
            .iter()
            .find(|w| !w.is_finite() || **w < 0.0)
        {
            return Err(EngineError::Config(format!(
                "life_stage_weights must be non-negative, got {}",
                bad
            )));
        }
        if !(self.postnatal_floor < self.postnatal_ceiling) {
            return Err(EngineError::Config(format!(
                "postnatal_floor ({}) must be below postnatal_ceiling ({})",
                self.postnatal_floor, self.postnatal_ceiling
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let weights = ScoringWeights::default();
        assert!(weights.validate().is_ok());
        assert_eq!(weights.life_stage_weight(LifeStage::DiWang), 2.5);
        assert_eq!(weights.life_stage_weight(LifeStage::Jue), 0.2);
        assert_eq!(weights.seasonal.for_state(SeasonalState::Depleted), 0.2);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let weights: ScoringWeights =
            serde_json::from_str(r#"{ "stem_weight": 12.0, "seasonal": { "dominant": 3.0 } }"#)
                .unwrap();
        assert_eq!(weights.stem_weight, 12.0);
        assert_eq!(weights.branch_weight, 8.0);
        assert_eq!(weights.seasonal.dominant, 3.0);
        assert_eq!(weights.seasonal.rising, 1.5);
    }

    #[test]
    fn test_validate_rejects_negative() {
        let weights = ScoringWeights {
            branch_weight: -1.0,
            ..ScoringWeights::default()
        };
        let err = weights.validate().unwrap_err();
        assert!(err.to_string().contains("branch_weight"));
    }

    #[test]
    fn test_validate_rejects_empty_clamp() {
        let weights = ScoringWeights {
            postnatal_floor: 100.0,
            postnatal_ceiling: 0.0,
            ..ScoringWeights::default()
        };
        assert!(weights.validate().is_err());
    }

    #[test]
    fn test_load_missing_file_names_path() {
        let err = ScoringWeights::load(Path::new("/nonexistent/weights.json")).unwrap_err();
        assert!(matches!(err, EngineError::ReadConfig { .. }));
        assert!(err.to_string().contains("/nonexistent/weights.json"));
        assert!(!err.is_validation());
    }

    #[test]
    fn test_load_malformed_file_names_path() {
        let path = std::env::temp_dir().join(format!("wuxing_weights_{}.json", std::process::id()));
        fs::write(&path, "{ \"stem_weight\": ").unwrap();
        let err = ScoringWeights::load(&path).unwrap_err();
        fs::remove_file(&path).unwrap();
        match err {
            EngineError::ParseConfig { path: ref reported, .. } => assert_eq!(reported, &path),
            ref other => panic!("unexpected error: {other}"),
        }
        assert!(err.to_string().contains("wuxing_weights_"));
    }
}
