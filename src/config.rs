//! Engine configuration from TOML.
//!
//! ```toml
//! [validator]
//! tolerance = 1e-4
//!
//! [leveling]
//! advance_accuracy = 0.85
//! fast_time_ms = 22000
//! streak_bonus = 5
//! struggle_accuracy = 0.55
//! slow_time_ms = 65000
//!
//! [store]
//! max_questions = 10000
//! ```
//!
//! Every key is optional.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::{error, info};

use crate::leveling::LevelPolicy;
use crate::validator::DEFAULT_TOLERANCE;

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("failed to read config file: {0}")]
  Io(#[from] std::io::Error),
  #[error("failed to parse TOML: {0}")]
  Parse(#[from] toml::de::Error),
  #[error("invalid config: {0}")]
  Invalid(String),
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct EngineConfig {
  #[serde(default)]
  pub validator: ValidatorConfig,
  #[serde(default)]
  pub leveling: LevelPolicy,
  #[serde(default)]
  pub store: StoreConfig,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
  pub tolerance: f64,
}

impl Default for ValidatorConfig {
  fn default() -> Self {
    Self { tolerance: DEFAULT_TOLERANCE }
  }
}

/// Issued-question store capacity; oldest questions are evicted first.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
  pub max_questions: usize,
}

impl Default for StoreConfig {
  fn default() -> Self {
    Self { max_questions: 10_000 }
  }
}

impl EngineConfig {
  pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
    let cfg: EngineConfig = toml::from_str(s)?;
    cfg.validate()?;
    Ok(cfg)
  }

  pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
    let s = std::fs::read_to_string(path)?;
    Self::from_toml_str(&s)
  }

  fn validate(&self) -> Result<(), ConfigError> {
    let tol = self.validator.tolerance;
    if !tol.is_finite() || tol <= 0.0 {
      return Err(ConfigError::Invalid(format!("validator.tolerance must be finite and > 0, got {tol}")));
    }
    let lv = &self.leveling;
    for (name, v) in [("advance_accuracy", lv.advance_accuracy), ("struggle_accuracy", lv.struggle_accuracy)] {
      if !(0.0..=1.0).contains(&v) {
        return Err(ConfigError::Invalid(format!("leveling.{name} must be within [0, 1], got {v}")));
      }
    }
    if lv.struggle_accuracy >= lv.advance_accuracy {
      return Err(ConfigError::Invalid(format!(
        "leveling.struggle_accuracy ({}) must be below advance_accuracy ({})",
        lv.struggle_accuracy, lv.advance_accuracy
      )));
    }
    for (name, v) in [("fast_time_ms", lv.fast_time_ms), ("slow_time_ms", lv.slow_time_ms)] {
      if !v.is_finite() {
        return Err(ConfigError::Invalid(format!("leveling.{name} must be finite, got {v}")));
      }
    }
    if lv.fast_time_ms >= lv.slow_time_ms {
      return Err(ConfigError::Invalid(format!(
        "leveling.fast_time_ms ({}) must be below slow_time_ms ({})",
        lv.fast_time_ms, lv.slow_time_ms
      )));
    }
    if self.store.max_questions == 0 {
      return Err(ConfigError::Invalid("store.max_questions must be > 0".into()));
    }
    Ok(())
  }
}

/// Load from ENGINE_CONFIG_PATH. Unset → defaults; any read/parse/validation
/// error is logged and also falls back to defaults.
pub fn load_engine_config_from_env() -> EngineConfig {
  let Ok(path) = std::env::var("ENGINE_CONFIG_PATH") else {
    info!(target: "math_engine", "ENGINE_CONFIG_PATH not set; using default config");
    return EngineConfig::default();
  };
  match EngineConfig::from_path(&path) {
    Ok(cfg) => {
      info!(target: "math_engine", %path, "Loaded engine config (TOML)");
      cfg
    }
    Err(e) => {
      error!(target: "math_engine", %path, error = %e, "Failed to load engine config; using defaults");
      EngineConfig::default()
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_file_is_all_defaults() {
    let cfg = EngineConfig::from_toml_str("").unwrap();
    assert_eq!(cfg.validator.tolerance, DEFAULT_TOLERANCE);
    assert_eq!(cfg.leveling, LevelPolicy::default());
    assert_eq!(cfg.store.max_questions, 10_000);
  }

  #[test]
  fn partial_sections_keep_other_defaults() {
    let cfg = EngineConfig::from_toml_str(
      r#"
        [leveling]
        streak_bonus = 8

        [store]
        max_questions = 50
      "#,
    )
    .unwrap();
    assert_eq!(cfg.leveling.streak_bonus, 8);
    assert_eq!(cfg.leveling.advance_accuracy, 0.85);
    assert_eq!(cfg.store.max_questions, 50);
  }

  #[test]
  fn rejects_bad_values() {
    assert!(matches!(
      EngineConfig::from_toml_str("[validator]\ntolerance = 0.0"),
      Err(ConfigError::Invalid(_))
    ));
    assert!(matches!(
      EngineConfig::from_toml_str("[leveling]\nadvance_accuracy = 1.5"),
      Err(ConfigError::Invalid(_))
    ));
    assert!(matches!(
      EngineConfig::from_toml_str("[leveling]\nfast_time_ms = 90000.0"),
      Err(ConfigError::Invalid(_))
    ));
    assert!(matches!(
      EngineConfig::from_toml_str("[store]\nmax_questions = 0"),
      Err(ConfigError::Invalid(_))
    ));
  }

  #[test]
  fn rejects_inconsistent_leveling() {
    for bad in [
      "[leveling]\nfast_time_ms = nan",
      "[leveling]\nslow_time_ms = inf",
      "[leveling]\nstruggle_accuracy = 0.9",
      "[leveling]\nadvance_accuracy = 0.5\nstruggle_accuracy = 0.5",
    ] {
      assert!(matches!(EngineConfig::from_toml_str(bad), Err(ConfigError::Invalid(_))), "{bad}");
    }
    assert!(EngineConfig::from_toml_str("[leveling]\nadvance_accuracy = 0.9\nstruggle_accuracy = 0.4").is_ok());
  }

  #[test]
  fn rejects_malformed_toml() {
    assert!(matches!(EngineConfig::from_toml_str("[validator"), Err(ConfigError::Parse(_))));
  }

  #[test]
  fn missing_file_is_io_error() {
    assert!(matches!(
      EngineConfig::from_path("/definitely/not/here.toml"),
      Err(ConfigError::Io(_))
    ));
  }
}
