//! Engine configuration.
//!
//! Every field has a default, so an empty JSON object is a valid config.
//! Variant switches live here rather than as parallel calculator code paths.
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Which household member count extends family size in the Three-Factor Pell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThirdFactor {
    /// Children other than the student (`chi`).
    #[default]
    Children,
    /// Other family members in college (`col`).
    OtherInCollege,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// `k` in `max = min(fam - k, 100)` for family-dependent bounds.
    pub dependent_bound_offset: f64,
    pub third_factor: ThirdFactor,
    /// Round every result to whole dollars after bounding.
    pub round_to_dollars: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            dependent_bound_offset: 1.0,
            third_factor: ThirdFactor::Children,
            round_to_dollars: true,
        }
    }
}

impl EngineConfig {
    pub fn from_json_str(s: &str) -> Result<Self, EngineError> {
        let cfg: Self = serde_json::from_str(s).map_err(|e| EngineError::Config(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| EngineError::Config(format!("{}: {e}", path.display())))?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        let k = self.dependent_bound_offset;
        if !k.is_finite() || k < 0.0 {
            return Err(EngineError::Config(format!(
                "dependent_bound_offset = {k} must be finite and >= 0"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let cfg = EngineConfig::from_json_str("{}").unwrap();
        assert_eq!(cfg, EngineConfig::default());
    }

    #[test]
    fn parses_variant_names() {
        let cfg = EngineConfig::from_json_str(
            r#"{"third_factor": "other_in_college", "dependent_bound_offset": 0}"#,
        )
        .unwrap();
        assert_eq!(cfg.third_factor, ThirdFactor::OtherInCollege);
        assert_eq!(cfg.dependent_bound_offset, 0.0);
        assert!(cfg.round_to_dollars);
    }

    #[test]
    fn rejects_unknown_fields() {
        let err = EngineConfig::from_json_str(r#"{"cap": 5775}"#).unwrap_err();
        assert!(matches!(err, EngineError::Config(_)));
    }

    #[test]
    fn rejects_negative_offset() {
        assert!(EngineConfig::from_json_str(r#"{"dependent_bound_offset": -1}"#).is_err());
    }

    #[test]
    fn missing_file_is_config_error() {
        let err = EngineConfig::from_path("/nonexistent/pellcalc.json").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/pellcalc.json"));
    }
}
