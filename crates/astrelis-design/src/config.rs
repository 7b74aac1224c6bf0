use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DesignError, DesignResult};
use crate::input::Cursor;

/// Configuration for a design surface.
///
/// Loaded from TOML; any field left out keeps its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DesignConfig {
    /// Extra designer units around each adorner that still count as a hit.
    pub hit_tolerance: f64,
    /// Maximum number of parent links followed when resolving a hit source.
    pub max_source_depth: usize,
    /// Cursor shown when the current tool does not ask for one.
    pub default_cursor: Cursor,
}

impl Default for DesignConfig {
    fn default() -> Self {
        Self {
            hit_tolerance: 0.0,
            max_source_depth: 64,
            default_cursor: Cursor::Arrow,
        }
    }
}

impl DesignConfig {
    pub fn from_toml_str(s: &str) -> DesignResult<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would silently disable hit testing.
    pub fn validate(&self) -> DesignResult<()> {
        if !self.hit_tolerance.is_finite() || self.hit_tolerance < 0.0 {
            return Err(DesignError::Config(format!(
                "hit_tolerance must be a finite, non-negative number, got {}",
                self.hit_tolerance
            )));
        }
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> DesignResult<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&s)?;
        tracing::debug!(path = %path.display(), ?config, "Loaded designer configuration");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = DesignConfig::from_toml_str("hit_tolerance = 2.5").unwrap();
        assert_eq!(config.hit_tolerance, 2.5);
        assert_eq!(config.max_source_depth, 64);
        assert_eq!(config.default_cursor, Cursor::Arrow);
    }

    #[test]
    fn test_cursor_from_toml() {
        let config = DesignConfig::from_toml_str("default_cursor = \"crosshair\"").unwrap();
        assert_eq!(config.default_cursor, Cursor::Crosshair);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = DesignConfig::from_toml_str("snap = true").unwrap_err();
        assert!(matches!(err, DesignError::Config(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = DesignConfig::load("/definitely/not/here/design.toml").unwrap_err();
        assert!(matches!(err, DesignError::Io(_)));
    }

    #[test]
    fn test_invalid_hit_tolerance_rejected() {
        for source in ["hit_tolerance = -1.0", "hit_tolerance = nan", "hit_tolerance = inf"] {
            let err = DesignConfig::from_toml_str(source).unwrap_err();
            assert!(matches!(err, DesignError::Config(_)), "{source}: {err:?}");
        }
        assert!(DesignConfig::from_toml_str("hit_tolerance = 0.0").is_ok());
    }
}
