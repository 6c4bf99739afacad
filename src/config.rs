//! Configuration for the lexsim analysis pipeline.

use crate::error::{LexsimError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default neighbor retention cutoff.
pub const DEFAULT_CUTOFF: f64 = 0.4;

/// Analysis configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Neighbor retention cutoff in (0, 1]. Only word pairs with a
    /// normalized distance strictly below this value are stored in the
    /// similarity matrix.
    /// Default: 0.4.
    pub cutoff: f64,

    /// Number of parallel threads for the pairwise distance loop.
    /// Default: 0 (use all available cores).
    pub threads: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cutoff: DEFAULT_CUTOFF,
            threads: 0,
        }
    }
}

impl Config {
    /// Loads configuration from a JSON file and validates it.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&text)
            .map_err(|e| LexsimError::Config(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that all field values are usable.
    pub fn validate(&self) -> Result<()> {
        if !(self.cutoff > 0.0 && self.cutoff <= 1.0) {
            return Err(LexsimError::Config(format!(
                "cutoff must be in (0, 1], got {}",
                self.cutoff
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.cutoff, DEFAULT_CUTOFF);
        assert_eq!(config.threads, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_cutoff() {
        let mut config = Config::default();
        config.cutoff = 0.0;
        assert!(config.validate().is_err());
        config.cutoff = 1.5;
        assert!(config.validate().is_err());
        config.cutoff = 1.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"cutoff": 0.25}"#).unwrap();
        assert_eq!(config.cutoff, 0.25);
        assert_eq!(config.threads, 0);
    }
}
