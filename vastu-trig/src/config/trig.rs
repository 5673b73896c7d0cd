//! Main TrigConfig and loading methods.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::cache::CacheSection;
use super::error::ConfigLoadError;

/// Full VastuTrig configuration loaded from YAML
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct TrigConfig {
    /// Cache settings
    #[serde(default)]
    pub cache: CacheSection,
}

impl TrigConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Load from default config path (configs/config.yaml)
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new("configs/config.yaml");
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.cache.max_entries == 0 {
            return Err(ConfigLoadError::Invalid(
                "cache.max_entries must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
