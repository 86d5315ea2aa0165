//! Query builder configuration
//!
//! Stores user preferences in `~/.config/querybar/config.yaml`:
//!
//! ```yaml
//! operators:
//!   - value: AND
//!     description: Add boolean operator "and"
//!   - value: OR
//!   - value: NOT
//! suggestion_limit: 10
//! suggestion_debounce_ms: 150
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::tokenizer::{default_operators, LogicOperator, LogicVocabulary, VocabularyError};

/// Configuration for the query builder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Logic operator vocabulary (case-sensitive)
    #[serde(default = "default_operators")]
    pub operators: Vec<LogicOperator>,
    /// Maximum number of suggestions kept for the dropdown
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: usize,
    /// Delay before a buffer change should trigger a suggestion fetch
    #[serde(default = "default_suggestion_debounce_ms")]
    pub suggestion_debounce_ms: u64,
}

fn default_suggestion_limit() -> usize {
    10
}

fn default_suggestion_debounce_ms() -> u64 {
    150
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            operators: default_operators(),
            suggestion_limit: default_suggestion_limit(),
            suggestion_debounce_ms: default_suggestion_debounce_ms(),
        }
    }
}

impl QueryConfig {
    /// Load config from the user config directory, or return defaults if missing or invalid
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("Failed to load config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load and validate config from a specific file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_yaml(&content)
    }

    /// Parse and validate config from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_yaml::from_str(yaml).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.vocabulary().map(|_| ())
    }

    /// Build the operator vocabulary
    pub fn vocabulary(&self) -> Result<LogicVocabulary, ConfigError> {
        LogicVocabulary::new(self.operators.clone()).map_err(ConfigError::Operators)
    }
}

/// Errors that can occur when loading or saving config
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Io(String),
    Parse(String),
    Operators(VocabularyError),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Operators(e) => write!(f, "Invalid operators: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}
