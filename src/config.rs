//! Configuration types for the planner.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{PlannerError, Result};
use crate::generate::GeminiConfig;

/// Environment variable consulted when no API key is configured.
const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Top-level configuration for the planner.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Generative provider settings.
    pub generator: GeneratorConfig,
    /// Persistence settings.
    pub storage: StorageConfig,
}

/// Generative provider settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Model identifier requested from the provider.
    pub model: String,
    /// Provider base URL.
    pub base_url: String,
    /// API key. When empty, `GEMINI_API_KEY` is consulted instead; keys
    /// are better kept in the environment than on disk.
    pub api_key: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            model: "gemini-1.5-flash".to_owned(),
            base_url: "https://generativelanguage.googleapis.com".to_owned(),
            api_key: String::new(),
            timeout_secs: 60,
        }
    }
}

impl GeneratorConfig {
    /// The API key to use: the configured value when non-empty, else the
    /// `GEMINI_API_KEY` environment variable.
    #[must_use]
    pub fn resolve_api_key(&self) -> Option<String> {
        if !self.api_key.trim().is_empty() {
            return Some(self.api_key.clone());
        }
        std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }

    /// Build the Gemini adapter configuration.
    ///
    /// # Errors
    /// Returns a config error when no API key can be resolved.
    pub fn gemini_config(&self) -> Result<GeminiConfig> {
        let api_key = self.resolve_api_key().ok_or_else(|| {
            PlannerError::Config(format!(
                "no API key configured and {API_KEY_ENV} is unset"
            ))
        })?;
        Ok(GeminiConfig::new(api_key, self.model.clone())
            .with_base_url(self.base_url.clone())
            .with_timeout(self.timeout_secs))
    }
}

/// Persistence settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory schedule documents are stored in.
    pub data_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: crate::paths::data_dir(),
        }
    }
}

impl PlannerConfig {
    /// Load configuration from a TOML file, falling back to defaults for
    /// missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| PlannerError::Config(e.to_string()))
    }

    /// Save configuration to a TOML file, creating parent directories as
    /// needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or the config cannot
    /// be serialized.
    pub fn save_to_file(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| PlannerError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
