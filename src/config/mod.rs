//! Configuration hierarchy: CLI > environment > file > defaults

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{ClipsmithError, ClipsmithResult};

/// Config file searched for in the working directory
pub const CONFIG_FILE: &str = "clipsmith.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Generative model used for suggestions
    pub model: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
    /// Override for the suggestion API base URL
    pub endpoint: Option<String>,
    /// Preview boundary-check interval in milliseconds
    pub poll_interval_ms: u64,
    /// Default export target aspect ratio, as W:H
    pub default_target: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: crate::adapters::gemini::DEFAULT_MODEL.to_string(),
            api_key_env: "GEMINI_API_KEY".to_string(),
            endpoint: None,
            poll_interval_ms: 100,
            default_target: "9:16".to_string(),
        }
    }
}

impl Config {
    /// Load from `clipsmith.toml` (if present) and environment overrides
    pub fn load() -> ClipsmithResult<Self> {
        Ok(Self::load_from(Path::new(CONFIG_FILE))?.apply_env())
    }

    /// Load from an explicit file path; missing file means defaults
    pub fn load_from(path: &Path) -> ClipsmithResult<Self> {
        if !path.exists() {
            debug!("no config file found, using defaults");
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(path)?;
        let config = toml::from_str(&data).map_err(|e| ClipsmithError::ConfigError {
            message: format!("could not parse {}: {}", path.display(), e),
        })?;
        debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    /// Apply `CLIPSMITH_*` environment overrides
    fn apply_env(mut self) -> Self {
        if let Ok(model) = std::env::var("CLIPSMITH_MODEL") {
            self.model = model;
        }
        if let Ok(endpoint) = std::env::var("CLIPSMITH_ENDPOINT") {
            self.endpoint = Some(endpoint);
        }
        if let Ok(target) = std::env::var("CLIPSMITH_TARGET") {
            self.default_target = target;
        }
        if let Ok(interval) = std::env::var("CLIPSMITH_POLL_INTERVAL_MS") {
            if let Ok(ms) = interval.parse() {
                self.poll_interval_ms = ms;
            }
        }
        self
    }

    /// Resolve the API key from the configured environment variable
    pub fn api_key(&self) -> ClipsmithResult<String> {
        std::env::var(&self.api_key_env).map_err(|_| ClipsmithError::ConfigError {
            message: format!(
                "no API key found: set the {} environment variable",
                self.api_key_env
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.model, "gemini-2.5-flash");
        assert_eq!(config.poll_interval_ms, 100);
        assert_eq!(config.default_target, "9:16");
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = Config::load_from(Path::new("/nonexistent/clipsmith.toml")).unwrap();
        assert_eq!(config.model, Config::default().model);
    }

    #[test]
    fn test_partial_file_keeps_defaults_for_the_rest() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clipsmith.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "model = \"gemini-2.0-pro\"").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.model, "gemini-2.0-pro");
        assert_eq!(config.default_target, "9:16");
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clipsmith.toml");
        std::fs::write(&path, "model = [broken").unwrap();
        assert!(Config::load_from(&path).is_err());
    }
}
