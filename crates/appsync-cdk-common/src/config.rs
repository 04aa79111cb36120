//! Project configuration model, loaded from `cdk.json`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{CdkError, Result};

/// Root configuration for an app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// Directory the cloud assembly is written to.
    #[serde(rename = "output")]
    pub output_dir: PathBuf,
    /// Free-form context values made available to stacks.
    pub context: Map<String, Value>,
    /// Description applied to stacks that do not set their own.
    pub description: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(crate::constants::DEFAULT_OUTPUT_DIR),
            context: Map::new(),
            description: None,
        }
    }
}

impl AppConfig {
    /// Loads configuration from `path`, falling back to defaults when the
    /// file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        tracing::info!(path = %path.display(), "loading config");
        let content = std::fs::read_to_string(path).map_err(|e| CdkError::io(path, e))?;
        let config: Self = serde_json::from_str(&content)?;
        if config.output_dir.as_os_str().is_empty() {
            return Err(CdkError::Config {
                message: "\"output\" must not be empty".into(),
            });
        }
        Ok(config)
    }

    /// Returns a context value by key.
    #[must_use]
    pub fn context_value(&self, key: &str) -> Option<&Value> {
        self.context.get(key)
    }
}
