//! Extension settings.
//!
//! Hosts hand settings over as JSON; every field is optional and falls back
//! to the behaviour of the stock extension.

use serde::Deserialize;
use thiserror::Error;

use crate::policy::ImportActionFilter;

/// Settings could not be read.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid settings: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Import keyword must not be empty")]
    EmptyImportKeyword,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExtensionConfig {
    /// Substring that marks a code action as an import fix.
    pub import_keyword: String,
    /// Phrases that disqualify an otherwise matching import action.
    pub import_exclusions: Vec<String>,
    /// Notice shown when a command needs an editor and none is active.
    pub no_editor_message: String,
    pub hello_message: String,
}

impl Default for ExtensionConfig {
    fn default() -> Self {
        Self {
            import_keyword: "import".to_string(),
            import_exclusions: vec!["all missing imports".to_string()],
            no_editor_message: "No active editor!".to_string(),
            hello_message: "Hello World from hightlight-errors!".to_string(),
        }
    }
}

impl ExtensionConfig {
    pub fn from_json(settings: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(settings)?;
        config.validate()
    }

    pub fn from_value(settings: serde_json::Value) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_value(settings)?;
        config.validate()
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.import_keyword.trim().is_empty() {
            return Err(ConfigError::EmptyImportKeyword);
        }
        Ok(self)
    }

    /// The import-action filter these settings describe.
    pub fn import_filter(&self) -> ImportActionFilter {
        ImportActionFilter::new(&self.import_keyword, &self.import_exclusions)
    }
}
