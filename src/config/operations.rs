//! Config loading, validation, and conversion into runtime settings.

use super::model::Config;
use crate::error::{ArgstoneError, Result};
use crate::link::{LinkSettings, parse_base_url};
use crate::prompt::PromptTemplates;
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(ArgstoneError::UserError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            ArgstoneError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load config from `path` if given, otherwise use the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty file means all defaults.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml).map_err(|e| {
            ArgstoneError::UserError(format!("failed to parse config YAML: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            ArgstoneError::UserError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `port` must be non-zero
    /// - `base_url` must be an absolute http(s) URL
    /// - `prompt_param` and every `extra_params` name must be non-empty
    /// - every template override must render
    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(ArgstoneError::UserError(
                "config validation failed: port must be greater than 0".to_string(),
            ));
        }

        parse_base_url(&self.base_url)
            .map_err(|e| ArgstoneError::UserError(format!("config validation failed: {}", e)))?;

        if self.prompt_param.trim().is_empty() {
            return Err(ArgstoneError::UserError(
                "config validation failed: prompt_param must be non-empty".to_string(),
            ));
        }

        if self.extra_params.iter().any(|p| p.name.trim().is_empty()) {
            return Err(ArgstoneError::UserError(
                "config validation failed: extra_params names must be non-empty".to_string(),
            ));
        }

        if let Err((category, e)) = self.prompt_templates().check() {
            return Err(ArgstoneError::UserError(format!(
                "config validation failed: template for '{}': {}",
                category, e
            )));
        }

        Ok(())
    }

    /// Link settings derived from this config.
    pub fn link_settings(&self) -> LinkSettings {
        LinkSettings {
            base_url: self.base_url.clone(),
            prompt_param: self.prompt_param.clone(),
            extra_params: self
                .extra_params
                .iter()
                .map(|p| (p.name.clone(), p.value.clone()))
                .collect(),
        }
    }

    /// Prompt templates with this config's overrides applied.
    pub fn prompt_templates(&self) -> PromptTemplates {
        PromptTemplates::with_overrides(self.templates.clone())
    }
}
