//! Config loading and validation.

use super::model::GeneratorConfig;
use crate::error::{GenError, Result};
use crate::job::Agent;
use std::path::Path;

impl GeneratorConfig {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(GeneratorConfig)` - Successfully loaded and validated config
    /// * `Err(GenError::UserError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            GenError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load config from `path` if given, otherwise use the defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: GeneratorConfig = serde_yaml::from_str(yaml)
            .map_err(|e| GenError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to a YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| GenError::OutputError(format!("failed to render config as YAML: {}", e)))
    }

    /// Validate config values.
    ///
    /// Validation rules:
    /// - endpoint URLs and `unity_revision_path` must be non-empty
    /// - agents must have a non-empty label or image
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("npm_upmci_install_url", &self.npm_upmci_install_url),
            ("unity_downloader_cli_url", &self.unity_downloader_cli_url),
            ("unity_revision_path", &self.unity_revision_path),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(GenError::UserError(format!(
                    "config validation failed: {} must not be empty",
                    field
                )));
            }
        }

        let agents = [
            ("editor_agent", &self.editor_agent),
            ("pack_agent", &self.pack_agent),
        ];
        for (field, agent) in agents {
            let empty = match agent {
                Agent::Label(label) => label.trim().is_empty(),
                Agent::Spec { image, .. } => image.trim().is_empty(),
            };
            if empty {
                return Err(GenError::UserError(format!(
                    "config validation failed: {} must name an agent",
                    field
                )));
            }
        }

        Ok(())
    }
}
