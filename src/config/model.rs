//! GeneratorConfig struct definition and default implementation.

use super::types::*;
use crate::job::Agent;
use serde::{Deserialize, Serialize};

/// Configuration for job generation.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    // =========================================================================
    // Tool endpoints
    // =========================================================================
    /// Registry passed to `npm install upm-ci-utils`.
    #[serde(default = "default_npm_upmci_install_url")]
    pub npm_upmci_install_url: String,

    /// Index passed to `pip install unity-downloader-cli`.
    #[serde(default = "default_unity_downloader_cli_url")]
    pub unity_downloader_cli_url: String,

    // =========================================================================
    // Paths
    // =========================================================================
    /// Revision file produced by editor priming and consumed by test jobs.
    #[serde(default = "default_unity_revision_path")]
    pub unity_revision_path: String,

    // =========================================================================
    // Agents
    // =========================================================================
    /// Agent for editor priming jobs.
    #[serde(default = "default_editor_agent")]
    pub editor_agent: Agent,

    /// Agent for pack jobs and the per-editor aggregate jobs.
    #[serde(default = "default_pack_agent")]
    pub pack_agent: Agent,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            npm_upmci_install_url: default_npm_upmci_install_url(),
            unity_downloader_cli_url: default_unity_downloader_cli_url(),
            unity_revision_path: default_unity_revision_path(),
            editor_agent: default_editor_agent(),
            pack_agent: default_pack_agent(),
        }
    }
}
