//! Default values for config fields.

use crate::job::Agent;

/// npm registry that serves `upm-ci-utils`.
pub const NPM_UPMCI_INSTALL_URL: &str =
    "https://artifactory.prd.cds.internal.unity3d.com/artifactory/api/npm/upm-npm";

/// PyPI index that serves `unity-downloader-cli`.
pub const UNITY_DOWNLOADER_CLI_URL: &str =
    "https://artifactory.prd.cds.internal.unity3d.com/artifactory/api/pypi/pypi/simple";

/// File the editor priming job writes the resolved editor revision into.
pub const PATH_UNITY_REVISION: &str = "unity_revision.txt";

const DEFAULT_AGENT_IMAGE: &str = "package-ci/ubuntu:stable";

// Default value functions for serde
pub(crate) fn default_npm_upmci_install_url() -> String {
    NPM_UPMCI_INSTALL_URL.to_string()
}
pub(crate) fn default_unity_downloader_cli_url() -> String {
    UNITY_DOWNLOADER_CLI_URL.to_string()
}
pub(crate) fn default_unity_revision_path() -> String {
    PATH_UNITY_REVISION.to_string()
}
pub(crate) fn default_editor_agent() -> Agent {
    Agent::vm(DEFAULT_AGENT_IMAGE, "b1.small")
}
pub(crate) fn default_pack_agent() -> Agent {
    Agent::vm(DEFAULT_AGENT_IMAGE, "b1.large")
}
