//! Job generators, one per job category.
//!
//! A generator turns descriptors into a [`GeneratedJob`]: it computes its own
//! identifier and the references to the jobs it waits for with the naming
//! functions of the target categories, builds the ordered command list and
//! finalizes a [`crate::job::JobBuilder`]. Generators share no state and can
//! run in any order.

mod editor;
mod package;
mod template;


pub use editor::editor_priming_job;
pub use package::{package_pack_job, package_test_all_job, package_test_job};
pub use template::{template_test_all_job, template_test_job};

use crate::config::GeneratorConfig;

pub use crate::job::GeneratedJob;

fn install_upm_ci(config: &GeneratorConfig) -> String {
    format!(
        "npm install upm-ci-utils@stable -g --registry {}",
        config.npm_upmci_install_url
    )
}

fn install_unity_downloader(config: &GeneratorConfig) -> String {
    format!(
        "pip install unity-downloader-cli --index-url {} --upgrade",
        config.unity_downloader_cli_url
    )
}

/// Downloads the editor revision recorded by the priming job.
fn download_editor(config: &GeneratorConfig) -> String {
    format!(
        "unity-downloader-cli --source-file {} -c editor --wait --published-only",
        config.unity_revision_path
    )
}
