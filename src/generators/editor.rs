use super::{GeneratedJob, install_unity_downloader};
use crate::config::GeneratorConfig;
use crate::descriptor::{Editor, Platform};
use crate::error::Result;
use crate::job::JobBuilder;
use crate::naming::editor_job_id;

/// Resolves the editor revision for (editor, platform) and publishes it as an
/// artifact for every test job on that pair.
pub fn editor_priming_job(
    editor: &Editor,
    platform: &Platform,
    config: &GeneratorConfig,
) -> Result<GeneratedJob> {
    let id = editor_job_id(&editor.version, &platform.os)?;

    let components: Vec<String> = platform
        .components
        .iter()
        .map(|component| format!("-c {}", component))
        .collect();

    let commands = [
        install_unity_downloader(config),
        format!(
            "unity-downloader-cli {} -o {} --wait --skip-download {} > {}",
            editor.downloader_selector(),
            platform.os,
            components.join(" "),
            config.unity_revision_path
        ),
    ];

    let mut job = JobBuilder::new();
    job.set_name(format!("[{},{}] Editor priming", editor.version, platform.os))
        .set_agent(config.editor_agent.clone())
        .set_skip_checkout(true)
        .add_commands(commands)
        .add_artifacts_unity_revision(&config.unity_revision_path);

    Ok(GeneratedJob {
        id,
        manifest: job.build(),
    })
}
