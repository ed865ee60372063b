use super::{GeneratedJob, download_editor, install_unity_downloader, install_upm_ci};
use crate::config::GeneratorConfig;
use crate::descriptor::{Editor, Platform, Template};
use crate::error::Result;
use crate::job::JobBuilder;
use crate::naming::{
    editor_ref, package_pack_ref, template_job_id_test, template_job_id_test_all,
    template_test_ref,
};

/// Tests one template on (platform, editor).
///
/// Waits for the editor priming job of the same (editor, platform) and the
/// pack job of every package the template depends on. Templates with
/// co-dependencies run the platform's copy command right before the test.
pub fn template_test_job(
    template: &Template,
    platform: &Platform,
    editor: &Editor,
    config: &GeneratorConfig,
) -> Result<GeneratedJob> {
    let id = template_job_id_test(&template.id, &platform.os, &editor.version)?;

    let mut dependencies = vec![editor_ref(&editor.version, &platform.os)?];
    for dependency in &template.dependencies {
        dependencies.push(package_pack_ref(dependency)?);
    }

    let mut commands = vec![
        install_upm_ci(config),
        install_unity_downloader(config),
        download_editor(config),
    ];
    if let Some(copy) = template.co_dependency_step(platform)? {
        commands.push(copy.to_string());
    }
    commands.push(format!(
        "upm-ci template test -u {} --project-path {}",
        platform.editorpath, template.packagename
    ));

    let name = format!(
        "Test {} {} {}",
        template.name, platform.name, editor.version
    );

    let mut job = JobBuilder::new();
    job.set_name(name)
        .set_agent(platform.agent_package.clone())
        .add_dependencies(dependencies)
        .add_commands(commands)
        .add_artifacts_test_results();

    Ok(GeneratedJob {
        id,
        manifest: job.build(),
    })
}

/// Waits for every template test on every platform for one editor.
pub fn template_test_all_job(
    templates: &[Template],
    platforms: &[Platform],
    editor: &Editor,
    config: &GeneratorConfig,
) -> Result<GeneratedJob> {
    let id = template_job_id_test_all(&editor.version)?;

    let mut dependencies = Vec::with_capacity(templates.len() * platforms.len());
    for template in templates {
        for platform in platforms {
            dependencies.push(template_test_ref(&template.id, &platform.os, &editor.version)?);
        }
    }

    let mut job = JobBuilder::new();
    job.set_name(format!("Test all templates - {}", editor.version))
        .set_agent(config.pack_agent.clone())
        .add_dependencies(dependencies);

    Ok(GeneratedJob {
        id,
        manifest: job.build(),
    })
}
