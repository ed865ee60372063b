use super::{GeneratedJob, download_editor, install_unity_downloader, install_upm_ci};
use crate::config::GeneratorConfig;
use crate::descriptor::{Editor, Package, Platform};
use crate::error::Result;
use crate::job::JobBuilder;
use crate::naming::{
    editor_ref, package_job_id_pack, package_job_id_test, package_job_id_test_all,
    package_pack_ref, package_test_ref,
};

/// Packs one package with `upm-ci`.
pub fn package_pack_job(package: &Package, config: &GeneratorConfig) -> Result<GeneratedJob> {
    let id = package_job_id_pack(&package.id)?;

    let mut job = JobBuilder::new();
    job.set_name(format!("Pack {}", package.name))
        .set_agent(config.pack_agent.clone())
        .add_commands([
            install_upm_ci(config),
            format!("upm-ci package pack --package-path {}", package.directory),
        ])
        .add_artifacts_packages();

    Ok(GeneratedJob {
        id,
        manifest: job.build(),
    })
}

/// Tests one package on (platform, editor) against its own packed output and
/// the packed output of its dependencies.
pub fn package_test_job(
    package: &Package,
    platform: &Platform,
    editor: &Editor,
    config: &GeneratorConfig,
) -> Result<GeneratedJob> {
    let id = package_job_id_test(&package.id, &platform.os, &editor.version)?;

    let mut dependencies = vec![
        editor_ref(&editor.version, &platform.os)?,
        package_pack_ref(&package.id)?,
    ];
    for dependency in &package.dependencies {
        dependencies.push(package_pack_ref(dependency)?);
    }

    let commands = [
        install_upm_ci(config),
        install_unity_downloader(config),
        download_editor(config),
        format!(
            "upm-ci package test -u {} --package-path {}",
            platform.editorpath, package.directory
        ),
    ];

    let name = format!(
        "Test {} {} {}",
        package.name, platform.name, editor.version
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

/// Waits for every package test on every platform for one editor.
pub fn package_test_all_job(
    packages: &[Package],
    platforms: &[Platform],
    editor: &Editor,
    config: &GeneratorConfig,
) -> Result<GeneratedJob> {
    let id = package_job_id_test_all(&editor.version)?;

    let mut dependencies = Vec::with_capacity(packages.len() * platforms.len());
    for package in packages {
        for platform in platforms {
            dependencies.push(package_test_ref(&package.id, &platform.os, &editor.version)?);
        }
    }

    let mut job = JobBuilder::new();
    job.set_name(format!("Pack and test all packages - {}", editor.version))
        .set_agent(config.pack_agent.clone())
        .add_dependencies(dependencies);

    Ok(GeneratedJob {
        id,
        manifest: job.build(),
    })
}
