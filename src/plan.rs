//! Expands a metafile into one document per output file.

use crate::config::GeneratorConfig;
use crate::document::JobDocument;
use crate::error::Result;
use crate::generators::{
    GeneratedJob, editor_priming_job, package_pack_job, package_test_all_job, package_test_job,
    template_test_all_job, template_test_job,
};
use crate::metafile::Metafile;
use crate::naming::JobFile;
use tracing::debug;

/// Every job generated from a metafile, grouped by output file.
#[derive(Debug, Clone)]
pub struct Plan {
    pub editor: JobDocument,
    pub packages: JobDocument,
    pub templates: JobDocument,
}

impl Plan {
    pub fn documents(&self) -> [&JobDocument; 3] {
        [&self.editor, &self.packages, &self.templates]
    }

    pub fn job_count(&self) -> usize {
        self.documents().iter().map(|d| d.len()).sum()
    }
}

/// Run every generator over the descriptor matrix.
///
/// - editor: one priming job per (editor, platform)
/// - packages: one pack job per package, one test job per (package, platform,
///   editor) and, when there are packages, one aggregate per editor
/// - templates: one test job per (template, platform, editor) and, when there
///   are templates, one aggregate per editor
pub fn plan(metafile: &Metafile, config: &GeneratorConfig) -> Result<Plan> {
    let mut editor = JobDocument::new(JobFile::Editor);
    let mut packages = JobDocument::new(JobFile::Packages);
    let mut templates = JobDocument::new(JobFile::Templates);

    for ed in &metafile.editors {
        for platform in &metafile.platforms {
            add(&mut editor, editor_priming_job(ed, platform, config)?);
        }
    }

    for package in &metafile.packages {
        add(&mut packages, package_pack_job(package, config)?);
        for ed in &metafile.editors {
            for platform in &metafile.platforms {
                add(
                    &mut packages,
                    package_test_job(package, platform, ed, config)?,
                );
            }
        }
    }
    if !metafile.packages.is_empty() {
        for ed in &metafile.editors {
            add(
                &mut packages,
                package_test_all_job(&metafile.packages, &metafile.platforms, ed, config)?,
            );
        }
    }

    for template in &metafile.templates {
        for ed in &metafile.editors {
            for platform in &metafile.platforms {
                add(
                    &mut templates,
                    template_test_job(template, platform, ed, config)?,
                );
            }
        }
    }
    if !metafile.templates.is_empty() {
        for ed in &metafile.editors {
            add(
                &mut templates,
                template_test_all_job(&metafile.templates, &metafile.platforms, ed, config)?,
            );
        }
    }

    Ok(Plan {
        editor,
        packages,
        templates,
    })
}

fn add(document: &mut JobDocument, job: GeneratedJob) {
    debug!(file = document.file().path(), id = %job.id, name = %job.manifest.name, "generated job");
    document.insert(job);
}
