//! Per-file aggregation of generated jobs.
//!
//! A [`JobDocument`] collects the jobs of every category that shares one
//! output file and renders them as a YAML mapping from job identifier to
//! manifest, which is the form the orchestrator loads.

use crate::error::{GenError, Result};
use crate::fs::atomic_write_file;
use crate::job::{GeneratedJob, JobManifest};
use crate::naming::{JobFile, JobId};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// First line of every generated document.
pub const GENERATED_HEADER: &str = "# Generated by yamato-jobs. Do not edit by hand.\n";

/// A rendered document and the path it is written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    pub path: PathBuf,
    pub content: String,
    pub jobs: usize,
}

impl RenderedDocument {
    /// Write the document atomically, creating parent directories.
    pub fn write(&self) -> Result<()> {
        atomic_write_file(&self.path, &self.content)?;
        info!(path = %self.path.display(), jobs = self.jobs, "wrote job document");
        Ok(())
    }
}

/// Jobs destined for one output file, ordered by identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct JobDocument {
    file: JobFile,
    jobs: BTreeMap<JobId, JobManifest>,
}

impl JobDocument {
    pub fn new(file: JobFile) -> Self {
        Self {
            file,
            jobs: BTreeMap::new(),
        }
    }

    pub fn file(&self) -> JobFile {
        self.file
    }

    /// Add a job. A job with the same identifier is replaced.
    pub fn insert(&mut self, job: GeneratedJob) {
        if let Some(previous) = self.jobs.insert(job.id.clone(), job.manifest) {
            warn!(
                file = self.file.path(),
                id = %job.id,
                replaced = %previous.name,
                "duplicate job identifier, keeping the last job generated"
            );
        }
    }

    pub fn get(&self, id: &JobId) -> Option<&JobManifest> {
        self.jobs.get(id)
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    pub fn jobs(&self) -> impl Iterator<Item = (&JobId, &JobManifest)> {
        self.jobs.iter()
    }

    /// Render the document, header included.
    pub fn to_yaml(&self) -> Result<String> {
        let body = serde_yaml::to_string(&self.jobs).map_err(|e| {
            GenError::OutputError(format!(
                "failed to render '{}' as YAML: {}",
                self.file.path(),
                e
            ))
        })?;

        Ok(format!("{}{}", GENERATED_HEADER, body))
    }

    /// Path the document is written to below `root`.
    pub fn path_in(&self, root: &Path) -> PathBuf {
        root.join(self.file.path())
    }

    /// Render the document for writing below `root`.
    pub fn render(&self, root: &Path) -> Result<RenderedDocument> {
        Ok(RenderedDocument {
            path: self.path_in(root),
            content: self.to_yaml()?,
            jobs: self.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::job::{Agent, JobBuilder};
    use crate::naming::{editor_job_id, editor_ref, package_job_id_pack, template_job_id_test};
    use tempfile::TempDir;

    fn job(id: JobId, name: &str) -> GeneratedJob {
        let mut builder = JobBuilder::new();
        builder
            .set_name(name)
            .set_agent(Agent::Label("agent".to_string()))
            .add_commands(["echo hi"]);
        GeneratedJob {
            id,
            manifest: builder.build(),
        }
    }

    #[test]
    fn jobs_are_keyed_by_identifier() {
        let mut document = JobDocument::new(JobFile::Editor);
        let id = editor_job_id("2022.3", "win").unwrap();
        document.insert(job(id.clone(), "priming"));

        assert_eq!(document.len(), 1);
        assert_eq!(document.get(&id).unwrap().name, "priming");
    }

    #[test]
    fn duplicate_identifier_replaces_earlier_job() {
        let mut document = JobDocument::new(JobFile::Editor);
        let id = editor_job_id("2022.3", "win").unwrap();
        document.insert(job(id.clone(), "first"));
        document.insert(job(id.clone(), "second"));

        assert_eq!(document.len(), 1);
        assert_eq!(document.get(&id).unwrap().name, "second");
    }

    #[test]
    fn yaml_is_ordered_and_headed() {
        let mut document = JobDocument::new(JobFile::Editor);
        document.insert(job(editor_job_id("2023.1", "win").unwrap(), "later"));
        document.insert(job(editor_job_id("2022.3", "win").unwrap(), "earlier"));

        let yaml = document.to_yaml().unwrap();
        assert!(yaml.starts_with(GENERATED_HEADER));
        let earlier = yaml.find("earlier").unwrap();
        let later = yaml.find("later").unwrap();
        assert!(earlier < later);
    }

    #[test]
    fn yaml_parses_back_to_job_map() {
        let mut document = JobDocument::new(JobFile::Templates);
        let id = template_job_id_test("T1", "win", "2022.3").unwrap();
        let mut builder = JobBuilder::new();
        builder
            .set_name("Test Core Windows 2022.3")
            .add_dependencies([editor_ref("2022.3", "win").unwrap()]);
        document.insert(GeneratedJob {
            id: id.clone(),
            manifest: builder.build(),
        });

        let yaml = document.to_yaml().unwrap();
        let value: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();
        let node = &value[id.as_str()];
        assert_eq!(node["name"], "Test Core Windows 2022.3");
        assert_eq!(
            node["dependencies"][0],
            ".yamato/_editor.yml#editor:priming:2022.3:win"
        );
    }

    #[test]
    fn rendered_document_is_written_at_file_reference() {
        let root = TempDir::new().unwrap();
        let mut document = JobDocument::new(JobFile::Packages);
        document.insert(job(package_job_id_pack("core").unwrap(), "Pack"));

        let rendered = document.render(root.path()).unwrap();
        assert_eq!(rendered.path, root.path().join(".yamato/_packages.yml"));
        assert_eq!(rendered.jobs, 1);
        assert!(!rendered.path.exists());

        rendered.write().unwrap();
        let written = std::fs::read_to_string(&rendered.path).unwrap();
        assert_eq!(written, document.to_yaml().unwrap());
    }
}
