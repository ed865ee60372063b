//! Accumulator for a single job's manifest.

use super::manifest::{Agent, ArtifactDeclaration, Artifacts, JobManifest};
use crate::naming::DependencyRef;

/// Builds one [`JobManifest`] through a handful of mutating calls.
///
/// Setters overwrite, `add_*` calls append. Nothing is validated: a builder
/// finalized without a name or agent produces empty values for them.
/// [`JobBuilder::build`] consumes the builder, so a finalized job cannot be
/// mutated further.
#[derive(Debug, Clone, Default)]
pub struct JobBuilder {
    name: String,
    agent: Agent,
    skip_checkout: bool,
    dependencies: Vec<DependencyRef>,
    commands: Vec<String>,
    artifacts: Artifacts,
}

impl JobBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    pub fn set_agent(&mut self, agent: Agent) -> &mut Self {
        self.agent = agent;
        self
    }

    /// Skip the repository checkout (jobs that only download tooling).
    pub fn set_skip_checkout(&mut self, skip: bool) -> &mut Self {
        self.skip_checkout = skip;
        self
    }

    /// Append dependency references. Duplicates are kept.
    pub fn add_dependencies<I>(&mut self, dependencies: I) -> &mut Self
    where
        I: IntoIterator<Item = DependencyRef>,
    {
        self.dependencies.extend(dependencies);
        self
    }

    /// Append commands after any already present, preserving their order.
    pub fn add_commands<I, S>(&mut self, commands: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.commands.extend(commands.into_iter().map(Into::into));
        self
    }

    pub fn add_artifacts_test_results(&mut self) -> &mut Self {
        self.artifacts.push(ArtifactDeclaration::test_results());
        self
    }

    pub fn add_artifacts_packages(&mut self) -> &mut Self {
        self.artifacts.push(ArtifactDeclaration::packages());
        self
    }

    pub fn add_artifacts_unity_revision(&mut self, revision_path: &str) -> &mut Self {
        self.artifacts
            .push(ArtifactDeclaration::unity_revision(revision_path));
        self
    }

    /// Finalize into the manifest.
    pub fn build(self) -> JobManifest {
        JobManifest {
            name: self.name,
            agent: self.agent,
            skip_checkout: self.skip_checkout,
            dependencies: self.dependencies,
            commands: self.commands,
            artifacts: self.artifacts,
        }
    }
}
