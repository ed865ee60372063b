//! Job node construction.
//!
//! A generator owns one [`JobBuilder`], populates it in any order and
//! finalizes it into an immutable [`JobManifest`].

mod builder;
mod manifest;

#[cfg(test)]
mod tests;

pub use builder::JobBuilder;
pub use manifest::{
    Agent, ArtifactDeclaration, Artifacts, JobManifest, PACKAGES_PATH, TEST_RESULTS_PATH,
};

use crate::naming::JobId;

/// Output of a generator: the job's identifier and its finalized manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedJob {
    pub id: JobId,
    pub manifest: JobManifest,
}
