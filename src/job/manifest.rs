//! Finalized job manifest and the values it is made of.

use crate::naming::DependencyRef;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Glob collected by the `logs` artifact of test jobs.
pub const TEST_RESULTS_PATH: &str = "upm-ci~/test-results/**/*";

/// Glob collected by the `packages` artifact of pack jobs.
pub const PACKAGES_PATH: &str = "upm-ci~/packages/**/*";

/// Execution agent selector.
///
/// Accepts either a bare label or the structured form Yamato uses for VM
/// agents:
///
/// ```yaml
/// agent:
///   type: Unity::VM
///   image: package-ci/ubuntu:stable
///   flavor: b1.large
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Agent {
    Label(String),
    Spec {
        #[serde(rename = "type")]
        kind: String,
        image: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        flavor: Option<String>,
    },
}

impl Agent {
    pub fn vm(image: impl Into<String>, flavor: impl Into<String>) -> Self {
        Agent::Spec {
            kind: "Unity::VM".to_string(),
            image: image.into(),
            flavor: Some(flavor.into()),
        }
    }
}

impl Default for Agent {
    fn default() -> Self {
        Agent::Label(String::new())
    }
}

/// One named artifact collected after the job runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactDeclaration {
    pub name: String,
    pub paths: Vec<String>,
}

impl ArtifactDeclaration {
    pub fn test_results() -> Self {
        Self {
            name: "logs".to_string(),
            paths: vec![TEST_RESULTS_PATH.to_string()],
        }
    }

    pub fn packages() -> Self {
        Self {
            name: "packages".to_string(),
            paths: vec![PACKAGES_PATH.to_string()],
        }
    }

    pub fn unity_revision(revision_path: &str) -> Self {
        Self {
            name: "unity_revision.file".to_string(),
            paths: vec![revision_path.to_string()],
        }
    }
}

#[derive(Serialize)]
struct ArtifactPaths<'a> {
    paths: &'a [&'a String],
}

/// Artifact declarations in the order they were added.
///
/// Rendered as a mapping from artifact name to its paths. Declaring the same
/// artifact twice keeps both entries; they render under one key with the
/// paths of every declaration in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Artifacts(Vec<ArtifactDeclaration>);

impl Artifacts {
    pub fn push(&mut self, declaration: ArtifactDeclaration) {
        self.0.push(declaration);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ArtifactDeclaration> {
        self.0.iter()
    }
}

impl Serialize for Artifacts {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut grouped: Vec<(&str, Vec<&String>)> = Vec::new();
        for declaration in &self.0 {
            let name = declaration.name.as_str();
            match grouped.iter().position(|(existing, _)| *existing == name) {
                Some(index) => grouped[index].1.extend(declaration.paths.iter()),
                None => {
                    let paths = declaration.paths.iter().collect();
                    grouped.push((name, paths));
                }
            }
        }

        let mut map = serializer.serialize_map(Some(grouped.len()))?;
        for (name, paths) in &grouped {
            map.serialize_entry(name, &ArtifactPaths { paths })?;
        }
        map.end()
    }
}

/// Declarative description of one CI job, ready for YAML rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct JobManifest {
    pub name: String,

    pub agent: Agent,

    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub skip_checkout: bool,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<DependencyRef>,

    /// Executed sequentially by the orchestrator.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub commands: Vec<String>,

    #[serde(skip_serializing_if = "Artifacts::is_empty")]
    pub artifacts: Artifacts,
}
