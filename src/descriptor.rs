//! Typed descriptors for editors, platforms, packages and templates.
//!
//! Descriptors arrive from the metafile and are read-only. Required fields
//! are enforced by deserialization; optional fields carry defaults or are
//! modelled as explicit options.

use crate::error::{GenError, Result};
use crate::job::Agent;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_yaml::Value;

/// An editor version to test against.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Editor {
    /// Must be a YAML string; quote numeric versions (`"2022.3"`).
    #[serde(deserialize_with = "quoted_version")]
    pub version: String,

    /// Revision selector passed to `unity-downloader-cli`.
    #[serde(default)]
    pub cmd: Option<String>,
}

fn quoted_version<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<String, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::String(version) => Ok(version),
        Value::Number(number) => Err(D::Error::custom(format!(
            "editor version {} must be quoted, e.g. version: \"{}\"",
            number, number
        ))),
        _ => Err(D::Error::custom("editor version must be a string")),
    }
}

impl Editor {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            cmd: None,
        }
    }

    /// Selector for `unity-downloader-cli`, `-u {version}` unless overridden.
    pub fn downloader_selector(&self) -> String {
        match &self.cmd {
            Some(cmd) => cmd.clone(),
            None => format!("-u {}", self.version),
        }
    }
}

/// A platform jobs run on.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Platform {
    /// Display name, used in job names.
    pub name: String,

    /// Short key, used in job identifiers.
    pub os: String,

    /// Agent for test jobs on this platform.
    pub agent_package: Agent,

    /// Editor location once `unity-downloader-cli` has fetched it.
    pub editorpath: String,

    /// Copies co-dependent packages into place before a template test.
    #[serde(default)]
    pub copycmd: Option<String>,

    /// Editor components to download.
    #[serde(default = "default_components")]
    pub components: Vec<String>,
}

fn default_components() -> Vec<String> {
    vec!["editor".to_string()]
}

impl Platform {
    pub fn copy_command(&self) -> Result<&str> {
        self.copycmd
            .as_deref()
            .ok_or_else(|| GenError::missing_field(format!("platform '{}'", self.os), "copycmd"))
    }
}

/// A package that is packed and tested.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Package {
    pub id: String,
    pub name: String,

    /// Package directory relative to the repository root.
    pub directory: String,

    /// Ids of packages this package needs packed before it can be tested.
    #[serde(default)]
    pub dependencies: Vec<String>,
}

/// Whether a template needs co-dependent packages copied in before testing.
///
/// Read from a truthy flag: absent, `null`, `false`, zero, the empty string
/// and empty sequences or mappings all mean [`CoDependency::None`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoDependency {
    #[default]
    None,
    Present,
}

impl<'de> Deserialize<'de> for CoDependency {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(match value {
            Some(value) if is_truthy(&value) => CoDependency::Present,
            _ => CoDependency::None,
        })
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64() != Some(0.0),
        Value::String(text) => !text.is_empty(),
        Value::Sequence(items) => !items.is_empty(),
        Value::Mapping(entries) => !entries.is_empty(),
        Value::Tagged(tagged) => is_truthy(&tagged.value),
    }
}

/// A project template that is tested against packed packages.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Template {
    pub id: String,
    pub name: String,

    /// Project path handed to `upm-ci template test`.
    pub packagename: String,

    /// Ids of packages whose pack jobs the template test waits for.
    #[serde(default)]
    pub dependencies: Vec<String>,

    #[serde(default, rename = "hascodependencies")]
    pub co_dependency: CoDependency,
}

impl Template {
    /// The extra command to run on `platform` before testing, if any.
    pub fn co_dependency_step<'a>(&self, platform: &'a Platform) -> Result<Option<&'a str>> {
        match self.co_dependency {
            CoDependency::None => Ok(None),
            CoDependency::Present => platform.copy_command().map(Some),
        }
    }
}
