//! Descriptor metafile.
//!
//! The metafile lists every editor, platform, package and template the
//! generators expand over:
//!
//! ```yaml
//! editors:
//!   - version: "2022.3"
//!   - version: trunk
//! platforms:
//!   - name: Windows
//!     os: win
//!     agent_package: { type: Unity::VM, image: package-ci/win10:stable, flavor: b1.large }
//!     editorpath: .\.Editor
//!     copycmd: copy upm-ci~\packages\*.tgz .Editor\Data\Resources\PackageManager\Editor
//! packages:
//!   - id: core
//!     name: Core RP Library
//!     directory: com.unity.render-pipelines.core
//! templates:
//!   - id: universal
//!     name: Universal
//!     packagename: com.unity.template.universal
//!     dependencies: [core]
//! ```
//!
//! Dependency ids are not checked against the package list; a reference to an
//! unknown package resolves to nothing in the orchestrator.

use crate::descriptor::{Editor, Package, Platform, Template};
use crate::error::{GenError, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Metafile {
    pub editors: Vec<Editor>,
    pub platforms: Vec<Platform>,
    pub packages: Vec<Package>,
    pub templates: Vec<Template>,
}

impl Metafile {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            GenError::UserError(format!(
                "failed to read metafile '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let metafile: Metafile = serde_yaml::from_str(yaml)
            .map_err(|e| GenError::UserError(format!("failed to parse metafile YAML: {}", e)))?;

        metafile.validate()?;
        Ok(metafile)
    }

    /// Reject descriptor lists whose keys repeat. Two editors with the same
    /// version (or two platforms with the same os, ...) would generate two
    /// different jobs under one identifier.
    pub fn validate(&self) -> Result<()> {
        ensure_unique("editor version", &self.editors, |e| &e.version)?;
        ensure_unique("platform os", &self.platforms, |p| &p.os)?;
        ensure_unique("package id", &self.packages, |p| &p.id)?;
        ensure_unique("template id", &self.templates, |t| &t.id)?;
        Ok(())
    }
}

fn ensure_unique<T>(what: &str, items: &[T], key: impl Fn(&T) -> &String) -> Result<()> {
    let mut seen = HashSet::new();
    for item in items {
        let key = key(item);
        if !seen.insert(key) {
            return Err(GenError::UserError(format!(
                "metafile validation failed: duplicate {} '{}'",
                what, key
            )));
        }
    }
    Ok(())
}
