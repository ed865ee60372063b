//! Identifier types shared by every generator.

use serde::{Serialize, Serializer};
use std::fmt;

/// Delimiter between a file reference and a job identifier.
pub const REFERENCE_DELIMITER: char = '#';

/// Separator between the parts of a job identifier.
pub const ID_SEPARATOR: char = ':';

/// Logical output file a job category is emitted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum JobFile {
    Editor,
    Packages,
    Templates,
}

impl JobFile {
    /// Repository-relative path of the file. This is the file reference
    /// embedded in every cross-file dependency.
    pub fn path(self) -> &'static str {
        match self {
            JobFile::Editor => ".yamato/_editor.yml",
            JobFile::Packages => ".yamato/_packages.yml",
            JobFile::Templates => ".yamato/_templates.yml",
        }
    }
}

impl fmt::Display for JobFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Job category. Each category owns a fixed prefix, a fixed key arity and
/// exactly one output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum JobCategory {
    /// Resolves an editor revision for one (editor version, platform).
    EditorPriming,
    /// Packs one package.
    PackagePack,
    /// Tests one package on one platform and editor.
    PackageTest,
    /// Aggregates all package tests for one editor.
    PackageTestAll,
    /// Tests one template on one platform and editor.
    TemplateTest,
    /// Aggregates all template tests for one editor.
    TemplateTestAll,
}

impl JobCategory {
    pub const ALL: [JobCategory; 6] = [
        JobCategory::EditorPriming,
        JobCategory::PackagePack,
        JobCategory::PackageTest,
        JobCategory::PackageTestAll,
        JobCategory::TemplateTest,
        JobCategory::TemplateTestAll,
    ];

    /// Leading part of every identifier in this category.
    pub fn prefix(self) -> &'static str {
        match self {
            JobCategory::EditorPriming => "editor:priming",
            JobCategory::PackagePack => "package:pack",
            JobCategory::PackageTest => "package:test",
            JobCategory::PackageTestAll => "package:test_all",
            JobCategory::TemplateTest => "template:test",
            JobCategory::TemplateTestAll => "template:test_all",
        }
    }

    /// Names of the key fields, in the order they appear in the identifier.
    pub fn key_names(self) -> &'static [&'static str] {
        match self {
            JobCategory::EditorPriming => &["editor_version", "platform_os"],
            JobCategory::PackagePack => &["package_id"],
            JobCategory::PackageTest => &["package_id", "platform_os", "editor_version"],
            JobCategory::PackageTestAll => &["editor_version"],
            JobCategory::TemplateTest => &["template_id", "platform_os", "editor_version"],
            JobCategory::TemplateTestAll => &["editor_version"],
        }
    }

    /// Output file for this category.
    pub fn file(self) -> JobFile {
        match self {
            Self::EditorPriming => JobFile::Editor,
            Self::PackagePack | Self::PackageTest | Self::PackageTestAll => JobFile::Packages,
            Self::TemplateTest | Self::TemplateTestAll => JobFile::Templates,
        }
    }
}

impl fmt::Display for JobCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// Deterministic identifier of one job within its category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct JobId(String);

impl JobId {
    /// Only the naming functions construct identifiers.
    pub(super) fn new(id: String) -> Self {
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A job in some output file, addressed as `{file}#{job id}`.
///
/// Nothing checks that the target job is ever produced; a reference built
/// from keys no generator uses resolves to nothing in the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DependencyRef {
    pub file: JobFile,
    pub id: JobId,
}

impl fmt::Display for DependencyRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.file.path(), REFERENCE_DELIMITER, self.id)
    }
}

impl Serialize for DependencyRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
