//! Naming scheme for jobs and the files they live in.
//!
//! Every generator computes its own identifier and the identifiers of the jobs
//! it depends on with these functions. They are pure: the same category and
//! keys always give the same string, so generators never need to see each
//! other's output.
//!
//! An identifier is `{category prefix}:{key}:{key}...`. Keys are restricted to
//! `[A-Za-z0-9._-]`, which keeps the separator out of them and makes the
//! mapping from (category, keys) to identifier injective.

mod types;


pub use types::{DependencyRef, ID_SEPARATOR, JobCategory, JobFile, JobId, REFERENCE_DELIMITER};

use crate::error::{GenError, Result};
use regex::Regex;
use std::sync::LazyLock;

static KEY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9._\-]+$").expect("Invalid key regex"));

/// Compute the identifier of the job in `category` distinguished by `keys`.
///
/// `keys` must follow [`JobCategory::key_names`] in count and order.
pub fn job_id_for(category: JobCategory, keys: &[&str]) -> Result<JobId> {
    let expected = category.key_names();
    if keys.len() != expected.len() {
        return Err(GenError::InvalidKey {
            category: category.to_string(),
            key: keys.join(","),
            reason: format!(
                "expected {} key(s) ({}), got {}",
                expected.len(),
                expected.join(", "),
                keys.len()
            ),
        });
    }

    let mut id = String::from(category.prefix());
    for key in keys {
        validate_key(category, key)?;
        id.push(ID_SEPARATOR);
        id.push_str(key);
    }

    Ok(JobId::new(id))
}

/// File reference of the output file that holds `category` jobs.
pub fn file_reference_for(category: JobCategory) -> &'static str {
    category.file().path()
}

/// Cross-file reference to the job in `category` distinguished by `keys`.
pub fn dependency_ref(category: JobCategory, keys: &[&str]) -> Result<DependencyRef> {
    Ok(DependencyRef {
        file: category.file(),
        id: job_id_for(category, keys)?,
    })
}

fn validate_key(category: JobCategory, key: &str) -> Result<()> {
    if KEY_REGEX.is_match(key) {
        return Ok(());
    }

    let reason = if key.is_empty() {
        "key is empty".to_string()
    } else {
        "keys may only contain ASCII letters, digits, '.', '_' and '-'".to_string()
    };

    Err(GenError::InvalidKey {
        category: category.to_string(),
        key: key.to_string(),
        reason,
    })
}

// ============================================================================
// Per-category helpers
// ============================================================================

pub fn editor_job_id(editor_version: &str, platform_os: &str) -> Result<JobId> {
    job_id_for(JobCategory::EditorPriming, &[editor_version, platform_os])
}

pub fn package_job_id_pack(package_id: &str) -> Result<JobId> {
    job_id_for(JobCategory::PackagePack, &[package_id])
}

pub fn package_job_id_test(
    package_id: &str,
    platform_os: &str,
    editor_version: &str,
) -> Result<JobId> {
    job_id_for(
        JobCategory::PackageTest,
        &[package_id, platform_os, editor_version],
    )
}

pub fn package_job_id_test_all(editor_version: &str) -> Result<JobId> {
    job_id_for(JobCategory::PackageTestAll, &[editor_version])
}

pub fn template_job_id_test(
    template_id: &str,
    platform_os: &str,
    editor_version: &str,
) -> Result<JobId> {
    job_id_for(
        JobCategory::TemplateTest,
        &[template_id, platform_os, editor_version],
    )
}

pub fn template_job_id_test_all(editor_version: &str) -> Result<JobId> {
    job_id_for(JobCategory::TemplateTestAll, &[editor_version])
}

/// Reference to the editor priming job for (editor version, platform os).
pub fn editor_ref(editor_version: &str, platform_os: &str) -> Result<DependencyRef> {
    dependency_ref(JobCategory::EditorPriming, &[editor_version, platform_os])
}

/// Reference to the pack job of a package.
pub fn package_pack_ref(package_id: &str) -> Result<DependencyRef> {
    dependency_ref(JobCategory::PackagePack, &[package_id])
}

pub fn package_test_ref(
    package_id: &str,
    platform_os: &str,
    editor_version: &str,
) -> Result<DependencyRef> {
    dependency_ref(
        JobCategory::PackageTest,
        &[package_id, platform_os, editor_version],
    )
}

pub fn template_test_ref(
    template_id: &str,
    platform_os: &str,
    editor_version: &str,
) -> Result<DependencyRef> {
    dependency_ref(
        JobCategory::TemplateTest,
        &[template_id, platform_os, editor_version],
    )
}
