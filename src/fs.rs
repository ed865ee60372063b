//! Filesystem output for generated job documents.
//!
//! Documents are written to a temporary file next to the target, synced, and
//! renamed over the target, so an interrupted run never leaves a half-written
//! job file behind for the orchestrator to pick up.

use crate::error::{GenError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write `content` to `path`, creating parent directories.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            GenError::OutputError(format!(
                "failed to create directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = temp_path_for(path)?;
    write_and_sync(&temp_path, content.as_bytes())?;

    // rename() replaces an existing target on both POSIX and Windows.
    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        GenError::OutputError(format!("failed to replace '{}': {}", path.display(), e))
    })
}

/// `.{filename}.tmp` in the target's directory.
fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            GenError::OutputError(format!("invalid output path '{}'", target.display()))
        })?;

    Ok(parent.join(format!(".{}.tmp", filename)))
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| {
        GenError::OutputError(format!(
            "failed to create temporary file '{}': {}",
            path.display(),
            e
        ))
    })?;

    let written = file.write_all(content).and_then(|()| file.sync_all());
    written.map_err(|e| {
        let _ = fs::remove_file(path);
        GenError::OutputError(format!(
            "failed to write temporary file '{}': {}",
            path.display(),
            e
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_atomic_write_new_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("_editor.yml");

        atomic_write_file(&file_path, "jobs: {}\n").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "jobs: {}\n");
    }

    #[test]
    fn test_atomic_write_replace_existing() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("_packages.yml");
        fs::write(&file_path, "stale").unwrap();

        atomic_write_file(&file_path, "fresh").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "fresh");
    }

    #[test]
    fn test_atomic_write_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join(".yamato").join("_templates.yml");

        atomic_write_file(&file_path, "content").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "content");
    }

    #[test]
    fn test_atomic_write_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("_editor.yml");

        atomic_write_file(&file_path, "content").unwrap();

        assert!(!temp_dir.path().join("._editor.yml.tmp").exists());
    }

    #[test]
    fn test_temp_path_is_hidden_sibling() {
        let temp = temp_path_for(Path::new("/repo/.yamato/_editor.yml")).unwrap();
        assert_eq!(temp, Path::new("/repo/.yamato/._editor.yml.tmp"));
    }
}
