//! File system utilities.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Writes `content` to `path` through a temp file and a rename.
///
/// A synthesis interrupted halfway never leaves a truncated audio file
/// behind. The temp file sits next to the target so the rename stays on
/// one filesystem.
///
/// # Errors
///
/// Returns an error if the temp file cannot be written or renamed.
pub fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path.file_name().unwrap_or_default().to_string_lossy();
    let temp_path = parent.join(format!(".{file_name}.tmp"));

    fs::write(&temp_path, content)
        .with_context(|| format!("Failed to write temp file: {}", temp_path.display()))?;

    fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to write output file: {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_atomic_write_creates_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("hello.wav");

        atomic_write(&file_path, b"RIFF\x24\x00\x00\x00WAVE").unwrap();

        let content = fs::read(&file_path).unwrap();
        assert_eq!(content, b"RIFF\x24\x00\x00\x00WAVE");
    }

    #[test]
    fn test_atomic_write_overwrites_existing() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("out.au");

        fs::write(&file_path, b"old").unwrap();
        atomic_write(&file_path, b".snd").unwrap();

        assert_eq!(fs::read(&file_path).unwrap(), b".snd");
    }

    #[test]
    fn test_atomic_write_no_temp_file_remains() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("out.wav");

        atomic_write(&file_path, b"data").unwrap();

        assert!(!temp_dir.path().join(".out.wav.tmp").exists());
    }

    #[test]
    fn test_atomic_write_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("missing").join("out.wav");

        assert!(atomic_write(&file_path, b"data").is_err());
    }
}
