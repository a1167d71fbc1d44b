//! Atomic file output (temp file + rename)
//!
//! Content is written to `<file name>.tmp` next to the target and renamed over
//! it once fully flushed, so readers never observe a half-written file and a
//! failed write leaves any previous target untouched.

use crate::{Error, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Write `contents` to `target` atomically
pub fn write_atomic(target: &Path, contents: &[u8]) -> Result<()> {
    let temp_path = temp_path_for(target)?;

    let write_result = (|| -> std::io::Result<()> {
        let mut file = fs::File::create(&temp_path)?;
        file.write_all(contents)?;
        file.sync_all()?;
        Ok(())
    })();

    if let Err(e) = write_result {
        let _ = fs::remove_file(&temp_path);
        return Err(Error::Io(e));
    }

    if let Err(e) = fs::rename(&temp_path, target) {
        let _ = fs::remove_file(&temp_path);
        return Err(Error::Io(e));
    }

    debug!("Wrote {} bytes to {}", contents.len(), target.display());
    Ok(())
}

/// Sibling temp path used while writing `target`
fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let file_name = target
        .file_name()
        .ok_or_else(|| Error::InvalidInput(format!("Not a file path: {}", target.display())))?;

    let mut temp_name = file_name.to_os_string();
    temp_name.push(".tmp");
    Ok(target.with_file_name(temp_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_creates_target_and_removes_temp() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("out.json");

        write_atomic(&target, b"{}").unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), "{}");
        assert!(!temp_dir.path().join("out.json.tmp").exists());
    }

    #[test]
    fn test_write_replaces_existing_content() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("out.json");
        fs::write(&target, "old content that is longer").unwrap();

        write_atomic(&target, b"new").unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), "new");
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("missing").join("out.json");

        let result = write_atomic(&target, b"{}");

        assert!(matches!(result, Err(Error::Io(_))));
        assert!(!target.exists());
    }

    #[test]
    fn test_temp_path_is_sibling() {
        let temp = temp_path_for(Path::new("/data/backup.json")).unwrap();
        assert_eq!(temp, PathBuf::from("/data/backup.json.tmp"));
    }

    #[test]
    fn test_temp_path_rejects_root() {
        assert!(temp_path_for(Path::new("/")).is_err());
    }
}
