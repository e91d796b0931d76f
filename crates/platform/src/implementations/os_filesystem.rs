//! Filesystem probes backed by `std::fs`

use getpath_errors::PathError;
use std::fs::{self, File, Metadata};
use std::io::Read;

use crate::encoding::decode_path;
use crate::filesystem::FilesystemProbe;

/// Probes against the real filesystem
#[derive(Debug, Default, Clone, Copy)]
pub struct OsFilesystem;

impl OsFilesystem {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn stat(path: &str) -> Option<Metadata> {
        fs::metadata(path).ok()
    }
}

#[cfg(unix)]
fn has_execute_bit(metadata: &Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode() & 0o111 != 0
}

#[cfg(not(unix))]
fn has_execute_bit(_metadata: &Metadata) -> bool {
    true
}

impl FilesystemProbe for OsFilesystem {
    fn is_file(&self, path: &str) -> bool {
        Self::stat(path).is_some_and(|m| m.is_file())
    }

    fn is_executable_file(&self, path: &str) -> bool {
        Self::stat(path).is_some_and(|m| m.is_file() && has_execute_bit(&m))
    }

    fn is_dir(&self, path: &str) -> bool {
        Self::stat(path).is_some_and(|m| m.is_dir())
    }

    fn read_link(&self, path: &str) -> Result<Option<String>, PathError> {
        match fs::read_link(path) {
            Ok(target) => decode_path(&target, "symbolic link target").map(Some),
            Err(_) => Ok(None),
        }
    }

    fn read_file(&self, path: &str, limit: usize) -> Option<Vec<u8>> {
        let file = File::open(path).ok()?;
        let mut contents = Vec::new();
        let limit = u64::try_from(limit).unwrap_or(u64::MAX);
        match file.take(limit).read_to_end(&mut contents) {
            Ok(_) => Some(contents),
            Err(err) => {
                tracing::debug!(path, error = %err, "failed to read file");
                None
            }
        }
    }

    fn current_dir(&self) -> Option<String> {
        let cwd = std::env::current_dir().ok()?;
        cwd.to_str().map(str::to_owned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_predicates() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("os.py");
        fs::write(&file, b"").unwrap();
        let fs_probe = OsFilesystem::new();

        let dir = temp.path().to_str().unwrap();
        let file = file.to_str().unwrap();
        assert!(fs_probe.is_dir(dir));
        assert!(!fs_probe.is_file(dir));
        assert!(fs_probe.is_file(file));
        assert!(!fs_probe.is_dir(file));
        assert!(!fs_probe.is_file(&format!("{dir}/missing")));
    }

    #[cfg(unix)]
    #[test]
    fn test_executable_bit() {
        use std::os::unix::fs::PermissionsExt;

        let temp = tempdir().unwrap();
        let bin = temp.path().join("python");
        fs::write(&bin, b"#!/bin/sh\n").unwrap();
        let bin_str = bin.to_str().unwrap();
        let fs_probe = OsFilesystem::new();

        fs::set_permissions(&bin, fs::Permissions::from_mode(0o644)).unwrap();
        assert!(!fs_probe.is_executable_file(bin_str));

        fs::set_permissions(&bin, fs::Permissions::from_mode(0o755)).unwrap();
        assert!(fs_probe.is_executable_file(bin_str));

        // directories never count, whatever their mode
        assert!(!fs_probe.is_executable_file(temp.path().to_str().unwrap()));
    }

    #[cfg(unix)]
    #[test]
    fn test_read_link() {
        let temp = tempdir().unwrap();
        let link = temp.path().join("python3");
        std::os::unix::fs::symlink("python3.9", &link).unwrap();
        let fs_probe = OsFilesystem::new();

        assert_eq!(
            fs_probe.read_link(link.to_str().unwrap()).unwrap().as_deref(),
            Some("python3.9")
        );
        assert_eq!(
            fs_probe.read_link(temp.path().to_str().unwrap()).unwrap(),
            None
        );
    }

    #[test]
    fn test_read_file_limit() {
        let temp = tempdir().unwrap();
        let marker = temp.path().join("pybuilddir.txt");
        fs::write(&marker, b"build/lib.linux-x86_64-3.9").unwrap();
        let fs_probe = OsFilesystem::new();

        let contents = fs_probe.read_file(marker.to_str().unwrap(), 5).unwrap();
        assert_eq!(contents, b"build");
        assert!(fs_probe
            .read_file(temp.path().join("absent").to_str().unwrap(), 5)
            .is_none());
    }
}
