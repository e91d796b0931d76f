//! Filesystem probes used by the searches

use getpath_errors::PathError;

/// Read-only filesystem queries.
///
/// The predicates perform a single status query and answer `false` on any
/// error: a missing landmark is an ordinary outcome, not a failure.
pub trait FilesystemProbe: Send + Sync {
    /// Regular file (symlinks followed).
    fn is_file(&self, path: &str) -> bool;

    /// Regular file with at least one execute permission bit.
    fn is_executable_file(&self, path: &str) -> bool;

    /// Directory (symlinks followed).
    fn is_dir(&self, path: &str) -> bool;

    /// Target of the symbolic link at `path`, `None` if it is not a link
    /// or cannot be read.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::Decode`] if the link target is not valid text.
    fn read_link(&self, path: &str) -> Result<Option<String>, PathError>;

    /// At most `limit` bytes of the file, `None` if it cannot be opened or read.
    fn read_file(&self, path: &str, limit: usize) -> Option<Vec<u8>>;

    /// Current working directory, `None` if it cannot be determined.
    fn current_dir(&self) -> Option<String>;
}
