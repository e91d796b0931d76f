//! Bounded path text and the primitives every search stage is built from
//!
//! Paths are kept as text rather than `PathBuf` because the algorithm
//! works on separator positions: joining, cutting back to a previous
//! length, and dropping trailing segments. Every mutation is checked
//! against the buffer capacity and fails with [`PathError::TooLong`]
//! instead of truncating. A failed allocation is reported as
//! [`PathError::OutOfMemory`].

use std::fmt;
use std::path::PathBuf;

use getpath_errors::PathError;
use serde::{Serialize, Serializer};

/// Directory separator used inside path text.
pub const SEP: char = '/';

/// Delimiter between entries of a path list (`PATH`, `PYTHONPATH`, ...).
pub const DELIM: char = if cfg!(windows) { ';' } else { ':' };

/// Longest path, in bytes, any buffer may hold.
#[cfg(unix)]
#[allow(clippy::cast_sign_loss)]
pub const MAX_PATH_LEN: usize = libc::PATH_MAX as usize;

#[cfg(not(unix))]
pub const MAX_PATH_LEN: usize = 4096;

/// Whether `text` names an absolute path.
#[must_use]
pub fn is_absolute(text: &str) -> bool {
    text.starts_with(SEP)
}

/// Owned path text with a fixed upper bound on its length.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoundedPath {
    text: String,
    capacity: usize,
}

impl BoundedPath {
    /// An empty path bounded by [`MAX_PATH_LEN`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(MAX_PATH_LEN)
    }

    /// An empty path bounded by `capacity` bytes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            text: String::new(),
            capacity,
        }
    }

    /// Copy `text` into a new buffer of the given capacity.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::TooLong`] if `text` does not fit.
    pub fn from_text(text: &str, capacity: usize) -> Result<Self, PathError> {
        let mut path = Self::with_capacity(capacity);
        path.set(text)?;
        Ok(path)
    }

    /// Replace the contents with `text`.
    ///
    /// On failure the buffer is left empty, never holding a partial copy.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::TooLong`] if `text` does not fit.
    pub fn set(&mut self, text: &str) -> Result<(), PathError> {
        self.text.clear();
        if text.len() > self.capacity {
            return Err(PathError::too_long(text));
        }
        self.reserve(text.len())?;
        self.text.push_str(text);
        Ok(())
    }

    /// Append a path component.
    ///
    /// An absolute `component` replaces the current contents. Otherwise a
    /// separator is inserted unless the buffer is empty or already ends
    /// with one. The buffer is unchanged when the result would not fit.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::TooLong`] if the joined path exceeds the capacity.
    pub fn join(&mut self, component: &str) -> Result<(), PathError> {
        if is_absolute(component) {
            if component.len() > self.capacity {
                return Err(PathError::too_long(component));
            }
            self.reserve(component.len().saturating_sub(self.text.len()))?;
            self.text.clear();
            self.text.push_str(component);
            return Ok(());
        }

        let needs_sep = !self.text.is_empty() && !self.text.ends_with(SEP);
        let total = self.text.len() + usize::from(needs_sep) + component.len();
        if total > self.capacity {
            return Err(PathError::too_long(format!("{}{SEP}{component}", self.text)));
        }
        self.reserve(total - self.text.len())?;
        if needs_sep {
            self.text.push(SEP);
        }
        self.text.push_str(component);
        Ok(())
    }

    /// Value-returning form of [`join`](Self::join).
    ///
    /// # Errors
    ///
    /// Returns [`PathError::TooLong`] if the joined path exceeds the capacity.
    pub fn joined(&self, component: &str) -> Result<Self, PathError> {
        let mut path = self.clone();
        path.join(component)?;
        Ok(path)
    }

    /// Append raw text with no separator handling (file suffixes).
    ///
    /// # Errors
    ///
    /// Returns [`PathError::TooLong`] if the result exceeds the capacity.
    pub fn push_suffix(&mut self, suffix: &str) -> Result<(), PathError> {
        if self.text.len() + suffix.len() > self.capacity {
            return Err(PathError::too_long(format!("{}{suffix}", self.text)));
        }
        self.reserve(suffix.len())?;
        self.text.push_str(suffix);
        Ok(())
    }

    /// Grow the backing storage, reporting allocation failure as an error.
    fn reserve(&mut self, additional: usize) -> Result<(), PathError> {
        self.text
            .try_reserve(additional)
            .map_err(|_| PathError::OutOfMemory)
    }

    /// Drop the last segment together with the separator before it.
    ///
    /// Text without any separator becomes empty, and so does `"/"`.
    pub fn truncate_to_parent(&mut self) {
        let cut = self.text.rfind(SEP).unwrap_or(0);
        self.text.truncate(cut);
    }

    /// Apply [`truncate_to_parent`](Self::truncate_to_parent) `count` times.
    pub fn strip_segments(&mut self, count: usize) {
        for _ in 0..count {
            self.truncate_to_parent();
        }
    }

    /// Value-returning form of [`truncate_to_parent`](Self::truncate_to_parent).
    #[must_use]
    pub fn parent(&self) -> Self {
        let mut path = self.clone();
        path.truncate_to_parent();
        path
    }

    /// Cut back to a length previously observed with [`len`](Self::len).
    pub fn truncate(&mut self, len: usize) {
        if len < self.text.len() && self.text.is_char_boundary(len) {
            self.text.truncate(len);
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn is_absolute(&self) -> bool {
        is_absolute(&self.text)
    }

    #[must_use]
    pub fn ends_with_sep(&self) -> bool {
        self.text.ends_with(SEP)
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }

    #[must_use]
    pub fn to_path_buf(&self) -> PathBuf {
        PathBuf::from(&self.text)
    }
}

impl Default for BoundedPath {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<str> for BoundedPath {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for BoundedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl Serialize for BoundedPath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(text: &str) -> BoundedPath {
        BoundedPath::from_text(text, MAX_PATH_LEN).unwrap()
    }

    #[test]
    fn test_join_inserts_single_separator() {
        let mut a = path("/a");
        a.join("b").unwrap();
        let mut b = path("/a/");
        b.join("b").unwrap();
        assert_eq!(a.as_str(), "/a/b");
        assert_eq!(a, b);
    }

    #[test]
    fn test_join_absolute_replaces() {
        let mut p = path("/usr/local");
        p.join("/opt/runtime").unwrap();
        assert_eq!(p.as_str(), "/opt/runtime");
    }

    #[test]
    fn test_join_onto_empty() {
        let mut p = BoundedPath::new();
        p.join("python").unwrap();
        assert_eq!(p.as_str(), "python");
    }

    #[test]
    fn test_join_empty_component_adds_separator() {
        let mut p = path("/work");
        p.join("").unwrap();
        assert_eq!(p.as_str(), "/work/");
    }

    #[test]
    fn test_join_too_long_leaves_buffer_untouched() {
        let mut p = BoundedPath::from_text("/abc", 8).unwrap();
        let err = p.join("defgh").unwrap_err();
        assert!(matches!(err, PathError::TooLong { .. }));
        assert_eq!(p.as_str(), "/abc");

        // exactly at capacity is fine
        p.join("def").unwrap();
        assert_eq!(p.as_str(), "/abc/def");
    }

    #[test]
    fn test_set_failure_clears() {
        let mut p = BoundedPath::from_text("/x", 4).unwrap();
        assert!(p.set("/toolong").is_err());
        assert!(p.is_empty());
    }

    #[test]
    fn test_truncate_to_parent() {
        let mut p = path("/opt/runtime/bin");
        p.truncate_to_parent();
        assert_eq!(p.as_str(), "/opt/runtime");
        p.truncate_to_parent();
        assert_eq!(p.as_str(), "/opt");
        p.truncate_to_parent();
        assert_eq!(p.as_str(), "");

        let mut relative = path("python");
        relative.truncate_to_parent();
        assert!(relative.is_empty());

        let mut root = path("/");
        root.truncate_to_parent();
        assert!(root.is_empty());
    }

    #[test]
    fn test_strip_segments() {
        let mut p = path("/usr/local/lib/python3.9/lib-dynload");
        p.strip_segments(3);
        assert_eq!(p.as_str(), "/usr/local");
    }

    #[test]
    fn test_truncate_restores_previous_length() {
        let mut p = path("/opt");
        let n = p.len();
        p.join("lib/python3.9").unwrap();
        p.truncate(n);
        assert_eq!(p.as_str(), "/opt");
    }

    #[test]
    fn test_push_suffix_bounded() {
        let mut p = BoundedPath::from_text("/os.py", 7).unwrap();
        p.push_suffix("c").unwrap();
        assert_eq!(p.as_str(), "/os.pyc");
        assert!(p.push_suffix("c").is_err());
    }
}
