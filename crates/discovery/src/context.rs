//! Shared state of one computation

use getpath_config::BuildDefaults;
use getpath_errors::PathError;
use getpath_platform::{FilesystemProbe, Platform, PlatformLocator};
use getpath_types::{is_absolute, BoundedPath, SEP};

/// Read-only inputs every search stage needs
pub(crate) struct SearchContext<'a> {
    pub defaults: &'a BuildDefaults,
    platform: &'a Platform,
    max_path_len: usize,
    lib_python: String,
}

impl<'a> SearchContext<'a> {
    pub fn new(defaults: &'a BuildDefaults, platform: &'a Platform, max_path_len: usize) -> Self {
        Self {
            defaults,
            platform,
            max_path_len,
            lib_python: defaults.lib_python(),
        }
    }

    pub fn fs(&self) -> &dyn FilesystemProbe {
        self.platform.filesystem()
    }

    pub fn locator(&self) -> &dyn PlatformLocator {
        self.platform.locator()
    }

    pub fn max_path_len(&self) -> usize {
        self.max_path_len
    }

    /// `lib/python<version>`
    pub fn lib_python(&self) -> &str {
        &self.lib_python
    }

    /// An empty buffer with this computation's capacity
    pub fn empty(&self) -> BoundedPath {
        BoundedPath::with_capacity(self.max_path_len)
    }

    /// Copy `text` into a buffer with this computation's capacity
    pub fn path(&self, text: &str) -> Result<BoundedPath, PathError> {
        BoundedPath::from_text(text, self.max_path_len)
    }

    /// Resolve a relative path against the working directory.
    ///
    /// A leading `./` is dropped first. Without a working directory the
    /// input is returned unchanged.
    pub fn absolutize(&self, text: &str) -> Result<BoundedPath, PathError> {
        if is_absolute(text) {
            return self.path(text);
        }
        let Some(cwd) = self.fs().current_dir() else {
            return self.path(text);
        };
        let relative = text.strip_prefix("./").unwrap_or(text);
        let mut path = self.path(&cwd)?;
        if !relative.is_empty() {
            path.join(relative)?;
        }
        Ok(path)
    }

    /// Whether `dir` holds the landmark module, as source or compiled.
    pub fn has_landmark(&self, dir: &BoundedPath) -> Result<bool, PathError> {
        let mut candidate = dir.joined(&self.defaults.landmark)?;
        if self.fs().is_file(candidate.as_str()) {
            return Ok(true);
        }
        // compiled form only when it still fits
        Ok(candidate.push_suffix("c").is_ok() && self.fs().is_file(candidate.as_str()))
    }

    /// Split a home value at the first delimiter into its prefix and
    /// exec-prefix parts.
    pub fn split_home(home: &str) -> (&str, Option<&str>) {
        match home.split_once(getpath_types::DELIM) {
            Some((prefix, exec_prefix)) => (prefix, Some(exec_prefix)),
            None => (home, None),
        }
    }

    /// `dir` with every segment of `relative` appended, skipping `.` and
    /// empty segments. An absolute `relative` replaces `dir`.
    pub fn join_normalized(dir: &BoundedPath, relative: &str) -> Result<BoundedPath, PathError> {
        let mut path = dir.clone();
        if is_absolute(relative) {
            path.set(&SEP.to_string())?;
        }
        for segment in relative.split(SEP) {
            if segment.is_empty() || segment == "." {
                continue;
            }
            path.join(segment)?;
        }
        Ok(path)
    }
}
