//! Search outcomes carried from the prefix searches to the final reduction

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::BoundedPath;

/// How a prefix or exec-prefix search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchOutcome {
    /// No landmark anywhere; compiled defaults are used.
    NotFound,
    /// Landmark found under an installed `lib/python<ver>` layout (or
    /// the location was given by a home override).
    FoundInstalled,
    /// Running from a build tree detected through a marker file.
    FoundBuildTree,
}

impl SearchOutcome {
    /// Installed-tree results are reduced to their installation root.
    #[must_use]
    pub fn is_installed(self) -> bool {
        matches!(self, Self::FoundInstalled)
    }

    #[must_use]
    pub fn is_found(self) -> bool {
        !matches!(self, Self::NotFound)
    }
}

impl fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "not found"),
            Self::FoundInstalled => write!(f, "installed"),
            Self::FoundBuildTree => write!(f, "build tree"),
        }
    }
}

/// Where the full executable path came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutableSource {
    /// Supplied by the caller before the computation.
    Override,
    /// The invocation name already contained a separator.
    Argument,
    /// The operating system reported its own executable path.
    OsQuery,
    /// Found by searching the `PATH` directories.
    PathSearch,
    /// Nothing matched; the path is empty.
    Unresolved,
}

impl fmt::Display for ExecutableSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Override => write!(f, "override"),
            Self::Argument => write!(f, "argument"),
            Self::OsQuery => write!(f, "os query"),
            Self::PathSearch => write!(f, "PATH search"),
            Self::Unresolved => write!(f, "unresolved"),
        }
    }
}

/// A search result: the unreduced location together with how it was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Located {
    pub path: BoundedPath,
    pub outcome: SearchOutcome,
}

impl Located {
    #[must_use]
    pub fn new(path: BoundedPath, outcome: SearchOutcome) -> Self {
        Self { path, outcome }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.path.as_str()
    }
}
