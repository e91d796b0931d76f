//! The output record of the computation

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::DELIM;

/// Executable, prefixes and module search path of the runtime.
///
/// Fields that hold a non-empty value when handed to the computation are
/// caller overrides and are left untouched; the remaining ones are filled
/// in. After the computation every field is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathConfig {
    pub program_full_path: Option<String>,
    pub prefix: Option<String>,
    pub exec_prefix: Option<String>,
    /// Delimiter-joined list of directories.
    pub module_search_path: Option<String>,
}

impl PathConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_program_full_path(mut self, path: impl Into<String>) -> Self {
        self.program_full_path = Some(path.into());
        self
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    #[must_use]
    pub fn with_exec_prefix(mut self, exec_prefix: impl Into<String>) -> Self {
        self.exec_prefix = Some(exec_prefix.into());
        self
    }

    #[must_use]
    pub fn with_module_search_path(mut self, path: impl Into<String>) -> Self {
        self.module_search_path = Some(path.into());
        self
    }

    /// Whether `field` carries a caller override.
    #[must_use]
    pub fn is_set(field: Option<&String>) -> bool {
        field.is_some_and(|value| !value.is_empty())
    }

    #[must_use]
    pub fn program_full_path(&self) -> &str {
        self.program_full_path.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        self.prefix.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn exec_prefix(&self) -> &str {
        self.exec_prefix.as_deref().unwrap_or_default()
    }

    /// The module search path split on the path-list delimiter.
    #[must_use]
    pub fn module_search_paths(&self) -> Vec<PathBuf> {
        self.module_search_path
            .as_deref()
            .map(|joined| joined.split(DELIM).map(PathBuf::from).collect())
            .unwrap_or_default()
    }
}
