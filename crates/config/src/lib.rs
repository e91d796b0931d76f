#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Configuration inputs for getpath
//!
//! This crate provides the two immutable input records of the computation:
//! - Build defaults (compiled in, optionally replaced by a TOML file)
//! - Runtime inputs (program name, environment variables, warnings flag)
//!
//! and the parser for the line-oriented redirection file.

pub mod constants;
pub mod redirect;

pub use redirect::find_config_value;

use getpath_errors::{ConfigError, Error, PathError};
use getpath_types::is_absolute;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::Path;

/// Values fixed when the runtime was built
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildDefaults {
    #[serde(default = "default_prefix")]
    pub prefix: String,
    #[serde(default = "default_exec_prefix")]
    pub exec_prefix: String,
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default = "default_search_path")]
    pub default_search_path: String,
    #[serde(default = "default_source_tree_path")]
    pub source_tree_path: String,
    #[serde(default = "default_landmark")]
    pub landmark: String,
    #[serde(default = "default_build_marker")]
    pub build_marker: String,
    #[serde(default = "default_build_dir_marker")]
    pub build_dir_marker: String,
    #[serde(default = "default_redirect_file")]
    pub redirect_file: String,
}

impl Default for BuildDefaults {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            exec_prefix: default_exec_prefix(),
            version: default_version(),
            default_search_path: default_search_path(),
            source_tree_path: default_source_tree_path(),
            landmark: default_landmark(),
            build_marker: default_build_marker(),
            build_dir_marker: default_build_dir_marker(),
            redirect_file: default_redirect_file(),
        }
    }
}

// Default value functions for serde
fn default_prefix() -> String {
    constants::PREFIX.to_string()
}

fn default_exec_prefix() -> String {
    constants::EXEC_PREFIX.to_string()
}

fn default_version() -> String {
    constants::VERSION.to_string()
}

fn default_search_path() -> String {
    constants::DEFAULT_SEARCH_PATH.to_string()
}

fn default_source_tree_path() -> String {
    constants::SOURCE_TREE_PATH.to_string()
}

fn default_landmark() -> String {
    constants::LANDMARK.to_string()
}

fn default_build_marker() -> String {
    constants::BUILD_MARKER.to_string()
}

fn default_build_dir_marker() -> String {
    constants::BUILD_DIR_MARKER.to_string()
}

fn default_redirect_file() -> String {
    constants::REDIRECT_FILE.to_string()
}

impl BuildDefaults {
    /// Load build defaults from a TOML file; absent keys keep their defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid TOML, or
    /// holds values that fail [`validate`](Self::validate).
    pub fn load_from_file(path: &Path) -> Result<Self, Error> {
        let contents = std::fs::read_to_string(path).map_err(|_| ConfigError::NotFound {
            path: path.display().to_string(),
        })?;

        let defaults: Self = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })?;
        defaults.validate()?;
        tracing::debug!(path = %path.display(), "loaded build defaults");
        Ok(defaults)
    }

    /// Check the invariants the search relies on
    ///
    /// # Errors
    ///
    /// Returns an error if a prefix is relative, the version is not
    /// `<major>.<minor>`, or the landmark is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [("prefix", &self.prefix), ("exec_prefix", &self.exec_prefix)] {
            if !is_absolute(value) {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    value: value.clone(),
                });
            }
        }

        let numeric = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
        let mut parts = self.version.split('.');
        let valid_version = matches!(
            (parts.next(), parts.next()),
            (Some(major), Some(minor)) if numeric(major) && numeric(minor)
        );
        if !valid_version {
            return Err(ConfigError::InvalidValue {
                field: "version".to_string(),
                value: self.version.clone(),
            });
        }

        if self.landmark.is_empty() {
            return Err(ConfigError::Invalid {
                message: "landmark must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// `lib/python<version>`, the standard library directory below a prefix
    #[must_use]
    pub fn lib_python(&self) -> String {
        format!("lib/python{}", self.version)
    }

    /// `<major>` and `<minor>` of the version string
    #[must_use]
    pub fn version_components(&self) -> (&str, &str) {
        let mut parts = self.version.split('.');
        let major = parts.next().unwrap_or_default();
        let minor = parts.next().unwrap_or_default();
        (major, minor)
    }

    /// `lib/python<major><minor>.zip`, relative to a prefix
    #[must_use]
    pub fn zip_archive_name(&self) -> String {
        let (major, minor) = self.version_components();
        format!("lib/python{major}{minor}.zip")
    }
}

/// Per-process inputs, read once before the computation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeInputs {
    /// Name or path the runtime was invoked as.
    pub program_name: String,
    /// Executable search path (`PATH`).
    pub path_env: Option<String>,
    /// Home override, `<prefix>[:<exec_prefix>]`.
    pub home: Option<String>,
    /// Prepended to the module search path (`PYTHONPATH`).
    pub pythonpath_env: Option<String>,
    pub warnings: bool,
}

impl RuntimeInputs {
    /// Inputs with no environment at all; warnings enabled.
    #[must_use]
    pub fn new(program_name: impl Into<String>) -> Self {
        Self {
            program_name: program_name.into(),
            path_env: None,
            home: None,
            pythonpath_env: None,
            warnings: true,
        }
    }

    /// Read `PATH`, `PYTHONHOME` and `PYTHONPATH` from the process environment
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but is not valid Unicode.
    pub fn from_env(program_name: impl Into<String>) -> Result<Self, Error> {
        let mut inputs = Self::new(program_name);
        inputs.merge_env()?;
        Ok(inputs)
    }

    /// Merge with environment variables; explicit values already set win
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but is not valid Unicode.
    pub fn merge_env(&mut self) -> Result<(), Error> {
        // PATH: an empty value still means "search the current directory"
        if self.path_env.is_none() {
            self.path_env = env_text(constants::ENV_PATH, "PATH environment variable")?;
        }

        // PYTHONHOME / PYTHONPATH: empty means unset
        if self.home.is_none() {
            self.home = env_text(constants::ENV_HOME, "PYTHONHOME environment variable")?
                .filter(|value| !value.is_empty());
        }
        if self.pythonpath_env.is_none() {
            self.pythonpath_env =
                env_text(constants::ENV_SEARCH_PATH, "PYTHONPATH environment variable")?
                    .filter(|value| !value.is_empty());
        }
        Ok(())
    }

    #[must_use]
    pub fn with_path_env(mut self, path_env: impl Into<String>) -> Self {
        self.path_env = Some(path_env.into());
        self
    }

    #[must_use]
    pub fn with_home(mut self, home: impl Into<String>) -> Self {
        self.home = Some(home.into());
        self
    }

    #[must_use]
    pub fn with_pythonpath_env(mut self, pythonpath: impl Into<String>) -> Self {
        self.pythonpath_env = Some(pythonpath.into());
        self
    }

    #[must_use]
    pub fn with_warnings(mut self, warnings: bool) -> Self {
        self.warnings = warnings;
        self
    }
}

fn env_text(name: &str, what: &str) -> Result<Option<String>, Error> {
    std::env::var_os(name)
        .map(OsString::into_string)
        .transpose()
        .map_err(|_| PathError::decode(what).into())
}
