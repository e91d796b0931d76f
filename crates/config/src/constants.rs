//! Compiled-in defaults
//!
//! Each value can be overridden when the crate is built by exporting the
//! matching `GETPATH_*` variable, the way a configure script would pass
//! `PREFIX` and friends to the C build.

macro_rules! build_env_or {
    ($name:literal, $default:literal) => {
        match option_env!($name) {
            Some(value) => value,
            None => $default,
        }
    };
}

/// Installation root of the platform independent libraries.
pub const PREFIX: &str = build_env_or!("GETPATH_PREFIX", "/usr/local");

/// Installation root of the platform dependent libraries.
pub const EXEC_PREFIX: &str = build_env_or!("GETPATH_EXEC_PREFIX", "/usr/local");

/// `<major>.<minor>` of the runtime.
pub const VERSION: &str = build_env_or!("GETPATH_VERSION", "3.9");

/// Default module search path; relative entries are resolved against the prefix.
pub const DEFAULT_SEARCH_PATH: &str = build_env_or!("GETPATH_PYTHONPATH", "");

/// Source tree location relative to the build directory (`VPATH`).
pub const SOURCE_TREE_PATH: &str = build_env_or!("GETPATH_VPATH", ".");

/// File whose presence marks a standard library directory.
pub const LANDMARK: &str = "os.py";

/// Present in the build directory of an uninstalled runtime.
pub const BUILD_MARKER: &str = "Modules/Setup.local";

/// Written by the build; holds the shared module directory relative to it.
pub const BUILD_DIR_MARKER: &str = "pybuilddir.txt";

/// Virtual environment redirection file.
pub const REDIRECT_FILE: &str = "pyvenv.cfg";

/// Directory of compiled extension modules below `lib/python<ver>`.
pub const LIB_DYNLOAD: &str = "lib-dynload";

/// Environment variable naming the executable search path.
pub const ENV_PATH: &str = "PATH";

/// Environment variable holding the home override.
pub const ENV_HOME: &str = "PYTHONHOME";

/// Environment variable prepended to the module search path.
pub const ENV_SEARCH_PATH: &str = "PYTHONPATH";
