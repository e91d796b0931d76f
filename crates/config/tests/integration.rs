//! Integration tests for config

#[cfg(test)]
mod tests {
    use getpath_config::*;
    use getpath_errors::{ConfigError, Error, PathError};
    use std::io::Write;
    use std::sync::Mutex;
    use tempfile::NamedTempFile;

    // Mutex to ensure env var tests don't run concurrently
    static ENV_TEST_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn test_load_defaults_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(
            temp_file,
            r#"
prefix = "/opt/runtime"
exec_prefix = "/opt/runtime-native"
version = "3.11"
default_search_path = "lib/site"
        "#
        )
        .unwrap();

        let defaults = BuildDefaults::load_from_file(temp_file.path()).unwrap();
        assert_eq!(defaults.prefix, "/opt/runtime");
        assert_eq!(defaults.exec_prefix, "/opt/runtime-native");
        assert_eq!(defaults.lib_python(), "lib/python3.11");
        assert_eq!(defaults.zip_archive_name(), "lib/python311.zip");
        assert_eq!(defaults.default_search_path, "lib/site");
        // untouched keys keep their compiled values
        assert_eq!(defaults.landmark, constants::LANDMARK);
        assert_eq!(defaults.build_dir_marker, "pybuilddir.txt");
    }

    #[test]
    fn test_load_missing_file() {
        let err = BuildDefaults::load_from_file(std::path::Path::new("/nonexistent/getpath.toml"))
            .unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::NotFound { .. })));
    }

    #[test]
    fn test_load_rejects_bad_version() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, r#"version = "three""#).unwrap();
        let err = BuildDefaults::load_from_file(temp_file.path()).unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::InvalidValue { ref field, .. }) if field == "version"
        ));
    }

    #[test]
    fn test_validate_relative_prefix() {
        let defaults = BuildDefaults {
            prefix: "usr/local".into(),
            ..BuildDefaults::default()
        };
        assert!(defaults.validate().is_err());
        assert!(BuildDefaults::default().validate().is_ok());
    }

    #[test]
    fn test_version_components() {
        let defaults = BuildDefaults::default();
        assert_eq!(defaults.version_components(), ("3", "9"));
        assert_eq!(defaults.zip_archive_name(), "lib/python39.zip");
    }

    #[test]
    fn test_merge_env() {
        let _guard = ENV_TEST_MUTEX.lock().unwrap();

        std::env::set_var("PATH", "/usr/bin:/bin");
        std::env::set_var("PYTHONHOME", "/opt/runtime");
        std::env::set_var("PYTHONPATH", "");

        let inputs = RuntimeInputs::from_env("python3").unwrap();
        assert_eq!(inputs.program_name, "python3");
        assert_eq!(inputs.path_env.as_deref(), Some("/usr/bin:/bin"));
        assert_eq!(inputs.home.as_deref(), Some("/opt/runtime"));
        assert_eq!(inputs.pythonpath_env, None);
        assert!(inputs.warnings);

        // explicit values win over the environment
        let mut inputs = RuntimeInputs::new("python3").with_home("/explicit");
        inputs.merge_env().unwrap();
        assert_eq!(inputs.home.as_deref(), Some("/explicit"));

        std::env::remove_var("PYTHONHOME");
        std::env::remove_var("PYTHONPATH");
    }

    #[cfg(unix)]
    #[test]
    fn test_undecodable_env_value() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let _guard = ENV_TEST_MUTEX.lock().unwrap();

        std::env::set_var("PYTHONHOME", OsStr::from_bytes(b"/opt/\xff"));
        let result = RuntimeInputs::from_env("python3");
        std::env::remove_var("PYTHONHOME");

        assert!(matches!(result, Err(Error::Path(PathError::Decode { .. }))));
    }
}
