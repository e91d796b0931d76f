//! Integration tests for error types

#[cfg(test)]
mod tests {
    use getpath_errors::*;

    #[test]
    fn test_error_conversion() {
        let path_err = PathError::OutOfMemory;
        let err: Error = path_err.into();
        assert!(matches!(err, Error::Path(PathError::OutOfMemory)));
    }

    #[test]
    fn test_error_display() {
        let err = PathError::decode("PATH environment variable");
        assert_eq!(err.to_string(), "cannot decode PATH environment variable");

        let err: Error = PathError::too_long("/opt/runtime").into();
        assert_eq!(
            err.to_string(),
            "path configuration: path too long: /opt/runtime"
        );
    }

    #[test]
    fn test_too_long_truncates_report() {
        let long = "a".repeat(500);
        let PathError::TooLong { path } = PathError::too_long(&long) else {
            panic!("expected TooLong");
        };
        assert_eq!(path.len(), 64 + 3);
        assert!(path.ends_with("..."));
    }

    #[test]
    fn test_user_codes() {
        let err: Error = PathError::SymlinkLoop {
            path: "/usr/bin/python".into(),
            hops: 40,
        }
        .into();
        assert_eq!(err.user_code(), Some("path.symlink_loop"));
        assert!(err.user_hint().is_some());
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_config_errors_keep_their_codes() {
        let err: Error = ConfigError::InvalidValue {
            field: "version".into(),
            value: "three".into(),
        }
        .into();
        assert_eq!(err.user_code(), Some("config.invalid_value"));
        assert_eq!(err.to_string(), "config error: invalid value for version: three");
        assert!(err.user_hint().is_some());
    }
}
