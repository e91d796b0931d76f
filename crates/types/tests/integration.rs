//! Integration tests for types

#[cfg(test)]
mod tests {
    use getpath_errors::PathError;
    use getpath_types::*;
    use proptest::prelude::*;
    use std::path::PathBuf;

    fn segment() -> impl Strategy<Value = String> {
        "[a-z0-9._-]{1,12}"
    }

    proptest! {
        #[test]
        fn join_never_exceeds_capacity(
            base in proptest::collection::vec(segment(), 0..6),
            component in segment(),
            capacity in 1usize..64,
        ) {
            let base = format!("/{}", base.join("/"));
            let Ok(mut path) = BoundedPath::from_text(&base, capacity) else {
                prop_assert!(base.len() > capacity);
                return Ok(());
            };
            match path.join(&component) {
                Ok(()) => prop_assert!(path.len() <= capacity),
                Err(err) => {
                    let is_too_long = matches!(err, PathError::TooLong { .. });
                    prop_assert!(is_too_long);
                    prop_assert_eq!(path.as_str(), base.as_str());
                }
            }
        }

        #[test]
        fn join_ignores_trailing_separator(
            base in proptest::collection::vec(segment(), 1..6),
            component in segment(),
        ) {
            let plain = format!("/{}", base.join("/"));
            let slashed = format!("{plain}/");
            let a = BoundedPath::from_text(&plain, MAX_PATH_LEN).unwrap().joined(&component).unwrap();
            let b = BoundedPath::from_text(&slashed, MAX_PATH_LEN).unwrap().joined(&component).unwrap();
            prop_assert_eq!(a.as_str(), b.as_str());
            prop_assert_eq!(a.as_str(), format!("{plain}/{component}"));
        }

        #[test]
        fn truncate_to_parent_never_grows(
            segments in proptest::collection::vec(segment(), 0..8),
        ) {
            let text = format!("/{}", segments.join("/"));
            let mut path = BoundedPath::from_text(&text, MAX_PATH_LEN).unwrap();
            let mut steps = 0;
            while !path.is_empty() {
                let before = path.len();
                path.truncate_to_parent();
                prop_assert!(path.len() < before);
                steps += 1;
            }
            prop_assert!(steps <= segments.len().max(1));
        }
    }

    #[test]
    fn test_outcome_flags() {
        assert!(SearchOutcome::FoundInstalled.is_installed());
        assert!(!SearchOutcome::FoundBuildTree.is_installed());
        assert!(SearchOutcome::FoundBuildTree.is_found());
        assert!(!SearchOutcome::NotFound.is_found());
        assert_eq!(SearchOutcome::FoundBuildTree.to_string(), "build tree");
    }

    #[test]
    fn test_outcome_serialization() {
        let json = serde_json::to_string(&SearchOutcome::FoundInstalled).unwrap();
        assert_eq!(json, r#""found_installed""#);
    }

    #[test]
    fn test_located_serializes_path_as_text() {
        let located = Located::new(
            BoundedPath::from_text("/usr/lib/python3.9", MAX_PATH_LEN).unwrap(),
            SearchOutcome::FoundInstalled,
        );
        let value = serde_json::to_value(&located).unwrap();
        assert_eq!(value["path"], "/usr/lib/python3.9");
        assert_eq!(value["outcome"], "found_installed");
    }

    #[test]
    fn test_module_search_paths_split() {
        let joined = ["/extra", "/usr/lib/python39.zip", "/usr/lib/python3.9"].join(&DELIM.to_string());
        let config = PathConfig::new().with_module_search_path(joined);
        assert_eq!(
            config.module_search_paths(),
            vec![
                PathBuf::from("/extra"),
                PathBuf::from("/usr/lib/python39.zip"),
                PathBuf::from("/usr/lib/python3.9"),
            ]
        );
    }

    #[test]
    fn test_empty_override_is_not_set() {
        let config = PathConfig::new().with_prefix("");
        assert!(!PathConfig::is_set(config.prefix.as_ref()));
        let config = config.with_prefix("/opt/runtime");
        assert!(PathConfig::is_set(config.prefix.as_ref()));
        assert_eq!(config.prefix(), "/opt/runtime");
    }
}
