//! Integration tests for events

#[cfg(test)]
mod tests {
    use getpath_events::*;
    use getpath_types::SearchOutcome;

    #[test]
    fn test_warnings_dropped_when_disabled() {
        let mut diagnostics = Diagnostics::new(false);
        diagnostics.emit_discovery(DiscoveryEvent::PrefixNotFound);
        diagnostics.emit_discovery(DiscoveryEvent::HomeHint);
        diagnostics.emit_discovery(DiscoveryEvent::AnchorResolved {
            anchor: "/usr/bin".into(),
        });

        assert_eq!(diagnostics.events().len(), 1);
        assert!(!diagnostics.has_warnings());
    }

    #[test]
    fn test_warnings_kept_in_order() {
        let mut diagnostics = Diagnostics::new(true);
        diagnostics.emit_discovery(DiscoveryEvent::PrefixNotFound);
        diagnostics.emit_discovery(DiscoveryEvent::ExecPrefixNotFound);
        diagnostics.emit_discovery(DiscoveryEvent::HomeHint);

        let messages: Vec<String> = diagnostics.warnings().map(AppEvent::message).collect();
        assert_eq!(
            messages,
            vec![
                "Could not find platform independent libraries <prefix>",
                "Could not find platform dependent libraries <exec_prefix>",
                "Consider setting $PYTHONHOME to <prefix>[:<exec_prefix>]",
            ]
        );
    }

    #[test]
    fn test_levels_and_sources() {
        let event = AppEvent::from(DiscoveryEvent::PrefixResolved {
            path: "/usr/lib/python3.9".into(),
            outcome: SearchOutcome::FoundInstalled,
        });
        assert_eq!(event.level(), EventLevel::Debug);
        assert_eq!(event.log_level(), tracing::Level::DEBUG);
        assert_eq!(event.event_source(), EventSource::PREFIX);
        assert_eq!(event.log_target(), "getpath::events::discovery");

        let warning = AppEvent::from(DiscoveryEvent::ExecPrefixNotFound);
        assert_eq!(warning.event_source(), EventSource::EXEC_PREFIX);
        assert_eq!(warning.event_source().as_str(), "exec_prefix");
        assert!(warning.is_warning());

        let hop = AppEvent::from(DiscoveryEvent::SymlinkFollowed {
            from: "/usr/bin/python3".into(),
            to: "python3.9".into(),
        });
        assert_eq!(hop.level(), EventLevel::Trace);
        assert!(!hop.is_warning());
    }

    #[test]
    fn test_event_serialization() {
        let event = AppEvent::from(DiscoveryEvent::RedirectApplied {
            file: "/venv/pyvenv.cfg".into(),
            home: "/usr/bin".into(),
        });
        let value: serde_json::Value = serde_json::from_str(&event.log_fields()).unwrap();
        assert_eq!(value["domain"], "discovery");
        assert_eq!(value["event"]["event_type"], "redirect_applied");
        assert_eq!(value["event"]["home"], "/usr/bin");
    }

    #[test]
    fn test_forward_without_subscriber_is_silent() {
        let mut diagnostics = Diagnostics::new(true);
        diagnostics.emit_discovery(DiscoveryEvent::RedirectApplied {
            file: "/venv/pyvenv.cfg".into(),
            home: "/usr/bin".into(),
        });
        diagnostics.forward_to_tracing();
        assert_eq!(
            diagnostics.events()[0].message(),
            "home /usr/bin taken from /venv/pyvenv.cfg"
        );
    }
}
