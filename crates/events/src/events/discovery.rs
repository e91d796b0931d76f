//! Events describing how each search stage arrived at its answer

use getpath_types::{ExecutableSource, SearchOutcome};
use serde::{Deserialize, Serialize};

use crate::EventSource;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum DiscoveryEvent {
    /// Full executable path settled, before symlink resolution
    ExecutableResolved {
        path: String,
        source: ExecutableSource,
    },

    /// One symbolic link hop
    SymlinkFollowed { from: String, to: String },

    /// Directory of the resolved executable
    AnchorResolved { anchor: String },

    /// A redirection file replaced the anchor directory
    RedirectApplied { file: String, home: String },

    /// Prefix search finished (unreduced search value)
    PrefixResolved {
        path: String,
        outcome: SearchOutcome,
    },

    /// Exec-prefix search finished (unreduced search value)
    ExecPrefixResolved {
        path: String,
        outcome: SearchOutcome,
    },

    /// Location of the packaged standard library archive
    ArchivePathComputed { path: String },

    /// No landmark for the platform independent libraries
    PrefixNotFound,

    /// No landmark for the platform dependent libraries
    ExecPrefixNotFound,

    /// At least one search failed; suggest the home override
    HomeHint,
}

impl DiscoveryEvent {
    #[must_use]
    pub fn event_source(&self) -> EventSource {
        match self {
            Self::ExecutableResolved { .. }
            | Self::SymlinkFollowed { .. }
            | Self::AnchorResolved { .. } => EventSource::EXECUTABLE,
            Self::RedirectApplied { .. } => EventSource::REDIRECT,
            Self::PrefixResolved { .. } | Self::PrefixNotFound => EventSource::PREFIX,
            Self::ExecPrefixResolved { .. } | Self::ExecPrefixNotFound => {
                EventSource::EXEC_PREFIX
            }
            Self::ArchivePathComputed { .. } | Self::HomeHint => EventSource::SEARCH_PATH,
        }
    }

    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::ExecutableResolved { path, source } if path.is_empty() => {
                format!("executable not found ({source})")
            }
            Self::ExecutableResolved { path, source } => {
                format!("executable {path} ({source})")
            }
            Self::SymlinkFollowed { from, to } => format!("symlink {from} -> {to}"),
            Self::AnchorResolved { anchor } => format!("anchor directory {anchor}"),
            Self::RedirectApplied { file, home } => format!("home {home} taken from {file}"),
            Self::PrefixResolved { path, outcome } => format!("prefix {path} ({outcome})"),
            Self::ExecPrefixResolved { path, outcome } => {
                format!("exec_prefix {path} ({outcome})")
            }
            Self::ArchivePathComputed { path } => format!("stdlib archive {path}"),
            Self::PrefixNotFound => {
                "Could not find platform independent libraries <prefix>".to_string()
            }
            Self::ExecPrefixNotFound => {
                "Could not find platform dependent libraries <exec_prefix>".to_string()
            }
            Self::HomeHint => {
                "Consider setting $PYTHONHOME to <prefix>[:<exec_prefix>]".to_string()
            }
        }
    }
}
