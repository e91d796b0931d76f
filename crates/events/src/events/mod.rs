use serde::{Deserialize, Serialize};

use crate::{EventLevel, EventSource};

pub mod discovery;

pub use discovery::*;

/// Top-level event enum recorded while the paths are computed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "domain", content = "event", rename_all = "snake_case")]
pub enum AppEvent {
    /// Progress of the discovery stages
    Discovery(DiscoveryEvent),
}

impl AppEvent {
    /// Identify the source stage for this event.
    #[must_use]
    pub fn event_source(&self) -> EventSource {
        match self {
            Self::Discovery(event) => event.event_source(),
        }
    }

    /// Severity of this event.
    #[must_use]
    pub fn level(&self) -> EventLevel {
        match self {
            Self::Discovery(
                DiscoveryEvent::PrefixNotFound
                | DiscoveryEvent::ExecPrefixNotFound
                | DiscoveryEvent::HomeHint,
            ) => EventLevel::Warn,

            Self::Discovery(DiscoveryEvent::SymlinkFollowed { .. }) => EventLevel::Trace,

            Self::Discovery(_) => EventLevel::Debug,
        }
    }

    /// Determine the appropriate tracing log level for this event
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        self.level().into()
    }

    /// Get the log target for this event (for structured logging)
    #[must_use]
    pub fn log_target(&self) -> &'static str {
        match self {
            Self::Discovery(_) => "getpath::events::discovery",
        }
    }

    #[must_use]
    pub fn is_warning(&self) -> bool {
        self.level() == EventLevel::Warn
    }

    /// Human-readable rendering, as printed on stderr for warnings.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Discovery(event) => event.message(),
        }
    }

    /// Get structured fields for logging
    #[must_use]
    pub fn log_fields(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| format!("{self:?}"))
    }
}

impl From<DiscoveryEvent> for AppEvent {
    fn from(event: DiscoveryEvent) -> Self {
        Self::Discovery(event)
    }
}
