#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Deferred diagnostics for getpath
//!
//! The search stages never print. Everything worth reporting is recorded
//! as an event in a [`Diagnostics`] collector that is handed back with the
//! result; the caller decides whether to print warnings, forward the
//! events to `tracing`, or serialize them.

pub mod meta;
pub use meta::{EventLevel, EventSource};

pub mod events;
pub use events::{AppEvent, DiscoveryEvent};

use serde::Serialize;

/// The unified trait for recording events during the computation
pub trait EventEmitter {
    /// Record an event
    fn emit(&mut self, event: AppEvent);

    /// Record a discovery stage event
    fn emit_discovery(&mut self, event: DiscoveryEvent) {
        self.emit(AppEvent::Discovery(event));
    }
}

/// Ordered list of events produced by one computation.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Diagnostics {
    events: Vec<AppEvent>,
    #[serde(skip)]
    warnings_enabled: bool,
}

impl Diagnostics {
    /// Create a collector; warnings are dropped unless `warnings_enabled`.
    #[must_use]
    pub fn new(warnings_enabled: bool) -> Self {
        Self {
            events: Vec::new(),
            warnings_enabled,
        }
    }

    #[must_use]
    pub fn events(&self) -> &[AppEvent] {
        &self.events
    }

    pub fn warnings(&self) -> impl Iterator<Item = &AppEvent> {
        self.events.iter().filter(|event| event.is_warning())
    }

    #[must_use]
    pub fn has_warnings(&self) -> bool {
        self.warnings().next().is_some()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Replay every recorded event through `tracing`.
    pub fn forward_to_tracing(&self) {
        for event in &self.events {
            let source = event.event_source();
            let source = source.as_str();
            let fields = event.log_fields();
            let message = event.message();
            match event.level() {
                EventLevel::Trace => {
                    tracing::trace!(
                        target: "getpath::events",
                        source,
                        fields = fields.as_str(),
                        "{message}"
                    );
                }
                EventLevel::Debug => {
                    tracing::debug!(
                        target: "getpath::events",
                        source,
                        fields = fields.as_str(),
                        "{message}"
                    );
                }
                EventLevel::Info => {
                    tracing::info!(
                        target: "getpath::events",
                        source,
                        fields = fields.as_str(),
                        "{message}"
                    );
                }
                EventLevel::Warn => {
                    tracing::warn!(
                        target: "getpath::events",
                        source,
                        fields = fields.as_str(),
                        "{message}"
                    );
                }
                EventLevel::Error => {
                    tracing::error!(
                        target: "getpath::events",
                        source,
                        fields = fields.as_str(),
                        "{message}"
                    );
                }
            }
        }
    }
}

impl EventEmitter for Diagnostics {
    fn emit(&mut self, event: AppEvent) {
        if event.is_warning() && !self.warnings_enabled {
            return;
        }
        self.events.push(event);
    }
}
