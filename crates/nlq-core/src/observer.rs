// Observer hooks
// The compiler reports pipeline stages here instead of logging on its own.

use crate::classifier::Intent;
use crate::error::CompileError;
use crate::{LogLevel, TimeRange};
use tracing::{debug, info, warn};

/// A facet as reported to observers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facet<'a> {
    Level(LogLevel),
    Service(&'a str),
    Time(&'a TimeRange),
    Terms(&'a [String]),
    Size(u64),
}

/// Callbacks at each stage of a compile. All default to no-ops.
pub trait CompileObserver: Send + Sync {
    fn utterance_received(&self, _utterance: &str) {}
    fn intent_resolved(&self, _intent: &Intent) {}
    fn facet_extracted(&self, _facet: Facet<'_>) {}
    fn payload_emitted(&self, _payload: &str) {}
    fn compile_failed(&self, _error: &CompileError) {}
}

// Structured tracing events, the subscriber is the host's business

#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl CompileObserver for TracingObserver {
    fn utterance_received(&self, utterance: &str) {
        info!(utterance = %utterance, "Processing query");
    }

    fn intent_resolved(&self, intent: &Intent) {
        debug!(intent = ?intent, "Intent resolved");
    }

    fn facet_extracted(&self, facet: Facet<'_>) {
        match facet {
            Facet::Level(level) => debug!(level = level.as_str(), "Extracted log level"),
            Facet::Service(name) => debug!(service = %name, "Extracted service name"),
            Facet::Time(range) => debug!(gte = %range.gte(), lt = ?range.lt(), "Extracted time filter"),
            Facet::Terms(terms) => debug!(terms = ?terms, "Extracted search terms"),
            Facet::Size(size) => debug!(size, "Extracted custom size"),
        }
    }

    fn payload_emitted(&self, payload: &str) {
        info!(payload = %payload, "Generated query");
    }

    fn compile_failed(&self, error: &CompileError) {
        warn!(error = %error, "Query processing failed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Silent;
    impl CompileObserver for Silent {}

    #[derive(Default)]
    struct Counting {
        calls: Mutex<usize>,
    }

    impl CompileObserver for Counting {
        fn utterance_received(&self, _utterance: &str) {
            *self.calls.lock().unwrap() += 1;
        }
    }

    #[test]
    fn test_defaults_are_noops() {
        let observer = Silent;
        observer.utterance_received("anything");
        observer.facet_extracted(Facet::Size(3));
        observer.payload_emitted("{}");
    }

    #[test]
    fn test_override_one_hook() {
        let observer = Counting::default();
        observer.utterance_received("a");
        observer.intent_resolved(&Intent::Search);
        observer.utterance_received("b");
        assert_eq!(*observer.calls.lock().unwrap(), 2);
    }

    #[test]
    fn test_tracing_observer_without_subscriber() {
        // no subscriber installed, events are simply dropped
        let observer = TracingObserver;
        observer.facet_extracted(Facet::Time(&TimeRange::Today));
        observer.facet_extracted(Facet::Terms(&["timeout".to_string()]));
    }
}
