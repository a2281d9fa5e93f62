//! The chat-bot platform that runs an action
//!
//! A host supplies environment variables and receives exactly one outcome
//! per invocation: a success payload or an error report.

use crate::error::ErrorReport;
use crate::yelp::SearchResponse;
use serde::Serialize;
use std::collections::HashMap;
use std::io::Write;
use std::sync::Mutex;
use tracing::error;

/// Capabilities the handler needs from its host
pub trait Host: Send + Sync {
    /// Read an environment variable
    fn env(&self, name: &str) -> Option<String>;

    /// Deliver the success payload
    fn success(&self, payload: SearchResponse);

    /// Deliver a failure
    fn fail(&self, report: ErrorReport);
}

/// Host backed by the current process
///
/// Success payloads go to stdout as pretty JSON, error reports to stderr.
#[derive(Debug, Default)]
pub struct ProcessHost;

impl ProcessHost {
    pub fn new() -> Self {
        Self
    }
}

impl Host for ProcessHost {
    fn env(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }

    fn success(&self, payload: SearchResponse) {
        write_json(std::io::stdout().lock(), &payload);
    }

    fn fail(&self, report: ErrorReport) {
        write_json(std::io::stderr().lock(), &report);
    }
}

/// Write pretty JSON on its own line, logging rather than panicking on failure
fn write_json<W: Write, T: Serialize>(mut out: W, value: &T) -> bool {
    let json = match serde_json::to_string_pretty(value) {
        Ok(json) => json,
        Err(e) => {
            error!("Failed to serialize host output: {}", e);
            return false;
        }
    };

    match writeln!(out, "{}", json).and_then(|_| out.flush()) {
        Ok(()) => true,
        Err(e) => {
            error!("Failed to write host output: {}", e);
            false
        }
    }
}

/// Something a [`MemoryHost`] received
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    Success(SearchResponse),
    Failure(ErrorReport),
}

/// In-memory host with a fixed environment that records every outcome
#[derive(Debug, Default)]
pub struct MemoryHost {
    env: HashMap<String, String>,
    events: Mutex<Vec<HostEvent>>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an environment variable
    pub fn with_env(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(name.into(), value.into());
        self
    }

    /// Everything delivered so far, in order
    pub fn events(&self) -> Vec<HostEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    fn record(&self, event: HostEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

impl Host for MemoryHost {
    fn env(&self, name: &str) -> Option<String> {
        self.env.get(name).cloned()
    }

    fn success(&self, payload: SearchResponse) {
        self.record(HostEvent::Success(payload));
    }

    fn fail(&self, report: ErrorReport) {
        self.record(HostEvent::Failure(report));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    /// A writer whose output has been closed
    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::from(std::io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::Error::from(std::io::ErrorKind::BrokenPipe))
        }
    }

    #[test]
    fn test_write_json_survives_closed_output() {
        let report = ErrorReport {
            kind: ErrorKind::TransportError,
            internal_error_message: "ConnectError: refused".to_string(),
            user_message: "sorry".to_string(),
        };
        assert!(!write_json(ClosedPipe, &report));
    }

    #[test]
    fn test_write_json_output() {
        let mut out = Vec::new();
        let report = ErrorReport {
            kind: ErrorKind::EmptyResponse,
            internal_error_message: "Error: nothing".to_string(),
            user_message: "sorry".to_string(),
        };

        assert!(write_json(&mut out, &report));
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("}\n"));
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["internalErrorMessage"], "Error: nothing");
    }

    #[test]
    fn test_memory_host_env() {
        let host = MemoryHost::new().with_env("YELP_API_KEY", "abc");
        assert_eq!(host.env("YELP_API_KEY").as_deref(), Some("abc"));
        assert!(host.env("OTHER").is_none());
    }

    #[test]
    fn test_memory_host_records_in_order() {
        let host = MemoryHost::new();
        host.success(SearchResponse::from_businesses(vec![], Some(0)));
        host.fail(ErrorReport {
            kind: ErrorKind::EmptyResponse,
            internal_error_message: "Error: nothing".to_string(),
            user_message: "sorry".to_string(),
        });

        let events = host.events();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], HostEvent::Success(_)));
        assert!(matches!(events[1], HostEvent::Failure(_)));
    }
}
