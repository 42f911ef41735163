//! Application telemetry events and sinks.
//!
//! spxdash is a local-first tool, but it still benefits from lightweight
//! telemetry to support debugging and to capture operational signals such as
//! fetch latency against a slow backend.

use std::io;

use serde::{Deserialize, Serialize};

/// A structured telemetry event emitted by spxdash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TelemetryEvent {
    /// Records a completed company-universe load.
    UniverseLoaded {
        /// Number of company records fetched.
        companies: usize,
        /// Wall-clock latency of the load in milliseconds.
        latency_ms: u64,
    },
    /// Records a completed per-symbol series fetch.
    SeriesFetched {
        /// Ticker symbol the series belongs to.
        symbol: String,
        /// Number of records fetched.
        records: usize,
        /// Wall-clock latency of the fetch in milliseconds.
        latency_ms: u64,
    },
}

/// A sink that can record telemetry events.
pub trait TelemetrySink: Send + Sync {
    /// Records a telemetry event.
    fn record(&self, event: TelemetryEvent);
}

/// Telemetry sink that drops all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTelemetrySink;

impl TelemetrySink for NoopTelemetrySink {
    fn record(&self, _event: TelemetryEvent) {}
}

/// Records telemetry events to stderr as JSON lines (JSONL).
///
/// This is intended for local debugging and is not transmitted anywhere.
#[derive(Debug, Default)]
pub struct StderrJsonlTelemetrySink;

impl TelemetrySink for StderrJsonlTelemetrySink {
    fn record(&self, event: TelemetryEvent) {
        let Ok(serialised) = serde_json::to_string(&event) else {
            return;
        };

        let _ignored = writeln_stderr(&serialised);
    }
}

fn writeln_stderr(message: &str) -> io::Result<()> {
    use io::Write;

    let mut stderr = io::stderr().lock();
    writeln!(stderr, "{message}")
}

#[cfg(test)]
mod tests {
    use super::{TelemetryEvent, TelemetrySink};

    #[derive(Debug, Default)]
    struct RecordingSink {
        events: std::sync::Mutex<Vec<TelemetryEvent>>,
    }

    impl RecordingSink {
        fn take(&self) -> Vec<TelemetryEvent> {
            self.events
                .lock()
                .expect("events mutex should be available")
                .drain(..)
                .collect()
        }
    }

    impl TelemetrySink for RecordingSink {
        fn record(&self, event: TelemetryEvent) {
            self.events
                .lock()
                .expect("events mutex should be available")
                .push(event);
        }
    }

    #[test]
    fn recording_sink_captures_events() {
        let sink = RecordingSink::default();
        sink.record(TelemetryEvent::SeriesFetched {
            symbol: "AAPL".to_owned(),
            records: 250,
            latency_ms: 42,
        });

        assert_eq!(
            sink.take(),
            vec![TelemetryEvent::SeriesFetched {
                symbol: "AAPL".to_owned(),
                records: 250,
                latency_ms: 42,
            }]
        );
    }

    #[test]
    fn events_serialise_with_snake_case_tags() {
        let event = TelemetryEvent::UniverseLoaded {
            companies: 503,
            latency_ms: 120,
        };
        let serialised = serde_json::to_string(&event).expect("event should serialise");
        assert!(serialised.contains("\"type\":\"universe_loaded\""));
    }
}
