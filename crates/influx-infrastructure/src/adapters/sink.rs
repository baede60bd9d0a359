//! Diagnostic sinks

use influx_application::ports::DiagnosticSink;
use influx_validate::{Severity, Violation, ViolationEntry};
use std::sync::{Mutex, PoisonError};
use tracing::{error, info, warn};

/// Sink logging each diagnostic through `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnosticSink;

impl DiagnosticSink for TracingDiagnosticSink {
    fn report(&self, violation: &dyn Violation) {
        let location = violation
            .location()
            .map(ToString::to_string)
            .unwrap_or_default();
        match violation.severity() {
            Severity::Error => error!(
                id = violation.id(),
                reason = violation.reason_code(),
                location = %location,
                "{}",
                violation.message()
            ),
            Severity::Warning => warn!(
                id = violation.id(),
                reason = violation.reason_code(),
                location = %location,
                "{}",
                violation.message()
            ),
            Severity::Info => info!(
                id = violation.id(),
                reason = violation.reason_code(),
                location = %location,
                "{}",
                violation.message()
            ),
        }
    }
}

/// Sink keeping every diagnostic as a report entry
#[derive(Debug, Default)]
pub struct CollectingDiagnosticSink {
    entries: Mutex<Vec<ViolationEntry>>,
}

impl CollectingDiagnosticSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the collected entries, in report order
    pub fn entries(&self) -> Vec<ViolationEntry> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every collected entry
    pub fn clear(&self) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl DiagnosticSink for CollectingDiagnosticSink {
    fn report(&self, violation: &dyn Violation) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(ViolationEntry::from_violation(violation));
    }
}
