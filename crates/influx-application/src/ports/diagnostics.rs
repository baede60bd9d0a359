//! Diagnostic sink port

use influx_validate::Violation;

/// Receiver for every validation violation and dependency cycle
///
/// Sinks take `&self` so a single instance can be shared between the
/// pipeline and whoever reads the collected diagnostics afterwards.
pub trait DiagnosticSink: Send + Sync {
    fn report(&self, violation: &dyn Violation);
}

/// Sink that discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NullDiagnosticSink;

impl DiagnosticSink for NullDiagnosticSink {
    fn report(&self, _violation: &dyn Violation) {}
}
