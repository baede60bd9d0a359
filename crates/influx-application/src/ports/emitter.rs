//! Artifact emitter port

use influx_domain::error::Result;
use influx_domain::value_objects::ComponentIdentity;
use serde::{Deserialize, Serialize};

/// What an emission produced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmitSummary {
    /// Artifacts generated in this call
    pub written: usize,
    /// Artifacts that already existed and were left untouched
    pub skipped: usize,
}

impl EmitSummary {
    pub fn total(&self) -> usize {
        self.written + self.skipped
    }
}

/// Consumer of a resolved order
///
/// Called once per successful pass with the full order, dependencies first.
/// Implementations must not regenerate an artifact emitted by an earlier
/// pass of the same build.
pub trait ArtifactEmitter: Send + Sync {
    fn emit(&self, order: &[ComponentIdentity]) -> Result<EmitSummary>;
}
