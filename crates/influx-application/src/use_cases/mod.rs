//! Use Cases
//!
//! - [`PipelineOrchestrator`]: one incremental pass over a declaration batch
//! - [`BuildDriver`]: runs passes until the scanner is exhausted and reports

/// Whole-build driver
pub mod build;
/// Per-pass orchestration
pub mod pipeline;

pub use build::BuildDriver;
pub use pipeline::{PassResult, PipelineOrchestrator, PipelineStats};
