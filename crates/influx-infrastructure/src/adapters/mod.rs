//! Port Adapters
//!
//! File-based implementations of the application ports.
//!
//! | Adapter | Port |
//! |---------|------|
//! | [`FileDeclarationScanner`] | `DeclarationScanner` |
//! | [`FileArtifactEmitter`] | `ArtifactEmitter` |
//! | [`DryRunEmitter`] | `ArtifactEmitter` |
//! | [`TracingDiagnosticSink`] | `DiagnosticSink` |
//! | [`CollectingDiagnosticSink`] | `DiagnosticSink` |

pub mod emitter;
pub mod scanner;
pub mod sink;

pub use emitter::{DryRunEmitter, FileArtifactEmitter};
pub use scanner::{DeclarationDocument, FileDeclarationScanner};
pub use sink::{CollectingDiagnosticSink, TracingDiagnosticSink};
