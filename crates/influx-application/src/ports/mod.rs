//! Port Interfaces
//!
//! Boundary contracts between the pipeline and the outside world. The core
//! never touches the filesystem directly: declarations arrive through a
//! [`DeclarationScanner`], diagnostics leave through a [`DiagnosticSink`] and
//! generated artifacts through an [`ArtifactEmitter`].
//!
//! ## Organization
//!
//! - **scanner.rs** - Declaration discovery, one batch per pass
//! - **diagnostics.rs** - Violation and cycle reporting
//! - **emitter.rs** - Artifact generation for a resolved order

/// Artifact emitter port
pub mod emitter;
/// Diagnostic sink port
pub mod diagnostics;
/// Declaration scanner port
pub mod scanner;

pub use diagnostics::{DiagnosticSink, NullDiagnosticSink};
pub use emitter::{ArtifactEmitter, EmitSummary};
pub use scanner::{DeclarationBatch, DeclarationScanner, StaticDeclarationScanner};
