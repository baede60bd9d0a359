//! Application Layer - Influx
//!
//! Orchestrates the incremental build: each pass filters re-delivered
//! declarations, validates the rest, grows the dependency graph, resolves it
//! and hands the order to an emitter.
//!
//! ## Architecture
//!
//! The application layer:
//! - Defines ports for the outside world (scanner, diagnostics, emitter)
//! - Holds the stateful domain services (identity cache, graph builder, resolver)
//! - Implements the pass and build use cases
//! - Never touches the filesystem itself
//!
//! ## Example
//!
//! ```
//! use influx_application::ports::{ArtifactEmitter, EmitSummary, NullDiagnosticSink};
//! use influx_application::{PassResult, PipelineOrchestrator};
//! use influx_domain::value_objects::{ComponentDeclaration, ComponentIdentity};
//! use std::sync::Arc;
//!
//! struct NoopEmitter;
//! impl ArtifactEmitter for NoopEmitter {
//!     fn emit(&self, order: &[ComponentIdentity]) -> influx_domain::Result<EmitSummary> {
//!         Ok(EmitSummary { written: order.len(), skipped: 0 })
//!     }
//! }
//!
//! let a = ComponentIdentity::new("app.A").unwrap();
//! let b = ComponentIdentity::new("app.B").unwrap();
//! let mut pipeline = PipelineOrchestrator::new(Arc::new(NoopEmitter), Arc::new(NullDiagnosticSink));
//!
//! let result = pipeline
//!     .process_pass(&[
//!         ComponentDeclaration::concrete(a.clone()).with_dependency(b.clone()),
//!         ComponentDeclaration::concrete(b.clone()),
//!     ])
//!     .unwrap();
//! assert_eq!(result, PassResult::Emitted(vec![b, a]));
//! ```

pub mod domain_services;
pub mod ports;
pub mod use_cases;

pub use domain_services::*;
pub use ports::*;
pub use use_cases::*;
