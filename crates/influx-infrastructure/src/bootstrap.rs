//! Build bootstrap
//!
//! Wires the file adapters into a pipeline from configuration and runs a
//! whole build.

use crate::adapters::{DryRunEmitter, FileArtifactEmitter, FileDeclarationScanner, TracingDiagnosticSink};
use crate::config::{AppConfig, EmitConfig};
use influx_application::ports::{ArtifactEmitter, DiagnosticSink};
use influx_application::{BuildDriver, PipelineOrchestrator};
use influx_domain::error::Result;
use influx_validate::BuildReport;
use std::sync::Arc;
use tracing::info;

/// Emitter selected by configuration
pub fn create_emitter(config: &EmitConfig) -> Arc<dyn ArtifactEmitter> {
    if config.enabled {
        Arc::new(FileArtifactEmitter::new(config))
    } else {
        Arc::new(DryRunEmitter::new())
    }
}

/// Pipeline over the configured emitter and the given sink
pub fn create_pipeline(config: &AppConfig, sink: Arc<dyn DiagnosticSink>) -> PipelineOrchestrator {
    PipelineOrchestrator::new(create_emitter(&config.emit), sink)
}

/// Scan the configured inputs and run every pass
pub fn run_build(config: &AppConfig) -> Result<BuildReport> {
    let mut scanner = FileDeclarationScanner::from_config(&config.scan)?;
    info!(
        documents = scanner.remaining(),
        output_dir = %config.emit.output_dir.display(),
        emit = config.emit.enabled,
        "Starting build"
    );
    let pipeline = create_pipeline(config, Arc::new(TracingDiagnosticSink));
    BuildDriver::new(pipeline).run(&mut scanner)
}
