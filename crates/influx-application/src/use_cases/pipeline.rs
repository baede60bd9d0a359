//! Pipeline Orchestrator Use Case
//!
//! Runs one pass of the build over a batch of declarations:
//!
//! 1. drop identities already inserted (and repeats within the batch)
//! 2. validate what remains, rejecting the whole pass on any violation
//! 3. insert the survivors into the dependency graph
//! 4. resolve the full graph
//! 5. emit the order, or report the cycle
//!
//! Violations and cycles are normal outcomes carried by [`PassResult`];
//! `Err` is reserved for emitter failures.

use crate::domain_services::{DependencyResolver, GraphBuilder, IdentityCache, TopologicalResolver};
use crate::ports::{ArtifactEmitter, DiagnosticSink};
use influx_domain::entities::DependencyGraph;
use influx_domain::error::Result;
use influx_domain::value_objects::{ComponentDeclaration, ComponentIdentity, TopologicalOutcome};
use influx_validate::{CycleViolation, DeclarationValidator, DeclarationViolation, Validator};
use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Outcome of one pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PassResult {
    /// Every declaration was already in the graph
    NoWork,
    /// Full order handed to the emitter, dependencies first
    Emitted(Vec<ComponentIdentity>),
    /// First cycle found, closed on its first identity; nothing emitted
    Cycle(Vec<ComponentIdentity>),
    /// Every violation in the batch; the graph was not touched
    Invalid(Vec<DeclarationViolation>),
}

impl PassResult {
    /// Short outcome name used in reports
    pub fn outcome_name(&self) -> &'static str {
        match self {
            Self::NoWork => "no_work",
            Self::Emitted(_) => "emitted",
            Self::Cycle(_) => "cycle",
            Self::Invalid(_) => "invalid",
        }
    }

    /// Whether the pass reported a problem
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Cycle(_) | Self::Invalid(_))
    }
}

/// Counters accumulated since the last reset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PipelineStats {
    pub passes: usize,
    pub no_work_passes: usize,
    pub invalid_passes: usize,
    pub resolutions: usize,
    pub inserted_declarations: usize,
    pub emissions: usize,
    pub cycles: usize,
}

/// Incremental build pipeline
///
/// Owns the per-build state (seen-set, graph, counters). Passes are
/// serialized by `&mut self`.
pub struct PipelineOrchestrator {
    builder: GraphBuilder,
    validator: Box<dyn Validator>,
    resolver: Box<dyn DependencyResolver>,
    emitter: Arc<dyn ArtifactEmitter>,
    sink: Arc<dyn DiagnosticSink>,
    stats: PipelineStats,
}

impl PipelineOrchestrator {
    /// Pipeline with the default validator and resolver
    pub fn new(emitter: Arc<dyn ArtifactEmitter>, sink: Arc<dyn DiagnosticSink>) -> Self {
        Self {
            builder: GraphBuilder::new(Arc::new(IdentityCache::new())),
            validator: Box::new(DeclarationValidator::new()),
            resolver: Box::new(TopologicalResolver::new()),
            emitter,
            sink,
            stats: PipelineStats::default(),
        }
    }

    /// Replace the resolver
    pub fn with_resolver(mut self, resolver: Box<dyn DependencyResolver>) -> Self {
        self.resolver = resolver;
        self
    }

    /// Replace the declaration validator
    pub fn with_validator(mut self, validator: Box<dyn Validator>) -> Self {
        self.validator = validator;
        self
    }

    /// Run one pass over a batch of declarations
    pub fn process_pass(&mut self, declarations: &[ComponentDeclaration]) -> Result<PassResult> {
        self.stats.passes += 1;
        let pass = self.stats.passes;

        let fresh = self.fresh_declarations(declarations);
        if fresh.is_empty() {
            self.stats.no_work_passes += 1;
            debug!(pass, delivered = declarations.len(), "No new declarations");
            return Ok(PassResult::NoWork);
        }
        debug!(pass, delivered = declarations.len(), fresh = fresh.len(), "Processing pass");

        let violations: Vec<DeclarationViolation> = fresh
            .iter()
            .filter_map(|declaration| self.validator.validate(declaration).into_violation())
            .collect();
        if !violations.is_empty() {
            for violation in &violations {
                warn!(
                    identity = %violation.identity(),
                    reason = violation.reason().code(),
                    "Invalid component declaration"
                );
                self.sink.report(violation);
            }
            self.stats.invalid_passes += 1;
            return Ok(PassResult::Invalid(violations));
        }

        for declaration in &fresh {
            if self.builder.add_declaration(declaration) {
                self.stats.inserted_declarations += 1;
            }
        }

        self.stats.resolutions += 1;
        match self.resolver.resolve(self.builder.graph()) {
            TopologicalOutcome::Ordered(order) => {
                let summary = self.emitter.emit(&order)?;
                self.stats.emissions += 1;
                info!(
                    pass,
                    components = order.len(),
                    written = summary.written,
                    skipped = summary.skipped,
                    "Emitted component order"
                );
                Ok(PassResult::Emitted(order))
            }
            TopologicalOutcome::CycleDetected(cycle) => {
                let violation = CycleViolation::new(cycle);
                warn!(pass, cycle = %violation, "Dependency cycle detected");
                self.sink.report(&violation);
                self.stats.cycles += 1;
                Ok(PassResult::Cycle(violation.into_cycle()))
            }
        }
    }

    /// Declarations not yet in the graph, first occurrence of each identity
    fn fresh_declarations<'a>(
        &self,
        declarations: &'a [ComponentDeclaration],
    ) -> Vec<&'a ComponentDeclaration> {
        let cache = self.builder.identity_cache();
        let mut in_batch = HashSet::new();
        declarations
            .iter()
            .filter(|declaration| !cache.has_seen(&declaration.identity))
            .filter(|&declaration| in_batch.insert(&declaration.identity))
            .collect()
    }

    /// Forget the graph, the seen-set and the counters
    pub fn reset(&mut self) {
        self.builder.reset();
        self.stats = PipelineStats::default();
        debug!("Pipeline reset");
    }

    pub fn stats(&self) -> PipelineStats {
        self.stats
    }

    /// The dependency graph built so far
    pub fn graph(&self) -> &DependencyGraph {
        self.builder.graph()
    }

    pub fn identity_cache(&self) -> &IdentityCache {
        self.builder.identity_cache()
    }
}
