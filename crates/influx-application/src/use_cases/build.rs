//! Build Driver Use Case
//!
//! Drives a [`PipelineOrchestrator`] over every batch a scanner delivers,
//! one pass per batch, and summarizes the build as a [`BuildReport`].

use super::pipeline::{PassResult, PipelineOrchestrator};
use crate::ports::{DeclarationBatch, DeclarationScanner};
use influx_domain::error::Result;
use influx_validate::{BuildReport, CycleViolation, PassSummary, ViolationEntry};
use tracing::{debug, info};

/// Runs a whole build invocation
pub struct BuildDriver {
    pipeline: PipelineOrchestrator,
}

impl BuildDriver {
    pub fn new(pipeline: PipelineOrchestrator) -> Self {
        Self { pipeline }
    }

    /// Process every batch until the scanner is exhausted
    ///
    /// The pipeline is reset first, so each run is an independent build.
    /// Scanner and emitter failures abort the run.
    pub fn run<S>(&mut self, scanner: &mut S) -> Result<BuildReport>
    where
        S: DeclarationScanner + ?Sized,
    {
        self.pipeline.reset();
        let mut passes = Vec::new();
        let mut violations = Vec::new();

        while let Some(batch) = scanner.next_batch()? {
            let result = self.pipeline.process_pass(&batch.declarations)?;
            let summary = Self::summarize(passes.len() + 1, &batch, &result);
            debug!(
                pass = summary.pass,
                outcome = %summary.outcome,
                failed = result.is_failure(),
                "Pass finished"
            );
            violations.extend(Self::violation_entries(&result));
            passes.push(summary);
        }

        let report = BuildReport::new(passes, violations);
        info!(
            passes = report.summary.total_passes,
            violations = report.summary.total_violations,
            passed = report.summary.passed,
            "Build finished"
        );
        Ok(report)
    }

    fn summarize(pass: usize, batch: &DeclarationBatch, result: &PassResult) -> PassSummary {
        let (identities, violation_count) = match result {
            PassResult::NoWork => (Vec::new(), 0),
            PassResult::Emitted(order) => (order.iter().map(ToString::to_string).collect(), 0),
            PassResult::Cycle(cycle) => (cycle.iter().map(ToString::to_string).collect(), 1),
            PassResult::Invalid(violations) => (
                violations.iter().map(|v| v.identity().to_string()).collect(),
                violations.len(),
            ),
        };
        PassSummary {
            pass,
            source: batch.source.clone(),
            declarations: batch.len(),
            outcome: result.outcome_name().to_string(),
            identities,
            violation_count,
        }
    }

    fn violation_entries(result: &PassResult) -> Vec<ViolationEntry> {
        match result {
            PassResult::Invalid(violations) => violations
                .iter()
                .map(|v| ViolationEntry::from_violation(v))
                .collect(),
            PassResult::Cycle(cycle) => {
                let violation = CycleViolation::new(cycle.clone());
                vec![ViolationEntry::from_violation(&violation)]
            }
            PassResult::NoWork | PassResult::Emitted(_) => Vec::new(),
        }
    }

    /// The underlying pipeline, for stats and graph inspection
    pub fn pipeline(&self) -> &PipelineOrchestrator {
        &self.pipeline
    }
}
