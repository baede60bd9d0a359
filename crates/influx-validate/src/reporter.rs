//! Build Report Generation
//!
//! Generates reports in multiple formats:
//! - JSON for CI integration
//! - Human-readable for terminal output

use crate::violation_trait::{Severity, Violation, ViolationCategory};
use serde::{Deserialize, Serialize};

/// Flattened, serializable form of any [`Violation`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViolationEntry {
    /// Violation ID (e.g., "DI001")
    pub id: String,
    /// Reason code (e.g., "IsInterface")
    pub reason: String,
    /// Grouping category
    pub category: ViolationCategory,
    /// Severity level
    pub severity: Severity,
    /// Identities involved, in order
    pub identities: Vec<String>,
    /// Declaring source, rendered as `file[:line]`
    pub location: Option<String>,
    /// Human-readable message
    pub message: String,
    /// Suggested fix
    pub suggestion: Option<String>,
}

impl ViolationEntry {
    pub fn from_violation(violation: &dyn Violation) -> Self {
        Self {
            id: violation.id().to_string(),
            reason: violation.reason_code().to_string(),
            category: violation.category(),
            severity: violation.severity(),
            identities: violation
                .identities()
                .iter()
                .map(ToString::to_string)
                .collect(),
            location: violation.location().map(ToString::to_string),
            message: violation.message(),
            suggestion: violation.suggestion(),
        }
    }
}

/// What happened in one pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassSummary {
    /// 1-based pass number
    pub pass: usize,
    /// Where the batch came from (e.g., a declaration file)
    pub source: Option<String>,
    /// Declarations delivered by the scanner
    pub declarations: usize,
    /// `no_work`, `emitted`, `cycle` or `invalid`
    pub outcome: String,
    /// Emitted order or detected cycle
    pub identities: Vec<String>,
    /// Number of violations reported in this pass
    pub violation_count: usize,
}

/// Summary of a whole build
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildSummary {
    /// Number of passes run
    pub total_passes: usize,
    /// Passes that produced an emission
    pub emitted_passes: usize,
    /// Total number of violations
    pub total_violations: usize,
    /// Number of declaration violations
    pub declaration_count: usize,
    /// Number of dependency cycles
    pub cycle_count: usize,
    /// Distinct components in the last emitted order
    pub components_ordered: usize,
    /// Whether the build passed (no error-level violations)
    pub passed: bool,
}

/// Build report containing every pass and violation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildReport {
    /// Timestamp of the build
    pub timestamp: String,
    /// Summary statistics
    pub summary: BuildSummary,
    /// Per-pass results
    pub passes: Vec<PassSummary>,
    /// Every reported violation
    pub violations: Vec<ViolationEntry>,
}

impl BuildReport {
    /// Build a report, computing the summary
    pub fn new(passes: Vec<PassSummary>, violations: Vec<ViolationEntry>) -> Self {
        let count_category = |category: ViolationCategory| {
            violations.iter().filter(|v| v.category == category).count()
        };
        let components_ordered = passes
            .iter()
            .rev()
            .find(|p| p.outcome == "emitted")
            .map_or(0, |p| p.identities.len());

        let summary = BuildSummary {
            total_passes: passes.len(),
            emitted_passes: passes.iter().filter(|p| p.outcome == "emitted").count(),
            total_violations: violations.len(),
            declaration_count: count_category(ViolationCategory::Declaration),
            cycle_count: count_category(ViolationCategory::Structure),
            components_ordered,
            passed: !violations.iter().any(|v| v.severity == Severity::Error),
        };

        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            summary,
            passes,
            violations,
        }
    }
}

/// Report generator
pub struct Reporter;

impl Reporter {
    /// Generate JSON report
    pub fn to_json(report: &BuildReport) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
    }

    /// Generate human-readable report
    pub fn to_human_readable(report: &BuildReport) -> String {
        let mut output = String::new();

        output.push_str("=== Influx Build Report ===\n\n");
        output.push_str(&format!("Timestamp: {}\n\n", report.timestamp));

        // Summary
        output.push_str("--- Summary ---\n");
        output.push_str(&format!("Passes:           {}\n", report.summary.total_passes));
        output.push_str(&format!("  Emitted:        {}\n", report.summary.emitted_passes));
        output.push_str(&format!(
            "Components:       {}\n",
            report.summary.components_ordered
        ));
        output.push_str(&format!(
            "Total Violations: {}\n",
            report.summary.total_violations
        ));
        output.push_str(&format!(
            "  Declaration:    {}\n",
            report.summary.declaration_count
        ));
        output.push_str(&format!("  Cycles:         {}\n", report.summary.cycle_count));
        output.push('\n');

        let status = if report.summary.passed {
            "PASSED"
        } else {
            "FAILED"
        };
        output.push_str(&format!("Status: {}\n\n", status));

        if !report.passes.is_empty() {
            output.push_str("--- Passes ---\n");
            for pass in &report.passes {
                let source = pass.source.as_deref().unwrap_or("-");
                output.push_str(&format!(
                    "  #{} {} ({} declarations, {})",
                    pass.pass, pass.outcome, pass.declarations, source
                ));
                if !pass.identities.is_empty() {
                    output.push_str(&format!(": {}", pass.identities.join(", ")));
                }
                output.push('\n');
            }
            output.push('\n');
        }

        if !report.violations.is_empty() {
            output.push_str("--- Violations ---\n");
            for v in &report.violations {
                output.push_str(&format!("  [{}] {} {}", v.severity, v.id, v.message));
                if let Some(location) = &v.location {
                    output.push_str(&format!(" at {}", location));
                }
                output.push('\n');
                if let Some(suggestion) = &v.suggestion {
                    output.push_str(&format!("      hint: {}\n", suggestion));
                }
            }
            output.push('\n');
        }

        output
    }
}
