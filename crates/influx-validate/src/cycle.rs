//! Dependency Cycle Violations
//!
//! Reported when the resolver finds a closed `depends-on` loop. Only the
//! first cycle of a pass is reported.

use crate::violation_trait::{Severity, Violation, ViolationCategory};
use influx_domain::constants::VIOLATION_ID_DEPENDENCY_CYCLE;
use influx_domain::value_objects::{ComponentIdentity, format_cycle};
use serde::Serialize;

/// Cycle Violations
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum CycleViolation {
    /// `cycle` starts and ends at the same identity
    DependencyCycle { cycle: Vec<ComponentIdentity> },
}

impl CycleViolation {
    pub fn new(cycle: Vec<ComponentIdentity>) -> Self {
        Self::DependencyCycle { cycle }
    }

    /// The ordered cycle
    pub fn cycle(&self) -> &[ComponentIdentity] {
        match self {
            Self::DependencyCycle { cycle } => cycle,
        }
    }

    pub fn into_cycle(self) -> Vec<ComponentIdentity> {
        match self {
            Self::DependencyCycle { cycle } => cycle,
        }
    }

    fn is_self_loop(&self) -> bool {
        self.cycle().len() == 2
    }
}

impl std::fmt::Display for CycleViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DependencyCycle { cycle } if self.is_self_loop() => {
                write!(f, "Component {} depends on itself", cycle[0])
            }
            Self::DependencyCycle { cycle } => {
                write!(f, "Circular dependency: {}", format_cycle(cycle))
            }
        }
    }
}

impl Violation for CycleViolation {
    fn id(&self) -> &str {
        VIOLATION_ID_DEPENDENCY_CYCLE
    }

    fn reason_code(&self) -> &str {
        "DependencyCycle"
    }

    fn category(&self) -> ViolationCategory {
        ViolationCategory::Structure
    }

    fn severity(&self) -> Severity {
        Severity::Error
    }

    fn identities(&self) -> &[ComponentIdentity] {
        self.cycle()
    }

    fn suggestion(&self) -> Option<String> {
        if self.is_self_loop() {
            return Some(format!(
                "Remove {} from its own dependencies",
                self.cycle()[0]
            ));
        }
        Some("Remove one dependency of the cycle or extract the shared part into a separate component".to_string())
    }
}
