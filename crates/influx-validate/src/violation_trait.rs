//! Violation Trait
//!
//! Generic trait for every diagnostic the pipeline reports. Declaration
//! violations and dependency cycles both implement it, so sinks and
//! reporters handle them uniformly.

use influx_domain::value_objects::{ComponentIdentity, SourceLocation};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Severity level for violations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "ERROR"),
            Self::Warning => write!(f, "WARNING"),
            Self::Info => write!(f, "INFO"),
        }
    }
}

/// Category of violation for grouping in reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViolationCategory {
    /// Shape of a single declaration (kind, constructor)
    Declaration,
    /// Relations between declarations (cycles)
    Structure,
}

impl Display for ViolationCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Declaration => write!(f, "Declaration"),
            Self::Structure => write!(f, "Structure"),
        }
    }
}

/// Generic violation trait - all diagnostics implement this
pub trait Violation: Display + Send + Sync {
    /// Unique violation ID (e.g., "DI001")
    fn id(&self) -> &str;

    /// Machine-distinguishable reason code (e.g., "IsInterface")
    fn reason_code(&self) -> &str;

    /// Category for grouping in reports
    fn category(&self) -> ViolationCategory;

    /// Severity level
    fn severity(&self) -> Severity;

    /// Identities involved, in a meaningful order (a cycle is listed in
    /// traversal order, closed on its first identity)
    fn identities(&self) -> &[ComponentIdentity];

    /// Declaring source (if known)
    fn location(&self) -> Option<&SourceLocation> {
        None
    }

    /// Human-readable message describing the violation
    fn message(&self) -> String {
        self.to_string()
    }

    /// Suggested fix for the violation (if applicable)
    fn suggestion(&self) -> Option<String> {
        None
    }

    /// Convert to a boxed trait object for dynamic dispatch
    fn boxed(self) -> Box<dyn Violation>
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }
}
