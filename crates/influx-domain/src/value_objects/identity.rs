//! Component identity value object

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Globally unique, stable key for a declared component
///
/// Equivalent to a fully-qualified type name. Used as the graph vertex key
/// and as the identity cache key; immutable once created.
///
/// # Example
///
/// ```
/// use influx_domain::value_objects::ComponentIdentity;
///
/// let id = ComponentIdentity::new("com.example.UserService").unwrap();
/// assert_eq!(id.as_str(), "com.example.UserService");
/// assert_eq!(id.simple_name(), "UserService");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ComponentIdentity(String);

impl ComponentIdentity {
    /// Create an identity, rejecting blank names
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(Error::invalid_argument(
                "component identity cannot be empty",
            ));
        }
        if trimmed.len() != name.len() {
            return Ok(Self(trimmed.to_string()));
        }
        Ok(Self(name))
    }

    /// The fully-qualified name
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Last segment of the qualified name (after the final `.` or `::`)
    pub fn simple_name(&self) -> &str {
        let after_dot = self.0.rsplit('.').next().unwrap_or(&self.0);
        after_dot.rsplit("::").next().unwrap_or(after_dot)
    }
}

impl fmt::Display for ComponentIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ComponentIdentity {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ComponentIdentity {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for ComponentIdentity {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl From<ComponentIdentity> for String {
    fn from(value: ComponentIdentity) -> Self {
        value.0
    }
}
