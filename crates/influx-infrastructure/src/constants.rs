//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Violation identifiers are defined in `influx_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "influx.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "influx";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "INFLUX";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "INFLUX_LOG";

/// Fallback file stem for the rolling log file
pub const DEFAULT_LOG_FILE_STEM: &str = "influx";

// ============================================================================
// SCAN CONSTANTS
// ============================================================================

/// Default directory searched for declaration documents
pub const DEFAULT_INPUT_DIR: &str = "components";

/// Extension of declaration documents
pub const DEFAULT_DECLARATION_EXTENSION: &str = "toml";

/// Table name of a component entry in a declaration document
pub const COMPONENT_TABLE_HEADER: &str = "[[component]]";

// ============================================================================
// EMIT CONSTANTS
// ============================================================================

/// Default root of generated artifacts
pub const DEFAULT_OUTPUT_DIR: &str = "target/influx";

/// Default service-locator manifest file name
pub const DEFAULT_MANIFEST_NAME: &str = "components.manifest";

/// Default directory (under the output dir) for registration artifacts
pub const DEFAULT_REGISTRATION_DIR: &str = "registrations";

/// Extension of a registration artifact
pub const REGISTRATION_EXTENSION: &str = "registration";

/// First line of every generated file
pub const GENERATED_HEADER: &str = "# Generated by influx. Do not edit.";
