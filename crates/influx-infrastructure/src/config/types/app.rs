//! Main application configuration

use super::logging::LoggingConfig;
use crate::constants::{
    DEFAULT_DECLARATION_EXTENSION, DEFAULT_INPUT_DIR, DEFAULT_MANIFEST_NAME, DEFAULT_OUTPUT_DIR,
    DEFAULT_REGISTRATION_DIR,
};
use influx_domain::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Where declaration documents are discovered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Files or directories to scan, walked recursively
    pub input_dirs: Vec<PathBuf>,
    /// Extension of declaration documents, without the dot
    pub extension: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            input_dirs: vec![PathBuf::from(DEFAULT_INPUT_DIR)],
            extension: DEFAULT_DECLARATION_EXTENSION.to_string(),
        }
    }
}

/// Where and whether artifacts are generated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmitConfig {
    /// Root directory of generated files
    pub output_dir: PathBuf,
    /// Service-locator manifest file name, relative to `output_dir`
    pub manifest_name: String,
    /// Registration artifact directory, relative to `output_dir`
    pub registration_dir: String,
    /// When false, passes are resolved but nothing is written
    pub enabled: bool,
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            manifest_name: DEFAULT_MANIFEST_NAME.to_string(),
            registration_dir: DEFAULT_REGISTRATION_DIR.to_string(),
            enabled: true,
        }
    }
}

/// Build report rendering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Human,
    Json,
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl FromStr for ReportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "human" | "text" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            other => Err(Error::invalid_argument(format!(
                "Unknown report format: {other}. Use human or json"
            ))),
        }
    }
}

/// Report configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub format: ReportFormat,
}

/// Application configuration root
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub scan: ScanConfig,
    pub emit: EmitConfig,
    pub report: ReportConfig,
}

impl EmitConfig {
    /// Absolute-or-relative path of the manifest file
    pub fn manifest_path(&self) -> PathBuf {
        self.output_dir.join(&self.manifest_name)
    }

    /// Directory holding registration artifacts
    pub fn registration_path(&self) -> PathBuf {
        self.output_dir.join(&self.registration_dir)
    }
}
