//! Configuration
//!
//! Layered `figment` configuration: defaults, then `influx.toml`, then
//! `INFLUX_`-prefixed environment variables.

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::{AppConfig, EmitConfig, LoggingConfig, ReportConfig, ReportFormat, ScanConfig};
