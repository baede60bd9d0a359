//! Configuration loader
//!
//! Handles loading configuration from TOML files, environment variables and
//! default values, merged with Figment.

use crate::config::{AppConfig, EmitConfig, LoggingConfig, ReportFormat, ScanConfig};
use crate::constants::{
    CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME,
};
use crate::error_ext::ErrorContext;
use crate::logging::log_config_loaded;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use influx_domain::error::{Error, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Configuration sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (explicit path, or the first default location found)
    /// 3. Environment variables with prefix (e.g., `INFLUX_EMIT__OUTPUT_DIR`)
    ///
    /// An explicit path that does not exist is an error; a missing default
    /// file is not.
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path {
            if !config_path.exists() {
                log_config_loaded(config_path, false);
                return Err(Error::config(format!(
                    "Configuration file not found: {}",
                    config_path.display()
                )));
            }
            figment = figment.merge(Toml::file(config_path));
            log_config_loaded(config_path, true);
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            log_config_loaded(&default_path, true);
        }

        // Nested keys use a double underscore (e.g., INFLUX_SCAN__EXTENSION)
        figment = figment.merge(
            Env::prefixed(&format!("{}_", self.env_prefix)).split(CONFIG_ENV_SEPARATOR),
        );

        let app_config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_app_config(&app_config)?;

        Ok(app_config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).config_context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string).io_context(format!(
            "Failed to write config file {}",
            path.as_ref().display()
        ))?;

        Ok(())
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// First default configuration file that exists
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let mut candidates = vec![
            current_dir.join(DEFAULT_CONFIG_FILENAME),
            current_dir
                .join(DEFAULT_CONFIG_DIR)
                .join(DEFAULT_CONFIG_FILENAME),
        ];
        if let Some(config_dir) = dirs::config_dir() {
            candidates.push(config_dir.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME));
        }

        candidates.into_iter().find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate application configuration
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_scan_config(&config.scan)?;
    validate_emit_config(&config.emit)?;
    crate::logging::parse_log_level(&config.logging.level)?;
    Ok(())
}

fn validate_scan_config(config: &ScanConfig) -> Result<()> {
    if config.extension.trim().is_empty() {
        return Err(Error::Configuration {
            message: "Declaration file extension cannot be empty".to_string(),
            source: None,
        });
    }
    if config.extension.starts_with('.') {
        return Err(Error::Configuration {
            message: format!(
                "Declaration file extension must not start with a dot: {}",
                config.extension
            ),
            source: None,
        });
    }
    Ok(())
}

fn validate_emit_config(config: &EmitConfig) -> Result<()> {
    if config.manifest_name.trim().is_empty() {
        return Err(Error::Configuration {
            message: "Manifest file name cannot be empty".to_string(),
            source: None,
        });
    }
    if config.registration_dir == config.manifest_name {
        return Err(Error::Configuration {
            message: "Manifest and registration directory cannot share a name".to_string(),
            source: None,
        });
    }
    Ok(())
}

/// Configuration builder for programmatic configuration
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config: AppConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set logging configuration
    pub fn with_logging(mut self, logging: LoggingConfig) -> Self {
        self.config.logging = logging;
        self
    }

    /// Replace the scanned inputs
    pub fn with_inputs<I, P>(mut self, inputs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.config.scan.input_dirs = inputs.into_iter().map(Into::into).collect();
        self
    }

    /// Set the declaration document extension
    pub fn with_extension<S: Into<String>>(mut self, extension: S) -> Self {
        self.config.scan.extension = extension.into();
        self
    }

    /// Set the artifact output directory
    pub fn with_output_dir<P: Into<PathBuf>>(mut self, output_dir: P) -> Self {
        self.config.emit.output_dir = output_dir.into();
        self
    }

    /// Enable or disable artifact generation
    pub fn with_emit_enabled(mut self, enabled: bool) -> Self {
        self.config.emit.enabled = enabled;
        self
    }

    /// Set the report format
    pub fn with_report_format(mut self, format: ReportFormat) -> Self {
        self.config.report.format = format;
        self
    }

    /// Validate and build the configuration
    pub fn build(self) -> Result<AppConfig> {
        validate_app_config(&self.config)?;
        Ok(self.config)
    }
}
