//! # Infrastructure Layer
//!
//! Technical concerns around the build pipeline.
//!
//! ## Module Categories
//!
//! ### Configuration
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment configuration (defaults, TOML, environment) |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Adapters
//! | Module | Description |
//! |--------|-------------|
//! | [`adapters`] | File scanner, file emitter and diagnostic sinks |
//! | [`bootstrap`] | Pipeline wiring and whole-build entry point |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |

pub mod adapters;
pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

// Re-export commonly used types
pub use bootstrap::run_build;
pub use config::{AppConfig, ConfigLoader};
pub use error_ext::ErrorContext;
