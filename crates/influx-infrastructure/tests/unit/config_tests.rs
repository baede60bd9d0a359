//! Configuration Tests

use influx_infrastructure::config::{
    AppConfig, ConfigBuilder, ConfigLoader, ReportFormat,
};
use influx_infrastructure::constants::{
    DEFAULT_DECLARATION_EXTENSION, DEFAULT_MANIFEST_NAME, DEFAULT_REGISTRATION_DIR,
};
use std::path::PathBuf;
use tempfile::TempDir;

fn loader() -> ConfigLoader {
    ConfigLoader::new().with_env_prefix("INFLUX_UNIT_TEST_UNSET")
}

#[test]
fn test_default_config() {
    let config = AppConfig::default();
    assert_eq!(config.scan.extension, DEFAULT_DECLARATION_EXTENSION);
    assert_eq!(config.emit.manifest_name, DEFAULT_MANIFEST_NAME);
    assert_eq!(config.emit.registration_dir, DEFAULT_REGISTRATION_DIR);
    assert!(config.emit.enabled);
    assert_eq!(config.report.format, ReportFormat::Human);
}

#[test]
fn test_file_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("influx.toml");
    std::fs::write(
        &path,
        r#"
[scan]
input_dirs = ["decls", "more"]
extension = "decl"

[emit]
output_dir = "out"
enabled = false

[report]
format = "json"
"#,
    )
    .unwrap();

    let config = loader().with_config_path(&path).load().unwrap();

    assert_eq!(
        config.scan.input_dirs,
        vec![PathBuf::from("decls"), PathBuf::from("more")]
    );
    assert_eq!(config.scan.extension, "decl");
    assert_eq!(config.emit.output_dir, PathBuf::from("out"));
    assert!(!config.emit.enabled);
    assert_eq!(config.emit.manifest_name, DEFAULT_MANIFEST_NAME);
    assert_eq!(config.report.format, ReportFormat::Json);
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let result = loader()
        .with_config_path(dir.path().join("absent.toml"))
        .load();
    assert!(result.is_err());
}

#[test]
fn test_empty_extension_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("influx.toml");
    std::fs::write(&path, "[scan]\nextension = \"\"\n").unwrap();

    let err = loader().with_config_path(&path).load().unwrap_err();
    assert!(err.to_string().contains("extension"));
}

#[test]
fn test_empty_manifest_name_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("influx.toml");
    std::fs::write(&path, "[emit]\nmanifest_name = \"  \"\n").unwrap();

    let err = loader().with_config_path(&path).load().unwrap_err();
    assert!(err.to_string().contains("Manifest"));
}

#[test]
fn test_invalid_log_level_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("influx.toml");
    std::fs::write(&path, "[logging]\nlevel = \"loud\"\n").unwrap();

    assert!(loader().with_config_path(&path).load().is_err());
}

#[test]
fn test_save_then_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("saved.toml");
    let config = ConfigBuilder::new()
        .with_inputs(["a", "b"])
        .with_extension("decl")
        .with_output_dir("generated")
        .with_report_format(ReportFormat::Json)
        .build()
        .unwrap();

    loader().save_to_file(&config, &path).unwrap();
    let loaded = loader().with_config_path(&path).load().unwrap();

    assert_eq!(loaded, config);
}

#[test]
fn test_builder_validates() {
    assert!(ConfigBuilder::new().with_extension("").build().is_err());
    assert!(ConfigBuilder::new().with_extension(".toml").build().is_err());
}

#[test]
fn test_report_format_from_str() {
    assert_eq!("json".parse::<ReportFormat>().unwrap(), ReportFormat::Json);
    assert_eq!("HUMAN".parse::<ReportFormat>().unwrap(), ReportFormat::Human);
    assert!("yaml".parse::<ReportFormat>().is_err());
}
