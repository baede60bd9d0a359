//! Artifact Emitter Tests

use influx_application::ports::{ArtifactEmitter, EmitSummary};
use influx_domain::value_objects::ComponentIdentity;
use influx_infrastructure::adapters::{DryRunEmitter, FileArtifactEmitter};
use influx_infrastructure::config::EmitConfig;
use influx_infrastructure::constants::GENERATED_HEADER;
use serde::Deserialize;
use std::fs;
use tempfile::TempDir;

#[derive(Debug, Deserialize)]
struct RegistrationFile {
    identity: String,
    simple_name: String,
}

fn read_registration(emitter: &FileArtifactEmitter, identity: &ComponentIdentity) -> RegistrationFile {
    let content = fs::read_to_string(emitter.registration_path(identity)).unwrap();
    assert!(content.starts_with(GENERATED_HEADER));
    toml::from_str(&content).unwrap()
}

fn ids(names: &[&str]) -> Vec<ComponentIdentity> {
    names
        .iter()
        .map(|n| ComponentIdentity::new(*n).unwrap())
        .collect()
}

fn config(dir: &TempDir) -> EmitConfig {
    EmitConfig {
        output_dir: dir.path().join("out"),
        ..EmitConfig::default()
    }
}

fn manifest_lines(emitter: &FileArtifactEmitter) -> Vec<String> {
    fs::read_to_string(emitter.manifest_path())
        .unwrap()
        .lines()
        .skip(1)
        .map(str::to_string)
        .collect()
}

#[test]
fn test_emit_writes_registrations_and_manifest() {
    let dir = TempDir::new().unwrap();
    let emitter = FileArtifactEmitter::new(&config(&dir));
    let order = ids(&["app.Repo", "app.Service"]);

    let summary = emitter.emit(&order).unwrap();

    assert_eq!(
        summary,
        EmitSummary {
            written: 2,
            skipped: 0
        }
    );
    for identity in &order {
        let registration = read_registration(&emitter, identity);
        assert_eq!(registration.identity, identity.as_str());
        assert_eq!(registration.simple_name, identity.simple_name());
    }
    assert_eq!(manifest_lines(&emitter), vec!["app.Repo", "app.Service"]);
}

#[test]
fn test_later_emission_only_writes_new_components() {
    let dir = TempDir::new().unwrap();
    let emitter = FileArtifactEmitter::new(&config(&dir));

    emitter.emit(&ids(&["app.Repo"])).unwrap();
    let summary = emitter.emit(&ids(&["app.Repo", "app.Service"])).unwrap();

    assert_eq!(summary.written, 1);
    assert_eq!(summary.skipped, 1);
    assert_eq!(emitter.emitted_count(), 2);
    assert_eq!(manifest_lines(&emitter), vec!["app.Repo", "app.Service"]);
}

#[test]
fn test_existing_artifact_is_never_overwritten() {
    let dir = TempDir::new().unwrap();
    let emitter = FileArtifactEmitter::new(&config(&dir));
    let order = ids(&["app.Repo"]);
    let path = emitter.registration_path(&order[0]);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "hand written").unwrap();

    let summary = emitter.emit(&order).unwrap();

    assert_eq!(summary.skipped, 1);
    assert_eq!(fs::read_to_string(&path).unwrap(), "hand written");
}

#[test]
fn test_dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let emitter = DryRunEmitter::new();

    let first = emitter.emit(&ids(&["app.A"])).unwrap();
    let second = emitter.emit(&ids(&["app.A", "app.B"])).unwrap();

    assert_eq!(first.written, 1);
    assert_eq!((second.written, second.skipped), (1, 1));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_identities_with_similar_names_get_separate_artifacts() {
    let dir = TempDir::new().unwrap();
    let emitter = FileArtifactEmitter::new(&config(&dir));
    let order = ids(&["app::Service", "app__Service", "app/Service"]);

    let summary = emitter.emit(&order).unwrap();

    assert_eq!(summary.written, 3);
    assert_eq!(summary.skipped, 0);
    for identity in &order {
        assert_eq!(read_registration(&emitter, identity).identity, identity.as_str());
    }
    let registrations = fs::read_dir(emitter.registration_path(&order[0]).parent().unwrap())
        .unwrap()
        .count();
    assert_eq!(registrations, 3);
}

#[test]
fn test_registration_escapes_quotes_and_newlines() {
    let dir = TempDir::new().unwrap();
    let emitter = FileArtifactEmitter::new(&config(&dir));
    let order = ids(&["app.\"Quoted\"", "app.Back\\slash", "app.Multi\nLine"]);

    emitter.emit(&order).unwrap();

    for identity in &order {
        let registration = read_registration(&emitter, identity);
        assert_eq!(registration.identity, identity.as_str());
        assert_eq!(registration.simple_name, identity.simple_name());
    }
}
