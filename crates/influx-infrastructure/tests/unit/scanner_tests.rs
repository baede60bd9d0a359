//! Declaration Scanner Tests

use influx_application::ports::DeclarationScanner;
use influx_domain::error::Error;
use influx_domain::value_objects::{ComponentIdentity, ComponentKind, SourceLocation};
use influx_infrastructure::adapters::FileDeclarationScanner;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn id(name: &str) -> ComponentIdentity {
    ComponentIdentity::new(name).unwrap()
}

fn write(dir: &Path, relative: &str, content: &str) {
    let path = dir.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[test]
fn test_documents_are_delivered_in_path_order() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "b.toml", "[[component]]\nidentity = \"app.B\"\n");
    write(dir.path(), "a.toml", "[[component]]\nidentity = \"app.A\"\n");
    write(dir.path(), "nested/c.toml", "[[component]]\nidentity = \"app.C\"\n");
    write(dir.path(), "notes.txt", "not a declaration");

    let mut scanner = FileDeclarationScanner::discover(&[dir.path()], "toml").unwrap();
    assert_eq!(scanner.remaining(), 3);

    let mut delivered = Vec::new();
    while let Some(batch) = scanner.next_batch().unwrap() {
        delivered.push(batch.declarations[0].identity.clone());
    }
    assert_eq!(delivered, vec![id("app.A"), id("app.B"), id("app.C")]);
}

#[test]
fn test_document_fields_and_defaults() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "components.toml",
        r#"# services
[[component]]
identity = "app.OrderService"
depends_on = ["app.OrderRepository", "app.Clock"]

[[component]]
identity = "app.OrderRepository"
kind = "interface"
no_arg_constructor = false
"#,
    );
    let path = dir.path().join("components.toml");

    let mut scanner = FileDeclarationScanner::discover(&[&path], "toml").unwrap();
    let batch = scanner.next_batch().unwrap().unwrap();

    assert_eq!(batch.source, Some(path.display().to_string()));
    assert_eq!(batch.len(), 2);

    let service = &batch.declarations[0];
    assert_eq!(service.kind, ComponentKind::Concrete);
    assert!(service.has_no_arg_constructor);
    assert_eq!(service.dependencies, vec![id("app.OrderRepository"), id("app.Clock")]);
    assert_eq!(service.location, Some(SourceLocation::at_line(&path, 2)));

    let repository = &batch.declarations[1];
    assert_eq!(repository.kind, ComponentKind::Interface);
    assert!(!repository.has_no_arg_constructor);
    assert!(repository.dependencies.is_empty());
    assert_eq!(repository.location, Some(SourceLocation::at_line(&path, 6)));

    assert!(scanner.next_batch().unwrap().is_none());
}

#[test]
fn test_spaced_table_headers_keep_locations_aligned() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "spaced.toml",
        "[[ component ]]\nidentity = \"app.A\"\n\n[[component]] # second\nidentity = \"app.B\"\n",
    );
    let path = dir.path().join("spaced.toml");

    let mut scanner = FileDeclarationScanner::discover(&[&path], "toml").unwrap();
    let batch = scanner.next_batch().unwrap().unwrap();

    assert_eq!(batch.declarations[0].location, Some(SourceLocation::at_line(&path, 1)));
    assert_eq!(batch.declarations[1].location, Some(SourceLocation::at_line(&path, 4)));
}

#[test]
fn test_document_without_components_is_an_empty_batch() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "empty.toml", "# nothing declared yet\n");

    let mut scanner = FileDeclarationScanner::discover(&[dir.path()], "toml").unwrap();
    let batch = scanner.next_batch().unwrap().unwrap();
    assert!(batch.is_empty());
}

#[test]
fn test_malformed_document_is_a_scan_error() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "broken.toml", "[[component]\nidentity = ");

    let mut scanner = FileDeclarationScanner::discover(&[dir.path()], "toml").unwrap();
    match scanner.next_batch() {
        Err(Error::Scan { path, .. }) => assert!(path.ends_with("broken.toml")),
        other => panic!("Expected Scan error, got {other:?}"),
    }
}

#[test]
fn test_blank_identity_is_a_scan_error() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "blank.toml", "[[component]]\nidentity = \"   \"\n");

    let mut scanner = FileDeclarationScanner::discover(&[dir.path()], "toml").unwrap();
    assert!(matches!(scanner.next_batch(), Err(Error::Scan { .. })));
}

#[test]
fn test_unknown_field_is_a_scan_error() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "typo.toml",
        "[[component]]\nidentity = \"app.A\"\ndepend_on = [\"app.B\"]\n",
    );

    let mut scanner = FileDeclarationScanner::discover(&[dir.path()], "toml").unwrap();
    assert!(matches!(scanner.next_batch(), Err(Error::Scan { .. })));
}

#[test]
fn test_missing_input_is_a_scan_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("absent");

    let result = FileDeclarationScanner::discover(&[&missing], "toml");
    assert!(matches!(result, Err(Error::Scan { .. })));
}
