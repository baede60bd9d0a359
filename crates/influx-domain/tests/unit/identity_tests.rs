//! Unit tests for component identities

use influx_domain::value_objects::ComponentIdentity;

#[test]
fn test_identity_rejects_blank_names() {
    assert!(ComponentIdentity::new("").is_err());
    assert!(ComponentIdentity::new("   ").is_err());
}

#[test]
fn test_identity_trims_surrounding_whitespace() {
    let id = ComponentIdentity::new("  app.Service ").unwrap();
    assert_eq!(id.as_str(), "app.Service");
}

#[test]
fn test_simple_name() {
    assert_eq!(
        ComponentIdentity::new("com.example.UserService")
            .unwrap()
            .simple_name(),
        "UserService"
    );
    assert_eq!(
        ComponentIdentity::new("crate::services::Mailer")
            .unwrap()
            .simple_name(),
        "Mailer"
    );
    assert_eq!(ComponentIdentity::new("Plain").unwrap().simple_name(), "Plain");
}

#[test]
fn test_identity_serializes_as_plain_string() {
    let id = ComponentIdentity::new("app.Service").unwrap();
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, "\"app.Service\"");

    let back: ComponentIdentity = serde_json::from_str(&json).unwrap();
    assert_eq!(back, id);
}

#[test]
fn test_identity_deserialization_rejects_blank() {
    let result: Result<ComponentIdentity, _> = serde_json::from_str("\"\"");
    assert!(result.is_err());
}
