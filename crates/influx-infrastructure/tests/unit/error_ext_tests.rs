//! Error Extension Tests

use influx_domain::error::{Error, Result};
use influx_infrastructure::error_ext::ErrorContext;
use std::io;
use std::path::Path;

#[test]
fn test_io_context() {
    let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");

    let result: Result<()> = Err(io_error).io_context("failed to read file");

    if let Err(Error::Io { source, message }) = result {
        assert!(message.contains("failed to read file"));
        assert!(message.contains("file not found"));
        assert!(source.is_some());
    } else {
        panic!("Expected Io error");
    }
}

#[test]
fn test_emit_context() {
    let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "read-only");

    let result: Result<()> = Err(io_error).emit_context("cannot write manifest");

    assert!(matches!(result, Err(Error::Emit { source: Some(_), .. })));
}

#[test]
fn test_scan_context_keeps_path() {
    let io_error = io::Error::new(io::ErrorKind::InvalidData, "bad bytes");

    let result: Result<()> = Err(io_error).scan_context(Path::new("decls/app.toml"));

    match result {
        Err(Error::Scan { path, message }) => {
            assert_eq!(path, Path::new("decls/app.toml"));
            assert_eq!(message, "bad bytes");
        }
        other => panic!("Expected Scan error, got {other:?}"),
    }
}

#[test]
fn test_with_context_is_lazy() {
    let ok: std::result::Result<u8, io::Error> = Ok(1);
    let value = ok
        .with_context(|| -> String { panic!("context must not be built on success") })
        .unwrap();
    assert_eq!(value, 1);
}
