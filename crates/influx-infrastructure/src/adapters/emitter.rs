//! File artifact emitter
//!
//! Writes one registration artifact per component and a service-locator
//! manifest listing every component in dependency order:
//!
//! ```text
//! <output_dir>/
//!   <manifest_name>                     rewritten on every emission
//!   <registration_dir>/<identity>.registration   written once
//! ```
//!
//! A registration artifact is never regenerated: identities emitted earlier
//! in the build are skipped, and so are artifacts already present on disk.

use crate::config::EmitConfig;
use crate::constants::{GENERATED_HEADER, REGISTRATION_EXTENSION};
use crate::error_ext::ErrorContext;
use dashmap::DashSet;
use influx_application::ports::{ArtifactEmitter, EmitSummary};
use influx_domain::error::Result;
use influx_domain::value_objects::ComponentIdentity;
use serde::Serialize;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Body of a registration artifact
#[derive(Debug, Serialize)]
struct Registration<'a> {
    identity: &'a str,
    simple_name: &'a str,
}

/// Emitter writing registration artifacts and a manifest to disk
#[derive(Debug)]
pub struct FileArtifactEmitter {
    registration_dir: PathBuf,
    manifest_path: PathBuf,
    emitted: DashSet<ComponentIdentity>,
}

impl FileArtifactEmitter {
    pub fn new(config: &EmitConfig) -> Self {
        Self {
            registration_dir: config.registration_path(),
            manifest_path: config.manifest_path(),
            emitted: DashSet::new(),
        }
    }

    /// Path of the registration artifact for an identity
    pub fn registration_path(&self, identity: &ComponentIdentity) -> PathBuf {
        self.registration_dir.join(format!(
            "{}.{REGISTRATION_EXTENSION}",
            artifact_file_stem(identity)
        ))
    }

    pub fn manifest_path(&self) -> &Path {
        &self.manifest_path
    }

    /// Identities whose registration was handled in this build
    pub fn emitted_count(&self) -> usize {
        self.emitted.len()
    }

    fn write_registration(&self, identity: &ComponentIdentity) -> Result<bool> {
        let path = self.registration_path(identity);
        if path.exists() {
            trace!(identity = %identity, "Registration already exists");
            return Ok(false);
        }
        let registration = Registration {
            identity: identity.as_str(),
            simple_name: identity.simple_name(),
        };
        let body = toml::to_string(&registration).emit_context(format!(
            "Failed to serialize registration for {identity}"
        ))?;
        fs::write(&path, format!("{GENERATED_HEADER}\n{body}"))
            .emit_context(format!("Failed to write registration {}", path.display()))?;
        trace!(identity = %identity, path = %path.display(), "Registration written");
        Ok(true)
    }

    fn write_manifest(&self, order: &[ComponentIdentity]) -> Result<()> {
        let mut content = String::with_capacity(GENERATED_HEADER.len() + order.len() * 32);
        content.push_str(GENERATED_HEADER);
        content.push('\n');
        for identity in order {
            let _ = writeln!(content, "{identity}");
        }
        fs::write(&self.manifest_path, content).emit_context(format!(
            "Failed to write manifest {}",
            self.manifest_path.display()
        ))
    }
}

/// File stem for an identity
///
/// Path separators and other unsafe characters are percent-encoded per UTF-8
/// byte. `%` itself is encoded, so distinct identities never share a stem.
fn artifact_file_stem(identity: &ComponentIdentity) -> String {
    let mut stem = String::with_capacity(identity.as_str().len());
    for c in identity.as_str().chars() {
        if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-' | '$') {
            stem.push(c);
        } else {
            let mut buf = [0u8; 4];
            for byte in c.encode_utf8(&mut buf).bytes() {
                let _ = write!(stem, "%{byte:02X}");
            }
        }
    }
    stem
}

impl ArtifactEmitter for FileArtifactEmitter {
    fn emit(&self, order: &[ComponentIdentity]) -> Result<EmitSummary> {
        fs::create_dir_all(&self.registration_dir).emit_context(format!(
            "Failed to create {}",
            self.registration_dir.display()
        ))?;

        let mut summary = EmitSummary::default();
        for identity in order {
            if self.emitted.contains(identity) {
                summary.skipped += 1;
                continue;
            }
            if self.write_registration(identity)? {
                summary.written += 1;
            } else {
                summary.skipped += 1;
            }
            self.emitted.insert(identity.clone());
        }
        self.write_manifest(order)?;

        debug!(
            written = summary.written,
            skipped = summary.skipped,
            manifest = %self.manifest_path.display(),
            "Artifacts emitted"
        );
        Ok(summary)
    }
}

/// Emitter that writes nothing, used when emission is disabled
#[derive(Debug, Default)]
pub struct DryRunEmitter {
    emitted: DashSet<ComponentIdentity>,
}

impl DryRunEmitter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ArtifactEmitter for DryRunEmitter {
    fn emit(&self, order: &[ComponentIdentity]) -> Result<EmitSummary> {
        let mut summary = EmitSummary::default();
        for identity in order {
            if self.emitted.insert(identity.clone()) {
                summary.written += 1;
            } else {
                summary.skipped += 1;
            }
        }
        debug!(components = order.len(), "Dry run, nothing written");
        Ok(summary)
    }
}
