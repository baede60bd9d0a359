//! File declaration scanner
//!
//! Declarations are TOML documents holding `[[component]]` tables:
//!
//! ```toml
//! [[component]]
//! identity = "app.OrderService"
//! kind = "concrete"            # concrete | interface | abstract
//! no_arg_constructor = true
//! depends_on = ["app.OrderRepository"]
//! ```
//!
//! Every document is one pass. Documents are discovered once, up front, and
//! delivered in path order so repeated builds see the same sequence.

use crate::config::ScanConfig;
use crate::constants::COMPONENT_TABLE_HEADER;
use crate::error_ext::ErrorContext;
use crate::logging::log_document_discovered;
use influx_application::ports::{DeclarationBatch, DeclarationScanner};
use influx_domain::error::{Error, Result};
use influx_domain::value_objects::{
    ComponentDeclaration, ComponentIdentity, ComponentKind, SourceLocation,
};
use serde::Deserialize;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Parsed declaration document
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeclarationDocument {
    #[serde(default, rename = "component")]
    pub components: Vec<ComponentEntry>,
}

/// One `[[component]]` table
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComponentEntry {
    pub identity: ComponentIdentity,
    #[serde(default = "default_kind")]
    pub kind: ComponentKind,
    #[serde(default = "default_no_arg_constructor")]
    pub no_arg_constructor: bool,
    #[serde(default)]
    pub depends_on: Vec<ComponentIdentity>,
}

fn default_kind() -> ComponentKind {
    ComponentKind::Concrete
}

fn default_no_arg_constructor() -> bool {
    true
}

impl DeclarationDocument {
    /// Parse a document, attributing failures to `path`
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).scan_context(path)
    }

    /// Declarations with source locations pointing at their tables
    pub fn into_declarations(self, content: &str, path: &Path) -> Vec<ComponentDeclaration> {
        let header_lines = component_header_lines(content);
        self.components
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                let location = match header_lines.get(index) {
                    Some(&line) => SourceLocation::at_line(path, line),
                    None => SourceLocation::file(path),
                };
                ComponentDeclaration::new(entry.identity, entry.kind, entry.no_arg_constructor)
                    .with_dependencies(entry.depends_on)
                    .with_location(location)
            })
            .collect()
    }
}

/// 1-based line numbers of every `[[component]]` header
fn component_header_lines(content: &str) -> Vec<usize> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| is_component_header(line))
        .map(|(index, _)| index + 1)
        .collect()
}

/// Whether a line opens a component table, ignoring whitespace inside the
/// brackets and a trailing comment
fn is_component_header(line: &str) -> bool {
    let code = line.split('#').next().unwrap_or_default();
    let compact: String = code.chars().filter(|c| !c.is_whitespace()).collect();
    compact == COMPONENT_TABLE_HEADER
}

/// Scanner over declaration documents on disk
#[derive(Debug, Clone)]
pub struct FileDeclarationScanner {
    pending: VecDeque<PathBuf>,
}

impl FileDeclarationScanner {
    /// Discover every document under `inputs` with the given extension
    ///
    /// Inputs may be files (taken as is) or directories (walked
    /// recursively). A missing input is a scan error.
    pub fn discover<P: AsRef<Path>>(inputs: &[P], extension: &str) -> Result<Self> {
        let mut paths = Vec::new();
        for input in inputs {
            let input = input.as_ref();
            if input.is_file() {
                paths.push(input.to_path_buf());
            } else if input.is_dir() {
                paths.extend(documents_under(input, extension)?);
            } else {
                return Err(Error::scan(input, "input path does not exist"));
            }
        }
        paths.sort();
        paths.dedup();
        for path in &paths {
            log_document_discovered(path);
        }
        debug!(documents = paths.len(), "Declaration discovery finished");

        Ok(Self {
            pending: paths.into(),
        })
    }

    /// Discover documents from configuration
    pub fn from_config(config: &ScanConfig) -> Result<Self> {
        Self::discover(&config.input_dirs, &config.extension)
    }

    /// Documents not yet delivered
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }

    fn read_document(path: &Path) -> Result<DeclarationBatch> {
        let content = std::fs::read_to_string(path)
            .map_err(|err| Error::scan(path, format!("cannot read document: {err}")))?;
        let declarations = DeclarationDocument::parse(&content, path)?
            .into_declarations(&content, path);
        Ok(DeclarationBatch::new(declarations).with_source(path.display().to_string()))
    }
}

fn documents_under(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in WalkDir::new(dir) {
        let entry = entry.map_err(|err| Error::scan(dir, err.to_string()))?;
        if entry.file_type().is_file()
            && entry.path().extension().is_some_and(|ext| ext == extension)
        {
            paths.push(entry.into_path());
        }
    }
    Ok(paths)
}

impl DeclarationScanner for FileDeclarationScanner {
    fn next_batch(&mut self) -> Result<Option<DeclarationBatch>> {
        let Some(path) = self.pending.pop_front() else {
            return Ok(None);
        };
        let batch = Self::read_document(&path)?;
        debug!(
            path = %path.display(),
            declarations = batch.len(),
            "Declaration document scanned"
        );
        Ok(Some(batch))
    }
}
