//! Filesystem adapters: discover policy documents in directories and parse their JSON.
//!
//! This crate is allowed to do filesystem IO. Evaluation stays in `polguard-domain`.

#![forbid(unsafe_code)]

mod discover;
mod parse;

use camino::{Utf8Path, Utf8PathBuf};
use globset::GlobSet;
use polguard_domain::model::PolicyDocument;
use polguard_domain::source::{
    DocumentParser, DocumentSource, ParseError, RawDocument, SourceError,
};

pub use discover::{DEFAULT_INCLUDE, build_include_set, discover_documents};
pub use parse::parse_policy;

/// Fuzz-friendly API for testing parsing robustness without filesystem access.
pub mod fuzz {
    use super::*;

    /// Parse arbitrary bytes as a policy document. **Never panics** on any input.
    pub fn parse_policy_bytes(bytes: &[u8]) -> Result<(), ParseError> {
        let _ = parse::parse_policy(bytes)?;
        Ok(())
    }

    /// Build an include set and report which file names it selects. **Never panics.**
    pub fn include_matches(
        patterns: &[String],
        file_names: &[String],
    ) -> anyhow::Result<Vec<bool>> {
        let set = discover::build_include_set(patterns)?;
        Ok(file_names.iter().map(|name| set.is_match(name)).collect())
    }
}

/// Parser for JSON policy documents (`{"Statement": ...}`).
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonPolicyParser;

impl DocumentParser for JsonPolicyParser {
    fn parse(&self, bytes: &[u8]) -> Result<PolicyDocument, ParseError> {
        parse::parse_policy(bytes)
    }
}

/// A group of policy documents living directly inside one directory.
#[derive(Clone, Debug)]
pub struct DirectorySource {
    label: String,
    dir: Utf8PathBuf,
    include: GlobSet,
}

impl DirectorySource {
    pub fn new(label: impl Into<String>, dir: &Utf8Path, include: GlobSet) -> Self {
        Self {
            label: label.into(),
            dir: dir.to_path_buf(),
            include,
        }
    }

    pub fn dir(&self) -> &Utf8Path {
        &self.dir
    }
}

impl DocumentSource for DirectorySource {
    fn label(&self) -> &str {
        &self.label
    }

    fn documents(&self) -> Result<Vec<RawDocument>, SourceError> {
        let paths = discover::discover_documents(&self.dir, &self.include).map_err(|e| {
            SourceError {
                location: self.dir.to_string(),
                reason: format!("{e:#}"),
            }
        })?;

        tracing::debug!(group = %self.label, count = paths.len(), "discovered documents");

        Ok(paths
            .into_iter()
            .map(|path| RawDocument {
                id: path.file_name().unwrap_or(path.as_str()).to_string(),
                bytes: std::fs::read(&path).map_err(|e| ParseError::Io(e.to_string())),
            })
            .collect())
    }
}
