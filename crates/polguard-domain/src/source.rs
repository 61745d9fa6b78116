//! Collaborator seams: where documents come from and how their bytes become a model.
//!
//! Implementations live in `polguard-repo`; the orchestrator in `polguard-app` consumes
//! them through these traits.

use crate::model::PolicyDocument;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The bytes could not be read from the source.
    #[error("{0}")]
    Io(String),
    /// The bytes are not valid JSON.
    #[error("{0}")]
    Syntax(String),
    #[error("expected an object at the document root, found {found}")]
    NotAnObject { found: &'static str },
}

/// A source could not enumerate its documents at all.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("cannot list documents in {location}: {reason}")]
pub struct SourceError {
    pub location: String,
    pub reason: String,
}

/// One candidate document yielded by a source.
#[derive(Clone, Debug)]
pub struct RawDocument {
    pub id: String,
    pub bytes: Result<Vec<u8>, ParseError>,
}

/// A named group of candidate documents (typically one directory).
pub trait DocumentSource: Sync {
    fn label(&self) -> &str;

    /// Candidate documents in enumeration order. Non-candidates are never yielded.
    fn documents(&self) -> Result<Vec<RawDocument>, SourceError>;
}

pub trait DocumentParser: Sync {
    /// Parse raw bytes into a document, wrapping a bare statement object into a list.
    fn parse(&self, bytes: &[u8]) -> Result<PolicyDocument, ParseError>;
}
